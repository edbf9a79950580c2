use crate::{PermitSource, SourceError, check_number, validated};
use async_trait::async_trait;
use permit_types::{Permit, PermitNumber};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

/// Reads permits from the backend's REST API.
///
/// - `GET {base}/{number}` returns one permit
/// - `GET {base}/numeros` returns the list of permit numbers
#[derive(Debug, Clone)]
pub struct HttpPermitSource {
    client: Client,
    base_url: Url,
}

impl HttpPermitSource {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3000/api/permissoes";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| SourceError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(SourceError::InvalidBaseUrl(base_url.to_string()));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| SourceError::Http {
                url: base_url.to_string(),
                source,
            })?;
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends one path segment to the base URL, percent-encoding it.
    fn endpoint(&self, segment: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }

    /// GETs `url` and parses the body as JSON. A 404 yields `None`.
    async fn get_json(&self, url: Url) -> Result<Option<Value>, SourceError> {
        log::info!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| SourceError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| SourceError::Http {
            url: url.to_string(),
            source,
        })?;
        let value = serde_json::from_slice(&body).map_err(|source| SourceError::Decode {
            url: url.to_string(),
            source,
        })?;
        Ok(Some(value))
    }
}

#[async_trait]
impl PermitSource for HttpPermitSource {
    async fn fetch_permit(&self, number: &PermitNumber) -> Result<Permit, SourceError> {
        check_number(number)?;
        let url = self.endpoint(number.as_str());
        let value = match self.get_json(url.clone()).await? {
            // The backend answers unknown numbers with 404 or an empty body.
            None | Some(Value::Null) => return Err(SourceError::NotFound(number.clone())),
            Some(value) => value,
        };
        let permit: Permit = serde_json::from_value(value).map_err(|source| SourceError::Decode {
            url: url.to_string(),
            source,
        })?;
        log::debug!("Fetched permit {} with {} item(s)", permit.number, permit.items.len());
        validated(permit)
    }

    async fn list_permit_numbers(&self) -> Result<Vec<PermitNumber>, SourceError> {
        let url = self.endpoint("numeros");
        let Some(value) = self.get_json(url.clone()).await? else {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND.as_u16(),
            });
        };
        serde_json::from_value(value).map_err(|source| SourceError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
