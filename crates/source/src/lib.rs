//! Permit source abstractions for the exporter.
//!
//! This crate provides the `PermitSource` trait and the implementations the
//! exporter fetches permits through.
//!
//! ## Available Sources
//!
//! - `HttpPermitSource`: the permit backend's REST API
//! - `InMemoryPermitSource`: a fixed set of permits, for tests and offline use
//!
//! Every permit leaves a source already validated, so downstream code can rely
//! on the shape guarantees of [`Permit::validate`].

mod http;
mod memory;

pub use http::HttpPermitSource;
pub use memory::InMemoryPermitSource;

use async_trait::async_trait;
use permit_types::{Permit, PermitError, PermitNumber};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP status {status}")]
    Status { url: String, status: u16 },
    #[error("Response from {url} could not be decoded: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid backend URL '{0}'")]
    InvalidBaseUrl(String),
    #[error("Permit number must not be blank")]
    InvalidNumber,
    #[error("Permit {0} was not found")]
    NotFound(PermitNumber),
    #[error("Permit {number} is malformed: {source}")]
    Invalid {
        number: PermitNumber,
        #[source]
        source: PermitError,
    },
}

/// A place permits can be read from.
#[async_trait]
pub trait PermitSource: Send + Sync {
    /// Fetches one permit by number.
    async fn fetch_permit(&self, number: &PermitNumber) -> Result<Permit, SourceError>;

    /// Lists the numbers of every permit the source knows.
    async fn list_permit_numbers(&self) -> Result<Vec<PermitNumber>, SourceError>;
}

/// Rejects blank numbers before any lookup is made.
pub(crate) fn check_number(number: &PermitNumber) -> Result<(), SourceError> {
    if number.is_blank() {
        Err(SourceError::InvalidNumber)
    } else {
        Ok(())
    }
}

/// Validates a permit fresh out of a source.
pub(crate) fn validated(permit: Permit) -> Result<Permit, SourceError> {
    permit.validate().map_err(|source| SourceError::Invalid {
        number: permit.number.clone(),
        source,
    })?;
    Ok(permit)
}
