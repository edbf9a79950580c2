//! Resolution of signature images.
//!
//! A signature reaches the engine in one of two shapes: bytes that were
//! already decoded, or the string a canvas export produces, which is a
//! `data:image/png;base64,...` URL. A bare base64 payload without the
//! `data:` prefix is accepted too, since that is how some backends store it.

use crate::LayoutError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

#[derive(Debug, Clone, PartialEq)]
pub enum SignatureSource {
    Bytes(Vec<u8>),
    /// A `data:` URL or a bare base64 string.
    Encoded(String),
}

impl SignatureSource {
    /// Returns the raw image bytes, decoding the textual form if needed.
    pub fn resolve(&self) -> Result<Vec<u8>, LayoutError> {
        match self {
            SignatureSource::Bytes(bytes) => Ok(bytes.clone()),
            SignatureSource::Encoded(text) => decode_data_url(text),
        }
    }
}

impl From<Vec<u8>> for SignatureSource {
    fn from(bytes: Vec<u8>) -> Self {
        SignatureSource::Bytes(bytes)
    }
}

impl From<&str> for SignatureSource {
    fn from(text: &str) -> Self {
        SignatureSource::Encoded(text.to_string())
    }
}

impl From<String> for SignatureSource {
    fn from(text: String) -> Self {
        SignatureSource::Encoded(text)
    }
}

/// Decodes a base64 `data:` URL (or a bare base64 payload) into bytes.
pub fn decode_data_url(text: &str) -> Result<Vec<u8>, LayoutError> {
    let text = text.trim();
    let payload = match text.strip_prefix("data:") {
        Some(rest) => {
            let (meta, payload) = rest
                .split_once(',')
                .ok_or_else(|| LayoutError::Signature("data URL has no ',' separator".into()))?;
            if !meta.ends_with(";base64") {
                return Err(LayoutError::Signature(format!(
                    "only base64 data URLs are supported, got '{meta}'"
                )));
            }
            payload
        }
        None => text,
    };

    // Payloads copied out of JSON or email are often line-wrapped.
    let cleaned: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| LayoutError::Signature(e.to_string()))
}
