//! Newtype wrappers for the string keys that identify permits and categories.
//!
//! Both are plain strings on the wire, but keeping them apart stops a category
//! key from being passed where a permit number is expected.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The number a permit is looked up by (`numero_permissao` on the wire).
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(transparent)]
pub struct PermitNumber(String);

impl PermitNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

// Some backends send the permit number as a JSON number.
impl<'de> Deserialize<'de> for PermitNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumberDef {
            Str(String),
            Int(i64),
        }

        Ok(match NumberDef::deserialize(deserializer)? {
            NumberDef::Str(s) => Self(s),
            NumberDef::Int(n) => Self(n.to_string()),
        })
    }
}

impl From<String> for PermitNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PermitNumber {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for PermitNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PermitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The category an item is grouped under (`categoria` on the wire).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CategoryName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CategoryName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
