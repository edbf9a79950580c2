//! Typed permit records as served by the permit backend.
//!
//! Field names on the wire are Portuguese (`numero_permissao`, `itens`,
//! `categoria`, `valor`); the Rust side uses English names and maps them with
//! serde renames. Records are validated once, right after deserialization.

use crate::ids::{CategoryName, PermitNumber};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The reserved category whose item value holds a signature image.
pub const SIGNATURE_CATEGORY: &str = "Assinatura";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PermitError {
    #[error("Permit is missing a value for '{0}'")]
    MissingField(&'static str),
    #[error("Item {index} ('{label}') has an empty category")]
    EmptyCategory { index: usize, label: String },
    #[error("Permit {0} has no 'Assinatura' item to sign")]
    NoSignatureField(PermitNumber),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permit {
    #[serde(rename = "numero_permissao")]
    pub number: PermitNumber,
    #[serde(rename = "nome_permissao")]
    pub name: String,
    #[serde(rename = "itens", default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "categoria")]
    pub category: CategoryName,
    #[serde(rename = "item")]
    pub label: String,
    /// `None` when the question has not been answered yet.
    #[serde(rename = "valor", default)]
    pub value: Option<String>,
}

impl Item {
    pub fn new(category: impl Into<CategoryName>, label: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            category: category.into(),
            label: label.into(),
            value: value.map(str::to_string),
        }
    }

    pub fn is_signature(&self) -> bool {
        self.category.as_str() == SIGNATURE_CATEGORY
    }
}

impl Permit {
    /// Checks the shape guarantees the rest of the pipeline relies on.
    pub fn validate(&self) -> Result<(), PermitError> {
        if self.number.is_blank() {
            return Err(PermitError::MissingField("numero_permissao"));
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.category.as_str().trim().is_empty() {
                return Err(PermitError::EmptyCategory {
                    index,
                    label: item.label.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn has_signature_category(&self) -> bool {
        self.items.iter().any(Item::is_signature)
    }

    pub fn signature_item(&self) -> Option<&Item> {
        self.items.iter().find(|item| item.is_signature())
    }

    /// True once the signature item carries an image.
    pub fn is_signed(&self) -> bool {
        self.signature_item()
            .is_some_and(|item| item.value.is_some())
    }

    /// Stores a captured signature (a PNG data URL) on the signature item.
    pub fn apply_signature(&mut self, signature: impl Into<String>) -> Result<(), PermitError> {
        let number = self.number.clone();
        let item = self
            .items
            .iter_mut()
            .find(|item| item.is_signature())
            .ok_or(PermitError::NoSignatureField(number))?;
        item.value = Some(signature.into());
        Ok(())
    }
}
