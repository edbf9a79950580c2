//! Core rendering abstractions for permit PDF generation.
//!
//! This crate provides the pieces every rendering backend shares:
//! - `DocumentRenderer` trait for abstracting PDF writing operations
//! - `RenderError`
//! - text encoding and colour conversion helpers

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::{DocumentRenderer, render_document};
