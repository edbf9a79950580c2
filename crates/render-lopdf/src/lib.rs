//! PDF renderer for laid-out permit documents using lopdf.
//!
//! Pages are turned into content streams and buffered by
//! [`StreamingPdfWriter`], which writes the final file with a classic
//! cross-reference table.

mod helpers;
mod renderer;
mod writer;

pub use helpers::{image_resource_name, render_elements_to_content};
pub use renderer::LopdfRenderer;
pub use writer::StreamingPdfWriter;

use permit_layout::LaidOutDocument;
use permit_render_core::RenderError;
use std::io::Cursor;

/// Renders `document` to an in-memory PDF.
pub fn render_to_bytes(document: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
    LopdfRenderer::<Cursor<Vec<u8>>>::new().render_to_bytes(document)
}

#[cfg(test)]
mod tests;
