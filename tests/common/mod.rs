#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use permit_pdf::{CategoryView, PermitExporter, PipelineError};
use permit_pdf::{InMemoryPermitSource, Permit, sink::DirectorySink};
use std::path::Path;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text shown on `page` (1-based), one entry per text run.
    pub fn page_text(&self, page: u32) -> Vec<String> {
        pdf_assertions::page_text_runs(&self.doc, page)
    }

    /// Text of every page, in page order.
    pub fn all_text(&self) -> Vec<String> {
        (1..=self.page_count() as u32)
            .flat_map(|page| self.page_text(page))
            .collect()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Renders `permit` with categories in first-appearance order.
pub fn render_permit(permit: &Permit) -> Result<GeneratedPdf, PipelineError> {
    let view = CategoryView::group(&permit.items);
    render_permit_with_view(permit, &view)
}

pub fn render_permit_with_view(
    permit: &Permit,
    view: &CategoryView,
) -> Result<GeneratedPdf, PipelineError> {
    let exporter = exporter_for(vec![], Path::new("."));
    let (bytes, _) = exporter.render_permit(permit, view)?;
    GeneratedPdf::from_bytes(bytes).map_err(|e| PipelineError::Io(std::io::Error::other(e.to_string())))
}

/// An exporter serving `permits` from memory and writing into `dir`.
pub fn exporter_for(permits: Vec<Permit>, dir: &Path) -> PermitExporter {
    PermitExporter::new(
        Box::new(InMemoryPermitSource::new(permits)),
        Box::new(DirectorySink::new(dir)),
    )
}
