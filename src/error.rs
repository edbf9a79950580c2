// src/error.rs
use permit_layout::LayoutError;
use permit_render_core::RenderError;
use permit_source::SourceError;
use permit_types::PermitError;
use thiserror::Error;

/// A comprehensive error type for the whole export pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Fetching the permit failed: {0}")]
    Source(#[from] SourceError),

    #[error("Permit is not usable: {0}")]
    Permit(#[from] PermitError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration is invalid: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
