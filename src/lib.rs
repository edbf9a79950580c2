//! Work-permit PDF exporter.
//!
//! A permit is fetched from a [`PermitSource`], its items are grouped into a
//! [`CategoryView`], a [`ReportPlan`] resolves the draw operations, and the
//! layout engine and lopdf renderer turn them into a PDF that an
//! [`OutputSink`] stores.

pub mod config;
pub mod error;
pub mod exporter;
pub mod report;
pub mod sink;
pub mod view;

pub use config::ExporterConfig;
pub use error::PipelineError;
pub use exporter::{ExportOutcome, ExportRequest, PermitExporter};
pub use report::{DrawOp, ReportPlan, ReportStyle};
pub use sink::{DEFAULT_FILE_NAME, DirectorySink, OutputSink};
pub use view::CategoryView;

pub use permit_layout::{
    LaidOutDocument, LayoutConfig, LayoutElement, LayoutEngine, LayoutError, SignatureSource,
};
pub use permit_source::{HttpPermitSource, InMemoryPermitSource, PermitSource, SourceError};
pub use permit_types::{Item, Permit, PermitError, PermitNumber, SIGNATURE_CATEGORY};
