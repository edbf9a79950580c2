//! The export pipeline: fetch, group, plan, lay out, render, save.

use crate::config::ExporterConfig;
use crate::error::PipelineError;
use crate::report::{ReportPlan, ReportStyle};
use crate::sink::{DEFAULT_FILE_NAME, DirectorySink, OutputSink};
use crate::view::CategoryView;
use permit_layout::LayoutConfig;
use permit_render_lopdf::LopdfRenderer;
use permit_source::{HttpPermitSource, PermitSource};
use permit_types::{Permit, PermitNumber};
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

/// What to export and how.
#[derive(Debug, Clone, Default)]
pub struct ExportRequest {
    pub number: PermitNumber,
    /// A signature to attach before exporting, as a PNG data URL or bare base64.
    pub signature: Option<String>,
    /// Overrides the exporter's default file name.
    pub file_name: Option<String>,
    /// Categories to put first, in this order.
    pub category_order: Vec<String>,
}

impl ExportRequest {
    pub fn new(number: impl Into<PermitNumber>) -> Self {
        Self {
            number: number.into(),
            ..Self::default()
        }
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_category_order<S: Into<String>>(mut self, order: impl IntoIterator<Item = S>) -> Self {
        self.category_order = order.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub page_count: usize,
    pub bytes: usize,
}

pub struct PermitExporter {
    source: Box<dyn PermitSource>,
    sink: Box<dyn OutputSink>,
    style: ReportStyle,
    layout: LayoutConfig,
    default_file_name: String,
}

impl PermitExporter {
    pub fn new(source: Box<dyn PermitSource>, sink: Box<dyn OutputSink>) -> Self {
        Self {
            source,
            sink,
            style: ReportStyle::default(),
            layout: LayoutConfig::default(),
            default_file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Builds an exporter that reads from the configured backend and writes
    /// into the configured output directory.
    pub fn from_config(config: &ExporterConfig) -> Result<Self, PipelineError> {
        let source = HttpPermitSource::new(&config.api.base_url, config.api.timeout())?;
        let sink = DirectorySink::new(&config.output.directory);
        Ok(Self::new(Box::new(source), Box::new(sink))
            .with_style(config.report.clone())
            .with_default_file_name(config.output.file_name.clone()))
    }

    pub fn with_style(mut self, style: ReportStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_layout_config(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_default_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.default_file_name = file_name.into();
        self
    }

    pub async fn list(&self) -> Result<Vec<PermitNumber>, PipelineError> {
        Ok(self.source.list_permit_numbers().await?)
    }

    pub async fn export(&self, request: &ExportRequest) -> Result<ExportOutcome, PipelineError> {
        let start = Instant::now();
        log::info!("Fetching permit {}", request.number);
        let mut permit = self.source.fetch_permit(&request.number).await?;

        if let Some(signature) = &request.signature {
            permit.apply_signature(signature.as_str())?;
        }

        let mut view = CategoryView::group(&permit.items);
        if !request.category_order.is_empty() {
            view.order_by(request.category_order.as_slice());
        }

        let (bytes, page_count) = self.render_permit(&permit, &view)?;
        let file_name = request
            .file_name
            .as_deref()
            .unwrap_or(&self.default_file_name);
        let path = self.sink.save(file_name, &bytes).await?;

        log::info!(
            "Exported permit {} ({} page(s)) in {:.2?}",
            permit.number,
            page_count,
            start.elapsed()
        );
        Ok(ExportOutcome {
            path,
            page_count,
            bytes: bytes.len(),
        })
    }

    /// Lays out and renders `permit` with categories in `view` order.
    ///
    /// Returns the PDF bytes and the page count.
    pub fn render_permit(
        &self,
        permit: &Permit,
        view: &CategoryView,
    ) -> Result<(Vec<u8>, usize), PipelineError> {
        let plan = ReportPlan::compose(permit, view, &self.style);
        let document = plan.layout(self.layout)?;
        let page_count = document.page_count();
        log::debug!(
            "Permit {} laid out, ~{} KiB in memory",
            permit.number,
            document.rough_heap_size() / 1024
        );

        let bytes = LopdfRenderer::<Cursor<Vec<u8>>>::new()
            .with_title(permit.name.clone())
            .render_to_bytes(&document)?;
        Ok((bytes, page_count))
    }
}
