use crate::error::RenderError;
use lopdf::ObjectId;
use permit_layout::{DecodedImage, LaidOutDocument, PositionedElement, Size};
use std::io::{Seek, Write};

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// Callers drive it in order: `begin_document`, `add_images`, then for each
/// page `render_page_content` followed by `write_page_object`, and finally
/// `finish` with the page ids in document order.
pub trait DocumentRenderer<W: Write + Seek + Send> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError>;

    /// Registers the decoded rasters pages refer to by `image_index`.
    fn add_images(&mut self, images: &[DecodedImage]) -> Result<(), RenderError>;

    fn render_page_content(
        &mut self,
        elements: &[PositionedElement],
        page_size: Size,
    ) -> Result<ObjectId, RenderError>;

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_size: Size,
    ) -> Result<ObjectId, RenderError>;

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError>;
}

/// Drives `renderer` over a laid-out document, one content stream per page.
pub fn render_document<W: Write + Seek + Send>(
    mut renderer: Box<dyn DocumentRenderer<W>>,
    document: &LaidOutDocument,
    writer: W,
) -> Result<W, RenderError> {
    renderer.begin_document(writer)?;
    renderer.add_images(&document.images)?;

    let mut page_ids = Vec::with_capacity(document.pages.len());
    for page in &document.pages {
        let content_id = renderer.render_page_content(page, document.page_size)?;
        page_ids.push(renderer.write_page_object(vec![content_id], document.page_size)?);
    }
    renderer.finish(page_ids)
}
