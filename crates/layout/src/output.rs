//! Output types from the layout engine.
//!
//! A `LaidOutDocument` is what the engine hands to a renderer once drawing is
//! finished: positioned elements grouped by page plus the decoded rasters
//! those elements reference.

use crate::image::DecodedImage;
use crate::{LayoutElement, PositionedElement};
use permit_types::Size;

#[derive(Debug, Clone)]
pub struct LaidOutDocument {
    pub page_size: Size,
    /// Pages of positioned elements ready for rendering, in document order.
    pub pages: Vec<Vec<PositionedElement>>,
    /// Images referenced by `ImageElement::image_index`.
    pub images: Vec<DecodedImage>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All text runs in drawing order, across pages.
    pub fn text_runs(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flatten()
            .filter_map(|el| el.as_text().map(|t| t.content.as_str()))
    }

    /// Estimate the heap size of this document for logging.
    pub fn rough_heap_size(&self) -> usize {
        let mut size = self.pages.capacity() * std::mem::size_of::<Vec<PositionedElement>>();
        for page in &self.pages {
            size += page.capacity() * std::mem::size_of::<PositionedElement>();
            for el in page {
                if let LayoutElement::Text(t) = &el.element {
                    size += t.content.capacity();
                }
            }
        }
        for image in &self.images {
            size += image.pixels.len() + image.alpha.as_ref().map_or(0, Vec::len);
        }
        size
    }
}
