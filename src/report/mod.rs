//! Turns a permit into an ordered list of draw operations.
//!
//! The full list is resolved before anything is drawn, then applied to a
//! single engine one operation at a time. The engine's cursor therefore only
//! ever sees operations in document order.

pub mod style;

pub use style::ReportStyle;

use crate::view::CategoryView;
use permit_layout::{LaidOutDocument, LayoutConfig, LayoutEngine, LayoutError, SignatureSource};
use permit_types::Permit;

/// One call against the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(String),
    Category(String),
    ItemTitle(String),
    ItemValue(String),
    Signature(SignatureSource),
}

#[derive(Debug, Clone)]
pub struct ReportPlan {
    ops: Vec<DrawOp>,
    style: ReportStyle,
}

impl ReportPlan {
    /// Resolves the draw operations for `permit`, with categories in the
    /// order `view` currently shows them.
    ///
    /// Items with no value get a title only. A signature item with a value
    /// gets its title followed by the signature image and no value row.
    pub fn compose(permit: &Permit, view: &CategoryView, style: &ReportStyle) -> Self {
        let mut ops = vec![
            DrawOp::Text(style.number_label.clone()),
            DrawOp::Text(permit.number.to_string()),
            DrawOp::Text(style.name_label.clone()),
            DrawOp::Text(permit.name.clone()),
        ];

        for (category, items) in view.iter() {
            ops.push(DrawOp::Category(category.to_string()));
            for item in items {
                ops.push(DrawOp::ItemTitle(item.label.clone()));
                match &item.value {
                    Some(value) if item.is_signature() => {
                        ops.push(DrawOp::Signature(SignatureSource::Encoded(value.clone())));
                    }
                    Some(value) => ops.push(DrawOp::ItemValue(value.clone())),
                    None => {}
                }
            }
        }

        Self {
            ops,
            style: style.clone(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Applies every operation to `engine` in order, stopping at the first
    /// failure. The engine must already hold an open document.
    pub fn execute(&self, engine: &mut LayoutEngine) -> Result<(), LayoutError> {
        let text = self.style.text_style();
        let banner = self.style.banner_style();

        for op in &self.ops {
            match op {
                DrawOp::Text(content) => engine.draw_text(content, &text, None)?,
                DrawOp::Category(name) => engine.draw_category(name, &banner)?,
                DrawOp::ItemTitle(title) => engine.draw_item_title(title, &text)?,
                DrawOp::ItemValue(value) => engine.draw_item_value(value, &text)?,
                DrawOp::Signature(source) => {
                    engine.draw_signature(source, self.style.signature_size())?
                }
            }
        }
        Ok(())
    }

    /// Lays the plan out on a fresh engine and returns the finished pages.
    pub fn layout(&self, config: LayoutConfig) -> Result<LaidOutDocument, LayoutError> {
        let mut engine = LayoutEngine::new(config);
        engine.create_pdf();
        self.execute(&mut engine)?;
        let document = engine.finish()?;
        log::debug!(
            "Laid out {} draw operations on {} page(s)",
            self.ops.len(),
            document.page_count()
        );
        Ok(document)
    }
}
