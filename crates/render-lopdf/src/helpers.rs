//! Content-stream generation for one page of positioned elements.
//!
//! Layout already works in PDF user space, so elements are emitted at their
//! coordinates unchanged: text at its baseline origin, rectangles and images
//! from their bottom-left corner.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use permit_layout::{Color, ImageElement, LayoutElement, PositionedElement, StandardFont, TextElement};
use permit_render_core::RenderError;
use permit_render_core::utils::to_win_ansi;

/// Resource name an image is registered under in the page resources.
pub fn image_resource_name(image_index: usize) -> String {
    format!("Im{}", image_index + 1)
}

/// Builds the content stream operations for a page.
pub fn render_elements_to_content(
    elements: &[PositionedElement],
    image_count: usize,
) -> Result<Content, RenderError> {
    let mut page_ctx = PageContext::new(image_count);
    for el in elements {
        page_ctx.draw_element(el)?;
    }
    Ok(page_ctx.finish())
}

struct PageContext {
    content: Content,
    state: LopdfPageRenderState,
    image_count: usize,
}

#[derive(Default, Clone, PartialEq)]
struct LopdfPageRenderState {
    fill_color: Option<Color>,
}

impl PageContext {
    fn new(image_count: usize) -> Self {
        Self {
            content: Content { operations: vec![] },
            state: Default::default(),
            image_count,
        }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn draw_element(&mut self, el: &PositionedElement) -> Result<(), RenderError> {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rectangle(rect) => {
                self.set_fill_color(rect.fill);
                self.push("re", vec![el.x.into(), el.y.into(), el.width.into(), el.height.into()]);
                self.push("f", vec![]);
                Ok(())
            }
            LayoutElement::Image(image) => self.draw_image(image, el),
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, font: StandardFont, font_size: f32) {
        // Tf does not survive ET, so it is reissued in every text object.
        self.push(
            "Tf",
            vec![Object::Name(font.resource_name().as_bytes().to_vec()), font_size.into()],
        );
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) -> Result<(), RenderError> {
        if text.content.trim().is_empty() {
            return Ok(());
        }
        let (encoded, unknown) = to_win_ansi(&text.content);
        if unknown > 0 {
            log::warn!(
                "Replaced {} character(s) outside WinAnsiEncoding in '{}'",
                unknown,
                text.content
            );
        }

        self.set_fill_color(text.color);
        self.push("BT", vec![]);
        self.set_font(text.font, text.font_size);
        self.push("Td", vec![el.x.into(), el.y.into()]);
        self.push("Tj", vec![Object::String(encoded, StringFormat::Literal)]);
        self.push("ET", vec![]);
        Ok(())
    }

    fn draw_image(&mut self, image: &ImageElement, el: &PositionedElement) -> Result<(), RenderError> {
        if image.image_index >= self.image_count {
            return Err(RenderError::Image {
                index: image.image_index,
                reason: format!("only {} image(s) were registered", self.image_count),
            });
        }
        let name = image_resource_name(image.image_index);
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                el.width.into(),
                Object::Integer(0),
                Object::Integer(0),
                el.height.into(),
                el.x.into(),
                el.y.into(),
            ],
        );
        self.push("Do", vec![Object::Name(name.into_bytes())]);
        self.push("Q", vec![]);
        Ok(())
    }
}
