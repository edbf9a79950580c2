use crate::fonts::StandardFont;
use permit_types::Color;

/// A piece of content fixed at a position on a page.
///
/// Coordinates are PDF user space: `x`/`y` is the bottom-left corner for
/// rectangles and images, and the baseline origin for text.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rectangle(RectElement),
    Image(ImageElement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: StandardFont,
    pub font_size: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectElement {
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    /// Index into the document's decoded image list.
    pub image_index: usize,
}

impl PositionedElement {
    pub fn as_text(&self) -> Option<&TextElement> {
        match &self.element {
            LayoutElement::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Lowest y the element paints at (text descenders excluded).
    pub fn bottom(&self) -> f32 {
        self.y
    }
}
