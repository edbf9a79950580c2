use permit_types::Size;

/// Fixed layout constants for a document. All values are in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Page size used by `create_pdf` and by every page added on overflow.
    pub page_size: Size,
    /// Horizontal cursor position for all content. Pagination never moves it.
    pub cursor_x: f32,
    /// Distance from the top edge to the first baseline of a page.
    pub top_margin: f32,
    /// Nothing is placed at or below this height.
    pub bottom_margin: f32,
    /// Vertical advance per text line.
    pub line_height: f32,
    /// Default horizontal margin used to compute the wrap width of `draw_text`.
    ///
    /// Lines are wrapped at `page_width - 2 * text_margin_x`.
    pub text_margin_x: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: Size::A4,
            cursor_x: 50.0,
            top_margin: 50.0,
            bottom_margin: 50.0,
            line_height: 20.0,
            text_margin_x: 100.0,
        }
    }
}

impl LayoutConfig {
    /// Vertical space available for content on one page.
    pub fn usable_height(&self) -> f32 {
        self.page_size.height - self.top_margin - self.bottom_margin
    }

    /// Baseline of the first row on a fresh page.
    pub fn page_top(&self) -> f32 {
        self.page_size.height - self.top_margin
    }
}
