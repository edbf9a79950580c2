use crate::config::LayoutConfig;
use crate::elements::{ImageElement, LayoutElement, PositionedElement, RectElement, TextElement};
use crate::fonts::StandardFont;
use crate::image::{DecodedImage, ImageFormat};
use crate::output::LaidOutDocument;
use crate::signature::SignatureSource;
use crate::text::break_lines;
use crate::LayoutError;
use permit_types::{Color, Point, Rect, Size};

/// Size used by `draw_image` callers that have no better idea.
pub const DEFAULT_IMAGE_SIZE: Size = Size {
    width: 100.0,
    height: 100.0,
};

/// Size signatures are drawn at.
pub const DEFAULT_SIGNATURE_SIZE: Size = Size {
    width: 150.0,
    height: 50.0,
};

/// Vertical gap left below a signature image.
const SIGNATURE_GAP: f32 = 20.0;
/// How far a banner's baseline sits below the cursor row it starts on.
const BANNER_DROP: f32 = 15.0;
/// Padding of the banner fill around its label.
const BANNER_PADDING: f32 = 5.0;
/// Extra advance after a banner and after an item value.
const BANNER_GAP: f32 = 10.0;
const VALUE_GAP: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            color: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerStyle {
    pub font_size: f32,
    pub background: Color,
    pub foreground: Color,
}

impl Default for BannerStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            background: Color::BANNER_ORANGE,
            foreground: Color::WHITE,
        }
    }
}

/// Lays out a permit document one draw call at a time.
///
/// The engine owns the document being built. Each draw call places content at
/// the cursor and moves the cursor down; when a row would land on or below the
/// bottom margin a new page is started first. Draw calls made before
/// [`create_pdf`](Self::create_pdf) fail with [`LayoutError::NotInitialized`].
///
/// One engine is meant to build one document at a time and is not shared.
#[derive(Debug)]
pub struct LayoutEngine {
    config: LayoutConfig,
    state: EngineState,
}

#[derive(Debug)]
enum EngineState {
    Uninitialized,
    Active(Document),
}

#[derive(Debug)]
struct Document {
    config: LayoutConfig,
    finished_pages: Vec<Vec<PositionedElement>>,
    current_page: Vec<PositionedElement>,
    cursor: Point,
    images: Vec<DecodedImage>,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            state: EngineState::Uninitialized,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, EngineState::Active(_))
    }

    /// Starts a new document at the configured page size, discarding any
    /// document that was in progress.
    pub fn create_pdf(&mut self) {
        self.create_pdf_with_size(self.config.page_size);
    }

    pub fn create_pdf_with_size(&mut self, page_size: Size) {
        if self.is_active() {
            log::warn!("create_pdf called with a document in progress; discarding it");
        }
        let config = LayoutConfig {
            page_size,
            ..self.config
        };
        self.state = EngineState::Active(Document::new(config));
    }

    pub fn cursor(&self) -> Result<Point, LayoutError> {
        Ok(self.document()?.cursor)
    }

    pub fn page_count(&self) -> Result<usize, LayoutError> {
        let doc = self.document()?;
        Ok(doc.finished_pages.len() + 1)
    }

    /// Draws `text` word-wrapped to `page_width - 2 * margin_x`, one row per line.
    ///
    /// `margin_x` defaults to [`LayoutConfig::text_margin_x`].
    pub fn draw_text(
        &mut self,
        text: &str,
        style: &TextStyle,
        margin_x: Option<f32>,
    ) -> Result<(), LayoutError> {
        let doc = self.document_mut()?;
        let margin_x = margin_x.unwrap_or(doc.config.text_margin_x);
        let max_width = doc.config.page_size.width - 2.0 * margin_x;

        for line in break_lines(text, StandardFont::Helvetica, style.font_size, max_width) {
            doc.ensure_space(0.0)?;
            doc.push_text(line.text, StandardFont::Helvetica, style);
            doc.cursor.y -= doc.config.line_height;
        }
        Ok(())
    }

    /// Draws a filled band with the category name on top of it.
    pub fn draw_category(&mut self, name: &str, style: &BannerStyle) -> Result<(), LayoutError> {
        let doc = self.document_mut()?;
        doc.ensure_space(BANNER_DROP + BANNER_PADDING)?;
        doc.cursor.y -= BANNER_DROP;

        let band = Rect::new(
            doc.cursor.x - BANNER_PADDING,
            doc.cursor.y - BANNER_PADDING,
            doc.config.page_size.width - doc.config.text_margin_x,
            doc.config.line_height + BANNER_PADDING,
        );
        doc.current_page.push(PositionedElement {
            x: band.x,
            y: band.y,
            width: band.width,
            height: band.height,
            element: LayoutElement::Rectangle(RectElement {
                fill: style.background,
            }),
        });

        let label_style = TextStyle {
            font_size: style.font_size,
            color: style.foreground,
        };
        doc.push_text(name.to_string(), StandardFont::HelveticaBold, &label_style);
        doc.cursor.y -= doc.config.line_height + BANNER_GAP;
        Ok(())
    }

    /// Draws an item label in bold on a single row.
    pub fn draw_item_title(&mut self, title: &str, style: &TextStyle) -> Result<(), LayoutError> {
        let doc = self.document_mut()?;
        doc.ensure_space(0.0)?;
        doc.push_text(title.to_string(), StandardFont::HelveticaBold, style);
        doc.cursor.y -= doc.config.line_height;
        Ok(())
    }

    /// Draws an item value on a single row, leaving a slightly larger gap below.
    pub fn draw_item_value(&mut self, value: &str, style: &TextStyle) -> Result<(), LayoutError> {
        let doc = self.document_mut()?;
        doc.ensure_space(0.0)?;
        doc.push_text(value.to_string(), StandardFont::Helvetica, style);
        doc.cursor.y -= doc.config.line_height + VALUE_GAP;
        Ok(())
    }

    /// Decodes a PNG or JPEG and draws it with its top edge at the cursor.
    pub fn draw_image(
        &mut self,
        data: &[u8],
        format: ImageFormat,
        size: Size,
    ) -> Result<(), LayoutError> {
        let doc = self.document_mut()?;
        let decoded = DecodedImage::decode(data, format)?;
        let gap = doc.config.line_height;
        doc.place_image(decoded, size, gap)
    }

    /// Draws a signature image.
    ///
    /// `source` may hold PNG/JPEG bytes or a base64 `data:` URL (or bare
    /// base64). The format is sniffed from the decoded bytes, falling back to
    /// PNG, which is what canvas exports produce.
    pub fn draw_signature(
        &mut self,
        source: &SignatureSource,
        size: Size,
    ) -> Result<(), LayoutError> {
        let doc = self.document_mut()?;
        let bytes = source.resolve()?;
        let format = ImageFormat::detect(&bytes).unwrap_or(ImageFormat::Png);
        let decoded = DecodedImage::decode(&bytes, format)?;
        doc.place_image(decoded, size, SIGNATURE_GAP)
    }

    /// Closes the document and hands its pages to the caller.
    ///
    /// The engine returns to the uninitialized state.
    pub fn finish(&mut self) -> Result<LaidOutDocument, LayoutError> {
        match std::mem::replace(&mut self.state, EngineState::Uninitialized) {
            EngineState::Active(doc) => Ok(doc.into_laid_out()),
            EngineState::Uninitialized => Err(LayoutError::NotInitialized),
        }
    }

    fn document(&self) -> Result<&Document, LayoutError> {
        match &self.state {
            EngineState::Active(doc) => Ok(doc),
            EngineState::Uninitialized => Err(LayoutError::NotInitialized),
        }
    }

    fn document_mut(&mut self) -> Result<&mut Document, LayoutError> {
        match &mut self.state {
            EngineState::Active(doc) => Ok(doc),
            EngineState::Uninitialized => Err(LayoutError::NotInitialized),
        }
    }
}

impl Document {
    fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            finished_pages: Vec::new(),
            current_page: Vec::new(),
            cursor: Point::new(config.cursor_x, config.page_top()),
            images: Vec::new(),
        }
    }

    fn new_page(&mut self) {
        let full = std::mem::take(&mut self.current_page);
        self.finished_pages.push(full);
        self.cursor.y = self.config.page_top();
        log::debug!("Started page {}", self.finished_pages.len() + 1);
    }

    /// Starts a new page unless `extent` points of content fit below the
    /// cursor while staying above the bottom margin.
    fn ensure_space(&mut self, extent: f32) -> Result<(), LayoutError> {
        let usable = self.config.usable_height();
        if extent >= usable {
            return Err(LayoutError::ElementTooLarge(extent, usable));
        }
        if self.cursor.y - extent <= self.config.bottom_margin {
            self.new_page();
        }
        Ok(())
    }

    fn push_text(&mut self, content: String, font: StandardFont, style: &TextStyle) {
        if content.is_empty() {
            return;
        }
        let width = font.width_of_text_at_size(&content, style.font_size);
        self.current_page.push(PositionedElement {
            x: self.cursor.x,
            y: self.cursor.y,
            width,
            height: style.font_size,
            element: LayoutElement::Text(TextElement {
                content,
                font,
                font_size: style.font_size,
                color: style.color,
            }),
        });
    }

    fn place_image(
        &mut self,
        image: DecodedImage,
        size: Size,
        trailing_gap: f32,
    ) -> Result<(), LayoutError> {
        self.ensure_space(size.height)?;
        let image_index = self.images.len();
        self.images.push(image);
        self.current_page.push(PositionedElement {
            x: self.cursor.x,
            y: self.cursor.y - size.height,
            width: size.width,
            height: size.height,
            element: LayoutElement::Image(ImageElement { image_index }),
        });
        self.cursor.y -= size.height + trailing_gap;
        Ok(())
    }

    fn into_laid_out(mut self) -> LaidOutDocument {
        self.finished_pages.push(self.current_page);
        LaidOutDocument {
            page_size: self.config.page_size,
            pages: self.finished_pages,
            images: self.images,
        }
    }
}
