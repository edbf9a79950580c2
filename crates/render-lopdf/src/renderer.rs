use crate::helpers;
use crate::writer::StreamingPdfWriter;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Dictionary, Object, ObjectId, Stream, StringFormat, dictionary};
use permit_layout::{DecodedImage, LaidOutDocument, PositionedElement, Size, StandardFont};
use permit_render_core::utils::to_win_ansi;
use permit_render_core::{DocumentRenderer, RenderError, render_document};
use std::io::{Cursor, Seek, Write};

const PRODUCER: &str = concat!("permit-pdf ", env!("CARGO_PKG_VERSION"));

/// A PDF renderer using the `lopdf` library.
///
/// Both standard faces are declared as simple Type1 fonts with
/// WinAnsiEncoding; images become Flate-compressed XObjects shared through a
/// single resource dictionary.
pub struct LopdfRenderer<W: Write + Seek + Send> {
    writer: Option<StreamingPdfWriter<W>>,
    image_count: usize,
    title: Option<String>,
}

impl<W: Write + Seek + Send> LopdfRenderer<W> {
    pub fn new() -> Self {
        Self {
            writer: None,
            image_count: 0,
            title: None,
        }
    }

    /// Sets the `/Title` entry of the document information dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or_else(|| RenderError::Other("Document not started".into()))
    }
}

impl<W: Write + Seek + Send> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl LopdfRenderer<Cursor<Vec<u8>>> {
    /// Renders a whole document into memory.
    pub fn render_to_bytes(self, document: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
        let cursor = render_document(Box::new(self), document, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }
}

impl<W: Write + Seek + Send + 'static> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError> {
        let mut font_dict = Dictionary::new();
        for font in StandardFont::ALL {
            let single_font_dict = dictionary! {
                "Type" => "Font", "Subtype" => "Type1", "BaseFont" => font.postscript_name(), "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(font.resource_name().as_bytes(), Object::Dictionary(single_font_dict));
        }

        let mut writer = StreamingPdfWriter::new(writer, "1.7", font_dict)?;
        writer.set_info("Producer", Object::string_literal(PRODUCER));
        let created = chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
        writer.set_info("CreationDate", Object::string_literal(created));
        if let Some(title) = &self.title {
            let (encoded, _) = to_win_ansi(title);
            writer.set_info("Title", Object::String(encoded, StringFormat::Literal));
        }
        self.writer = Some(writer);
        Ok(())
    }

    fn add_images(&mut self, images: &[DecodedImage]) -> Result<(), RenderError> {
        let writer = self.writer_mut()?;
        for (index, image) in images.iter().enumerate() {
            let id = write_image_xobject(writer, index, image)?;
            writer.register_xobject(&helpers::image_resource_name(index), id);
        }
        log::debug!("Embedded {} image(s)", images.len());
        self.image_count = images.len();
        Ok(())
    }

    fn render_page_content(
        &mut self,
        elements: &[PositionedElement],
        _page_size: Size,
    ) -> Result<ObjectId, RenderError> {
        let image_count = self.image_count;
        let writer = self.writer_mut()?;
        let content = helpers::render_elements_to_content(elements, image_count)?;
        writer.buffer_content_stream(content)
    }

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        page_size: Size,
    ) -> Result<ObjectId, RenderError> {
        let writer = self.writer_mut()?;

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![Object::Integer(0), Object::Integer(0), page_size.width.into(), page_size.height.into()],
            "Contents" => Object::Array(content_stream_ids.into_iter().map(Object::Reference).collect()),
            "Resources" => writer.resources_id,
        };

        Ok(writer.buffer_object(page_dict.into()))
    }

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError> {
        let mut renderer = *self;
        if let Some(mut internal_writer) = renderer.writer.take() {
            internal_writer.set_page_ids(page_ids);
            let writer = internal_writer.finish()?;
            Ok(writer)
        } else {
            Err(RenderError::Other(
                "Document was never started with begin_document".into(),
            ))
        }
    }
}

fn write_image_xobject<W: Write + Seek>(
    writer: &mut StreamingPdfWriter<W>,
    index: usize,
    image: &DecodedImage,
) -> Result<ObjectId, RenderError> {
    let pixel_count = image.width as usize * image.height as usize;
    let expected = pixel_count * image.color_space.components();
    if image.pixels.len() != expected {
        return Err(RenderError::Image {
            index,
            reason: format!("expected {} bytes of pixel data, got {}", expected, image.pixels.len()),
        });
    }

    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => image.width as i64,
        "Height" => image.height as i64,
        "ColorSpace" => image.color_space.pdf_name(),
        "BitsPerComponent" => 8_i64,
        "Filter" => "FlateDecode",
    };

    if let Some(alpha) = &image.alpha {
        if alpha.len() != pixel_count {
            return Err(RenderError::Image {
                index,
                reason: format!("expected {} alpha samples, got {}", pixel_count, alpha.len()),
            });
        }
        let mask = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width as i64,
            "Height" => image.height as i64,
            "ColorSpace" => "DeviceGray",
            "BitsPerComponent" => 8_i64,
            "Filter" => "FlateDecode",
        };
        let mask_id = writer.buffer_object(Object::Stream(Stream::new(mask, compress(alpha)?)));
        dict.set("SMask", mask_id);
    }

    Ok(writer.buffer_object(Object::Stream(Stream::new(dict, compress(&image.pixels)?))))
}

fn compress(data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
