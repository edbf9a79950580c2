//! Raster decoding for embedded images.
//!
//! PNG and JPEG input is decoded to 8-bit pixel rows here so that a bad image
//! fails the draw call that introduced it, not the later render pass. The
//! renderer only has to compress and wrap the pixels as an image XObject.

use crate::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Sniffs the format from the file signature.
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(ImageFormat::Png)
        } else if data.starts_with(&[0xFF, 0xD8]) {
            Some(ImageFormat::Jpeg)
        } else {
            None
        }
    }

    fn as_image_format(self) -> ::image::ImageFormat {
        match self {
            ImageFormat::Png => ::image::ImageFormat::Png,
            ImageFormat::Jpeg => ::image::ImageFormat::Jpeg,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    DeviceGray,
    DeviceRGB,
}

impl ColorSpace {
    pub fn components(self) -> usize {
        match self {
            ColorSpace::DeviceGray => 1,
            ColorSpace::DeviceRGB => 3,
        }
    }

    pub fn pdf_name(self) -> &'static str {
        match self {
            ColorSpace::DeviceGray => "DeviceGray",
            ColorSpace::DeviceRGB => "DeviceRGB",
        }
    }
}

/// Uncompressed 8-bit pixel data with an optional separate alpha channel.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub color_space: ColorSpace,
    pub pixels: Vec<u8>,
    pub alpha: Option<Vec<u8>>,
}

impl DecodedImage {
    pub fn decode(data: &[u8], format: ImageFormat) -> Result<Self, LayoutError> {
        let img = ::image::load_from_memory_with_format(data, format.as_image_format())
            .map_err(|e| LayoutError::Image(e.to_string()))?;
        let (width, height) = (img.width(), img.height());
        let color = img.color();

        let (color_space, pixels, alpha) = match (color.has_color(), color.has_alpha()) {
            (false, false) => (ColorSpace::DeviceGray, img.to_luma8().into_raw(), None),
            (false, true) => {
                let la = img.to_luma_alpha8();
                let (gray, alpha) = split_alpha(la.as_raw(), 1);
                (ColorSpace::DeviceGray, gray, Some(alpha))
            }
            (true, false) => (ColorSpace::DeviceRGB, img.to_rgb8().into_raw(), None),
            (true, true) => {
                let rgba = img.to_rgba8();
                let (rgb, alpha) = split_alpha(rgba.as_raw(), 3);
                (ColorSpace::DeviceRGB, rgb, Some(alpha))
            }
        };

        // Fully opaque alpha channels are dropped so no soft mask gets written.
        let alpha = alpha.filter(|a| a.iter().any(|&v| v != u8::MAX));

        log::debug!(
            "Decoded {:?} image {}x{} ({})",
            format,
            width,
            height,
            color_space.pdf_name()
        );

        Ok(Self {
            width,
            height,
            color_space,
            pixels,
            alpha,
        })
    }
}

/// Splits interleaved `components + 1` samples into colour and alpha planes.
fn split_alpha(samples: &[u8], components: usize) -> (Vec<u8>, Vec<u8>) {
    let stride = components + 1;
    let pixel_count = samples.len() / stride;
    let mut color = Vec::with_capacity(pixel_count * components);
    let mut alpha = Vec::with_capacity(pixel_count);
    for px in samples.chunks_exact(stride) {
        color.extend_from_slice(&px[..components]);
        alpha.push(px[components]);
    }
    (color, alpha)
}
