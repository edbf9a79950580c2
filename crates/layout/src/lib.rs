use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("No document is open; call create_pdf before drawing.")]
    NotInitialized,
    #[error("Element has a height of {0:.2} which exceeds the total page content height of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Image could not be decoded: {0}")]
    Image(String),
    #[error("Signature could not be read: {0}")]
    Signature(String),
}

pub mod config;
pub mod engine;
pub mod fonts;
pub mod image;
pub mod output;
pub mod signature;
pub mod text;

mod elements;

pub use self::config::LayoutConfig;
pub use self::elements::{
    ImageElement, LayoutElement, PositionedElement, RectElement, TextElement,
};
pub use self::engine::{
    BannerStyle, DEFAULT_IMAGE_SIZE, DEFAULT_SIGNATURE_SIZE, LayoutEngine, TextStyle,
};
pub use self::fonts::StandardFont;
pub use self::image::{ColorSpace, DecodedImage, ImageFormat};
pub use self::output::LaidOutDocument;
pub use self::signature::{SignatureSource, decode_data_url};

// Geometry shared with the renderer.
pub use permit_types::{Color, Point, Rect, Size};

#[cfg(test)]
mod test_utils;
