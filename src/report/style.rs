use permit_layout::{BannerStyle, DEFAULT_SIGNATURE_SIZE, Size, TextStyle};
use permit_types::Color;
use serde::Deserialize;

/// Fonts, colours and labels used when composing a permit report.
///
/// Colours accept `"#RRGGBB"`, `"#RGB"` or an `{ r, g, b }` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportStyle {
    pub font_size: f32,
    pub text_color: Color,
    pub banner_font_size: f32,
    pub banner_color: Color,
    pub banner_text_color: Color,
    pub signature_width: f32,
    pub signature_height: f32,
    /// Caption printed above the permit number.
    pub number_label: String,
    /// Caption printed above the permit name.
    pub name_label: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        let text = TextStyle::default();
        let banner = BannerStyle::default();
        Self {
            font_size: text.font_size,
            text_color: text.color,
            banner_font_size: banner.font_size,
            banner_color: banner.background,
            banner_text_color: banner.foreground,
            signature_width: DEFAULT_SIGNATURE_SIZE.width,
            signature_height: DEFAULT_SIGNATURE_SIZE.height,
            number_label: "Numero permissao".to_string(),
            name_label: "Nome permissao".to_string(),
        }
    }
}

impl ReportStyle {
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            font_size: self.font_size,
            color: self.text_color,
        }
    }

    pub fn banner_style(&self) -> BannerStyle {
        BannerStyle {
            font_size: self.banner_font_size,
            background: self.banner_color,
            foreground: self.banner_text_color,
        }
    }

    pub fn signature_size(&self) -> Size {
        Size::new(self.signature_width, self.signature_height)
    }
}
