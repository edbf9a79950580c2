use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use permit_pdf::{Item, Permit, PermitNumber};
use std::io::Cursor;

/// A small translucent PNG, like a canvas export of a signature.
pub fn signature_png() -> Vec<u8> {
    let img = RgbaImage::from_fn(30, 10, |x, _| {
        if x % 3 == 0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 0])
        }
    });
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut out, ImageFormat::Png)
        .expect("encode signature png");
    out.into_inner()
}

pub fn signature_data_url() -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(signature_png()))
}

pub fn permit(number: &str, name: &str, items: Vec<Item>) -> Permit {
    Permit {
        number: PermitNumber::from(number),
        name: name.to_string(),
        items,
    }
}

pub fn item(category: &str, label: &str, value: Option<&str>) -> Item {
    Item::new(category, label, value)
}

/// The two-category permit: "A" with one answered item and a signed
/// "Assinatura" item.
pub fn signed_permit() -> Permit {
    let signature = signature_data_url();
    permit(
        "PT-100",
        "Trabalho em altura",
        vec![
            item("A", "Cinto de seguranca", Some("X")),
            item("Assinatura", "Responsavel", Some(&signature)),
        ],
    )
}

/// A permit whose `count` items all live in one category.
pub fn long_permit(count: usize) -> Permit {
    let items = (0..count)
        .map(|i| item("Checklist", &format!("Pergunta {i}"), Some("Sim")))
        .collect();
    permit("PT-200", "Inspecao geral", items)
}
