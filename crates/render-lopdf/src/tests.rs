use super::*;
use ::image::{DynamicImage, ImageFormat as RasterFormat, Rgba, RgbaImage};
use lopdf::Document;
use lopdf::content::Content;
use permit_layout::{
    BannerStyle, DEFAULT_SIGNATURE_SIZE, ImageFormat, LayoutConfig, LayoutEngine, SignatureSource,
    TextStyle,
};
use std::io::Cursor;

fn png(alpha: u8) -> Vec<u8> {
    let img = RgbaImage::from_pixel(6, 3, Rgba([10, 20, 30, alpha]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut out, RasterFormat::Png)
        .unwrap();
    out.into_inner()
}

fn page_strings(doc: &Document, page_number: u32) -> Vec<String> {
    let page_id = doc.get_pages()[&page_number];
    let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .map(|op| String::from_utf8_lossy(op.operands[0].as_str().unwrap()).into_owned())
        .collect()
}

#[test]
fn renders_text_pages_with_standard_fonts() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut engine = LayoutEngine::new(LayoutConfig::default());
    engine.create_pdf();
    engine.draw_category("EPI", &BannerStyle::default()).unwrap();
    engine.draw_item_title("Capacete", &TextStyle::default()).unwrap();
    engine.draw_item_value("Sim", &TextStyle::default()).unwrap();
    let laid_out = engine.finish().unwrap();

    let bytes = render_to_bytes(&laid_out).unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
    assert_eq!(page_strings(&doc, 1), vec!["EPI", "Capacete", "Sim"]);

    let page = doc.get_dictionary(doc.get_pages()[&1]).unwrap();
    let resources_id = page.get(b"Resources").unwrap().as_reference().unwrap();
    let resources = doc.get_dictionary(resources_id).unwrap();
    let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();
    let mut base_fonts: Vec<String> = fonts
        .iter()
        .map(|(_, f)| {
            let name = f.as_dict().unwrap().get(b"BaseFont").unwrap().as_name().unwrap();
            String::from_utf8_lossy(name).into_owned()
        })
        .collect();
    base_fonts.sort();
    assert_eq!(base_fonts, vec!["Helvetica", "Helvetica-Bold"]);
}

#[test]
fn every_layout_page_becomes_a_pdf_page() {
    let mut engine = LayoutEngine::new(LayoutConfig::default());
    engine.create_pdf();
    for i in 0..90 {
        engine.draw_item_title(&format!("Linha {i}"), &TextStyle::default()).unwrap();
    }
    let laid_out = engine.finish().unwrap();
    assert_eq!(laid_out.page_count(), 3);

    let doc = Document::load_mem(&render_to_bytes(&laid_out).unwrap()).unwrap();
    assert_eq!(doc.get_pages().len(), 3);
    assert_eq!(page_strings(&doc, 2)[0], "Linha 38");
}

#[test]
fn signature_is_embedded_with_soft_mask() {
    let mut engine = LayoutEngine::new(LayoutConfig::default());
    engine.create_pdf();
    engine
        .draw_signature(&SignatureSource::from(png(128)), DEFAULT_SIGNATURE_SIZE)
        .unwrap();
    engine
        .draw_image(&png(255), ImageFormat::Png, DEFAULT_SIGNATURE_SIZE)
        .unwrap();
    let laid_out = engine.finish().unwrap();

    let doc = Document::load_mem(&render_to_bytes(&laid_out).unwrap()).unwrap();
    let images: Vec<_> = doc
        .objects
        .values()
        .filter_map(|obj| obj.as_stream().ok())
        .filter(|s| s.dict.get(b"Subtype").and_then(|v| v.as_name()).ok() == Some(&b"Image"[..]))
        .collect();
    // Two images plus one soft mask.
    assert_eq!(images.len(), 3);
    let with_mask = images.iter().filter(|s| s.dict.has(b"SMask")).count();
    assert_eq!(with_mask, 1);

    let first = images.iter().find(|s| s.dict.has(b"SMask")).unwrap();
    assert_eq!(first.dict.get(b"Width").unwrap().as_i64().unwrap(), 6);
    assert_eq!(first.dict.get(b"ColorSpace").unwrap().as_name().unwrap(), b"DeviceRGB");
}

#[test]
fn info_dictionary_names_producer_and_title() {
    let mut engine = LayoutEngine::new(LayoutConfig::default());
    engine.create_pdf();
    engine.draw_text("Ola", &TextStyle::default(), None).unwrap();
    let laid_out = engine.finish().unwrap();

    let bytes = LopdfRenderer::<Cursor<Vec<u8>>>::new()
        .with_title("Permissão 7")
        .render_to_bytes(&laid_out)
        .unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = doc.get_dictionary(info_id).unwrap();
    let producer = info.get(b"Producer").unwrap().as_str().unwrap();
    assert!(producer.starts_with(b"permit-pdf"));
    assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Permiss\xE3o 7");
    assert!(info.get(b"CreationDate").unwrap().as_str().unwrap().starts_with(b"D:"));
}

#[test]
fn empty_document_still_has_one_page() {
    let mut engine = LayoutEngine::new(LayoutConfig::default());
    engine.create_pdf();
    let laid_out = engine.finish().unwrap();
    let doc = Document::load_mem(&render_to_bytes(&laid_out).unwrap()).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}
