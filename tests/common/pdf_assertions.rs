use lopdf::Document as LopdfDocument;
use lopdf::content::Content;

/// Strings drawn with `Tj` on a page, in content stream order.
pub fn page_text_runs(doc: &LopdfDocument, page: u32) -> Vec<String> {
    let Some(page_id) = doc.get_pages().get(&page).copied() else {
        return Vec::new();
    };
    let Ok(data) = doc.get_page_content(page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&data) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first()?.as_str().ok())
        .map(|s| String::from_utf8_lossy(s).into_owned())
        .collect()
}

/// Operators painted on a page, in order, reduced to what tells elements
/// apart: `Tj` for text, `re` for bands and `Do` for images.
pub fn page_paint_ops(doc: &LopdfDocument, page: u32) -> Vec<String> {
    let Some(page_id) = doc.get_pages().get(&page).copied() else {
        return Vec::new();
    };
    let Ok(data) = doc.get_page_content(page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&data) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| matches!(op.operator.as_str(), "Tj" | "re" | "Do"))
        .map(|op| op.operator.clone())
        .collect()
}

/// Baseline y of the first `Td` on a page.
pub fn first_text_y(doc: &LopdfDocument, page: u32) -> Option<f32> {
    let page_id = doc.get_pages().get(&page).copied()?;
    let data = doc.get_page_content(page_id).ok()?;
    let content = Content::decode(&data).ok()?;
    let td = content.operations.iter().find(|op| op.operator == "Td")?;
    td.operands.get(1)?.as_float().ok()
}

/// Number of image XObjects (soft masks included) in the file.
pub fn image_stream_count(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|obj| obj.as_stream().ok())
        .filter(|s| {
            s.dict.get(b"Subtype").and_then(|v| v.as_name()).ok() == Some(&b"Image"[..])
        })
        .count()
}

#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $expected:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $expected,
            "Expected {} pages, got {}",
            $expected,
            $pdf.page_count()
        );
    };
}

#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let all = $pdf.all_text();
        assert!(
            all.iter().any(|run| run.contains($text)),
            "Expected PDF to contain '{}', found runs: {:?}",
            $text,
            all
        );
    };
}
