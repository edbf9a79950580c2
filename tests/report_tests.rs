mod common;

use common::fixtures::*;
use common::pdf_assertions::{image_stream_count, page_paint_ops};
use common::{TestResult, render_permit, render_permit_with_view};
use permit_pdf::CategoryView;

#[test]
fn test_signed_permit_draws_in_document_order() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = render_permit(&signed_permit())?;
    assert_pdf_page_count!(pdf, 1);
    assert_eq!(
        pdf.page_text(1),
        vec![
            "Numero permissao",
            "PT-100",
            "Nome permissao",
            "Trabalho em altura",
            "A",
            "Cinto de seguranca",
            "X",
            "Assinatura",
            "Responsavel",
        ]
    );

    // Four header lines, band + label, title + value, band + label, title, image.
    let ops = page_paint_ops(&pdf.doc, 1);
    assert_eq!(
        ops,
        vec!["Tj", "Tj", "Tj", "Tj", "re", "Tj", "Tj", "Tj", "re", "Tj", "Tj", "Do"]
    );
    // The signature has transparent pixels, so it carries a soft mask.
    assert_eq!(image_stream_count(&pdf.doc), 2);
    Ok(())
}

#[test]
fn test_unsigned_signature_item_draws_only_its_title() -> TestResult {
    let mut permit = signed_permit();
    permit.items[1].value = None;

    let pdf = render_permit(&permit)?;
    assert_eq!(pdf.page_text(1).last().map(String::as_str), Some("Responsavel"));
    assert_eq!(image_stream_count(&pdf.doc), 0);
    assert!(!page_paint_ops(&pdf.doc, 1).contains(&"Do".to_string()));
    Ok(())
}

#[test]
fn test_category_order_follows_the_view() -> TestResult {
    let permit = permit(
        "PT-5",
        "Escavacao",
        vec![
            item("Riscos", "Soterramento", Some("Alto")),
            item("EPI", "Botas", Some("Sim")),
            item("Riscos", "Queda", Some("Medio")),
        ],
    );
    let mut view = CategoryView::group(&permit.items);
    view.reorder(1, 0);

    let pdf = render_permit_with_view(&permit, &view)?;
    let text = pdf.page_text(1);
    let epi = text.iter().position(|t| t == "EPI").unwrap();
    let riscos = text.iter().position(|t| t == "Riscos").unwrap();
    assert!(epi < riscos);
    // Items stay with their category.
    assert_eq!(
        &text[riscos..],
        &["Riscos", "Soterramento", "Alto", "Queda", "Medio"]
    );
    Ok(())
}

#[test]
fn test_text_outside_win_ansi_is_replaced() -> TestResult {
    let permit = permit("PT-6", "Solda \u{2713}", vec![]);
    let pdf = render_permit(&permit)?;
    assert_pdf_contains_text!(pdf, "Solda ?");
    Ok(())
}
