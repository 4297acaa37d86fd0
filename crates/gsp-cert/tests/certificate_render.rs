use gsp_cert::certificate::{BackgroundAssets, CertificateFields, CertificateRenderer};
use image::{ImageBuffer, Rgb};
use lopdf::content::Content;
use lopdf::{Document, Object};
use std::fs;
use std::path::{Path, PathBuf};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gsp-cert-e2e-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn write_background(dir: &Path) {
    let pixels: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_pixel(8, 11, Rgb([250, 250, 235]));
    pixels
        .save(dir.join("1.jpg"))
        .expect("write template background");
}

fn renderer_with_background(name: &str) -> (CertificateRenderer, PathBuf) {
    let dir = scratch_dir(name);
    write_background(&dir);
    (CertificateRenderer::new(BackgroundAssets::new(&dir)), dir)
}

/// All `(x, y, text)` show operations on the single page, in draw order.
fn text_draws(bytes: &[u8]) -> Vec<(f32, f32, String)> {
    let doc = Document::load_mem(bytes).expect("output parses as PDF");
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1, "rendered document has exactly one page");
    let page_id = *pages.values().next().expect("page id");
    let content_bytes = doc.get_page_content(page_id).expect("page content");
    let content = Content::decode(&content_bytes).expect("content decodes");

    let mut draws = Vec::new();
    let mut cursor = (0.0_f32, 0.0_f32);
    for operation in content.operations {
        match operation.operator.as_str() {
            "Td" => {
                cursor = (
                    operand_number(&operation.operands[0]),
                    operand_number(&operation.operands[1]),
                );
            }
            "Tj" => {
                let text = match &operation.operands[0] {
                    Object::String(bytes, _) => String::from_utf8_lossy(bytes).into_owned(),
                    other => panic!("unexpected Tj operand: {other:?}"),
                };
                draws.push((cursor.0, cursor.1, text));
            }
            _ => {}
        }
    }
    draws
}

fn operand_number(object: &Object) -> f32 {
    match object {
        Object::Integer(value) => *value as f32,
        Object::Real(value) => *value as f32,
        other => panic!("unexpected numeric operand: {other:?}"),
    }
}

fn draws_at(draws: &[(f32, f32, String)], x: f32, y: f32) -> Vec<&str> {
    draws
        .iter()
        .filter(|(dx, dy, _)| (*dx - x).abs() < 0.01 && (*dy - y).abs() < 0.01)
        .map(|(_, _, text)| text.as_str())
        .collect()
}

#[test]
fn all_empty_fields_produce_a_one_page_pdf_with_no_field_text() {
    let (renderer, dir) = renderer_with_background("all-empty");
    let bytes = renderer
        .render(&CertificateFields::default())
        .expect("render succeeds");

    assert!(bytes.starts_with(b"%PDF-"));
    assert!(text_draws(&bytes).is_empty());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn page_is_a4() {
    let (renderer, dir) = renderer_with_background("a4");
    let bytes = renderer
        .render(&CertificateFields::default())
        .expect("render succeeds");

    let doc = Document::load_mem(&bytes).expect("output parses");
    let page_id = *doc.get_pages().values().next().expect("page id");
    let page = doc
        .get_object(page_id)
        .and_then(Object::as_dict)
        .expect("page dictionary");
    let media_box = page
        .get(b"MediaBox")
        .and_then(Object::as_array)
        .expect("media box");
    let dims: Vec<f32> = media_box.iter().map(operand_number).collect();
    assert_eq!(dims, vec![0.0, 0.0, 595.0, 842.0]);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn single_fields_anchor_at_their_configured_positions() {
    let (renderer, dir) = renderer_with_background("anchors");
    let fields = CertificateFields {
        reference_no: "REF-001".to_string(),
        issued_in: "Berlin".to_string(),
        ..CertificateFields::default()
    };
    let bytes = renderer.render(&fields).expect("render succeeds");

    let draws = text_draws(&bytes);
    assert_eq!(draws.len(), 2, "exactly the two populated fields draw");
    assert_eq!(draws_at(&draws, 320.0, 775.0), vec!["REF-001"]);
    assert_eq!(draws_at(&draws, 380.0, 700.0), vec!["Berlin"]);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn multi_line_values_stack_downward_one_font_size_per_line() {
    let (renderer, dir) = renderer_with_background("multiline");
    let fields = CertificateFields {
        consigned_from: "Acme Co\n123 Main St".to_string(),
        ..CertificateFields::default()
    };
    let bytes = renderer.render(&fields).expect("render succeeds");

    let draws = text_draws(&bytes);
    assert_eq!(draws.len(), 2);
    assert_eq!(draws_at(&draws, 60.0, 775.0), vec!["Acme Co"]);
    assert_eq!(draws_at(&draws, 60.0, 775.0 - 12.0), vec!["123 Main St"]);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn line_count_is_breaks_plus_one_without_any_cap() {
    let (renderer, dir) = renderer_with_background("unbounded");
    // Three line breaks, including a blank interior line that must still
    // occupy its slot in the downward stack.
    let fields = CertificateFields {
        certification: "Certified by\n\nChamber of Commerce\nBerlin".to_string(),
        ..CertificateFields::default()
    };
    let bytes = renderer.render(&fields).expect("render succeeds");

    let draws = text_draws(&bytes);
    assert_eq!(draws.len(), 4);
    for (index, expected) in ["Certified by", "", "Chamber of Commerce", "Berlin"]
        .iter()
        .enumerate()
    {
        assert_eq!(
            draws_at(&draws, 60.0, 110.0 - index as f32 * 12.0),
            vec![*expected]
        );
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn fields_render_independently() {
    let (renderer, dir) = renderer_with_background("independent");
    let base = CertificateFields {
        reference_no: "REF-001".to_string(),
        declaration: "Signed in Berlin".to_string(),
        ..CertificateFields::default()
    };
    let mut longer = base.clone();
    longer.reference_no = "REF-001-WITH-A-MUCH-LONGER-SUFFIX\nSECOND LINE".to_string();

    let base_draws = text_draws(&renderer.render(&base).expect("render succeeds"));
    let longer_draws = text_draws(&renderer.render(&longer).expect("render succeeds"));

    assert_eq!(draws_at(&base_draws, 320.0, 110.0), vec!["Signed in Berlin"]);
    assert_eq!(
        draws_at(&longer_draws, 320.0, 110.0),
        vec!["Signed in Berlin"],
        "growing one field must not move another"
    );
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_background_degrades_to_a_warning_naming_the_file() {
    let dir = scratch_dir("no-background");
    let renderer = CertificateRenderer::new(BackgroundAssets::new(&dir));
    let fields = CertificateFields {
        reference_no: "REF-002".to_string(),
        ..CertificateFields::default()
    };
    let bytes = renderer.render(&fields).expect("request still succeeds");

    let draws = text_draws(&bytes);
    let warning = draws_at(&draws, 100.0, 800.0);
    assert_eq!(warning.len(), 1);
    assert!(warning[0].contains("1.jpg"), "warning names the missing file");
    assert_eq!(draws_at(&draws, 320.0, 775.0), vec!["REF-002"]);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn every_configured_anchor_receives_its_field() {
    let (renderer, dir) = renderer_with_background("full-form");
    let fields = CertificateFields {
        reference_no: "REF-100".to_string(),
        issued_in: "Rotterdam".to_string(),
        consigned_from: "Acme Co".to_string(),
        consigned_to: "Orbit GmbH".to_string(),
        transport_route: "Sea freight via Hamburg".to_string(),
        official_use: "Inspected".to_string(),
        item_number: "1".to_string(),
        package_marks: "PKG-AB123".to_string(),
        package_description: "Machine parts".to_string(),
        origin_criterion: "P".to_string(),
        gross_weight_or_quantity: "540 kg".to_string(),
        invoice_number_date: "INV-0042/2026-08-01".to_string(),
        certification: "Certified correct".to_string(),
        declaration: "Declared by exporter".to_string(),
    };
    let bytes = renderer.render(&fields).expect("render succeeds");

    let draws = text_draws(&bytes);
    assert_eq!(draws.len(), 14);
    assert_eq!(draws_at(&draws, 50.0, 450.0), vec!["1"]);
    assert_eq!(draws_at(&draws, 89.0, 450.0), vec!["PKG-AB123"]);
    assert_eq!(draws_at(&draws, 160.0, 450.0), vec!["Machine parts"]);
    assert_eq!(draws_at(&draws, 375.0, 450.0), vec!["P"]);
    assert_eq!(draws_at(&draws, 440.0, 450.0), vec!["540 kg"]);
    assert_eq!(draws_at(&draws, 500.0, 450.0), vec!["INV-0042/2026-08-01"]);
    let _ = fs::remove_dir_all(&dir);
}
