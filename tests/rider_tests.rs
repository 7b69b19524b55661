mod common;

use common::fixtures::*;
use common::pdf_assertions::{count_images, extract_link_uris, get_page_dimensions, info_string};
use common::{TestResult, generate_pdf, generate_pdf_with, pipeline};
use serde_json::json;
use stagerider::{Entitlement, PageKind, RenderRequest};

#[test]
fn test_empty_rider_renders_only_the_cover() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(json!({}))?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "Artist");
    assert_pdf_contains_text!(pdf, "Page 1 of 1");
    assert_eq!(pdf.filename, "rider_rider_en.pdf");
    assert_eq!(info_string(&pdf.doc, b"Title").as_deref(), Some("Artist - Technical Rider"));
    assert_eq!(info_string(&pdf.doc, b"Producer").as_deref(), Some("StageRider"));
    Ok(())
}

#[test]
fn test_pages_are_a4_portrait() -> TestResult {
    let pdf = generate_pdf(json!({}))?;
    let (width, height) = get_page_dimensions(&pdf.doc, 1).ok_or("missing MediaBox")?;
    assert!((width - 595.28).abs() < 1.0, "width was {}", width);
    assert!((height - 841.89).abs() < 1.0, "height was {}", height);
    Ok(())
}

#[test]
fn test_long_input_list_breaks_across_pages() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(json!({ "input-list": { "inputs": inputs(25) } }))?;
    assert_pdf_page_count!(pdf, 3);
    assert!(pdf.page_text(2).contains("Source 22"));
    assert!(!pdf.page_text(2).contains("Source 23"));
    assert!(pdf.page_text(3).contains("Source 23"));
    assert!(pdf.page_text(3).contains("Source 25"));
    // Header repeats on the continuation page.
    assert!(pdf.page_text(3).contains("Mic/DI"));
    assert!(pdf.page_text(3).contains("Page 3 of 3"));
    Ok(())
}

#[test]
fn test_band_equipment_is_summarized_under_the_input_list() -> TestResult {
    let pdf = generate_pdf(json!({ "input-list": { "inputs": band_inputs() } }))?;
    assert_pdf_contains_text!(pdf, "2x \"Shure SM58\"");
    assert_pdf_contains_text!(pdf, "\"Radial JDI\"");
    assert_pdf_not_contains_text!(pdf, "\"AKG D112\"");
    assert_pdf_contains_text!(pdf, "Short boom");
    Ok(())
}

#[test]
fn test_advisory_follows_final_notes() -> TestResult {
    let rider = json!({
        "final-notes": { "observacoes": "test" },
        "pa": { "systems": [{ "brand": "Meyer", "model": "Leo", "supplier": "band" }] },
    });
    let pdf = generate_pdf(rider)?;
    assert!(!pdf.page_text(1).contains("Band equipment"));
    let last = pdf.page_text(pdf.page_count() as u32);
    assert!(last.contains("Final notes"));
    assert!(last.contains("Band equipment"));
    Ok(())
}

#[test]
fn test_advisory_sits_on_the_cover_without_final_notes() -> TestResult {
    let rider = json!({ "pa": { "systems": [{ "brand": "Meyer", "model": "Leo", "supplier": "band" }] } });
    let pdf = generate_pdf(rider)?;
    assert!(pdf.page_text(1).contains("Band equipment"));
    Ok(())
}

#[test]
fn test_monitor_channels_account_for_stereo_mixes() -> TestResult {
    let pdf = generate_pdf(json!({ "monitor-mixes": { "mixes": mixes(&["stereo", "mono", "stereo"]) } }))?;
    assert_pdf_page_count!(pdf, 2);
    let page = pdf.page_text(2);
    assert!(page.contains("1/2"));
    assert!(page.contains("4/5"));
    assert!(page.contains("Stereo"));
    assert!(page.contains("Wedge"));
    Ok(())
}

#[test]
fn test_wrapped_monitor_rows_keep_the_header_on_every_page() -> TestResult {
    let mixes: Vec<_> = (1..=24)
        .map(|i| {
            json!({
                "formato": "mono",
                "tipo": "wedge",
                "instrumento": format!("Lead vocal and acoustic guitar position number {} stage left", i)
            })
        })
        .collect();
    let pipeline = pipeline()?;
    let request = RenderRequest::new(json!({ "monitor-mixes": { "mixes": mixes } })).with_locale("en");
    let laid_out = pipeline.layout(&pipeline.assemble(&request))?;

    let monitor_pages: Vec<_> = laid_out
        .pages
        .iter()
        .filter(|page| page.kind == PageKind::MonitorMixes)
        .collect();
    assert!(monitor_pages.len() >= 2, "expected the mixes to overflow one page");
    for page in &monitor_pages {
        assert!(page.texts().any(|t| t == "Out"), "page {} lost the header", page.logical_index);
        assert!(page.texts().any(|t| t == "Instrument / musician"));
    }
    assert!(monitor_pages.iter().any(|page| page.texts().any(|t| t == "24")));
    Ok(())
}

#[test]
fn test_full_rider_renders_every_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(full_rider())?;
    // Cover, sections, inputs, monitors, notes, stage plot.
    assert_pdf_min_pages!(pdf, 6);
    assert_pdf_contains_text!(pdf, "Banda Teste");
    assert_pdf_contains_text!(pdf, "Summer Tour");
    assert_pdf_contains_text!(pdf, "PA system");
    assert_pdf_contains_text!(pdf, "DiGiCo SD12");
    assert_pdf_contains_text!(pdf, "Avid S6L");
    assert_pdf_contains_text!(pdf, "Load-in at 14h");
    assert_pdf_contains_text!(pdf, "Stage plot");
    assert_eq!(pdf.filename, "banda_teste_rider_en.pdf");
    assert_eq!(count_images(&pdf.doc), 1);
    Ok(())
}

#[test]
fn test_contact_email_becomes_a_mailto_link() -> TestResult {
    let pdf = generate_pdf(full_rider())?;
    let uris = extract_link_uris(&pdf.doc);
    assert_eq!(uris, vec!["mailto:ana@example.com".to_string()]);
    Ok(())
}

#[test]
fn test_stage_plot_can_be_left_out() -> TestResult {
    let with = generate_pdf(full_rider())?;
    let without = generate_pdf_with(RenderRequest::new(full_rider()).with_locale("en").with_stage_plot(false))?;
    assert_eq!(without.page_count() + 1, with.page_count());
    assert_eq!(count_images(&without.doc), 0);
    Ok(())
}

#[test]
fn test_free_documents_carry_the_watermark() -> TestResult {
    let free = generate_pdf(json!({}))?;
    assert_pdf_contains_text!(free, "Generated with StageRider");

    let pro = generate_pdf_with(
        RenderRequest::new(json!({}))
            .with_locale("en")
            .with_entitlement(Entitlement::PRO),
    )?;
    assert_pdf_not_contains_text!(pro, "Generated with");
    Ok(())
}

#[test]
fn test_custom_footer_text_is_printed_on_every_page() -> TestResult {
    let request = RenderRequest::new(json!({ "input-list": { "inputs": inputs(25) } }))
        .with_locale("en")
        .with_footer_text("Summer Tour 2026");
    let pdf = generate_pdf_with(request)?;
    for page in 1..=pdf.page_count() as u32 {
        assert!(pdf.page_text(page).contains("Summer Tour 2026"), "page {} lacks footer text", page);
    }
    Ok(())
}

#[test]
fn test_portuguese_is_the_default_locale() -> TestResult {
    let pdf = generate_pdf_with(RenderRequest::new(json!({ "monitor-mixes": { "mixes": mixes(&["mono"]) } })))?;
    assert_pdf_contains_text!(pdf, "Mixes de monitor");
    assert_pdf_contains_text!(pdf, "Gerado com StageRider");
    assert_eq!(pdf.filename, "rider_rider_pt.pdf");
    Ok(())
}

#[test]
fn test_unknown_locale_falls_back_to_portuguese() -> TestResult {
    let pdf = generate_pdf_with(RenderRequest::new(json!({})).with_locale("xx-unknown"))?;
    assert_pdf_contains_text!(pdf, "Gerado com StageRider");
    assert_eq!(pdf.filename, "rider_rider_pt.pdf");
    Ok(())
}

#[test]
fn test_pro_themes_change_the_output() -> TestResult {
    let plain = generate_pdf_with(RenderRequest::new(full_rider()).with_locale("en").with_entitlement(Entitlement::PRO))?;
    let midnight = generate_pdf_with(
        RenderRequest::new(full_rider())
            .with_locale("en")
            .with_theme("midnight")
            .with_entitlement(Entitlement::PRO),
    )?;
    assert_ne!(plain.bytes, midnight.bytes);
    assert_pdf_contains_text!(midnight, "Banda Teste");
    Ok(())
}

#[test]
fn test_sample_rider_renders() -> TestResult {
    let rider: serde_json::Value = serde_json::from_str(include_str!("../demos/sample_rider.json"))?;
    let pdf = generate_pdf(rider)?;
    assert_pdf_min_pages!(pdf, 5);
    assert_pdf_contains_text!(pdf, "Shure Beta 91");
    assert_pdf_contains_text!(pdf, "Accepted alternatives");
    Ok(())
}
