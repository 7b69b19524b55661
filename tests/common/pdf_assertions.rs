#![allow(dead_code)]

use lopdf::{Document as LopdfDocument, Object};

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// URIs of every link annotation, in page order
pub fn extract_link_uris(doc: &LopdfDocument) -> Vec<String> {
    let mut uris = Vec::new();
    for (_page_num, page_id) in doc.get_pages() {
        let Ok(page_dict) = doc.get_dictionary(page_id) else {
            continue;
        };
        let Ok(annots) = page_dict.get(b"Annots").and_then(Object::as_array) else {
            continue;
        };
        for annot in annots {
            let dict = match annot.as_reference() {
                Ok(id) => doc.get_dictionary(id).ok(),
                Err(_) => annot.as_dict().ok(),
            };
            let Some(dict) = dict else { continue };
            if !matches!(dict.get(b"Subtype").and_then(Object::as_name), Ok(b"Link")) {
                continue;
            }
            if let Ok(action) = dict.get(b"A").and_then(Object::as_dict) {
                if let Ok(Object::String(bytes, _)) = action.get(b"URI") {
                    uris.push(String::from_utf8_lossy(bytes).to_string());
                }
            }
        }
    }
    uris
}

/// A text entry of the document information dictionary
pub fn info_string(doc: &LopdfDocument, key: &[u8]) -> Option<String> {
    let info = match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_dictionary(*id).ok()?,
        Object::Dictionary(dict) => dict,
        _ => return None,
    };
    match info.get(key).ok()? {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        _ => None,
    }
}

fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xFE, 0xFF]) {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(bytes).to_string()
    }
}

/// Count image XObject streams, soft masks included
pub fn count_images(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter(|object| match object {
            Object::Stream(stream) => matches!(stream.dict.get(b"Subtype").and_then(Object::as_name), Ok(b"Image")),
            _ => false,
        })
        .count()
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_dictionary(*page_id).ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_f32().ok()? - arr[0].as_f32().ok()?;
    let height = arr[3].as_f32().ok()? - arr[1].as_f32().ok()?;
    Some((width, height))
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}
