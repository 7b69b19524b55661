use crate::error::RenderError;
use crate::helpers::{FONT_RESOURCES, PageContext};
use crate::images::embed_image;
use crate::writer::PdfWriter;
use log::{debug, info};
use lopdf::{Dictionary, Object, ObjectId, StringFormat, dictionary};
use stagerider_layout::{LaidOutDocument, LaidOutPage, LayoutElement};
use stagerider_style::font::BASE_FONTS;
use stagerider_types::Color;
use std::collections::HashMap;
use std::io::{Cursor, Seek, Write};

/// A PDF renderer using the `lopdf` object model and a buffered writer.
pub struct LopdfRenderer {
    version: String,
}

impl Default for LopdfRenderer {
    fn default() -> Self {
        Self {
            version: "1.7".to_string(),
        }
    }
}

impl LopdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, document: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
        let cursor = self.render_to(document, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    pub fn render_to<W: Write + Seek>(&self, document: &LaidOutDocument, writer: W) -> Result<W, RenderError> {
        info!("[RENDER] Serializing {} pages.", document.page_count());
        let mut writer = PdfWriter::new(writer, &self.version)?;

        let mut xobject_names = HashMap::new();
        let mut xobjects = Dictionary::new();
        for (i, (key, image)) in document.images().into_iter().enumerate() {
            let id = embed_image(&mut writer, image)?;
            let name = format!("Im{}", i + 1);
            xobjects.set(name.as_bytes(), id);
            xobject_names.insert(key.to_string(), name);
        }
        writer.set_resources(font_dictionary(), xobjects);

        for (index, page) in document.pages.iter().enumerate() {
            let page_id = write_page(&mut writer, document, page, &xobject_names)?;
            debug!("[RENDER] Page {} written as object {:?}.", index + 1, page_id);
            writer.push_page(page_id);
        }

        writer.set_info(dictionary! {
            "Title" => text_string(&document.title),
            "Producer" => text_string(&document.producer),
        });
        Ok(writer.finish()?)
    }
}

/// Serializes an already laid-out document to PDF bytes.
pub fn render_document(document: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
    LopdfRenderer::new().render(document)
}

fn font_dictionary() -> Dictionary {
    let mut font_dict = Dictionary::new();
    for base_font in BASE_FONTS {
        if let Some(internal_name) = FONT_RESOURCES.get(base_font) {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base_font,
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(internal_name.as_bytes(), Object::Dictionary(single_font_dict));
        }
    }
    font_dict
}

fn write_page<W: Write + Seek>(
    writer: &mut PdfWriter<W>,
    document: &LaidOutDocument,
    page: &LaidOutPage,
    xobject_names: &HashMap<String, String>,
) -> Result<ObjectId, RenderError> {
    let (page_width, page_height) = (document.page_width, document.page_height);
    let mut ctx = PageContext::new(page_height, xobject_names);
    if document.background != Color::WHITE {
        ctx.fill_page(page_width, document.background);
    }
    for el in &page.elements {
        ctx.draw_element(el)?;
    }
    let content_id = writer.add_content_stream(ctx.finish())?;

    let annotations = link_annotations(writer, page, page_height);
    let mut page_dict = dictionary! {
        "Type" => "Page",
        "Parent" => writer.pages_id(),
        "MediaBox" => vec![0.0.into(), 0.0.into(), page_width.into(), page_height.into()],
        "Contents" => content_id,
        "Resources" => writer.resources_id(),
    };
    if !annotations.is_empty() {
        page_dict.set(
            "Annots",
            Object::Array(annotations.into_iter().map(Object::Reference).collect()),
        );
    }
    Ok(writer.add_object(page_dict.into()))
}

/// URI link annotations for every link element on the page.
fn link_annotations<W: Write + Seek>(
    writer: &mut PdfWriter<W>,
    page: &LaidOutPage,
    page_height: f32,
) -> Vec<ObjectId> {
    page.elements
        .iter()
        .filter_map(|el| match &el.element {
            LayoutElement::Link(link) => Some((el, link)),
            _ => None,
        })
        .map(|(el, link)| {
            let rect = vec![
                el.x.into(),
                (page_height - (el.y + el.height)).into(),
                (el.x + el.width).into(),
                (page_height - el.y).into(),
            ];
            let action = dictionary! {
                "Type" => "Action",
                "S" => "URI",
                "URI" => Object::string_literal(link.uri.as_str()),
            };
            let annot = dictionary! {
                "Type" => "Annot",
                "Subtype" => "Link",
                "Rect" => rect,
                "Border" => vec![0.into(), 0.into(), 0.into()],
                "A" => action,
            };
            writer.add_object(annot.into())
        })
        .collect()
}

/// A PDF text string: literal for ASCII, UTF-16BE with BOM otherwise.
fn text_string(value: &str) -> Object {
    if value.is_ascii() {
        return Object::string_literal(value);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in value.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagerider_layout::{LinkElement, PositionedElement, Rect, TextElement};
    use stagerider_style::TextStyle;

    fn document(pages: Vec<Vec<PositionedElement>>) -> LaidOutDocument {
        LaidOutDocument {
            title: "Banda Teste Technical Rider".into(),
            locale: "en".into(),
            producer: "StageRider".into(),
            page_width: 595.28,
            page_height: 841.89,
            background: Color::WHITE,
            pages: pages
                .into_iter()
                .enumerate()
                .map(|(i, elements)| LaidOutPage {
                    elements,
                    logical_index: i,
                    kind: stagerider_layout::PageKind::Cover,
                })
                .collect(),
        }
    }

    fn text(content: &str, y: f32) -> PositionedElement {
        PositionedElement::new(
            Rect::new(50.0, y, 200.0, 14.0),
            LayoutElement::Text(TextElement {
                content: content.into(),
                style: TextStyle::new(10.0, Color::BLACK),
            }),
        )
    }

    #[test]
    fn renders_pages_with_extractable_text() {
        let doc = document(vec![vec![text("Hello rider", 60.0)], vec![text("Second", 60.0)]]);
        let bytes = render_document(&doc).unwrap();
        let pdf = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(pdf.get_pages().len(), 2);
        let first = pdf.extract_text(&[1]).unwrap();
        assert!(first.contains("Hello rider"));
    }

    #[test]
    fn mail_links_become_uri_annotations() {
        let link = PositionedElement::new(
            Rect::new(50.0, 100.0, 80.0, 12.0),
            LayoutElement::Link(LinkElement {
                uri: "mailto:foh@example.com".into(),
            }),
        );
        let bytes = render_document(&document(vec![vec![link]])).unwrap();
        let pdf = lopdf::Document::load_mem(&bytes).unwrap();
        let page_id = *pdf.get_pages().get(&1).unwrap();
        let page = pdf.get_dictionary(page_id).unwrap();
        let annots = page.get(b"Annots").unwrap().as_array().unwrap();
        assert_eq!(annots.len(), 1);
        let raw = String::from_utf8_lossy(&bytes);
        assert!(raw.contains("(mailto:foh@example.com)"));
    }

    #[test]
    fn non_ascii_titles_use_utf16() {
        match text_string("S\u{e3}o Paulo") {
            Object::String(bytes, StringFormat::Hexadecimal) => assert_eq!(&bytes[..2], &[0xFE, 0xFF]),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(text_string("Rider"), Object::String(_, StringFormat::Literal)));
    }
}
