use crate::LayoutError;
use crate::algorithms::pagination::paginate;
use crate::document::{Document, PageKind};
use crate::elements::{LayoutElement, PositionedElement};
use crate::flow::Flow;
use crate::resource::ImageData;
use log::{debug, info};
use stagerider_style::StyleRuleSet;
use stagerider_types::Color;
use std::collections::BTreeMap;

/// One physical output page.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutPage {
    pub elements: Vec<PositionedElement>,
    /// Index of the logical page this physical page belongs to.
    pub logical_index: usize,
    pub kind: PageKind,
}

impl LaidOutPage {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(PositionedElement::text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub title: String,
    pub locale: String,
    pub producer: String,
    pub page_width: f32,
    pub page_height: f32,
    pub background: Color,
    pub pages: Vec<LaidOutPage>,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Distinct images referenced by the document, keyed by content hash.
    pub fn images(&self) -> BTreeMap<&str, &ImageData> {
        self.pages
            .iter()
            .flat_map(|p| p.elements.iter())
            .filter_map(|e| match &e.element {
                LayoutElement::Image(img) => Some((img.image.key(), &img.image)),
                _ => None,
            })
            .collect()
    }
}

/// Turns logical pages into positioned physical pages.
pub struct LayoutEngine {
    styles: StyleRuleSet,
}

impl LayoutEngine {
    pub fn new(styles: StyleRuleSet) -> Self {
        Self { styles }
    }

    pub fn styles(&self) -> &StyleRuleSet {
        &self.styles
    }

    pub fn layout(&self, document: &Document) -> Result<LaidOutDocument, LayoutError> {
        info!("[LAYOUT] Laying out {} logical pages.", document.pages.len());
        let mut pages = Vec::new();

        for (index, page) in document.pages.iter().enumerate() {
            let mut flow = Flow::new(&self.styles);
            for block in &page.blocks {
                block.layout(&mut flow)?;
            }
            let (fragments, groups) = flow.finish();
            debug!(
                "[LAYOUT] Logical page {} ({:?}) flattened into {} fragments.",
                index,
                page.kind,
                fragments.len()
            );
            for elements in paginate(&self.styles, fragments, &groups) {
                pages.push(LaidOutPage {
                    elements,
                    logical_index: index,
                    kind: page.kind,
                });
            }
        }

        // Second pass: the physical total is known only now.
        let total = pages.len();
        for (i, page) in pages.iter_mut().enumerate() {
            let footer = document.footer.render(i, total);
            page.elements.extend(footer.place(&self.styles));
        }
        info!("[LAYOUT] Produced {} physical pages.", total);

        let (page_width, page_height) = self.styles.page.dimensions();
        Ok(LaidOutDocument {
            title: document.title.clone(),
            locale: document.locale.clone(),
            producer: document.footer.product.clone(),
            page_width,
            page_height,
            background: self.styles.page.background,
            pages,
        })
    }
}
