//! The logical document model produced by the assembler and consumed by the
//! layout engine.
//!
//! A [`Document`] is an ordered list of logical [`Page`]s. Each page is a list
//! of [`Block`]s built by the primitives in [`crate::nodes`]. A logical page may
//! span several physical pages once laid out.

use crate::LayoutError;
use crate::flow::Flow;
use crate::nodes::cover::Cover;
use crate::nodes::footer::{FooterBlock, FooterTemplate};
use crate::nodes::image::ImageBlock;
use crate::nodes::list::BulletList;
use crate::nodes::paragraph::Paragraph;
use crate::nodes::section::Section;
use crate::nodes::table::TableChunk;
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    pub locale: String,
    pub theme: String,
    pub pages: Vec<Page>,
    /// Resolved once the physical page count is known.
    pub footer: FooterTemplate,
}

impl Document {
    pub fn page(&self, kind: PageKind) -> Option<&Page> {
        self.pages.iter().find(|p| p.kind == kind)
    }

    pub fn page_kinds(&self) -> Vec<PageKind> {
        self.pages.iter().map(|p| p.kind).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Cover,
    Sections,
    InputList,
    MonitorMixes,
    FinalNotes,
    StagePlot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub kind: PageKind,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new(kind: PageKind, blocks: Vec<Block>) -> Self {
        Self { kind, blocks }
    }

    /// Every piece of visible text on the page, in reading order.
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        for block in &self.blocks {
            block.collect_text(&mut out);
        }
        out
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    pub fn tables(&self) -> Vec<&TableChunk> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Table(t) => Some(t),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Paragraph(Paragraph),
    List(BulletList),
    Section(Section),
    Table(TableChunk),
    Cover(Cover),
    Image(ImageBlock),
    Footer(FooterBlock),
}

impl Block {
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_text(&mut out);
        out
    }

    pub(crate) fn collect_text(&self, out: &mut Vec<String>) {
        match self {
            Block::Paragraph(p) => out.push(p.text.clone()),
            Block::List(list) => list.collect_text(out),
            Block::Section(section) => section.collect_text(out),
            Block::Table(table) => table.collect_text(out),
            Block::Cover(cover) => cover.collect_text(out),
            Block::Image(image) => out.extend(image.caption.clone()),
            Block::Footer(footer) => footer.collect_text(out),
        }
    }

    pub(crate) fn layout(&self, flow: &mut Flow<'_>) -> Result<(), LayoutError> {
        match self {
            Block::Paragraph(p) => p.layout(flow),
            Block::List(list) => list.layout(flow),
            Block::Section(section) => section.layout(flow)?,
            Block::Table(table) => table.layout(flow),
            Block::Cover(cover) => cover.layout(flow)?,
            Block::Image(image) => image.layout(flow)?,
            Block::Footer(_) => {
                debug!("[LAYOUT] Footer blocks are placed after pagination; skipping inline footer.")
            }
        }
        Ok(())
    }
}
