use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Image error: {0}")]
    Image(String),
    #[error("Generic layout error: {0}")]
    Generic(String),
}

mod algorithms;
pub mod document;
pub(crate) mod engine;
pub mod elements;
mod flow;
pub mod nodes;
mod painting;
pub mod resource;
pub mod text;

pub use self::document::{Block, Document, Page, PageKind};
pub use self::elements::{
    ImageElement, LayoutElement, LineElement, LinkElement, PositionedElement, RectElement, TextElement,
};
pub use self::engine::{LaidOutDocument, LaidOutPage, LayoutEngine};
pub use self::nodes::cover::{Contact, CoverContacts, CoverContent, CoverLabels, render_cover};
pub use self::nodes::footer::{FooterBlock, FooterTemplate, render_footer};
pub use self::nodes::image::{intrinsic_size, render_image};
pub use self::nodes::list::render_list;
pub use self::nodes::paragraph::{TextRole, render_paragraph};
pub use self::nodes::section::{BulletItem, SectionLabels, render_notice, render_section};
pub use self::nodes::table::{Column, TableChunk, render_table};
pub use self::resource::{ImageData, SharedData};

// Re-export geometry types used by nodes from base to prevent type mismatches
pub use stagerider_types::{Rect, Size};
