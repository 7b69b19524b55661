//! # stagerider-core
//!
//! Domain logic for technical riders: reads a sparse rider JSON value and
//! assembles the logical [`stagerider_layout::Document`] that the layout
//! engine paginates.
//!
//! ## Modules
//!
//! - [`rider`]: total, alias-aware access to rider fields, supplier
//!   normalization and embedded image decoding
//! - [`equipment`]: microphone / DI / cable classification and grouping
//! - [`monitors`]: derived output numbering for monitor mixes
//! - [`assembler`]: the page-by-page document assembler

pub mod assembler;
pub mod equipment;
pub mod monitors;
pub mod rider;

pub use assembler::{AssembleOptions, Assembler, assemble};
pub use equipment::{EquipmentCatalog, EquipmentCategory, GroupedItem, group_items};
pub use monitors::{MixFormat, channel_labels};
pub use rider::{Fields, Rider, Supplier};

// Re-export the document model so callers need only this crate to inspect it
pub use stagerider_layout::{Block, Document, Page, PageKind};
