//! # stagerider
//!
//! Turns a band's technical rider, given as loosely structured JSON, into a
//! paginated, localized PDF.
//!
//! ```no_run
//! use stagerider::{PipelineBuilder, RenderRequest};
//! use serde_json::json;
//!
//! let pipeline = PipelineBuilder::new().with_default_locale("en").build()?;
//! let pdf = pipeline.render(&RenderRequest::new(json!({
//!     "general-info": { "artistName": "Banda Teste" }
//! })))?;
//! std::fs::write(&pdf.filename, &pdf.bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The stages are also exposed on their own: [`RiderPipeline::assemble`]
//! yields the logical [`Document`], [`RiderPipeline::layout`] the positioned
//! pages.

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{ConfigError, EngineConfig};
pub use error::PipelineError;
pub use pipeline::{
    Entitlement, ExportedPdf, PipelineBuilder, PreviewHandle, PreviewSession, PreviewStore, RenderRequest,
    RiderPipeline, export_filename, sanitize_filename,
};

pub use stagerider_core::{Document, EquipmentCatalog, Page, PageKind};
pub use stagerider_layout::LaidOutDocument;
