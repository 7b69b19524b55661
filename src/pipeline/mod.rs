mod builder;
mod export;
mod orchestrator;
mod preview;

pub use builder::PipelineBuilder;
pub use export::{Entitlement, ExportedPdf, export_filename, resolve_theme_for, sanitize_filename};
pub use orchestrator::{RenderRequest, RiderPipeline};
pub use preview::{PreviewHandle, PreviewSession, PreviewStore};
