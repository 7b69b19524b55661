//! PDF serializer for laid-out stagerider documents using lopdf.
//!
//! The layout engine hands over fully positioned physical pages; this crate
//! only translates them into PDF objects. Text uses the standard Type1
//! Helvetica family with WinAnsi encoding, so no fonts are embedded.

mod error;
mod helpers;
mod images;
mod renderer;
mod writer;

pub use error::RenderError;
pub use helpers::to_win_ansi;
pub use renderer::{LopdfRenderer, render_document};
pub use writer::PdfWriter;
