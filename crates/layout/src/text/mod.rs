//! Text measurement and line breaking for the Helvetica base fonts.

mod metrics;
mod wrap;

pub use metrics::{char_advance, measure_text_width};
pub use wrap::{truncate_lines, wrap_text};
