//! Layout primitives. Each module exposes a `render_*` constructor that builds
//! a [`crate::Block`] and a crate-private `layout` step that flattens the block
//! into fragments.

pub mod cover;
pub mod footer;
pub mod image;
pub mod list;
pub mod paragraph;
pub mod section;
pub mod table;

use crate::elements::text_at;
use crate::flow::{Flow, Fragment};
use crate::text::{measure_text_width, wrap_text};
use stagerider_style::TextStyle;

/// Wraps `text` to the current container and pushes one fragment per line.
pub(crate) fn push_wrapped(flow: &mut Flow<'_>, text: &str, style: &TextStyle) -> usize {
    let lines = wrap_text(text, style, flow.width);
    let count = lines.len();
    for line in lines {
        let offset = style.align.offset(flow.width, measure_text_width(&line, style));
        let element = text_at(flow.x + offset, 0.0, &line, *style);
        flow.push(Fragment::new(style.line_height, vec![element]));
    }
    count
}
