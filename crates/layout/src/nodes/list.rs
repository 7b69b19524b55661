use crate::document::Block;
use crate::elements::text_at;
use crate::flow::{Flow, Fragment};
use crate::nodes::push_wrapped;
use crate::text::wrap_text;
use serde::Serialize;
use stagerider_style::TextStyle;

pub const BULLET: &str = "\u{2022}";

/// A bulleted list with an optional group title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulletList {
    pub title: Option<String>,
    pub items: Vec<String>,
}

/// Returns `None` when there is nothing to list, so empty groups never render.
pub fn render_list(title: Option<&str>, items: Vec<String>) -> Option<Block> {
    if items.is_empty() {
        return None;
    }
    Some(Block::List(BulletList {
        title: title.map(str::to_string),
        items,
    }))
}

impl BulletList {
    pub(crate) fn collect_text(&self, out: &mut Vec<String>) {
        out.extend(self.title.clone());
        out.extend(self.items.iter().cloned());
    }

    pub(crate) fn layout(&self, flow: &mut Flow<'_>) {
        let styles = flow.styles;
        let card = &styles.card;
        if let Some(title) = &self.title {
            push_wrapped(flow, title, &card.group_title);
            flow.keep_last_with_next();
        }
        for item in &self.items {
            push_bullet(flow, item, &card.body, card.bullet_indent);
        }
        flow.add_space(card.gap);
    }
}

/// A single bullet item laid out as one unbreakable fragment.
pub(crate) fn push_bullet(flow: &mut Flow<'_>, item: &str, style: &TextStyle, indent: f32) {
    let text_width = (flow.width - indent).max(1.0);
    let lines = wrap_text(item, style, text_width);
    let mut elements = Vec::with_capacity(lines.len() + 1);
    elements.push(text_at(flow.x, 0.0, BULLET, *style));
    for (i, line) in lines.iter().enumerate() {
        let y = i as f32 * style.line_height;
        elements.push(text_at(flow.x + indent, y, line, *style));
    }
    let height = lines.len() as f32 * style.line_height;
    flow.push(Fragment::new(height, elements));
}
