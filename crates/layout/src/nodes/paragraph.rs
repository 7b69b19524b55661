use crate::document::Block;
use crate::flow::Flow;
use crate::nodes::push_wrapped;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextRole {
    Body,
    Muted,
    /// Large page title.
    Heading,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub text: String,
    pub role: TextRole,
}

pub fn render_paragraph(text: impl Into<String>, role: TextRole) -> Block {
    Block::Paragraph(Paragraph {
        text: text.into(),
        role,
    })
}

impl Paragraph {
    pub(crate) fn layout(&self, flow: &mut Flow<'_>) {
        let styles = flow.styles;
        let style = match self.role {
            TextRole::Body => &styles.body,
            TextRole::Muted => &styles.muted,
            TextRole::Heading => &styles.page_heading,
        };
        push_wrapped(flow, &self.text, style);
        if self.role == TextRole::Heading {
            flow.keep_last_with_next();
            flow.add_space(styles.block_gap * 1.5);
        } else {
            flow.add_space(styles.block_gap);
        }
    }
}
