use crate::LayoutError;
use crate::document::Block;
use crate::flow::Flow;
use crate::nodes::list::push_bullet;
use crate::nodes::push_wrapped;
use serde::Serialize;

/// One entry of a section's suggested-items list, as read from the rider.
#[derive(Debug, Clone, PartialEq)]
pub enum BulletItem {
    Text(String),
    Equipment {
        brand: String,
        model: String,
        band_supplied: bool,
    },
    /// Neither a string nor a brand/model record.
    Malformed,
}

impl BulletItem {
    pub fn label(&self, labels: &SectionLabels) -> String {
        match self {
            BulletItem::Text(text) => text.clone(),
            BulletItem::Equipment {
                brand,
                model,
                band_supplied,
            } => {
                let name = format!("{} {}", brand.trim(), model.trim()).trim().to_string();
                let name = if name.is_empty() {
                    labels.unspecified.clone()
                } else {
                    name
                };
                if *band_supplied {
                    format!("{} ({})", name, labels.band_supplied)
                } else {
                    name
                }
            }
            BulletItem::Malformed => labels.unspecified.clone(),
        }
    }
}

/// Localized strings the section primitive needs. Supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct SectionLabels {
    pub suggested_items: String,
    pub band_supplied: String,
    pub unspecified: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionVariant {
    Card,
    /// Highlighted card used for advisories.
    Notice,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub variant: SectionVariant,
    pub suggested_label: Option<String>,
    pub bullets: Vec<String>,
    pub children: Vec<Block>,
}

pub fn render_section(
    title: &str,
    bullets: &[BulletItem],
    children: Vec<Block>,
    labels: &SectionLabels,
) -> Block {
    let suggested_label = (!bullets.is_empty()).then(|| labels.suggested_items.clone());
    Block::Section(Section {
        title: title.to_string(),
        variant: SectionVariant::Card,
        suggested_label,
        bullets: bullets.iter().map(|b| b.label(labels)).collect(),
        children,
    })
}

/// A highlighted card with plain bullet lines and no "suggested items" label.
pub fn render_notice(title: &str, lines: Vec<String>, children: Vec<Block>) -> Block {
    Block::Section(Section {
        title: title.to_string(),
        variant: SectionVariant::Notice,
        suggested_label: None,
        bullets: lines,
        children,
    })
}

impl Section {
    pub(crate) fn collect_text(&self, out: &mut Vec<String>) {
        out.push(self.title.clone());
        out.extend(self.suggested_label.clone());
        out.extend(self.bullets.iter().cloned());
        for child in &self.children {
            child.collect_text(out);
        }
    }

    pub(crate) fn layout(&self, flow: &mut Flow<'_>) -> Result<(), LayoutError> {
        let styles = flow.styles;
        let card = match self.variant {
            SectionVariant::Card => &styles.card,
            SectionVariant::Notice => &styles.notice,
        };

        flow.begin_card(card);
        push_wrapped(flow, &self.title, &card.title);
        flow.keep_last_with_next();
        flow.add_space(card.gap);

        if !self.bullets.is_empty() {
            if let Some(label) = &self.suggested_label {
                push_wrapped(flow, label, &card.group_title);
                flow.keep_last_with_next();
            }
            for bullet in &self.bullets {
                push_bullet(flow, bullet, &card.body, card.bullet_indent);
            }
            flow.add_space(card.gap);
        }

        for child in &self.children {
            child.layout(flow)?;
        }
        flow.end_card();
        flow.add_space(styles.block_gap);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> SectionLabels {
        SectionLabels {
            suggested_items: "Suggested items".into(),
            band_supplied: "supplied by the band".into(),
            unspecified: "Unspecified".into(),
        }
    }

    fn section(block: Block) -> Section {
        match block {
            Block::Section(s) => s,
            other => panic!("expected a section, got {:?}", other),
        }
    }

    #[test]
    fn equipment_bullets_join_brand_and_model() {
        let items = [
            BulletItem::Text("L-Acoustics K2".into()),
            BulletItem::Equipment {
                brand: "d&b".into(),
                model: "J-Series".into(),
                band_supplied: false,
            },
            BulletItem::Equipment {
                brand: "Meyer".into(),
                model: "Leopard".into(),
                band_supplied: true,
            },
            BulletItem::Malformed,
        ];
        let s = section(render_section("PA", &items, Vec::new(), &labels()));
        assert_eq!(
            s.bullets,
            vec![
                "L-Acoustics K2",
                "d&b J-Series",
                "Meyer Leopard (supplied by the band)",
                "Unspecified",
            ]
        );
        assert_eq!(s.suggested_label.as_deref(), Some("Suggested items"));
    }

    #[test]
    fn suggested_label_absent_without_bullets() {
        let s = section(render_section("FOH", &[], Vec::new(), &labels()));
        assert!(s.suggested_label.is_none());
        assert!(s.bullets.is_empty());
    }

    #[test]
    fn children_text_is_collected_after_bullets() {
        let child = crate::nodes::paragraph::render_paragraph(
            "Child text",
            crate::nodes::paragraph::TextRole::Body,
        );
        let block = render_section("Title", &[BulletItem::Text("a".into())], vec![child], &labels());
        let mut out = Vec::new();
        block.collect_text(&mut out);
        assert_eq!(out, vec!["Title", "Suggested items", "a", "Child text"]);
    }
}
