use super::sections::{AUXILIARY_ITEMS, BRAND, LISTENING_ITEMS, MODEL, SUPPLIER, counted_item, join_name};
use crate::rider::{AUXILIARY_EQUIPMENT, CONSOLES, Fields, LISTENING_SYSTEMS, PA, Rider};
use stagerider_i18n::Translator;
use stagerider_layout::{Block, TextRole, render_list, render_notice, render_paragraph};

const INPUT_SUPPLIER: &[&str] = &["suppliedByArtist", "fornecidoPelaBanda", "supplier"];

/// Band-supplied equipment found anywhere in the rider.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct BandEquipment {
    /// One line per band-supplied section item.
    pub items: Vec<String>,
    pub input_channels: usize,
}

impl BandEquipment {
    pub fn survey(rider: Rider<'_>, t: &Translator) -> Self {
        let mut items = Vec::new();

        let pa = rider.section(PA);
        let pa_title = t.t("sections.pa");
        for system in pa.array(&["systems", "sistemas"]) {
            let system = Fields::new(system);
            if system.supplier(SUPPLIER).is_artist() {
                items.push(labelled(&pa_title, &system));
            }
        }
        let subwoofers = pa.get(&["subwoofers"]);
        if subwoofers.supplier(SUPPLIER).is_artist() {
            items.push(labelled(&t.t("pa.subwoofers"), &subwoofers));
        }

        let consoles = rider.section(CONSOLES);
        for (aliases, title_key) in [
            (&["foh", "frontOfHouse"][..], "sections.foh"),
            (&["monitor", "mon"][..], "sections.monitor"),
        ] {
            let console = consoles.get(aliases);
            if console.supplier(SUPPLIER).is_artist() {
                items.push(labelled(&t.t(title_key), &console));
            }
        }

        for (section, namespace, keys) in [
            (LISTENING_SYSTEMS, "listening", LISTENING_ITEMS),
            (AUXILIARY_EQUIPMENT, "auxiliary", AUXILIARY_ITEMS),
        ] {
            let fields = rider.section(section);
            for key in keys {
                if !fields.get(&[*key]).supplier(SUPPLIER).is_artist() {
                    continue;
                }
                // A supplier flag alone still counts, named by its label.
                items.push(match counted_item(fields, namespace, key, t) {
                    Some(item) => item.describe(),
                    None => t.t(&format!("{}.{}", namespace, key)),
                });
            }
        }

        let input_channels = rider
            .inputs()
            .iter()
            .filter(|entry| is_band_supplied(Fields::new(entry)))
            .count();

        if !items.is_empty() || input_channels > 0 {
            log::debug!(
                "[ASSEMBLER] Band supplies {} section items and {} input channels.",
                items.len(),
                input_channels
            );
        }
        Self { items, input_channels }
    }

    pub fn any(&self) -> bool {
        !self.items.is_empty() || self.input_channels > 0
    }

    /// The cross-section "band equipment" notice, or `None` when the band
    /// brings nothing.
    pub fn advisory(&self, t: &Translator) -> Option<Block> {
        if !self.any() {
            return None;
        }
        let mut lines = self.items.clone();
        if self.input_channels > 0 {
            let count = self.input_channels.to_string();
            lines.push(t.t_with("advisory.inputCount", &[("count", count.as_str())]));
        }
        let mut children = vec![render_paragraph(t.t("advisory.body"), TextRole::Body)];
        children.extend(render_list(None, lines));
        Some(render_notice(&t.t("advisory.title"), Vec::new(), children))
    }
}

pub(super) fn is_band_supplied(entry: Fields<'_>) -> bool {
    entry.supplier(INPUT_SUPPLIER).is_artist()
}

/// `"{title}: {brand model}"`, or just the title when both are blank.
fn labelled(title: &str, fields: &Fields<'_>) -> String {
    let name = join_name(fields.text(BRAND).as_deref(), fields.text(MODEL).as_deref());
    if name.is_empty() {
        title.to_string()
    } else {
        format!("{}: {}", title, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn survey_collects_every_section() {
        let rider = json!({
            "pa": {
                "systems": ["K2", { "brand": "Meyer", "model": "Leo", "supplier": "band" }],
                "subwoofers": { "model": "1100-LFC", "supplier": true },
            },
            "consoles": { "foh": { "brand": "Yamaha", "supplier": "banda" }, "monitor": { "supplier": "venue" } },
            "listening-systems": { "iem": { "quantity": 2, "supplier": "band" } },
            "auxiliary-equipment": { "risers": { "quantity": 1, "supplier": "promoter" } },
            "input-list": { "inputs": [{ "suppliedByArtist": true }, { "suppliedByArtist": "band" }, {}] },
        });
        let band = BandEquipment::survey(Rider::new(&rider), &Translator::new("en"));
        assert_eq!(
            band.items,
            vec![
                "PA system: Meyer Leo",
                "Subwoofers: 1100-LFC",
                "FOH console: Yamaha",
                "In-ear monitors: 2x Wireless IEM system",
            ]
        );
        assert_eq!(band.input_channels, 2);
    }

    #[test]
    fn supplier_flag_alone_counts_for_listening_and_auxiliary_items() {
        let rider = json!({
            "listening-systems": { "iem": { "supplier": "band" } },
            "auxiliary-equipment": { "risers": { "supplier": true }, "talkback": { "supplier": "venue" } },
        });
        let band = BandEquipment::survey(Rider::new(&rider), &Translator::new("en"));
        assert_eq!(band.items, vec!["In-ear monitors", "Risers"]);
        assert!(band.any());
    }

    #[test]
    fn advisory_lists_items_and_input_count() {
        let band = BandEquipment {
            items: vec!["FOH console: Yamaha".into()],
            input_channels: 3,
        };
        let t = Translator::new("en");
        let mut texts = Vec::new();
        if let Some(Block::Section(section)) = band.advisory(&t) {
            texts.push(section.title.clone());
            for child in &section.children {
                texts.extend(child.texts());
            }
        }
        assert_eq!(texts[0], "Band equipment");
        assert!(texts.contains(&"FOH console: Yamaha".to_string()));
        assert!(texts.contains(&"3 input-list channels".to_string()));
    }

    #[test]
    fn nothing_band_supplied_means_no_advisory() {
        let band = BandEquipment::survey(Rider::new(&json!({ "pa": { "systems": ["K2"] } })), &Translator::new("en"));
        assert!(!band.any());
        assert!(band.advisory(&Translator::new("en")).is_none());
    }
}
