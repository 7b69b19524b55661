use super::{Context, bullet_items};
use crate::rider::{AUXILIARY_EQUIPMENT, CONSOLES, Fields, LISTENING_SYSTEMS, PA, Supplier};
use stagerider_i18n::Translator;
use stagerider_layout::{Block, Page, PageKind, TextRole, render_list, render_paragraph, render_section};

pub(super) const LISTENING_ITEMS: &[&str] = &["iem", "wedges", "sidefills", "drumfill", "headphones"];
pub(super) const AUXILIARY_ITEMS: &[&str] = &["risers", "powerOutlets", "diBoxes", "micStands", "talkback", "intercom"];

pub(super) const SUPPLIER: &[&str] = &["supplier", "fornecedor"];
pub(super) const BRAND: &[&str] = &["brand", "marca"];
pub(super) const MODEL: &[&str] = &["model", "modelo"];

/// A field inside one of the PA groups.
enum GroupField {
    Text(&'static str),
    /// Rendered as its label when true, never when false.
    Flag(&'static str),
    Quantity(&'static str),
}

use GroupField::{Flag, Quantity, Text};

const PA_GROUPS: &[(&str, &[GroupField])] = &[
    ("performance", &[Text("spl"), Text("frequencyResponse"), Text("headroom")]),
    (
        "configuration",
        &[Flag("lineArray"), Flag("stereo"), Flag("flown"), Flag("groundStack"), Flag("delayTowers")],
    ),
    ("coverage", &[Text("area"), Text("audience"), Text("distance")]),
    (
        "processing",
        &[Text("processor"), Text("measurementSystem"), Flag("systemTech"), Flag("timeAlignment")],
    ),
    ("subwoofers", &[Quantity("quantity"), Text("model"), Flag("cardioid"), Flag("auxFed")]),
    ("fills", &[Flag("frontFill"), Flag("inFill"), Flag("outFill"), Text("notes")]),
];

/// A listening or auxiliary item: shown when a quantity or a model is set.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CountedItem {
    pub label: String,
    pub quantity: Option<u32>,
    pub model: String,
    pub supplier: Supplier,
}

impl CountedItem {
    pub fn describe(&self) -> String {
        match self.quantity {
            Some(quantity) => format!("{}: {}x {}", self.label, quantity, self.model),
            None => format!("{}: {}", self.label, self.model),
        }
    }
}

pub(super) fn counted_items(section: Fields<'_>, namespace: &str, keys: &[&str], t: &Translator) -> Vec<CountedItem> {
    keys.iter()
        .filter_map(|key| counted_item(section, namespace, key, t))
        .collect()
}

pub(super) fn counted_item(section: Fields<'_>, namespace: &str, key: &str, t: &Translator) -> Option<CountedItem> {
    let item = section.get(&[key]);
    let quantity = item.quantity(&["quantity", "quantidade"]);
    let model = item.text(MODEL);
    if quantity.is_none() && model.is_none() {
        return None;
    }
    Some(CountedItem {
        label: t.t(&format!("{}.{}", namespace, key)),
        quantity,
        model: model.unwrap_or_else(|| t.t(&format!("{}.defaultModel.{}", namespace, key))),
        supplier: item.supplier(SUPPLIER),
    })
}

pub(super) fn join_name(brand: Option<&str>, model: Option<&str>) -> String {
    [brand, model].into_iter().flatten().collect::<Vec<_>>().join(" ")
}

pub(super) fn sections_page(ctx: &Context<'_>) -> Option<Page> {
    let consoles = ctx.rider.section(CONSOLES);
    let sections: Vec<Block> = [
        pa_section(ctx),
        console_section(ctx, consoles.get(&["foh", "frontOfHouse"]), "sections.foh"),
        console_section(ctx, consoles.get(&["monitor", "mon"]), "sections.monitor"),
        counted_section(ctx, LISTENING_SYSTEMS, "listening", LISTENING_ITEMS, "sections.listening"),
        counted_section(ctx, AUXILIARY_EQUIPMENT, "auxiliary", AUXILIARY_ITEMS, "sections.auxiliary"),
    ]
    .into_iter()
    .flatten()
    .collect();

    if sections.is_empty() {
        return None;
    }
    let mut blocks = vec![render_paragraph(ctx.t.t("sections.title"), TextRole::Heading)];
    blocks.extend(sections);
    Some(Page::new(PageKind::Sections, blocks))
}

fn pa_section(ctx: &Context<'_>) -> Option<Block> {
    let pa = ctx.rider.section(PA);
    let systems = bullet_items(pa.array(&["systems", "sistemas"]));

    let groups: Vec<Block> = PA_GROUPS
        .iter()
        .filter_map(|(key, fields)| {
            let group = pa.get(&[*key]);
            let mut lines = group_lines(group, fields, &ctx.t);
            if *key == "subwoofers" && group.supplier(SUPPLIER).is_artist() {
                lines.push(ctx.t.t("common.suppliedByBand"));
            }
            render_list(Some(&ctx.t.t(&format!("pa.{}", key))), lines)
        })
        .collect();

    if systems.is_empty() && groups.is_empty() {
        return None;
    }
    Some(render_section(
        &ctx.t.t("sections.pa"),
        &systems,
        groups,
        &ctx.section_labels(),
    ))
}

fn group_lines(group: Fields<'_>, fields: &[GroupField], t: &Translator) -> Vec<String> {
    fields
        .iter()
        .filter_map(|field| match field {
            Text(key) => group
                .text(&[*key])
                .map(|value| format!("{}: {}", t.t(&format!("pa.{}", key)), value)),
            Quantity(key) => group
                .quantity(&[*key])
                .map(|value| format!("{}: {}", t.t(&format!("pa.{}", key)), value)),
            Flag(key) => group.flag(&[*key]).then(|| t.t(&format!("pa.{}", key))),
        })
        .collect()
}

fn console_section(ctx: &Context<'_>, console: Fields<'_>, title_key: &str) -> Option<Block> {
    let brand = console.text(BRAND);
    let model = console.text(MODEL);
    let notes = console.text(&["notes", "observacoes"]);
    let alternatives: Vec<String> = bullet_items(console.array(&["alternatives", "alternates", "alternativas"]))
        .iter()
        .map(|item| item.label(&ctx.section_labels()))
        .collect();

    let mut lines = Vec::new();
    if let Some(brand) = brand.as_deref() {
        let mut line = format!("{}: {}", ctx.t.t("consoles.preferred"), join_name(Some(brand), model.as_deref()));
        if let Some(notes) = &notes {
            line.push_str(&format!(" - {}", notes));
        }
        lines.push(ctx.annotate(line, console.supplier(SUPPLIER)));
    } else if let Some(notes) = &notes {
        lines.push(format!("{}: {}", ctx.t.t("consoles.notes"), notes));
    }

    let children: Vec<Block> = [
        render_list(None, lines),
        render_list(Some(&ctx.t.t("consoles.alternatives")), alternatives),
    ]
    .into_iter()
    .flatten()
    .collect();

    if children.is_empty() {
        return None;
    }
    Some(render_section(&ctx.t.t(title_key), &[], children, &ctx.section_labels()))
}

fn counted_section(
    ctx: &Context<'_>,
    section: &[&str],
    namespace: &str,
    keys: &[&str],
    title_key: &str,
) -> Option<Block> {
    let lines: Vec<String> = counted_items(ctx.rider.section(section), namespace, keys, &ctx.t)
        .into_iter()
        .map(|item| ctx.annotate(item.describe(), item.supplier))
        .collect();
    let list = render_list(None, lines)?;
    Some(render_section(&ctx.t.t(title_key), &[], vec![list], &ctx.section_labels()))
}
