use super::Context;
use super::band::is_band_supplied;
use crate::equipment::{EquipmentCategory, group_items};
use crate::monitors::{MixFormat, channel_labels};
use crate::rider::Fields;
use stagerider_i18n::translate;
use stagerider_layout::{
    Block, Column, Page, PageKind, TextRole, render_list, render_notice, render_paragraph, render_table,
};
use stagerider_style::TextAlign;

const MIC_OR_DI: &[&str] = &["microphoneOrDI", "microfone", "micDI"];

fn input_columns() -> Vec<Column> {
    vec![
        Column::new(8.0).align(TextAlign::Center),
        Column::new(24.0).max_lines(2),
        Column::new(24.0).max_lines(2),
        Column::new(16.0).max_lines(2),
        Column::new(8.0).align(TextAlign::Center),
        Column::new(20.0).max_lines(2),
    ]
}

fn monitor_columns() -> Vec<Column> {
    vec![
        Column::new(12.0).align(TextAlign::Center),
        Column::new(44.0).max_lines(2),
        Column::new(22.0),
        Column::new(22.0),
    ]
}

pub(super) fn input_list_page(ctx: &Context<'_>) -> Option<Page> {
    let inputs = ctx.rider.inputs();
    if inputs.is_empty() {
        return None;
    }
    let t = &ctx.t;
    let header: Vec<String> = ["channel", "source", "mic", "stand", "phantom", "notes"]
        .iter()
        .map(|key| t.t(&format!("inputs.{}", key)))
        .collect();

    let rows: Vec<Vec<String>> = inputs
        .iter()
        .enumerate()
        .map(|(index, entry)| input_row(ctx, index, Fields::new(entry)))
        .collect();

    let mut blocks = vec![render_paragraph(t.t("inputs.title"), TextRole::Heading)];
    blocks.extend(render_table(
        &input_columns(),
        &header,
        &rows,
        ctx.options.input_rows_per_page.max(1),
        ctx.options.min_row_height,
    ));
    blocks.extend(input_advisory(ctx, inputs.iter().map(Fields::new)));
    Some(Page::new(PageKind::InputList, blocks))
}

/// Channel, source, mic/DI, stand, phantom, notes. A missing channel number
/// falls back to the entry's position.
fn input_row(ctx: &Context<'_>, index: usize, entry: Fields<'_>) -> Vec<String> {
    let t = &ctx.t;
    let stand = entry
        .text(&["standType", "suporte"])
        .map(|key| translate(t.locale(), "stands", &key, None))
        .unwrap_or_default();
    let phantom = if entry.flag(&["requiresPhantomPower", "phantom"]) {
        t.t("common.yes")
    } else {
        t.t("common.no")
    };
    vec![
        entry
            .text(&["channelNumber", "canal"])
            .unwrap_or_else(|| (index + 1).to_string()),
        entry.text(&["source", "fonte"]).unwrap_or_default(),
        entry.text(MIC_OR_DI).unwrap_or_default(),
        stand,
        phantom,
        String::new(),
    ]
}

/// Band-owned input equipment grouped by category, one line per category.
fn input_advisory<'a>(ctx: &Context<'_>, entries: impl Iterator<Item = Fields<'a>>) -> Option<Block> {
    let labels: Vec<String> = entries
        .filter(|entry| is_band_supplied(*entry))
        .filter_map(|entry| entry.text(MIC_OR_DI))
        .collect();

    let lines: Vec<String> = EquipmentCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let groups = group_items(
                labels
                    .iter()
                    .filter(|label| ctx.catalog.classify(label) == category)
                    .map(String::as_str),
            );
            if groups.is_empty() {
                return None;
            }
            let joined = groups.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
            Some(format!("{}: {}", ctx.t.t(&format!("advisory.{}", category.locale_key())), joined))
        })
        .collect();

    let list = render_list(None, lines)?;
    Some(render_notice(
        &ctx.t.t("advisory.title"),
        Vec::new(),
        vec![render_paragraph(ctx.t.t("advisory.inputsIntro"), TextRole::Muted), list],
    ))
}

pub(super) fn monitor_mixes_page(ctx: &Context<'_>) -> Option<Page> {
    let mixes: Vec<Fields<'_>> = ctx.rider.mixes().iter().map(Fields::new).collect();
    if mixes.is_empty() {
        return None;
    }
    let t = &ctx.t;
    let formats: Vec<MixFormat> = mixes
        .iter()
        .map(|mix| MixFormat::from_label(&mix.text(&["mixFormat", "formato"]).unwrap_or_default()))
        .collect();

    let rows: Vec<Vec<String>> = mixes
        .iter()
        .zip(&formats)
        .zip(channel_labels(&formats))
        .map(|((mix, format), channel)| {
            let kind = mix
                .text(&["mixKind", "tipo"])
                .map(|kind| translate(t.locale(), "monitors", "kinds", Some(&kind.to_lowercase())))
                .unwrap_or_default();
            vec![
                channel,
                mix.text(&["instrumentOrMusicianLabel", "instrumento", "label"])
                    .unwrap_or_default(),
                kind,
                translate(t.locale(), "monitors", "formats", Some(format.key())),
            ]
        })
        .collect();

    let header: Vec<String> = ["channel", "mix", "kind", "format"]
        .iter()
        .map(|key| t.t(&format!("monitors.{}", key)))
        .collect();

    let mut blocks = vec![render_paragraph(t.t("monitors.title"), TextRole::Heading)];
    blocks.extend(render_table(
        &monitor_columns(),
        &header,
        &rows,
        ctx.options.monitor_rows_per_page.max(1),
        ctx.options.min_row_height,
    ));
    Some(Page::new(PageKind::MonitorMixes, blocks))
}
