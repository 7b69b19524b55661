use super::Context;
use crate::rider::decode_image;
use stagerider_layout::{Page, PageKind, TextRole, render_image, render_paragraph};

/// The notes text verbatim, followed by the band-equipment advisory.
pub(super) fn final_notes_page(ctx: &Context<'_>) -> Option<Page> {
    let notes = ctx.rider.final_notes()?;
    let mut blocks = vec![
        render_paragraph(ctx.t.t("notes.title"), TextRole::Heading),
        render_paragraph(notes, TextRole::Body),
    ];
    blocks.extend(ctx.band.advisory(&ctx.t));
    Some(Page::new(PageKind::FinalNotes, blocks))
}

pub(super) fn stage_plot_page(ctx: &Context<'_>) -> Option<Page> {
    if !ctx.options.include_stage_plot {
        return None;
    }
    let plot = ctx
        .rider
        .general_info()
        .raw(&["stagePlot", "stagePlotImage", "mapaPalco"])
        .and_then(decode_image)?;
    Some(Page::new(
        PageKind::StagePlot,
        vec![
            render_paragraph(ctx.t.t("stagePlot.title"), TextRole::Heading),
            render_image(plot, None),
        ],
    ))
}
