use crate::elements::{LayoutElement, PositionedElement, RectElement, filled_rect};
use crate::flow::CardGroup;
use stagerider_types::Rect;

/// Background, border and accent bar for the part of a card that landed on
/// one physical page.
///
/// `draw_top` / `draw_bottom` are false when the card continues from the
/// previous page or onto the next one; the open edge then gets half the card
/// padding as breathing room instead of the full padding spacer.
pub(crate) fn card_decoration(
    group: &CardGroup,
    origin_x: f32,
    content_top: f32,
    content_bottom: f32,
    draw_top: bool,
    draw_bottom: bool,
) -> Vec<PositionedElement> {
    let style = &group.style;
    let top = if draw_top {
        content_top
    } else {
        content_top - style.padding / 2.0
    };
    let bottom = if draw_bottom {
        content_bottom
    } else {
        content_bottom + style.padding / 2.0
    };
    let height = bottom - top;
    if height <= 0.0 {
        return Vec::new();
    }

    let bounds = Rect::new(origin_x + group.x, top, group.width, height);
    let mut elements = vec![PositionedElement::new(
        bounds,
        LayoutElement::Rectangle(RectElement {
            fill: Some(style.background),
            stroke: Some(style.border_color),
            stroke_width: style.border_width,
            radius: style.radius,
        }),
    )];
    if style.accent_width > 0.0 {
        elements.push(filled_rect(
            Rect::new(bounds.x, bounds.y, style.accent_width, height),
            style.accent_color,
        ));
    }
    elements
}
