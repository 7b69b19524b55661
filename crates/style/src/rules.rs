//! The resolved style rule set consumed by every layout primitive.
//!
//! [`build_styles`] is the only place that reads a [`Palette`]; everything
//! downstream sees concrete colors, sizes and spacing in points.

use crate::dimension::{Margins, PageSize, mm_to_pt};
use crate::font::{FontStyle, FontWeight, base_font_name};
use crate::text::TextAlign;
use crate::theme::Palette;
use serde::Serialize;
use stagerider_types::{Color, Size};

const PAGE_MARGIN_MM: f32 = 15.0;
const FOOTER_BAND_MM: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub font_size: f32,
    pub line_height: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(font_size: f32, color: Color) -> Self {
        Self {
            font_size,
            line_height: half_point(font_size * 1.3),
            weight: FontWeight::Regular,
            style: FontStyle::Normal,
            color,
            align: TextAlign::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn italic(mut self) -> Self {
        self.style = FontStyle::Italic;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn base_font(&self) -> &'static str {
        base_font_name(self.weight, self.style)
    }
}

/// Rounds to the nearest half point so line boxes stay on a stable grid.
fn half_point(value: f32) -> f32 {
    (value * 2.0).round() / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageLayout {
    pub size: PageSize,
    pub margins: Margins,
    /// Space reserved above the bottom margin for the running footer.
    pub footer_height: f32,
    pub background: Color,
}

impl PageLayout {
    pub fn dimensions(&self) -> (f32, f32) {
        self.size.dimensions_pt()
    }

    pub fn content_width(&self) -> f32 {
        self.dimensions().0 - self.margins.horizontal()
    }

    /// Height available to page content between the top margin and the footer band.
    pub fn content_height(&self) -> f32 {
        self.dimensions().1 - self.margins.vertical() - self.footer_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardStyle {
    pub background: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub radius: f32,
    pub padding: f32,
    pub accent_color: Color,
    pub accent_width: f32,
    pub title: TextStyle,
    pub group_title: TextStyle,
    pub body: TextStyle,
    pub bullet_indent: f32,
    /// Vertical space between consecutive cards.
    pub gap: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableStyle {
    pub header_background: Color,
    pub header_text: TextStyle,
    pub body_text: TextStyle,
    pub body_background: Color,
    pub zebra_background: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub cell_padding_x: f32,
    pub cell_padding_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FooterStyle {
    pub text: TextStyle,
    pub rule_color: Color,
    pub rule_width: f32,
    /// Distance from the bottom page edge to the footer baseline.
    pub baseline_offset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverStyle {
    pub band_color: Color,
    pub band_height: f32,
    pub title: TextStyle,
    pub subtitle: TextStyle,
    pub meta: TextStyle,
    pub section_label: TextStyle,
    pub contact_name: TextStyle,
    pub contact_detail: TextStyle,
    pub link_color: Color,
    pub logo_box: Size,
    pub hero_box: Size,
    pub spacing: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRuleSet {
    pub page: PageLayout,
    pub page_heading: TextStyle,
    pub body: TextStyle,
    pub muted: TextStyle,
    pub card: CardStyle,
    pub notice: CardStyle,
    pub table: TableStyle,
    pub footer: FooterStyle,
    pub cover: CoverStyle,
    /// Bounding box for full-page images such as the stage plot.
    pub image_box: Size,
    pub block_gap: f32,
}

/// Derives the complete style rule set from a palette. Pure and deterministic.
pub fn build_styles(palette: &Palette) -> StyleRuleSet {
    let page = PageLayout {
        size: PageSize::A4,
        margins: Margins::all_mm(PAGE_MARGIN_MM),
        footer_height: mm_to_pt(FOOTER_BAND_MM),
        background: palette.background,
    };
    let content_width = page.content_width();

    let body = TextStyle::new(9.5, palette.text);
    let muted = TextStyle::new(8.5, palette.text_muted);

    let card = CardStyle {
        background: palette.background,
        border_color: palette.border,
        border_width: 0.75,
        radius: 4.0,
        padding: 10.0,
        accent_color: palette.primary,
        accent_width: 3.0,
        title: TextStyle::new(12.0, palette.primary).bold(),
        group_title: TextStyle::new(9.5, palette.secondary).bold(),
        body,
        bullet_indent: 10.0,
        gap: 10.0,
    };

    let notice = CardStyle {
        background: palette.surface,
        accent_color: palette.accent,
        title: TextStyle::new(11.0, palette.accent).bold(),
        ..card
    };

    let table = TableStyle {
        header_background: palette.primary,
        header_text: TextStyle::new(8.5, palette.on_primary).bold(),
        body_text: TextStyle::new(8.5, palette.text),
        body_background: palette.background,
        zebra_background: palette.zebra,
        border_color: palette.border,
        border_width: 0.5,
        cell_padding_x: 4.0,
        cell_padding_y: 3.0,
    };

    let footer = FooterStyle {
        text: TextStyle::new(7.5, palette.text_muted),
        rule_color: palette.border,
        rule_width: 0.5,
        baseline_offset: page.margins.bottom * 0.6,
    };

    let cover = CoverStyle {
        band_color: palette.primary,
        band_height: 8.0,
        title: TextStyle::new(30.0, palette.primary).bold().align(TextAlign::Center),
        subtitle: TextStyle::new(14.0, palette.secondary).align(TextAlign::Center),
        meta: TextStyle::new(10.0, palette.text_muted).align(TextAlign::Center),
        section_label: TextStyle::new(11.0, palette.primary).bold(),
        contact_name: TextStyle::new(10.0, palette.text).bold(),
        contact_detail: TextStyle::new(9.0, palette.text),
        link_color: palette.accent,
        logo_box: Size::new(160.0, 70.0),
        hero_box: Size::new(content_width, 300.0),
        spacing: 14.0,
    };

    StyleRuleSet {
        page,
        page_heading: TextStyle::new(18.0, palette.primary).bold(),
        body,
        muted,
        card,
        notice,
        table,
        footer,
        cover,
        image_box: Size::new(content_width, page.content_height() - 60.0),
        block_gap: 12.0,
    }
}
