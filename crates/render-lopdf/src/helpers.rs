//! Page content drawing: translates positioned elements into PDF content
//! stream operators. Coordinates arrive top-left based and are flipped here.

use crate::error::RenderError;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use once_cell::sync::Lazy;
use stagerider_layout::{LayoutElement, LineElement, PositionedElement, RectElement, TextElement};
use stagerider_style::font::BASE_FONTS;
use stagerider_types::Color;
use std::collections::HashMap;

/// Base font name to resource name (`F1`..`F4`).
pub(crate) static FONT_RESOURCES: Lazy<HashMap<&'static str, String>> = Lazy::new(|| {
    BASE_FONTS
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, format!("F{}", i + 1)))
        .collect()
});

static DEFAULT_LOPDF_FONT_NAME: Lazy<String> = Lazy::new(|| "F1".to_string());

/// Bezier control distance for quarter circles.
const KAPPA: f32 = 0.552_284_8;

pub(crate) struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: LopdfPageRenderState,
    /// Image key to XObject resource name.
    xobjects: &'a HashMap<String, String>,
}

#[derive(Default, Clone, PartialEq)]
struct LopdfPageRenderState {
    font_name: String,
    font_size: f32,
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(page_height: f32, xobjects: &'a HashMap<String, String>) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: Default::default(),
            xobjects,
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    pub(crate) fn fill_page(&mut self, width: f32, color: Color) {
        self.set_fill_color(color);
        self.op("re", vec![0.into(), 0.into(), width.into(), self.page_height.into()]);
        self.op("f", vec![]);
    }

    pub(crate) fn draw_element(&mut self, el: &PositionedElement) -> Result<(), RenderError> {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rectangle(rect) => self.draw_rect(rect, el),
            LayoutElement::Line(line) => self.draw_line(line, el),
            LayoutElement::Image(image) => self.draw_image(image.image.key(), el)?,
            // Links become annotations, not content.
            LayoutElement::Link(_) => {}
        }
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) {
        let [r, g, b] = color.to_unit_rgb();
        self.op("rg", vec![r.into(), g.into(), b.into()]);
    }

    fn set_stroke_color(&mut self, color: Color) {
        let [r, g, b] = color.to_unit_rgb();
        self.op("RG", vec![r.into(), g.into(), b.into()]);
    }

    fn draw_rect(&mut self, rect: &RectElement, el: &PositionedElement) {
        let painting = match (rect.fill, rect.stroke) {
            (Some(_), Some(_)) if rect.stroke_width > 0.0 => "B",
            (Some(_), _) => "f",
            (None, Some(_)) if rect.stroke_width > 0.0 => "S",
            _ => return,
        };
        if let Some(fill) = rect.fill {
            self.set_fill_color(fill);
        }
        if let Some(stroke) = rect.stroke {
            self.set_stroke_color(stroke);
            self.op("w", vec![rect.stroke_width.into()]);
        }
        let y = self.page_height - (el.y + el.height);
        let radius = rect.radius.min(el.width / 2.0).min(el.height / 2.0);
        if radius > 0.0 {
            self.rounded_rect_path(el.x, y, el.width, el.height, radius);
        } else {
            self.op("re", vec![el.x.into(), y.into(), el.width.into(), el.height.into()]);
        }
        self.op(painting, vec![]);
    }

    fn rounded_rect_path(&mut self, x: f32, y: f32, w: f32, h: f32, r: f32) {
        let k = r * KAPPA;
        let (right, top) = (x + w, y + h);
        self.op("m", vec![(x + r).into(), y.into()]);
        self.op("l", vec![(right - r).into(), y.into()]);
        self.op(
            "c",
            vec![(right - r + k).into(), y.into(), right.into(), (y + r - k).into(), right.into(), (y + r).into()],
        );
        self.op("l", vec![right.into(), (top - r).into()]);
        self.op(
            "c",
            vec![right.into(), (top - r + k).into(), (right - r + k).into(), top.into(), (right - r).into(), top.into()],
        );
        self.op("l", vec![(x + r).into(), top.into()]);
        self.op(
            "c",
            vec![(x + r - k).into(), top.into(), x.into(), (top - r + k).into(), x.into(), (top - r).into()],
        );
        self.op("l", vec![x.into(), (y + r).into()]);
        self.op(
            "c",
            vec![x.into(), (y + r - k).into(), (x + r - k).into(), y.into(), (x + r).into(), y.into()],
        );
        self.op("h", vec![]);
    }

    fn draw_line(&mut self, line: &LineElement, el: &PositionedElement) {
        if line.width <= 0.0 {
            return;
        }
        self.set_stroke_color(line.color);
        self.op("w", vec![line.width.into()]);
        self.op("m", vec![el.x.into(), (self.page_height - el.y).into()]);
        self.op(
            "l",
            vec![(el.x + el.width).into(), (self.page_height - (el.y + el.height)).into()],
        );
        self.op("S", vec![]);
    }

    fn set_font(&mut self, base_font: &str, size: f32) {
        let internal_font_name = FONT_RESOURCES
            .get(base_font)
            .unwrap_or(&DEFAULT_LOPDF_FONT_NAME)
            .clone();
        if self.state.font_name != internal_font_name || self.state.font_size != size {
            self.op(
                "Tf",
                vec![Object::Name(internal_font_name.as_bytes().to_vec()), size.into()],
            );
            self.state.font_name = internal_font_name;
            self.state.font_size = size;
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) {
        if text.content.trim().is_empty() {
            return;
        }
        let style = &text.style;
        self.op("BT", vec![]);
        self.set_font(style.base_font(), style.font_size);
        self.set_fill_color(style.color);
        let half_leading = ((el.height - style.font_size) / 2.0).max(0.0);
        let baseline_y = el.y + half_leading + style.font_size * 0.8;
        let pdf_y = self.page_height - baseline_y;
        self.op("Td", vec![el.x.into(), pdf_y.into()]);
        self.op(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        );
        self.op("ET", vec![]);
    }

    fn draw_image(&mut self, key: &str, el: &PositionedElement) -> Result<(), RenderError> {
        let name = self
            .xobjects
            .get(key)
            .ok_or_else(|| RenderError::UnregisteredImage(key.to_string()))?
            .clone();
        let y = self.page_height - (el.y + el.height);
        self.op("q", vec![]);
        self.op(
            "cm",
            vec![el.width.into(), 0.into(), 0.into(), el.height.into(), el.x.into(), y.into()],
        );
        self.op("Do", vec![Object::Name(name.into_bytes())]);
        self.op("Q", vec![]);
        Ok(())
    }
}

/// Encodes text for the WinAnsi (CP1252) base fonts. Characters outside the
/// code page become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}
