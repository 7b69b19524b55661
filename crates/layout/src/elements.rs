use crate::resource::ImageData;
use stagerider_style::TextStyle;
use stagerider_types::{Color, Rect};

/// A drawable item placed on a physical page. Coordinates are in points with
/// the origin at the top-left page corner; the renderer flips them.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn new(rect: Rect, element: LayoutElement) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            element,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub(crate) fn offset(mut self, dx: f32, dy: f32) -> Self {
        self.x += dx;
        self.y += dy;
        self
    }

    pub fn text(&self) -> Option<&str> {
        match &self.element {
            LayoutElement::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rectangle(RectElement),
    /// A straight stroke from `(x, y)` to `(x + width, y + height)`.
    Line(LineElement),
    Image(ImageElement),
    Link(LinkElement),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub style: TextStyle,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct RectElement {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f32,
    pub radius: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineElement {
    pub color: Color,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageElement {
    pub image: ImageData,
}

/// A clickable area. Carries no visible content of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkElement {
    pub uri: String,
}

pub(crate) fn text_at(x: f32, y: f32, content: &str, style: TextStyle) -> PositionedElement {
    PositionedElement {
        x,
        y,
        width: crate::text::measure_text_width(content, &style),
        height: style.line_height,
        element: LayoutElement::Text(TextElement {
            content: content.to_string(),
            style,
        }),
    }
}

pub(crate) fn filled_rect(rect: Rect, color: Color) -> PositionedElement {
    PositionedElement::new(
        rect,
        LayoutElement::Rectangle(RectElement {
            fill: Some(color),
            ..Default::default()
        }),
    )
}

pub(crate) fn hline(x: f32, y: f32, width: f32, color: Color, stroke: f32) -> PositionedElement {
    PositionedElement::new(
        Rect::new(x, y, width, 0.0),
        LayoutElement::Line(LineElement { color, width: stroke }),
    )
}

pub(crate) fn vline(x: f32, y: f32, height: f32, color: Color, stroke: f32) -> PositionedElement {
    PositionedElement::new(
        Rect::new(x, y, 0.0, height),
        LayoutElement::Line(LineElement { color, width: stroke }),
    )
}
