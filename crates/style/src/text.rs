use serde::{Deserialize, Serialize};

/// Horizontal placement of a line inside its box.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

impl TextAlign {
    /// Offset of a line of `line_width` inside a box of `box_width`. Lines
    /// wider than the box start at its left edge.
    pub fn offset(self, box_width: f32, line_width: f32) -> f32 {
        let slack = (box_width - line_width).max(0.0);
        match self {
            TextAlign::Left => 0.0,
            TextAlign::Center => slack / 2.0,
            TextAlign::Right => slack,
        }
    }
}
