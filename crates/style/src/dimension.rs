//! Page size and spacing primitives, in PDF points.
use serde::Serialize;

const POINTS_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_INCH / MM_PER_INCH
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn all_mm(mm: f32) -> Self {
        Self::all(mm_to_pt(mm))
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
}

impl PageSize {
    /// `(width, height)` in points.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (mm_to_pt(210.0), mm_to_pt(297.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_in_points() {
        let (w, h) = PageSize::A4.dimensions_pt();
        assert!((w - 595.28).abs() < 0.01);
        assert!((h - 841.89).abs() < 0.01);
    }

    #[test]
    fn margins_from_millimetres() {
        let m = Margins::all_mm(25.4);
        assert_eq!(m.top, 72.0);
        assert_eq!(m.horizontal(), 144.0);
    }
}
