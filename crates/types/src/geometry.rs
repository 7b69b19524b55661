use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Scales `self` uniformly so it fits inside `bounds` without cropping
    /// (CSS `object-fit: contain`).
    pub fn contain_within(&self, bounds: Size) -> Size {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Size::zero();
        }
        let scale = (bounds.width / self.width).min(bounds.height / self.height);
        Size {
            width: self.width * scale,
            height: self.height * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contain_preserves_aspect_ratio() {
        let wide = Size::new(2000.0, 1000.0).contain_within(Size::new(400.0, 400.0));
        assert_eq!(wide, Size::new(400.0, 200.0));

        let tall = Size::new(100.0, 300.0).contain_within(Size::new(400.0, 150.0));
        assert_eq!(tall, Size::new(50.0, 150.0));
    }

    #[test]
    fn degenerate_sizes_collapse_to_zero() {
        assert_eq!(Size::new(0.0, 10.0).contain_within(Size::new(10.0, 10.0)), Size::zero());
    }

    #[test]
    fn union_covers_both() {
        let a = Rect::new(10.0, 10.0, 10.0, 10.0);
        let b = Rect::new(0.0, 15.0, 5.0, 20.0);
        assert_eq!(a.union(&b), Rect::new(0.0, 10.0, 20.0, 25.0));
    }
}
