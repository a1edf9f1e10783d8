use crate::geometry::primitives::Rect;

/// The stock material size, fixed for one optimization run.
/// Every sheet opened by a strategy during that run shares this size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sheet {
    pub width: f64,
    pub height: f64,
}

impl Sheet {
    pub fn new(width: f64, height: f64) -> Self {
        Sheet { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The usable area of one sheet: `[0, width] x [0, height]`.
    pub fn bounds(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }
}
