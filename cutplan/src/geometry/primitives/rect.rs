use anyhow::{Result, ensure};

/// Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        (self.x_max - self.x_min) * (self.y_max - self.y_min)
    }

    /// Whether `other` lies entirely within `self` (shared edges allowed).
    pub fn contains(&self, other: &Rect) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`,
    /// or `None` if their interiors do not intersect.
    /// Rectangles that only touch at an edge or corner have no intersection.
    pub fn intersection(a: Rect, b: Rect) -> Option<Rect> {
        let x_min = f64::max(a.x_min, b.x_min);
        let y_min = f64::max(a.y_min, b.y_min);
        let x_max = f64::min(a.x_max, b.x_max);
        let y_max = f64::min(a.y_max, b.y_max);
        if x_min < x_max && y_min < y_max {
            Some(Rect {
                x_min,
                y_min,
                x_max,
                y_max,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_rect_is_rejected() {
        assert!(Rect::try_new(0.0, 0.0, 0.0, 10.0).is_err());
        assert!(Rect::try_new(5.0, 5.0, 4.0, 10.0).is_err());
        assert!(Rect::try_new(0.0, 0.0, 10.0, -1.0).is_err());
    }

    #[test]
    fn edge_touching_rects_do_not_intersect() {
        let a = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = Rect::try_new(10.0, 0.0, 20.0, 10.0).unwrap();
        assert_eq!(Rect::intersection(a, b), None);
    }

    #[test]
    fn overlapping_rects_intersect_with_positive_area() {
        let a = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = Rect::try_new(5.0, 5.0, 20.0, 20.0).unwrap();
        let i = Rect::intersection(a, b).unwrap();
        assert_eq!(i, Rect::try_new(5.0, 5.0, 10.0, 10.0).unwrap());
        assert!(i.area() > 0.0);
    }

    #[test]
    fn containment_allows_shared_edges() {
        let outer = Rect::try_new(0.0, 0.0, 10.0, 10.0).unwrap();
        let inner = Rect::try_new(0.0, 0.0, 10.0, 5.0).unwrap();
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }
}
