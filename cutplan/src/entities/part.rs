/// A rectangular piece requiring placement on a stock sheet.
/// Owned by the caller and read-only to the optimizer; dimensions are in a
/// single linear unit (typically millimeters).
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    /// Index of the part in the instance
    pub id: usize,
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl Part {
    pub fn new(id: usize, name: impl Into<String>, width: f64, height: f64) -> Self {
        Part {
            id,
            name: name.into(),
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn longer_side(&self) -> f64 {
        f64::max(self.width, self.height)
    }
}
