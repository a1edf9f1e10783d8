use crate::geometry::primitives::Rect;

/// A part fixed at a specific position on a sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPart {
    /// Id of the originating [`Part`](crate::entities::Part)
    pub part_id: usize,
    /// Position and dimensions of the part on the sheet.
    /// For strategies that rotate, width and height may be swapped with
    /// respect to the originating part.
    pub rect: Rect,
}

/// All placements on a single stock sheet, in the order they were made.
/// Invariant: no two placements overlap with positive area (edge contact is
/// allowed) and every placement lies within the sheet bounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetLayout {
    pub placed: Vec<PlacedPart>,
}

impl SheetLayout {
    pub fn place(&mut self, part_id: usize, rect: Rect) {
        self.placed.push(PlacedPart { part_id, rect });
    }

    pub fn placed_area(&self) -> f64 {
        self.placed.iter().map(|pp| pp.rect.area()).sum()
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}
