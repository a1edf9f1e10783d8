//! Material-usage metrics, derived from a set of sheet layouts.
//! Applies uniformly to every strategy's output; never depends on which
//! strategy produced the placements.

use crate::entities::{Sheet, SheetLayout};

/// Total placed area over total stock area, as a percentage.
/// `0.0` when no sheets were opened.
pub fn utilization(sheets: &[SheetLayout], sheet: Sheet) -> f64 {
    if sheets.is_empty() {
        return 0.0;
    }
    let placed_area: f64 = sheets.iter().map(|s| s.placed_area()).sum();
    placed_area / (sheet.area() * sheets.len() as f64) * 100.0
}

pub fn waste(utilization: f64) -> f64 {
    100.0 - utilization
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::Rect;

    #[test]
    fn no_sheets_means_zero_utilization() {
        assert_eq!(utilization(&[], Sheet::new(1000.0, 1000.0)), 0.0);
    }

    #[test]
    fn exact_tiling_yields_full_utilization() {
        let mut layout = SheetLayout::default();
        layout.place(0, Rect::try_new(0.0, 0.0, 500.0, 1000.0).unwrap());
        layout.place(1, Rect::try_new(500.0, 0.0, 1000.0, 1000.0).unwrap());
        let u = utilization(&[layout], Sheet::new(1000.0, 1000.0));
        assert_eq!(u, 100.0);
        assert_eq!(waste(u), 0.0);
    }

    #[test]
    fn utilization_averages_over_all_opened_sheets() {
        let mut full = SheetLayout::default();
        full.place(0, Rect::try_new(0.0, 0.0, 1000.0, 1000.0).unwrap());
        let mut half = SheetLayout::default();
        half.place(1, Rect::try_new(0.0, 0.0, 1000.0, 500.0).unwrap());
        let u = utilization(&[full, half], Sheet::new(1000.0, 1000.0));
        assert_eq!(u, 75.0);
    }
}
