use crate::entities::{Instance, Sheet, SheetLayout};
use crate::geometry::primitives::Rect;
use float_cmp::approx_eq;
use itertools::Itertools;

//Various checks to verify the correctness of strategy output
//Used in debug_assert!() blocks

/// Every placement lies within `[0, sheet.width] x [0, sheet.height]`.
pub fn layouts_within_bounds(sheets: &[SheetLayout], sheet: Sheet) -> bool {
    let bounds = sheet.bounds();
    sheets
        .iter()
        .flat_map(|layout| &layout.placed)
        .all(|pp| bounds.contains(&pp.rect))
}

/// No two placements on the same sheet overlap with positive area.
pub fn layouts_disjoint(sheets: &[SheetLayout]) -> bool {
    sheets.iter().all(|layout| {
        layout
            .placed
            .iter()
            .tuple_combinations()
            .all(|(a, b)| Rect::intersection(a.rect, b.rect).is_none())
    })
}

/// The multiset of placed part ids plus the unplaced ids equals the multiset
/// of input part ids: nothing dropped, nothing duplicated.
pub fn parts_conserved(sheets: &[SheetLayout], unplaced: &[usize], instance: &Instance) -> bool {
    let mut ids: Vec<usize> = sheets
        .iter()
        .flat_map(|layout| &layout.placed)
        .map(|pp| pp.part_id)
        .chain(unplaced.iter().copied())
        .collect();
    ids.sort_unstable();
    ids.into_iter().eq(0..instance.parts.len())
}

/// Every placement has the dimensions of its originating part,
/// possibly with width and height swapped for strategies that rotate.
///
/// Dimensions are recomputed as `x_max - x_min`, which drifts a few ulps of
/// the *coordinate* once placements sit at accumulated non-representable
/// positions. The margin therefore scales with the placement's position, not
/// with the part size.
pub fn placements_match_parts(sheets: &[SheetLayout], instance: &Instance) -> bool {
    sheets.iter().flat_map(|layout| &layout.placed).all(|pp| {
        let part = instance.part(pp.part_id);
        let (w, h) = (pp.rect.width(), pp.rect.height());
        let tol = 1e-12 * f64::max(pp.rect.x_max.abs(), pp.rect.y_max.abs()).max(1.0);
        let upright = approx_eq!(f64, w, part.width, epsilon = tol)
            && approx_eq!(f64, h, part.height, epsilon = tol);
        let rotated = approx_eq!(f64, w, part.height, epsilon = tol)
            && approx_eq!(f64, h, part.width, epsilon = tol);
        upright || rotated
    })
}
