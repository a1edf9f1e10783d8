use crate::entities::{Instance, PackSolution, SheetLayout};
use crate::geometry::primitives::{Point, Rect};
use crate::strategies::{Algorithm, Strategy, decreasing_order, oriented_fit};
use log::{debug, trace};
use ordered_float::OrderedFloat;

/// Bottom-Left fill: parts in descending area order, each placed at the
/// lowest (then leftmost) candidate corner point where it fits without
/// overlap. Every placement contributes two new candidate corners. No
/// rotation.
pub struct BottomLeft;

impl Strategy for BottomLeft {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BottomLeft
    }

    fn pack(&self, instance: &Instance) -> PackSolution {
        let sheet = instance.sheet;
        let mut sheets: Vec<SheetLayout> = vec![];
        // candidate corner points per sheet, grown with each placement
        let mut corners: Vec<Vec<Point>> = vec![];
        let mut unplaced = vec![];

        for part in decreasing_order(&instance.parts, |p| OrderedFloat(p.area())) {
            let (w, h) = match oriented_fit(part, sheet, false) {
                Ok(dims) => dims,
                Err(err) => {
                    debug!("[BL] {err}");
                    unplaced.push(part.id);
                    continue;
                }
            };

            // first sheet (in creation order) with a valid corner wins;
            // within a sheet, lowest y then lowest x
            let target = sheets.iter().enumerate().find_map(|(s, layout)| {
                corners[s]
                    .iter()
                    .filter(|&&pt| fits_at(layout, pt, w, h, instance))
                    .min_by_key(|pt| (OrderedFloat(pt.y()), OrderedFloat(pt.x())))
                    .map(|&pt| (s, pt))
            });

            let (s, pt) = match target {
                Some(t) => t,
                None => {
                    sheets.push(SheetLayout::default());
                    corners.push(vec![]);
                    (sheets.len() - 1, Point(0.0, 0.0))
                }
            };
            let placement = Rect {
                x_min: pt.x(),
                y_min: pt.y(),
                x_max: pt.x() + w,
                y_max: pt.y() + h,
            };
            trace!("[BL] part {} -> sheet {s} at {placement:?}", part.id);
            sheets[s].place(part.id, placement);
            corners[s].push(Point(pt.x() + w, pt.y()));
            corners[s].push(Point(pt.x(), pt.y() + h));
        }

        debug!(
            "[BL] placed {} parts on {} sheets, {} unplaceable",
            instance.parts.len() - unplaced.len(),
            sheets.len(),
            unplaced.len()
        );
        PackSolution::build(self.algorithm(), sheets, unplaced, instance)
    }
}

/// A corner is valid when the part stays within the sheet bounds and its
/// interior is disjoint from every placement already on the sheet.
fn fits_at(layout: &SheetLayout, pt: Point, w: f64, h: f64, instance: &Instance) -> bool {
    let sheet = instance.sheet;
    if pt.x() + w > sheet.width || pt.y() + h > sheet.height {
        return false;
    }
    let candidate = Rect {
        x_min: pt.x(),
        y_min: pt.y(),
        x_max: pt.x() + w,
        y_max: pt.y() + h,
    };
    layout
        .placed
        .iter()
        .all(|pp| Rect::intersection(candidate, pp.rect).is_none())
}
