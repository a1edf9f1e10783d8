use crate::entities::{Instance, PackSolution, SheetLayout};
use crate::strategies::free_region::FreeRegions;
use crate::strategies::{Algorithm, Strategy, decreasing_order, oriented_fit};
use log::{debug, trace};
use ordered_float::OrderedFloat;

/// Best-Fit Decreasing: parts in descending area order (ties broken by longer
/// side), each tried in both orientations against every free region of every
/// sheet, selecting the combination with the least leftover area. The only
/// strategy that rotates parts.
pub struct BestFit;

impl Strategy for BestFit {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BestFitDecreasing
    }

    fn pack(&self, instance: &Instance) -> PackSolution {
        let sheet = instance.sheet;
        let mut sheets: Vec<SheetLayout> = vec![];
        let mut free: Vec<FreeRegions> = vec![];
        let mut unplaced = vec![];

        let order = decreasing_order(&instance.parts, |p| {
            (OrderedFloat(p.area()), OrderedFloat(p.longer_side()))
        });
        for part in order {
            // dimensions to fall back to on a fresh sheet; also classifies
            // parts that fit in neither orientation
            let fallback = match oriented_fit(part, sheet, true) {
                Ok(dims) => dims,
                Err(err) => {
                    debug!("[BFD] {err}");
                    unplaced.push(part.id);
                    continue;
                }
            };

            // scan both orientations over all free regions of all sheets;
            // strict improvement, so the upright orientation wins ties
            let mut best: Option<(usize, usize, f64, f64, f64)> = None;
            for (w, h) in [(part.width, part.height), (part.height, part.width)] {
                if w > sheet.width || h > sheet.height {
                    continue;
                }
                for (s, f) in free.iter().enumerate() {
                    if let Some((r, leftover)) = f.best_fit(w, h)
                        && best.is_none_or(|(.., b)| leftover < b)
                    {
                        best = Some((s, r, w, h, leftover));
                    }
                }
            }

            let (s, r, w, h) = match best {
                Some((s, r, w, h, _)) => (s, r, w, h),
                None => {
                    sheets.push(SheetLayout::default());
                    free.push(FreeRegions::whole_sheet(sheet));
                    (sheets.len() - 1, 0, fallback.0, fallback.1)
                }
            };
            let placement = free[s].split_fill(r, w, h);
            trace!("[BFD] part {} -> sheet {s} at {placement:?}", part.id);
            sheets[s].place(part.id, placement);
        }

        debug!(
            "[BFD] placed {} parts on {} sheets, {} unplaceable",
            instance.parts.len() - unplaced.len(),
            sheets.len(),
            unplaced.len()
        );
        PackSolution::build(self.algorithm(), sheets, unplaced, instance)
    }
}
