use crate::entities::{Instance, PackSolution, SheetLayout};
use crate::strategies::free_region::FreeRegions;
use crate::strategies::{Algorithm, Strategy, decreasing_order, oriented_fit};
use log::{debug, trace};
use ordered_float::OrderedFloat;

/// First-Fit Decreasing: parts in descending area order, each placed in the
/// first free region that fits, scanning sheets in creation order and regions
/// in list order. No rotation. Fast but deliberately not best-fit; meant to be
/// compared against [`BestFit`](crate::strategies::BestFit).
pub struct FirstFit;

impl Strategy for FirstFit {
    fn algorithm(&self) -> Algorithm {
        Algorithm::FirstFitDecreasing
    }

    fn pack(&self, instance: &Instance) -> PackSolution {
        let sheet = instance.sheet;
        let mut sheets: Vec<SheetLayout> = vec![];
        let mut free: Vec<FreeRegions> = vec![];
        let mut unplaced = vec![];

        for part in decreasing_order(&instance.parts, |p| OrderedFloat(p.area())) {
            let (w, h) = match oriented_fit(part, sheet, false) {
                Ok(dims) => dims,
                Err(err) => {
                    debug!("[FFD] {err}");
                    unplaced.push(part.id);
                    continue;
                }
            };

            let target = free
                .iter()
                .enumerate()
                .find_map(|(s, f)| f.first_fit(w, h).map(|r| (s, r)));
            let (s, r) = match target {
                Some(t) => t,
                None => {
                    sheets.push(SheetLayout::default());
                    free.push(FreeRegions::whole_sheet(sheet));
                    (sheets.len() - 1, 0)
                }
            };
            let placement = free[s].split_fill(r, w, h);
            trace!("[FFD] part {} -> sheet {s} at {placement:?}", part.id);
            sheets[s].place(part.id, placement);
        }

        debug!(
            "[FFD] placed {} parts on {} sheets, {} unplaceable",
            instance.parts.len() - unplaced.len(),
            sheets.len(),
            unplaced.len()
        );
        PackSolution::build(self.algorithm(), sheets, unplaced, instance)
    }
}
