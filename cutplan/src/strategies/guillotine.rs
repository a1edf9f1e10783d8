use crate::entities::{Instance, PackSolution, SheetLayout};
use crate::strategies::free_region::FreeRegions;
use crate::strategies::{Algorithm, Strategy, decreasing_order, oriented_fit};
use log::{debug, trace};
use ordered_float::OrderedFloat;

/// Guillotine: parts in descending order of their longer side, each placed in
/// the least-leftover free region of the first sheet that fits, then split
/// with a single straight cut so the larger leftover dimension survives as
/// one big rectangle. No rotation.
pub struct Guillotine;

impl Strategy for Guillotine {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Guillotine
    }

    fn pack(&self, instance: &Instance) -> PackSolution {
        let sheet = instance.sheet;
        let mut sheets: Vec<SheetLayout> = vec![];
        let mut free: Vec<FreeRegions> = vec![];
        let mut unplaced = vec![];

        for part in decreasing_order(&instance.parts, |p| OrderedFloat(p.longer_side())) {
            let (w, h) = match oriented_fit(part, sheet, false) {
                Ok(dims) => dims,
                Err(err) => {
                    debug!("[GUIL] {err}");
                    unplaced.push(part.id);
                    continue;
                }
            };

            let target = free
                .iter()
                .enumerate()
                .find_map(|(s, f)| f.best_fit(w, h).map(|(r, _)| (s, r)));
            let (s, r) = match target {
                Some(t) => t,
                None => {
                    sheets.push(SheetLayout::default());
                    free.push(FreeRegions::whole_sheet(sheet));
                    (sheets.len() - 1, 0)
                }
            };
            let placement = free[s].split_guillotine(r, w, h);
            trace!("[GUIL] part {} -> sheet {s} at {placement:?}", part.id);
            sheets[s].place(part.id, placement);
        }

        debug!(
            "[GUIL] placed {} parts on {} sheets, {} unplaceable",
            instance.parts.len() - unplaced.len(),
            sheets.len(),
            unplaced.len()
        );
        PackSolution::build(self.algorithm(), sheets, unplaced, instance)
    }
}
