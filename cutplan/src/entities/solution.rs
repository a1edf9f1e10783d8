use crate::entities::{Instance, SheetLayout};
use crate::eval;
use crate::strategies::Algorithm;
use crate::util::assertions;

/// The outcome of a single strategy invocation: every input part either placed
/// on one of the sheets or reported in `unplaced`.
///
/// Purely derived data; it is never persisted and is discarded once the caller
/// has consumed it.
#[derive(Clone, Debug, PartialEq)]
pub struct PackSolution {
    pub algorithm: Algorithm,
    /// Sheets in creation order, each with its placements
    pub sheets: Vec<SheetLayout>,
    /// Ids of parts that fit the sheet in no orientation allowed by the strategy
    pub unplaced: Vec<usize>,
    pub sheets_used: usize,
    /// Placed area over total sheet area, as a percentage in `[0, 100]`
    pub utilization: f64,
    pub waste: f64,
}

impl PackSolution {
    pub(crate) fn build(
        algorithm: Algorithm,
        sheets: Vec<SheetLayout>,
        unplaced: Vec<usize>,
        instance: &Instance,
    ) -> Self {
        debug_assert!(assertions::layouts_within_bounds(&sheets, instance.sheet));
        debug_assert!(assertions::layouts_disjoint(&sheets));
        debug_assert!(assertions::parts_conserved(&sheets, &unplaced, instance));
        debug_assert!(assertions::placements_match_parts(&sheets, instance));

        let utilization = eval::utilization(&sheets, instance.sheet);
        PackSolution {
            algorithm,
            sheets_used: sheets.len(),
            utilization,
            waste: eval::waste(utilization),
            sheets,
            unplaced,
        }
    }

    /// Total number of parts placed across all sheets.
    pub fn placed_count(&self) -> usize {
        self.sheets.iter().map(|s| s.len()).sum()
    }
}
