use crate::entities::{Instance, PackSolution};
use crate::io::ext_repr::{ExtPlacement, ExtSolution};

/// Converts a ranked solution into its external representation, resolving
/// part ids back to the caller's part names.
pub fn export(instance: &Instance, solution: &PackSolution) -> ExtSolution {
    let sheets = solution
        .sheets
        .iter()
        .map(|layout| {
            layout
                .placed
                .iter()
                .map(|pp| ExtPlacement {
                    part: instance.part(pp.part_id).name.clone(),
                    x: pp.rect.x_min,
                    y: pp.rect.y_min,
                    width: pp.rect.width(),
                    height: pp.rect.height(),
                })
                .collect()
        })
        .collect();

    ExtSolution {
        algorithm: solution.algorithm,
        sheets_used: solution.sheets_used,
        utilization: solution.utilization,
        waste: solution.waste,
        sheets,
        unplaced: solution
            .unplaced
            .iter()
            .map(|&id| instance.part(id).name.clone())
            .collect(),
    }
}
