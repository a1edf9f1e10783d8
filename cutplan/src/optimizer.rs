//! Runs a set of enabled strategies over one instance and ranks the outcomes
//! by material utilization.

use crate::entities::{Instance, PackSolution};
use crate::error::OptError;
use crate::strategies::Algorithm;
use log::info;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Which strategies to run and how.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Strategies to run over the instance
    pub algorithms: Vec<Algorithm>,
    /// Run the strategies on the rayon thread pool, one task per strategy.
    /// Purely a performance optimization: each strategy is pure and its
    /// internal loops stay sequential, so the ranked output is identical
    /// either way.
    pub parallel: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        OptimizerConfig {
            algorithms: Algorithm::ALL.to_vec(),
            parallel: true,
        }
    }
}

/// Invokes every enabled strategy on `instance` and returns the solutions
/// ranked descending by utilization, ties broken by fewer sheets used.
///
/// Fails with [`OptError::NoPlanFound`] if no strategy managed to place a
/// single part.
pub fn optimize(
    instance: &Instance,
    config: &OptimizerConfig,
) -> Result<Vec<PackSolution>, OptError> {
    if instance.parts.is_empty() {
        // instances are validated on construction, but cheap to re-check here
        return Err(OptError::EmptyInput);
    }

    let solutions: Vec<PackSolution> = if config.parallel {
        config
            .algorithms
            .par_iter()
            .map(|alg| alg.strategy().pack(instance))
            .collect()
    } else {
        config
            .algorithms
            .iter()
            .map(|alg| alg.strategy().pack(instance))
            .collect()
    };

    if solutions.iter().all(|sol| sol.placed_count() == 0) {
        return Err(OptError::NoPlanFound);
    }

    let ranked = rank(solutions);
    if let Some(best) = ranked.first() {
        info!(
            "[OPT] best of {}: {} with {:.1}% utilization on {} sheets",
            ranked.len(),
            best.algorithm,
            best.utilization,
            best.sheets_used
        );
    }
    Ok(ranked)
}

/// Descending by utilization; on equal utilization the plan using fewer
/// sheets ranks first. The sort is stable, so remaining ties keep the
/// enabled-algorithm order.
pub fn rank(mut solutions: Vec<PackSolution>) -> Vec<PackSolution> {
    solutions.sort_by_key(|sol| (Reverse(OrderedFloat(sol.utilization)), sol.sheets_used));
    solutions
}
