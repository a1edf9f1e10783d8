//! The five placement heuristics. Each one consumes the same immutable
//! [`Instance`] and produces a [`PackSolution`]; they share no state and are
//! deterministic, so they can be run in any order or in parallel.

mod best_fit;
mod bottom_left;
mod first_fit;
mod free_region;
mod guillotine;
mod skyline;

#[doc(inline)]
pub use best_fit::BestFit;
#[doc(inline)]
pub use bottom_left::BottomLeft;
#[doc(inline)]
pub use first_fit::FirstFit;
#[doc(inline)]
pub use guillotine::Guillotine;
#[doc(inline)]
pub use skyline::Skyline;

use crate::entities::{Instance, PackSolution, Part, Sheet};
use crate::error::OptError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

/// Identifier for each available packing heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    FirstFitDecreasing,
    BestFitDecreasing,
    BottomLeft,
    Guillotine,
    Skyline,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::FirstFitDecreasing,
        Algorithm::BestFitDecreasing,
        Algorithm::BottomLeft,
        Algorithm::Guillotine,
        Algorithm::Skyline,
    ];

    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Algorithm::FirstFitDecreasing => &FirstFit,
            Algorithm::BestFitDecreasing => &BestFit,
            Algorithm::BottomLeft => &BottomLeft,
            Algorithm::Guillotine => &Guillotine,
            Algorithm::Skyline => &Skyline,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Algorithm::FirstFitDecreasing => "First-Fit Decreasing",
            Algorithm::BestFitDecreasing => "Best-Fit Decreasing",
            Algorithm::BottomLeft => "Bottom-Left",
            Algorithm::Guillotine => "Guillotine",
            Algorithm::Skyline => "Skyline",
        };
        write!(f, "{label}")
    }
}

/// Common contract of all placement heuristics.
///
/// `pack` is a pure function: it never mutates the instance (each strategy
/// sorts a copy of the part list) and identical input yields bit-identical
/// output. A strategy opens a new sheet only when no existing sheet can
/// accommodate a part; new sheets start with the whole sheet free.
pub trait Strategy: Sync {
    fn algorithm(&self) -> Algorithm;

    fn pack(&self, instance: &Instance) -> PackSolution;
}

/// Parts in stable descending order of `key`; ties keep submission order,
/// which keeps every run reproducible.
pub(crate) fn decreasing_order<K: Ord>(parts: &[Part], key: impl Fn(&Part) -> K) -> Vec<&Part> {
    parts
        .iter()
        .sorted_by_key(|&part| Reverse(key(part)))
        .collect()
}

/// Resolves the dimensions with which `part` fits on an empty sheet, trying
/// the upright orientation first. Strategies that never rotate pass
/// `allow_rotation = false`.
pub(crate) fn oriented_fit(
    part: &Part,
    sheet: Sheet,
    allow_rotation: bool,
) -> Result<(f64, f64), OptError> {
    if part.width <= sheet.width && part.height <= sheet.height {
        Ok((part.width, part.height))
    } else if allow_rotation && part.height <= sheet.width && part.width <= sheet.height {
        Ok((part.height, part.width))
    } else {
        Err(OptError::PartExceedsSheet { part_id: part.id })
    }
}
