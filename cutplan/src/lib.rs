//! Deterministic heuristic optimizer for 2D rectangular cutting-stock problems.
//!
//! Given a list of rectangular parts and a fixed stock-sheet size, `cutplan`
//! places every part onto the minimum practical number of sheets without
//! overlap, using five independent packing heuristics, and ranks the outcomes
//! by material utilization.
//!
//! Every strategy is a pure function over its input: identical input always
//! yields bit-identical output, which also makes the results reproducible
//! when the strategies are run in parallel.

pub mod entities;
pub mod eval;
pub mod geometry;
pub mod io;
pub mod optimizer;
pub mod strategies;
pub mod util;

mod error;

#[doc(inline)]
pub use error::OptError;
