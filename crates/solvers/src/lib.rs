//! Adaptive scanning solver.
//!
//! The [`Solver`] walks a function with a step that adapts to the magnitude
//! of the abscissa, flags brackets of three samples that look interesting,
//! and refines them. Scans are resumable: each call takes a [`ScanCursor`]
//! and returns it moved onto the solution found.
//!
//! - [`Solver::next`]: generic scan with any [`BracketTest`] and [`Hone`]
//! - [`Solver::next_root`], [`Solver::next_minimum`],
//!   [`Solver::next_maximum`], [`Solver::next_intersection`]: the common
//!   searches on expressions
//! - [`solutions`]: iterates over successive solutions
//! - [`solve_approximate`]: bounded root listing
//! - [`PointsOfInterest`]: all roots, extrema and intersections over an
//!   interval

mod bracket;
mod cursor;
mod hone;
mod interest;
mod points;
mod solutions;
pub mod solver;

#[cfg(test)]
mod test_utils;

pub use bracket::BracketTest;
pub use cursor::ScanCursor;
pub use hone::Hone;
pub use interest::Interest;
pub use points::{PointOfInterest, PointsOfInterest};
pub use solutions::{ApproximateSolutions, DEFAULT_MAX_SOLUTIONS, solutions, solve_approximate};
pub use solver::Solver;
