use graphscan_core::{Expression, Real};

use crate::{PointOfInterest, ScanCursor, Solver};

/// Iterates over the successive solutions of a scan.
///
/// `step` advances the cursor by one solution, typically a solver method
/// such as `|c| solver.next_root(c, &e)`. The iteration ends with the scan.
pub fn solutions<T, S>(cursor: ScanCursor<T>, mut step: S) -> impl Iterator<Item = PointOfInterest<T>>
where
    T: Real,
    S: FnMut(ScanCursor<T>) -> ScanCursor<T>,
{
    let mut cursor = cursor;
    std::iter::from_fn(move || {
        cursor = step(cursor);
        cursor.point_of_interest()
    })
}

/// Root cap used by callers listing solutions for display.
pub const DEFAULT_MAX_SOLUTIONS: usize = 10;

/// The roots found by [`solve_approximate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApproximateSolutions<T> {
    /// Roots in increasing order.
    pub roots: Vec<T>,

    /// Whether more roots lie in the interval than were returned.
    pub has_more_solutions: bool,
}

/// Finds up to `max_solutions` roots of `e` in `[min, max]`, bounds included.
///
/// The scan runs over the interval stretched by one step on each side so
/// that roots sitting exactly on a bound are found.
#[must_use]
pub fn solve_approximate<T: Real>(
    solver: &Solver<T>,
    e: &dyn Expression<T>,
    min: T,
    max: T,
    max_solutions: usize,
) -> ApproximateSolutions<T> {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    let cursor = ScanCursor::new(min, max).stretch();

    let mut result = ApproximateSolutions {
        roots: Vec::new(),
        has_more_solutions: false,
    };
    for point in solutions(cursor, |c| solver.next_root(c, e)) {
        if point.x < min {
            continue;
        }
        if point.x > max {
            break;
        }
        if result.roots.len() == max_solutions {
            result.has_more_solutions = true;
            break;
        }
        result.roots.push(point.x);
    }
    result
}
