use graphscan_core::Coordinate2D;

use crate::Interest;

/// Events emitted by [`Solver::next_observed`](super::Solver::next_observed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<T> {
    /// A new sample completed a bracket, before it is tested.
    ///
    /// The bracket is ordered along the scan direction; its last point is
    /// the new sample.
    Sampled {
        bracket: [Coordinate2D<T>; 3],
    },

    /// A bracket was refined.
    Honed {
        /// The refined point, undefined if honing failed.
        point: Coordinate2D<T>,

        /// What the bracket test found.
        interest: Interest,

        /// Whether the point will be accepted as the solution.
        valid: bool,
    },
}
