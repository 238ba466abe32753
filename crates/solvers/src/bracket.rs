//! Classification of three consecutive samples.
//!
//! A bracket is a triple `(a, b, c)` of samples ordered along the scan
//! direction. Each test looks at the ordinates only, except
//! [`BracketTest::Notable`] which also uses `b`'s abscissa to discard
//! numerical fluctuations.

use graphscan_core::{Coordinate2D, Real};

use crate::Interest;

/// The bracket tests the solver can scan with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketTest {
    /// `a` and `c` have strictly opposite signs.
    OddRoot,
    /// An odd root, or an extremum that may touch zero (e.g. `x²`).
    EvenOrOddRoot,
    /// `a > b < c`.
    Minimum,
    /// `a < b > c`.
    Maximum,
    /// Exactly one of `a` and `c` is undefined.
    Discontinuity,
    /// Any of root, minimum, maximum or discontinuity, ignoring extrema that
    /// are lost in floating-point noise.
    Notable,
}

impl BracketTest {
    /// Classifies the bracket `(a, b, c)`.
    #[must_use]
    pub fn classify<T: Real>(
        self,
        a: Coordinate2D<T>,
        b: Coordinate2D<T>,
        c: Coordinate2D<T>,
    ) -> Interest {
        match self {
            Self::OddRoot => odd_root(a, c),
            Self::EvenOrOddRoot => even_or_odd_root(a, b, c),
            Self::Minimum => minimum(a, b, c),
            Self::Maximum => maximum(a, b, c),
            Self::Discontinuity => discontinuity(a, c),
            Self::Notable => notable(a, b, c),
        }
    }
}

fn when(condition: bool, interest: Interest) -> Interest {
    if condition { interest } else { Interest::None }
}

pub(crate) fn odd_root<T: Real>(a: Coordinate2D<T>, c: Coordinate2D<T>) -> Interest {
    let zero = T::zero();
    when(
        (a.y() < zero && zero < c.y()) || (c.y() < zero && zero < a.y()),
        Interest::Root,
    )
}

pub(crate) fn minimum<T: Real>(
    a: Coordinate2D<T>,
    b: Coordinate2D<T>,
    c: Coordinate2D<T>,
) -> Interest {
    when(a.y() > b.y() && b.y() < c.y(), Interest::LocalMinimum)
}

pub(crate) fn maximum<T: Real>(
    a: Coordinate2D<T>,
    b: Coordinate2D<T>,
    c: Coordinate2D<T>,
) -> Interest {
    when(a.y() < b.y() && b.y() > c.y(), Interest::LocalMaximum)
}

pub(crate) fn discontinuity<T: Real>(a: Coordinate2D<T>, c: Coordinate2D<T>) -> Interest {
    when(a.y().is_nan() != c.y().is_nan(), Interest::Discontinuity)
}

fn even_or_odd_root<T: Real>(
    a: Coordinate2D<T>,
    b: Coordinate2D<T>,
    c: Coordinate2D<T>,
) -> Interest {
    first_of(&[
        odd_root(a, c),
        minimum(a, b, c),
        maximum(a, b, c),
    ])
}

/// Root, minimum, maximum or discontinuity, in that order of precedence.
pub(crate) fn any_interest<T: Real>(
    a: Coordinate2D<T>,
    b: Coordinate2D<T>,
    c: Coordinate2D<T>,
) -> Interest {
    first_of(&[
        odd_root(a, c),
        minimum(a, b, c),
        maximum(a, b, c),
        discontinuity(a, c),
    ])
}

fn notable<T: Real>(a: Coordinate2D<T>, b: Coordinate2D<T>, c: Coordinate2D<T>) -> Interest {
    let interest = any_interest(a, b, c);
    // Subtracting two close large numbers makes small outputs jitter; such
    // jitter is not an extremum.
    if interest.is_extremum() && ((a.y() - b.y()) / b.x()).abs() < T::RELATIVE_PRECISION {
        return Interest::None;
    }
    interest
}

fn first_of(candidates: &[Interest]) -> Interest {
    candidates
        .iter()
        .copied()
        .find(|interest| !interest.is_none())
        .unwrap_or_default()
}
