//! Refinement of a bracket flagged by a [`BracketTest`](crate::BracketTest).
//!
//! Honing takes the outer abscissae `a` and `b` of a bracket, in scan order,
//! and returns the refined point. An undefined point means the bracket was
//! a false alarm.

mod brent_minimum;
mod brent_root;
mod golden;

use graphscan_core::{Coordinate2D, Real};

use crate::Interest;

pub(crate) use brent_minimum::brent_minimum;
pub(crate) use brent_root::brent_root;
pub(crate) use golden::dichotomy;

/// The honing routines the solver can refine a bracket with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hone {
    /// Brent's method for a sign change.
    BrentRoot,
    /// Brent's parabolic minimization.
    BrentMinimum,
    /// Brent's parabolic minimization of `-f`.
    BrentMaximum,
    /// Dispatches on the interest: Brent's root method for a sign change,
    /// Brent minimization or maximization for an extremum, keeping the
    /// extremum only if it touches zero.
    CompositeRoot,
    /// Golden-section shrinking that keeps the bracket interesting, for a
    /// fixed number of iterations.
    Dichotomy {
        /// Number of shrinking steps.
        iterations: usize,
    },
    /// No refinement: the far end of the bracket.
    FarEndpoint,
}

/// Numerical settings shared by the honing routines.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tolerance<T> {
    pub(crate) precision: T,
    pub(crate) max_iters: usize,
}

impl Hone {
    /// Refines the bracket `[a, b]` flagged with `interest`.
    pub(crate) fn hone<T, F>(
        self,
        f: &F,
        a: T,
        b: T,
        interest: Interest,
        tolerance: Tolerance<T>,
    ) -> Coordinate2D<T>
    where
        T: Real,
        F: Fn(T) -> T,
    {
        match self {
            Self::BrentRoot => brent_root(f, a, b, tolerance),
            Self::BrentMinimum => brent_minimum(f, a, b, tolerance),
            Self::BrentMaximum => brent_maximum(f, a, b, tolerance),
            Self::CompositeRoot => composite_root(f, a, b, interest, tolerance),
            Self::Dichotomy { iterations } => dichotomy(f, a, b, interest, iterations),
            Self::FarEndpoint => Coordinate2D::new(b, f(b)),
        }
    }
}

fn brent_maximum<T, F>(f: &F, a: T, b: T, tolerance: Tolerance<T>) -> Coordinate2D<T>
where
    T: Real,
    F: Fn(T) -> T,
{
    let p = brent_minimum(&|x| -f(x), a, b, tolerance);
    p.with_y(-p.y())
}

fn composite_root<T, F>(
    f: &F,
    a: T,
    b: T,
    interest: Interest,
    tolerance: Tolerance<T>,
) -> Coordinate2D<T>
where
    T: Real,
    F: Fn(T) -> T,
{
    let extremum = match interest {
        Interest::Root => return brent_root(f, a, b, tolerance),
        Interest::LocalMinimum => brent_minimum(f, a, b, tolerance),
        Interest::LocalMaximum => brent_maximum(f, a, b, tolerance),
        _ => return Coordinate2D::undefined(),
    };
    if extremum.y().abs() < T::null_tolerance(extremum.x()) {
        extremum
    } else {
        Coordinate2D::undefined()
    }
}
