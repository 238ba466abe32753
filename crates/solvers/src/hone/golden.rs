use graphscan_core::{Coordinate2D, Real};

use crate::{Interest, bracket::any_interest};

/// The inverse golden ratio: 1/φ.
const INV_PHI: f64 = 0.618_033_988_749_894_8;

/// Golden section bracket oriented along the scan direction.
///
/// Unlike an optimization bracket, `near` may lie to the right of `far`:
/// shrinking keeps the orientation so the refined point can favor the far
/// side.
#[derive(Debug, Clone, Copy)]
struct GoldenBracket<T> {
    near: Coordinate2D<T>,
    inner_near: Coordinate2D<T>,
    inner_far: Coordinate2D<T>,
    far: Coordinate2D<T>,
}

impl<T: Real> GoldenBracket<T> {
    fn new<F: Fn(T) -> T>(f: &F, near: T, far: T) -> Self {
        let width = far - near;
        Self {
            near: sample(f, near),
            inner_near: sample(f, near + (T::one() - inv_phi::<T>()) * width),
            inner_far: sample(f, near + inv_phi::<T>() * width),
            far: sample(f, far),
        }
    }

    /// Shrinks to `[inner_near, far]`; the old `inner_far` becomes `inner_near`.
    fn shrink_near<F: Fn(T) -> T>(&mut self, f: &F) {
        self.near = self.inner_near;
        self.inner_near = self.inner_far;
        let width = self.far.x() - self.near.x();
        self.inner_far = sample(f, self.near.x() + inv_phi::<T>() * width);
    }

    /// Shrinks to `[near, inner_far]`; the old `inner_near` becomes `inner_far`.
    fn shrink_far<F: Fn(T) -> T>(&mut self, f: &F) {
        self.far = self.inner_far;
        self.inner_far = self.inner_near;
        let width = self.far.x() - self.near.x();
        self.inner_near = sample(f, self.near.x() + (T::one() - inv_phi::<T>()) * width);
    }
}

fn inv_phi<T: Real>() -> T {
    T::constant(INV_PHI)
}

fn sample<T: Real, F: Fn(T) -> T>(f: &F, x: T) -> Coordinate2D<T> {
    Coordinate2D::new(x, f(x))
}

/// Narrows `[a, b]` while one of its golden sub-brackets stays interesting,
/// preferring the one on the far side.
///
/// Returns the far end of the final bracket. Its ordinate is zero for a
/// root, and undefined for an extremum whose flanks are steeper than the
/// precision can resolve (a pole rather than a genuine extremum).
pub(crate) fn dichotomy<T, F>(
    f: &F,
    a: T,
    b: T,
    interest: Interest,
    iterations: usize,
) -> Coordinate2D<T>
where
    T: Real,
    F: Fn(T) -> T,
{
    let mut bracket = GoldenBracket::new(f, a, b);
    for _ in 0..iterations {
        if !any_interest(bracket.inner_near, bracket.inner_far, bracket.far).is_none() {
            bracket.shrink_near(f);
        } else if !any_interest(bracket.near, bracket.inner_near, bracket.inner_far).is_none() {
            bracket.shrink_far(f);
        } else {
            break;
        }
    }

    let slope = |p: Coordinate2D<T>, q: Coordinate2D<T>| ((q.y() - p.y()) / (q.x() - p.x())).abs();
    let steepest = slope(bracket.near, bracket.inner_near).max(slope(bracket.inner_far, bracket.far));
    let discontinuous = interest.is_extremum() && steepest > T::RELATIVE_PRECISION.recip();

    let y = if interest == Interest::Root {
        T::zero()
    } else if discontinuous {
        T::nan()
    } else {
        bracket.far.y()
    };
    bracket.far.with_y(y)
}
