//! The resumable state of a scan.

use graphscan_core::{Coordinate2D, Real};

use crate::{Interest, PointOfInterest};

/// Growth ratio of the step while `|x|` has a typical magnitude.
const BASE_GROWTH: f64 = 1.05;

/// Upper bound of the growth ratio far from typical magnitudes.
const MAX_GROWTH: f64 = 10.0;

/// How quickly the growth ratio approaches [`MAX_GROWTH`].
const GROWTH_ACCELERATION: f64 = 1e-2;

/// Decimal exponents between which `|x|` is typical: `[0.1, 100]`.
const TYPICAL_MAGNITUDE: (f64, f64) = (-1.0, 2.0);

/// Where a scan stands, and what it found last.
///
/// A cursor moves from `position` toward `end`, which may lie on either
/// side. Each solver call takes a cursor by value and returns the advanced
/// one: on success its position is the solution's abscissa, otherwise it is
/// exhausted, keeps its position, and every later call returns it unchanged.
#[derive(Debug, Clone, Copy)]
pub struct ScanCursor<T> {
    position: T,
    end: T,
    maximal_step: T,
    interest: Interest,
    ordinate: T,
    exhausted: bool,
}

impl<T: Real> ScanCursor<T> {
    /// Creates a cursor scanning from `start` to `end`.
    ///
    /// The largest sampling step is fixed here to a hundredth of the scanned
    /// length. A NaN bound gives an exhausted cursor.
    #[must_use]
    pub fn new(start: T, end: T) -> Self {
        let maximal_step = T::MINIMAL_STEP.max((end - start).abs() / T::constant(100.0));
        Self {
            position: start,
            end,
            maximal_step,
            interest: Interest::None,
            ordinate: T::nan(),
            exhausted: start.is_nan() || end.is_nan(),
        }
    }

    /// Returns where the next scan starts, which is the last solution found.
    #[must_use]
    pub fn position(&self) -> T {
        self.position
    }

    #[must_use]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns the largest step the scan may take.
    #[must_use]
    pub fn maximal_step(&self) -> T {
        self.maximal_step
    }

    /// Returns what the last call found.
    #[must_use]
    pub fn interest(&self) -> Interest {
        self.interest
    }

    /// Returns the ordinate of the last solution, NaN if none.
    #[must_use]
    pub fn ordinate(&self) -> T {
        self.ordinate
    }

    /// Returns `true` once a call has found nothing.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Returns the last solution, or the undefined point.
    #[must_use]
    pub fn solution(&self) -> Coordinate2D<T> {
        if self.interest.is_none() {
            Coordinate2D::undefined()
        } else {
            Coordinate2D::new(self.position, self.ordinate)
        }
    }

    /// Returns the last solution with its interest, if any.
    #[must_use]
    pub fn point_of_interest(&self) -> Option<PointOfInterest<T>> {
        (!self.interest.is_none()).then(|| PointOfInterest {
            x: self.position,
            y: self.ordinate,
            interest: self.interest,
        })
    }

    /// Widens the scan by one maximal step on each side.
    ///
    /// Solutions sitting exactly on a bound are strictly inside afterwards.
    #[must_use]
    pub fn stretch(self) -> Self {
        let step = self.direction() * self.maximal_step;
        Self {
            position: self.position - step,
            end: self.end + step,
            ..self
        }
    }

    /// `1` if the scan goes toward larger abscissae, `-1` otherwise.
    fn direction(&self) -> T {
        if self.position < self.end {
            T::one()
        } else {
            -T::one()
        }
    }

    /// Returns `true` if `x` lies strictly between the position, moved by
    /// one minimal step, and the end.
    ///
    /// Solutions closer to the position are the previous solution found again.
    #[must_use]
    pub fn is_valid_solution(&self, x: T) -> bool {
        let min_step = T::minimal_step(self.position);
        if self.position < self.end {
            self.position + min_step < x && x < self.end
        } else {
            self.end < x && x < self.position - min_step
        }
    }

    /// Returns the next abscissa to sample after `x`, going toward `direction`.
    ///
    /// Steps grow geometrically by 5% while `|x|` lies in `[0.1, 100]`, and
    /// up to tenfold outside of it so that very small and very large
    /// magnitudes are crossed quickly. The step is always clamped between
    /// the minimal step at `x` and the cursor's maximal step.
    #[must_use]
    pub fn next_x(&self, x: T, direction: T) -> T {
        let sign = if x < direction { T::one() } else { -T::one() };
        let min_step = T::minimal_step(x);
        let max_step = self.maximal_step;

        let magnitude = x.abs().log10();
        if !magnitude.is_finite() || min_step >= max_step {
            return x + sign * min_step;
        }

        let (lower, upper) = (T::constant(TYPICAL_MAGNITUDE.0), T::constant(TYPICAL_MAGNITUDE.1));
        let distance = if magnitude < lower {
            lower - magnitude
        } else if magnitude > upper {
            magnitude - upper
        } else {
            T::zero()
        };
        let (base, max) = (T::constant(BASE_GROWTH), T::constant(MAX_GROWTH));
        let ratio = max - (max - base) * (-T::constant(GROWTH_ACCELERATION) * distance.powi(3)).exp();

        let toward_zero = (x < direction) == (x < T::zero());
        let target = if toward_zero { x / ratio } else { x * ratio };
        let step = (target - x).abs().max(min_step).min(max_step);
        x + sign * step
    }

    pub(crate) fn found(self, x: T, y: T, interest: Interest) -> Self {
        let ordinate = if y.abs() < T::null_tolerance(x) { T::zero() } else { y };
        Self {
            position: x,
            interest,
            ordinate,
            exhausted: false,
            ..self
        }
    }

    pub(crate) fn exhaust(self) -> Self {
        Self {
            interest: Interest::None,
            ordinate: T::nan(),
            exhausted: true,
            ..self
        }
    }

    pub(crate) fn relabel(self, interest: Interest, ordinate: T) -> Self {
        Self {
            interest,
            ordinate,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn maximal_step_is_a_hundredth_of_the_scan() {
        assert_relative_eq!(ScanCursor::new(-10.0_f64, 10.0).maximal_step(), 0.2);
        assert_relative_eq!(ScanCursor::new(0.0_f64, 0.0).maximal_step(), 1e-6);
    }

    #[test]
    fn nan_bound_gives_exhausted_cursor() {
        assert!(ScanCursor::new(f64::NAN, 1.0).is_exhausted());
        assert!(ScanCursor::new(0.0, f32::NAN).is_exhausted());
        assert!(!ScanCursor::new(0.0_f64, 1.0).is_exhausted());
    }

    #[test]
    fn fresh_cursor_has_no_solution() {
        let cursor = ScanCursor::new(0.0_f64, 1.0);
        assert!(!cursor.solution().is_defined());
        assert!(cursor.point_of_interest().is_none());
    }

    #[test]
    fn stretch_follows_scan_direction() {
        let forward = ScanCursor::new(0.0_f64, 10.0).stretch();
        assert_relative_eq!(forward.position(), -0.1);
        assert_relative_eq!(forward.end(), 10.1);
        assert_relative_eq!(forward.maximal_step(), 0.1);

        let backward = ScanCursor::new(10.0_f64, 0.0).stretch();
        assert_relative_eq!(backward.position(), 10.1);
        assert_relative_eq!(backward.end(), -0.1);
    }

    #[test]
    fn valid_solutions_are_strictly_ahead() {
        let cursor = ScanCursor::new(1.0_f64, 5.0);
        assert!(cursor.is_valid_solution(2.0));
        assert!(!cursor.is_valid_solution(1.0 + 1e-7));
        assert!(!cursor.is_valid_solution(5.0));
        assert!(!cursor.is_valid_solution(0.0));

        let cursor = ScanCursor::new(5.0_f64, 1.0);
        assert!(cursor.is_valid_solution(2.0));
        assert!(!cursor.is_valid_solution(5.0 - 1e-7));
        assert!(!cursor.is_valid_solution(f64::NAN));
    }

    #[test]
    fn found_snaps_tiny_ordinates_to_zero() {
        let cursor = ScanCursor::new(0.0_f64, 5.0).found(2.0, 1e-12, Interest::Root);
        assert_eq!(cursor.ordinate(), 0.0);
        assert_eq!(cursor.solution(), Coordinate2D::new(2.0, 0.0));

        let cursor = cursor.found(3.0, 0.5, Interest::LocalMaximum);
        assert_relative_eq!(cursor.ordinate(), 0.5);
    }

    #[test]
    fn exhaust_keeps_position() {
        let cursor = ScanCursor::new(0.0_f64, 5.0).found(2.0, 1.0, Interest::Root).exhaust();
        assert!(cursor.is_exhausted());
        assert_relative_eq!(cursor.position(), 2.0);
        assert_eq!(cursor.interest(), Interest::None);
        assert!(cursor.ordinate().is_nan());
    }

    #[test]
    fn next_x_steps_stay_within_bounds() {
        let cursor = ScanCursor::new(-10.0_f64, 10.0);
        let max_step = cursor.maximal_step();
        for &x in &[-9.7, -3.0, -0.5, -1e-3, 0.0, 2e-7, 0.04, 1.0, 7.5] {
            for &direction in &[-10.0, 10.0] {
                let next = cursor.next_x(x, direction);
                let step = next - x;
                assert_eq!(step > 0.0, x < direction, "x = {x}, direction = {direction}");
                assert!(step.abs() >= f64::minimal_step(x) * (1.0 - 1e-6));
                assert!(step.abs() <= max_step * (1.0 + 1e-12));
            }
        }
    }

    #[test]
    fn next_x_grows_by_five_percent_at_typical_magnitudes() {
        let cursor = ScanCursor::new(-1000.0_f64, 1000.0);
        assert_relative_eq!(cursor.next_x(1.0, 1000.0), 1.05, max_relative = 1e-12);
        assert_relative_eq!(cursor.next_x(-50.0, -1000.0), -52.5, max_relative = 1e-12);
        assert_relative_eq!(cursor.next_x(50.0, -1000.0), 50.0 / 1.05, max_relative = 1e-12);
    }

    #[test]
    fn next_x_accelerates_far_from_typical_magnitudes() {
        let cursor = ScanCursor::new(-1e9_f64, 1e9);
        let ratio = cursor.next_x(1e6, 1e9) / 1e6;
        assert!(ratio > 1.5 && ratio < 10.0, "ratio = {ratio}");

        let cursor = ScanCursor::new(-1.0_f64, 1.0);
        let ratio = cursor.next_x(1e-4, 1.0) / 1e-4;
        assert!(ratio > 1.05 && ratio < 10.0, "ratio = {ratio}");
    }

    #[test]
    fn next_x_leaves_zero_by_a_minimal_step() {
        let cursor = ScanCursor::new(-1.0_f32, 1.0);
        assert_relative_eq!(cursor.next_x(0.0, 1.0), 1e-5);
        assert_relative_eq!(cursor.next_x(0.0, -1.0), -1e-5);
    }
}
