use graphscan_core::{Difference, EvaluationContext, Expression, Real, Shape};

use crate::{BracketTest, Hone, Interest, ScanCursor};

use super::Solver;

impl<T: Real> Solver<T> {
    /// Finds the next root of `e`.
    ///
    /// Even roots such as the one of `x²` are found too: extrema touching
    /// zero count as roots.
    #[must_use]
    pub fn next_root(&self, cursor: ScanCursor<T>, e: &dyn Expression<T>) -> ScanCursor<T> {
        if cursor.is_exhausted() {
            return cursor;
        }
        match e.shape() {
            Shape::Product => {
                let x = (0..e.child_count())
                    .map(|index| self.next_root_in_child(cursor, e, index))
                    .filter(|x| !x.is_nan())
                    .min_by(|a, b| {
                        let da = (*a - cursor.position()).abs();
                        let db = (*b - cursor.position()).abs();
                        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
                    });
                register_root(cursor, x)
            }
            Shape::Power | Shape::NthRoot | Shape::Quotient => {
                let x = self.next_root_in_child(cursor, e, 0);
                register_root(cursor, (!x.is_nan()).then_some(x))
            }
            Shape::AbsoluteValue | Shape::HyperbolicSine | Shape::Opposite | Shape::SquareRoot => {
                match e.child(0) {
                    Some(child) => self.next_root(cursor, child),
                    None => self.scan_for_root(cursor, e),
                }
            }
            Shape::Other => self.scan_for_root(cursor, e),
        }
    }

    /// Finds the next point where `e1` and `e2` take the same value.
    ///
    /// The returned ordinate is `e1`'s value there.
    #[must_use]
    pub fn next_intersection(
        &self,
        cursor: ScanCursor<T>,
        e1: &dyn Expression<T>,
        e2: &dyn Expression<T>,
    ) -> ScanCursor<T> {
        let difference = Difference::new(e1, e2);
        self.next_intersection_with(cursor, e1, &difference)
    }

    /// Like [`Solver::next_intersection`], with the difference `e1 - e2`
    /// supplied by the caller, typically simplified beforehand.
    #[must_use]
    pub fn next_intersection_with(
        &self,
        cursor: ScanCursor<T>,
        e1: &dyn Expression<T>,
        difference: &dyn Expression<T>,
    ) -> ScanCursor<T> {
        let next = self.next_root(cursor, difference);
        if next.interest() != Interest::Root {
            return next;
        }
        let y = e1.evaluate(next.position(), &self.context);
        next.relabel(Interest::Intersection, y)
    }

    fn scan_for_root(&self, cursor: ScanCursor<T>, e: &dyn Expression<T>) -> ScanCursor<T> {
        if e.is_null(&self.context) == Some(false) {
            return cursor.exhaust();
        }
        let f = |x, context: &EvaluationContext| e.evaluate(x, context);
        let next = self.next(cursor, &f, BracketTest::EvenOrOddRoot, Hone::CompositeRoot);
        if next.is_exhausted() {
            return next;
        }
        next.relabel(Interest::Root, next.ordinate())
    }

    /// Returns the next root of child `index` at which the whole of `e`
    /// vanishes too, or NaN.
    fn next_root_in_child(&self, cursor: ScanCursor<T>, e: &dyn Expression<T>, index: usize) -> T {
        let Some(child) = e.child(index) else {
            return T::nan();
        };
        let mut probe = cursor;
        loop {
            probe = self.next_root(probe, child);
            if probe.is_exhausted() {
                return T::nan();
            }
            let x = probe.position();
            if e.evaluate(x, &self.context).abs() < T::null_tolerance(x) {
                return x;
            }
        }
    }
}

fn register_root<T: Real>(cursor: ScanCursor<T>, x: Option<T>) -> ScanCursor<T> {
    match x {
        Some(x) => cursor.found(x, T::zero(), Interest::Root),
        None => cursor.exhaust(),
    }
}
