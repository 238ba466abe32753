//! Collected points of interest of a function over an interval.

use graphscan_core::{Expression, Real};

use crate::{Interest, ScanCursor, Solver, solutions};

/// A solution found by a scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointOfInterest<T> {
    pub x: T,
    pub y: T,
    pub interest: Interest,
}

/// The roots, extrema and intersections of a function, sorted by abscissa.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointsOfInterest<T> {
    points: Vec<PointOfInterest<T>>,
}

impl<T: Real> PointsOfInterest<T> {
    /// Maximum number of points of each kind kept by [`PointsOfInterest::compute`].
    pub const MAX_POINTS_PER_KIND: usize = 64;

    /// Scans `e` over `[start, end]` for roots, minima and maxima.
    #[must_use]
    pub fn compute(solver: &Solver<T>, e: &dyn Expression<T>, start: T, end: T) -> Self {
        Self::compute_with_intersections(solver, e, &[], start, end)
    }

    /// Like [`PointsOfInterest::compute`], also collecting the intersections
    /// of `e` with each of `others`.
    #[must_use]
    pub fn compute_with_intersections(
        solver: &Solver<T>,
        e: &dyn Expression<T>,
        others: &[&dyn Expression<T>],
        start: T,
        end: T,
    ) -> Self {
        let cursor = ScanCursor::new(start, end);
        let mut points = Vec::new();
        points.extend(solutions(cursor, |c| solver.next_root(c, e)).take(Self::MAX_POINTS_PER_KIND));
        points.extend(solutions(cursor, |c| solver.next_minimum(c, e)).take(Self::MAX_POINTS_PER_KIND));
        points.extend(solutions(cursor, |c| solver.next_maximum(c, e)).take(Self::MAX_POINTS_PER_KIND));
        for &other in others {
            points.extend(
                solutions(cursor, |c| solver.next_intersection(c, e, other))
                    .take(Self::MAX_POINTS_PER_KIND),
            );
        }
        Self::from_points(points)
    }

    /// Collects `points`, sorting them by abscissa.
    #[must_use]
    pub fn from_points(mut points: Vec<PointOfInterest<T>>) -> Self {
        points.sort_by(|a, b| compare(a.x, b.x));
        Self { points }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointOfInterest<T>> {
        self.points.iter()
    }

    /// Iterates over the points of one kind; [`Interest::None`] matches all.
    pub fn filter(&self, interest: Interest) -> impl Iterator<Item = &PointOfInterest<T>> {
        self.points
            .iter()
            .filter(move |p| interest.is_none() || p.interest == interest)
    }

    /// Returns the point closest to `start` lying strictly between `start`
    /// and `end`, optionally restricted to one kind.
    ///
    /// This is how a cursor jumps from one point of interest to the next.
    #[must_use]
    pub fn first_in_direction(&self, start: T, end: T, interest: Interest) -> Option<PointOfInterest<T>> {
        let (low, high) = if start <= end { (start, end) } else { (end, start) };
        let candidates = self
            .filter(interest)
            .filter(|p| low < p.x && p.x < high);
        if start <= end {
            candidates.min_by(|a, b| compare(a.x, b.x)).copied()
        } else {
            candidates.max_by(|a, b| compare(a.x, b.x)).copied()
        }
    }
}

fn compare<T: Real>(a: T, b: T) -> std::cmp::Ordering {
    a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal)
}

impl<'a, T> IntoIterator for &'a PointsOfInterest<T> {
    type Item = &'a PointOfInterest<T>;
    type IntoIter = std::slice::Iter<'a, PointOfInterest<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
