use graphscan_core::{Coordinate2D, Function, Range2D, Real};
use graphscan_solvers::{
    BracketTest, Hone, Interest, ScanCursor, Solver,
    solver::{Action, Event},
};

use super::Zoom;

/// How the solver sweeps are run and their solutions fitted.
pub(super) struct Sweep<'a> {
    pub(super) test: BracketTest,
    pub(super) hone: Hone,
    pub(super) vertical: bool,
    /// Double precision ordinate, to tell real discontinuities from `f32`
    /// overflow.
    pub(super) precise: Option<&'a dyn Fn(f32) -> f64>,
    /// Maps a solution to the point that is fitted.
    pub(super) to_point: &'a dyn Fn(Coordinate2D<f32>) -> Coordinate2D<f32>,
}

/// Which one-sided sweeps stopped on the point cap.
#[derive(Debug, Clone, Copy)]
pub(super) struct Interrupted {
    pub(super) left: bool,
    pub(super) right: bool,
}

impl Zoom {
    /// Sweeps from the center of the bounds toward each end, then tests the
    /// small bracket around the center that both sweeps skip.
    pub(super) fn fit_with_solver<F, O>(&mut self, f: &F, sweep: &Sweep<'_>, mut observer: O) -> Interrupted
    where
        F: Function<f32> + ?Sized,
        O: FnMut(&Event<f32>) -> Option<Action>,
    {
        let solver = Solver::new(self.context);
        let c = self.bounds.center();
        let d = self
            .config
            .margin_around_zero()
            .max((c * f32::RELATIVE_PRECISION).abs());

        let right = self.fit_one_side(&solver, ScanCursor::new(c + d, self.bounds.max()), f, sweep, &mut observer);
        let left = self.fit_one_side(&solver, ScanCursor::new(c - d, self.bounds.min()), f, sweep, &mut observer);

        let [p1, p2, p3] = [c - d, c, c + d].map(|t| Coordinate2D::new(t, f.evaluate(t, &self.context)));
        if !BracketTest::Notable.classify(p1, p2, p3).is_none() {
            self.fit_point((sweep.to_point)(p2), sweep.vertical);
        }

        Interrupted { left, right }
    }

    /// Fits every solution of one sweep; returns `true` if the sweep hit the
    /// point cap.
    ///
    /// Past the cap the curve is assumed to have infinitely many points and
    /// only the first few are kept.
    fn fit_one_side<F, O>(
        &mut self,
        solver: &Solver<f32>,
        mut cursor: ScanCursor<f32>,
        f: &F,
        sweep: &Sweep<'_>,
        observer: &mut O,
    ) -> bool
    where
        F: Function<f32> + ?Sized,
        O: FnMut(&Event<f32>) -> Option<Action>,
    {
        let mut found = 0;
        let mut kept = Range2D::default();
        loop {
            cursor = solver.next_observed(cursor, f, sweep.test, sweep.hone, &mut *observer);
            if cursor.is_exhausted() {
                return false;
            }

            let p = cursor.solution();
            if cursor.interest() == Interest::Discontinuity
                && p.y().is_nan()
                && sweep.precise.is_some_and(|precise| precise(p.x()).is_finite())
            {
                return false;
            }

            self.fit_point((sweep.to_point)(p), sweep.vertical);
            found += 1;
            if found == self.config.max_points_if_infinite() {
                kept = self.interesting_range;
            } else if found >= self.config.max_points_on_one_side() {
                self.interesting_range = kept;
                return true;
            }
        }
    }
}
