//! Adaptive scanning for roots, extrema, discontinuities and intersections.
//!
//! # Algorithm
//!
//! A call samples `f` from the cursor's position toward its end with an
//! adaptive step (see [`ScanCursor::next_x`]). Every new sample completes a
//! bracket of three consecutive samples, which a [`BracketTest`] classifies.
//! An interesting bracket is refined by a [`Hone`] routine, and the first
//! refined point lying strictly ahead of the cursor is returned. Before
//! being reported, the abscissa is snapped to the grid of
//! [`Real::MINIMAL_STEP`] when that does not degrade the solution.
//!
//! When discontinuity exclusion is enabled (the default in `f64`), a
//! bracket with one undefined end that fails its test is first narrowed by
//! bisection onto its defined side and tested again. This finds roots that
//! sit right next to an undefined region.
//!
//! Root searches on expressions exploit their structure: a product vanishes
//! where one of its factors does, a quotient or power where its first child
//! does, and `|a|`, `-a`, `√a`, `sinh(a)` exactly where `a` does.
//!
//! # Observer Events
//!
//! [`Solver::next_observed`] emits an [`Event::Sampled`] for every bracket,
//! and an [`Event::Honed`] for every refinement. Observers can return
//! [`Action::StopEarly`] to exhaust the cursor immediately, or
//! [`Action::Ignore`] to skip the bracket or discard the refined point.

mod action;
mod config;
mod event;
mod roots;
mod scan;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::Event;

use graphscan_core::{EvaluationContext, Expression, Function, Observer, Real};

use crate::{BracketTest, Hone, ScanCursor};

use scan::scan;

/// Scans functions for points of interest.
///
/// The solver holds what is shared across scans: the evaluation context
/// forwarded to every evaluation, and the numerical settings. The progress
/// of a scan lives in the [`ScanCursor`] passed to each call.
#[derive(Debug, Clone, Copy)]
pub struct Solver<T> {
    context: EvaluationContext,
    config: Config<T>,
}

impl<T: Real> Solver<T> {
    /// Creates a solver with the default settings for `T`.
    #[must_use]
    pub fn new(context: EvaluationContext) -> Self {
        Self::with_config(context, Config::default())
    }

    #[must_use]
    pub fn with_config(context: EvaluationContext, config: Config<T>) -> Self {
        Self { context, config }
    }

    #[must_use]
    pub fn context(&self) -> &EvaluationContext {
        &self.context
    }

    #[must_use]
    pub fn config(&self) -> &Config<T> {
        &self.config
    }

    /// Finds the next point where `test` fires and `hone` succeeds.
    ///
    /// Returns the cursor moved onto the solution, or exhausted if there is
    /// none before the end.
    #[must_use]
    pub fn next<F>(&self, cursor: ScanCursor<T>, f: &F, test: BracketTest, hone: Hone) -> ScanCursor<T>
    where
        F: Function<T> + ?Sized,
    {
        self.next_observed(cursor, f, test, hone, ())
    }

    /// Like [`Solver::next`], reporting every bracket and refinement to
    /// `observer`.
    ///
    /// See the [module docs](self) for the events and actions.
    #[must_use]
    pub fn next_observed<F, Obs>(
        &self,
        cursor: ScanCursor<T>,
        f: &F,
        test: BracketTest,
        hone: Hone,
        mut observer: Obs,
    ) -> ScanCursor<T>
    where
        F: Function<T> + ?Sized,
        Obs: Observer<Event<T>, Action>,
    {
        let evaluate = |x| f.evaluate(x, &self.context);
        scan(cursor, &evaluate, test, hone, &self.config, &mut observer)
    }

    /// Finds the next local minimum of `e`.
    #[must_use]
    pub fn next_minimum(&self, cursor: ScanCursor<T>, e: &dyn Expression<T>) -> ScanCursor<T> {
        let f = |x, context: &EvaluationContext| e.evaluate(x, context);
        self.next(cursor, &f, BracketTest::Minimum, Hone::BrentMinimum)
    }

    /// Finds the next local maximum of `e`.
    #[must_use]
    pub fn next_maximum(&self, cursor: ScanCursor<T>, e: &dyn Expression<T>) -> ScanCursor<T> {
        let f = |x, context: &EvaluationContext| e.evaluate(x, context);
        self.next(cursor, &f, BracketTest::Maximum, Hone::BrentMaximum)
    }
}
