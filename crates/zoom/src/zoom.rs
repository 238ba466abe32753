//! Viewport fitting.
//!
//! A [`Zoom`] accumulates two rectangles while it is fed curves:
//!
//! - the *interesting range*, the bounding box of every point that must be
//!   visible (points of interest, intersections, coarse samples);
//! - the *magnitude range*, an outlier-damped estimate of the typical scale
//!   of the curves.
//!
//! [`Zoom::range`] merges both, together with any forced axis, into a
//! displayable rectangle: finite, bounded by `max_float`, non-empty on both
//! axes, and normalized on at most one axis to match the target ratio.

mod asymptote;
mod config;
mod sanitize;
mod sweep;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};

use graphscan_core::{Coordinate2D, Curve, EvaluationContext, Range1D, Range2D, Real};
use graphscan_solvers::{BracketTest, Hone, solver::Event};

use asymptote::HorizontalAsymptotes;
use sweep::Sweep;

/// Computes a displayable viewport for one or more curves.
///
/// Curves are evaluated in single precision, except for the optional
/// cross-check of [`Zoom::fit_points_of_interest_precise`].
#[derive(Debug, Clone)]
pub struct Zoom {
    bounds: Range1D,
    normal_ratio: f32,
    max_float: f32,
    context: EvaluationContext,
    config: Config,
    interesting_range: Range2D,
    magnitude_range: Range2D,
    forced_range: Range2D,
}

impl Zoom {
    /// Creates a zoom scanning the parameter over `[t_min, t_max]`.
    ///
    /// `normal_ratio` is the Y/X length ratio of an orthonormal viewport,
    /// and `max_float` bounds every coordinate of the result.
    #[must_use]
    pub fn new(
        t_min: f32,
        t_max: f32,
        normal_ratio: f32,
        context: EvaluationContext,
        max_float: f32,
    ) -> Self {
        Self::with_config(t_min, t_max, normal_ratio, context, max_float, Config::default())
    }

    #[must_use]
    pub fn with_config(
        t_min: f32,
        t_max: f32,
        normal_ratio: f32,
        context: EvaluationContext,
        max_float: f32,
        config: Config,
    ) -> Self {
        Self {
            bounds: Range1D::new(t_min, t_max),
            normal_ratio,
            max_float,
            context,
            config,
            interesting_range: Range2D::default(),
            magnitude_range: Range2D::default(),
            forced_range: Range2D::default(),
        }
    }

    /// Turns any rectangle into a displayable one containing it.
    #[must_use]
    pub fn sanitize(range: Range2D, normal_ratio: f32, max_float: f32) -> Range2D {
        let mut zoom = Self::new(
            -max_float,
            max_float,
            normal_ratio,
            EvaluationContext::default(),
            max_float,
        );
        zoom.interesting_range = range;
        zoom.range(false)
    }

    /// The viewport shown when nothing is known about the curves.
    #[must_use]
    pub fn default_range(normal_ratio: f32, max_float: f32) -> Range2D {
        Self::sanitize(Range2D::default(), normal_ratio, max_float)
    }

    /// Changes the interval the parameter is scanned over.
    pub fn set_bounds(&mut self, min: f32, max: f32) {
        self.bounds = Range1D::new(min, max);
    }

    /// Pins the valid axes of `range`; they are returned as is.
    pub fn set_forced_range(&mut self, range: Range2D) {
        self.forced_range = range;
    }

    #[must_use]
    pub fn interesting_range(&self) -> Range2D {
        self.interesting_range
    }

    #[must_use]
    pub fn magnitude_range(&self) -> Range2D {
        self.magnitude_range
    }

    /// Extends the interesting range by evenly spaced samples of the curve.
    ///
    /// This covers curves without any point of interest, like lines.
    pub fn fit_full_function<C>(&mut self, curve: &C)
    where
        C: Curve<f32> + ?Sized,
    {
        for t in sample_points(self.bounds, self.config.sample_size()) {
            let p = curve.evaluate(t, &self.context);
            self.fit_point(p, false);
        }
    }

    /// Extends the interesting range by the roots, extrema, discontinuities
    /// and horizontal asymptotes of the curve.
    ///
    /// Two sweeps go outward from the center of the bounds. A sweep finding
    /// too many points assumes there are infinitely many (a periodic curve)
    /// and keeps only the first few.
    ///
    /// With `vertical`, the curve is `x = f(y)` and its abscissa is searched.
    pub fn fit_points_of_interest<C>(&mut self, curve: &C, vertical: bool)
    where
        C: Curve<f32> + ?Sized,
    {
        self.points_of_interest(curve, None, vertical);
    }

    /// Like [`Zoom::fit_points_of_interest`], cross-checking undefined
    /// values against a double precision evaluation of the same curve.
    ///
    /// A sweep reaching a value that is undefined in single precision only
    /// (e.g. `(eˣ - 1) / (eˣ + 1)` around `x = 89`) has hit the limits of
    /// `f32` and stops there.
    pub fn fit_points_of_interest_precise<C, P>(&mut self, curve: &C, precise: &P, vertical: bool)
    where
        C: Curve<f32> + ?Sized,
        P: Curve<f64> + ?Sized,
    {
        let context = self.context;
        let precise = |t: f32| ordinate(precise.evaluate(f64::from(t), &context), vertical);
        self.points_of_interest(curve, Some(&precise), vertical);
    }

    fn points_of_interest<C>(&mut self, curve: &C, precise: Option<&dyn Fn(f32) -> f64>, vertical: bool)
    where
        C: Curve<f32> + ?Sized,
    {
        let mut asymptotes = HorizontalAsymptotes::new(
            self.bounds.center(),
            self.config.asymptote_threshold(),
            self.config.asymptote_hysteresis(),
        );
        let f = |t: f32, context: &EvaluationContext| ordinate(curve.evaluate(t, context), vertical);
        let observer = |event: &Event<f32>| {
            if let Event::Sampled { bracket: [a, _, c] } = event {
                asymptotes.update(*c, (c.y() - a.y()) / (c.x() - a.x()));
            }
            None
        };

        let sweep = Sweep {
            test: BracketTest::Notable,
            hone: Hone::Dichotomy {
                iterations: self.config.dichotomy_iterations(),
            },
            vertical,
            precise,
            to_point: &|p| p,
        };
        let interrupted = self.fit_with_solver(&f, &sweep, observer);

        if !interrupted.left {
            self.fit_point(asymptotes.left(), vertical);
        }
        if !interrupted.right {
            self.fit_point(asymptotes.right(), vertical);
        }
    }

    /// Extends the interesting range by the points where two curves cross.
    ///
    /// Each crossing contributes the point of the first curve just past it.
    pub fn fit_intersections<C1, C2>(&mut self, curve1: &C1, curve2: &C2, vertical: bool)
    where
        C1: Curve<f32> + ?Sized,
        C2: Curve<f32> + ?Sized,
    {
        let context = self.context;
        let difference = |t: f32, context: &EvaluationContext| {
            ordinate(curve1.evaluate(t, context), vertical) - ordinate(curve2.evaluate(t, context), vertical)
        };
        let on_first_curve = |p: Coordinate2D<f32>| {
            Coordinate2D::new(p.x(), ordinate(curve1.evaluate(p.x(), &context), vertical))
        };

        let sweep = Sweep {
            test: BracketTest::EvenOrOddRoot,
            hone: Hone::FarEndpoint,
            vertical,
            precise: None,
            to_point: &on_first_curve,
        };
        self.fit_with_solver(&difference, &sweep, |_: &Event<f32>| None);
    }

    /// Extends the magnitude range by the typical scale of the curve's
    /// ordinates over the current X range.
    ///
    /// Positive and negative ordinates are handled separately: each extends
    /// the range to `e` times the geometric mean of their magnitudes, capped
    /// by the sampled extrema, so rare spikes barely matter. Infinite
    /// samples are skipped.
    pub fn fit_magnitude<C>(&mut self, curve: &C, vertical: bool)
    where
        C: Curve<f32> + ?Sized,
    {
        let about_zero = f32::MINIMAL_STEP;
        let sane = self.sanitized_range();
        let axis = if vertical { sane.y() } else { sane.x() };

        let mut sample = Range1D::default();
        let (mut negative_sum, mut positive_sum) = (0.0_f32, 0.0_f32);
        let (mut negative_count, mut positive_count) = (0.0_f32, 0.0_f32);
        for t in sample_points(axis, self.config.sample_size()) {
            let y = ordinate(curve.evaluate(t, &self.context), vertical);
            if y.is_infinite() {
                continue;
            }
            sample.extend(y, self.max_float);
            // Negated to skip NaN.
            if !(y.abs() > about_zero) {
                continue;
            }
            if y < 0.0 {
                negative_sum += y.abs().ln();
                negative_count += 1.0;
            } else {
                positive_sum += y.ln();
                positive_count += 1.0;
            }
        }

        let y_max = if positive_count > 0.0 {
            sample.max().min((positive_sum / positive_count + 1.0).exp())
        } else {
            sample.max()
        };
        let y_min = if negative_count > 0.0 {
            sample.min().max(-(negative_sum / negative_count + 1.0).exp())
        } else {
            sample.min()
        };

        let max_float = self.max_float;
        let magnitude = if vertical {
            self.magnitude_range.x_mut()
        } else {
            self.magnitude_range.y_mut()
        };
        magnitude.extend(y_max, max_float);
        magnitude.extend(y_min, max_float);
    }

    /// Returns the displayable viewport and ends the computation.
    ///
    /// With `force_normalization`, one non-forced axis is always adjusted to
    /// the normal ratio.
    #[must_use]
    pub fn range(self, force_normalization: bool) -> Range2D {
        let pretty = self.pretty_range(force_normalization);
        let mut result = Range2D::default();
        result.x_mut().set_min(pretty.x_min(), self.max_float);
        result.x_mut().set_max(pretty.x_max(), self.max_float);
        result.y_mut().set_min(pretty.y_min(), self.max_float);
        result.y_mut().set_max(pretty.y_max(), self.max_float);
        result
    }

    /// Extends the interesting range by the finite components of `p`.
    fn fit_point(&mut self, p: Coordinate2D<f32>, vertical: bool) {
        let p = if vertical { p.flipped() } else { p };
        let p = Coordinate2D::new(finite_or_nan(p.x()), finite_or_nan(p.y()));
        self.interesting_range.extend(p, self.max_float);
    }
}

/// The searched coordinate of a curve point.
fn ordinate<T: Real>(p: Coordinate2D<T>, vertical: bool) -> T {
    if vertical { p.x() } else { p.y() }
}

/// Infinite values carry no position; like NaN, range extension skips them.
fn finite_or_nan(t: f32) -> f32 {
    if t.is_finite() { t } else { f32::NAN }
}

/// `count` evenly spaced values from `range.min()` to `range.max()`, both
/// included exactly.
#[allow(clippy::cast_precision_loss)]
fn sample_points(range: Range1D, count: usize) -> impl Iterator<Item = f32> {
    let last = count - 1;
    let step = range.length() / last as f32;
    (0..count).map(move |i| {
        if i == last {
            range.max()
        } else {
            range.min() + step * i as f32
        }
    })
}
