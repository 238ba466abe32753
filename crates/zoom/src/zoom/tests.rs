use super::*;

use approx::assert_relative_eq;

const MAX_FLOAT: f32 = 1e8;
const RATIO: f32 = 0.5;

fn zoom(t_min: f32, t_max: f32) -> Zoom {
    Zoom::new(t_min, t_max, RATIO, EvaluationContext::default(), MAX_FLOAT)
}

fn cartesian(f: impl Fn(f32) -> f32) -> impl Fn(f32, &EvaluationContext) -> Coordinate2D<f32> {
    move |t, _| Coordinate2D::new(t, f(t))
}

fn contains(outer: Range1D, inner: Range1D) -> bool {
    outer.min() <= inner.min() && inner.max() <= outer.max()
}

#[test]
fn default_range_matches_the_ratio() {
    let range = Zoom::default_range(RATIO, MAX_FLOAT);
    assert_eq!(range.x(), Range1D::new(-10.0, 10.0));
    assert_eq!(range.y(), Range1D::new(-5.0, 5.0));
}

#[test]
fn sanitize_normalizes_one_axis_around_the_input() {
    let square = Range2D::new(Range1D::new(-1.0, 1.0), Range1D::new(-1.0, 1.0));
    let range = Zoom::sanitize(square, RATIO, MAX_FLOAT);

    assert_eq!(range.x(), Range1D::new(-2.0, 2.0));
    assert_eq!(range.y(), Range1D::new(-1.0, 1.0));
}

#[test]
fn sanitize_widens_a_point() {
    let point = Range2D::new(Range1D::new(3.0, 3.0), Range1D::default());
    let range = Zoom::sanitize(point, RATIO, MAX_FLOAT);

    assert!(range.is_valid());
    assert!(!range.x().is_empty() && !range.y().is_empty());
    assert!(range.x_min() < 3.0 && 3.0 < range.x_max());
}

#[test]
fn parabola_shows_roots_and_minimum() {
    let mut zoom = zoom(-10.0, 10.0);
    zoom.fit_points_of_interest(&cartesian(|t| t * t - 4.0), false);

    let interesting = zoom.interesting_range();
    assert_relative_eq!(interesting.x_min(), -2.0, epsilon = 0.15);
    assert_relative_eq!(interesting.x_max(), 2.0, epsilon = 0.15);
    assert_relative_eq!(interesting.y_min(), -4.0, epsilon = 1e-3);
    assert_relative_eq!(interesting.y_max(), 0.0, epsilon = 1e-3);

    let range = zoom.range(false);
    assert!(contains(range.x(), interesting.x()));
    assert!(contains(range.y(), interesting.y()));
}

#[test]
fn vertical_curve_searches_the_abscissa() {
    let mut zoom = zoom(-10.0, 10.0);
    let curve = |t: f32, _: &EvaluationContext| Coordinate2D::new(t * t - 4.0, t);
    zoom.fit_points_of_interest(&curve, true);

    let interesting = zoom.interesting_range();
    assert_relative_eq!(interesting.x_min(), -4.0, epsilon = 1e-3);
    assert_relative_eq!(interesting.x_max(), 0.0, epsilon = 1e-3);
    assert_relative_eq!(interesting.y_min(), -2.0, epsilon = 0.15);
    assert_relative_eq!(interesting.y_max(), 2.0, epsilon = 0.15);
}

#[test]
fn line_is_displayable_with_and_without_samples() {
    let line = cartesian(|t| t);

    let mut zoom = zoom(-10.0, 10.0);
    zoom.fit_points_of_interest(&line, false);
    let range = zoom.range(false);
    assert!(range.is_valid());
    assert!(range.x_min() < 0.0 && 0.0 < range.x_max());
    assert!(range.y_min() < 0.0 && 0.0 < range.y_max());

    let mut zoom = self::zoom(-10.0, 10.0);
    zoom.fit_points_of_interest(&line, false);
    zoom.fit_full_function(&line);
    let range = zoom.range(false);
    assert!(contains(range.x(), Range1D::new(-10.0, 10.0)));
    assert!(contains(range.y(), Range1D::new(-10.0, 10.0)));
}

#[test]
fn horizontal_asymptotes_are_shown() {
    let mut zoom = zoom(-20.0, 20.0);
    zoom.fit_points_of_interest(&cartesian(f32::atan), false);

    let interesting = zoom.interesting_range();
    assert!(1.5 < interesting.x_max() && interesting.x_max() < 4.0);
    assert!(-4.0 < interesting.x_min() && interesting.x_min() < -1.5);
    assert!(1.0 < interesting.y_max() && interesting.y_max() < 1.35);
}

#[test]
fn periodic_curve_keeps_the_first_points() {
    let mut zoom = zoom(-100.0, 100.0);
    zoom.fit_points_of_interest(&cartesian(f32::sin), false);

    let interesting = zoom.interesting_range();
    assert!(5.0 < interesting.x_max() && interesting.x_max() < 9.0);
    assert!(-9.0 < interesting.x_min() && interesting.x_min() < -5.0);
    assert_relative_eq!(interesting.y_max(), 1.0, epsilon = 1e-2);
    assert_relative_eq!(interesting.y_min(), -1.0, epsilon = 1e-2);
}

#[test]
fn intersections_are_shown() {
    let mut zoom = zoom(-10.0, 10.0);
    zoom.fit_intersections(&cartesian(|t| t), &cartesian(|t| t * t - 2.0), false);

    let interesting = zoom.interesting_range();
    assert!(-1.2 < interesting.x_min() && interesting.x_min() <= -1.0);
    assert!(2.0 <= interesting.x_max() && interesting.x_max() < 2.3);
    assert_relative_eq!(interesting.x_min(), interesting.y_min());
    assert_relative_eq!(interesting.x_max(), interesting.y_max());
}

#[test]
fn forced_axis_is_kept() {
    let mut zoom = zoom(-10.0, 10.0);
    zoom.set_forced_range(Range2D::new(Range1D::new(0.0, 1.0), Range1D::default()));
    zoom.fit_points_of_interest(&cartesian(|t| t * t - 4.0), false);

    let range = zoom.range(true);
    assert_eq!(range.x(), Range1D::new(0.0, 1.0));
    assert!(range.y().is_valid() && !range.y().is_empty());
}

#[test]
fn magnitude_ignores_a_spike() {
    let mut zoom = zoom(-10.0, 10.0);
    zoom.set_forced_range(Range2D::new(Range1D::new(-10.0, 10.0), Range1D::default()));
    let spiky = cartesian(|t| if (0.0..0.1).contains(&t) { 1e6 } else { 2.0 + t.sin() });
    zoom.fit_magnitude(&spiky, false);

    let magnitude = zoom.magnitude_range();
    assert!(3.0 < magnitude.y_max() && magnitude.y_max() < 10.0);
    assert!(magnitude.y_min() >= 1.0 - 1e-3);
}

#[test]
fn precise_evaluation_tells_overflow_from_discontinuity() {
    let sigmoid = cartesian(|t| (t.exp() - 1.0) / (t.exp() + 1.0));
    let precise = |t: f64, _: &EvaluationContext| Coordinate2D::new(t, (t.exp() - 1.0) / (t.exp() + 1.0));

    let mut zoom = self::zoom(-200.0, 200.0);
    zoom.fit_points_of_interest_precise(&sigmoid, &precise, false);
    assert!(zoom.interesting_range().x_max() < 10.0);

    let mut zoom = self::zoom(-200.0, 200.0);
    zoom.fit_points_of_interest(&sigmoid, false);
    assert!(zoom.interesting_range().x_max() > 80.0);
}

#[test]
fn infinite_samples_are_not_fitted() {
    let mut zoom = zoom(-1.0, 1.0);
    zoom.fit_full_function(&cartesian(|t| if t > 0.5 { f32::INFINITY } else { t }));

    let interesting = zoom.interesting_range();
    assert_eq!(interesting.x(), Range1D::new(-1.0, 1.0));
    assert_relative_eq!(interesting.y_min(), -1.0);
    assert!(interesting.y_max() <= 0.5);
}

#[test]
fn pole_at_the_center_keeps_a_sane_height() {
    let mut zoom = zoom(-10.0, 10.0);
    let hyperbola = cartesian(|t| 1.0 / t);
    zoom.fit_points_of_interest(&hyperbola, false);
    zoom.fit_magnitude(&hyperbola, false);

    let range = zoom.range(false);
    assert!(0.3 < range.y_max() && range.y_max() < 10.0, "y = {:?}", range.y());
    assert!(-10.0 < range.y_min() && range.y_min() < -0.3, "y = {:?}", range.y());
}

#[test]
fn logarithm_keeps_a_sane_height() {
    let mut zoom = zoom(-10.0, 10.0);
    let logarithm = cartesian(f32::ln);
    zoom.fit_points_of_interest(&logarithm, false);
    zoom.fit_magnitude(&logarithm, false);

    let interesting = zoom.interesting_range();
    assert_relative_eq!(interesting.x_min(), 0.0);
    assert!(interesting.y().is_valid());

    let range = zoom.range(false);
    assert!(-10.0 < range.y_min() && range.y_max() < 10.0, "y = {:?}", range.y());
}

#[test]
fn samples_span_the_new_bounds_exactly() {
    let mut zoom = zoom(-1.0, 1.0);
    zoom.set_bounds(-10.0, 10.0);
    zoom.fit_full_function(&cartesian(|t| t));

    let interesting = zoom.interesting_range();
    assert_eq!(interesting.x(), Range1D::new(-10.0, 10.0));
    assert_eq!(interesting.y(), Range1D::new(-10.0, 10.0));
}
