//! Automatic viewport fitting for plotted curves.
//!
//! A [`Zoom`] is fed the curves of a graph, one analysis at a time, then
//! returns the rectangle to display: points of interest and intersections
//! are kept in view, the typical magnitude of the curves sets the scale,
//! and one axis is normalized to the screen ratio when that does not squeeze
//! the curves.
//!
//! ```
//! use graphscan_core::{Coordinate2D, EvaluationContext};
//! use graphscan_zoom::Zoom;
//!
//! let parabola = |t: f32, _: &EvaluationContext| Coordinate2D::new(t, t * t - 4.0);
//!
//! let mut zoom = Zoom::new(-10.0, 10.0, 0.5, EvaluationContext::default(), 1e8);
//! zoom.fit_points_of_interest(&parabola, false);
//! zoom.fit_magnitude(&parabola, false);
//! let range = zoom.range(false);
//!
//! assert!(range.x_min() < -2.0 && 2.0 < range.x_max());
//! assert!(range.y_min() <= -4.0);
//! ```

mod zoom;

pub use zoom::{Config, ConfigError, Zoom};
