//! Core types and traits for the graphscan solvers.
//!
//! This crate defines the shared abstractions the scanning solver and the
//! viewport fitter build on:
//!
//! - [`Real`]: the floating-point precisions a scan can run in (`f32`, `f64`)
//! - [`Coordinate2D`]: a point, undefined when a component is NaN
//! - [`Range1D`], [`Range2D`]: clamped intervals and rectangles
//! - [`Function`], [`Curve`], [`Expression`]: the evaluator surfaces consumed
//!   from the symbolic engine, with an explicit [`EvaluationContext`]
//! - [`Observer`]: receives solver events and optionally returns control
//!   actions

mod context;
mod coordinate;
mod expression;
mod function;
mod observer;
mod range;
mod real;

pub use context::{AngleUnit, ComplexFormat, EvaluationContext};
pub use coordinate::Coordinate2D;
pub use expression::{Difference, Expression, Shape};
pub use function::{Curve, Function};
pub use observer::Observer;
pub use range::{Range1D, Range2D};
pub use real::Real;
