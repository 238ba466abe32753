use crate::{Coordinate2D, EvaluationContext};

/// A scalar function of one variable.
///
/// Returning NaN means the function is undefined at `x`.
///
/// Closures of the form `|x, context| ...` implement this trait.
pub trait Function<T> {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: T, context: &EvaluationContext) -> T;
}

impl<T, F> Function<T> for F
where
    F: Fn(T, &EvaluationContext) -> T,
{
    fn evaluate(&self, x: T, context: &EvaluationContext) -> T {
        self(x, context)
    }
}

/// A curve parameterized by `t`.
///
/// Cartesian functions map `t` to `(t, f(t))`; parametric and polar curves
/// may return any point. A NaN component marks an undefined point.
pub trait Curve<T> {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: T, context: &EvaluationContext) -> Coordinate2D<T>;
}

impl<T, F> Curve<T> for F
where
    F: Fn(T, &EvaluationContext) -> Coordinate2D<T>,
{
    fn evaluate(&self, t: T, context: &EvaluationContext) -> Coordinate2D<T> {
        self(t, context)
    }
}
