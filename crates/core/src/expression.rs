use crate::EvaluationContext;

/// The structural kinds of expression the root search can exploit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `a × b × …`: a root of the whole is a root of one factor.
    Product,
    /// `a ^ b`: only the base can vanish.
    Power,
    /// `root(a, n)`: only the radicand can vanish.
    NthRoot,
    /// `a / b`: only the numerator can vanish.
    Quotient,
    /// `|a|`: vanishes exactly where `a` does.
    AbsoluteValue,
    /// `sinh(a)`: vanishes exactly where `a` does.
    HyperbolicSine,
    /// `-a`: vanishes exactly where `a` does.
    Opposite,
    /// `√a`: vanishes exactly where `a` does.
    SquareRoot,
    /// Anything else; searched numerically.
    Other,
}

/// The surface of a symbolic expression that the solvers consume.
///
/// Besides numeric evaluation, an expression can describe its top-level
/// [`Shape`] and hand out its children. Implementations that cannot provide
/// structure keep the defaults: the solver then falls back to a plain scan,
/// which finds the same roots more slowly.
pub trait Expression<T> {
    /// Evaluates the expression with its unknown set to `x`.
    fn evaluate(&self, x: T, context: &EvaluationContext) -> T;

    /// Returns the top-level shape.
    fn shape(&self) -> Shape {
        Shape::Other
    }

    /// Returns the number of direct children.
    fn child_count(&self) -> usize {
        0
    }

    /// Returns the child at `index`, if any.
    fn child(&self, _index: usize) -> Option<&dyn Expression<T>> {
        None
    }

    /// Returns `Some(false)` if the expression is known never to vanish,
    /// `Some(true)` if it is identically zero, `None` if unknown.
    fn is_null(&self, _context: &EvaluationContext) -> Option<bool> {
        None
    }
}

/// The difference `lhs - rhs` of two borrowed expressions.
pub struct Difference<'a, T> {
    lhs: &'a dyn Expression<T>,
    rhs: &'a dyn Expression<T>,
}

impl<'a, T> Difference<'a, T> {
    #[must_use]
    pub fn new(lhs: &'a dyn Expression<T>, rhs: &'a dyn Expression<T>) -> Self {
        Self { lhs, rhs }
    }
}

impl<T> Expression<T> for Difference<'_, T>
where
    T: Copy + std::ops::Sub<Output = T>,
{
    fn evaluate(&self, x: T, context: &EvaluationContext) -> T {
        self.lhs.evaluate(x, context) - self.rhs.evaluate(x, context)
    }
}
