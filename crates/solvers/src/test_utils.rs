//! A small expression tree to exercise structure-aware root finding.

use graphscan_core::{EvaluationContext, Expression, Real, Shape};

#[derive(Debug, Clone)]
pub(crate) enum Expr {
    X,
    Const(f64),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Vec<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Sqrt(Box<Expr>),
    Abs(Box<Expr>),
    Neg(Box<Expr>),
    Sinh(Box<Expr>),
    Ln(Box<Expr>),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Tan(Box<Expr>),
}

pub(crate) fn x() -> Expr {
    Expr::X
}

impl Expr {
    pub(crate) fn c(value: f64) -> Self {
        Self::Const(value)
    }

    pub(crate) fn add(a: Expr, b: Expr) -> Self {
        Self::Add(Box::new(a), Box::new(b))
    }

    pub(crate) fn sub(a: Expr, b: Expr) -> Self {
        Self::Sub(Box::new(a), Box::new(b))
    }

    pub(crate) fn mul(factors: Vec<Expr>) -> Self {
        Self::Mul(factors)
    }

    pub(crate) fn div(a: Expr, b: Expr) -> Self {
        Self::Div(Box::new(a), Box::new(b))
    }

    pub(crate) fn pow(a: Expr, b: Expr) -> Self {
        Self::Pow(Box::new(a), Box::new(b))
    }

    pub(crate) fn sqrt(a: Expr) -> Self {
        Self::Sqrt(Box::new(a))
    }

    pub(crate) fn abs(a: Expr) -> Self {
        Self::Abs(Box::new(a))
    }

    pub(crate) fn neg(a: Expr) -> Self {
        Self::Neg(Box::new(a))
    }

    pub(crate) fn sinh(a: Expr) -> Self {
        Self::Sinh(Box::new(a))
    }

    pub(crate) fn ln(a: Expr) -> Self {
        Self::Ln(Box::new(a))
    }

    pub(crate) fn sin(a: Expr) -> Self {
        Self::Sin(Box::new(a))
    }

    pub(crate) fn cos(a: Expr) -> Self {
        Self::Cos(Box::new(a))
    }

    pub(crate) fn tan(a: Expr) -> Self {
        Self::Tan(Box::new(a))
    }

    fn children(&self) -> Vec<&Expr> {
        match self {
            Self::X | Self::Const(_) => Vec::new(),
            Self::Mul(factors) => factors.iter().collect(),
            Self::Add(a, b) | Self::Sub(a, b) | Self::Div(a, b) | Self::Pow(a, b) => {
                vec![a.as_ref(), b.as_ref()]
            }
            Self::Sqrt(a)
            | Self::Abs(a)
            | Self::Neg(a)
            | Self::Sinh(a)
            | Self::Ln(a)
            | Self::Sin(a)
            | Self::Cos(a)
            | Self::Tan(a) => vec![a.as_ref()],
        }
    }
}

impl<T: Real> Expression<T> for Expr {
    fn evaluate(&self, x: T, context: &EvaluationContext) -> T {
        let eval = |e: &Expr| <Expr as Expression<T>>::evaluate(e, x, context);
        match self {
            Self::X => x,
            Self::Const(value) => T::constant(*value),
            Self::Add(a, b) => eval(a) + eval(b),
            Self::Sub(a, b) => eval(a) - eval(b),
            Self::Mul(factors) => factors.iter().fold(T::one(), |product, e| product * eval(e)),
            Self::Div(a, b) => eval(a) / eval(b),
            Self::Pow(a, b) => eval(a).powf(eval(b)),
            Self::Sqrt(a) => eval(a).sqrt(),
            Self::Abs(a) => eval(a).abs(),
            Self::Neg(a) => -eval(a),
            Self::Sinh(a) => eval(a).sinh(),
            Self::Ln(a) => eval(a).ln(),
            Self::Sin(a) => eval(a).sin(),
            Self::Cos(a) => eval(a).cos(),
            Self::Tan(a) => eval(a).tan(),
        }
    }

    fn shape(&self) -> Shape {
        match self {
            Self::Mul(_) => Shape::Product,
            Self::Div(..) => Shape::Quotient,
            Self::Pow(..) => Shape::Power,
            Self::Sqrt(_) => Shape::SquareRoot,
            Self::Abs(_) => Shape::AbsoluteValue,
            Self::Neg(_) => Shape::Opposite,
            Self::Sinh(_) => Shape::HyperbolicSine,
            _ => Shape::Other,
        }
    }

    fn child_count(&self) -> usize {
        self.children().len()
    }

    fn child(&self, index: usize) -> Option<&dyn Expression<T>> {
        self.children()
            .get(index)
            .map(|&e| e as &dyn Expression<T>)
    }

    fn is_null(&self, _context: &EvaluationContext) -> Option<bool> {
        match self {
            Self::Const(value) => Some(*value == 0.0),
            _ => None,
        }
    }
}
