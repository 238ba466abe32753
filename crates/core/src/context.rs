/// How complex results are presented by the evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ComplexFormat {
    /// Non-real results evaluate to NaN.
    #[default]
    Real,
    Cartesian,
    Polar,
}

/// Unit used by trigonometric functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    #[default]
    Radian,
    Degree,
    Gradian,
}

/// Settings an evaluator needs to compute a value.
///
/// The solvers never inspect this value: they receive it once and hand it to
/// every evaluation they perform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EvaluationContext {
    pub complex_format: ComplexFormat,
    pub angle_unit: AngleUnit,
}

impl EvaluationContext {
    /// Creates a context from explicit settings.
    #[must_use]
    pub fn new(complex_format: ComplexFormat, angle_unit: AngleUnit) -> Self {
        Self {
            complex_format,
            angle_unit,
        }
    }
}
