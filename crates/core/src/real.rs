use std::fmt::Debug;

use num_traits::Float;

/// A floating-point precision the solvers can run in.
///
/// Implemented for `f32` and `f64`. The associated constants tune the
/// sampling density and honing precision to what each type can represent.
pub trait Real: Float + Debug + Default + Send + Sync + 'static {
    /// Machine epsilon: the relative spacing of representable values.
    const RELATIVE_PRECISION: Self;

    /// Smallest step the scanner takes, and the grid results are snapped to.
    const MINIMAL_STEP: Self;

    /// Absolute precision requested from the honing routines.
    const ABSOLUTE_PRECISION: Self;

    /// Whether brackets around undefined regions are bisected before testing.
    ///
    /// Single precision skips this refinement to stay fast.
    const EXCLUDE_DISCONTINUITIES: bool;

    /// Converts an `f64` literal to this precision.
    fn constant(value: f64) -> Self;

    /// Ordinates below this magnitude at abscissa `x` are treated as zero.
    #[must_use]
    fn null_tolerance(x: Self) -> Self {
        Self::RELATIVE_PRECISION.sqrt() * x.abs().max(Self::one())
    }

    /// Smallest meaningful step away from `x`.
    #[must_use]
    fn minimal_step(x: Self) -> Self {
        Self::MINIMAL_STEP.max(x.abs() * Self::RELATIVE_PRECISION)
    }
}

impl Real for f32 {
    const RELATIVE_PRECISION: Self = f32::EPSILON;
    const MINIMAL_STEP: Self = 1e-5;
    const ABSOLUTE_PRECISION: Self = 1e-6;
    const EXCLUDE_DISCONTINUITIES: bool = false;

    #[allow(clippy::cast_possible_truncation)]
    fn constant(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    const RELATIVE_PRECISION: Self = f64::EPSILON;
    const MINIMAL_STEP: Self = 1e-6;
    const ABSOLUTE_PRECISION: Self = 1e-10;
    const EXCLUDE_DISCONTINUITIES: bool = true;

    fn constant(value: f64) -> Self {
        value
    }
}
