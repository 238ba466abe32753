use num_traits::Float;

/// A point in the plane.
///
/// A NaN component means the point is undefined, which is how the solvers
/// report that nothing was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate2D<T> {
    x: T,
    y: T,
}

impl<T: Float> Coordinate2D<T> {
    /// Creates a point from its abscissa and ordinate.
    #[must_use]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The undefined point `(NaN, NaN)`.
    #[must_use]
    pub fn undefined() -> Self {
        Self::new(T::nan(), T::nan())
    }

    /// Returns the abscissa.
    #[must_use]
    pub fn x(&self) -> T {
        self.x
    }

    /// Returns the ordinate.
    #[must_use]
    pub fn y(&self) -> T {
        self.y
    }

    /// Returns a copy with a different ordinate.
    #[must_use]
    pub fn with_y(self, y: T) -> Self {
        Self::new(self.x, y)
    }

    /// Returns the point mirrored across the first diagonal.
    #[must_use]
    pub fn flipped(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Returns `true` if neither component is NaN.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }
}

impl<T: Float> Default for Coordinate2D<T> {
    fn default() -> Self {
        Self::undefined()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_undefined() {
        let p = Coordinate2D::<f64>::default();
        assert!(p.x().is_nan());
        assert!(p.y().is_nan());
        assert!(!p.is_defined());
    }

    #[test]
    fn a_single_nan_component_makes_the_point_undefined() {
        assert!(!Coordinate2D::new(1.0_f32, f32::NAN).is_defined());
        assert!(Coordinate2D::new(1.0_f32, -2.0).is_defined());
    }

    #[test]
    fn flipped_swaps_components() {
        let p = Coordinate2D::new(1.0, 2.0).flipped();
        assert_eq!(p, Coordinate2D::new(2.0, 1.0));
    }
}
