//! Intervals and rectangles in single precision.
//!
//! A default-constructed range is the "unset" sentinel: both bounds are NaN
//! and [`Range1D::is_valid`] returns `false`. Extending an unset range by a
//! value makes it the degenerate range `[value, value]`. Extension never
//! shrinks a range and clamps every bound to `±limit`.

use crate::Coordinate2D;

/// A closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range1D {
    min: f32,
    max: f32,
}

impl Default for Range1D {
    fn default() -> Self {
        Self {
            min: f32::NAN,
            max: f32::NAN,
        }
    }
}

impl Range1D {
    /// Half length of the range used when nothing else gives a scale.
    pub const DEFAULT_HALF_LENGTH: f32 = 10.0;

    /// Absolute floor of [`Range1D::minimal_length`].
    const MIN_LENGTH: f32 = 1e-5;

    /// Creates a range from two bounds, in either order.
    #[must_use]
    pub fn new(a: f32, b: f32) -> Self {
        if b < a {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Returns `false` for the unset sentinel.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.min.is_nan() && !self.max.is_nan()
    }

    /// Returns `true` if both bounds coincide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min == self.max
    }

    /// Returns `max - min`, or NaN for an unset range.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.max - self.min
    }

    /// Returns the midpoint, computed without overflowing.
    #[must_use]
    pub fn center(&self) -> f32 {
        0.5 * self.min + 0.5 * self.max
    }

    /// Smallest length a range centered on `center` is allowed to have once
    /// one of its bounds has been set explicitly.
    #[must_use]
    pub fn minimal_length(center: f32) -> f32 {
        Self::MIN_LENGTH.max(Self::MIN_LENGTH * center.abs())
    }

    /// Extends the range to include `t`, clamped to `±limit`.
    ///
    /// A NaN `t` leaves the range untouched.
    pub fn extend(&mut self, t: f32, limit: f32) {
        if t.is_nan() {
            return;
        }
        let t = clamp(t, limit);
        if self.min.is_nan() || t < self.min {
            self.min = t;
        }
        if self.max.is_nan() || t > self.max {
            self.max = t;
        }
    }

    /// Extends the range to include both bounds of `other`.
    pub fn extend_range(&mut self, other: &Range1D, limit: f32) {
        self.extend(other.min, limit);
        self.extend(other.max, limit);
    }

    /// Sets the lower bound, clamped to `±limit`.
    ///
    /// If the range becomes shorter than its minimal length, the upper bound
    /// is pushed away (or, at the limit, the lower bound is pulled back).
    pub fn set_min(&mut self, t: f32, limit: f32) {
        self.min = clamp(t, limit);
        self.ensure_minimal_length(limit, Bound::Min);
    }

    /// Sets the upper bound, clamped to `±limit`.
    ///
    /// Mirror image of [`Range1D::set_min`].
    pub fn set_max(&mut self, t: f32, limit: f32) {
        self.max = clamp(t, limit);
        self.ensure_minimal_length(limit, Bound::Max);
    }

    fn ensure_minimal_length(&mut self, limit: f32, kept: Bound) {
        if !self.is_valid() {
            return;
        }
        let needed = Self::minimal_length(self.center());
        if self.max - self.min >= needed {
            return;
        }
        match kept {
            Bound::Min => {
                self.max = self.min + needed;
                if self.max > limit {
                    self.max = limit;
                    self.min = limit - needed;
                }
            }
            Bound::Max => {
                self.min = self.max - needed;
                if self.min < -limit {
                    self.min = -limit;
                    self.max = -limit + needed;
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
enum Bound {
    Min,
    Max,
}

fn clamp(t: f32, limit: f32) -> f32 {
    t.max(-limit).min(limit)
}

/// A rectangle made of an X range and a Y range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Range2D {
    x: Range1D,
    y: Range1D,
}

impl Range2D {
    /// Creates a rectangle from its two axes.
    #[must_use]
    pub fn new(x: Range1D, y: Range1D) -> Self {
        Self { x, y }
    }

    /// Returns the X axis.
    #[must_use]
    pub fn x(&self) -> Range1D {
        self.x
    }

    /// Returns the Y axis.
    #[must_use]
    pub fn y(&self) -> Range1D {
        self.y
    }

    /// Returns a mutable reference to the X axis.
    pub fn x_mut(&mut self) -> &mut Range1D {
        &mut self.x
    }

    /// Returns a mutable reference to the Y axis.
    pub fn y_mut(&mut self) -> &mut Range1D {
        &mut self.y
    }

    #[must_use]
    pub fn x_min(&self) -> f32 {
        self.x.min
    }

    #[must_use]
    pub fn x_max(&self) -> f32 {
        self.x.max
    }

    #[must_use]
    pub fn y_min(&self) -> f32 {
        self.y.min
    }

    #[must_use]
    pub fn y_max(&self) -> f32 {
        self.y.max
    }

    /// Returns `true` if both axes are set.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }

    /// Extends each axis by the matching component of `p`.
    ///
    /// Components are handled independently: a point with a NaN ordinate
    /// still extends the X axis.
    pub fn extend(&mut self, p: Coordinate2D<f32>, limit: f32) {
        self.x.extend(p.x(), limit);
        self.y.extend(p.y(), limit);
    }

    /// Extends each axis by the matching axis of `other`.
    pub fn extend_range(&mut self, other: &Range2D, limit: f32) {
        self.x.extend_range(&other.x, limit);
        self.y.extend_range(&other.y, limit);
    }
}
