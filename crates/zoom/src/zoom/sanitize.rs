use graphscan_core::{Coordinate2D, Range1D, Range2D};

use super::Zoom;

/// Makes `range` valid and non-empty.
///
/// An empty range is widened around its value: to `ratio` times the length
/// of `other` if that is known, to the default half length otherwise.
fn sanitize_axis(range: Range1D, other: Range1D, ratio: f32) -> Range1D {
    let range = if range.is_valid() { range } else { Range1D::new(0.0, 0.0) };
    if !range.is_empty() {
        return range;
    }
    let c = range.min();
    let other_length = if other.is_valid() { other.length() } else { 0.0 };
    let d = if other_length == 0.0 {
        Range1D::DEFAULT_HALF_LENGTH
    } else {
        ratio * 0.5 * other_length
    };
    Range1D::new(c - d, c + d)
}

impl Zoom {
    /// The interesting range, or the forced axes, made valid and non-empty.
    pub(super) fn sanitized_range(&self) -> Range2D {
        let x = if self.forced_range.x().is_valid() {
            self.forced_range.x()
        } else {
            sanitize_axis(
                self.interesting_range.x(),
                self.interesting_range.y(),
                1.0 / self.normal_ratio,
            )
        };
        let y = if self.forced_range.y().is_valid() {
            self.forced_range.y()
        } else {
            sanitize_axis(self.interesting_range.y(), x, self.normal_ratio)
        };
        Range2D::new(x, y)
    }

    /// The sanitized range grown by the magnitude range, with at most one
    /// axis normalized.
    ///
    /// An axis is normalized only if the interesting range fits in its
    /// normalized length and the curve still covers a minimal share of it.
    /// When both axes qualify, the one that grows is chosen.
    pub(super) fn pretty_range(&self, force_normalization: bool) -> Range2D {
        let mut sane = self.sanitized_range();
        let magnitude = self.magnitude_range;
        sane.extend(
            Coordinate2D::new(magnitude.x_min(), magnitude.y_min()),
            self.max_float,
        );
        sane.extend(
            Coordinate2D::new(magnitude.x_max(), magnitude.y_max()),
            self.max_float,
        );

        let x_length = sane.x().length();
        let y_length = sane.y().length();
        let x_normal = y_length / self.normal_ratio;
        let y_normal = x_length * self.normal_ratio;
        let coverage = self.config.minimal_coverage();

        let x_compatible =
            x_normal * coverage <= x_length && self.interesting_range.x().length() <= x_normal;
        let y_compatible =
            y_normal * coverage <= y_length && self.interesting_range.y().length() <= y_normal;

        let mut normalize_x = !self.forced_range.x().is_valid() && (force_normalization || x_compatible);
        let mut normalize_y = !self.forced_range.y().is_valid() && (force_normalization || y_compatible);
        if normalize_x && normalize_y {
            normalize_x = x_length < x_normal;
            normalize_y = y_length < y_normal;
        }

        if normalize_x {
            *sane.x_mut() = normalize_axis(sane.x(), self.interesting_range.x(), x_normal);
        } else if normalize_y {
            *sane.y_mut() = normalize_axis(sane.y(), self.interesting_range.y(), y_normal);
        }
        sane
    }
}

/// Resizes `axis` to `length` around its center, shifted to keep the
/// interesting range inside when possible.
fn normalize_axis(axis: Range1D, interesting: Range1D, length: f32) -> Range1D {
    let c = axis.center();
    let d = 0.5 * length;
    if c - d > interesting.min() {
        Range1D::new(interesting.min(), interesting.min() + length)
    } else if c + d < interesting.max() {
        Range1D::new(interesting.max() - length, interesting.max())
    } else {
        Range1D::new(c - d, c + d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn unset_axis_gets_default_half_length() {
        let axis = sanitize_axis(Range1D::default(), Range1D::default(), 2.0);
        assert_eq!(axis, Range1D::new(-10.0, 10.0));
    }

    #[test]
    fn empty_axis_follows_the_other_axis() {
        let axis = sanitize_axis(Range1D::new(3.0, 3.0), Range1D::new(0.0, 4.0), 0.5);
        assert_relative_eq!(axis.min(), 2.0);
        assert_relative_eq!(axis.max(), 4.0);
    }

    #[test]
    fn non_empty_axis_is_kept() {
        let axis = Range1D::new(-1.0, 2.0);
        assert_eq!(sanitize_axis(axis, Range1D::default(), 1.0), axis);
    }

    #[test]
    fn normalized_axis_keeps_interesting_range_inside() {
        let axis = normalize_axis(Range1D::new(0.0, 10.0), Range1D::new(0.0, 10.0), 12.0);
        assert_eq!(axis, Range1D::new(-1.0, 11.0));

        let axis = normalize_axis(Range1D::new(0.0, 10.0), Range1D::new(2.0, 3.0), 4.0);
        assert_eq!(axis, Range1D::new(2.0, 6.0));

        let axis = normalize_axis(Range1D::new(0.0, 10.0), Range1D::new(8.0, 9.0), 4.0);
        assert_eq!(axis, Range1D::new(5.0, 9.0));
    }
}
