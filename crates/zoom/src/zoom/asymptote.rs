use graphscan_core::Coordinate2D;

/// Tracks where a curve flattens into a horizontal asymptote, on each side
/// of a center abscissa.
///
/// Each side is in one of three states:
/// - infinite abscissa: no steep slope seen yet;
/// - undefined: the last slope was steep, the next flat one starts a
///   candidate;
/// - finite: a candidate, dropped if a steep slope follows.
///
/// The hysteresis around the threshold keeps curves whose slope hovers at
/// the threshold (e.g. `y = 0.2x`) from toggling between states.
#[derive(Debug, Clone, Copy)]
pub(super) struct HorizontalAsymptotes {
    center: f32,
    threshold: f32,
    hysteresis: f32,
    left: Coordinate2D<f32>,
    right: Coordinate2D<f32>,
}

impl HorizontalAsymptotes {
    pub(super) fn new(center: f32, threshold: f32, hysteresis: f32) -> Self {
        Self {
            center,
            threshold,
            hysteresis,
            left: Coordinate2D::new(f32::NEG_INFINITY, f32::NAN),
            right: Coordinate2D::new(f32::INFINITY, f32::NAN),
        }
    }

    /// Records the slope of the curve at `p`.
    pub(super) fn update(&mut self, p: Coordinate2D<f32>, slope: f32) {
        let bound = if p.x() < self.center {
            &mut self.left
        } else {
            &mut self.right
        };
        let slope = slope.abs();
        if bound.x().is_nan() {
            if slope < self.threshold - self.hysteresis {
                *bound = p;
            }
        } else if slope > self.threshold + self.hysteresis {
            *bound = Coordinate2D::undefined();
        }
    }

    pub(super) fn left(&self) -> Coordinate2D<f32> {
        candidate(self.left)
    }

    pub(super) fn right(&self) -> Coordinate2D<f32> {
        candidate(self.right)
    }
}

fn candidate(p: Coordinate2D<f32>) -> Coordinate2D<f32> {
    if p.x().is_finite() {
        p
    } else {
        Coordinate2D::undefined()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> HorizontalAsymptotes {
        HorizontalAsymptotes::new(0.0, 0.2, 0.01)
    }

    #[test]
    fn flat_curve_has_no_asymptote() {
        let mut asymptotes = helper();
        for x in [1.0, 2.0, 3.0] {
            asymptotes.update(Coordinate2D::new(x, 5.0), 0.0);
        }
        assert!(!asymptotes.right().is_defined());
    }

    #[test]
    fn flattening_after_a_steep_slope_is_a_candidate() {
        let mut asymptotes = helper();
        asymptotes.update(Coordinate2D::new(-1.0, 0.0), -3.0);
        asymptotes.update(Coordinate2D::new(-2.0, 1.0), 0.1);
        asymptotes.update(Coordinate2D::new(-3.0, 1.1), 0.05);

        assert_eq!(asymptotes.left(), Coordinate2D::new(-2.0, 1.0));
        assert!(!asymptotes.right().is_defined());
    }

    #[test]
    fn steep_slope_drops_the_candidate() {
        let mut asymptotes = helper();
        asymptotes.update(Coordinate2D::new(1.0, 0.0), 1.0);
        asymptotes.update(Coordinate2D::new(2.0, 1.0), 0.1);
        asymptotes.update(Coordinate2D::new(3.0, 1.5), 0.5);

        assert!(!asymptotes.right().is_defined());
    }

    #[test]
    fn hysteresis_ignores_slopes_near_the_threshold() {
        let mut asymptotes = helper();
        asymptotes.update(Coordinate2D::new(1.0, 0.0), 1.0);
        asymptotes.update(Coordinate2D::new(2.0, 1.0), 0.195);
        assert!(!asymptotes.right().is_defined());

        asymptotes.update(Coordinate2D::new(3.0, 1.1), 0.1);
        asymptotes.update(Coordinate2D::new(4.0, 1.2), 0.205);
        assert_eq!(asymptotes.right(), Coordinate2D::new(3.0, 1.1));
    }
}
