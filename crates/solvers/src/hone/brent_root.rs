use graphscan_core::{Coordinate2D, Real};

use super::Tolerance;

/// Finds the sign change of `f` in `[a, b]` with Brent's method.
///
/// Returns an undefined point if the ends do not have strictly opposite
/// signs, or if the converged ordinate is larger than both end ordinates:
/// a sign change across a pole narrows onto the pole, not onto a root.
pub(crate) fn brent_root<T, F>(f: &F, a: T, b: T, tolerance: Tolerance<T>) -> Coordinate2D<T>
where
    T: Real,
    F: Fn(T) -> T,
{
    let zero = T::zero();
    let two = T::constant(2.0);
    let half = T::constant(0.5);

    let (mut a, mut b) = (a, b);
    let (mut fa, mut fb) = (f(a), f(b));
    if fa == zero {
        return Coordinate2D::new(a, zero);
    }
    if fb == zero {
        return Coordinate2D::new(b, zero);
    }
    if !((fa < zero && zero < fb) || (fb < zero && zero < fa)) {
        return Coordinate2D::undefined();
    }
    let bound = fa.abs().min(fb.abs());

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..tolerance.max_iters {
        if (fb > zero) == (fc > zero) {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = two * T::RELATIVE_PRECISION * b.abs() + half * tolerance.precision;
        let m = half * (c - b);
        if m.abs() <= tol || fb == zero {
            break;
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            // Secant or inverse quadratic interpolation.
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (two * m * s, T::one() - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (two * m * q * (q - r) - (b - a) * (r - T::one())),
                    (q - T::one()) * (r - T::one()) * (s - T::one()),
                )
            };
            if p > zero {
                q = -q;
            } else {
                p = -p;
            }
            let three = T::constant(3.0);
            if two * p < (three * m * q - (tol * q).abs()).min((e * q).abs()) {
                e = d;
                d = p / q;
            } else {
                d = m;
                e = m;
            }
        } else {
            d = m;
            e = m;
        }

        a = b;
        fa = fb;
        b = if d.abs() > tol {
            b + d
        } else if m > zero {
            b + tol
        } else {
            b - tol
        };
        fb = f(b);
    }

    if fb.abs() <= bound {
        Coordinate2D::new(b, fb)
    } else {
        Coordinate2D::undefined()
    }
}
