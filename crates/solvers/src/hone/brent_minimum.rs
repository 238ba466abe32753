use graphscan_core::{Coordinate2D, Real};

use super::Tolerance;

/// Golden section fraction `(3 - √5) / 2`.
const CGOLD: f64 = 0.381_966_011_250_105_1;

/// Finds a local minimum of `f` in `[a, b]` with Brent's parabolic method.
///
/// The search starts from the golden point of the bracket and never leaves
/// it; undefined samples are treated as worse than any defined one.
pub(crate) fn brent_minimum<T, F>(f: &F, a: T, b: T, tolerance: Tolerance<T>) -> Coordinate2D<T>
where
    T: Real,
    F: Fn(T) -> T,
{
    let zero = T::zero();
    let half = T::constant(0.5);
    let two = T::constant(2.0);
    let cgold = T::constant(CGOLD);
    let sqrt_eps = T::RELATIVE_PRECISION.sqrt();

    let (mut a, mut b) = if a <= b { (a, b) } else { (b, a) };
    let mut x = a + cgold * (b - a);
    let mut fx = f(x);
    let (mut w, mut v) = (x, x);
    let (mut fw, mut fv) = (fx, fx);
    let mut d = zero;
    let mut e = zero;

    for _ in 0..tolerance.max_iters {
        let xm = half * (a + b);
        let tol1 = sqrt_eps * x.abs() + tolerance.precision;
        let tol2 = two * tol1;
        if (x - xm).abs() <= tol2 - half * (b - a) {
            break;
        }

        let mut parabolic = false;
        if e.abs() > tol1 {
            let r = (x - w) * (fx - fv);
            let q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * r;
            let mut q = two * (q - r);
            if q > zero {
                p = -p;
            }
            q = q.abs();
            let previous = e;
            e = d;
            if p.abs() < (half * q * previous).abs() && p > q * (a - x) && p < q * (b - x) {
                d = p / q;
                let u = x + d;
                if u - a < tol2 || b - u < tol2 {
                    d = signed(tol1, xm - x);
                }
                parabolic = true;
            }
        }
        if !parabolic {
            e = if x >= xm { a - x } else { b - x };
            d = cgold * e;
        }

        let u = if d.abs() >= tol1 {
            x + d
        } else {
            x + signed(tol1, d)
        };
        let fu = f(u);

        if fu <= fx {
            if u >= x {
                a = x;
            } else {
                b = x;
            }
            v = w;
            fv = fw;
            w = x;
            fw = fx;
            x = u;
            fx = fu;
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                v = w;
                fv = fw;
                w = u;
                fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        }
    }

    Coordinate2D::new(x, fx)
}

/// `|magnitude|` with the sign of `sign`.
fn signed<T: Real>(magnitude: T, sign: T) -> T {
    if sign >= T::zero() {
        magnitude.abs()
    } else {
        -magnitude.abs()
    }
}
