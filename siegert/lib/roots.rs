//! Root-finding routines for real functions of a real variable (bracketing
//! search) and analytic functions of a complex variable (secant search).
//!
//! ```
//! use siegert::roots::find_real_roots;
//!
//! let f = |x: f64| (x + 3.0) * (x - 0.5) * (x - 2.0);
//! let zeros = find_real_roots(f, -5.0, 5.0, 0.01, 1e-12, 1000).unwrap();
//! assert!(
//!     [-3.0, 0.5, 2.0].into_iter()
//!         .zip(zeros)
//!         .all(|(expected, computed)| (computed - expected).abs() < 1e-10)
//! )
//! ```

use num_complex::Complex64 as C64;
use crate::error::RootError;

pub type RootResult<T> = Result<T, RootError>;

#[derive(Copy, Clone, Debug)]
struct Bounds<T>(T, T);

impl Bounds<f64> {
    fn midpoint(self) -> f64 { (self.0 + self.1) / 2.0 }

    fn diff(self) -> f64 { self.1 - self.0 }
}

impl<T> Bounds<T> {
    fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Bounds<U> {
        (f(self.0), f(self.1)).into()
    }
}

impl<T: PartialOrd> Bounds<T> {
    fn from_ord(xx: (T, T)) -> Self {
        if xx.0 > xx.1 { Self(xx.1, xx.0) } else { Self(xx.0, xx.1) }
    }
}

impl<T> From<(T, T)> for Bounds<T> {
    fn from(xx: (T, T)) -> Self { Self(xx.0, xx.1) }
}

/// Sample `f` on a uniform grid of step `step` over `[a, b]` and return every
/// sub-interval over which `f` changes sign.
///
/// Grid points at which `f` vanishes exactly are returned as degenerate
/// intervals `(x, x)`. Pairs of roots closer together than `step` may be
/// missed.
pub fn scan_sign_changes<F>(mut f: F, a: f64, b: f64, step: f64)
    -> RootResult<Vec<(f64, f64)>>
where F: FnMut(f64) -> f64
{
    RootError::check_step(step)?;
    let xb = Bounds::from_ord((a, b));
    let n = (xb.diff() / step).ceil().max(1.0) as usize;
    let dx = xb.diff() / n as f64;
    let samples: Vec<(f64, f64)>
        = (0..=n)
        .map(|i| {
            let x = if i == n { xb.1 } else { xb.0 + i as f64 * dx };
            (x, f(x))
        })
        .collect();
    let brackets: Vec<(f64, f64)>
        = samples.iter().zip(samples.iter().skip(1))
        .filter_map(|(&(xl, fl), &(xr, fr))| {
            if fl == 0.0 {
                Some((xl, xl))
            } else if fl * fr < 0.0 {
                Some((xl, xr))
            } else {
                None
            }
        })
        .collect();
    let mut brackets = brackets;
    if let Some(&(xn, fnn)) = samples.last() {
        if fnn == 0.0 { brackets.push((xn, xn)); }
    }
    Ok(brackets)
}

/// Refine a root of `f` within a bracketing interval, using secant steps where
/// they stay inside the bracket and bisection otherwise.
///
/// Iterates until the bracket is narrower than `epsilon` (relative to the
/// magnitude of the root, or absolutely below 1), limited to `maxiters`
/// iterations. Returns [`RootError::BadBracket`] if `f` does not change sign
/// over the interval.
pub fn solve_bracket<F>(
    mut f: F,
    bounds: (f64, f64),
    epsilon: f64,
    maxiters: usize,
) -> RootResult<f64>
where F: FnMut(f64) -> f64
{
    RootError::check_epsilon(epsilon)?;
    RootError::check_maxiters(maxiters)?;

    let mut xb = Bounds::from_ord(bounds);
    if xb.0 == xb.1 { return Ok(xb.0); }
    let mut fb = xb.map(&mut f);
    if fb.0 == 0.0 { return Ok(xb.0); }
    if fb.1 == 0.0 { return Ok(xb.1); }
    if fb.0 * fb.1 > 0.0 { return Err(RootError::BadBracket(xb.0, xb.1)); }

    let mut x: f64 = xb.midpoint();
    let mut fx: f64;
    for _ in 0..maxiters {
        let xs = xb.1 - fb.1 * xb.diff() / (fb.1 - fb.0);
        x = if xs > xb.0 && xs < xb.1 { xs } else { xb.midpoint() };
        let width = xb.diff();
        fx = f(x);
        if fx == 0.0 { return Ok(x); }
        if fx * fb.0 < 0.0 {
            xb.1 = x;
            fb.1 = fx;
        } else {
            xb.0 = x;
            fb.0 = fx;
        }
        // secant steps stuck on one side: force a bisection
        if xb.diff() > 0.5 * width {
            let xm = xb.midpoint();
            let fm = f(xm);
            if fm == 0.0 { return Ok(xm); }
            if fm * fb.0 < 0.0 {
                xb.1 = xm;
                fb.1 = fm;
            } else {
                xb.0 = xm;
                fb.0 = fm;
            }
        }
        if xb.diff() < epsilon * x.abs().max(1.0) {
            return Ok(if fb.0.abs() < fb.1.abs() { xb.0 } else { xb.1 });
        }
    }
    println!("roots::solve_bracket: WARNING: bracket refinement reached maxiters");
    Ok(x)
}

/// Find all roots of `f` on `[a, b]` by [scanning][scan_sign_changes] with a
/// given step and [refining][solve_bracket] each bracket.
pub fn find_real_roots<F>(
    mut f: F,
    a: f64,
    b: f64,
    step: f64,
    epsilon: f64,
    maxiters: usize,
) -> RootResult<Vec<f64>>
where F: FnMut(f64) -> f64
{
    scan_sign_changes(&mut f, a, b, step)?
        .into_iter()
        .map(|br| solve_bracket(&mut f, br, epsilon, maxiters))
        .collect()
}

/// Find a zero of an analytic function `f` in the complex plane with the
/// secant method, starting from `z0`.
///
/// The second starting point is `z0` displaced by a small relative step.
/// Iterates until successive iterates differ by less than `epsilon` (relative
/// to the magnitude of the root, or absolutely below 1); returns
/// [`RootError::NoConvergence`] if this does not happen within `maxiters`
/// iterations or the iteration leaves the finite plane.
pub fn secant_complex<F>(
    mut f: F,
    z0: C64,
    epsilon: f64,
    maxiters: usize,
) -> RootResult<C64>
where F: FnMut(C64) -> C64
{
    RootError::check_epsilon(epsilon)?;
    RootError::check_maxiters(maxiters)?;

    let fail = RootError::NoConvergence { re: z0.re, im: z0.im };
    let mut zprev: C64 = z0;
    let mut fprev: C64 = f(zprev);
    let mut z: C64 = z0 + 1e-4 * C64::new(1.0, 1.0) * z0.norm().max(1.0);
    let mut fz: C64 = f(z);
    let mut znext: C64;
    for _ in 0..maxiters {
        if fz == C64::from(0.0) { return Ok(z); }
        let denom = fz - fprev;
        if denom == C64::from(0.0) {
            // flat secant: accept only if already at the root
            return if (z - zprev).norm() < epsilon * z.norm().max(1.0) {
                Ok(z)
            } else {
                Err(fail)
            };
        }
        znext = z - fz * (z - zprev) / denom;
        if !(znext.re.is_finite() && znext.im.is_finite()) { return Err(fail); }
        zprev = z;
        fprev = fz;
        z = znext;
        fz = f(z);
        if (z - zprev).norm() < epsilon * z.norm().max(1.0) { return Ok(z); }
    }
    Err(fail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_refinement_converges() {
        let root = solve_bracket(|x| x.cos() - x, (0.0, 1.0), 1e-14, 200).unwrap();
        assert!((root - 0.7390851332151607).abs() < 1e-12);
    }

    #[test]
    fn bad_bracket_rejected() {
        assert!(matches!(
            solve_bracket(|x| x * x + 1.0, (-1.0, 1.0), 1e-10, 100),
            Err(RootError::BadBracket(..))
        ));
    }

    #[test]
    fn bad_parameters_rejected() {
        assert!(matches!(
            solve_bracket(|x| x, (-1.0, 1.0), 0.0, 100),
            Err(RootError::BadEpsilon(..))
        ));
        assert!(matches!(
            secant_complex(|z| z, C64::from(1.0), 1e-10, 0),
            Err(RootError::BadMaxiters(0))
        ));
        assert!(matches!(
            scan_sign_changes(|x| x, -1.0, 1.0, -0.1),
            Err(RootError::BadStep(..))
        ));
    }

    #[test]
    fn scan_finds_all_sign_changes() {
        let br = scan_sign_changes(|x| x.sin(), 0.5, 10.0, 0.1).unwrap();
        assert_eq!(br.len(), 3);
    }

    #[test]
    fn complex_secant_finds_cube_roots() {
        let f = |z: C64| z * z * z - 1.0;
        let z = secant_complex(f, C64::new(-0.4, 0.9), 1e-14, 100).unwrap();
        assert!((z - C64::from_polar(1.0, 2.0 * std::f64::consts::PI / 3.0)).norm() < 1e-10);
    }

    #[test]
    fn complex_secant_reports_failure() {
        // exp has no zeros
        let res = secant_complex(|z: C64| z.exp(), C64::new(1.0, 1.0), 1e-12, 50);
        assert!(res.is_err());
    }
}
