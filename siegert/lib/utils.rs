//! Miscellaneous tools.

use std::ops::Add;
use ndarray::{ self as nd, Ix1 };
use ndarray_linalg::Scalar;
use num_traits::{ One, Zero };
use rustfft as fft;
use num_complex::Complex64 as C64;

// below this magnitude, series expansions are used in place of the closed
// forms of the sinc-like functions
const SERIES_THRESH: f64 = 1e-3;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    (dx / two) * (y[0] + two * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the norm of a wavefunction sampled on a uniform grid.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A::Real) -> A::Real
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = q.len();
    let two = <A as Scalar>::Real::one() + <A as Scalar>::Real::one();
    (dx / two) * (
        q[0].square()
        + two * q.iter().skip(1).take(n - 2).map(|qk| qk.square())
            .fold(<A as Scalar>::Real::zero(), <A as Scalar>::Real::add)
        + q[n - 1].square()
    )
}

/// Calculate the (Hermitian) inner product of two wavefunctions sampled on the
/// same uniform grid.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A::Real,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = q.len().min(p.len());
    let two = A::one() + A::one();
    (A::from_real(dx) / two) * (
        q[0].conj() * p[0]
        + two * q.iter().zip(p).skip(1).take(n - 2)
            .fold(A::zero(), |acc, (qk, pk)| acc + qk.conj() * *pk)
        + q[n - 1].conj() * p[n - 1]
    )
}

/// `sin(z) / z`, continued to `1` at `z = 0`.
pub fn sinc(z: C64) -> C64 {
    if z.norm() < SERIES_THRESH {
        let z2 = z * z;
        1.0 - z2 / 6.0 + z2 * z2 / 120.0
    } else {
        z.sin() / z
    }
}

/// `(1 - sinc(z)) / z²`, continued to `1/6` at `z = 0`.
pub fn one_minus_sinc_over_sq(z: C64) -> C64 {
    if z.norm() < SERIES_THRESH {
        let z2 = z * z;
        1.0 / 6.0 - z2 / 120.0 + z2 * z2 / 5040.0
    } else {
        (1.0 - sinc(z)) / (z * z)
    }
}

/// Perform the one-dimensional, complex-valued FFT.
pub fn fft<S>(x: &nd::ArrayBase<S, Ix1>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let n: usize = x.len();
    let mut f: Vec<C64> = x.iter().copied().collect();
    let mut plan = fft::FftPlanner::new();
    let fft_plan = plan.plan_fft_forward(n);
    fft_plan.process(&mut f);
    nd::Array1::from_vec(f)
}

/// Return `true` if `a` and `b` agree to within `tol`, relative to the larger
/// of their magnitudes (or absolutely, if both are smaller than 1).
pub fn close(a: C64, b: C64, tol: f64) -> bool {
    (a - b).norm() <= tol * a.norm().max(b.norm()).max(1.0)
}
