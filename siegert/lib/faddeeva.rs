//! The Faddeeva function `w(z) = exp(-z²) erfc(-iz)` and the Moshinsky time
//! factor of the Mittag-Leffler expansion.
//!
//! `w` is evaluated with Weideman's rational approximation[^1] in the upper
//! half plane and continued to the lower half plane with the reflection
//! formula `w(z) = 2 exp(-z²) - w(-z)`.
//!
//! ```
//! use siegert::{ C64, faddeeva::w };
//!
//! let w1 = w(C64::new(1.0, 0.0));
//! assert!((w1 - C64::new(0.36787944117144233, 0.6071577058413937)).norm() < 1e-9);
//! ```
//!
//! [^1]: J. A. C. Weideman, "Computation of the complex error function." SIAM
//! J. Numer. Anal. **31** 5 (1994).

use std::{ f64::consts::{ FRAC_PI_4, PI }, sync::OnceLock };
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::utils::fft;

// number of terms in the rational approximation
const N_TERMS: usize = 32;

#[derive(Clone, Debug)]
struct Weideman {
    // scale parameter of the Möbius map
    L: f64,
    // polynomial coefficients, lowest degree first
    a: Vec<f64>,
}

impl Weideman {
    fn new(n: usize) -> Self {
        let m = 2 * n;
        let m2 = 2 * m;
        let L = (n as f64 / 2.0_f64.sqrt()).sqrt();
        // samples of exp(-t²)(L² + t²) on t = L tan(θ/2), θ = kπ/m, already
        // rotated so that k = 0 is the first element; the k = -m sample is 0
        let f: nd::Array1<C64>
            = (0..m2)
            .map(|j| {
                let k: isize = if j < m { j as isize } else { j as isize - m2 as isize };
                if k == -(m as isize) {
                    C64::from(0.0)
                } else {
                    let theta = k as f64 * PI / m as f64;
                    let t = L * (theta / 2.0).tan();
                    C64::from((-t * t).exp() * (L * L + t * t))
                }
            })
            .collect();
        let coeffs = fft(&f);
        let a: Vec<f64>
            = coeffs.iter().skip(1).take(n)
            .map(|ck| ck.re / m2 as f64)
            .collect();
        Self { L, a }
    }

    // valid for Im z >= 0
    fn eval(&self, z: C64) -> C64 {
        let iz = C64::i() * z;
        let denom = self.L - iz;
        let Z = (self.L + iz) / denom;
        let p = self.a.iter().rev()
            .fold(C64::from(0.0), |acc, &ak| acc * Z + ak);
        2.0 * p / (denom * denom) + 1.0 / (PI.sqrt() * denom)
    }
}

fn weideman() -> &'static Weideman {
    static COEFFS: OnceLock<Weideman> = OnceLock::new();
    COEFFS.get_or_init(|| Weideman::new(N_TERMS))
}

/// Evaluate the Faddeeva function `w(z) = exp(-z²) erfc(-iz)`.
pub fn w(z: C64) -> C64 {
    let rat = weideman();
    if z.im >= 0.0 {
        rat.eval(z)
    } else {
        2.0 * (-z * z).exp() - rat.eval(-z)
    }
}

/// Evaluate the complementary error function via [`w`].
///
/// `erfc(z) = exp(-z²) w(iz)`.
pub fn erfc(z: C64) -> C64 {
    (-z * z).exp() * w(C64::i() * z)
}

/// Evaluate the Moshinsky time factor of the Mittag-Leffler expansion for a
/// Siegert state of wavenumber `k` at time `t ≥ 0`:
/// ```text
/// M(k, t) = ½ w(-exp(iπ/4) k √t)
/// ```
/// which is `½` at `t = 0` and tends to `exp(-i k² t)` at long times for bound
/// and resonant states; antibound and antiresonant contributions decay
/// algebraically.
pub fn moshinsky(k: C64, t: f64) -> C64 {
    let z = -C64::from_polar(1.0, FRAC_PI_4) * k * t.max(0.0).sqrt();
    0.5 * w(z)
}
