//! Eigenstates of the square well: Siegert states (bound, antibound, resonant,
//! antiresonant) and continuum (scattering) states.
//!
//! Siegert states are normalized with the regularized norm
//! ```text
//! ∫_{-l/2}^{l/2} u(x)² dx + i u(l/2)² / k = 1
//! ```
//! which involves no complex conjugation and reduces to the usual norm for
//! bound states. Continuum states are normalized to δ(k - k') and are real for
//! real `k`; at complex `k` (on a Berggren contour) they are the analytic
//! continuation of the same expressions.
//!
//! Scalar products against [test functions][crate::testfn] come in two
//! flavors:
//! - the c-product `(u|g⟩ = ∫ u(x) g(x) dx`, and
//! - the bra `⟨g|u) = ∫ g*(x) u(x) dx`.
//!
//! Both are integrated over the effective support of the test function with
//! composite Gauss-Legendre quadrature, split at the well edges.

use std::{ cmp, f64::consts::PI };
use ndarray as nd;
use num_complex::{ Complex64 as C64, ComplexFloat };
use serde::{ Deserialize, Serialize };
use crate::{
    Arr1,
    error::LengthError,
    potential::SWPotential,
    quadrature::GaussLegendre,
    testfn::TestFunction,
    utils::{ one_minus_sinc_over_sq, sinc, wf_dot, wf_norm },
};

/// Relative tolerance on `Re k` below which a Siegert state is considered to
/// lie on the imaginary axis.
pub const AXIS_TOL: f64 = 1e-9;

/// Parity of a state under `x → -x`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Both parities, even first.
    pub const BOTH: [Parity; 2] = [Parity::Even, Parity::Odd];

    /// Return `true` if `self` is `Even`.
    pub fn is_even(&self) -> bool { matches!(self, Self::Even) }

    /// Return `true` if `self` is `Odd`.
    pub fn is_odd(&self) -> bool { matches!(self, Self::Odd) }

    // sign(x) for odd states, 1 for even states
    fn reflect(&self, x: f64) -> f64 {
        match self {
            Self::Even => 1.0,
            Self::Odd => if x < 0.0 { -1.0 } else { 1.0 },
        }
    }
}

/// Classification of an eigenstate by the location of its wavenumber.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// `k` on the positive imaginary axis.
    Bound,
    /// `k` on the negative imaginary axis.
    Antibound,
    /// `Re k > 0`, `Im k < 0`.
    Resonant,
    /// `Re k < 0`, `Im k < 0`.
    Antiresonant,
    /// Scattering state on the real axis or a Berggren contour.
    Continuum,
}

impl Kind {
    /// Classify a Siegert wavenumber.
    pub fn classify(k: C64) -> Self {
        if k.re.abs() <= AXIS_TOL * k.norm().max(1.0) {
            if k.im > 0.0 { Self::Bound } else { Self::Antibound }
        } else if k.re > 0.0 {
            Self::Resonant
        } else {
            Self::Antiresonant
        }
    }

    /// Return `true` for any of the four Siegert kinds.
    pub fn is_siegert(&self) -> bool { !matches!(self, Self::Continuum) }
}

/// Where a continuum state was sampled, which decides the expansion it
/// belongs to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampling {
    /// Uniform grid on the real axis (exact expansion).
    #[default]
    Grid,
    /// Nodes along a Berggren contour (Berggren expansion).
    Contour,
}

// piecewise integration of `f` against a test function over its effective
// support, split at the well edges and the test function's breakpoints
fn integrate_against<T, F>(
    potential: &SWPotential,
    test: &T,
    gl: &GaussLegendre,
    kscale: f64,
    mut f: F,
) -> C64
where
    T: TestFunction + ?Sized,
    F: FnMut(f64) -> C64,
{
    let (a, b) = test.support();
    let (el, er) = potential.edges();
    let mut cuts: Vec<f64> = vec![a, b];
    cuts.extend(
        [el, er].into_iter()
            .chain(test.breakpoints())
            .filter(|c| *c > a && *c < b)
    );
    cuts.sort_by(|l, r| l.partial_cmp(r).unwrap_or(cmp::Ordering::Equal));
    cuts.dedup();
    let kmax = kscale + test.scale();
    cuts.iter().zip(cuts.iter().skip(1))
        .map(|(&xl, &xr)| {
            let panels = ((xr - xl) * kmax / PI).ceil() as usize + 1;
            gl.integrate(&mut f, xl, xr, panels)
        })
        .sum()
}

/// A Siegert state of the square well.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SiegertState {
    potential: SWPotential,
    parity: Parity,
    k: C64,
    // inner wavenumber
    q: C64,
    // regularized normalization factor
    N: C64,
}

impl SiegertState {
    /// Build the normalized state of a given parity at wavenumber `k`.
    ///
    /// `k` is assumed to be a zero of the potential's
    /// [matching function][SWPotential::matching]; no check is performed.
    pub fn new(potential: SWPotential, parity: Parity, k: C64) -> Self {
        let h = potential.width() / 2.0;
        let q = potential.inner_wavenumber(k);
        let inner = match parity {
            Parity::Even => h * (1.0 + sinc(2.0 * q * h)),
            Parity::Odd => 4.0 * h.powi(3) * one_minus_sinc_over_sq(2.0 * q * h),
        };
        let fh = Self::inner_unnormalized(parity, q, h);
        let N = (inner + C64::i() * fh * fh / k).sqrt().recip();
        Self { potential, parity, k, q, N }
    }

    // interior solution without normalization: cos(qx) or sin(qx)/q
    fn inner_unnormalized(parity: Parity, q: C64, x: f64) -> C64 {
        match parity {
            Parity::Even => (q * x).cos(),
            Parity::Odd => x * sinc(q * x),
        }
    }

    /// Get the associated potential.
    pub fn potential(&self) -> &SWPotential { &self.potential }

    /// Get the parity.
    pub fn parity(&self) -> Parity { self.parity }

    /// Get the wavenumber.
    pub fn k(&self) -> C64 { self.k }

    /// Get the energy `E = k²`.
    pub fn energy(&self) -> C64 { self.k * self.k }

    /// Get the resonance width `Γ = -2 Im E` (zero for bound and antibound
    /// states).
    pub fn width(&self) -> f64 {
        match self.kind() {
            Kind::Bound | Kind::Antibound => 0.0,
            _ => -2.0 * self.energy().im,
        }
    }

    /// Classify the state.
    pub fn kind(&self) -> Kind { Kind::classify(self.k) }

    /// Get the regularized normalization factor.
    pub fn norm_factor(&self) -> C64 { self.N }

    /// Evaluate the matching-condition residual at the state's wavenumber.
    pub fn residual(&self) -> f64 {
        self.potential.matching(self.parity, self.k).norm()
    }

    /// Return the partner state at `-k*` (resonant ↔ antiresonant; bound and
    /// antibound states are their own partners).
    pub fn antipartner(&self) -> Self {
        Self::new(self.potential, self.parity, -self.k.conj())
    }

    /// Evaluate the state at a single point.
    pub fn value(&self, x: f64) -> C64 {
        let h = self.potential.width() / 2.0;
        if x.abs() <= h {
            self.N * Self::inner_unnormalized(self.parity, self.q, x)
        } else {
            let fh = Self::inner_unnormalized(self.parity, self.q, h);
            self.parity.reflect(x) * self.N * fh
                * (C64::i() * self.k * (x.abs() - h)).exp()
        }
    }

    /// Evaluate the state over an array of points.
    pub fn values<S>(&self, x: &Arr1<S>) -> nd::Array1<C64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| self.value(xk))
    }

    /// Compute the regularized norm numerically (should be 1).
    pub fn regularized_norm(&self, gl: &GaussLegendre) -> C64 {
        let h = self.potential.width() / 2.0;
        let panels = (2.0 * h * self.q.norm() / PI).ceil() as usize + 1;
        let inner = gl.integrate(|x| self.value(x).powi(2), -h, h, panels);
        inner + C64::i() * self.value(h).powi(2) / self.k
    }
}

/// A continuum (scattering) state of the square well, carrying its quadrature
/// weight `dk` on a wavenumber grid or contour.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContinuumState {
    potential: SWPotential,
    parity: Parity,
    k: C64,
    dk: C64,
    sampling: Sampling,
    q: C64,
    // outer solution coefficients: α cos(k(|x| - l/2)) + β sin(k(|x| - l/2))
    alpha: C64,
    beta: C64,
    // δ(k - k') normalization factor
    N: C64,
}

impl ContinuumState {
    /// Build the normalized continuum state of a given parity at wavenumber
    /// `k` (nonzero) with quadrature weight `dk`, sampled on a real-axis grid.
    pub fn new(potential: SWPotential, parity: Parity, k: C64, dk: C64) -> Self {
        let h = potential.width() / 2.0;
        let q = potential.inner_wavenumber(k);
        let (alpha, beta) = match parity {
            Parity::Even => ((q * h).cos(), -q * q * h * sinc(q * h) / k),
            Parity::Odd => (h * sinc(q * h), (q * h).cos() / k),
        };
        let N = (PI * (alpha * alpha + beta * beta)).sqrt().recip();
        Self { potential, parity, k, dk, sampling: Sampling::Grid, q, alpha, beta, N }
    }

    /// Mark where the state was sampled.
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Build a continuum state on the real axis.
    pub fn real(potential: SWPotential, parity: Parity, k: f64, dk: f64) -> Self {
        Self::new(potential, parity, C64::from(k), C64::from(dk))
    }

    /// Get the associated potential.
    pub fn potential(&self) -> &SWPotential { &self.potential }

    /// Get the parity.
    pub fn parity(&self) -> Parity { self.parity }

    /// Get the wavenumber.
    pub fn k(&self) -> C64 { self.k }

    /// Get the quadrature weight.
    pub fn dk(&self) -> C64 { self.dk }

    /// Get where the state was sampled.
    pub fn sampling(&self) -> Sampling { self.sampling }

    /// Get the energy `E = k²`.
    pub fn energy(&self) -> C64 { self.k * self.k }

    /// Get the phase shift `δ` of the outer solution
    /// `cos(k|x| + δ)`/`sin(k|x| + δ)` for real `k`.
    pub fn phase_shift(&self) -> f64 {
        let h = self.potential.width() / 2.0;
        let kh = self.k.re * h;
        match self.parity {
            Parity::Even => (-self.beta.re).atan2(self.alpha.re) - kh,
            Parity::Odd => self.alpha.re.atan2(self.beta.re) - kh,
        }
    }

    /// Evaluate the state at a single point.
    pub fn value(&self, x: f64) -> C64 {
        let h = self.potential.width() / 2.0;
        if x.abs() <= h {
            let inner = match self.parity {
                Parity::Even => (self.q * x).cos(),
                Parity::Odd => x * sinc(self.q * x),
            };
            self.N * inner
        } else {
            let kx = self.k * (x.abs() - h);
            self.parity.reflect(x) * self.N
                * (self.alpha * kx.cos() + self.beta * kx.sin())
        }
    }

    /// Evaluate the state over an array of points.
    pub fn values<S>(&self, x: &Arr1<S>) -> nd::Array1<C64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| self.value(xk))
    }
}

/// Any eigenstate of the square well.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum State {
    Siegert(SiegertState),
    Continuum(ContinuumState),
}

impl From<SiegertState> for State {
    fn from(s: SiegertState) -> Self { Self::Siegert(s) }
}

impl From<ContinuumState> for State {
    fn from(c: ContinuumState) -> Self { Self::Continuum(c) }
}

impl State {
    /// Get the associated potential.
    pub fn potential(&self) -> &SWPotential {
        match self {
            Self::Siegert(s) => s.potential(),
            Self::Continuum(c) => c.potential(),
        }
    }

    /// Get the parity.
    pub fn parity(&self) -> Parity {
        match self {
            Self::Siegert(s) => s.parity(),
            Self::Continuum(c) => c.parity(),
        }
    }

    /// Get the wavenumber.
    pub fn k(&self) -> C64 {
        match self {
            Self::Siegert(s) => s.k(),
            Self::Continuum(c) => c.k(),
        }
    }

    /// Get the quadrature weight (`1` for Siegert states).
    pub fn dk(&self) -> C64 {
        match self {
            Self::Siegert(_) => C64::from(1.0),
            Self::Continuum(c) => c.dk(),
        }
    }

    /// Get the energy `E = k²`.
    pub fn energy(&self) -> C64 { self.k() * self.k() }

    /// Get where a continuum state was sampled (`None` for Siegert states).
    pub fn sampling(&self) -> Option<Sampling> {
        self.as_continuum().map(|c| c.sampling())
    }

    /// Classify the state.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Siegert(s) => s.kind(),
            Self::Continuum(_) => Kind::Continuum,
        }
    }

    /// Return `true` if `self` is a Siegert state.
    pub fn is_siegert(&self) -> bool { matches!(self, Self::Siegert(_)) }

    /// Return `true` if `self` is a continuum state.
    pub fn is_continuum(&self) -> bool { matches!(self, Self::Continuum(_)) }

    /// Return the Siegert state, if `self` is one.
    pub fn as_siegert(&self) -> Option<&SiegertState> {
        match self {
            Self::Siegert(s) => Some(s),
            Self::Continuum(_) => None,
        }
    }

    /// Return the continuum state, if `self` is one.
    pub fn as_continuum(&self) -> Option<&ContinuumState> {
        match self {
            Self::Siegert(_) => None,
            Self::Continuum(c) => Some(c),
        }
    }

    /// Evaluate the state at a single point.
    pub fn value(&self, x: f64) -> C64 {
        match self {
            Self::Siegert(s) => s.value(x),
            Self::Continuum(c) => c.value(x),
        }
    }

    /// Evaluate the state over an array of points.
    pub fn values<S>(&self, x: &Arr1<S>) -> nd::Array1<C64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| self.value(xk))
    }

    /// Sample the state on a spatial grid.
    pub fn discretize(&self, x: &nd::Array1<f64>) -> Wavefunction {
        Wavefunction { x: x.clone(), values: self.values(x) }
    }

    // characteristic wavenumber of the state over the whole line
    fn kscale(&self) -> f64 {
        let k = self.k();
        let q = self.potential().inner_wavenumber(k);
        q.norm().max(k.norm())
    }

    /// Compute the c-product `(u|g⟩ = ∫ u(x) g(x) dx`.
    pub fn c_product<T>(&self, test: &T, gl: &GaussLegendre) -> C64
    where T: TestFunction + ?Sized
    {
        integrate_against(
            self.potential(), test, gl, self.kscale(),
            |x| self.value(x) * test.value(x),
        )
    }

    /// Compute the bra `⟨g|u) = ∫ g*(x) u(x) dx`.
    pub fn bra<T>(&self, test: &T, gl: &GaussLegendre) -> C64
    where T: TestFunction + ?Sized
    {
        integrate_against(
            self.potential(), test, gl, self.kscale(),
            |x| test.value(x).conj() * self.value(x),
        )
    }
}

/// A state sampled on a uniform spatial grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Wavefunction {
    /// Spatial grid.
    pub x: nd::Array1<f64>,
    /// Values on the grid.
    pub values: nd::Array1<C64>,
}

impl Wavefunction {
    /// Create a new `Wavefunction` from bare arrays.
    pub fn new(x: nd::Array1<f64>, values: nd::Array1<C64>)
        -> Result<Self, LengthError>
    {
        LengthError::check(&x, &values)?;
        Ok(Self { x, values })
    }

    /// Get the grid spacing.
    ///
    /// *Panics if the grid has length less than 2*.
    pub fn dx(&self) -> f64 { self.x[1] - self.x[0] }

    /// Compute |ψ|² on the grid.
    pub fn abs2(&self) -> nd::Array1<f64> { self.values.mapv(|v| v.norm_sqr()) }

    /// Compute the norm on the grid (trapezoidal rule).
    ///
    /// *Panics if the grid has length less than 2*.
    pub fn norm(&self) -> f64 { wf_norm(&self.values, self.dx()) }

    /// Compute the Hermitian inner product with another wavefunction sampled
    /// on the same grid.
    ///
    /// *Panics if either grid has length less than 2*.
    pub fn dot(&self, other: &Self) -> C64 {
        wf_dot(&self.values, &other.values, self.dx())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ quadrature::DEF_ORDER, testfn::{ Gaussian, Rectangular } };

    fn pot() -> SWPotential { SWPotential::new(3.0, 8.0).unwrap() }

    #[test]
    fn classify_kinds() {
        assert_eq!(Kind::classify(C64::new(0.0, 1.0)), Kind::Bound);
        assert_eq!(Kind::classify(C64::new(0.0, -1.0)), Kind::Antibound);
        assert_eq!(Kind::classify(C64::new(2.0, -0.5)), Kind::Resonant);
        assert_eq!(Kind::classify(C64::new(-2.0, -0.5)), Kind::Antiresonant);
        assert!(!Kind::Continuum.is_siegert());
    }

    #[test]
    fn siegert_state_continuous_at_edges() {
        let pot = pot();
        let h = pot.width() / 2.0;
        for parity in Parity::BOTH {
            let s = SiegertState::new(pot, parity, C64::new(4.1, -0.8));
            let inside = s.value(h);
            let outside = s.value(h + 1e-12);
            assert!((inside - outside).norm() < 1e-9);
            // parity symmetry
            let sign = if parity.is_even() { 1.0 } else { -1.0 };
            assert!((s.value(-2.2) - sign * s.value(2.2)).norm() < 1e-12);
        }
    }

    #[test]
    fn regularized_norm_is_one() {
        let gl = GaussLegendre::new(DEF_ORDER).unwrap();
        let pot = pot();
        for parity in Parity::BOTH {
            for k in [C64::new(3.3, -0.6), C64::new(0.0, 1.1), C64::new(0.0, -0.4)] {
                let s = SiegertState::new(pot, parity, k);
                assert!((s.regularized_norm(&gl) - 1.0).norm() < 1e-10);
            }
        }
    }

    #[test]
    fn antipartner_mirrors_values() {
        let s = SiegertState::new(pot(), Parity::Odd, C64::new(5.0, -1.0));
        let a = s.antipartner();
        assert_eq!(a.kind(), Kind::Antiresonant);
        for x in [-2.0, 0.3, 1.0, 4.0] {
            assert!((a.value(x).norm() - s.value(x).norm()).abs() < 1e-10);
        }
    }

    #[test]
    fn resonance_width() {
        let pot = pot();
        let k = C64::new(1.1597142531284867, -0.7035534269385598);
        let s = SiegertState::new(pot, Parity::Odd, k);
        // Γ = -2 Im k² = -4 Re k Im k
        assert!((s.width() - 3.263683748232157).abs() < 1e-12);
        assert!((s.antipartner().width() - s.width()).abs() < 1e-12);
        assert_eq!(SiegertState::new(pot, Parity::Even, C64::new(0.0, 1.4)).width(), 0.0);
        assert_eq!(SiegertState::new(pot, Parity::Even, C64::new(0.0, -2.4)).width(), 0.0);
    }

    #[test]
    fn continuum_sampling_tag() {
        let c = ContinuumState::real(pot(), Parity::Even, 1.0, 0.1);
        assert_eq!(c.sampling(), Sampling::Grid);
        let c = c.with_sampling(Sampling::Contour);
        assert_eq!(c.sampling(), Sampling::Contour);
        assert_eq!(State::from(c).sampling(), Some(Sampling::Contour));
        let s: State = SiegertState::new(pot(), Parity::Odd, C64::new(2.0, -0.5)).into();
        assert_eq!(s.sampling(), None);
    }

    #[test]
    fn continuum_state_smooth_at_edges() {
        let pot = pot();
        let h = pot.width() / 2.0;
        for parity in Parity::BOTH {
            let c = ContinuumState::real(pot, parity, 2.7, 0.01);
            assert!(c.value(0.4).im.abs() < 1e-14);
            let eps = 1e-6;
            let dl = (c.value(h) - c.value(h - eps)) / eps;
            let dr = (c.value(h + eps) - c.value(h)) / eps;
            assert!((c.value(h) - c.value(h + 1e-12)).norm() < 1e-9);
            assert!((dl - dr).norm() < 1e-4);
        }
    }

    #[test]
    fn continuum_amplitude_outside() {
        // outside the well the state is cos(k|x| + δ) / √π
        let c = ContinuumState::real(pot(), Parity::Even, 1.3, 0.01);
        let d = c.phase_shift();
        for x in [2.0, 5.5, 11.0] {
            let expected = (1.3 * x + d).cos() / PI.sqrt();
            assert!((c.value(x).re.abs() - expected.abs()).abs() < 1e-10);
        }
    }

    #[test]
    fn c_product_matches_analytic() {
        // (u|g⟩ = N/2 ∫ [exp(i(k0 + q)x) + exp(i(k0 - q)x)] dx for an even
        // state and a rectangle inside the well
        let gl = GaussLegendre::new(DEF_ORDER).unwrap();
        let s = SiegertState::new(pot(), Parity::Even, C64::new(3.3, -0.6));
        let q = pot().inner_wavenumber(s.k());
        let (k0, xl, xr) = (1.5, -0.3, 0.7);
        let g = Rectangular::from_bounds(xl, xr, k0);
        let prim = |alpha: C64| {
            ((C64::i() * alpha * xr).exp() - (C64::i() * alpha * xl).exp())
                / (C64::i() * alpha)
        };
        let exact = g.amplitude() * s.norm_factor() / 2.0 * (prim(k0 + q) + prim(k0 - q));
        let st: State = s.into();
        assert!((st.c_product(&g, &gl) - exact).norm() < 1e-10);
    }

    #[test]
    fn bra_of_real_state_is_conjugate_c_product() {
        let gl = GaussLegendre::new(DEF_ORDER).unwrap();
        let c: State = ContinuumState::real(pot(), Parity::Odd, 2.0, 0.01).into();
        let g = Gaussian::new(0.3, 0.2, 1.0);
        let cp = c.c_product(&g, &gl);
        let br = c.bra(&g, &gl);
        assert!((cp.conj() - br).norm() < 1e-12);
    }

    #[test]
    fn discretized_bound_state_norm() {
        let pot = pot();
        // even ground state: q tan(ql/2) = κ; found by a coarse bisection here
        let f = |kappa: f64| pot.matching(Parity::Even, C64::new(0.0, kappa)).re;
        let (mut a, mut b) = (2.0, pot.depth().sqrt() - 1e-9);
        (0..200).for_each(|_| {
            let m = (a + b) / 2.0;
            if f(a) * f(m) <= 0.0 { b = m; } else { a = m; }
        });
        let s: State = SiegertState::new(pot, Parity::Even, C64::new(0.0, a)).into();
        let x: nd::Array1<f64> = nd::Array1::linspace(-15.0, 15.0, 6001);
        let wf = s.discretize(&x);
        assert!((wf.norm() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn wavefunction_lengths_checked() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 5);
        let values: nd::Array1<C64> = nd::Array1::zeros(4);
        assert!(matches!(Wavefunction::new(x.clone(), values), Err(LengthError(5, 4))));
        let values: nd::Array1<C64> = x.mapv(C64::from);
        let wf = Wavefunction::new(x, values).unwrap();
        assert!((wf.dx() - 0.25).abs() < 1e-15);
        assert_eq!(wf.abs2()[4], 1.0);
    }

    #[test]
    fn discretized_bound_states_orthonormal() {
        let pot = pot();
        let x: nd::Array1<f64> = nd::Array1::linspace(-15.0, 15.0, 6001);
        let even: State
            = SiegertState::new(pot, Parity::Even, C64::new(0.0, 1.421292320267867)).into();
        let odd: State
            = SiegertState::new(pot, Parity::Odd, C64::new(0.0, 2.2808954889393585)).into();
        let we = even.discretize(&x);
        let wo = odd.discretize(&x);
        assert!((we.dot(&we) - we.norm()).norm() < 1e-12);
        assert!((we.dot(&we) - 1.0).norm() < 1e-4);
        assert!((wo.dot(&wo) - 1.0).norm() < 1e-4);
        assert!(we.dot(&wo).norm() < 1e-10);
    }
}
