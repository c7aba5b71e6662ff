//! Analytic wavepackets used to test basis sets.
//!
//! Test functions have finite effective support, which bounds every scalar
//! product computed against them (see [`states`][crate::states]).

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use crate::{ Arr1, error::TestFunctionError };

pub type TestFnResult<T> = Result<T, TestFunctionError>;

// half-width of the effective support of a Gaussian, in units of sigma
const GAUSS_CUTOFF: f64 = 10.0;

/// Common interface for test functions.
pub trait TestFunction {
    /// Evaluate the function at a single point.
    fn value(&self, x: f64) -> C64;

    /// Evaluate the function over an array of points.
    fn values<S>(&self, x: &Arr1<S>) -> nd::Array1<C64>
    where
        S: nd::Data<Elem = f64>,
        Self: Sized,
    {
        x.mapv(|xk| self.value(xk))
    }

    /// Effective support `(xmin, xmax)`, outside of which the function is
    /// negligible.
    fn support(&self) -> (f64, f64);

    /// Points inside the support at which the function is not smooth.
    fn breakpoints(&self) -> Vec<f64> { Vec::new() }

    /// Characteristic wavenumber of the function, used to size quadrature
    /// panels.
    fn scale(&self) -> f64;

    /// Analytic value of ⟨g|g⟩.
    fn norm2(&self) -> f64;
}

/// A Gaussian wavepacket
/// ```text
/// g(x) = h exp(-(x - xc)² / 2σ²) exp(i k0 x)
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGaussian", into = "RawGaussian")]
pub struct Gaussian {
    pub sigma: f64,
    pub center: f64,
    pub k0: f64,
    pub amplitude: Option<f64>,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
struct RawGaussian {
    sigma: f64,
    center: f64,
    #[serde(default)]
    k0: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amplitude: Option<f64>,
}

impl TryFrom<RawGaussian> for Gaussian {
    type Error = TestFunctionError;

    fn try_from(raw: RawGaussian) -> TestFnResult<Self> {
        let RawGaussian { sigma, center, k0, amplitude } = raw;
        let g = Self { sigma, center, k0, amplitude };
        g.check()?;
        Ok(g)
    }
}

impl From<Gaussian> for RawGaussian {
    fn from(g: Gaussian) -> Self {
        let Gaussian { sigma, center, k0, amplitude } = g;
        Self { sigma, center, k0, amplitude }
    }
}

impl Gaussian {
    /// Create a new Gaussian normalized to unity.
    pub fn new(sigma: f64, center: f64, k0: f64) -> Self {
        Self { sigma, center, k0, amplitude: None }
    }

    /// Set an explicit amplitude in place of the normalizing one.
    pub fn with_amplitude(mut self, h: f64) -> Self {
        self.amplitude = Some(h);
        self
    }

    /// Get the amplitude `h`.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
            .unwrap_or_else(|| (self.sigma.abs() * PI.sqrt()).sqrt().recip())
    }

    /// Check that `sigma` is positive and all other parameters are finite.
    pub fn check(&self) -> TestFnResult<()> {
        if !(self.sigma > 0.0 && self.sigma.is_finite()) {
            return Err(TestFunctionError::BadSigma(self.sigma));
        }
        TestFunctionError::check_finite("center", self.center)?;
        TestFunctionError::check_finite("k0", self.k0)?;
        self.amplitude.map_or(Ok(()), |h| TestFunctionError::check_finite("amplitude", h))
    }
}

impl TestFunction for Gaussian {
    fn value(&self, x: f64) -> C64 {
        let dx = (x - self.center) / self.sigma;
        self.amplitude() * (-dx * dx / 2.0).exp() * C64::cis(self.k0 * x)
    }

    fn support(&self) -> (f64, f64) {
        let w = GAUSS_CUTOFF * self.sigma.abs();
        (self.center - w, self.center + w)
    }

    fn scale(&self) -> f64 { self.k0.abs() + self.sigma.abs().recip() }

    fn norm2(&self) -> f64 {
        self.amplitude().powi(2) * self.sigma.abs() * PI.sqrt()
    }
}

/// A rectangular wavepacket
/// ```text
/// g(x) = h exp(i k0 x)  for |x - xc| ≤ a/2, 0 otherwise
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRectangular", into = "RawRectangular")]
pub struct Rectangular {
    pub center: f64,
    pub width: f64,
    pub k0: f64,
    pub amplitude: Option<f64>,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
struct RawRectangular {
    center: f64,
    width: f64,
    #[serde(default)]
    k0: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amplitude: Option<f64>,
}

impl TryFrom<RawRectangular> for Rectangular {
    type Error = TestFunctionError;

    fn try_from(raw: RawRectangular) -> TestFnResult<Self> {
        let RawRectangular { center, width, k0, amplitude } = raw;
        let r = Self { center, width, k0, amplitude };
        r.check()?;
        Ok(r)
    }
}

impl From<Rectangular> for RawRectangular {
    fn from(r: Rectangular) -> Self {
        let Rectangular { center, width, k0, amplitude } = r;
        Self { center, width, k0, amplitude }
    }
}

impl Rectangular {
    /// Create a new rectangular function normalized to unity.
    pub fn new(center: f64, width: f64, k0: f64) -> Self {
        Self { center, width, k0, amplitude: None }
    }

    /// Create a rectangular function spanning `[xl, xr]`, normalized to unity.
    pub fn from_bounds(xl: f64, xr: f64, k0: f64) -> Self {
        Self::new((xl + xr) / 2.0, (xr - xl).abs(), k0)
    }

    /// Set an explicit amplitude in place of the normalizing one.
    pub fn with_amplitude(mut self, h: f64) -> Self {
        self.amplitude = Some(h);
        self
    }

    /// Get the amplitude `h`.
    pub fn amplitude(&self) -> f64 {
        self.amplitude.unwrap_or_else(|| self.width.abs().sqrt().recip())
    }

    /// Check that `width` is positive and all other parameters are finite.
    pub fn check(&self) -> TestFnResult<()> {
        if !(self.width > 0.0 && self.width.is_finite()) {
            return Err(TestFunctionError::BadWidth(self.width));
        }
        TestFunctionError::check_finite("center", self.center)?;
        TestFunctionError::check_finite("k0", self.k0)?;
        self.amplitude.map_or(Ok(()), |h| TestFunctionError::check_finite("amplitude", h))
    }
}

impl TestFunction for Rectangular {
    fn value(&self, x: f64) -> C64 {
        if (x - self.center).abs() <= self.width.abs() / 2.0 {
            self.amplitude() * C64::cis(self.k0 * x)
        } else {
            C64::from(0.0)
        }
    }

    fn support(&self) -> (f64, f64) {
        let w = self.width.abs() / 2.0;
        (self.center - w, self.center + w)
    }

    fn scale(&self) -> f64 { self.k0.abs() }

    fn norm2(&self) -> f64 { self.amplitude().powi(2) * self.width.abs() }
}

/// Any of the available test functions, tagged by kind for use in study
/// configuration files.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WavePacket {
    Gaussian(Gaussian),
    Rectangular(Rectangular),
}

impl From<Gaussian> for WavePacket {
    fn from(g: Gaussian) -> Self { Self::Gaussian(g) }
}

impl From<Rectangular> for WavePacket {
    fn from(r: Rectangular) -> Self { Self::Rectangular(r) }
}

impl WavePacket {
    /// Check the parameters of the underlying test function.
    pub fn check(&self) -> TestFnResult<()> {
        match self {
            Self::Gaussian(g) => g.check(),
            Self::Rectangular(r) => r.check(),
        }
    }
}

impl TestFunction for WavePacket {
    fn value(&self, x: f64) -> C64 {
        match self {
            Self::Gaussian(g) => g.value(x),
            Self::Rectangular(r) => r.value(x),
        }
    }

    fn support(&self) -> (f64, f64) {
        match self {
            Self::Gaussian(g) => g.support(),
            Self::Rectangular(r) => r.support(),
        }
    }

    fn breakpoints(&self) -> Vec<f64> {
        match self {
            Self::Gaussian(g) => g.breakpoints(),
            Self::Rectangular(r) => r.breakpoints(),
        }
    }

    fn scale(&self) -> f64 {
        match self {
            Self::Gaussian(g) => g.scale(),
            Self::Rectangular(r) => r.scale(),
        }
    }

    fn norm2(&self) -> f64 {
        match self {
            Self::Gaussian(g) => g.norm2(),
            Self::Rectangular(r) => r.norm2(),
        }
    }
}
