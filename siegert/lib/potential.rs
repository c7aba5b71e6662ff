//! The finite square-well potential.
//!
//! ```text
//!          ⎧ -V₀  |x| ≤ l/2
//! V(x)  =  ⎨
//!          ⎩  0   |x| > l/2
//! ```
//!
//! Inside the well, a solution of wavenumber *k* oscillates with the inner
//! wavenumber *q* = √(*k*² + *V*₀). Matching the interior solution to a purely
//! outgoing wave exp(i*k*|*x*|) at the well edges gives the Siegert condition
//! for each parity,
//! ```text
//! even: F(k) = q sin(ql/2) + i k cos(ql/2)        = 0
//! odd:  F(k) = cos(ql/2) - i k (l/2) sinc(ql/2)   = 0
//! ```
//! Both functions are even in *q*, and hence entire in *k*, so the choice of
//! branch for *q* never matters.

use ndarray as nd;
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use crate::{
    Arr1,
    error::PotentialError,
    states::Parity,
    units::Units,
    utils::sinc,
};

pub type PotResult<T> = Result<T, PotentialError>;

/// A finite square well of width `l` and depth `V₀`, centered on the origin.
///
/// The parameters are fixed at construction; states and basis sets hold their
/// own copies.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPotential", into = "RawPotential")]
pub struct SWPotential {
    // well width
    l: f64,
    // well depth (positive)
    V0: f64,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
struct RawPotential {
    width: f64,
    depth: f64,
}

impl TryFrom<RawPotential> for SWPotential {
    type Error = PotentialError;

    fn try_from(raw: RawPotential) -> PotResult<Self> {
        Self::new(raw.width, raw.depth)
    }
}

impl From<SWPotential> for RawPotential {
    fn from(pot: SWPotential) -> Self {
        Self { width: pot.l, depth: pot.V0 }
    }
}

/// A well of width 3 and depth 8, supporting three bound states and an even
/// antibound state.
impl Default for SWPotential {
    fn default() -> Self { Self { l: 3.0, V0: 8.0 } }
}

impl SWPotential {
    /// Create a new square well of width `l > 0` and depth `V0 > 0` in natural
    /// units.
    pub fn new(l: f64, V0: f64) -> PotResult<Self> {
        if !(l > 0.0 && l.is_finite()) {
            return Err(PotentialError::BadWidth(l));
        }
        if !(V0 > 0.0 && V0.is_finite()) {
            return Err(PotentialError::BadDepth(V0));
        }
        Ok(Self { l, V0 })
    }

    /// Create a new square well from a width and depth given in the base unit
    /// system of `units`.
    pub fn from_units(l: f64, V0: f64, units: &Units) -> PotResult<Self> {
        Self::new(units.to_nat_length(l), units.to_nat_energy(V0))
    }

    /// Get the well width.
    pub fn width(&self) -> f64 { self.l }

    /// Get the (positive) well depth.
    pub fn depth(&self) -> f64 { self.V0 }

    /// Get the positions of the well edges, `(-l/2, l/2)`.
    pub fn edges(&self) -> (f64, f64) { (-self.l / 2.0, self.l / 2.0) }

    /// Return `true` if `x` lies inside the well (edges included).
    pub fn contains(&self, x: f64) -> bool { x.abs() <= self.l / 2.0 }

    /// Evaluate the potential at a single point.
    pub fn value(&self, x: f64) -> f64 {
        if self.contains(x) { -self.V0 } else { 0.0 }
    }

    /// Evaluate the potential over an array of points.
    pub fn values<S>(&self, x: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| self.value(xk))
    }

    /// Compute the inner wavenumber `q = √(k² + V₀)` (principal branch).
    pub fn inner_wavenumber(&self, k: C64) -> C64 {
        (k * k + self.V0).sqrt()
    }

    /// Evaluate the Siegert matching function for a given parity, whose zeros
    /// are the Siegert states of the well.
    pub fn matching(&self, parity: Parity, k: C64) -> C64 {
        let h = self.l / 2.0;
        let q = self.inner_wavenumber(k);
        let theta = q * h;
        match parity {
            Parity::Even => q * theta.sin() + C64::i() * k * theta.cos(),
            Parity::Odd => theta.cos() - C64::i() * k * h * sinc(theta),
        }
    }

    /// Number of bound states supported by the well, counted from the number
    /// of half-periods of the threshold solution `q₀ l / π`.
    pub fn bound_state_count(&self) -> usize {
        let q0 = self.V0.sqrt();
        (q0 * self.l / std::f64::consts::PI).floor() as usize + 1
    }
}
