#![allow(non_upper_case_globals)]

//! Conversion between physical units and the natural units used throughout
//! this crate, in which ħ²/2m = 1.
//!
//! In natural units, a particle of mass *m* in a potential of length scale *a*
//! has energies measured in ħ²/(2 *m* *a*²), wavenumbers in 1/*a*, and times
//! in ħ/(energy unit), so that a state of energy *E* evolves as exp(-i*E*t).
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// unified atomic mass unit (kg)
pub const mu: f64 = 1.66053906660e-27;
//              +/- 0.00000000050e-27

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Hartree energy (J)
pub const Eh: f64 = 4.3597447222071e-18;
//              +/- 0.0000000000085e-18

/// A collection of natural unit scaling factors relative to some base unit
/// system.
///
/// Constructor methods produce scaling constants whose numerical values are
/// represented in the base unit system.
///
/// ```
/// use siegert::units::{ self, Units };
///
/// // an electron in a 1 nm well
/// let uu = Units::from_mks(units::me, 1e-9);
/// let depth_ev = 0.5;
/// let depth = uu.to_nat_energy(depth_ev * units::e);
/// assert!((uu.from_nat_energy(depth) / units::e - depth_ev).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Units {
    /// Particle mass.
    pub m: f64,
    /// Base length scale.
    pub a: f64,
    /// Associated energy scale.
    pub e: f64,
    /// Associated time scale.
    pub t: f64,
}

impl Units {
    /// Construct from a mass and length scale given in meters/kilograms/seconds
    /// (MKS) units.
    pub fn from_mks(mass: f64, a: f64) -> Self {
        let e_unit = hbar.powi(2) / 2.0 / mass / a.powi(2);
        let t_unit = hbar / e_unit;
        Self { m: mass, a, e: e_unit, t: t_unit }
    }

    /// Construct from a mass and length scale given in
    /// centimeters/grams/seconds (CGS) units.
    pub fn from_cgs(mass: f64, a: f64) -> Self {
        const hbar_cgs: f64 = hbar * 1e7;
        let e_unit = hbar_cgs.powi(2) / 2.0 / mass / a.powi(2);
        let t_unit = hbar_cgs / e_unit;
        Self { m: mass, a, e: e_unit, t: t_unit }
    }

    /// Construct from a mass and length scale in atomic units (electron masses
    /// and Bohr radii), with energies in Hartrees and times in ħ/Eh.
    pub fn from_au(mass: f64, a: f64) -> Self {
        let e_unit = 1.0 / 2.0 / mass / a.powi(2);
        let t_unit = 1.0 / e_unit;
        Self { m: mass, a, e: e_unit, t: t_unit }
    }

    /// Convert a length in the base unit system to natural units.
    pub fn to_nat_length(&self, x: f64) -> f64 { x / self.a }

    /// Convert a length in natural units to the base unit system.
    pub fn from_nat_length(&self, x: f64) -> f64 { x * self.a }

    /// Convert a wavenumber in the base unit system to natural units.
    pub fn to_nat_wavenumber(&self, k: f64) -> f64 { k * self.a }

    /// Convert a wavenumber in natural units to the base unit system.
    pub fn from_nat_wavenumber(&self, k: f64) -> f64 { k / self.a }

    /// Convert an energy in the base unit system to natural units.
    pub fn to_nat_energy(&self, x: f64) -> f64 { x / self.e }

    /// Convert an energy in natural units to the base unit system.
    pub fn from_nat_energy(&self, x: f64) -> f64 { x * self.e }

    /// Convert a time in the base unit system to natural units.
    pub fn to_nat_time(&self, x: f64) -> f64 { x / self.t }

    /// Convert a time in natural units to the base unit system.
    pub fn from_nat_time(&self, x: f64) -> f64 { x * self.t }

    /// Return the lifetime (in the base unit system) of a resonance with the
    /// given natural-unit width Γ = -2 Im E.
    ///
    /// Returns infinity for non-positive widths.
    pub fn lifetime(&self, gamma: f64) -> f64 {
        if gamma > 0.0 { self.t / gamma } else { f64::INFINITY }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn au_energy_unit_matches_mks() {
        let uu_au = Units::from_au(1.0, 1.0);
        let uu_mks = Units::from_mks(me, a0);
        // both express ħ²/(2 me a0²) = Eh / 2
        assert!((uu_au.e - 0.5).abs() < 1e-15);
        assert!((uu_mks.e / Eh - 0.5).abs() < 1e-8);
    }

    #[test]
    fn lifetime_of_stable_state_is_infinite() {
        let uu = Units::from_mks(me, 1e-9);
        assert!(uu.lifetime(0.0).is_infinite());
        assert!((uu.lifetime(2.0) - uu.t / 2.0).abs() < 1e-30);
    }
}
