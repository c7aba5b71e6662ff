//! Strength functions `S(E) = -(1/π) Im ⟨g|G(E)|g⟩` of test functions, for
//! real energies `E = k² > 0`.
//!
//! ```text
//! exact:    S = Σ_p |(φ_{p,k}|g⟩|² / 2k
//! MLE:      S = -(1/π) Im Σ_n ⟨g|u_n)(u_n|g⟩ / (2 k_n (k - k_n))
//! Berggren: S = -(1/π) Im Σ_{b,r} ⟨g|u)(u|g⟩ / (E - E_n)
//! ```
//! The exact strength function generates the (real) continuum states it needs
//! at each requested wavenumber. The Berggren form keeps only the discrete part
//! of the expansion (bound and enclosed resonant states) and thus describes
//! the resonant structure of `S` rather than its background.

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    basis::BasisSet,
    error::PropagationError,
    propagate::{ Expansion, PropResult },
    states::{ ContinuumState, Kind, Parity, State },
    testfn::TestFunction,
};

fn check_wavenumbers<S>(k: &Arr1<S>) -> PropResult<()>
where S: nd::Data<Elem = f64>
{
    PropagationError::check_grid("wavenumber", k)?;
    match k.iter().find(|kk| !(**kk > 0.0 && kk.is_finite())) {
        Some(bad) => Err(PropagationError::BadWavenumber(*bad)),
        None => Ok(()),
    }
}

// (k_n, ⟨g|u_n)(u_n|g⟩) for the discrete states selected by `pred`
fn discrete_terms<T, F>(basis: &BasisSet, test: &T, mut pred: F)
    -> PropResult<Vec<(C64, C64)>>
where
    T: TestFunction + ?Sized,
    F: FnMut(&State) -> bool,
{
    let gl = basis.quadrature();
    let terms: Vec<(C64, C64)>
        = basis.iter()
        .filter(|s| s.is_siegert() && pred(s))
        .map(|s| (s.k(), s.bra(test, gl) * s.c_product(test, gl)))
        .collect();
    if terms.is_empty() {
        Err(PropagationError::EmptyBasis)
    } else {
        Ok(terms)
    }
}

/// Compute a strength function over a grid of real wavenumbers `k > 0`.
///
/// Only the basis set's potential and quadrature are used by the exact form.
pub fn strength<T, S>(
    expansion: Expansion,
    basis: &BasisSet,
    test: &T,
    k: &Arr1<S>,
) -> PropResult<nd::Array1<f64>>
where
    T: TestFunction + ?Sized,
    S: nd::Data<Elem = f64>,
{
    check_wavenumbers(k)?;
    match expansion {
        Expansion::Exact => {
            let pot = *basis.potential();
            let gl = basis.quadrature();
            Ok(k.mapv(|kk| {
                Parity::BOTH.iter()
                    .map(|&p| {
                        State::from(ContinuumState::real(pot, p, kk, 1.0))
                            .c_product(test, gl)
                            .norm_sqr()
                    })
                    .sum::<f64>() / (2.0 * kk)
            }))
        },
        Expansion::Mle => {
            let terms = discrete_terms(basis, test, |_| true)?;
            Ok(k.mapv(|kk| {
                let g: C64
                    = terms.iter()
                    .map(|&(kn, c)| c / (2.0 * kn * (kk - kn)))
                    .sum();
                -g.im / PI
            }))
        },
        Expansion::Berggren => {
            basis.warn_unenclosed("strength::strength");
            let terms = discrete_terms(basis, test, |s| {
                s.kind() == Kind::Bound || basis.is_enclosed(s)
            })?;
            Ok(k.mapv(|kk| {
                let e = kk * kk;
                let g: C64
                    = terms.iter()
                    .map(|&(kn, c)| c / (e - kn * kn))
                    .sum();
                -g.im / PI
            }))
        },
    }
}

/// Exact strength function. See [`strength`].
pub fn exact<T, S>(basis: &BasisSet, test: &T, k: &Arr1<S>)
    -> PropResult<nd::Array1<f64>>
where
    T: TestFunction + ?Sized,
    S: nd::Data<Elem = f64>,
{
    strength(Expansion::Exact, basis, test, k)
}

/// Mittag-Leffler strength function. See [`strength`].
pub fn mle<T, S>(basis: &BasisSet, test: &T, k: &Arr1<S>)
    -> PropResult<nd::Array1<f64>>
where
    T: TestFunction + ?Sized,
    S: nd::Data<Elem = f64>,
{
    strength(Expansion::Mle, basis, test, k)
}

/// Berggren (discrete part) strength function. See [`strength`].
pub fn berggren<T, S>(basis: &BasisSet, test: &T, k: &Arr1<S>)
    -> PropResult<nd::Array1<f64>>
where
    T: TestFunction + ?Sized,
    S: nd::Data<Elem = f64>,
{
    strength(Expansion::Berggren, basis, test, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        basis::SearchParams,
        potential::SWPotential,
        testfn::Gaussian,
    };

    fn pot() -> SWPotential { SWPotential::new(3.0, 8.0).unwrap() }

    #[test]
    fn bad_wavenumbers_rejected() {
        let basis = BasisSet::new(pot()).unwrap();
        let g = Gaussian::new(0.3, 0.0, 0.0);
        assert!(matches!(
            exact(&basis, &g, &nd::array![1.0, 0.0]),
            Err(PropagationError::BadWavenumber(_))
        ));
        let empty: nd::Array1<f64> = nd::Array1::zeros(0);
        assert!(matches!(
            exact(&basis, &g, &empty),
            Err(PropagationError::EmptyGrid(_))
        ));
    }

    #[test]
    fn exact_strength_is_positive() {
        let basis = BasisSet::new(pot()).unwrap();
        let g = Gaussian::new(0.3, 0.2, 1.0);
        let k: nd::Array1<f64> = nd::Array1::linspace(0.1, 10.0, 25);
        let s = exact(&basis, &g, &k).unwrap();
        assert!(s.iter().all(|sk| *sk >= 0.0));
    }

    #[test]
    fn bound_states_have_no_strength_above_threshold() {
        let params = SearchParams::new(0.0, 0.0, 3.0, 0.05).bounds_only(true);
        let basis = BasisSet::find_siegert_states(pot(), &params).unwrap();
        let g = Gaussian::new(0.3, 0.0, 0.0);
        let k = nd::array![0.5, 1.0, 4.0];
        let s = berggren(&basis, &g, &k).unwrap();
        assert!(s.iter().all(|sk| sk.abs() < 1e-12));
    }
}
