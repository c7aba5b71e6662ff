//! Property-based tests using proptest.
//!
//! Covers: symmetries of the matching functions, bound-state searches,
//! contour discretization, the Faddeeva function, and test-function norms.

use ndarray as nd;
use proptest::prelude::*;
use siegert::{
    C64,
    basis::{ BasisSet, SearchParams },
    contour::Contour,
    faddeeva::{ erfc, moshinsky, w },
    potential::SWPotential,
    states::{ Kind, Parity },
    testfn::{ Gaussian, TestFunction },
    utils::{ close, sinc, wf_norm },
};

// ── Matching functions ──────────────────────────────────────────────

proptest! {
    /// F(iκ) is real for both parities.
    #[test]
    fn matching_real_on_imaginary_axis(
        l in 0.5f64..5.0,
        v0 in 0.1f64..20.0,
        kappa in -5.0f64..5.0,
    ) {
        let pot = SWPotential::new(l, v0).unwrap();
        for parity in Parity::BOTH {
            let f = pot.matching(parity, C64::new(0.0, kappa));
            prop_assert!(f.im.abs() <= 1e-10 * f.norm().max(1.0),
                "{:?}: F({}i) = {}", parity, kappa, f);
        }
    }

    /// F(-k*) = F(k)*, so Siegert states off the imaginary axis come in
    /// resonant/antiresonant pairs.
    #[test]
    fn matching_reflection_symmetry(
        l in 0.5f64..5.0,
        v0 in 0.1f64..20.0,
        re in 0.1f64..10.0,
        im in -3.0f64..0.0,
    ) {
        let pot = SWPotential::new(l, v0).unwrap();
        let k = C64::new(re, im);
        for parity in Parity::BOTH {
            let f = pot.matching(parity, k);
            let g = pot.matching(parity, -k.conj());
            prop_assert!(close(g, f.conj(), 1e-10), "{:?}: {} vs {}", parity, g, f);
        }
    }

    /// Every bound state found lies below threshold, solves the matching
    /// condition, and the count never exceeds the number supported by the
    /// well.
    #[test]
    fn bound_states_solve_matching(l in 1.0f64..4.0, v0 in 1.0f64..20.0) {
        let pot = SWPotential::new(l, v0).unwrap();
        let params = SearchParams::new(0.0, 0.0, 5.0, 0.01).bounds_only(true);
        let basis = BasisSet::find_siegert_states(pot, &params).unwrap();
        prop_assert!(basis.len() <= pot.bound_state_count());
        prop_assert!(!basis.even().is_empty());
        for s in basis.iter() {
            prop_assert_eq!(s.kind(), Kind::Bound);
            prop_assert!(s.k().im < v0.sqrt());
            let f = pot.matching(s.parity(), s.k());
            prop_assert!(f.norm() < 1e-8, "F({}) = {}", s.k(), f);
        }
    }
}

// ── Contours ─────────────────────────────────────────────────────────

proptest! {
    /// Contour weights integrate dk exactly, whatever the shape.
    #[test]
    fn contour_weights_sum_to_kmax(
        apex_re in 0.1f64..5.0,
        apex_im in -3.0f64..-0.1,
        back in 0.5f64..6.0,
        extra in 0.0f64..20.0,
        hk in 0.01f64..0.5,
    ) {
        let kmax = back + extra;
        let contour = Contour::triangle(C64::new(apex_re, apex_im), back, kmax)
            .unwrap();
        let nodes = contour.discretize(hk).unwrap();
        let total: C64 = nodes.iter().map(|(_, wk)| *wk).sum();
        prop_assert!((total - kmax).norm() < 1e-10 * kmax.max(1.0));
        prop_assert!(nodes.iter().all(|(_, wk)| wk.norm() <= hk * (1.0 + 1e-12)));
        prop_assert!(nodes.iter().all(|(k, _)| k.im <= 0.0));
    }

    /// Points just above the apex are enclosed; points below it are not.
    #[test]
    fn triangle_encloses_points_above_apex(
        apex_re in 0.5f64..5.0,
        apex_im in -3.0f64..-0.2,
        frac in 0.05f64..0.95,
    ) {
        let contour = Contour::triangle(C64::new(apex_re, apex_im), 2.0 * apex_re, 30.0)
            .unwrap();
        prop_assert!(contour.encloses(C64::new(apex_re, frac * apex_im)));
        prop_assert!(!contour.encloses(C64::new(apex_re, (1.0 + frac) * apex_im)));
    }
}

// ── Faddeeva function ────────────────────────────────────────────────

proptest! {
    /// w(-z*) = w(z)*.
    #[test]
    fn faddeeva_conjugate_symmetry(re in -5.0f64..5.0, im in 0.0f64..5.0) {
        let z = C64::new(re, im);
        prop_assert!(close(w(-z.conj()), w(z).conj(), 1e-12));
    }

    /// erfc(x) + erfc(-x) = 2 on the real axis.
    #[test]
    fn erfc_reflection(x in -3.0f64..3.0) {
        let s = erfc(C64::from(x)) + erfc(C64::from(-x));
        prop_assert!((s - 2.0).norm() < 1e-9, "{}", s);
    }

    /// Every Mittag-Leffler term starts with weight ½.
    #[test]
    fn moshinsky_at_t0(re in -10.0f64..10.0, im in -3.0f64..3.0) {
        let m = moshinsky(C64::new(re, im), 0.0);
        prop_assert!((m - 0.5).norm() < 1e-10);
    }
}

// ── Utilities and test functions ─────────────────────────────────────

proptest! {
    /// z sinc(z) = sin(z).
    #[test]
    fn sinc_times_z(re in -10.0f64..10.0, im in -3.0f64..3.0) {
        let z = C64::new(re, im);
        prop_assert!(close(z * sinc(z), z.sin(), 1e-12));
    }

    /// Numerical ⟨g|g⟩ of a Gaussian matches its analytic value.
    #[test]
    fn gaussian_norm(
        sigma in 0.1f64..1.0,
        center in -2.0f64..2.0,
        k0 in -3.0f64..3.0,
    ) {
        let g = Gaussian::new(sigma, center, k0);
        let (a, b) = g.support();
        let n: usize = 4001;
        let x: nd::Array1<f64> = nd::Array1::linspace(a, b, n);
        let dx = (b - a) / (n - 1) as f64;
        let norm = wf_norm(&g.values(&x), dx);
        prop_assert!((norm - g.norm2()).abs() < 1e-8, "{} vs {}", norm, g.norm2());
        prop_assert!((g.norm2() - 1.0).abs() < 1e-12);
    }
}
