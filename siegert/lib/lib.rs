#![allow(dead_code, non_snake_case)]

//! Provides functions and higher-level constructs to compute and use Siegert
//! (outgoing-wave) eigenstates of the one-dimensional finite square well.
//!
//! Provides implementations for the following:
//! - Eigenstates:
//!     - Bound and antibound states (real scan along the imaginary wavenumber
//!       axis)
//!     - Resonant and antiresonant states (complex secant search from a grid
//!       of initial guesses)
//!     - Continuum states on a uniform wavenumber grid or along a Berggren
//!       contour
//! - Basis sets: filtering, concatenation, scalar products against test
//!   functions, tabulated storage
//! - Completeness relations, time propagation and strength functions via
//!     - the exact (bound + continuum) expansion
//!     - the Mittag-Leffler expansion (MLE) over all Siegert states
//!     - the Berggren expansion (bound + resonant + deformed continuum)
//!
//! All quantities are expressed in natural units where ħ²/2m = 1, so that
//! `E = k²`. See [`docs`] for theoretical background and [`units`] for
//! conversion to and from physical units.

pub mod basis;
pub mod config;
pub mod contour;
pub mod error;
pub mod faddeeva;
pub mod potential;
pub mod propagate;
pub mod quadrature;
pub mod roots;
pub mod states;
pub mod strength;
pub mod testfn;
pub mod units;
pub mod utils;

pub mod docs;

pub(crate) const DEF_EPSILON: f64 = 1e-12;
pub(crate) const DEF_MAXITERS: usize = 1000;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;

pub use num_complex::Complex64 as C64;
