//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [Siegert states of the square well](#siegert-states-of-the-square-well)
//! - [Completeness](#completeness)
//! - [Time dependence](#time-dependence)
//! - [Strength functions](#strength-functions)
//!
//! # Background
//! For a potential *V*(*x*) of finite range, solutions of the time-independent
//! Schrödinger equation (TISE) outside the potential are plane waves
//! exp(±i*kx*) with *E* = *k*². Bound states are the solutions that decay on
//! both sides; for real *k* one instead finds the scattering continuum. Siegert
//! states[^1] generalize bound states by imposing purely *outgoing* boundary
//! conditions,
//! ```text
//! ∂ψ           |
//! -- = i k ψ   |
//! ∂x           |x → ±∞  (with the sign of x)
//! ```
//! which can only be satisfied for a discrete set of complex wavenumbers.
//! These lie on the positive imaginary axis (bound states), on the negative
//! imaginary axis (antibound or virtual states), and in the lower half plane
//! in pairs *k* and -*k*\* (resonant and antiresonant states). Resonant states
//! have complex energies *E* = *E*ᵣ - i Γ/2, whose imaginary part Γ is the
//! resonance width, i.e. the inverse lifetime of a quasi-stationary state.
//!
//! Since Siegert states grow exponentially outside the potential when
//! Im *k* < 0, they cannot be normalized in the usual sense. Instead, they are
//! normalized with a bilinear product that involves no complex conjugation
//! (the *c*-product) and a surface term that regularizes the divergent
//! outer integral[^2]:
//! ```text
//! ∫_{-l/2}^{l/2} u(x)² dx + i u(l/2)² / k = 1
//! ```
//! For bound states this reduces to the usual norm.
//!
//! # Units
//! All functions in this crate work in natural (dimensionless) units where
//! *ħ*²/2 *m* = 1. Given a length scale *a*, energies are measured in
//! *ε* = *ħ*²/2 *m* *a*² and times in *ħ*/*ε*, so that the TISE and the
//! time-dependent Schrödinger equation read
//! ```text
//!   ∂²ψ
//! - --- + V(x) ψ = E ψ
//!   ∂x²
//!
//!   ∂²ψ              ∂ψ
//! - --- + V(x) ψ = i --
//!   ∂x²              ∂t
//! ```
//! and a stationary state of energy *E* evolves as exp(-i*Et*). Items in
//! [`units`][crate::units] handle conversion to and from natural units.
//!
//! # Siegert states of the square well
//! For the square well *V*(*x*) = -*V*₀ for |*x*| ≤ *l*/2, the solutions are
//! `cos(qx)` (even) or `sin(qx)/q` (odd) inside the well, with the inner
//! wavenumber *q* = √(*k*² + *V*₀), and `exp(ik|x|)` outside. Requiring
//! continuity of the logarithmic derivative at *x* = *l*/2 gives
//! ```text
//! even: F(k) = q sin(ql/2) + i k cos(ql/2)       = 0
//! odd:  F(k) = cos(ql/2) - i k (l/2) sinc(ql/2)  = 0
//! ```
//! Both functions are entire in *k*. On the imaginary axis *k* = i*κ* they are
//! real, so bound and antibound states are located by bracketing sign changes
//! of *F*(i*κ*). Resonant states are found with the [secant
//! method][secant] in the complex plane, started from a grid of initial
//! guesses; antiresonant states follow by symmetry.
//!
//! Continuum states are the real solutions for real *k* > 0, normalized to
//! *δ*(*k* - *k*'). Outside the well they read
//! `α cos(k(|x| - l/2)) + β sin(k(|x| - l/2))` divided by
//! √(*π* (*α*² + *β*²)), with *α* and *β* fixed by matching to the interior
//! solution. The same expressions, continued to complex *k*, give the
//! continuum states along a Berggren contour.
//!
//! # Completeness
//! Bound and continuum states form a complete basis, so that for any
//! (square-integrable) test function *g*
//! ```text
//! Σ_b |⟨b|g⟩|² + ∫_0^∞ Σ_p |⟨φ_{p,k}|g⟩|² dk = ⟨g|g⟩
//! ```
//! Deforming the continuum integral into the lower half plane along a contour
//! *L* picks up the residues of the resonant states enclosed between *L* and
//! the real axis. This is the Berggren completeness relation[^3],
//! ```text
//! Σ_b ⟨g|b)(b|g⟩ + Σ_{r enclosed} ⟨g|u_r)(u_r|g⟩ + ∫_L Σ_p ⟨g|φ_{p,k})(φ_{p,k}|g⟩ dk = ⟨g|g⟩
//! ```
//! where all products with states at complex *k* are taken without complex
//! conjugation of the state. For test functions contained in the well, the
//! Mittag-Leffler expansion of the outgoing Green's function over all
//! Siegert states[^4] yields a completeness relation without any continuum
//! contribution:
//! ```text
//! ½ Σ_n ⟨g|u_n)(u_n|g⟩ = ⟨g|g⟩
//! ```
//!
//! # Time dependence
//! Each completeness relation yields an expansion of a wavepacket with
//! *ψ*(*x*, 0) = *g*(*x*). In the exact and Berggren expansions, every state
//! simply contributes a phase exp(-i*k*²*t*). In the Mittag-Leffler expansion,
//! the time evolution of each term is instead given by the Moshinsky function
//! ```text
//! M(k, t) = ½ w(-exp(iπ/4) k √t)
//! ```
//! with *w* the [Faddeeva function][crate::faddeeva::w]. At *t* = 0 every term
//! carries a factor ½, recovering the completeness relation above; at long
//! times, bound and resonant terms tend to exp(-i*k*²*t*) while antibound and
//! antiresonant terms decay algebraically and produce the non-exponential
//! long-time behavior of the survival amplitude.
//!
//! # Strength functions
//! The strength function *S*(*E*) = -(1/*π*) Im ⟨*g*|*G*(*E*)|*g*⟩ of a test
//! function measures its overlap with the spectrum at energy *E*. In the exact
//! picture it is given directly by the continuum states at *k* = √*E*,
//! `S = Σ_p |⟨φ_{p,k}|g⟩|² / 2k`. The Mittag-Leffler expansion of the Green's
//! function,
//! ```text
//!               u_n(x) u_n(x')
//! G(x, x') = Σ_n --------------
//!             2 k_n (k - k_n)
//! ```
//! gives the same result from Siegert states alone, while the discrete part of
//! the Berggren expansion gives a sum of complex Lorentzians centered on the
//! resonance energies.
//!
//! [^1]: A. J. F. Siegert, "On the derivation of the dispersion formula for
//! nuclear reactions." Phys. Rev. **56** 750 (1939).
//!
//! [^2]: Y. B. Zel'dovich, "On the theory of unstable states." Sov. Phys. JETP
//! **12** 542 (1961).
//!
//! [^3]: T. Berggren, "On the use of resonant states in eigenfunction
//! expansions of scattering and reaction amplitudes." Nucl. Phys. A **109**
//! 265-287 (1968).
//!
//! [^4]: G. García-Calderón and R. Peierls, "Resonant states and their uses."
//! Nucl. Phys. A **265** 443-460 (1976).
//!
//! [secant]: https://en.wikipedia.org/wiki/Secant_method
