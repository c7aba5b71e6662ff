//! Time propagation of test functions through basis-set expansions.
//!
//! A wavepacket `ψ(x, 0) = g(x)` evolves as
//! ```text
//! exact:    ψ(x, t) = Σ_b e^{-iE_b t} (b|g⟩ b(x) + Σ_c e^{-ik²t} (φ_c|g⟩ φ_c(x) dk
//! MLE:      ψ(x, t) = Σ_n M(k_n, t) (u_n|g⟩ u_n(x)
//! Berggren: ψ(x, t) = Σ_{b,r} e^{-iE t} (u|g⟩ u(x) + Σ_contour e^{-ik²t} (φ|g⟩ φ(x) dk
//! ```
//! where `M` is the [Moshinsky function][crate::faddeeva::moshinsky] and the
//! MLE sum runs over all Siegert states. The MLE result is valid inside the
//! well for test functions supported in the well.
//!
//! In all 2D arrays, the first (or zero-th) axis indexes time.

use ndarray as nd;
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use crate::{
    Arr1,
    basis::BasisSet,
    error::PropagationError,
    faddeeva::moshinsky,
    states::State,
    testfn::TestFunction,
};

pub type PropResult<T> = Result<T, PropagationError>;

/// Choice of basis-set expansion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expansion {
    /// Bound states plus continuum states on the real axis.
    Exact,
    /// Mittag-Leffler expansion over all Siegert states.
    Mle,
    /// Bound and enclosed resonant states plus contour continuum states.
    Berggren,
}

impl Expansion {
    /// All expansions, in the above order.
    pub const ALL: [Expansion; 3] = [Self::Exact, Self::Mle, Self::Berggren];

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Mle => "mle",
            Self::Berggren => "berggren",
        }
    }

    // quadrature weight of `state` in the expansion, or `None` if it does not
    // take part
    pub(crate) fn weight(&self, basis: &BasisSet, state: &State) -> Option<C64> {
        match self {
            Self::Exact => basis.in_exact(state).then(|| state.dk()),
            Self::Mle => state.is_siegert().then_some(C64::from(1.0)),
            Self::Berggren => basis.in_berggren(state).then(|| state.dk()),
        }
    }

    fn time_factor(&self, k: C64, t: f64) -> C64 {
        match self {
            Self::Mle => moshinsky(k, t),
            _ => (-C64::i() * k * k * t).exp(),
        }
    }

    // states taking part in the expansion, with their weighted c-products
    // (u|g⟩ dk
    fn coefficients<T>(&self, basis: &BasisSet, test: &T)
        -> PropResult<Vec<(State, C64)>>
    where T: TestFunction + ?Sized
    {
        if *self == Self::Berggren {
            basis.warn_unenclosed("propagate::Expansion::coefficients");
        }
        let gl = basis.quadrature();
        let coeffs: Vec<(State, C64)>
            = basis.iter()
            .filter_map(|s| {
                self.weight(basis, s).map(|w| (*s, w * s.c_product(test, gl)))
            })
            .collect();
        if coeffs.is_empty() {
            Err(PropagationError::EmptyBasis)
        } else {
            Ok(coeffs)
        }
    }
}

/// Propagate a test function over a time grid `t`, sampling the result on a
/// spatial grid `x`. Returns an array of shape `(t.len(), x.len())`.
pub fn propagate<T, S, U>(
    expansion: Expansion,
    basis: &BasisSet,
    test: &T,
    t: &Arr1<S>,
    x: &Arr1<U>,
) -> PropResult<nd::Array2<C64>>
where
    T: TestFunction + ?Sized,
    S: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
{
    PropagationError::check_grid("time", t)?;
    PropagationError::check_grid("space", x)?;
    let coeffs = expansion.coefficients(basis, test)?;
    let n = coeffs.len();
    let values: nd::Array2<C64>
        = nd::Array2::from_shape_fn(
            (n, x.len()), |(i, j)| coeffs[i].0.value(x[j]));
    let time: nd::Array2<C64>
        = nd::Array2::from_shape_fn(
            (t.len(), n),
            |(i, j)| {
                let (state, c) = coeffs[j];
                c * expansion.time_factor(state.k(), t[i])
            },
        );
    Ok(time.dot(&values))
}

/// Propagate with the exact expansion. See [`propagate`].
pub fn exact<T, S, U>(basis: &BasisSet, test: &T, t: &Arr1<S>, x: &Arr1<U>)
    -> PropResult<nd::Array2<C64>>
where
    T: TestFunction + ?Sized,
    S: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
{
    propagate(Expansion::Exact, basis, test, t, x)
}

/// Propagate with the Mittag-Leffler expansion. See [`propagate`].
pub fn mle<T, S, U>(basis: &BasisSet, test: &T, t: &Arr1<S>, x: &Arr1<U>)
    -> PropResult<nd::Array2<C64>>
where
    T: TestFunction + ?Sized,
    S: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
{
    propagate(Expansion::Mle, basis, test, t, x)
}

/// Propagate with the Berggren expansion. See [`propagate`].
pub fn berggren<T, S, U>(basis: &BasisSet, test: &T, t: &Arr1<S>, x: &Arr1<U>)
    -> PropResult<nd::Array2<C64>>
where
    T: TestFunction + ?Sized,
    S: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
{
    propagate(Expansion::Berggren, basis, test, t, x)
}

/// Compute the autocorrelation function (survival amplitude)
/// `A(t) = ⟨g|ψ(t)⟩` over a time grid.
pub fn autocorrelation<T, S>(
    expansion: Expansion,
    basis: &BasisSet,
    test: &T,
    t: &Arr1<S>,
) -> PropResult<nd::Array1<C64>>
where
    T: TestFunction + ?Sized,
    S: nd::Data<Elem = f64>,
{
    PropagationError::check_grid("time", t)?;
    let gl = basis.quadrature();
    let terms: Vec<(C64, C64)>
        = expansion.coefficients(basis, test)?
        .into_iter()
        .map(|(s, c)| (s.k(), s.bra(test, gl) * c))
        .collect();
    let acorr: nd::Array1<C64>
        = t.mapv(|tk| {
            terms.iter()
                .map(|&(k, c)| c * expansion.time_factor(k, tk))
                .sum()
        });
    Ok(acorr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        basis::SearchParams,
        potential::SWPotential,
        testfn::Gaussian,
    };

    fn bound_basis() -> BasisSet {
        let pot = SWPotential::new(3.0, 8.0).unwrap();
        let params = SearchParams::new(0.0, 0.0, 3.0, 0.05).bounds_only(true);
        BasisSet::find_siegert_states(pot, &params).unwrap()
    }

    #[test]
    fn empty_grids_rejected() {
        let basis = bound_basis();
        let g = Gaussian::new(0.3, 0.0, 0.0);
        let t: nd::Array1<f64> = nd::Array1::zeros(0);
        let x: nd::Array1<f64> = nd::Array1::linspace(-1.0, 1.0, 5);
        assert!(matches!(
            exact(&basis, &g, &t, &x),
            Err(PropagationError::EmptyGrid("time"))
        ));
        assert!(matches!(
            exact(&basis, &g, &x, &t),
            Err(PropagationError::EmptyGrid("space"))
        ));
    }

    #[test]
    fn empty_expansion_rejected() {
        let basis = bound_basis().continuum();
        let g = Gaussian::new(0.3, 0.0, 0.0);
        let t = nd::array![0.0, 1.0];
        assert!(matches!(
            autocorrelation(Expansion::Mle, &basis, &g, &t),
            Err(PropagationError::EmptyBasis)
        ));
    }

    #[test]
    fn bound_states_are_stationary() {
        // a single bound state returns to itself up to a phase
        let basis = bound_basis();
        let state = *basis.get(0).unwrap();
        let single = BasisSet::from_states(*basis.potential(), [state]).unwrap();
        let g = Gaussian::new(0.4, 0.2, 0.0);
        let t = nd::array![0.0, 0.7, 3.1];
        let x: nd::Array1<f64> = nd::Array1::linspace(-2.0, 2.0, 9);
        let psi = exact(&single, &g, &t, &x).unwrap();
        assert_eq!(psi.dim(), (3, 9));
        let e = state.energy();
        for (i, &tk) in t.iter().enumerate() {
            let phase = (-C64::i() * e * tk).exp();
            for j in 0..x.len() {
                assert!((psi[[i, j]] - phase * psi[[0, j]]).norm() < 1e-12);
            }
        }
        let acorr = autocorrelation(Expansion::Exact, &single, &g, &t).unwrap();
        assert!((acorr[0].norm() - acorr[2].norm()).abs() < 1e-12);
    }

    #[test]
    fn names() {
        let names: Vec<&str> = Expansion::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["exact", "mle", "berggren"]);
    }
}
