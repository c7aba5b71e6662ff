//! Basis sets of square-well eigenstates.
//!
//! A [`BasisSet`] is an ordered collection of [`State`]s sharing a single
//! potential. Basis sets are built by searching for Siegert states
//! ([`BasisSet::find_siegert_states`]), by sampling continuum states on a
//! uniform wavenumber grid ([`BasisSet::find_continuum_states`]) or along a
//! Berggren contour ([`BasisSet::on_contour`]), and combined with `+`.
//!
//! Completeness relations for a test function *g* compare partial sums over a
//! basis to ⟨*g*|*g*⟩:
//! ```text
//! exact:    Σ_b |(b|g⟩|²         + Σ_c ⟨g|φ_c)(φ_c|g⟩ dk
//! MLE:      ½ Σ_n ⟨g|u_n)(u_n|g⟩                        (all Siegert states)
//! Berggren: Σ_{b,r} ⟨g|u)(u|g⟩   + Σ_contour ⟨g|φ)(φ|g⟩ dk
//! ```
//! where only resonant states enclosed by the Berggren contour enter the last
//! relation. The MLE relation holds for test functions contained in the well.

use std::{
    cmp,
    fs,
    io::{ BufReader, BufWriter, Write },
    ops::Add,
    path::Path,
};
use ndarray as nd;
use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use crate::{
    Arr1,
    DEF_EPSILON,
    DEF_MAXITERS,
    contour::Contour,
    error::BasisError,
    potential::SWPotential,
    quadrature::{ DEF_ORDER, GaussLegendre },
    roots::{ find_real_roots, secant_complex },
    states::{ ContinuumState, Kind, Parity, Sampling, SiegertState, State },
    testfn::TestFunction,
};

pub type BasisResult<T> = Result<T, BasisError>;

// wavenumbers closer than this (relative) are the same root
const DUPLICATE_TOL: f64 = 1e-6;

// roots of the matching function this close to k = 0 are discarded
const ZERO_TOL: f64 = 1e-10;

// largest accepted |F(k)| / max(1, |k|) at a converged resonance
const RESIDUAL_TOL: f64 = 1e-8;

fn def_epsilon() -> f64 { DEF_EPSILON }

fn def_maxiters() -> usize { DEF_MAXITERS }

/// Parameters of a Siegert-state search.
///
/// Bound and antibound states are located on the imaginary axis for
/// `|Im k| ≤ im_kmax`, sampled with step `im_hk`. Resonant states are searched
/// from a grid of initial guesses covering `0 < Re k ≤ re_kmax` (step `re_hk`)
/// and `-im_kmax ≤ Im k < 0` (step `im_hk`).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    pub re_kmax: f64,
    pub re_hk: f64,
    pub im_kmax: f64,
    pub im_hk: f64,
    /// Only look for bound states.
    #[serde(default)]
    pub bounds_only: bool,
    #[serde(default = "def_epsilon")]
    pub epsilon: f64,
    #[serde(default = "def_maxiters")]
    pub maxiters: usize,
}

impl SearchParams {
    /// Create a new set of search parameters with default tolerances.
    pub fn new(re_kmax: f64, re_hk: f64, im_kmax: f64, im_hk: f64) -> Self {
        Self {
            re_kmax,
            re_hk,
            im_kmax,
            im_hk,
            bounds_only: false,
            epsilon: DEF_EPSILON,
            maxiters: DEF_MAXITERS,
        }
    }

    /// Restrict (or not) the search to bound states.
    pub fn bounds_only(mut self, bounds_only: bool) -> Self {
        self.bounds_only = bounds_only;
        self
    }

    /// Set the convergence tolerance and iteration limit of each root search.
    pub fn tolerance(mut self, epsilon: f64, maxiters: usize) -> Self {
        self.epsilon = epsilon;
        self.maxiters = maxiters;
        self
    }

    fn check(&self) -> BasisResult<()> {
        let pos = |x: f64| x > 0.0 && x.is_finite();
        if !pos(self.im_kmax) {
            return Err(BasisError::BadSearch("im_kmax must be positive"));
        }
        if !pos(self.im_hk) {
            return Err(BasisError::BadSearch("im_hk must be positive"));
        }
        if !self.bounds_only {
            if !pos(self.re_kmax) {
                return Err(BasisError::BadSearch("re_kmax must be positive"));
            }
            if !pos(self.re_hk) {
                return Err(BasisError::BadSearch("re_hk must be positive"));
            }
        }
        Ok(())
    }

    fn in_window(&self, k: C64) -> bool {
        k.re > 0.0 && k.re <= self.re_kmax
            && k.im < 0.0 && k.im >= -self.im_kmax
    }
}

// true if `k` is already among the wavenumbers of `found`
fn is_duplicate(found: &[C64], k: C64) -> bool {
    found.iter()
        .any(|kf| (kf - k).norm() < DUPLICATE_TOL * k.norm().max(1.0))
}

fn cmp_k(l: C64, r: C64) -> cmp::Ordering {
    l.re.partial_cmp(&r.re)
        .unwrap_or(cmp::Ordering::Equal)
        .then(l.im.partial_cmp(&r.im).unwrap_or(cmp::Ordering::Equal))
}

/// An ordered collection of eigenstates of a single square well.
#[derive(Clone, Debug)]
pub struct BasisSet {
    potential: SWPotential,
    states: Vec<State>,
    contour: Option<Contour>,
    quad: GaussLegendre,
}

impl BasisSet {
    /// Create a new, empty basis set.
    pub fn new(potential: SWPotential) -> BasisResult<Self> {
        let quad = GaussLegendre::new(DEF_ORDER)?;
        Ok(Self { potential, states: Vec::new(), contour: None, quad })
    }

    /// Create a new basis set from a collection of states, all of which must
    /// belong to `potential`.
    pub fn from_states<I>(potential: SWPotential, states: I) -> BasisResult<Self>
    where I: IntoIterator<Item = State>
    {
        let mut basis = Self::new(potential)?;
        states.into_iter().try_for_each(|s| basis.push(s))?;
        Ok(basis)
    }

    // new basis set with the same potential, contour, and quadrature
    fn with_states(&self, states: Vec<State>) -> Self {
        Self {
            potential: self.potential,
            states,
            contour: self.contour.clone(),
            quad: self.quad.clone(),
        }
    }

    /// Find the Siegert states of a potential.
    ///
    /// Bound and antibound states come from a sign-change scan of the
    /// (real-valued) matching functions along the imaginary axis. Resonant
    /// states come from complex secant searches; converged roots outside the
    /// search window, on the imaginary axis, or already found are discarded,
    /// as are searches that stall away from a zero of the matching function.
    /// Antiresonant states are the partners `-k*` of the resonant ones.
    pub fn find_siegert_states(potential: SWPotential, params: &SearchParams)
        -> BasisResult<Self>
    {
        params.check()?;
        let mut states: Vec<State> = Vec::new();

        let (kappa_min, kappa_max)
            = if params.bounds_only {
                (0.0, params.im_kmax.min(potential.depth().sqrt()))
            } else {
                (-params.im_kmax, params.im_kmax)
            };
        let mut nbound: usize = 0;
        for parity in Parity::BOTH {
            let f = |kappa: f64| potential.matching(parity, C64::new(0.0, kappa)).re;
            let roots = find_real_roots(
                f, kappa_min, kappa_max, params.im_hk,
                params.epsilon, params.maxiters,
            )?;
            roots.into_iter()
                .filter(|kappa| kappa.abs() > ZERO_TOL)
                .filter(|kappa| !params.bounds_only || *kappa > 0.0)
                .for_each(|kappa| {
                    if kappa > 0.0 { nbound += 1; }
                    let s = SiegertState::new(potential, parity, C64::new(0.0, kappa));
                    states.push(s.into());
                });
        }
        if nbound != potential.bound_state_count() {
            println!(
                "basis::find_siegert_states: WARNING: found {} bound states where {} were expected",
                nbound,
                potential.bound_state_count(),
            );
        }

        if !params.bounds_only {
            let nre = (params.re_kmax / params.re_hk + 1e-9).floor() as usize;
            let nim = (params.im_kmax / params.im_hk - 1e-9).ceil() as usize;
            let mut failed: usize = 0;
            for parity in Parity::BOTH {
                let mut found: Vec<C64> = Vec::new();
                let f = |k: C64| potential.matching(parity, k);
                for i in 1..=nre {
                    for j in 0..nim {
                        let guess = C64::new(
                            i as f64 * params.re_hk,
                            -params.im_kmax + j as f64 * params.im_hk,
                        );
                        let k = match secant_complex(
                            f, guess, params.epsilon, params.maxiters)
                        {
                            Ok(k) => k,
                            Err(_) => { failed += 1; continue; },
                        };
                        if f(k).norm() > RESIDUAL_TOL * k.norm().max(1.0) {
                            failed += 1;
                            continue;
                        }
                        if !params.in_window(k)
                            || Kind::classify(k) != Kind::Resonant
                            || is_duplicate(&found, k)
                        {
                            continue;
                        }
                        found.push(k);
                    }
                }
                found.sort_by(|l, r| cmp_k(*l, *r));
                for k in found.into_iter() {
                    let s = SiegertState::new(potential, parity, k);
                    states.push(s.antipartner().into());
                    states.push(s.into());
                }
            }
            if failed > 0 {
                println!(
                    "basis::find_siegert_states: WARNING: {} of {} resonance searches failed to converge to a root",
                    failed,
                    2 * nre * nim,
                );
            }
        }

        let mut basis = Self::from_states(potential, states)?;
        basis.sort();
        Ok(basis)
    }

    /// Sample continuum states on the midpoint grid
    /// `k_j = kmin + (j + ½) hk < kmax`, for both parities unless `even_only`.
    pub fn find_continuum_states(
        potential: SWPotential,
        kmax: f64,
        hk: f64,
        kmin: f64,
        even_only: bool,
    ) -> BasisResult<Self>
    {
        let bad = BasisError::BadGrid { kmin, kmax, hk };
        if !(hk > 0.0 && kmin >= 0.0 && kmax > kmin && kmax.is_finite()) {
            return Err(bad);
        }
        let n = ((kmax - kmin) / hk + 1e-9).floor() as usize;
        if n == 0 { return Err(bad); }
        let parities: &[Parity]
            = if even_only { &[Parity::Even] } else { &Parity::BOTH };
        let states: Vec<State>
            = parities.iter()
            .flat_map(|&parity| {
                (0..n).map(move |j| {
                    let k = kmin + (j as f64 + 0.5) * hk;
                    State::from(ContinuumState::real(potential, parity, k, hk))
                })
            })
            .collect();
        Self::from_states(potential, states)
    }

    /// Sample continuum states of both parities along a Berggren contour, with
    /// nodes spaced by at most `hk`.
    ///
    /// The contour is kept with the basis set and determines which resonant
    /// states enter Berggren expansions.
    pub fn on_contour(potential: SWPotential, contour: &Contour, hk: f64)
        -> BasisResult<Self>
    {
        let nodes = contour.discretize(hk)?;
        let states: Vec<State>
            = Parity::BOTH.iter()
            .flat_map(|&parity| {
                nodes.iter().map(move |&(k, dk)| {
                    let c = ContinuumState::new(potential, parity, k, dk)
                        .with_sampling(Sampling::Contour);
                    State::from(c)
                })
            })
            .collect();
        let mut basis = Self::from_states(potential, states)?;
        basis.contour = Some(contour.clone());
        Ok(basis)
    }

    /// Get the associated potential.
    pub fn potential(&self) -> &SWPotential { &self.potential }

    /// Get the Berggren contour, if any.
    pub fn contour(&self) -> Option<&Contour> { self.contour.as_ref() }

    /// Get the quadrature rule used for scalar products.
    pub fn quadrature(&self) -> &GaussLegendre { &self.quad }

    /// Get the number of states.
    pub fn len(&self) -> usize { self.states.len() }

    /// Return `true` if there are no states.
    pub fn is_empty(&self) -> bool { self.states.is_empty() }

    /// Iterate over the states.
    pub fn iter(&self) -> std::slice::Iter<'_, State> { self.states.iter() }

    /// Get a reference to the `i`-th state.
    pub fn get(&self, i: usize) -> Option<&State> { self.states.get(i) }

    /// Append a state, which must belong to the same potential.
    pub fn push(&mut self, state: State) -> BasisResult<()> {
        if *state.potential() != self.potential {
            return Err(BasisError::PotentialMismatch);
        }
        self.states.push(state);
        Ok(())
    }

    /// Append all states of another basis set defined for the same potential.
    ///
    /// If `self` has no contour, it takes over that of `other`.
    pub fn extend(&mut self, other: Self) -> BasisResult<()> {
        if other.potential != self.potential {
            return Err(BasisError::PotentialMismatch);
        }
        if self.contour.is_none() {
            self.contour = other.contour;
        } else if other.contour.is_some() && other.contour != self.contour {
            println!("basis::BasisSet::extend: WARNING: keeping the first of two different contours");
        }
        self.states.extend(other.states);
        Ok(())
    }

    /// Keep only the states for which `pred` is `true`.
    pub fn filter_by<F>(&self, mut pred: F) -> Self
    where F: FnMut(&State) -> bool
    {
        self.with_states(self.states.iter().filter(|s| pred(s)).copied().collect())
    }

    /// Keep only the states of a given kind.
    pub fn filter(&self, kind: Kind) -> Self {
        self.filter_by(|s| s.kind() == kind)
    }

    /// Keep only the bound states.
    pub fn bounds(&self) -> Self { self.filter(Kind::Bound) }

    /// Keep only the antibound states.
    pub fn antibounds(&self) -> Self { self.filter(Kind::Antibound) }

    /// Keep only the resonant states.
    pub fn resonants(&self) -> Self { self.filter(Kind::Resonant) }

    /// Keep only the antiresonant states.
    pub fn antiresonants(&self) -> Self { self.filter(Kind::Antiresonant) }

    /// Keep only the Siegert states.
    pub fn siegerts(&self) -> Self { self.filter_by(|s| s.is_siegert()) }

    /// Keep only the continuum states.
    pub fn continuum(&self) -> Self { self.filter_by(|s| s.is_continuum()) }

    /// Keep only the even states.
    pub fn even(&self) -> Self { self.filter_by(|s| s.parity().is_even()) }

    /// Keep only the odd states.
    pub fn odd(&self) -> Self { self.filter_by(|s| s.parity().is_odd()) }

    /// Keep the bound, antibound, and continuum states, plus the `nres`
    /// resonant states of lowest `Re k` and their antiresonant partners.
    pub fn truncated(&self, nres: usize) -> Self {
        let mut res: Vec<State> = self.resonants().states;
        res.sort_by(|l, r| cmp_k(l.k(), r.k()));
        let mut anti: Vec<State> = self.antiresonants().states;
        anti.sort_by(|l, r| cmp_k(-l.k().conj(), -r.k().conj()));
        let mut states: Vec<State>
            = self.states.iter()
            .filter(|s| {
                !matches!(s.kind(), Kind::Resonant | Kind::Antiresonant)
            })
            .copied()
            .collect();
        states.extend(res.into_iter().take(nres));
        states.extend(anti.into_iter().take(nres));
        let mut basis = self.with_states(states);
        basis.sort();
        basis
    }

    /// Sort the states by `Re k`, then `Im k`.
    pub fn sort(&mut self) {
        self.states.sort_by(|l, r| {
            cmp_k(l.k(), r.k()).then(l.parity().cmp(&r.parity()))
        });
    }

    /// Get the wavenumbers of all states.
    pub fn wavenumbers(&self) -> nd::Array1<C64> {
        self.states.iter().map(|s| s.k()).collect()
    }

    /// Get the energies of all states.
    pub fn energies(&self) -> nd::Array1<C64> {
        self.states.iter().map(|s| s.energy()).collect()
    }

    /// Evaluate all states over a spatial grid, returning an array of shape
    /// `(states, points)`.
    pub fn values<S>(&self, x: &Arr1<S>) -> nd::Array2<C64>
    where S: nd::Data<Elem = f64>
    {
        nd::Array2::from_shape_fn(
            (self.states.len(), x.len()),
            |(i, j)| self.states[i].value(x[j]),
        )
    }

    /// Compute the c-products `(u|g⟩` of all states with a test function.
    pub fn c_products<T>(&self, test: &T) -> nd::Array1<C64>
    where T: TestFunction + ?Sized
    {
        self.states.iter().map(|s| s.c_product(test, &self.quad)).collect()
    }

    /// Compute the bras `⟨g|u)` of all states with a test function.
    pub fn bras<T>(&self, test: &T) -> nd::Array1<C64>
    where T: TestFunction + ?Sized
    {
        self.states.iter().map(|s| s.bra(test, &self.quad)).collect()
    }

    /// Return `true` if `state` is a resonant state enclosed by the basis
    /// set's contour.
    pub fn is_enclosed(&self, state: &State) -> bool {
        state.kind() == Kind::Resonant
            && self.contour.as_ref().is_some_and(|c| c.encloses(state.k()))
    }

    /// Return `true` if `state` enters the exact expansion (bound states and
    /// continuum states sampled on the real-axis grid).
    pub fn in_exact(&self, state: &State) -> bool {
        state.kind() == Kind::Bound || state.sampling() == Some(Sampling::Grid)
    }

    /// Return `true` if `state` enters the Berggren expansion (bound states,
    /// enclosed resonant states, and continuum states sampled along the
    /// contour).
    pub fn in_berggren(&self, state: &State) -> bool {
        state.kind() == Kind::Bound
            || state.sampling() == Some(Sampling::Contour)
            || self.is_enclosed(state)
    }

    pub(crate) fn warn_unenclosed(&self, caller: &str) {
        if let Some(contour) = self.contour.as_ref() {
            if !self.states.iter().any(|s| self.is_enclosed(s)) {
                println!(
                    "{}: WARNING: contour ending at k = {} encloses no resonant states",
                    caller,
                    contour.kmax(),
                );
            }
        }
    }

    // (|Re k|, weight ⟨g|u)(u|g⟩) for every state selected by `select`, which
    // also returns the weight multiplier
    fn terms<T, F>(&self, test: &T, mut select: F) -> Vec<(f64, C64)>
    where
        T: TestFunction + ?Sized,
        F: FnMut(&State) -> Option<C64>,
    {
        self.states.iter()
            .filter_map(|s| {
                select(s).map(|w| {
                    let term = s.bra(test, &self.quad) * s.c_product(test, &self.quad);
                    (s.k().re.abs(), w * term)
                })
            })
            .collect()
    }

    fn cumulative(mut terms: Vec<(f64, C64)>) -> (nd::Array1<f64>, nd::Array1<C64>) {
        terms.sort_by(|l, r| l.0.partial_cmp(&r.0).unwrap_or(cmp::Ordering::Equal));
        let k: nd::Array1<f64> = terms.iter().map(|(k, _)| *k).collect();
        let sums: nd::Array1<C64>
            = terms.iter()
            .scan(C64::from(0.0), |acc, (_, t)| { *acc += t; Some(*acc) })
            .collect();
        (k, sums)
    }

    fn exact_terms<T>(&self, test: &T) -> Vec<(f64, C64)>
    where T: TestFunction + ?Sized
    {
        self.terms(test, |s| self.in_exact(s).then(|| s.dk()))
    }

    fn mle_terms<T>(&self, test: &T) -> Vec<(f64, C64)>
    where T: TestFunction + ?Sized
    {
        self.terms(test, |s| s.is_siegert().then_some(C64::from(0.5)))
    }

    fn berggren_terms<T>(&self, test: &T) -> Vec<(f64, C64)>
    where T: TestFunction + ?Sized
    {
        self.warn_unenclosed("basis::BasisSet::berggren_completeness");
        self.terms(test, |s| self.in_berggren(s).then(|| s.dk()))
    }

    /// Evaluate the exact completeness relation
    /// `Σ_b |(b|g⟩|² + Σ_c |(φ_c|g⟩|² dk`, to be compared with ⟨g|g⟩.
    pub fn exact_completeness<T>(&self, test: &T) -> C64
    where T: TestFunction + ?Sized
    {
        self.exact_terms(test).into_iter().map(|(_, t)| t).sum()
    }

    /// Evaluate the Mittag-Leffler completeness relation
    /// `½ Σ_n ⟨g|u_n)(u_n|g⟩` over all Siegert states.
    pub fn mle_completeness<T>(&self, test: &T) -> C64
    where T: TestFunction + ?Sized
    {
        self.mle_terms(test).into_iter().map(|(_, t)| t).sum()
    }

    /// Evaluate the Berggren completeness relation over bound states,
    /// enclosed resonant states, and continuum states.
    pub fn berggren_completeness<T>(&self, test: &T) -> C64
    where T: TestFunction + ?Sized
    {
        self.berggren_terms(test).into_iter().map(|(_, t)| t).sum()
    }

    /// Cumulative sums of the exact completeness relation, ordered by
    /// `|Re k|`. Returns `(|Re k|, partial sums)`.
    pub fn exact_completeness_convergence<T>(&self, test: &T)
        -> (nd::Array1<f64>, nd::Array1<C64>)
    where T: TestFunction + ?Sized
    {
        Self::cumulative(self.exact_terms(test))
    }

    /// Cumulative sums of the Mittag-Leffler completeness relation, ordered
    /// by `|Re k|`. Returns `(|Re k|, partial sums)`.
    pub fn mle_completeness_convergence<T>(&self, test: &T)
        -> (nd::Array1<f64>, nd::Array1<C64>)
    where T: TestFunction + ?Sized
    {
        Self::cumulative(self.mle_terms(test))
    }

    /// Cumulative sums of the Berggren completeness relation, ordered by
    /// `|Re k|`. Returns `(|Re k|, partial sums)`.
    pub fn berggren_completeness_convergence<T>(&self, test: &T)
        -> (nd::Array1<f64>, nd::Array1<C64>)
    where T: TestFunction + ?Sized
    {
        Self::cumulative(self.berggren_terms(test))
    }

    /// Write the basis set to a JSON table of states.
    pub fn write_json<P>(&self, path: P) -> BasisResult<()>
    where P: AsRef<Path>
    {
        let table = BasisTable::from(self);
        let mut writer = BufWriter::new(fs::File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &table)?;
        writer.flush()?;
        Ok(())
    }

    /// Rebuild a basis set from a JSON table of states.
    pub fn read_json<P>(path: P) -> BasisResult<Self>
    where P: AsRef<Path>
    {
        let reader = BufReader::new(fs::File::open(path)?);
        let table: BasisTable = serde_json::from_reader(reader)?;
        table.try_into()
    }
}

impl<'a> IntoIterator for &'a BasisSet {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter { self.states.iter() }
}

impl Add for BasisSet {
    type Output = BasisResult<BasisSet>;

    fn add(mut self, rhs: BasisSet) -> Self::Output {
        self.extend(rhs)?;
        Ok(self)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct StateRecord {
    parity: Parity,
    kind: Kind,
    k: (f64, f64),
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dk: Option<(f64, f64)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sampling: Option<Sampling>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct BasisTable {
    potential: SWPotential,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    contour: Option<Contour>,
    states: Vec<StateRecord>,
}

impl From<&BasisSet> for BasisTable {
    fn from(basis: &BasisSet) -> Self {
        let states: Vec<StateRecord>
            = basis.iter()
            .map(|s| {
                let k = s.k();
                StateRecord {
                    parity: s.parity(),
                    kind: s.kind(),
                    k: (k.re, k.im),
                    dk: s.as_continuum().map(|c| (c.dk().re, c.dk().im)),
                    sampling: s.sampling(),
                }
            })
            .collect();
        Self { potential: basis.potential, contour: basis.contour.clone(), states }
    }
}

impl TryFrom<BasisTable> for BasisSet {
    type Error = BasisError;

    fn try_from(table: BasisTable) -> BasisResult<Self> {
        let BasisTable { potential, contour, states } = table;
        let mut basis = BasisSet::new(potential)?;
        for (index, rec) in states.into_iter().enumerate() {
            let k = C64::new(rec.k.0, rec.k.1);
            let state: State
                = if rec.kind == Kind::Continuum {
                    let (re, im) = rec.dk.ok_or_else(|| BasisError::BadTable {
                        index,
                        msg: "continuum state without a weight".to_string(),
                    })?;
                    ContinuumState::new(potential, rec.parity, k, C64::new(re, im))
                        .with_sampling(rec.sampling.unwrap_or_default())
                        .into()
                } else {
                    let found = Kind::classify(k);
                    if found != rec.kind {
                        return Err(BasisError::BadTable {
                            index,
                            msg: format!("wavenumber {} is {:?}, not {:?}", k, found, rec.kind),
                        });
                    }
                    SiegertState::new(potential, rec.parity, k).into()
                };
            basis.push(state)?;
        }
        basis.contour = contour;
        Ok(basis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pot() -> SWPotential { SWPotential::new(3.0, 8.0).unwrap() }

    #[test]
    fn bounds_only_search() {
        let params = SearchParams::new(0.0, 0.0, 3.0, 0.05).bounds_only(true);
        let basis = BasisSet::find_siegert_states(pot(), &params).unwrap();
        assert_eq!(basis.len(), 3);
        assert!(basis.iter().all(|s| s.kind() == Kind::Bound));
        assert_eq!(basis.even().len(), 2);
        assert_eq!(basis.odd().len(), 1);
        basis.iter()
            .filter_map(|s| s.as_siegert())
            .for_each(|s| assert!(s.residual() < 1e-9));
    }

    #[test]
    fn bad_search_rejected() {
        let params = SearchParams::new(10.0, -1.0, 3.0, 0.05);
        assert!(matches!(
            BasisSet::find_siegert_states(pot(), &params),
            Err(BasisError::BadSearch(_))
        ));
    }

    #[test]
    fn continuum_grid() {
        let basis = BasisSet::find_continuum_states(pot(), 2.0, 0.5, 0.0, false)
            .unwrap();
        assert_eq!(basis.len(), 8);
        let k: Vec<f64> = basis.even().wavenumbers().iter().map(|k| k.re).collect();
        assert_eq!(k, vec![0.25, 0.75, 1.25, 1.75]);
        assert!(basis.iter().all(|s| s.dk() == C64::from(0.5)));
        let even = BasisSet::find_continuum_states(pot(), 2.0, 0.5, 1.0, true)
            .unwrap();
        assert_eq!(even.len(), 2);
        assert!(BasisSet::find_continuum_states(pot(), 2.0, 0.0, 0.0, false).is_err());
    }

    #[test]
    fn mismatched_potentials_rejected() {
        let a = BasisSet::find_continuum_states(pot(), 1.0, 0.5, 0.0, true).unwrap();
        let other = SWPotential::new(2.0, 8.0).unwrap();
        let b = BasisSet::find_continuum_states(other, 1.0, 0.5, 0.0, true).unwrap();
        assert!(matches!(a.clone() + b, Err(BasisError::PotentialMismatch)));
        let c = BasisSet::find_continuum_states(pot(), 2.0, 0.5, 1.0, true).unwrap();
        let ac = (a + c).unwrap();
        assert_eq!(ac.len(), 4);
    }

    #[test]
    fn truncation_keeps_couples() {
        let params = SearchParams::new(12.0, 0.5, 3.0, 0.1);
        let basis = BasisSet::find_siegert_states(pot(), &params).unwrap();
        let nres = basis.resonants().len();
        assert!(nres >= 4);
        assert_eq!(basis.antiresonants().len(), nres);
        let trunc = basis.truncated(2);
        assert_eq!(trunc.resonants().len(), 2);
        assert_eq!(trunc.antiresonants().len(), 2);
        assert_eq!(trunc.bounds().len(), basis.bounds().len());
        assert_eq!(trunc.antibounds().len(), basis.antibounds().len());
        let kr = trunc.resonants().wavenumbers();
        let ka = trunc.antiresonants().wavenumbers();
        let mut ka: Vec<C64> = ka.iter().map(|k| -k.conj()).collect();
        ka.sort_by(|l, r| cmp_k(*l, *r));
        kr.iter().zip(&ka).for_each(|(r, a)| assert!((r - a).norm() < 1e-12));
    }

    #[test]
    fn loose_searches_keep_only_true_roots() {
        // a coarse step tolerance lets secant searches stop short of a root
        let params = SearchParams::new(8.0, 0.5, 3.0, 0.1).tolerance(1e-2, 1000);
        let basis = BasisSet::find_siegert_states(pot(), &params).unwrap();
        basis.resonants().iter()
            .chain(basis.antiresonants().iter())
            .filter_map(|s| s.as_siegert())
            .for_each(|s| {
                assert!(s.residual() <= RESIDUAL_TOL * s.k().norm().max(1.0));
            });
    }

    #[test]
    fn continuum_sampling_selects_expansion() {
        let grid = BasisSet::find_continuum_states(pot(), 10.0, 0.5, 0.0, false)
            .unwrap();
        let contour = BasisSet::on_contour(pot(), &Contour::default(), 0.5).unwrap();
        let ngrid = grid.len();
        let ncontour = contour.len();
        let mixed = (grid + contour).unwrap();
        let exact = mixed.iter().filter(|s| mixed.in_exact(s)).count();
        let berggren = mixed.iter().filter(|s| mixed.in_berggren(s)).count();
        assert_eq!(exact, ngrid);
        assert_eq!(berggren, ncontour);
        // the contour's tail along the real axis stays out of the exact set
        assert!(mixed.iter().any(|s| {
            s.sampling() == Some(Sampling::Contour) && s.k().im == 0.0
        }));
        assert!(matches!(
            BasisSet::on_contour(pot(), &Contour::default(), 0.0),
            Err(BasisError::Contour(_))
        ));
    }

    #[test]
    fn table_keeps_sampling() {
        let grid = BasisSet::find_continuum_states(pot(), 2.0, 0.5, 0.0, true)
            .unwrap();
        let contour = BasisSet::on_contour(pot(), &Contour::default(), 1.0).unwrap();
        let mixed = (grid + contour).unwrap();
        let table = BasisTable::from(&mixed);
        let json = serde_json::to_string(&table).unwrap();
        let back: BasisSet
            = serde_json::from_str::<BasisTable>(&json).unwrap().try_into().unwrap();
        assert_eq!(back.len(), mixed.len());
        back.iter().zip(mixed.iter())
            .for_each(|(b, m)| assert_eq!(b.sampling(), m.sampling()));
    }

    #[test]
    fn sorted_by_real_part() {
        let params = SearchParams::new(8.0, 0.5, 3.0, 0.1);
        let basis = BasisSet::find_siegert_states(pot(), &params).unwrap();
        let re: Vec<f64> = basis.wavenumbers().iter().map(|k| k.re).collect();
        assert!(re.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn values_shape() {
        let basis = BasisSet::find_continuum_states(pot(), 1.0, 0.25, 0.0, false)
            .unwrap();
        let x: nd::Array1<f64> = nd::Array1::linspace(-3.0, 3.0, 7);
        let vals = basis.values(&x);
        assert_eq!(vals.dim(), (8, 7));
        assert_eq!(vals[[5, 2]], basis.get(5).unwrap().value(x[2]));
    }
}
