//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned when constructing a [`SWPotential`][crate::potential::SWPotential]
/// from invalid parameters.
#[derive(Debug, Error)]
pub enum PotentialError {
    /// Returned when a non-positive (or non-finite) width is encountered.
    #[error("well width must be positive and finite; got {0}")]
    BadWidth(f64),

    /// Returned when a non-positive (or non-finite) depth is encountered.
    #[error("well depth must be positive and finite; got {0}")]
    BadDepth(f64),
}

/// Returned from functions in [`quadrature`][crate::quadrature].
#[derive(Debug, Error)]
pub enum QuadratureError {
    /// Returned when a Gauss-Legendre rule of order zero is requested.
    #[error("quadrature order must be greater than 0")]
    BadOrder,

    /// [`LinalgError`].
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

/// Returned from functions in [`roots`][crate::roots].
#[derive(Debug, Error)]
pub enum RootError {
    /// Returned when a non-positive `epsilon` value is encountered.
    #[error("epsilon values must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// Returned when a non-positive `maxiters` value is encountered.
    #[error("maxiters must be greater than 0; got {0}")]
    BadMaxiters(usize),

    /// Returned when a bracketing search is given an interval whose endpoints
    /// do not differ in sign.
    #[error("roots::solve_bracket: interval ({0}, {1}) does not bracket a root")]
    BadBracket(f64, f64),

    /// Returned when a non-positive sampling step is encountered.
    #[error("sampling step must be positive and finite; got {0}")]
    BadStep(f64),

    /// Returned when an iterative search fails to converge within `maxiters`
    /// iterations.
    #[error("roots::secant_complex: search started at {re:+.6e}{im:+.6e}i failed to converge")]
    NoConvergence { re: f64, im: f64 },
}

impl RootError {
    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        (maxiters != 0).then_some(()).ok_or(Self::BadMaxiters(maxiters))
    }

    pub(crate) fn check_step(step: f64) -> Result<(), Self> {
        (step > 0.0 && step.is_finite()).then_some(()).ok_or(Self::BadStep(step))
    }
}

/// Returned from functions in [`contour`][crate::contour].
#[derive(Debug, Error)]
pub enum ContourError {
    /// Returned when fewer than two vertices are given.
    #[error("a contour needs at least 2 vertices; got {0}")]
    TooFewVertices(usize),

    /// Returned when the first vertex is not the origin.
    #[error("a contour must start at k = 0")]
    BadStart,

    /// Returned when the last vertex is not on the positive real axis.
    #[error("a contour must end on the positive real axis; got {re:+.3e}{im:+.3e}i")]
    BadEnd { re: f64, im: f64 },

    /// Returned when the contour passes above the real axis.
    #[error("a contour must stay in the lower half of the complex k plane")]
    UpperHalfPlane,

    /// Returned when a non-positive (or non-finite) node spacing is
    /// encountered.
    #[error("contour::Contour::discretize: node spacing must be positive and finite; got {0}")]
    BadStep(f64),
}

impl ContourError {
    pub(crate) fn check_step(hk: f64) -> Result<(), Self> {
        (hk > 0.0 && hk.is_finite()).then_some(()).ok_or(Self::BadStep(hk))
    }
}

/// Returned when a test function is given unusable parameters.
#[derive(Debug, Error)]
pub enum TestFunctionError {
    /// Returned when a Gaussian width is non-positive or non-finite.
    #[error("gaussian sigma must be positive and finite; got {0}")]
    BadSigma(f64),

    /// Returned when a rectangular width is non-positive or non-finite.
    #[error("rectangular width must be positive and finite; got {0}")]
    BadWidth(f64),

    /// Returned when any other parameter is non-finite.
    #[error("test function parameter `{0}` must be finite; got {1}")]
    NonFinite(&'static str, f64),
}

impl TestFunctionError {
    pub(crate) fn check_finite(name: &'static str, x: f64) -> Result<(), Self> {
        x.is_finite().then_some(()).ok_or(Self::NonFinite(name, x))
    }
}

/// Returned from [`BasisSet`][crate::basis::BasisSet] construction,
/// manipulation, and storage.
#[derive(Debug, Error)]
pub enum BasisError {
    /// Returned when combining states or basis sets defined for different
    /// potentials.
    #[error("cannot combine states of different potentials")]
    PotentialMismatch,

    /// Returned when a wavenumber grid is ill-defined.
    #[error("bad wavenumber grid: kmin = {kmin}, kmax = {kmax}, hk = {hk}")]
    BadGrid { kmin: f64, kmax: f64, hk: f64 },

    /// Returned when Siegert search bounds are ill-defined.
    #[error("bad search window: {0}")]
    BadSearch(&'static str),

    /// Returned when a tabulated basis cannot be rebuilt.
    #[error("bad state table entry {index}: {msg}")]
    BadTable { index: usize, msg: String },

    /// [`RootError`]
    #[error("root-finding error: {0}")]
    Root(#[from] RootError),

    /// [`ContourError`]
    #[error("contour error: {0}")]
    Contour(#[from] ContourError),

    /// [`QuadratureError`]
    #[error("quadrature error: {0}")]
    Quadrature(#[from] QuadratureError),

    /// I/O error while reading or writing a state table.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed state table.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Returned from time-propagation and strength-function routines.
#[derive(Debug, Error)]
pub enum PropagationError {
    /// Returned when an empty coordinate grid is passed.
    #[error("{0} grid must not be empty")]
    EmptyGrid(&'static str),

    /// Returned when an expansion has no states to work with.
    #[error("expansion has no states of the required kinds")]
    EmptyBasis,

    /// Returned when a non-positive wavenumber is passed to a strength
    /// function.
    #[error("strength functions are defined for k > 0; got {0}")]
    BadWavenumber(f64),
}

impl PropagationError {
    pub(crate) fn check_grid<S, A>(
        name: &'static str,
        a: &nd::ArrayBase<S, nd::Ix1>,
    ) -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        (!a.is_empty()).then_some(()).ok_or(Self::EmptyGrid(name))
    }
}

/// Returned when loading, saving, or validating a
/// [`StudyConfig`][crate::config::StudyConfig].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Returned when a grid specification has fewer than the required number
    /// of points.
    #[error("grid '{name}' needs at least {min} points; got {got}")]
    BadGrid { name: &'static str, min: usize, got: usize },

    /// [`TestFunctionError`]
    #[error("test function error: {0}")]
    TestFunction(#[from] TestFunctionError),
}
