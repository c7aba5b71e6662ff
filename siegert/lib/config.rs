//! Study configuration: everything needed to build the basis sets of a square
//! well and to evaluate completeness relations, time propagation, and strength
//! functions for a test function, stored as JSON.
//!
//! ```
//! use siegert::config::StudyConfig;
//!
//! let json = r#"{
//!     "potential": { "width": 3.0, "depth": 8.0 },
//!     "search": { "re_kmax": 20.0, "re_hk": 0.5, "im_kmax": 3.0, "im_hk": 0.1 },
//!     "continuum": { "kmax": 20.0, "hk": 0.05 },
//!     "test": { "kind": "gaussian", "sigma": 0.3, "center": 0.0 },
//!     "time": { "min": 0.0, "max": 1.0, "n": 11 },
//!     "space": { "min": -2.0, "max": 2.0, "n": 41 },
//!     "strength": { "min": 0.1, "max": 5.0, "n": 50 }
//! }"#;
//! let config: StudyConfig = serde_json::from_str(json).unwrap();
//! assert!(config.validate().is_ok());
//! assert!(config.berggren.is_none());
//! assert_eq!(config.output_dir.to_str(), Some("output"));
//! ```

use std::{ fs, path::{ Path, PathBuf } };
use ndarray as nd;
use serde::{ Deserialize, Serialize };
use crate::{
    basis::{ BasisResult, BasisSet, SearchParams },
    contour::Contour,
    error::ConfigError,
    potential::SWPotential,
    testfn::{ Gaussian, WavePacket },
};

pub type ConfigResult<T> = Result<T, ConfigError>;

fn def_output_dir() -> PathBuf { PathBuf::from("output") }

/// A uniform grid of `n` points spanning `[min, max]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl GridSpec {
    pub fn new(min: f64, max: f64, n: usize) -> Self { Self { min, max, n } }

    /// Generate the grid points.
    pub fn linspace(&self) -> nd::Array1<f64> {
        nd::Array1::linspace(self.min, self.max, self.n)
    }

    fn check(&self, name: &'static str, min: usize) -> ConfigResult<()> {
        (self.n >= min).then_some(())
            .ok_or(ConfigError::BadGrid { name, min, got: self.n })
    }
}

/// Continuum states on the midpoint grid `kmin + (j + ½) hk < kmax`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContinuumGrid {
    pub kmax: f64,
    pub hk: f64,
    #[serde(default)]
    pub kmin: f64,
    #[serde(default)]
    pub even_only: bool,
}

/// Continuum states along a Berggren contour, spaced by at most `hk`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BerggrenSpec {
    pub contour: Contour,
    pub hk: f64,
}

/// Full description of a study.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    pub potential: SWPotential,
    pub search: SearchParams,
    pub continuum: ContinuumGrid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub berggren: Option<BerggrenSpec>,
    pub test: WavePacket,
    pub time: GridSpec,
    pub space: GridSpec,
    /// Wavenumbers at which strength functions are evaluated.
    pub strength: GridSpec,
    #[serde(default = "def_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            potential: SWPotential::default(),
            search: SearchParams::new(30.0, 0.5, 3.0, 0.1),
            continuum: ContinuumGrid { kmax: 30.0, hk: 0.05, kmin: 0.0, even_only: false },
            berggren: Some(BerggrenSpec { contour: Contour::default(), hk: 0.05 }),
            test: Gaussian::new(0.3, 0.0, 0.0).into(),
            time: GridSpec::new(0.0, 2.0, 201),
            space: GridSpec::new(-3.0, 3.0, 301),
            strength: GridSpec::new(0.05, 10.0, 200),
            output_dir: def_output_dir(),
        }
    }
}

impl StudyConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn load<P>(path: P) -> ConfigResult<Self>
    where P: AsRef<Path>
    {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration to a JSON file.
    pub fn save<P>(&self, path: P) -> ConfigResult<()>
    where P: AsRef<Path>
    {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Check that the test function and all grids are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        self.test.check()?;
        self.time.check("time", 1)?;
        self.space.check("space", 2)?;
        self.strength.check("strength", 1)?;
        Ok(())
    }

    /// Find the Siegert states of the configured potential.
    pub fn siegert_basis(&self) -> BasisResult<BasisSet> {
        BasisSet::find_siegert_states(self.potential, &self.search)
    }

    /// Generate the real-axis continuum of the configured potential.
    pub fn continuum_basis(&self) -> BasisResult<BasisSet> {
        let ContinuumGrid { kmax, hk, kmin, even_only } = self.continuum;
        BasisSet::find_continuum_states(self.potential, kmax, hk, kmin, even_only)
    }

    /// Generate the contour continuum of the configured potential, if a
    /// Berggren contour is given.
    pub fn contour_basis(&self) -> BasisResult<Option<BasisSet>> {
        self.berggren.as_ref()
            .map(|b| BasisSet::on_contour(self.potential, &b.contour, b.hk))
            .transpose()
    }
}
