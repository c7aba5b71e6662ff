//! Berggren contours in the complex wavenumber plane.
//!
//! A contour is a polyline starting at `k = 0`, dipping into the fourth
//! quadrant and returning to the positive real axis, after which it follows
//! the real axis up to a cutoff. Resonant states lying between the contour and
//! the real axis are *enclosed* and enter Berggren expansions explicitly,
//! alongside continuum states sampled along the contour.
//!
//! ```
//! use siegert::{ C64, contour::Contour };
//!
//! let contour = Contour::triangle(C64::new(2.0, -1.0), 4.0, 20.0).unwrap();
//! assert!(contour.encloses(C64::new(2.0, -0.5)));
//! assert!(!contour.encloses(C64::new(2.0, -1.5)));
//! assert!(!contour.encloses(C64::new(6.0, -0.1)));
//! ```

use num_complex::Complex64 as C64;
use serde::{ Deserialize, Serialize };
use crate::error::ContourError;

pub type ContourResult<T> = Result<T, ContourError>;

// tolerance on the placement of the endpoints
const ENDPOINT_TOL: f64 = 1e-12;

/// A piecewise-linear path in the lower half of the complex `k` plane, from
/// the origin to a point on the positive real axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawContour", into = "RawContour")]
pub struct Contour {
    vertices: Vec<C64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawContour {
    vertices: Vec<(f64, f64)>,
}

impl TryFrom<RawContour> for Contour {
    type Error = ContourError;

    fn try_from(raw: RawContour) -> ContourResult<Self> {
        Self::new(
            raw.vertices.into_iter().map(|(re, im)| C64::new(re, im)).collect()
        )
    }
}

impl From<Contour> for RawContour {
    fn from(contour: Contour) -> Self {
        Self {
            vertices: contour.vertices.into_iter().map(|k| (k.re, k.im)).collect()
        }
    }
}

/// The trapezoid `0 → 0.5 - 1.5i → 7 - 1.5i → 8 → 30`.
impl Default for Contour {
    fn default() -> Self {
        Self {
            vertices: vec![
                C64::from(0.0),
                C64::new(0.5, -1.5),
                C64::new(7.0, -1.5),
                C64::from(8.0),
                C64::from(30.0),
            ]
        }
    }
}

impl Contour {
    /// Create a new contour from its vertices.
    ///
    /// The first vertex must be the origin, the last must lie on the positive
    /// real axis, and no vertex may lie above the real axis.
    pub fn new(vertices: Vec<C64>) -> ContourResult<Self> {
        let n = vertices.len();
        if n < 2 { return Err(ContourError::TooFewVertices(n)); }
        if vertices[0].norm() > ENDPOINT_TOL { return Err(ContourError::BadStart); }
        let last = vertices[n - 1];
        if last.im.abs() > ENDPOINT_TOL || last.re <= 0.0 {
            return Err(ContourError::BadEnd { re: last.re, im: last.im });
        }
        if vertices.iter().any(|k| k.im > ENDPOINT_TOL) {
            return Err(ContourError::UpperHalfPlane);
        }
        let mut vertices = vertices;
        vertices[0] = C64::from(0.0);
        vertices[n - 1] = C64::from(last.re);
        Ok(Self { vertices })
    }

    /// Create the triangular contour `0 → apex → k_back → kmax`.
    ///
    /// The apex must lie strictly below the real axis and `k_back` must lie in
    /// `(0, kmax]`.
    pub fn triangle(apex: C64, k_back: f64, kmax: f64) -> ContourResult<Self> {
        if apex.im >= 0.0 { return Err(ContourError::UpperHalfPlane); }
        if !(k_back > 0.0 && k_back <= kmax) {
            return Err(ContourError::BadEnd { re: k_back, im: 0.0 });
        }
        let mut vertices = vec![C64::from(0.0), apex, C64::from(k_back)];
        if kmax > k_back { vertices.push(C64::from(kmax)); }
        Self::new(vertices)
    }

    /// Get the vertices.
    pub fn vertices(&self) -> &[C64] { &self.vertices }

    /// Get the real cutoff at which the contour ends.
    pub fn kmax(&self) -> f64 { self.vertices[self.vertices.len() - 1].re }

    /// Get the total length of the contour.
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| (b - a).norm()).sum()
    }

    fn segments(&self) -> impl Iterator<Item = (C64, C64)> + '_ {
        self.vertices.iter().zip(self.vertices.iter().skip(1))
            .map(|(&a, &b)| (a, b))
    }

    /// Discretize the contour into `(node, weight)` pairs.
    ///
    /// Each segment is split into the smallest number of equal pieces no
    /// longer than `hk`; nodes sit at the piece midpoints and weights are the
    /// (complex) piece vectors, so that `Σ w f(k) ≈ ∫ f(k) dk` along the
    /// contour. `hk` must be positive and finite.
    pub fn discretize(&self, hk: f64) -> ContourResult<Vec<(C64, C64)>> {
        ContourError::check_step(hk)?;
        let nodes: Vec<(C64, C64)>
            = self.segments()
            .filter(|(a, b)| (b - a).norm() > 0.0)
            .flat_map(|(a, b)| {
                let n = ((b - a).norm() / hk).ceil().max(1.0) as usize;
                let step = (b - a) / n as f64;
                (0..n).map(move |j| (a + (j as f64 + 0.5) * step, step))
            })
            .collect();
        Ok(nodes)
    }

    /// Return `true` if `k` lies strictly between the contour and the real
    /// axis.
    pub fn encloses(&self, k: C64) -> bool {
        if k.im >= 0.0 { return false; }
        // ray casting toward +Re over the polygon closed along the real axis
        let n = self.vertices.len();
        let mut inside = false;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            if (a.im > k.im) != (b.im > k.im) {
                let x = a.re + (k.im - a.im) * (b.re - a.re) / (b.im - a.im);
                if k.re < x { inside = !inside; }
            }
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_contours() {
        assert!(matches!(
            Contour::new(vec![C64::from(0.0)]),
            Err(ContourError::TooFewVertices(1))
        ));
        assert!(matches!(
            Contour::new(vec![C64::from(1.0), C64::from(2.0)]),
            Err(ContourError::BadStart)
        ));
        assert!(matches!(
            Contour::new(vec![C64::from(0.0), C64::new(1.0, -1.0)]),
            Err(ContourError::BadEnd { .. })
        ));
        assert!(matches!(
            Contour::new(vec![C64::from(0.0), C64::new(1.0, 1.0), C64::from(2.0)]),
            Err(ContourError::UpperHalfPlane)
        ));
        assert!(Contour::triangle(C64::new(1.0, -1.0), 5.0, 3.0).is_err());
    }

    #[test]
    fn weights_integrate_along_path() {
        let contour = Contour::triangle(C64::new(1.5, -0.8), 3.0, 10.0).unwrap();
        let nodes = contour.discretize(0.05).unwrap();
        // ∫ dk from 0 to kmax is path-independent
        let total: C64 = nodes.iter().map(|(_, w)| *w).sum();
        assert!((total - 10.0).norm() < 1e-12);
        // midpoint rule is exact for linear integrands
        let first: C64 = nodes.iter().map(|(k, w)| k * w).sum();
        assert!((first - 50.0).norm() < 1e-10);
        let len: f64 = nodes.iter().map(|(_, w)| w.norm()).sum();
        assert!((len - contour.length()).abs() < 1e-12);
        assert!(nodes.iter().all(|(k, _)| k.im <= 0.0));
    }

    #[test]
    fn analytic_integral_along_contour() {
        // ∫ k² dk = kmax³ / 3 regardless of path; midpoint error is O(hk²)
        let contour = Contour::triangle(C64::new(2.0, -1.0), 4.0, 6.0).unwrap();
        let val: C64 = contour.discretize(0.01).unwrap().into_iter()
            .map(|(k, w)| k * k * w)
            .sum();
        assert!((val - 72.0).norm() < 1e-3);
    }

    #[test]
    fn bad_spacing_rejected() {
        let contour = Contour::default();
        for hk in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(contour.discretize(hk), Err(ContourError::BadStep(_))));
        }
    }

    #[test]
    fn enclosure() {
        let contour = Contour::new(vec![
            C64::from(0.0),
            C64::new(1.0, -2.0),
            C64::new(4.0, -2.0),
            C64::from(5.0),
            C64::from(8.0),
        ]).unwrap();
        assert!(contour.encloses(C64::new(2.0, -1.0)));
        assert!(contour.encloses(C64::new(4.2, -1.0)));
        assert!(!contour.encloses(C64::new(2.0, -2.5)));
        assert!(!contour.encloses(C64::new(6.0, -0.5)));
        assert!(!contour.encloses(C64::new(2.0, 0.0)));
        assert!(!contour.encloses(C64::new(-0.5, -0.1)));
    }

    #[test]
    fn json_round_trip_validates() {
        let contour = Contour::triangle(C64::new(2.0, -1.0), 4.0, 20.0).unwrap();
        let json = serde_json::to_string(&contour).unwrap();
        let back: Contour = serde_json::from_str(&json).unwrap();
        assert_eq!(back, contour);
        let bad: Result<Contour, _>
            = serde_json::from_str(r#"{"vertices": [[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]}"#);
        assert!(bad.is_err());
    }
}
