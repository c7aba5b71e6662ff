//! Composite Gauss-Legendre quadrature for complex-valued integrands.
//!
//! Nodes and weights are computed with the Golub-Welsch algorithm: the nodes
//! of the `n`-point rule are the eigenvalues of the symmetric tridiagonal
//! Jacobi matrix of the Legendre polynomials, and the weights are twice the
//! squared first components of the normalized eigenvectors.
//!
//! ```
//! use siegert::{ C64, quadrature::GaussLegendre };
//!
//! let gl = GaussLegendre::new(8).unwrap();
//! let val = gl.integrate(|x| C64::from(x.powi(5) - x), 0.0, 2.0, 1);
//! assert!((val - C64::from(64.0 / 6.0 - 2.0)).norm() < 1e-12);
//! ```

use ndarray as nd;
use ndarray_linalg::{ self as la, EighInto };
use num_complex::Complex64 as C64;
use crate::error::QuadratureError;

pub type QuadResult<T> = Result<T, QuadratureError>;

/// Default number of nodes per panel.
pub const DEF_ORDER: usize = 24;

/// An `n`-point Gauss-Legendre rule on the reference interval `[-1, 1]`.
#[derive(Clone, Debug)]
pub struct GaussLegendre {
    nodes: nd::Array1<f64>,
    weights: nd::Array1<f64>,
}

impl GaussLegendre {
    /// Compute the nodes and weights of the `n`-point rule.
    pub fn new(n: usize) -> QuadResult<Self> {
        if n == 0 { return Err(QuadratureError::BadOrder); }
        let mut J: nd::Array2<f64> = nd::Array2::zeros((n, n));
        (1..n).for_each(|j| {
            let jf = j as f64;
            let b = jf / (4.0 * jf * jf - 1.0).sqrt();
            J[[j, j - 1]] = b;
            J[[j - 1, j]] = b;
        });
        let (nodes, vecs): (nd::Array1<f64>, nd::Array2<f64>)
            = J.eigh_into(la::UPLO::Lower)?;
        let weights: nd::Array1<f64>
            = vecs.row(0).mapv(|v0| 2.0 * v0 * v0);
        Ok(Self { nodes, weights })
    }

    /// Number of nodes in the rule.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Get a reference to the nodes on `[-1, 1]`.
    pub fn get_nodes(&self) -> &nd::Array1<f64> { &self.nodes }

    /// Get a reference to the weights on `[-1, 1]`.
    pub fn get_weights(&self) -> &nd::Array1<f64> { &self.weights }

    /// Integrate `f` over `[a, b]`, split into `panels` equal sub-intervals.
    ///
    /// Returns zero if `b <= a`.
    pub fn integrate<F>(&self, mut f: F, a: f64, b: f64, panels: usize) -> C64
    where F: FnMut(f64) -> C64
    {
        if b <= a { return C64::from(0.0); }
        let panels = panels.max(1);
        let h = (b - a) / panels as f64;
        (0..panels)
            .map(|p| {
                let mid = a + (p as f64 + 0.5) * h;
                let sum: C64
                    = self.nodes.iter().zip(&self.weights)
                    .map(|(&xi, &wi)| wi * f(mid + 0.5 * h * xi))
                    .sum();
                0.5 * h * sum
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_two() {
        let gl = GaussLegendre::new(DEF_ORDER).unwrap();
        assert_eq!(gl.len(), DEF_ORDER);
        assert!((gl.get_weights().sum() - 2.0).abs() < 1e-13);
    }

    #[test]
    fn nodes_symmetric() {
        let gl = GaussLegendre::new(7).unwrap();
        let nodes = gl.get_nodes();
        let n = nodes.len();
        (0..n).for_each(|i| {
            assert!((nodes[i] + nodes[n - 1 - i]).abs() < 1e-13);
        });
        // the middle node of an odd rule is the origin
        assert!(nodes[3].abs() < 1e-13);
    }

    #[test]
    fn oscillatory_integrand() {
        let gl = GaussLegendre::new(DEF_ORDER).unwrap();
        let k = 25.0;
        let val = gl.integrate(|x| C64::cis(k * x), -1.0, 2.0, 20);
        let exact = (C64::cis(2.0 * k) - C64::cis(-k)) / (C64::i() * k);
        assert!((val - exact).norm() < 1e-12);
    }

    #[test]
    fn zero_order_rejected() {
        assert!(GaussLegendre::new(0).is_err());
    }
}
