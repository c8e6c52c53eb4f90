// Kronrod extensions of Gauss-Legendre rules

use crate::quadrature::gauss_legendre::legendre_nodes;
use crate::utils::error::{IntegrateError, Result};

/// Largest rule [`KronrodRule::new`] will build
pub const MAX_POINTS: usize = 513;

const QL_ITERATIONS: usize = 60;

/// A `2n + 1` point Kronrod rule on `[-1, 1]` with its embedded `n` point
/// Gauss-Legendre rule
///
/// The Kronrod Jacobi matrix comes from Laurie's algorithm and is diagonalised
/// with implicit QL (Golub-Welsch). The Gauss nodes are the odd indices of
/// [`nodes`](Self::nodes); every other entry of
/// [`gauss_weights`](Self::gauss_weights) is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct KronrodRule {
    nodes: Vec<f64>,
    kronrod_weights: Vec<f64>,
    gauss_weights: Vec<f64>,
}

impl KronrodRule {
    /// Build the rule with `points` nodes, which must be odd and at least 3
    pub fn new(points: usize) -> Result<Self> {
        if points < 3 || points % 2 == 0 || points > MAX_POINTS {
            return Err(IntegrateError::UnsupportedOrder(points));
        }

        let n = points / 2;
        let (diagonal, recurrence) = kronrod_jacobi(n);
        if recurrence.iter().any(|&b| !b.is_finite() || b <= 0.0) {
            return Err(IntegrateError::UnsupportedOrder(points));
        }
        let (mut nodes, mut kronrod_weights) =
            golub_welsch(&diagonal, &recurrence).ok_or(IntegrateError::UnsupportedOrder(points))?;

        for i in 0..n {
            let j = points - 1 - i;
            let x = 0.5 * (nodes[j] - nodes[i]);
            let w = 0.5 * (kronrod_weights[i] + kronrod_weights[j]);
            nodes[i] = -x;
            nodes[j] = x;
            kronrod_weights[i] = w;
            kronrod_weights[j] = w;
        }
        nodes[n] = 0.0;

        // Newton-polished Gauss nodes replace their eigenvalue counterparts
        let (gauss_nodes, weights) = legendre_nodes(n);
        let mut gauss_weights = vec![0.0; points];
        for (i, (x, w)) in gauss_nodes.into_iter().zip(weights).enumerate() {
            nodes[2 * i + 1] = x;
            gauss_weights[2 * i + 1] = w;
        }

        Ok(Self {
            nodes,
            kronrod_weights,
            gauss_weights,
        })
    }

    pub fn points(&self) -> usize {
        self.nodes.len()
    }

    /// Ascending nodes on `[-1, 1]`
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn kronrod_weights(&self) -> &[f64] {
        &self.kronrod_weights
    }

    pub fn gauss_weights(&self) -> &[f64] {
        &self.gauss_weights
    }
}

/// Monic Legendre recurrence coefficient `b_k`
fn legendre_b(k: usize) -> f64 {
    if k == 0 {
        return 2.0;
    }
    let k = k as f64;
    k * k / (4.0 * k * k - 1.0)
}

/// Recurrence coefficients `(a, b)` of the `2n + 1` point Kronrod rule
///
/// Laurie, "Calculation of Gauss-Kronrod quadrature rules", Math. Comp. 66 (1997).
fn kronrod_jacobi(n: usize) -> (Vec<f64>, Vec<f64>) {
    let size = 2 * n + 1;
    // the Legendre diagonal is zero
    let mut a = vec![0.0; size];
    let mut b = vec![0.0; size];
    for (k, bk) in b.iter_mut().enumerate().take((3 * n + 1) / 2 + 1) {
        *bk = legendre_b(k);
    }

    let mut s = vec![0.0; n / 2 + 2];
    let mut t = vec![0.0; n / 2 + 2];
    t[1] = b[n + 1];

    for m in 0..n.saturating_sub(1) {
        let mut u = 0.0;
        for k in (0..=(m + 1) / 2).rev() {
            let l = m - k;
            u += (a[k + n + 1] - a[l]) * t[k + 1] + b[k + n + 1] * s[k] - b[l] * s[k + 1];
            s[k + 1] = u;
        }
        std::mem::swap(&mut s, &mut t);
    }

    for j in (0..=n / 2).rev() {
        s[j + 1] = s[j];
    }

    for m in n.saturating_sub(1)..(2 * n).saturating_sub(2) {
        let mut u = 0.0;
        let mut j = 0;
        for k in (m + 1 - n)..=((m - 1) / 2) {
            let l = m - k;
            j = n - 1 - l;
            u += -(a[k + n + 1] - a[l]) * t[j + 1] - b[k + n + 1] * s[j + 1] + b[l] * s[j + 2];
            s[j + 1] = u;
        }
        if m % 2 == 0 {
            let k = m / 2;
            a[k + n + 1] = a[k] + (s[j + 1] - b[k + n + 1] * s[j + 2]) / t[j + 2];
        } else {
            let k = (m + 1) / 2;
            b[k + n + 1] = s[j + 1] / s[j + 2];
        }
        std::mem::swap(&mut s, &mut t);
    }

    a[2 * n] = a[n - 1] - b[2 * n] * s[1] / t[1];
    (a, b)
}

/// Nodes and weights of the symmetric tridiagonal Jacobi matrix with diagonal
/// `diagonal` and squared off-diagonal `recurrence[1..]`, sorted by node
///
/// Only the first component of each eigenvector is tracked. `None` when QL
/// fails to converge.
fn golub_welsch(diagonal: &[f64], recurrence: &[f64]) -> Option<(Vec<f64>, Vec<f64>)> {
    let size = diagonal.len();
    let mut d = diagonal.to_vec();
    let mut e: Vec<f64> = recurrence[1..]
        .iter()
        .map(|b| b.sqrt())
        .chain(std::iter::once(0.0))
        .collect();
    let mut z = vec![0.0; size];
    z[0] = 1.0;

    for l in 0..size {
        let mut iterations = 0;
        loop {
            let mut m = l;
            while m + 1 < size {
                let scale = d[m].abs() + d[m + 1].abs();
                if e[m].abs() <= f64::EPSILON * scale {
                    break;
                }
                m += 1;
            }
            if m == l {
                break;
            }

            iterations += 1;
            if iterations > QL_ITERATIONS {
                return None;
            }

            let mut g = (d[l + 1] - d[l]) / (2.0 * e[l]);
            let mut r = g.hypot(1.0);
            g = d[m] - d[l] + e[l] / (g + r.copysign(g));
            let (mut s, mut c, mut p) = (1.0, 1.0, 0.0);
            let mut underflow = false;

            for i in (l..m).rev() {
                let f = s * e[i];
                let h = c * e[i];
                r = f.hypot(g);
                e[i + 1] = r;
                if r == 0.0 {
                    d[i + 1] -= p;
                    e[m] = 0.0;
                    underflow = true;
                    break;
                }
                s = f / r;
                c = g / r;
                g = d[i + 1] - p;
                r = (d[i] - g) * s + 2.0 * c * h;
                p = s * r;
                d[i + 1] = g + p;
                g = c * r - h;

                let upper = z[i + 1];
                z[i + 1] = s * z[i] + c * upper;
                z[i] = c * z[i] - s * upper;
            }

            if underflow {
                continue;
            }
            d[l] -= p;
            e[l] = g;
            e[m] = 0.0;
        }
    }

    let mut pairs: Vec<(f64, f64)> = d
        .into_iter()
        .zip(z.into_iter().map(|v| recurrence[0] * v * v))
        .collect();
    pairs.sort_by(|x, y| x.0.total_cmp(&y.0));
    Some(pairs.into_iter().unzip())
}
