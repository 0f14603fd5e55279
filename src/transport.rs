//! Closed-form Monge map between two univariate Gaussians.
//!
//! For μ = N(m₀, s₀²) and ν = N(m₁, s₁²) under the cost c(x, y) = (x − y)²,
//! the unique monotone optimal transport map is the affine function
//!
//! ```text
//! T(x) = m₁ + (s₁/s₀)(x − m₀)
//! ```
//!
//! and the optimal cost is W₂²(μ, ν) = (m₀ − m₁)² + (s₀ − s₁)².
//!
//! In one dimension the optimal map is always the monotone rearrangement
//! `F_ν⁻¹ ∘ F_μ`. [`GaussianMonge::quantile_map`] evaluates that
//! composition directly and serves as an independent cross-check of the
//! affine formula.

use crate::distributions::Normal;

/// The literal map formula `m1 + (s1/s0) * (x - m0)`.
///
/// No guard on `s0`: a zero source deviation divides by zero. Prefer
/// [`GaussianMonge`], whose [`Normal`] parameters are validated.
///
/// # Examples
/// ```
/// use monge_gauss::transport::monge_map;
/// assert_eq!(monge_map(0.5, 2.0, -1.0, 0.7, 0.5), -1.0);
/// ```
#[inline]
pub fn monge_map(m0: f64, s0: f64, m1: f64, s1: f64, x: f64) -> f64 {
    m1 + (s1 / s0) * (x - m0)
}

/// Optimal transport map pushing `source` onto `target`.
///
/// # Examples
/// ```
/// use monge_gauss::distributions::Normal;
/// use monge_gauss::transport::GaussianMonge;
///
/// let map = GaussianMonge::new(
///     Normal::new(0.5, 2.0).unwrap(),
///     Normal::new(-1.0, 0.7).unwrap(),
/// );
/// assert_eq!(map.apply(0.5), -1.0);
/// assert!((map.analytic_cost() - 3.94).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianMonge {
    source: Normal,
    target: Normal,
}

impl GaussianMonge {
    pub fn new(source: Normal, target: Normal) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &Normal {
        &self.source
    }

    pub fn target(&self) -> &Normal {
        &self.target
    }

    /// Ratio s₁/s₀. Always positive, so the map is strictly increasing.
    pub fn slope(&self) -> f64 {
        self.target.sigma() / self.source.sigma()
    }

    /// Value of the map at zero, m₁ − (s₁/s₀)·m₀.
    pub fn intercept(&self) -> f64 {
        self.target.mu() - self.slope() * self.source.mu()
    }

    /// Evaluates T(x) = m₁ + (s₁/s₀)(x − m₀).
    ///
    /// The operation order matches [`monge_map`], so both agree bit for bit.
    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        monge_map(
            self.source.mu(),
            self.source.sigma(),
            self.target.mu(),
            self.target.sigma(),
            x,
        )
    }

    /// Applies the map element-wise, preserving order.
    pub fn push_forward(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.apply(x)).collect()
    }

    /// Squared 2-Wasserstein distance (m₀ − m₁)² + (s₀ − s₁)².
    pub fn analytic_cost(&self) -> f64 {
        self.source.wasserstein2_squared(&self.target)
    }

    /// The optimal map in the opposite direction, from `target` to `source`.
    pub fn inverse(&self) -> GaussianMonge {
        GaussianMonge::new(self.target, self.source)
    }

    /// Monotone rearrangement F_ν⁻¹(F_μ(x)).
    ///
    /// Equal to [`apply`](Self::apply) up to the accuracy of the normal CDF
    /// and quantile approximations. Returns `None` when `x` is so far in the
    /// tails that F_μ(x) rounds to 0 or 1.
    pub fn quantile_map(&self, x: f64) -> Option<f64> {
        self.target.quantile(self.source.cdf(x))
    }
}
