//! The univariate normal distribution.
//!
//! [`Normal`] carries validated parameters, analytical moments, CDF and
//! quantile evaluation, and implements [`rand_distr::Distribution`] so it
//! can be sampled with any [`rand::Rng`].
//!
//! | Quantity | Value |
//! |---|---|
//! | Mean | μ |
//! | Variance | σ² |
//! | W₂²(N(μ₀,σ₀²), N(μ₁,σ₁²)) | (μ₀−μ₁)² + (σ₀−σ₁)² |

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use thiserror::Error;

use crate::special;

/// Error type for invalid distribution parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    /// Parameters violate distribution constraints.
    #[error("invalid distribution parameters: {0}")]
    InvalidParameters(String),
}

/// Normal (Gaussian) distribution N(μ, σ²).
///
/// # Mathematical Definition
/// - PDF: φ(x) = (1/(σ√(2π))) exp(−(x−μ)²/(2σ²))
/// - CDF: Φ((x−μ)/σ)
/// - Mean: μ
/// - Variance: σ²
///
/// # Examples
/// ```
/// use monge_gauss::distributions::Normal;
/// let n = Normal::new(0.5, 2.0).unwrap();
/// assert_eq!(n.mean(), 0.5);
/// assert_eq!(n.variance(), 4.0);
/// assert!(Normal::new(0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Creates a new normal distribution N(μ, σ).
    ///
    /// # Errors
    /// Returns `Err` if `sigma ≤ 0` or parameters are not finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, DistributionError> {
        if !mu.is_finite() || !sigma.is_finite() || sigma <= 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Normal requires finite μ and σ > 0, got μ={mu}, σ={sigma}"
            )));
        }
        Ok(Self { mu, sigma })
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn mean(&self) -> f64 {
        self.mu
    }

    pub fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    pub fn std_dev(&self) -> f64 {
        self.sigma
    }

    /// PDF: (1/σ) φ((x−μ)/σ).
    pub fn pdf(&self, x: f64) -> f64 {
        special::standard_normal_pdf((x - self.mu) / self.sigma) / self.sigma
    }

    /// CDF: Φ((x−μ)/σ).
    pub fn cdf(&self, x: f64) -> f64 {
        special::standard_normal_cdf((x - self.mu) / self.sigma)
    }

    /// Inverse CDF (quantile): μ + σ·Φ⁻¹(p).
    ///
    /// Returns `None` if `p` is outside `(0, 1)`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(p > 0.0 && p < 1.0) {
            return None;
        }
        Some(self.mu + self.sigma * special::inverse_normal_cdf(p))
    }

    /// Squared 2-Wasserstein distance to `other`: (μ₀−μ₁)² + (σ₀−σ₁)².
    ///
    /// Closed form for two univariate Gaussians under squared-Euclidean cost.
    pub fn wasserstein2_squared(&self, other: &Normal) -> f64 {
        let dm = self.mu - other.mu;
        let ds = self.sigma - other.sigma;
        dm * dm + ds * ds
    }
}

impl Distribution<f64> for Normal {
    /// Draws `μ + σ·z` with `z` from the Ziggurat standard normal sampler.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = StandardNormal.sample(rng);
        self.mu + self.sigma * z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_normal_moments() {
        let n = Normal::new(-1.0, 0.7).unwrap();
        assert_eq!(n.mean(), -1.0);
        assert_eq!(n.std_dev(), 0.7);
        assert!((n.variance() - 0.49).abs() < 1e-15);
    }

    #[test]
    fn test_normal_invalid() {
        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(0.0, -1.0).is_err());
        assert!(Normal::new(f64::NAN, 1.0).is_err());
        assert!(Normal::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = Normal::new(0.0, 0.0).unwrap_err();
        assert!(err.to_string().starts_with("invalid distribution parameters"));
    }

    #[test]
    fn test_normal_cdf_and_pdf() {
        let n = Normal::new(0.5, 2.0).unwrap();
        assert!((n.cdf(0.5) - 0.5).abs() < 1e-7);
        assert!((n.pdf(0.5) - 0.398_942_280_401_432_7 / 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_normal_quantile() {
        let n = Normal::new(10.0, 3.0).unwrap();
        assert_eq!(n.quantile(0.5), Some(10.0));
        assert_eq!(n.quantile(0.0), None);
        assert_eq!(n.quantile(1.0), None);
        assert_eq!(n.quantile(f64::NAN), None);
        let q = n.quantile(0.975).unwrap();
        assert!((q - (10.0 + 3.0 * 1.959_963_984_540_054)).abs() < 1e-7);
    }

    #[test]
    fn test_wasserstein_default_pair() {
        let mu = Normal::new(0.5, 2.0).unwrap();
        let nu = Normal::new(-1.0, 0.7).unwrap();
        assert!((mu.wasserstein2_squared(&nu) - 3.94).abs() < 1e-12);
        assert_eq!(mu.wasserstein2_squared(&mu), 0.0);
    }

    #[test]
    fn test_sample_deterministic() {
        let n = Normal::new(0.5, 2.0).unwrap();
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..100 {
            assert_eq!(n.sample(&mut a).to_bits(), n.sample(&mut b).to_bits());
        }
    }
}
