//! Empirical validation of a pushforward against analytic predictions.
//!
//! Given source samples `X` and their images `Y = T(X)`, [`validate`]
//! summarises both sequences, computes the empirical quadratic transport
//! cost `mean((X − Y)²)` and pairs everything with the closed-form values
//! of the map. Standard deviations use the population convention
//! (divide by `n`).
//!
//! Agreement is only asymptotic, so the report also carries standard
//! errors and [`ValidationReport::within_tolerance`] checks a band of
//! `k` standard errors rather than exact equality.

use std::fmt;

use crate::error::{Result, TransportError};
use crate::stats::{self, StdDevConvention};
use crate::transport::GaussianMonge;

/// Mean and population standard deviation of one sample sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    fn of(data: &[f64], which: &'static str) -> Result<Self> {
        if data.is_empty() {
            return Err(TransportError::EmptySample);
        }
        let non_finite = || TransportError::NonFiniteSample { which };
        Ok(Self {
            mean: stats::mean(data).ok_or_else(non_finite)?,
            std_dev: stats::std_dev_with(data, StdDevConvention::default())
                .ok_or_else(non_finite)?,
        })
    }
}

/// Everything the validator measured, plus the analytic reference values.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub samples: usize,
    pub source: Summary,
    pub pushforward: Summary,
    pub target_mean: f64,
    pub target_std: f64,
    pub empirical_cost: f64,
    pub analytic_cost: f64,
    /// Population standard deviation of the per-sample squared differences.
    pub cost_spread: f64,
}

impl ValidationReport {
    /// Standard error of `mean(Y)`: s/√n.
    pub fn mean_std_error(&self) -> f64 {
        self.pushforward.std_dev / (self.samples as f64).sqrt()
    }

    /// Large-sample standard error of `std(Y)` for Gaussian data: s/√(2n).
    pub fn std_dev_std_error(&self) -> f64 {
        self.pushforward.std_dev / (2.0 * self.samples as f64).sqrt()
    }

    /// Standard error of the empirical cost.
    pub fn cost_std_error(&self) -> f64 {
        self.cost_spread / (self.samples as f64).sqrt()
    }

    pub fn mean_error(&self) -> f64 {
        (self.pushforward.mean - self.target_mean).abs()
    }

    pub fn std_dev_error(&self) -> f64 {
        (self.pushforward.std_dev - self.target_std).abs()
    }

    pub fn cost_error(&self) -> f64 {
        (self.empirical_cost - self.analytic_cost).abs()
    }

    /// True when mean, std and cost of the pushforward all lie within `k`
    /// standard errors of their analytic values.
    pub fn within_tolerance(&self, k: f64) -> bool {
        self.mean_error() <= k * self.mean_std_error()
            && self.std_dev_error() <= k * self.std_dev_std_error()
            && self.cost_error() <= k * self.cost_std_error()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Empirical mean(X), std(X): {:?} {:?}",
            self.source.mean, self.source.std_dev
        )?;
        writeln!(
            f,
            "Empirical mean(Y), std(Y): {:?} {:?}",
            self.pushforward.mean, self.pushforward.std_dev
        )?;
        writeln!(
            f,
            "Target mean(Y), std(Y): {:?} {:?}",
            self.target_mean, self.target_std
        )?;
        writeln!(f, "Empirical cost: {:?}", self.empirical_cost)?;
        write!(f, "Analytic cost: {:?}", self.analytic_cost)
    }
}

/// Compares `ys`, the image of `xs` under `map`, with the analytic values.
///
/// # Errors
/// - [`TransportError::EmptySample`] if either sequence is empty.
/// - [`TransportError::LengthMismatch`] if the lengths differ.
/// - [`TransportError::NonFiniteSample`] if any value is NaN or infinite.
///
/// # Examples
/// ```
/// use monge_gauss::distributions::Normal;
/// use monge_gauss::transport::GaussianMonge;
/// use monge_gauss::validate::validate;
///
/// let map = GaussianMonge::new(Normal::new(0.0, 1.0)?, Normal::new(1.0, 1.0)?);
/// let xs = [-1.0, 0.0, 1.0];
/// let ys = map.push_forward(&xs);
/// let report = validate(&map, &xs, &ys)?;
/// assert_eq!(report.empirical_cost, 1.0);
/// assert_eq!(report.analytic_cost, 1.0);
/// # Ok::<(), monge_gauss::TransportError>(())
/// ```
pub fn validate(map: &GaussianMonge, xs: &[f64], ys: &[f64]) -> Result<ValidationReport> {
    if xs.len() != ys.len() {
        return Err(TransportError::LengthMismatch {
            source_len: xs.len(),
            target_len: ys.len(),
        });
    }
    let source = Summary::of(xs, "source")?;
    let pushforward = Summary::of(ys, "pushforward")?;

    let overflow = || TransportError::NonFiniteSample {
        which: "squared difference",
    };
    let empirical_cost = stats::mean_squared_difference(xs, ys).ok_or_else(overflow)?;
    let squared = stats::squared_differences(xs, ys);
    let cost_spread =
        stats::std_dev_with(&squared, StdDevConvention::default()).ok_or_else(overflow)?;

    Ok(ValidationReport {
        samples: xs.len(),
        source,
        pushforward,
        target_mean: map.target().mean(),
        target_std: map.target().std_dev(),
        empirical_cost,
        analytic_cost: map.analytic_cost(),
        cost_spread,
    })
}
