//! The end-to-end sampling experiment.
//!
//! construct distributions → sample X ~ μ → Y = T(X) → validate.

use tracing::{debug, info, warn};

use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::random::{create_rng, sample_iid};
use crate::validate::{validate, ValidationReport};

/// Number of standard errors within which the pushforward is expected
/// to match the target.
pub const DEFAULT_TOLERANCE_SIGMAS: f64 = 3.0;

/// Runs one experiment and returns its report.
///
/// Deterministic for a fixed `config`: the same seed always yields the
/// same report.
///
/// # Errors
/// - Invalid Gaussian parameters.
/// - `samples == 0`, reported as [`TransportError::EmptySample`](crate::TransportError::EmptySample).
pub fn run(config: &ExperimentConfig) -> Result<ValidationReport> {
    config.validate()?;
    let map = config.map()?;
    info!(
        m0 = config.source_mean,
        s0 = config.source_std,
        m1 = config.target_mean,
        s1 = config.target_std,
        n = config.samples,
        seed = config.seed,
        "Starting transport experiment"
    );

    let mut rng = create_rng(config.seed);
    let xs = sample_iid(map.source(), config.samples, &mut rng);
    debug!(n = xs.len(), "Sampled source distribution");

    let ys = map.push_forward(&xs);
    debug!(slope = map.slope(), intercept = map.intercept(), "Pushed samples forward");

    let report = validate(&map, &xs, &ys)?;
    debug!(
        mean_error = report.mean_error(),
        std_error = report.std_dev_error(),
        cost_error = report.cost_error(),
        "Validated pushforward"
    );

    if !report.within_tolerance(DEFAULT_TOLERANCE_SIGMAS) {
        warn!(
            k = DEFAULT_TOLERANCE_SIGMAS,
            "Pushforward statistics fall outside the expected band"
        );
    }
    info!(
        empirical_cost = report.empirical_cost,
        analytic_cost = report.analytic_cost,
        "Experiment complete"
    );
    Ok(report)
}

/// Absolute errors of one run, paired with their standard errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceRow {
    pub samples: usize,
    pub mean_error: f64,
    pub mean_std_error: f64,
    pub std_dev_error: f64,
    pub std_dev_std_error: f64,
    pub cost_error: f64,
    pub cost_std_error: f64,
}

impl From<&ValidationReport> for ConvergenceRow {
    fn from(report: &ValidationReport) -> Self {
        Self {
            samples: report.samples,
            mean_error: report.mean_error(),
            mean_std_error: report.mean_std_error(),
            std_dev_error: report.std_dev_error(),
            std_dev_std_error: report.std_dev_std_error(),
            cost_error: report.cost_error(),
            cost_std_error: report.cost_std_error(),
        }
    }
}

/// Repeats the experiment at each sample size in `sizes`, keeping every
/// other parameter, including the seed, from `config`.
pub fn convergence_sweep(config: &ExperimentConfig, sizes: &[usize]) -> Result<Vec<ConvergenceRow>> {
    sizes
        .iter()
        .map(|&samples| {
            let config = ExperimentConfig {
                samples,
                ..config.clone()
            };
            run(&config).map(|report| ConvergenceRow::from(&report))
        })
        .collect()
}

/// Renders sweep rows as a fixed-width table.
pub fn format_sweep(rows: &[ConvergenceRow]) -> String {
    let mut out = format!(
        "{:>10}  {:>12} {:>12}  {:>12} {:>12}  {:>12} {:>12}\n",
        "n", "|dmean|", "se(mean)", "|dstd|", "se(std)", "|dcost|", "se(cost)"
    );
    for row in rows {
        out.push_str(&format!(
            "{:>10}  {:>12.3e} {:>12.3e}  {:>12.3e} {:>12.3e}  {:>12.3e} {:>12.3e}\n",
            row.samples,
            row.mean_error,
            row.mean_std_error,
            row.std_dev_error,
            row.std_dev_std_error,
            row.cost_error,
            row.cost_std_error,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransportError;

    fn small_config() -> ExperimentConfig {
        ExperimentConfig {
            samples: 20_000,
            ..ExperimentConfig::default()
        }
    }

    #[test]
    fn test_run_is_deterministic() {
        let a = run(&small_config()).unwrap();
        let b = run(&small_config()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_run_reports_analytic_values() {
        let report = run(&small_config()).unwrap();
        assert_eq!(report.samples, 20_000);
        assert_eq!(report.target_mean, -1.0);
        assert_eq!(report.target_std, 0.7);
        assert!((report.analytic_cost - 3.94).abs() < 1e-12);
    }

    #[test]
    fn test_pushforward_is_exact_affine_image() {
        // Y is an affine image of X, so its summary follows exactly.
        let report = run(&small_config()).unwrap();
        let slope = 0.7 / 2.0;
        let expected_mean = -1.0 + slope * (report.source.mean - 0.5);
        assert!((report.pushforward.mean - expected_mean).abs() < 1e-12);
        assert!((report.pushforward.std_dev - slope * report.source.std_dev).abs() < 1e-12);
    }

    #[test]
    fn test_zero_samples_is_error() {
        let config = ExperimentConfig {
            samples: 0,
            ..ExperimentConfig::default()
        };
        assert!(matches!(run(&config), Err(TransportError::EmptySample)));
    }

    #[test]
    fn test_invalid_std_is_error() {
        let config = ExperimentConfig {
            source_std: 0.0,
            ..small_config()
        };
        assert!(matches!(run(&config), Err(TransportError::InvalidConfig(_))));
    }

    #[test]
    fn test_sweep_rows() {
        let rows = convergence_sweep(&small_config(), &[100, 1_000]).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].samples, 100);
        assert_eq!(rows[1].samples, 1_000);
        assert!(rows[1].mean_std_error < rows[0].mean_std_error);
    }

    #[test]
    fn test_sweep_propagates_errors() {
        let result = convergence_sweep(&small_config(), &[10, 0]);
        assert!(matches!(result, Err(TransportError::EmptySample)));
    }

    #[test]
    fn test_format_sweep() {
        let rows = convergence_sweep(&small_config(), &[50]).unwrap();
        let table = format_sweep(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("se(cost)"));
        assert!(lines[1].trim_start().starts_with("50"));
    }
}
