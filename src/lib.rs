//! # monge-gauss
//!
//! Closed-form optimal transport between two univariate Gaussians,
//! checked by sampling.
//!
//! For μ = N(m₀, s₀²) and ν = N(m₁, s₁²) the Monge map under squared cost
//! is `T(x) = m₁ + (s₁/s₀)(x − m₀)` with optimal cost
//! `(m₀ − m₁)² + (s₀ − s₁)²`. This crate draws seeded samples from μ,
//! pushes them through `T` and compares the empirical moments and cost
//! with those analytic values.
//!
//! ## Modules
//!
//! - [`special`]: standard normal pdf, CDF and quantile
//! - [`distributions`]: the [`Normal`] distribution
//! - [`stats`]: descriptive statistics with numerical stability guarantees
//! - [`random`]: seeded RNG and i.i.d. sampling
//! - [`transport`]: the Monge map [`GaussianMonge`]
//! - [`validate`]: empirical-vs-analytic report
//! - [`config`]: experiment parameters
//! - [`experiment`]: the end-to-end pipeline and convergence sweep
//!
//! ## Example
//!
//! ```
//! use monge_gauss::{experiment, ExperimentConfig};
//!
//! let config = ExperimentConfig { samples: 10_000, ..ExperimentConfig::default() };
//! let report = experiment::run(&config)?;
//! assert!((report.analytic_cost - 3.94).abs() < 1e-12);
//! assert!(report.within_tolerance(5.0));
//! # Ok::<(), monge_gauss::TransportError>(())
//! ```

pub mod config;
pub mod distributions;
pub mod error;
pub mod experiment;
pub mod random;
pub mod special;
pub mod stats;
pub mod transport;
pub mod validate;

pub use config::ExperimentConfig;
pub use distributions::Normal;
pub use error::{Result, TransportError};
pub use transport::GaussianMonge;
pub use validate::ValidationReport;
