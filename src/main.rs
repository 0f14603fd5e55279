//! monge-gauss CLI - pushes Gaussian samples through the closed-form Monge map.

use anyhow::{Context, Result};
use clap::Parser;
use monge_gauss::{experiment, ExperimentConfig};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "monge-gauss")]
#[command(version)]
#[command(about = "Validate the optimal transport map between two 1D Gaussians by sampling")]
struct Cli {
    /// Optional TOML file with experiment parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of samples drawn from the source distribution
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Mean of the source Gaussian
    #[arg(long, allow_hyphen_values = true)]
    source_mean: Option<f64>,

    /// Standard deviation of the source Gaussian
    #[arg(long, allow_negative_numbers = true)]
    source_std: Option<f64>,

    /// Mean of the target Gaussian
    #[arg(long, allow_hyphen_values = true)]
    target_mean: Option<f64>,

    /// Standard deviation of the target Gaussian
    #[arg(long, allow_negative_numbers = true)]
    target_std: Option<f64>,

    /// Also print a convergence table over several sample sizes
    #[arg(long)]
    sweep: bool,

    /// Sample sizes used by --sweep
    #[arg(long, value_delimiter = ',', default_value = "2000,20000,200000,2000000")]
    sweep_sizes: Vec<usize>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn experiment_config(&self) -> Result<ExperimentConfig> {
        let mut config = match &self.config {
            Some(path) => ExperimentConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {path:?}"))?,
            None => ExperimentConfig::default(),
        };

        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(m0) = self.source_mean {
            config.source_mean = m0;
        }
        if let Some(s0) = self.source_std {
            config.source_std = s0;
        }
        if let Some(m1) = self.target_mean {
            config.target_mean = m1;
        }
        if let Some(s1) = self.target_std {
            config.target_std = s1;
        }

        config.validate().context("Invalid experiment parameters")?;
        Ok(config)
    }
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    let config = cli.experiment_config()?;
    let report = experiment::run(&config).context("Experiment failed")?;
    println!("{report}");

    if cli.sweep {
        let rows = experiment::convergence_sweep(&config, &cli.sweep_sizes)
            .context("Convergence sweep failed")?;
        println!();
        print!("{}", experiment::format_sweep(&rows));
    }

    Ok(())
}
