//! Descriptive statistics with numerical stability guarantees.
//!
//! All functions in this module handle edge cases explicitly: an empty
//! slice, a slice containing NaN/Inf, or finite data whose accumulation
//! overflows yields `None` instead of a silent NaN.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation, O(ε) error independent of n.
//! - **Variance/StdDev**: Welford's online algorithm.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).
//!
//! # Divisor convention
//!
//! Both conventions are available. [`StdDevConvention::Population`]
//! (divide by `n`) is the default and is what the transport report uses.

/// Divisor used when turning a sum of squared deviations into a variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdDevConvention {
    /// Divide by `n`.
    #[default]
    Population,
    /// Divide by `n − 1` (Bessel's correction).
    Sample,
}

/// Computes the arithmetic mean using compensated summation.
///
/// # Returns
/// - `None` if `data` is empty, contains any NaN/Inf, or the sum overflows.
///
/// # Examples
/// ```
/// use monge_gauss::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// assert_eq!(mean(&[]), None);
/// assert_eq!(mean(&[1e308, 1e308]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !all_finite(data) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64).filter(|m| m.is_finite())
}

/// Computes the sample variance (denominator `n − 1`).
///
/// # Returns
/// - `None` if `data.len() < 2`, contains NaN/Inf, or the squared
///   deviations overflow.
///
/// # Examples
/// ```
/// use monge_gauss::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 || !all_finite(data) {
        return None;
    }
    WelfordAccumulator::from_slice(data)
        .sample_variance()
        .filter(|v| v.is_finite())
}

/// Computes the population variance (denominator `n`).
///
/// # Returns
/// - `None` if `data` is empty, contains NaN/Inf, or the squared
///   deviations overflow.
///
/// # Examples
/// ```
/// use monge_gauss::stats::population_variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((population_variance(&v).unwrap() - 4.0).abs() < 1e-10);
/// ```
pub fn population_variance(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !all_finite(data) {
        return None;
    }
    WelfordAccumulator::from_slice(data)
        .population_variance()
        .filter(|v| v.is_finite())
}

/// Sample standard deviation, `sqrt(variance(data))`.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Population standard deviation, `sqrt(population_variance(data))`.
///
/// # Examples
/// ```
/// use monge_gauss::stats::population_std_dev;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((population_std_dev(&v).unwrap() - 2.0).abs() < 1e-10);
/// ```
pub fn population_std_dev(data: &[f64]) -> Option<f64> {
    population_variance(data).map(f64::sqrt)
}

/// Standard deviation under an explicit divisor convention.
pub fn std_dev_with(data: &[f64], convention: StdDevConvention) -> Option<f64> {
    match convention {
        StdDevConvention::Population => population_std_dev(data),
        StdDevConvention::Sample => std_dev(data),
    }
}

/// Mean of the squared pairwise differences, `(1/n) Σ (x[i] − y[i])²`.
///
/// This is the empirical quadratic transport cost of the coupling that
/// pairs `x[i]` with `y[i]`.
///
/// # Returns
/// - `None` if the slices are empty, differ in length, or contain NaN/Inf.
///
/// # Examples
/// ```
/// use monge_gauss::stats::mean_squared_difference;
/// let c = mean_squared_difference(&[0.0, 1.0], &[1.0, 3.0]).unwrap();
/// assert!((c - 2.5).abs() < 1e-15);
/// ```
pub fn mean_squared_difference(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.is_empty() || x.len() != y.len() {
        return None;
    }
    let squared = squared_differences(x, y);
    mean(&squared)
}

/// Element-wise `(x[i] − y[i])²` over the common prefix of both slices.
pub(crate) fn squared_differences(x: &[f64], y: &[f64]) -> Vec<f64> {
    x.iter()
        .zip(y)
        .map(|(&a, &b)| {
            let d = a - b;
            d * d
        })
        .collect()
}

fn all_finite(data: &[f64]) -> bool {
    data.iter().all(|x| x.is_finite())
}

// ---------------------------------------------------------------------------
// Compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// Improved Kahan summation: the branch keeps the low-order bits of
/// whichever operand is smaller in magnitude, so it also holds when the
/// addend exceeds the running sum.
///
/// Reference: Neumaier (1974), *ZAMM* 54(1), pp. 39–51.
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Welford online accumulator
// ---------------------------------------------------------------------------

/// Streaming accumulator for count, mean and variance.
///
/// Single pass, O(1) memory.
///
/// # Examples
/// ```
/// use monge_gauss::stats::WelfordAccumulator;
/// let mut acc = WelfordAccumulator::new();
/// for &x in &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.update(x);
/// }
/// assert!((acc.mean().unwrap() - 5.0).abs() < 1e-15);
/// assert!((acc.population_variance().unwrap() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WelfordAccumulator {
    count: u64,
    mean_acc: f64,
    m2: f64,
}

impl WelfordAccumulator {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an accumulator over every value of `data`.
    pub fn from_slice(data: &[f64]) -> Self {
        let mut acc = Self::new();
        for &x in data {
            acc.update(x);
        }
        acc
    }

    /// Feeds a new sample into the accumulator.
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean_acc;
        self.mean_acc += delta / self.count as f64;
        self.m2 += delta * (value - self.mean_acc);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running mean, or `None` if no samples have been added.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean_acc)
    }

    /// Variance with `n − 1` denominator, or `None` below 2 samples.
    pub fn sample_variance(&self) -> Option<f64> {
        (self.count >= 2).then(|| self.m2 / (self.count - 1) as f64)
    }

    /// Variance with `n` denominator, or `None` if empty.
    pub fn population_variance(&self) -> Option<f64> {
        (self.count > 0).then(|| self.m2 / self.count as f64)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
