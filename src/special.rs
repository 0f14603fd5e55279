//! Special functions for the standard normal distribution.
//!
//! Only the pieces the Gaussian transport map needs: the density, the
//! cumulative distribution function Φ and its inverse Φ⁻¹.

/// 1/√(2π) ≈ 0.3989422804014327
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal PDF φ(x) = (1/√(2π)) exp(-x²/2).
///
/// # Examples
/// ```
/// use monge_gauss::special::standard_normal_pdf;
/// let peak = standard_normal_pdf(0.0);
/// assert!((peak - 0.3989422804014327).abs() < 1e-15);
/// ```
pub fn standard_normal_pdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Approximation of the standard normal CDF Φ(x) = P(Z ≤ x) for Z ~ N(0,1).
///
/// # Algorithm
/// Abramowitz & Stegun formula 26.2.17, polynomial in `k = 1/(1 + 0.2316419|x|)`
/// evaluated with Horner's scheme, then reflected for negative `x`.
///
/// # Accuracy
/// Maximum absolute error < 7.5 × 10⁻⁸.
///
/// # Examples
/// ```
/// use monge_gauss::special::standard_normal_cdf;
/// assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
/// assert!((standard_normal_cdf(1.96) - 0.975).abs() < 1e-3);
/// ```
pub fn standard_normal_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    if x == f64::NEG_INFINITY {
        return 0.0;
    }

    const P: f64 = 0.231_641_9;
    const B: [f64; 5] = [
        0.319_381_530,
        -0.356_563_782,
        1.781_477_937,
        -1.821_255_978,
        1.330_274_429,
    ];

    let z = x.abs();
    let k = 1.0 / (1.0 + P * z);
    let poly = k * B.iter().rev().fold(0.0, |acc, &b| acc * k + b);
    let upper_tail = standard_normal_pdf(z) * poly;

    if x.is_sign_negative() {
        upper_tail
    } else {
        1.0 - upper_tail
    }
}

/// Inverse of the standard normal CDF (probit function).
///
/// Given `p ∈ (0, 1)`, returns `z` such that `Φ(z) = p`.
///
/// # Algorithm
/// Acklam's rational approximation: a central region `|p − 0.5| ≤ 0.47575`
/// and two symmetric tail regions in `√(−2 ln p)`.
///
/// # Accuracy
/// Relative error < 1.15 × 10⁻⁹ over the whole open interval.
///
/// # Returns
/// - `f64::NAN` if `p` is NaN or outside `[0, 1]`.
/// - `f64::NEG_INFINITY` if `p == 0.0`, `f64::INFINITY` if `p == 1.0`.
///
/// # Examples
/// ```
/// use monge_gauss::special::inverse_normal_cdf;
/// assert_eq!(inverse_normal_cdf(0.5), 0.0);
/// assert!((inverse_normal_cdf(0.975) - 1.959963984540054).abs() < 1e-8);
/// ```
pub fn inverse_normal_cdf(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_690e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];
    const P_LOW: f64 = 0.024_25;

    // Coefficients are ordered highest degree first.
    fn horner(coeffs: &[f64], t: f64) -> f64 {
        coeffs.iter().fold(0.0, |acc, &c| acc * t + c)
    }

    let tail = |q: f64| {
        let t = (-2.0 * q.ln()).sqrt();
        horner(&C, t) / (horner(&D, t) * t + 1.0)
    };

    if p < P_LOW {
        tail(p)
    } else if p > 1.0 - P_LOW {
        -tail(1.0 - p)
    } else {
        let q = p - 0.5;
        let r = q * q;
        horner(&A, r) * q / (horner(&B, r) * r + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_symmetric() {
        for &x in &[0.3, 1.0, 2.5] {
            assert_eq!(standard_normal_pdf(x), standard_normal_pdf(-x));
        }
        assert!(standard_normal_pdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_cdf_at_zero() {
        assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_cdf_known_values() {
        assert!((standard_normal_cdf(1.0) - 0.841_344_746).abs() < 1e-7);
        assert!((standard_normal_cdf(-1.0) - 0.158_655_254).abs() < 1e-7);
        assert!((standard_normal_cdf(1.96) - 0.975_002_105).abs() < 1e-7);
        assert!((standard_normal_cdf(3.0) - 0.998_650_102).abs() < 1e-7);
    }

    #[test]
    fn test_cdf_extremes() {
        assert_eq!(standard_normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(standard_normal_cdf(f64::NEG_INFINITY), 0.0);
        assert!(standard_normal_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_inverse_known_values() {
        assert_eq!(inverse_normal_cdf(0.5), 0.0);
        assert!((inverse_normal_cdf(0.975) - 1.959_963_984_540_054).abs() < 1e-8);
        assert!((inverse_normal_cdf(0.025) + 1.959_963_984_540_054).abs() < 1e-8);
        assert!((inverse_normal_cdf(0.841_344_746_068_543) - 1.0).abs() < 1e-8);
        // Tail region.
        assert!((inverse_normal_cdf(0.001) + 3.090_232_306_167_813).abs() < 1e-8);
        assert!((inverse_normal_cdf(0.999) - 3.090_232_306_167_813).abs() < 1e-8);
    }

    #[test]
    fn test_inverse_boundaries() {
        assert_eq!(inverse_normal_cdf(0.0), f64::NEG_INFINITY);
        assert_eq!(inverse_normal_cdf(1.0), f64::INFINITY);
        assert!(inverse_normal_cdf(-0.1).is_nan());
        assert!(inverse_normal_cdf(1.1).is_nan());
        assert!(inverse_normal_cdf(f64::NAN).is_nan());
    }
}
