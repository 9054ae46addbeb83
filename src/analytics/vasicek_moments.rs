// src/analytics/vasicek_moments.rs
//! Closed-form moments of the Vasicek short rate
//!
//! # Exact Process
//!
//! Conditional on `r_0`, the rate at time `t` is Gaussian with
//! ```text
//! E[r_t]   = θ + (r_0 - θ) e^(-κt)
//! Var[r_t] = σ²(1 - e^(-2κt)) / (2κ)
//! ```
//! and `Var[r_t] → σ²/(2κ)` as `t → ∞`.
//!
//! # Discretized Recurrence
//!
//! The Euler-Maruyama recurrence used by the simulator is itself a Gaussian
//! AR(1) with coefficient `a = 1 - κΔt`, so its moments after `k` steps are
//! also available in closed form:
//! ```text
//! m_k = θ + (r_0 - θ) a^k
//! v_k = σ²Δt (1 - a^(2k)) / (1 - a²)
//! ```
//! Comparing `m_k, v_k` with the exact moments at `t = kΔt` measures the
//! discretization bias of the scheme.

use crate::error::{validation::validate_range, SdeError, SdeResult};
use crate::models::ModelParameters;
use statrs::distribution::{ContinuousCDF, Normal};

// Below this |κ| the κ → 0 limits are used
const KAPPA_EPS: f64 = 1e-12;

/// Exact mean of `r_t`
pub fn exact_mean(params: &ModelParameters, t: f64) -> f64 {
    params.theta + (params.r0 - params.theta) * (-params.kappa * t).exp()
}

/// Exact variance of `r_t`
pub fn exact_variance(params: &ModelParameters, t: f64) -> f64 {
    let sigma2 = params.sigma * params.sigma;
    if params.kappa.abs() < KAPPA_EPS {
        sigma2 * t
    } else {
        sigma2 * (1.0 - (-2.0 * params.kappa * t).exp()) / (2.0 * params.kappa)
    }
}

/// Stationary variance `σ²/(2κ)`; infinite when κ ≤ 0
pub fn long_run_variance(params: &ModelParameters) -> f64 {
    if params.kappa <= 0.0 {
        f64::INFINITY
    } else {
        params.sigma * params.sigma / (2.0 * params.kappa)
    }
}

/// Mean of the Euler recurrence after `k` steps
pub fn euler_mean(params: &ModelParameters, k: usize) -> f64 {
    let a = 1.0 - params.stability_ratio();
    params.theta + (params.r0 - params.theta) * a.powi(k as i32)
}

/// Variance of the Euler recurrence after `k` steps
pub fn euler_variance(params: &ModelParameters, k: usize) -> f64 {
    let dt = params.dt();
    let a2 = (1.0 - params.kappa * dt).powi(2);
    let sigma2_dt = params.sigma * params.sigma * dt;

    if (1.0 - a2).abs() < KAPPA_EPS {
        sigma2_dt * k as f64
    } else {
        sigma2_dt * (1.0 - a2.powi(k as i32)) / (1.0 - a2)
    }
}

/// Quantile of the exact distribution of `r_t` at probability `p`
///
/// With `σ = 0` or `t = 0` the distribution is a point mass at the mean.
pub fn exact_quantile(params: &ModelParameters, t: f64, p: f64) -> SdeResult<f64> {
    validate_range("p", p, 0.0, 1.0)?;

    let mean = exact_mean(params, t);
    let std_dev = exact_variance(params, t).sqrt();
    if std_dev <= 0.0 {
        return Ok(mean);
    }

    let dist = Normal::new(mean, std_dev).map_err(|e| SdeError::InvalidParameters {
        parameter: "t".to_string(),
        value: t,
        constraint: format!("exact law of r_t is not a usable normal: {}", e),
    })?;
    Ok(dist.inverse_cdf(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> ModelParameters {
        ModelParameters {
            r0: 0.03,
            kappa: 0.5,
            theta: 0.04,
            sigma: 0.02,
            t: 1.0,
            n: 252,
            paths: 1,
        }
    }

    #[test]
    fn test_exact_moments_limits() {
        let p = params();

        assert_relative_eq!(exact_mean(&p, 0.0), p.r0, epsilon = 1e-15);
        assert_eq!(exact_variance(&p, 0.0), 0.0);
        assert_relative_eq!(exact_mean(&p, 200.0), p.theta, epsilon = 1e-12);
        assert_relative_eq!(
            exact_variance(&p, 200.0),
            long_run_variance(&p),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_kappa_is_brownian() {
        let p = ModelParameters { kappa: 0.0, ..params() };

        assert_relative_eq!(exact_mean(&p, 3.0), p.r0, epsilon = 1e-15);
        assert_relative_eq!(exact_variance(&p, 3.0), 0.02 * 0.02 * 3.0);
        assert_relative_eq!(euler_variance(&p, 252), 0.02 * 0.02, max_relative = 1e-12);
        assert!(long_run_variance(&p).is_infinite());
    }

    #[test]
    fn test_euler_moments_track_exact_for_small_dt() {
        let p = params();
        let dt = p.dt();

        for k in [1, 10, 100, 251] {
            let t = k as f64 * dt;
            assert_relative_eq!(euler_mean(&p, k), exact_mean(&p, t), epsilon = 1e-5);
            assert_relative_eq!(
                euler_variance(&p, k),
                exact_variance(&p, t),
                max_relative = 5e-3
            );
        }
    }

    #[test]
    fn test_euler_first_step() {
        let p = params();
        assert_relative_eq!(euler_mean(&p, 0), p.r0, epsilon = 1e-15);
        assert_eq!(euler_variance(&p, 0), 0.0);
        assert_relative_eq!(
            euler_variance(&p, 1),
            p.sigma * p.sigma * p.dt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_exact_quantile() {
        let p = params();

        let median = exact_quantile(&p, 1.0, 0.5).expect("Valid probability");
        assert_relative_eq!(median, exact_mean(&p, 1.0), epsilon = 1e-9);

        let upper = exact_quantile(&p, 1.0, 0.975).expect("Valid probability");
        let sd = exact_variance(&p, 1.0).sqrt();
        assert_relative_eq!(upper, exact_mean(&p, 1.0) + 1.959964 * sd, epsilon = 1e-6);

        let flat = ModelParameters { sigma: 0.0, ..p };
        assert_eq!(exact_quantile(&flat, 1.0, 0.9), Ok(exact_mean(&flat, 1.0)));

        assert!(exact_quantile(&p, 1.0, 1.5).is_err());
    }

    #[test]
    fn test_exact_quantile_reports_degenerate_law() {
        // Explosive κ < 0 with r0 = θ: the mean is 0 · ∞
        let p = ModelParameters {
            kappa: -1.0,
            r0: 0.04,
            ..params()
        };
        assert!(exact_mean(&p, 1000.0).is_nan());

        assert!(matches!(
            exact_quantile(&p, 1000.0, 0.5),
            Err(SdeError::InvalidParameters { ref parameter, .. }) if parameter == "t"
        ));
    }
}
