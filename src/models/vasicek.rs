// src/models/vasicek.rs
//! Vasicek Short-Rate Model
//!
//! # Mathematical Framework
//!
//! The short rate follows an Ornstein-Uhlenbeck process:
//! ```text
//! dr_t = κ(θ - r_t) dt + σ dW_t
//! ```
//!
//! Where:
//! - r_t: Instantaneous short rate
//! - κ: Speed of mean reversion
//! - θ: Long-run mean rate
//! - σ: Volatility of the short rate
//!
//! Rates are Gaussian and may go negative; nothing here floors them.
//!
//! # Discrete Stability
//!
//! Under the explicit Euler scheme the noise-free recurrence is
//! ```text
//! r_{k+1} - θ = (1 - κΔt)(r_k - θ)
//! ```
//! which only contracts toward θ when `0 < κΔt < 2`. Outside that band the
//! model is still accepted but a warning is logged.

use super::model::SDEModel;
use crate::error::{validation::*, SdeResult};
use tracing::warn;

/// Vasicek parameters together with the simulation resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelParameters {
    pub r0: f64,      // Initial short rate
    pub kappa: f64,   // Mean reversion speed
    pub theta: f64,   // Long-run mean rate
    pub sigma: f64,   // Short-rate volatility
    pub t: f64,       // Horizon in years
    pub n: usize,     // Number of time steps (columns)
    pub paths: usize, // Number of trajectories (rows)
}

impl ModelParameters {
    pub fn new(
        r0: f64,
        kappa: f64,
        theta: f64,
        sigma: f64,
        t: f64,
        n: usize,
        paths: usize,
    ) -> Self {
        ModelParameters {
            r0,
            kappa,
            theta,
            sigma,
            t,
            n,
            paths,
        }
    }

    /// Validate Vasicek parameters and simulation resolution
    pub fn validate(&self) -> SdeResult<()> {
        validate_finite("r0", self.r0)?;
        validate_finite("kappa", self.kappa)?;
        validate_finite("theta", self.theta)?;
        validate_non_negative("sigma", self.sigma)?;
        validate_positive("t", self.t)?;
        validate_steps(self.n)?;
        validate_paths(self.paths)?;
        validate_matrix_size(self.paths, self.n)?;
        Ok(())
    }

    /// Fixed step size `T / n`
    pub fn dt(&self) -> f64 {
        self.t / self.n as f64
    }

    /// `κΔt`; the noise-free recurrence contracts toward θ only inside (0, 2)
    pub fn stability_ratio(&self) -> f64 {
        self.kappa * self.dt()
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        ModelParameters {
            r0: 0.03,
            kappa: 0.5,
            theta: 0.04,
            sigma: 0.01,
            t: 1.0,
            n: 252,
            paths: 1_000,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Vasicek {
    pub params: ModelParameters,
}

impl Vasicek {
    pub fn new(params: ModelParameters) -> SdeResult<Self> {
        params.validate()?;

        if params.kappa <= 0.0 {
            warn!(
                kappa = params.kappa,
                "non-positive mean reversion speed, rates will not revert toward theta"
            );
        } else if params.stability_ratio() >= 2.0 {
            warn!(
                kappa = params.kappa,
                dt = params.dt(),
                ratio = params.stability_ratio(),
                "kappa * dt >= 2, explicit Euler recurrence no longer contracts toward theta"
            );
        }

        Ok(Vasicek { params })
    }
}

impl SDEModel for Vasicek {
    fn drift(&self, r: f64, _t: f64) -> f64 {
        self.params.kappa * (self.params.theta - r)
    }

    fn diffusion(&self, _r: f64, _t: f64) -> f64 {
        self.params.sigma
    }
}
