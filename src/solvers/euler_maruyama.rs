// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) √Δt Z_n
//! ```
//!
//! Where:
//! - `a(x,t)` is the drift coefficient
//! - `b(x,t)` is the diffusion coefficient
//! - `Z_n ~ N(0, 1)` are independent standard normal draws
//!
//! For the Vasicek model this is exactly
//! ```text
//! r_{n+1} = r_n + κ(θ - r_n) Δt + σ √Δt Z_n
//! ```
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size (order 1.0 for additive noise)
//! - **Weak convergence**: Order 1.0 in step size
//!
//! The scheme does not sample the exact Ornstein-Uhlenbeck transition; the
//! resulting bias in mean and variance shrinks with Δt and is accepted.

use crate::models::model::SDEModel;

/// Euler-Maruyama numerical scheme for SDE integration
pub struct EulerMaruyama;

impl EulerMaruyama {
    /// Euler-Maruyama step driven by a supplied standard normal draw
    ///
    /// `sqrt_dt` is passed in so hot loops compute it once per run.
    #[inline]
    pub fn step_with_draw<M: SDEModel>(
        model: &M,
        x: &mut f64,
        t: f64,
        dt: f64,
        sqrt_dt: f64,
        normal_draw: f64,
    ) {
        let drift_term = model.drift(*x, t) * dt;
        let diffusion_term = model.diffusion(*x, t) * sqrt_dt * normal_draw;
        *x += drift_term + diffusion_term;
    }
}
