//! # vasicek-sde: Short-Rate Path Simulation
//!
//! Simulates trajectories of the Vasicek short rate
//! ```text
//! dr_t = κ(θ - r_t) dt + σ dW_t
//! ```
//! with the explicit Euler-Maruyama scheme, returning a dense `paths × n`
//! matrix for downstream pricing, risk or scenario work.
//!
//! ## Key Features
//!
//! - **Injectable randomness**: pass any `rand::Rng`, or a seed
//! - **Row-parallel runs**: Rayon over disjoint rows, one stream per row group
//! - **Antithetic pairs**: optional `Z / -Z` row pairing
//! - **Validated inputs**: bad parameters fail fast with [`SdeError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use vasicek_sde::models::ModelParameters;
//! use vasicek_sde::simulation::PathSimulator;
//!
//! let params = ModelParameters::new(0.03, 0.5, 0.04, 0.01, 1.0, 252, 1000);
//! let simulator = PathSimulator::new(params).expect("Valid parameters");
//!
//! let paths = simulator.simulate_seeded(42);
//! assert_eq!(paths.dim(), (1000, 252));
//! assert!(paths.column(0).iter().all(|&r| r == 0.03));
//! ```
//!
//! ## Boundary Cases
//!
//! `n = 1` yields a single column holding `r0`; `n = 0` and `paths = 0` are
//! rejected at construction.

// Module declarations
pub mod analytics;
pub mod error;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod rng;
pub mod simulation;
pub mod solvers;

// Re-export commonly used types for convenience
pub use error::{SdeError, SdeResult};
pub use models::ModelParameters;
pub use simulation::{simulate_paths, PathMatrix, PathSimulator, SimulationConfig};
