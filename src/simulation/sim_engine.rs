// src/simulation/sim_engine.rs
use crate::error::SdeResult;
use crate::models::ModelParameters;
use crate::rng::RngFactory;
use crate::simulation::path_simulator::{PathMatrix, PathSimulator};
use tracing::info;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    pub params: ModelParameters,
    pub seed: u64,
    pub parallel: bool,
    pub use_antithetic: bool,
}

impl SimulationConfig {
    /// Validate the simulation configuration
    pub fn validate(&self) -> SdeResult<()> {
        self.params.validate()
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            params: ModelParameters::default(),
            seed: 12345,
            parallel: true,
            use_antithetic: false,
        }
    }
}

/// Simulate Vasicek short-rate paths for a full run configuration
///
/// # Errors
///
/// Returns `SdeError` for invalid parameters or resolution; nothing fails
/// once the simulation has started.
pub fn simulate_paths(cfg: &SimulationConfig) -> SdeResult<PathMatrix> {
    cfg.validate()?;
    let simulator = PathSimulator::new(cfg.params)?.with_antithetic(cfg.use_antithetic);

    let paths = if cfg.parallel {
        simulator.simulate_parallel(&RngFactory::new(cfg.seed))
    } else {
        simulator.simulate_seeded(cfg.seed)
    };

    info!(
        rows = paths.nrows(),
        cols = paths.ncols(),
        seed = cfg.seed,
        parallel = cfg.parallel,
        "simulation finished"
    );

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdeError;

    #[test]
    fn test_default_config_runs() {
        let cfg = SimulationConfig {
            params: ModelParameters {
                paths: 200,
                ..ModelParameters::default()
            },
            ..Default::default()
        };

        let paths = simulate_paths(&cfg).expect("Valid configuration");
        assert_eq!(paths.dim(), (200, 252));
    }

    #[test]
    fn test_dispatch_matches_simulator() {
        let params = ModelParameters {
            paths: 10,
            n: 30,
            ..ModelParameters::default()
        };
        let simulator = PathSimulator::new(params).expect("Valid parameters");

        let serial = SimulationConfig {
            params,
            seed: 4,
            parallel: false,
            use_antithetic: false,
        };
        assert_eq!(
            simulate_paths(&serial).expect("Valid configuration"),
            simulator.simulate_seeded(4)
        );

        let parallel = SimulationConfig {
            parallel: true,
            ..serial.clone()
        };
        assert_eq!(
            simulate_paths(&parallel).expect("Valid configuration"),
            simulator.simulate_parallel(&RngFactory::new(4))
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let cfg = SimulationConfig {
            params: ModelParameters {
                n: 0,
                ..ModelParameters::default()
            },
            ..Default::default()
        };

        match simulate_paths(&cfg) {
            Err(SdeError::InvalidConfiguration { field, .. }) => assert_eq!(field, "steps"),
            other => panic!("expected steps error, got {:?}", other),
        }
    }
}
