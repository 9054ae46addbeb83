// src/simulation/path_simulator.rs
//! Vasicek Path Simulator
//!
//! Produces a `paths × n` matrix of short-rate trajectories:
//! ```text
//! r[i, 0] = r0
//! r[i, t] = r[i, t-1] + κ(θ - r[i, t-1]) Δt + σ √Δt Z[i, t]      t = 1..n-1
//! Δt      = T / n
//! ```
//!
//! Time steps are strictly sequential. Rows never interact, which is what
//! [`PathSimulator::simulate_parallel`] exploits.
//!
//! # Randomness
//!
//! The simulator owns no generator. [`PathSimulator::simulate`] consumes a
//! caller-supplied `Rng`, drawing one normal per row (per row pair with
//! antithetic variates) at each step, in row order. The parallel variant
//! derives one stream per row group from an [`RngFactory`], so its output
//! differs from the serial one for the same seed but is reproducible on its
//! own terms.

use crate::error::SdeResult;
use crate::models::{ModelParameters, Vasicek};
use crate::rng::{self, RngFactory};
use crate::solvers::EulerMaruyama;
use ndarray::{Array1, Array2, Axis};
use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

/// Simulated rates, row `i` is trajectory `i`, column `t` is step `t`
pub type PathMatrix = Array2<f64>;

#[derive(Clone, Debug)]
pub struct PathSimulator {
    model: Vasicek,
    use_antithetic: bool,
}

impl PathSimulator {
    /// Validate and store the parameters. Fails on `n < 1`, `paths < 1`,
    /// `t <= 0`, `sigma < 0` or any non-finite real.
    pub fn new(params: ModelParameters) -> SdeResult<Self> {
        Ok(PathSimulator {
            model: Vasicek::new(params)?,
            use_antithetic: false,
        })
    }

    /// Pair rows `(2k, 2k+1)` so the second row is driven by `-Z`.
    /// With an odd row count the last row is unpaired.
    pub fn with_antithetic(mut self, use_antithetic: bool) -> Self {
        self.use_antithetic = use_antithetic;
        self
    }

    pub fn params(&self) -> &ModelParameters {
        &self.model.params
    }

    pub fn model(&self) -> &Vasicek {
        &self.model
    }

    pub fn uses_antithetic(&self) -> bool {
        self.use_antithetic
    }

    pub fn dt(&self) -> f64 {
        self.model.params.dt()
    }

    /// Times `k * Δt` for each column `k`
    pub fn time_grid(&self) -> Array1<f64> {
        let dt = self.dt();
        Array1::from_shape_fn(self.model.params.n, |k| k as f64 * dt)
    }

    fn rows_per_group(&self) -> usize {
        if self.use_antithetic {
            2
        } else {
            1
        }
    }

    fn initial_matrix(&self) -> PathMatrix {
        let p = &self.model.params;
        let mut r = Array2::zeros((p.paths, p.n));
        r.column_mut(0).fill(p.r0);
        r
    }

    /// Simulate all paths, drawing from `rng` step by step.
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> PathMatrix {
        let p = &self.model.params;
        let dt = p.dt();
        let sqrt_dt = dt.sqrt();
        let group = self.rows_per_group();
        let draws_per_step = (p.paths + group - 1) / group;

        debug!(
            paths = p.paths,
            steps = p.n,
            dt,
            antithetic = self.use_antithetic,
            "simulating Vasicek paths (serial)"
        );

        let mut r = self.initial_matrix();
        let mut draws = Vec::with_capacity(draws_per_step);

        for t in 1..p.n {
            let time = (t - 1) as f64 * dt;

            draws.clear();
            for _ in 0..draws_per_step {
                draws.push(rng::get_normal_draw(rng));
            }

            for i in 0..p.paths {
                let z = draws[i / group];
                let z = if i % group == 0 { z } else { -z };

                let mut rate = r[[i, t - 1]];
                EulerMaruyama::step_with_draw(&self.model, &mut rate, time, dt, sqrt_dt, z);
                r[[i, t]] = rate;
            }
        }

        r
    }

    /// Serial simulation with a fresh `StdRng` seeded from `seed`.
    pub fn simulate_seeded(&self, seed: u64) -> PathMatrix {
        let mut rng = rng::seed_rng_from_u64(seed);
        self.simulate(&mut rng)
    }

    /// Row-parallel simulation.
    ///
    /// Rows are split into disjoint groups (single rows, or antithetic pairs).
    /// Group `g` is driven by `factory.create_std_rng(g)` and stepped through
    /// every time index on one rayon worker, so the result does not depend on
    /// the number of threads.
    pub fn simulate_parallel(&self, factory: &RngFactory) -> PathMatrix {
        let p = &self.model.params;
        let dt = p.dt();
        let sqrt_dt = dt.sqrt();
        let group = self.rows_per_group();

        debug!(
            paths = p.paths,
            steps = p.n,
            dt,
            antithetic = self.use_antithetic,
            base_seed = factory.base_seed(),
            threads = rayon::current_num_threads(),
            "simulating Vasicek paths (parallel)"
        );

        let mut r = self.initial_matrix();

        r.axis_chunks_iter_mut(Axis(0), group)
            .into_par_iter()
            .enumerate()
            .for_each(|(g, mut rows)| {
                let mut rng = factory.create_std_rng(g as u64);

                for t in 1..p.n {
                    let time = (t - 1) as f64 * dt;
                    let z = rng::get_normal_draw(&mut rng);

                    for (k, mut row) in rows.outer_iter_mut().enumerate() {
                        let z = if k == 0 { z } else { -z };

                        let mut rate = row[t - 1];
                        EulerMaruyama::step_with_draw(
                            &self.model,
                            &mut rate,
                            time,
                            dt,
                            sqrt_dt,
                            z,
                        );
                        row[t] = rate;
                    }
                }
            });

        r
    }
}
