pub mod path_simulator;
pub mod sim_engine;

pub use path_simulator::{PathMatrix, PathSimulator};
pub use sim_engine::{simulate_paths, SimulationConfig};
