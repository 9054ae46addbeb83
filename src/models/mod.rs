pub mod model;
pub mod vasicek;

pub use model::SDEModel;
pub use vasicek::{ModelParameters, Vasicek};
