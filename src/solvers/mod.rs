pub mod euler_maruyama;

pub use euler_maruyama::EulerMaruyama;
