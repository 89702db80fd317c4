pub mod domain;
pub mod infra;
pub mod telemetry;

pub use domain::*;
pub use infra::*;
pub use telemetry::*;
