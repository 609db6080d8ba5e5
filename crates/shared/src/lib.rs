pub mod auth;
pub mod config;
pub mod ids;
pub mod telemetry;

pub use auth::*;
pub use config::*;
pub use ids::*;
pub use telemetry::*;
