#[cfg(any(feature = "adapters", feature = "axum", feature = "reqwest"))]
compile_error!("application must not depend on adapters/framework crates");

pub mod config;
pub mod error;
pub mod infrastructure_config;
pub mod notifications;
pub mod ports;
