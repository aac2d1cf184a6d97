//! CLI command implementations.

mod ask;
mod bootstrap;
mod config;
mod demo;
mod doctor;
mod ingest;

pub use ask::run_ask;
pub use bootstrap::run_bootstrap;
pub use config::run_config;
pub use demo::{run_demo, DEMO_QUERIES};
pub use doctor::run_doctor;
pub use ingest::run_ingest;
