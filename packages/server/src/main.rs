#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Standalone entry point for the dashboard API server. Configuration
//! comes entirely from the environment.

use reunion_taxi_analytics::{Dashboard, DashboardConfig};
use reunion_taxi_server::{ServerConfig, run_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let dashboard = Dashboard::build(&DashboardConfig::from_env()).map_err(|e| {
        log::error!("Failed to build dashboard: {e}");
        std::io::Error::other(e)
    })?;

    run_server(dashboard, ServerConfig::from_env()).await
}
