#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the Reunion taxi dashboard.
//!
//! Serves the commune table, micro-region rollups, synthesized history and
//! the scenario/simulator views as JSON. All tables are derived once at
//! startup into a [`Dashboard`] that every worker shares read-only.

mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use reunion_taxi_analytics::Dashboard;
use reunion_taxi_server_models::ApiError;

/// Shared application state.
pub struct AppState {
    /// Reference data and derived tables.
    pub dashboard: Arc<Dashboard>,
}

/// Where the server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Reads `BIND_ADDR` and `PORT`, falling back to `127.0.0.1:8080`.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
        }
    }
}

/// Query strings that fail to deserialize (e.g. `?n=abc`) are reported as
/// a JSON `400` like every other bad filter value.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let body = ApiError::new(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(query_config())
            .route("/health", web::get().to(handlers::health))
            .route("/communes", web::get().to(handlers::communes))
            .route("/communes/{name}", web::get().to(handlers::commune))
            .route("/stations", web::get().to(handlers::stations))
            .route("/regions", web::get().to(handlers::regions))
            .route("/regions/{region}", web::get().to(handlers::region))
            .route("/history", web::get().to(handlers::history))
            .route("/top", web::get().to(handlers::top))
            .route("/metrics", web::get().to(handlers::metrics))
            .route("/density", web::get().to(handlers::density))
            .route("/scenarios", web::get().to(handlers::scenarios))
            .route("/simulate", web::get().to(handlers::simulate))
            .route("/drivers", web::get().to(handlers::drivers)),
    );
}

/// Starts the dashboard API server.
///
/// This is a regular async function; the caller provides the runtime
/// (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(dashboard: Dashboard, config: ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(AppState {
        dashboard: Arc::new(dashboard),
    });

    let ServerConfig { bind_addr, port } = config;
    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
