#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived tables for the Reunion taxi dashboard.
//!
//! The pipeline is built once at startup and then only read:
//! reference dataset, synthesized history ([`history`]), micro-region
//! rollups ([`aggregate`]). The query functions in [`query`] are pure and
//! are re-run in full on every filter change. [`dashboard::Dashboard`]
//! owns the immutable tables and can be shared read-only between sessions.

pub mod aggregate;
pub mod dashboard;
pub mod history;
pub mod query;
pub mod scenarios;

use reunion_taxi_dataset::DatasetError;
use reunion_taxi_models::MicroRegion;
use thiserror::Error;

pub use dashboard::{Dashboard, DashboardConfig};

/// Errors that can occur while building or querying the dashboard tables.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Reference data failed validation.
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// No commune has the requested name.
    #[error("Unknown commune: {name}")]
    UnknownCommune {
        /// The name that was looked up.
        name: String,
    },

    /// No commune belongs to the requested micro-region.
    #[error("No communes in micro-region {region}")]
    UnknownRegion {
        /// The micro-region that was looked up.
        region: MicroRegion,
    },

    /// A query parameter is out of range.
    #[error("Invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of what went wrong.
        message: String,
    },
}
