#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the taxi dashboard server.
//!
//! Filter parameters arrive as raw strings so that the handlers can accept
//! the `all` sentinel and name the offending field in the `400` body.
//! Numeric parameters are typed; the server turns extractor failures into
//! the same JSON error body.

use std::str::FromStr;

use reunion_taxi_analytics_models::MicroRegionSummary;
use reunion_taxi_models::{DriverProfile, DriverProfileKind, ShareBucket};
use serde::{Deserialize, Serialize};

/// Filter value meaning "no filter".
pub const ALL: &str = "all";

/// Parses an optional filter value.
///
/// `None`, an empty string and `all` (any case) mean no filter.
///
/// # Errors
///
/// Returns a message naming the field if the value does not parse.
pub fn parse_filter<T: FromStr>(field: &str, value: Option<&str>) -> Result<Option<T>, String> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case(ALL) => Ok(None),
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|_| format!("Invalid {field}: {v}")),
    }
}

/// Parses a comma-separated list of filter values. `all` anywhere in the
/// list, or an empty list, means no filter.
///
/// # Errors
///
/// Returns a message naming the field if any element does not parse.
pub fn parse_filter_list<T: FromStr>(field: &str, value: Option<&str>) -> Result<Vec<T>, String> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    let mut items = Vec::new();
    for part in value.split(',') {
        match parse_filter(field, Some(part))? {
            Some(item) => items.push(item),
            None if part.trim().is_empty() => {}
            None => return Ok(Vec::new()),
        }
    }
    Ok(items)
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    pub healthy: bool,
    pub version: String,
    /// Number of communes loaded.
    pub communes: usize,
    /// Seed the history was generated with.
    pub seed: u64,
    pub history_start_year: i32,
    pub history_end_year: i32,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Query parameters for the communes endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuneQueryParams {
    /// Micro-region name or `all`.
    pub micro_region: Option<String>,
    /// Activity level name or `all`.
    pub activity_level: Option<String>,
    /// Sort key name. Defaults to taxi count.
    pub sort_by: Option<String>,
}

/// Query parameters for the history endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQueryParams {
    /// `MICRO_REGION` or `COMMUNE`. Without it the raw points are returned.
    pub group_by: Option<String>,
    /// `TAXIS`, `DEMAND` or `REVENUE`.
    pub metric: Option<String>,
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
    /// Comma-separated micro-region names.
    pub regions: Option<String>,
    /// Restrict to a single commune.
    pub commune: Option<String>,
}

/// Query parameters for the top-N endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopQueryParams {
    /// Commune field to rank by. Defaults to taxi count.
    pub field: Option<String>,
    /// Number of communes. Defaults to 10.
    pub n: Option<usize>,
}

/// Query parameters for the simulator endpoint. Missing sliders take their
/// default value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateQueryParams {
    pub tourism_growth: Option<u32>,
    pub digitalisation: Option<u32>,
    pub training_investment: Option<u32>,
    pub new_stations: Option<u32>,
    pub renewal_aid: Option<u32>,
    /// Micro-region name or `all`.
    pub priority_region: Option<String>,
}

/// A micro-region rollup with its display label and density.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRegion {
    #[serde(flatten)]
    pub summary: MicroRegionSummary,
    pub label: String,
    pub taxis_per_10k: Option<f64>,
}

impl From<&MicroRegionSummary> for ApiRegion {
    fn from(summary: &MicroRegionSummary) -> Self {
        Self {
            label: summary.micro_region.label().to_string(),
            taxis_per_10k: summary.taxis_per_10k(),
            summary: summary.clone(),
        }
    }
}

/// A driver profile breakdown with its chart title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDriverProfile {
    pub kind: DriverProfileKind,
    pub title: String,
    pub buckets: Vec<ShareBucket>,
}

impl From<DriverProfile> for ApiDriverProfile {
    fn from(profile: DriverProfile) -> Self {
        Self {
            kind: profile.kind,
            title: profile.kind.label().to_string(),
            buckets: profile.buckets,
        }
    }
}
