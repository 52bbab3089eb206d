#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived table types and query parameters for the taxi dashboard.
//!
//! Everything here is a flat, serializable record that a chart, map or
//! table widget can consume directly. The tables are produced by
//! `reunion_taxi_analytics` from the immutable reference dataset.

use reunion_taxi_models::{ActivityLevel, CommuneRecord, MicroRegion, StationRecord};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Taxis per 10 000 inhabitants.
///
/// Returns `None` when `population` is zero, since the ratio is undefined.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn taxis_per_10k(taxis: u64, population: u64) -> Option<f64> {
    if population == 0 {
        return None;
    }
    Some(taxis as f64 / population as f64 * 10_000.0)
}

/// Rollup of every commune in one micro-region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicroRegionSummary {
    /// The micro-region.
    pub micro_region: MicroRegion,
    /// Sum of taxi counts.
    pub total_taxis: u64,
    /// Sum of licensed drivers.
    pub total_drivers: u64,
    /// Sum of average daily demand.
    pub total_daily_demand: u64,
    /// Sum of population.
    pub total_population: u64,
    /// Unweighted mean of monthly revenue across member communes.
    pub mean_monthly_revenue: f64,
    /// Unweighted mean of occupation rate across member communes.
    pub mean_occupation_rate: f64,
    /// Number of member communes.
    pub commune_count: u32,
}

impl MicroRegionSummary {
    /// Taxi density for the whole region, `None` if it has no population.
    #[must_use]
    pub fn taxis_per_10k(&self) -> Option<f64> {
        taxis_per_10k(self.total_taxis, self.total_population)
    }
}

/// Synthesized yearly activity of one commune.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub year: i32,
    pub commune: String,
    pub micro_region: MicroRegion,
    pub taxis: f64,
    pub daily_demand: f64,
    pub monthly_revenue: f64,
}

/// Dimension that history totals are grouped by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum GroupKey {
    /// Group by micro-region.
    #[default]
    MicroRegion,
    /// Group by commune name.
    Commune,
}

/// History column that is summed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum HistoryMetric {
    /// Taxi count.
    #[default]
    Taxis,
    /// Daily demand.
    Demand,
    /// Monthly revenue.
    Revenue,
}

impl HistoryMetric {
    /// Reads this metric from a history point.
    #[must_use]
    pub const fn value(self, point: &HistoryPoint) -> f64 {
        match self {
            Self::Taxis => point.taxis,
            Self::Demand => point.daily_demand,
            Self::Revenue => point.monthly_revenue,
        }
    }
}

/// Sum of a history metric for one group in one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearGroupTotal {
    /// Calendar year.
    pub year: i32,
    /// Group name: the micro-region wire name or the commune name.
    pub group: String,
    /// Summed metric.
    pub total: f64,
}

/// Numeric commune column usable for ranking.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum CommuneMetric {
    #[default]
    TaxiCount,
    DriverCount,
    Population,
    DailyDemand,
    MonthlyRevenue,
    OccupationRate,
    PrimaryStations,
}

impl CommuneMetric {
    /// Reads this column from a commune as `f64`.
    #[must_use]
    pub fn value(self, commune: &CommuneRecord) -> f64 {
        match self {
            Self::TaxiCount => f64::from(commune.taxi_count),
            Self::DriverCount => f64::from(commune.driver_count),
            Self::Population => f64::from(commune.population),
            Self::DailyDemand => f64::from(commune.daily_demand),
            Self::MonthlyRevenue => f64::from(commune.monthly_revenue),
            Self::OccupationRate => commune.occupation_rate,
            Self::PrimaryStations => f64::from(commune.primary_stations),
        }
    }
}

/// Sort order offered by the commune comparison view.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum SortKey {
    #[default]
    TaxiCount,
    DailyDemand,
    MonthlyRevenue,
    OccupationRate,
}

impl SortKey {
    /// The commune column this key sorts on.
    #[must_use]
    pub const fn metric(self) -> CommuneMetric {
        match self {
            Self::TaxiCount => CommuneMetric::TaxiCount,
            Self::DailyDemand => CommuneMetric::DailyDemand,
            Self::MonthlyRevenue => CommuneMetric::MonthlyRevenue,
            Self::OccupationRate => CommuneMetric::OccupationRate,
        }
    }
}

/// Filters of the commune comparison view. `None` means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuneFilter {
    /// Keep only this micro-region.
    pub micro_region: Option<MicroRegion>,
    /// Keep only this activity level.
    pub activity_level: Option<ActivityLevel>,
    /// Descending sort column.
    pub sort_key: SortKey,
}

/// Filters applied to the synthesized history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryFilter {
    /// First year kept (inclusive).
    pub from_year: Option<i32>,
    /// Last year kept (inclusive).
    pub to_year: Option<i32>,
    /// Micro-regions kept. Empty keeps all.
    pub micro_regions: Vec<MicroRegion>,
    /// Keep only this commune.
    pub commune: Option<String>,
}

/// Island-wide headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub total_taxis: u64,
    pub total_drivers: u64,
    pub total_daily_demand: u64,
    /// `None` when there are no communes.
    pub mean_monthly_revenue: Option<f64>,
    pub commune_count: u32,
}

/// Density and occupation of one commune.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuneDensity {
    pub name: String,
    pub micro_region: MicroRegion,
    pub activity_level: ActivityLevel,
    pub population: u32,
    pub taxi_count: u32,
    /// `None` when population is zero.
    pub taxis_per_10k: Option<f64>,
    pub occupation_rate: f64,
}

/// Share of a commune's service attributed to one served zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneShare {
    pub zone: String,
    pub percent: u32,
}

/// Named 2030 development scenario.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ScenarioKind {
    Conservative,
    Moderate,
    Ambitious,
    Innovative,
}

impl ScenarioKind {
    /// Display label used by the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Conservative => "Conservateur",
            Self::Moderate => "Modéré",
            Self::Ambitious => "Ambitieux",
            Self::Innovative => "Innovant",
        }
    }
}

/// Illustrative 2030 targets for one scenario. These are fixed figures,
/// not projections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub label: String,
    pub taxis_2030: u32,
    pub daily_demand_2030: u32,
    pub mean_revenue_2030: u32,
    /// Share of digitalised bookings, in percent.
    pub digitalisation_percent: u32,
}

/// Inputs of the development simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorParams {
    /// Tourism growth, percent (0-50).
    pub tourism_growth: u32,
    /// Digitalisation rate, percent (0-100).
    pub digitalisation: u32,
    /// Training investment, millions of euros (0-10).
    pub training_investment: u32,
    /// New stations (0-20).
    pub new_stations: u32,
    /// Vehicle renewal aid, percent (0-50).
    pub renewal_aid: u32,
    /// Micro-region given priority.
    pub priority_region: Option<MicroRegion>,
}

impl Default for SimulatorParams {
    fn default() -> Self {
        Self {
            tourism_growth: 20,
            digitalisation: 60,
            training_investment: 3,
            new_stations: 8,
            renewal_aid: 20,
            priority_region: None,
        }
    }
}

/// Output of the development simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorResult {
    pub current_taxis: u64,
    pub projected_taxis: f64,
    /// `None` when there are currently no taxis.
    pub taxis_change_percent: Option<f64>,
    pub current_daily_demand: u64,
    pub projected_daily_demand: f64,
    /// `None` when there is currently no demand.
    pub demand_change_percent: Option<f64>,
    pub training_investment: u32,
    pub new_stations: u32,
    pub renewal_aid: u32,
    pub priority_region: Option<MicroRegion>,
}

/// Everything the commune detail view shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuneDetail {
    pub commune: CommuneRecord,
    pub taxis_per_10k: Option<f64>,
    pub zones: Vec<ZoneShare>,
    pub stations: Vec<StationRecord>,
    pub history: Vec<HistoryPoint>,
}

/// Everything the micro-region detail view shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDetail {
    pub summary: MicroRegionSummary,
    pub taxis_per_10k: Option<f64>,
    /// Member communes, most taxis first.
    pub communes: Vec<CommuneRecord>,
    /// Yearly taxi totals for the region.
    pub taxis_by_year: Vec<YearGroupTotal>,
}
