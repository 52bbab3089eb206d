//! The process-wide, read-only store behind the dashboard.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::Datelike as _;
use reunion_taxi_analytics_models::{
    CommuneDetail, CommuneFilter, GroupKey, HistoryFilter, HistoryMetric, HistoryPoint,
    KeyMetrics, MicroRegionSummary, RegionDetail, SortKey,
};
use reunion_taxi_dataset::Dataset;
use reunion_taxi_models::{CommuneRecord, MicroRegion, StationRecord};

use crate::history::{FIRST_RECORDED_YEAR, generate_history};
use crate::{AnalyticsError, aggregate, query};

/// How the derived tables are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    /// First year of synthesized history.
    pub history_start_year: i32,
    /// Last year of synthesized history. `None` means the current year.
    pub history_end_year: Option<i32>,
    /// Seed for the history noise. `None` draws a random seed.
    pub seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            history_start_year: FIRST_RECORDED_YEAR,
            history_end_year: None,
            seed: None,
        }
    }
}

impl DashboardConfig {
    /// Reads `TAXI_HISTORY_START_YEAR`, `TAXI_HISTORY_END_YEAR` and
    /// `TAXI_HISTORY_SEED`, falling back to defaults for unset or invalid
    /// values.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            history_start_year: env_parse("TAXI_HISTORY_START_YEAR")
                .unwrap_or(defaults.history_start_year),
            history_end_year: env_parse("TAXI_HISTORY_END_YEAR"),
            seed: env_parse("TAXI_HISTORY_SEED"),
        }
    }
}

/// Earliest year history may be synthesized for.
pub const EARLIEST_HISTORY_YEAR: i32 = 1950;

/// Latest year history may be synthesized for.
pub const LATEST_HISTORY_YEAR: i32 = 2100;

fn check_year(name: &'static str, year: i32) -> Result<i32, AnalyticsError> {
    if (EARLIEST_HISTORY_YEAR..=LATEST_HISTORY_YEAR).contains(&year) {
        return Ok(year);
    }
    Err(AnalyticsError::InvalidParameter {
        name,
        message: format!("{year} is outside {EARLIEST_HISTORY_YEAR}-{LATEST_HISTORY_YEAR}"),
    })
}

fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        log::warn!("Ignoring invalid {name}={raw}");
    }
    parsed
}

/// Reference data plus every table derived from it at startup.
///
/// Nothing here is mutated after [`Dashboard::build`] returns, so a single
/// instance can be shared behind an `Arc` by any number of sessions.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Dataset,
    history: Vec<HistoryPoint>,
    regions: BTreeMap<MicroRegion, MicroRegionSummary>,
    start_year: i32,
    end_year: i32,
    seed: u64,
}

impl Dashboard {
    /// Loads the embedded dataset and derives the history and region
    /// tables.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Dataset`] if the embedded data is invalid
    /// and [`AnalyticsError::InvalidParameter`] if a history year is outside
    /// [`EARLIEST_HISTORY_YEAR`]-[`LATEST_HISTORY_YEAR`].
    pub fn build(config: &DashboardConfig) -> Result<Self, AnalyticsError> {
        Self::from_dataset(Dataset::load()?, config)
    }

    /// Derives the history and region tables from an already-validated
    /// dataset.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidParameter`] if a history year is
    /// outside [`EARLIEST_HISTORY_YEAR`]-[`LATEST_HISTORY_YEAR`].
    pub fn from_dataset(
        dataset: Dataset,
        config: &DashboardConfig,
    ) -> Result<Self, AnalyticsError> {
        let start_year = check_year("historyStartYear", config.history_start_year)?;
        let end_year = check_year(
            "historyEndYear",
            config
                .history_end_year
                .unwrap_or_else(|| chrono::Utc::now().year()),
        )?;
        let seed = config.seed.unwrap_or_else(rand::random);

        log::info!(
            "Building dashboard: {} communes, {} stations, \
             history {start_year}-{end_year}, seed {seed}",
            dataset.communes().len(),
            dataset.stations().len(),
        );
        if start_year > end_year {
            log::warn!("History start {start_year} is after end {end_year}; history is empty");
        }

        let history = generate_history(dataset.communes(), start_year, end_year, seed);
        let regions = aggregate::summarize_by_micro_region(dataset.communes());

        Ok(Self {
            dataset,
            history,
            regions,
            start_year,
            end_year,
            seed,
        })
    }

    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn communes(&self) -> &[CommuneRecord] {
        self.dataset.communes()
    }

    #[must_use]
    pub fn stations(&self) -> &[StationRecord] {
        self.dataset.stations()
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryPoint] {
        &self.history
    }

    /// Micro-region rollups, in [`MicroRegion`] order.
    #[must_use]
    pub const fn regions(&self) -> &BTreeMap<MicroRegion, MicroRegionSummary> {
        &self.regions
    }

    /// Inclusive year range covered by the history.
    #[must_use]
    pub const fn year_range(&self) -> (i32, i32) {
        (self.start_year, self.end_year)
    }

    /// Seed the history was generated with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn key_metrics(&self) -> KeyMetrics {
        aggregate::key_metrics(self.communes())
    }

    /// Everything the commune detail view needs.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::UnknownCommune`] if no commune has this
    /// name.
    pub fn commune_detail(&self, name: &str) -> Result<CommuneDetail, AnalyticsError> {
        let commune = self
            .dataset
            .commune(name)
            .ok_or_else(|| AnalyticsError::UnknownCommune {
                name: name.to_string(),
            })?;

        let filter = HistoryFilter {
            commune: Some(commune.name.clone()),
            ..HistoryFilter::default()
        };

        Ok(CommuneDetail {
            commune: commune.clone(),
            taxis_per_10k: aggregate::commune_taxis_per_10k(commune),
            zones: query::zone_shares(commune),
            stations: self
                .dataset
                .stations_for(&commune.name)
                .into_iter()
                .cloned()
                .collect(),
            history: query::filter_history(&self.history, &filter)
                .into_iter()
                .cloned()
                .collect(),
        })
    }

    /// Everything the micro-region detail view needs.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::UnknownRegion`] if no commune belongs to
    /// `region`.
    pub fn region_detail(&self, region: MicroRegion) -> Result<RegionDetail, AnalyticsError> {
        let summary = self
            .regions
            .get(&region)
            .ok_or(AnalyticsError::UnknownRegion { region })?;

        let communes = query::filter_communes(
            self.communes(),
            &CommuneFilter {
                micro_region: Some(region),
                activity_level: None,
                sort_key: SortKey::TaxiCount,
            },
        );

        let history = query::filter_history(
            &self.history,
            &HistoryFilter {
                micro_regions: vec![region],
                ..HistoryFilter::default()
            },
        );

        Ok(RegionDetail {
            summary: summary.clone(),
            taxis_per_10k: summary.taxis_per_10k(),
            communes: communes.into_iter().cloned().collect(),
            taxis_by_year: aggregate::summarize_by_year(
                history,
                GroupKey::MicroRegion,
                HistoryMetric::Taxis,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DashboardConfig {
        DashboardConfig {
            history_start_year: 2018,
            history_end_year: Some(2024),
            seed: Some(17),
        }
    }

    #[test]
    fn builds_all_tables() {
        let dashboard = Dashboard::build(&config()).unwrap();

        assert_eq!(dashboard.communes().len(), 23);
        assert_eq!(dashboard.stations().len(), 8);
        assert_eq!(dashboard.history().len(), 7 * 23);
        assert_eq!(dashboard.regions().len(), 5);
        assert_eq!(dashboard.year_range(), (2018, 2024));
        assert_eq!(dashboard.seed(), 17);
    }

    #[test]
    fn fixed_seed_rebuilds_identically() {
        let a = Dashboard::build(&config()).unwrap();
        let b = Dashboard::build(&config()).unwrap();
        assert_eq!(a.history(), b.history());
    }

    #[test]
    fn default_end_year_is_current_year() {
        let dashboard = Dashboard::build(&DashboardConfig::default()).unwrap();
        let (start, end) = dashboard.year_range();

        assert_eq!(start, 2018);
        assert_eq!(end, chrono::Utc::now().year());
    }

    #[test]
    fn commune_detail() {
        let dashboard = Dashboard::build(&config()).unwrap();
        let detail = dashboard.commune_detail("Saint-Denis").unwrap();

        assert_eq!(detail.commune.name, "Saint-Denis");
        assert_eq!(detail.stations.len(), 3);
        assert_eq!(detail.zones.len(), 4);
        assert_eq!(detail.history.len(), 7);
        assert!(detail.history.iter().all(|p| p.commune == "Saint-Denis"));
        assert!(detail.taxis_per_10k.is_some());
    }

    #[test]
    fn unknown_commune() {
        let dashboard = Dashboard::build(&config()).unwrap();
        assert!(matches!(
            dashboard.commune_detail("Paris"),
            Err(AnalyticsError::UnknownCommune { name }) if name == "Paris"
        ));
    }

    #[test]
    fn region_detail() {
        let dashboard = Dashboard::build(&config()).unwrap();
        let detail = dashboard.region_detail(MicroRegion::North).unwrap();

        assert_eq!(detail.summary.total_taxis, 248);
        assert_eq!(detail.communes.len(), 3);
        assert_eq!(detail.communes[0].name, "Saint-Denis");
        assert_eq!(detail.taxis_by_year.len(), 7);
        assert!(detail.taxis_by_year.iter().all(|t| t.group == "NORTH"));
    }

    #[test]
    fn empty_region() {
        let dataset = Dataset::new(
            Dataset::load().unwrap().communes()[..1].to_vec(),
            Vec::new(),
        )
        .unwrap();
        let dashboard = Dashboard::from_dataset(dataset, &config()).unwrap();

        assert!(dashboard.region_detail(MicroRegion::North).is_ok());
        assert!(matches!(
            dashboard.region_detail(MicroRegion::Cirques),
            Err(AnalyticsError::UnknownRegion {
                region: MicroRegion::Cirques
            })
        ));
    }

    #[test]
    fn inverted_year_range_builds_empty_history() {
        let dashboard = Dashboard::build(&DashboardConfig {
            history_start_year: 2025,
            history_end_year: Some(2020),
            seed: Some(1),
        })
        .unwrap();
        assert!(dashboard.history().is_empty());
    }

    #[test]
    fn rejects_implausible_years() {
        let result = Dashboard::build(&DashboardConfig {
            history_start_year: -1_000_000_000,
            history_end_year: Some(2024),
            seed: Some(1),
        });
        assert!(matches!(
            result,
            Err(AnalyticsError::InvalidParameter {
                name: "historyStartYear",
                ..
            })
        ));

        let result = Dashboard::build(&DashboardConfig {
            history_start_year: 2018,
            history_end_year: Some(i32::MAX),
            seed: Some(1),
        });
        assert!(matches!(
            result,
            Err(AnalyticsError::InvalidParameter {
                name: "historyEndYear",
                ..
            })
        ));
    }

    #[test]
    fn accepts_year_bounds() {
        let dashboard = Dashboard::build(&DashboardConfig {
            history_start_year: EARLIEST_HISTORY_YEAR,
            history_end_year: Some(EARLIEST_HISTORY_YEAR),
            seed: Some(1),
        })
        .unwrap();
        assert_eq!(dashboard.history().len(), 23);
    }
}
