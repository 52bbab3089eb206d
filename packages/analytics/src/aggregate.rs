//! Rollups over communes and history.

use std::collections::BTreeMap;

use reunion_taxi_analytics_models::{
    CommuneDensity, GroupKey, HistoryMetric, HistoryPoint, KeyMetrics, MicroRegionSummary,
    YearGroupTotal,
};
use reunion_taxi_models::{CommuneRecord, MicroRegion};

pub use reunion_taxi_analytics_models::taxis_per_10k;

/// Taxi density of a single commune, `None` if it has no population.
#[must_use]
pub fn commune_taxis_per_10k(commune: &CommuneRecord) -> Option<f64> {
    taxis_per_10k(
        u64::from(commune.taxi_count),
        u64::from(commune.population),
    )
}

/// Builds one [`MicroRegionSummary`] per micro-region present in
/// `communes`.
///
/// The result does not depend on input order: integer columns are summed
/// exactly and floating-point columns are summed in sorted order.
#[must_use]
pub fn summarize_by_micro_region(
    communes: &[CommuneRecord],
) -> BTreeMap<MicroRegion, MicroRegionSummary> {
    let mut members: BTreeMap<MicroRegion, Vec<&CommuneRecord>> = BTreeMap::new();
    for commune in communes {
        members.entry(commune.micro_region).or_default().push(commune);
    }

    members
        .into_iter()
        .map(|(region, communes)| (region, summarize_members(region, &communes)))
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn summarize_members(region: MicroRegion, communes: &[&CommuneRecord]) -> MicroRegionSummary {
    let count = communes.len();
    let total_revenue: u64 = communes.iter().map(|c| u64::from(c.monthly_revenue)).sum();
    let occupation = order_independent_sum(communes.iter().map(|c| c.occupation_rate));

    MicroRegionSummary {
        micro_region: region,
        total_taxis: communes.iter().map(|c| u64::from(c.taxi_count)).sum(),
        total_drivers: communes.iter().map(|c| u64::from(c.driver_count)).sum(),
        total_daily_demand: communes.iter().map(|c| u64::from(c.daily_demand)).sum(),
        total_population: communes.iter().map(|c| u64::from(c.population)).sum(),
        mean_monthly_revenue: total_revenue as f64 / count as f64,
        mean_occupation_rate: occupation / count as f64,
        commune_count: u32::try_from(count).unwrap_or(u32::MAX),
    }
}

fn order_independent_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values.into_iter().sum()
}

/// Sums `metric` over history points grouped by year and `group_key`.
///
/// Output is ordered by year, then by group name.
#[must_use]
pub fn summarize_by_year<'a>(
    history: impl IntoIterator<Item = &'a HistoryPoint>,
    group_key: GroupKey,
    metric: HistoryMetric,
) -> Vec<YearGroupTotal> {
    let mut totals: BTreeMap<(i32, String), f64> = BTreeMap::new();

    for point in history {
        let group = match group_key {
            GroupKey::MicroRegion => point.micro_region.to_string(),
            GroupKey::Commune => point.commune.clone(),
        };
        *totals.entry((point.year, group)).or_default() += metric.value(point);
    }

    totals
        .into_iter()
        .map(|((year, group), total)| YearGroupTotal { year, group, total })
        .collect()
}

/// Island-wide totals shown in the header of the dashboard.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn key_metrics(communes: &[CommuneRecord]) -> KeyMetrics {
    let revenue: u64 = communes.iter().map(|c| u64::from(c.monthly_revenue)).sum();

    KeyMetrics {
        total_taxis: communes.iter().map(|c| u64::from(c.taxi_count)).sum(),
        total_drivers: communes.iter().map(|c| u64::from(c.driver_count)).sum(),
        total_daily_demand: communes.iter().map(|c| u64::from(c.daily_demand)).sum(),
        mean_monthly_revenue: (!communes.is_empty())
            .then(|| revenue as f64 / communes.len() as f64),
        commune_count: u32::try_from(communes.len()).unwrap_or(u32::MAX),
    }
}

/// Per-commune density against occupation rate, in input order.
#[must_use]
pub fn density_table(communes: &[CommuneRecord]) -> Vec<CommuneDensity> {
    communes
        .iter()
        .map(|c| CommuneDensity {
            name: c.name.clone(),
            micro_region: c.micro_region,
            activity_level: c.activity_level,
            population: c.population,
            taxi_count: c.taxi_count,
            taxis_per_10k: commune_taxis_per_10k(c),
            occupation_rate: c.occupation_rate,
        })
        .collect()
}
