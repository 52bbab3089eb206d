//! View-ready subsets of the commune and history tables.
//!
//! These are the functions the front-end calls on every filter change.
//! They never mutate their input and never fail: a filter that matches
//! nothing yields an empty list.

use std::cmp::Ordering;

use reunion_taxi_analytics_models::{
    CommuneFilter, CommuneMetric, HistoryFilter, HistoryPoint, ZoneShare,
};
use reunion_taxi_models::CommuneRecord;

/// Descending by `metric`, ties broken by name ascending.
fn by_metric_desc(metric: CommuneMetric, a: &CommuneRecord, b: &CommuneRecord) -> Ordering {
    metric
        .value(b)
        .total_cmp(&metric.value(a))
        .then_with(|| a.name.cmp(&b.name))
}

/// Applies the commune comparison filters and sorts the survivors.
#[must_use]
pub fn filter_communes<'a>(
    communes: &'a [CommuneRecord],
    filter: &CommuneFilter,
) -> Vec<&'a CommuneRecord> {
    let mut matched: Vec<&CommuneRecord> = communes
        .iter()
        .filter(|c| filter.micro_region.is_none_or(|r| c.micro_region == r))
        .filter(|c| filter.activity_level.is_none_or(|l| c.activity_level == l))
        .collect();

    let metric = filter.sort_key.metric();
    matched.sort_by(|a, b| by_metric_desc(metric, a, b));
    matched
}

/// The `n` communes with the largest `metric`, largest first.
#[must_use]
pub fn top_n(communes: &[CommuneRecord], metric: CommuneMetric, n: usize) -> Vec<&CommuneRecord> {
    let mut ranked: Vec<&CommuneRecord> = communes.iter().collect();
    ranked.sort_by(|a, b| by_metric_desc(metric, a, b));
    ranked.truncate(n);
    ranked
}

/// Restricts history to a year range, a set of micro-regions and
/// optionally one commune. Input order is preserved.
#[must_use]
pub fn filter_history<'a>(
    history: &'a [HistoryPoint],
    filter: &HistoryFilter,
) -> Vec<&'a HistoryPoint> {
    history
        .iter()
        .filter(|p| filter.from_year.is_none_or(|from| p.year >= from))
        .filter(|p| filter.to_year.is_none_or(|to| p.year <= to))
        .filter(|p| {
            filter.micro_regions.is_empty() || filter.micro_regions.contains(&p.micro_region)
        })
        .filter(|p| filter.commune.as_ref().is_none_or(|name| &p.commune == name))
        .collect()
}

/// Splits 100 % evenly across the commune's served zones.
///
/// Each zone gets `100 / n`; the integer remainder goes to the last zone
/// so the shares always sum to 100.
#[must_use]
pub fn zone_shares(commune: &CommuneRecord) -> Vec<ZoneShare> {
    let Ok(count) = u32::try_from(commune.served_zones.len()) else {
        return Vec::new();
    };
    if count == 0 {
        return Vec::new();
    }

    let base = 100 / count;
    let remainder = 100 - base * count;

    let mut shares: Vec<ZoneShare> = commune
        .served_zones
        .iter()
        .map(|zone| ZoneShare {
            zone: zone.clone(),
            percent: base,
        })
        .collect();

    if let Some(last) = shares.last_mut() {
        last.percent += remainder;
    }

    shares
}
