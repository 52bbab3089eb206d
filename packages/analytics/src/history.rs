//! Synthetic multi-year history.
//!
//! The reference data only describes the current year. Earlier years are
//! reconstructed from it with a linear +4 %/year trend and a small
//! multiplicative noise term, so that the time-series views have
//! something plausible to draw.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reunion_taxi_analytics_models::HistoryPoint;
use reunion_taxi_models::CommuneRecord;

/// First year covered by the synthesized history.
pub const FIRST_RECORDED_YEAR: i32 = 2018;

/// Relative growth applied per elapsed year.
pub const TREND_PER_YEAR: f64 = 0.04;

/// Standard deviation of the multiplicative noise (mean 1).
pub const NOISE_STD_DEV: f64 = 0.03;

const TAXI_BASELINE: f64 = 0.9;
const DEMAND_BASELINE: f64 = 0.85;
const REVENUE_BASELINE: f64 = 0.9;

/// Trend multiplier for `year` relative to `start_year`.
#[must_use]
pub fn trend_factor(year: i32, start_year: i32) -> f64 {
    TREND_PER_YEAR.mul_add(f64::from(year - start_year), 1.0)
}

/// Generates one [`HistoryPoint`] per (year, commune) for every year in
/// `start_year..=end_year`, ordered by year then by commune in input order.
///
/// Noise is drawn from a [`StdRng`] seeded with `seed`, so identical inputs
/// always yield identical output. An inverted range yields no points.
#[must_use]
pub fn generate_history(
    communes: &[CommuneRecord],
    start_year: i32,
    end_year: i32,
    seed: u64,
) -> Vec<HistoryPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_history_with(communes, start_year, end_year, &mut rng)
}

/// Same as [`generate_history`], drawing noise from a caller-supplied RNG.
///
/// One noise value is drawn per point and shared by the taxi and demand
/// columns. Revenue carries the trend only.
pub fn generate_history_with<R: Rng + ?Sized>(
    communes: &[CommuneRecord],
    start_year: i32,
    end_year: i32,
    rng: &mut R,
) -> Vec<HistoryPoint> {
    let years = usize::try_from(i64::from(end_year) - i64::from(start_year) + 1).unwrap_or(0);
    let mut points = Vec::with_capacity(years * communes.len());

    for year in start_year..=end_year {
        let trend = trend_factor(year, start_year);

        for commune in communes {
            let noise = sample_noise(rng);

            points.push(HistoryPoint {
                year,
                commune: commune.name.clone(),
                micro_region: commune.micro_region,
                taxis: f64::from(commune.taxi_count) * TAXI_BASELINE * trend * noise,
                daily_demand: f64::from(commune.daily_demand) * DEMAND_BASELINE * trend * noise,
                monthly_revenue: f64::from(commune.monthly_revenue) * REVENUE_BASELINE * trend,
            });
        }
    }

    points
}

/// Draws from Normal(1, [`NOISE_STD_DEV`]).
fn sample_noise<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    NOISE_STD_DEV.mul_add(sample_standard_normal(rng), 1.0)
}

/// Box-Muller transform.
fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // random() is in [0, 1); keep u1 away from zero so ln() stays finite.
    let u1: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE);
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reunion_taxi_dataset::Dataset;

    fn communes() -> Vec<CommuneRecord> {
        Dataset::load().unwrap().communes().to_vec()
    }

    #[test]
    fn single_year_has_one_point_per_commune() {
        let communes = communes();
        let history = generate_history(&communes, 2018, 2018, 7);

        assert_eq!(history.len(), communes.len());
        for (point, commune) in history.iter().zip(&communes) {
            assert_eq!(point.year, 2018);
            assert_eq!(point.commune, commune.name);
            assert_eq!(point.micro_region, commune.micro_region);
            assert_eq!(
                point.monthly_revenue,
                f64::from(commune.monthly_revenue) * 0.9
            );
        }
    }

    #[test]
    fn ordered_by_year_then_dataset_order() {
        let communes = communes();
        let history = generate_history(&communes, 2018, 2024, 1);

        assert_eq!(history.len(), 7 * communes.len());
        for (i, point) in history.iter().enumerate() {
            let year_offset = i32::try_from(i / communes.len()).unwrap();
            assert_eq!(point.year, 2018 + year_offset);
            assert_eq!(point.commune, communes[i % communes.len()].name);
        }
    }

    #[test]
    fn revenue_follows_trend_without_noise() {
        let communes = communes();
        let history = generate_history(&communes, 2018, 2022, 3);
        let last = history
            .iter()
            .find(|p| p.year == 2022 && p.commune == "Saint-Denis")
            .unwrap();
        let expected = 2850.0 * 0.9 * 1.16;
        assert!((last.monthly_revenue - expected).abs() < 1e-9);
    }

    #[test]
    fn taxis_and_demand_share_noise() {
        let communes = communes();
        let history = generate_history(&communes, 2018, 2021, 11);

        for (i, point) in history.iter().enumerate() {
            let commune = &communes[i % communes.len()];
            let trend = trend_factor(point.year, 2018);
            let taxi_noise = point.taxis / (f64::from(commune.taxi_count) * 0.9 * trend);
            let demand_noise =
                point.daily_demand / (f64::from(commune.daily_demand) * 0.85 * trend);
            assert!((taxi_noise - demand_noise).abs() < 1e-9);
        }
    }

    #[test]
    fn same_seed_is_reproducible() {
        let communes = communes();
        let a = generate_history(&communes, 2018, 2025, 42);
        let b = generate_history(&communes, 2018, 2025, 42);
        let c = generate_history(&communes, 2018, 2025, 43);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(generate_history(&communes(), 2020, 2019, 0).is_empty());
        assert!(generate_history(&[], 2018, 2024, 0).is_empty());
    }

    #[test]
    fn noise_is_centred_on_one() {
        let mut rng = StdRng::seed_from_u64(2024);
        let n = 5000;
        let samples: Vec<f64> = (0..n).map(|_| sample_noise(&mut rng)).collect();
        let mean = samples.iter().sum::<f64>() / f64::from(n);
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / f64::from(n);

        assert!((mean - 1.0).abs() < 0.005, "mean {mean}");
        assert!((var.sqrt() - NOISE_STD_DEV).abs() < 0.005, "std dev {}", var.sqrt());
    }

    #[test]
    fn trend_factor_values() {
        assert!((trend_factor(2018, 2018) - 1.0).abs() < f64::EPSILON);
        assert!((trend_factor(2023, 2018) - 1.2).abs() < 1e-12);
    }
}
