//! 2030 development scenarios and the what-if simulator.
//!
//! The scenarios are fixed illustrative targets. The simulator applies
//! simple percentage uplifts to current island totals; neither is a
//! forecasting model.

use reunion_taxi_analytics_models::{Scenario, ScenarioKind, SimulatorParams, SimulatorResult};
use reunion_taxi_models::CommuneRecord;

use crate::AnalyticsError;

/// (kind, taxis, daily demand, mean revenue, digitalisation %)
const SCENARIOS_2030: &[(ScenarioKind, u32, u32, u32, u32)] = &[
    (ScenarioKind::Conservative, 680, 12_500, 2950, 40),
    (ScenarioKind::Moderate, 750, 14_500, 3200, 60),
    (ScenarioKind::Ambitious, 820, 16_500, 3500, 80),
    (ScenarioKind::Innovative, 900, 18_500, 3800, 95),
];

/// The four 2030 scenarios, least to most ambitious.
#[must_use]
pub fn scenarios_2030() -> Vec<Scenario> {
    SCENARIOS_2030
        .iter()
        .map(|&(kind, taxis, demand, revenue, digitalisation)| Scenario {
            kind,
            label: kind.label().to_string(),
            taxis_2030: taxis,
            daily_demand_2030: demand,
            mean_revenue_2030: revenue,
            digitalisation_percent: digitalisation,
        })
        .collect()
}

fn check_range(name: &'static str, value: u32, max: u32) -> Result<(), AnalyticsError> {
    if value > max {
        return Err(AnalyticsError::InvalidParameter {
            name,
            message: format!("{value} is outside 0-{max}"),
        });
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn percent_change(current: u64, projected: f64) -> Option<f64> {
    (current != 0).then(|| (projected / current as f64 - 1.0) * 100.0)
}

/// Projects island totals from the simulator sliders.
///
/// Taxis grow by `tourism_growth + digitalisation / 2` percent and demand
/// by `tourism_growth + 2 * new_stations` percent. The remaining inputs
/// are carried through unchanged.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidParameter`] if a slider value is out of
/// its range.
#[allow(clippy::cast_precision_loss)]
pub fn simulate(
    communes: &[CommuneRecord],
    params: &SimulatorParams,
) -> Result<SimulatorResult, AnalyticsError> {
    check_range("tourismGrowth", params.tourism_growth, 50)?;
    check_range("digitalisation", params.digitalisation, 100)?;
    check_range("trainingInvestment", params.training_investment, 10)?;
    check_range("newStations", params.new_stations, 20)?;
    check_range("renewalAid", params.renewal_aid, 50)?;

    let current_taxis: u64 = communes.iter().map(|c| u64::from(c.taxi_count)).sum();
    let current_demand: u64 = communes.iter().map(|c| u64::from(c.daily_demand)).sum();

    let taxi_uplift =
        (f64::from(params.tourism_growth) + f64::from(params.digitalisation) / 2.0) / 100.0;
    let demand_uplift =
        (f64::from(params.tourism_growth) + f64::from(params.new_stations) * 2.0) / 100.0;

    let projected_taxis = current_taxis as f64 * (1.0 + taxi_uplift);
    let projected_demand = current_demand as f64 * (1.0 + demand_uplift);

    log::debug!(
        "Simulated {current_taxis} -> {projected_taxis:.0} taxis, \
         {current_demand} -> {projected_demand:.0} trips/day"
    );

    Ok(SimulatorResult {
        current_taxis,
        projected_taxis,
        taxis_change_percent: percent_change(current_taxis, projected_taxis),
        current_daily_demand: current_demand,
        projected_daily_demand: projected_demand,
        demand_change_percent: percent_change(current_demand, projected_demand),
        training_investment: params.training_investment,
        new_stations: params.new_stations,
        renewal_aid: params.renewal_aid,
        priority_region: params.priority_region,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reunion_taxi_dataset::Dataset;
    use reunion_taxi_models::MicroRegion;

    #[test]
    fn scenario_table() {
        let scenarios = scenarios_2030();
        assert_eq!(scenarios.len(), 4);
        assert_eq!(scenarios[0].kind, ScenarioKind::Conservative);
        assert_eq!(scenarios[0].label, "Conservateur");
        assert_eq!(scenarios[3].taxis_2030, 900);
        assert_eq!(scenarios[3].daily_demand_2030, 18_500);
        assert!(
            scenarios
                .windows(2)
                .all(|w| w[0].taxis_2030 < w[1].taxis_2030)
        );
    }

    #[test]
    fn default_sliders() {
        let dataset = Dataset::load().unwrap();
        let result = simulate(dataset.communes(), &SimulatorParams::default()).unwrap();

        // +20 % tourism, 60 % digitalisation -> +50 % taxis.
        assert_eq!(result.current_taxis, 911);
        assert!((result.projected_taxis - 1366.5).abs() < 1e-9);
        assert!((result.taxis_change_percent.unwrap() - 50.0).abs() < 1e-9);

        // +20 % tourism, 8 new stations -> +36 % demand.
        assert_eq!(result.current_daily_demand, 12_715);
        assert!((result.projected_daily_demand - 17_292.4).abs() < 1e-6);
        assert!((result.demand_change_percent.unwrap() - 36.0).abs() < 1e-9);
    }

    #[test]
    fn inputs_are_echoed() {
        let params = SimulatorParams {
            priority_region: Some(MicroRegion::East),
            training_investment: 7,
            ..SimulatorParams::default()
        };
        let result = simulate(&[], &params).unwrap();

        assert_eq!(result.priority_region, Some(MicroRegion::East));
        assert_eq!(result.training_investment, 7);
        assert_eq!(result.taxis_change_percent, None);
        assert_eq!(result.demand_change_percent, None);
    }

    #[test]
    fn rejects_out_of_range_sliders() {
        let params = SimulatorParams {
            digitalisation: 101,
            ..SimulatorParams::default()
        };
        let err = simulate(&[], &params).unwrap_err();
        assert!(matches!(
            err,
            AnalyticsError::InvalidParameter { name: "digitalisation", .. }
        ));
    }
}
