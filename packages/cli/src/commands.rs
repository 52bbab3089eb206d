//! Table commands. Each one runs a single dashboard query and returns the
//! JSON value to print.

use reunion_taxi_analytics::{Dashboard, aggregate, query, scenarios};
use reunion_taxi_analytics_models::{
    CommuneFilter, CommuneMetric, GroupKey, HistoryFilter, HistoryMetric, SimulatorParams,
};
use reunion_taxi_dataset::profiles;
use reunion_taxi_models::MicroRegion;
use reunion_taxi_server_models::{ApiDriverProfile, ApiRegion, parse_filter, parse_filter_list};
use serde_json::Value;

use crate::Commands;

pub fn run(dashboard: &Dashboard, command: Commands) -> Result<Value, Box<dyn std::error::Error>> {
    let value = match command {
        Commands::Communes {
            micro_region,
            activity_level,
            sort_by,
        } => {
            let filter = CommuneFilter {
                micro_region: parse_filter("micro-region", micro_region.as_deref())?,
                activity_level: parse_filter("activity-level", activity_level.as_deref())?,
                sort_key: parse_filter("sort-by", sort_by.as_deref())?.unwrap_or_default(),
            };
            serde_json::to_value(query::filter_communes(dashboard.communes(), &filter))?
        }
        Commands::Commune { name } => serde_json::to_value(dashboard.commune_detail(&name)?)?,
        Commands::Stations { commune: Some(name) } => {
            if dashboard.dataset().commune(&name).is_none() {
                log::warn!("No commune named {name}");
            }
            serde_json::to_value(dashboard.dataset().stations_for(&name))?
        }
        Commands::Stations { commune: None } => serde_json::to_value(dashboard.stations())?,
        Commands::Regions { region: None } => {
            let regions: Vec<ApiRegion> = dashboard
                .regions()
                .values()
                .map(ApiRegion::from)
                .collect();
            serde_json::to_value(regions)?
        }
        Commands::Regions {
            region: Some(region),
        } => {
            let region: MicroRegion = region
                .trim()
                .parse()
                .map_err(|_| format!("Unknown micro-region: {region}"))?;
            serde_json::to_value(dashboard.region_detail(region)?)?
        }
        Commands::History {
            group_by,
            metric,
            from_year,
            to_year,
            regions,
            commune,
        } => {
            let filter = HistoryFilter {
                from_year,
                to_year,
                micro_regions: parse_filter_list("regions", regions.as_deref())?,
                commune,
            };
            let group_by: Option<GroupKey> = parse_filter("group-by", group_by.as_deref())?;
            let metric: HistoryMetric =
                parse_filter("metric", metric.as_deref())?.unwrap_or_default();
            let points = query::filter_history(dashboard.history(), &filter);

            match group_by {
                Some(group_key) => {
                    serde_json::to_value(aggregate::summarize_by_year(points, group_key, metric))?
                }
                None => serde_json::to_value(points)?,
            }
        }
        Commands::Top { field, n } => {
            let metric: CommuneMetric =
                parse_filter("field", field.as_deref())?.unwrap_or_default();
            serde_json::to_value(query::top_n(dashboard.communes(), metric, n))?
        }
        Commands::Metrics => serde_json::to_value(dashboard.key_metrics())?,
        Commands::Density => serde_json::to_value(aggregate::density_table(dashboard.communes()))?,
        Commands::Drivers => {
            let profiles: Vec<ApiDriverProfile> = profiles::driver_profiles()
                .into_iter()
                .map(ApiDriverProfile::from)
                .collect();
            serde_json::to_value(profiles)?
        }
        Commands::Scenarios => serde_json::to_value(scenarios::scenarios_2030())?,
        Commands::Simulate {
            tourism_growth,
            digitalisation,
            training_investment,
            new_stations,
            renewal_aid,
            priority_region,
        } => {
            let defaults = SimulatorParams::default();
            let params = SimulatorParams {
                tourism_growth: tourism_growth.unwrap_or(defaults.tourism_growth),
                digitalisation: digitalisation.unwrap_or(defaults.digitalisation),
                training_investment: training_investment.unwrap_or(defaults.training_investment),
                new_stations: new_stations.unwrap_or(defaults.new_stations),
                renewal_aid: renewal_aid.unwrap_or(defaults.renewal_aid),
                priority_region: parse_filter("priority-region", priority_region.as_deref())?,
            };
            serde_json::to_value(scenarios::simulate(dashboard.communes(), &params)?)?
        }
        Commands::Serve { .. } => return Err("serve does not print a table".into()),
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reunion_taxi_analytics::DashboardConfig;

    fn dashboard() -> Dashboard {
        Dashboard::build(&DashboardConfig {
            history_start_year: 2018,
            history_end_year: Some(2022),
            seed: Some(3),
        })
        .unwrap()
    }

    #[test]
    fn communes_with_all_sentinel() {
        let value = run(
            &dashboard(),
            Commands::Communes {
                micro_region: Some("ALL".to_string()),
                activity_level: Some("high".to_string()),
                sort_by: None,
            },
        )
        .unwrap();

        let communes = value.as_array().unwrap();
        assert!(!communes.is_empty());
        assert!(communes.iter().all(|c| c["activityLevel"] == "HIGH"));
    }

    #[test]
    fn invalid_filter_is_an_error() {
        let result = run(
            &dashboard(),
            Commands::Communes {
                micro_region: Some("mars".to_string()),
                activity_level: None,
                sort_by: None,
            },
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid micro-region: mars"
        );
    }

    #[test]
    fn stations_for_commune() {
        let value = run(
            &dashboard(),
            Commands::Stations {
                commune: Some("Saint-Denis".to_string()),
            },
        )
        .unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
    }

    #[test]
    fn region_detail_and_unknown_region() {
        let value = run(
            &dashboard(),
            Commands::Regions {
                region: Some("south".to_string()),
            },
        )
        .unwrap();
        assert_eq!(value["summary"]["totalTaxis"], 261);

        assert!(
            run(
                &dashboard(),
                Commands::Regions {
                    region: Some("nowhere".to_string()),
                },
            )
            .is_err()
        );
    }

    #[test]
    fn grouped_history() {
        let value = run(
            &dashboard(),
            Commands::History {
                group_by: Some("commune".to_string()),
                metric: Some("revenue".to_string()),
                from_year: Some(2022),
                to_year: None,
                regions: None,
                commune: None,
            },
        )
        .unwrap();

        let totals = value.as_array().unwrap();
        assert_eq!(totals.len(), 23);
        assert!(totals.iter().all(|t| t["year"] == 2022));
    }

    #[test]
    fn simulate_rejects_out_of_range() {
        let result = run(
            &dashboard(),
            Commands::Simulate {
                tourism_growth: Some(80),
                digitalisation: None,
                training_investment: None,
                new_stations: None,
                renewal_aid: None,
                priority_region: None,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn serve_is_not_a_table() {
        let result = run(
            &dashboard(),
            Commands::Serve {
                bind_addr: None,
                port: None,
            },
        );
        assert!(result.is_err());
    }
}
