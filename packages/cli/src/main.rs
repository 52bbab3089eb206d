#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the Reunion taxi dashboard.
//!
//! Every table command builds the [`Dashboard`] once, runs a single query
//! and prints the result as pretty JSON on stdout. Logs go to stderr so the
//! output can be piped. `serve` starts the HTTP API instead.

mod commands;

use clap::{Parser, Subcommand};
use reunion_taxi_analytics::{Dashboard, DashboardConfig};
use reunion_taxi_server::{ServerConfig, run_server};

#[derive(Parser)]
#[command(name = "reunion_taxi", about = "Reunion Island taxi dashboard")]
struct Cli {
    /// First year of synthesized history [env: `TAXI_HISTORY_START_YEAR`]
    #[arg(long, global = true)]
    start_year: Option<i32>,

    /// Last year of synthesized history [env: `TAXI_HISTORY_END_YEAR`]
    #[arg(long, global = true)]
    end_year: Option<i32>,

    /// Seed for the history noise [env: `TAXI_HISTORY_SEED`]
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Commune comparison table
    Communes {
        /// Micro-region to keep, or `all`
        #[arg(long)]
        micro_region: Option<String>,
        /// Activity level to keep, or `all`
        #[arg(long)]
        activity_level: Option<String>,
        /// Column to sort by, descending
        #[arg(long)]
        sort_by: Option<String>,
    },
    /// Detail view of one commune
    Commune {
        name: String,
    },
    /// Taxi stations, optionally for one commune
    Stations {
        #[arg(long)]
        commune: Option<String>,
    },
    /// Micro-region rollups, or the detail view of one micro-region
    Regions {
        region: Option<String>,
    },
    /// Synthesized yearly history
    History {
        /// Group per-year totals by `MICRO_REGION` or `COMMUNE`
        #[arg(long)]
        group_by: Option<String>,
        /// `TAXIS`, `DEMAND` or `REVENUE`
        #[arg(long)]
        metric: Option<String>,
        #[arg(long)]
        from_year: Option<i32>,
        #[arg(long)]
        to_year: Option<i32>,
        /// Comma-separated micro-regions
        #[arg(long)]
        regions: Option<String>,
        #[arg(long)]
        commune: Option<String>,
    },
    /// Top communes by one field
    Top {
        #[arg(long)]
        field: Option<String>,
        #[arg(short, default_value_t = 10)]
        n: usize,
    },
    /// Island-wide key figures
    Metrics,
    /// Taxi density against occupation rate
    Density,
    /// Driver profile breakdowns
    Drivers,
    /// The 2030 scenarios
    Scenarios,
    /// What-if simulator
    Simulate {
        #[arg(long)]
        tourism_growth: Option<u32>,
        #[arg(long)]
        digitalisation: Option<u32>,
        #[arg(long)]
        training_investment: Option<u32>,
        #[arg(long)]
        new_stations: Option<u32>,
        #[arg(long)]
        renewal_aid: Option<u32>,
        #[arg(long)]
        priority_region: Option<String>,
    },
    /// Start the HTTP API
    Serve {
        /// [env: `BIND_ADDR`]
        #[arg(long)]
        bind_addr: Option<String>,
        /// [env: `PORT`]
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    fn dashboard_config(&self) -> DashboardConfig {
        let mut config = DashboardConfig::from_env();
        if let Some(year) = self.start_year {
            config.history_start_year = year;
        }
        if self.end_year.is_some() {
            config.history_end_year = self.end_year;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    let dashboard = Dashboard::build(&cli.dashboard_config())?;

    match cli.command {
        Commands::Serve { bind_addr, port } => {
            let mut config = ServerConfig::from_env();
            if let Some(bind_addr) = bind_addr {
                config.bind_addr = bind_addr;
            }
            if let Some(port) = port {
                config.port = port;
            }
            actix_rt::System::new().block_on(run_server(dashboard, config))?;
        }
        command => {
            let output = commands::run(&dashboard, command)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_flags_override_environment() {
        let cli = Cli::try_parse_from([
            "reunion_taxi",
            "metrics",
            "--start-year",
            "2019",
            "--end-year",
            "2023",
            "--seed",
            "5",
        ])
        .unwrap();
        let config = cli.dashboard_config();

        assert_eq!(config.history_start_year, 2019);
        assert_eq!(config.history_end_year, Some(2023));
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn parses_filters() {
        let cli = Cli::try_parse_from([
            "reunion_taxi",
            "communes",
            "--micro-region",
            "west",
            "--sort-by",
            "MONTHLY_REVENUE",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Commands::Communes {
                micro_region: Some(ref r),
                activity_level: None,
                sort_by: Some(ref s),
            }
                if r == "west" && s == "MONTHLY_REVENUE"
        ));
    }

    #[test]
    fn top_defaults_to_ten() {
        let cli = Cli::try_parse_from(["reunion_taxi", "top"]).unwrap();
        assert!(matches!(cli.command, Commands::Top { field: None, n: 10 }));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["reunion_taxi", "launch"]).is_err());
    }
}
