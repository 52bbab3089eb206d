#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Static reference data for the Reunion taxi dashboard.
//!
//! The commune and station tables are compiled into the binary. A
//! [`Dataset`] is built from them once at startup, validated, and never
//! mutated afterwards; every derived table is computed from it.

pub mod communes;
pub mod profiles;
pub mod stations;

use std::collections::BTreeSet;

use reunion_taxi_models::{CommuneRecord, StationRecord};
use thiserror::Error;

/// Errors raised while validating reference data.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A commune row has an empty name.
    #[error("Commune at position {index} has an empty name")]
    EmptyName {
        /// Position of the row in the input.
        index: usize,
    },

    /// Two commune rows share a name.
    #[error("Duplicate commune: {name}")]
    DuplicateCommune {
        /// The repeated name.
        name: String,
    },

    /// Occupation rate is not a percentage.
    #[error("Occupation rate {rate} for {commune} is outside 0-100")]
    OccupationOutOfRange {
        /// Commune name.
        commune: String,
        /// The offending rate.
        rate: f64,
    },

    /// A station points at a commune that is not in the dataset.
    #[error("Station '{station}' references unknown commune '{commune}'")]
    UnknownStationCommune {
        /// Station name.
        station: String,
        /// The commune name that failed to resolve.
        commune: String,
    },
}

/// Validated, immutable commune and station tables.
#[derive(Debug, Clone)]
pub struct Dataset {
    communes: Vec<CommuneRecord>,
    stations: Vec<StationRecord>,
}

impl Dataset {
    /// Builds the dataset from the embedded tables.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the embedded tables fail validation.
    pub fn load() -> Result<Self, DatasetError> {
        let communes = communes::COMMUNES
            .iter()
            .map(communes::CommuneSeed::to_record)
            .collect();
        let stations = stations::STATIONS
            .iter()
            .map(stations::StationSeed::to_record)
            .collect();

        Self::new(communes, stations)
    }

    /// Builds a dataset from arbitrary tables, checking that commune names
    /// are non-empty and unique, occupation rates are within 0-100, and
    /// every station references an existing commune.
    ///
    /// # Errors
    ///
    /// Returns the first [`DatasetError`] encountered.
    pub fn new(
        communes: Vec<CommuneRecord>,
        stations: Vec<StationRecord>,
    ) -> Result<Self, DatasetError> {
        let mut names = BTreeSet::new();

        for (index, commune) in communes.iter().enumerate() {
            if commune.name.trim().is_empty() {
                return Err(DatasetError::EmptyName { index });
            }
            if !names.insert(commune.name.as_str()) {
                return Err(DatasetError::DuplicateCommune {
                    name: commune.name.clone(),
                });
            }
            if !(0.0..=100.0).contains(&commune.occupation_rate) {
                return Err(DatasetError::OccupationOutOfRange {
                    commune: commune.name.clone(),
                    rate: commune.occupation_rate,
                });
            }
            if commune.population == 0 {
                log::warn!("Commune {} has zero population", commune.name);
            }
        }

        for station in &stations {
            if !names.contains(station.commune.as_str()) {
                return Err(DatasetError::UnknownStationCommune {
                    station: station.name.clone(),
                    commune: station.commune.clone(),
                });
            }
        }

        log::debug!(
            "Loaded {} communes and {} stations",
            communes.len(),
            stations.len()
        );

        Ok(Self { communes, stations })
    }

    /// All communes, in dataset order.
    #[must_use]
    pub fn communes(&self) -> &[CommuneRecord] {
        &self.communes
    }

    /// All stations, in dataset order.
    #[must_use]
    pub fn stations(&self) -> &[StationRecord] {
        &self.stations
    }

    /// Looks up a commune by exact name.
    #[must_use]
    pub fn commune(&self, name: &str) -> Option<&CommuneRecord> {
        self.communes.iter().find(|c| c.name == name)
    }

    /// Stations belonging to the given commune, in dataset order.
    #[must_use]
    pub fn stations_for(&self, commune: &str) -> Vec<&StationRecord> {
        self.stations
            .iter()
            .filter(|s| s.commune == commune)
            .collect()
    }
}
