//! Embedded taxi station table.

use reunion_taxi_models::{Coordinates, StationRecord, StationType};

/// A station row in its compile-time form.
#[derive(Debug, Clone, Copy)]
pub struct StationSeed {
    pub name: &'static str,
    pub commune: &'static str,
    pub taxi_count: u32,
    pub lat: f64,
    pub lon: f64,
    pub station_type: StationType,
}

impl StationSeed {
    /// Converts the seed row into an owned [`StationRecord`].
    #[must_use]
    pub fn to_record(&self) -> StationRecord {
        StationRecord {
            name: self.name.to_string(),
            commune: self.commune.to_string(),
            taxi_count: self.taxi_count,
            coordinates: Coordinates::new(self.lat, self.lon),
            station_type: self.station_type,
        }
    }
}

/// Main taxi stations. Every `commune` must name a row of
/// [`crate::communes::COMMUNES`].
pub const STATIONS: &[StationSeed] = &[
    StationSeed {
        name: "Gare Routière Saint-Denis",
        commune: "Saint-Denis",
        taxi_count: 45,
        lat: -20.882,
        lon: 55.448,
        station_type: StationType::Main,
    },
    StationSeed {
        name: "Aéroport Roland Garros",
        commune: "Sainte-Marie",
        taxi_count: 35,
        lat: -20.887,
        lon: 55.510,
        station_type: StationType::Airport,
    },
    StationSeed {
        name: "Gare de Saint-Paul",
        commune: "Saint-Paul",
        taxi_count: 25,
        lat: -21.010,
        lon: 55.270,
        station_type: StationType::Main,
    },
    StationSeed {
        name: "Port de Saint-Pierre",
        commune: "Saint-Pierre",
        taxi_count: 20,
        lat: -21.340,
        lon: 55.478,
        station_type: StationType::Port,
    },
    StationSeed {
        name: "CHU Félix Guyon",
        commune: "Saint-Denis",
        taxi_count: 18,
        lat: -20.899,
        lon: 55.495,
        station_type: StationType::Hospital,
    },
    StationSeed {
        name: "Université de La Réunion",
        commune: "Saint-Denis",
        taxi_count: 15,
        lat: -20.905,
        lon: 55.485,
        station_type: StationType::University,
    },
    StationSeed {
        name: "ZAC Cambaie",
        commune: "Saint-Paul",
        taxi_count: 12,
        lat: -20.985,
        lon: 55.290,
        station_type: StationType::Commercial,
    },
    StationSeed {
        name: "Gare du Port",
        commune: "Le Port",
        taxi_count: 15,
        lat: -20.939,
        lon: 55.293,
        station_type: StationType::Rail,
    },
];
