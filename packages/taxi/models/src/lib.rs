#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Commune and taxi station types for the Reunion taxi dashboard.
//!
//! The qualitative columns of the reference data (activity level, night
//! coverage, airport access, station type) are closed enumerations with a
//! defined ordering, so comparisons and validation are exhaustive. Each
//! enum serializes as `SCREAMING_SNAKE_CASE` and carries the French label
//! used by the dashboard front-end.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// One of the five geographic groupings of communes on the island.
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
pub enum MicroRegion {
    /// Saint-Denis and the northern coast.
    North,
    /// The southern coast and the Sud Sauvage.
    South,
    /// The leeward coast from Le Port to Les Avirons.
    West,
    /// The windward coast.
    East,
    /// The inland cirques (Cilaos, Salazie).
    Cirques,
}

impl MicroRegion {
    /// Display label used by the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "Nord",
            Self::South => "Sud",
            Self::West => "Ouest",
            Self::East => "Est",
            Self::Cirques => "Cirques",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::North, Self::South, Self::West, Self::East, Self::Cirques]
    }
}

/// Qualitative level of commercial taxi activity in a commune.
///
/// Ordered from least to most active, so `High > Medium > Low > Limited`.
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
pub enum ActivityLevel {
    /// Very little activity, typically rural or mountain communes.
    Limited,
    /// Low activity.
    Low,
    /// Moderate activity.
    Medium,
    /// Sustained activity.
    High,
}

impl ActivityLevel {
    /// Display label used by the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "Élevé",
            Self::Medium => "Moyen",
            Self::Low => "Faible",
            Self::Limited => "Limitée",
        }
    }

    /// Returns all variants, most active first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::High, Self::Medium, Self::Low, Self::Limited]
    }
}

/// How well a commune is served by taxis at night.
///
/// Ordered from no coverage to high coverage.
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
pub enum NightCoverage {
    /// No night service.
    Absent,
    /// Occasional night service.
    VeryLow,
    /// Low night coverage.
    Low,
    /// Moderate night coverage.
    Medium,
    /// High night coverage.
    High,
}

impl NightCoverage {
    /// Display label used by the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Absent => "Nulle",
            Self::VeryLow => "Très faible",
            Self::Low => "Faible",
            Self::Medium => "Moyenne",
            Self::High => "Élevée",
        }
    }
}

/// Distance category between a commune and Roland Garros airport.
///
/// Ordered from nearest to farthest.
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
pub enum AirportAccess {
    /// Direct access to the airport.
    Direct,
    /// Close to the airport.
    Near,
    /// Far from the airport.
    Far,
    /// Very far from the airport.
    VeryFar,
}

impl AirportAccess {
    /// Display label used by the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Direct => "Direct",
            Self::Near => "Proche",
            Self::Far => "Éloigné",
            Self::VeryFar => "Très éloigné",
        }
    }
}

/// Kind of site a taxi station serves.
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
pub enum StationType {
    /// Main bus/taxi interchange.
    Main,
    /// Airport rank.
    Airport,
    /// Harbour rank.
    Port,
    /// Hospital rank.
    Hospital,
    /// University campus rank.
    University,
    /// Shopping/business zone rank.
    Commercial,
    /// Railway/tram-train station rank.
    Rail,
}

impl StationType {
    /// Display label used by the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Main => "Principale",
            Self::Airport => "Aéroport",
            Self::Port => "Portuaire",
            Self::Hospital => "Hôpital",
            Self::University => "Universitaire",
            Self::Commercial => "Commerciale",
            Self::Rail => "Ferroviaire",
        }
    }
}

/// WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Reference taxi statistics for a single commune.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuneRecord {
    /// Commune name, unique across the dataset.
    pub name: String,
    /// Micro-region the commune belongs to.
    pub micro_region: MicroRegion,
    /// Resident population.
    pub population: u32,
    /// Licensed taxi vehicles.
    pub taxi_count: u32,
    /// Licensed taxi drivers ("taxiteurs").
    pub driver_count: u32,
    /// Qualitative activity level.
    pub activity_level: ActivityLevel,
    /// Average number of trips per day.
    pub daily_demand: u32,
    /// Average monthly driver revenue in euros.
    pub monthly_revenue: u32,
    /// Number of primary taxi stations.
    pub primary_stations: u32,
    /// Share of time taxis carry a fare, in percent (0-100).
    pub occupation_rate: f64,
    /// Night coverage category.
    pub night_coverage: NightCoverage,
    /// Airport access category.
    pub airport_access: AirportAccess,
    /// Zones served, in display order.
    pub served_zones: Vec<String>,
    /// Town centre location.
    pub coordinates: Coordinates,
    /// Free-text description.
    pub description: String,
}

/// A named taxi station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    /// Station name.
    pub name: String,
    /// Name of the commune the station belongs to.
    pub commune: String,
    /// Taxis usually posted at the station.
    pub taxi_count: u32,
    /// Station location.
    pub coordinates: Coordinates,
    /// Kind of station.
    pub station_type: StationType,
}

/// Survey dimensions of the driver population.
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
pub enum DriverProfileKind {
    AgeBand,
    Seniority,
    WeeklyHours,
    ContractType,
    TrainingLevel,
    Languages,
}

impl DriverProfileKind {
    /// Chart title used by the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AgeBand => "Répartition des taxiteurs par tranche d'âge",
            Self::Seniority => "Ancienneté dans le métier",
            Self::WeeklyHours => "Temps de travail hebdomadaire",
            Self::ContractType => "Répartition des types de contrats",
            Self::TrainingLevel => "Niveau de formation des taxiteurs",
            Self::Languages => "Compétences linguistiques des taxiteurs",
        }
    }
}

/// One bucket of a percentage distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareBucket {
    /// Bucket label (e.g. "30-40 ans").
    pub label: String,
    /// Share of respondents in percent.
    pub percent: u32,
}

/// A percentage distribution over one survey dimension.
///
/// Buckets of [`DriverProfileKind::Languages`] are independent answers and
/// do not sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverProfile {
    pub kind: DriverProfileKind,
    pub buckets: Vec<ShareBucket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_level_ordering() {
        assert!(ActivityLevel::High > ActivityLevel::Medium);
        assert!(ActivityLevel::Medium > ActivityLevel::Low);
        assert!(ActivityLevel::Low > ActivityLevel::Limited);

        let all = ActivityLevel::all();
        assert!(all.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn coverage_and_access_ordering() {
        assert!(NightCoverage::High > NightCoverage::VeryLow);
        assert!(NightCoverage::VeryLow > NightCoverage::Absent);
        assert!(AirportAccess::Direct < AirportAccess::VeryFar);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("west".parse::<MicroRegion>().unwrap(), MicroRegion::West);
        assert_eq!("WEST".parse::<MicroRegion>().unwrap(), MicroRegion::West);
        assert_eq!(
            "very_low".parse::<NightCoverage>().unwrap(),
            NightCoverage::VeryLow
        );
        assert!("Ouest".parse::<MicroRegion>().is_err());
    }

    #[test]
    fn display_matches_serde_name() {
        for region in MicroRegion::all() {
            let json = serde_json::to_string(region).unwrap();
            assert_eq!(json, format!("\"{region}\""));
        }
        assert_eq!(AirportAccess::VeryFar.to_string(), "VERY_FAR");
    }

    #[test]
    fn labels() {
        assert_eq!(MicroRegion::North.label(), "Nord");
        assert_eq!(ActivityLevel::High.label(), "Élevé");
        assert_eq!(NightCoverage::Absent.label(), "Nulle");
        assert_eq!(StationType::Airport.label(), "Aéroport");
    }

    #[test]
    fn commune_serializes_camel_case() {
        let commune = CommuneRecord {
            name: "Cilaos".to_string(),
            micro_region: MicroRegion::Cirques,
            population: 5528,
            taxi_count: 5,
            driver_count: 6,
            activity_level: ActivityLevel::Limited,
            daily_demand: 55,
            monthly_revenue: 1480,
            primary_stations: 1,
            occupation_rate: 28.5,
            night_coverage: NightCoverage::Absent,
            airport_access: AirportAccess::VeryFar,
            served_zones: vec!["Centre-cirque".to_string()],
            coordinates: Coordinates::new(-21.1339, 55.4719),
            description: "Cirque".to_string(),
        };

        let value = serde_json::to_value(&commune).unwrap();
        assert_eq!(value["microRegion"], "CIRQUES");
        assert_eq!(value["activityLevel"], "LIMITED");
        assert_eq!(value["servedZones"][0], "Centre-cirque");
        assert_eq!(value["coordinates"]["lat"], -21.1339);
    }
}
