//! Embedded commune reference table.
//!
//! One row per commune of the island, as published by the mobility
//! observatory for the 2024 reporting year. The values are reference data
//! and are copied verbatim into [`CommuneRecord`]s.

use reunion_taxi_models::{
    ActivityLevel, AirportAccess, CommuneRecord, Coordinates, MicroRegion, NightCoverage,
};

/// A commune row in its compile-time form.
#[derive(Debug, Clone, Copy)]
pub struct CommuneSeed {
    pub name: &'static str,
    pub micro_region: MicroRegion,
    pub population: u32,
    pub taxi_count: u32,
    pub driver_count: u32,
    pub activity_level: ActivityLevel,
    pub daily_demand: u32,
    pub monthly_revenue: u32,
    pub primary_stations: u32,
    pub occupation_rate: f64,
    pub night_coverage: NightCoverage,
    pub airport_access: AirportAccess,
    pub served_zones: &'static [&'static str],
    pub lat: f64,
    pub lon: f64,
    pub description: &'static str,
}

impl CommuneSeed {
    /// Converts the seed row into an owned [`CommuneRecord`].
    #[must_use]
    pub fn to_record(&self) -> CommuneRecord {
        CommuneRecord {
            name: self.name.to_string(),
            micro_region: self.micro_region,
            population: self.population,
            taxi_count: self.taxi_count,
            driver_count: self.driver_count,
            activity_level: self.activity_level,
            daily_demand: self.daily_demand,
            monthly_revenue: self.monthly_revenue,
            primary_stations: self.primary_stations,
            occupation_rate: self.occupation_rate,
            night_coverage: self.night_coverage,
            airport_access: self.airport_access,
            served_zones: self.served_zones.iter().map(ToString::to_string).collect(),
            coordinates: Coordinates::new(self.lat, self.lon),
            description: self.description.to_string(),
        }
    }
}

/// The 23 communes, in publication order.
pub const COMMUNES: &[CommuneSeed] = &[
    CommuneSeed {
        name: "Saint-Denis",
        micro_region: MicroRegion::North,
        population: 153_810,
        taxi_count: 185,
        driver_count: 220,
        activity_level: ActivityLevel::High,
        daily_demand: 2450,
        monthly_revenue: 2850,
        primary_stations: 8,
        occupation_rate: 78.5,
        night_coverage: NightCoverage::High,
        airport_access: AirportAccess::Direct,
        served_zones: &["Centre-ville", "Université", "CHU", "Aéroport"],
        lat: -20.8789,
        lon: 55.4481,
        description: "Préfecture, plus forte densité de taxis",
    },
    CommuneSeed {
        name: "Saint-Paul",
        micro_region: MicroRegion::West,
        population: 105_240,
        taxi_count: 120,
        driver_count: 145,
        activity_level: ActivityLevel::High,
        daily_demand: 1680,
        monthly_revenue: 2650,
        primary_stations: 6,
        occupation_rate: 72.3,
        night_coverage: NightCoverage::Medium,
        airport_access: AirportAccess::Near,
        served_zones: &["Centre-ville", "Zones commerciales", "Plages"],
        lat: -21.0097,
        lon: 55.2697,
        description: "Fort potentiel touristique et résidentiel",
    },
    CommuneSeed {
        name: "Saint-Pierre",
        micro_region: MicroRegion::South,
        population: 84_520,
        taxi_count: 95,
        driver_count: 115,
        activity_level: ActivityLevel::High,
        daily_demand: 1420,
        monthly_revenue: 2580,
        primary_stations: 5,
        occupation_rate: 69.8,
        night_coverage: NightCoverage::Medium,
        airport_access: AirportAccess::Far,
        served_zones: &["Centre-ville", "Port", "Zones d'activité"],
        lat: -21.3393,
        lon: 55.4781,
        description: "Pôle économique du Sud, activité soutenue",
    },
    CommuneSeed {
        name: "Le Tampon",
        micro_region: MicroRegion::South,
        population: 79_849,
        taxi_count: 65,
        driver_count: 80,
        activity_level: ActivityLevel::Medium,
        daily_demand: 980,
        monthly_revenue: 2320,
        primary_stations: 3,
        occupation_rate: 65.2,
        night_coverage: NightCoverage::Low,
        airport_access: AirportAccess::Far,
        served_zones: &["Centre-ville", "Zones résidentielles"],
        lat: -21.2779,
        lon: 55.5179,
        description: "Commune résidentielle, demande régulière",
    },
    CommuneSeed {
        name: "Saint-Louis",
        micro_region: MicroRegion::South,
        population: 53_609,
        taxi_count: 45,
        driver_count: 55,
        activity_level: ActivityLevel::Medium,
        daily_demand: 720,
        monthly_revenue: 2250,
        primary_stations: 2,
        occupation_rate: 61.8,
        night_coverage: NightCoverage::Low,
        airport_access: AirportAccess::Far,
        served_zones: &["Centre-ville", "Collège", "Lycée"],
        lat: -21.2861,
        lon: 55.4111,
        description: "Dynamisme économique modéré",
    },
    CommuneSeed {
        name: "Saint-André",
        micro_region: MicroRegion::East,
        population: 56_602,
        taxi_count: 38,
        driver_count: 45,
        activity_level: ActivityLevel::Medium,
        daily_demand: 580,
        monthly_revenue: 2180,
        primary_stations: 2,
        occupation_rate: 58.5,
        night_coverage: NightCoverage::VeryLow,
        airport_access: AirportAccess::Far,
        served_zones: &["Centre-ville", "Zones agricoles"],
        lat: -20.9631,
        lon: 55.6508,
        description: "Commune rurale, activité modérée",
    },
    CommuneSeed {
        name: "Saint-Leu",
        micro_region: MicroRegion::West,
        population: 34_746,
        taxi_count: 42,
        driver_count: 50,
        activity_level: ActivityLevel::Medium,
        daily_demand: 650,
        monthly_revenue: 2450,
        primary_stations: 2,
        occupation_rate: 68.2,
        night_coverage: NightCoverage::Medium,
        airport_access: AirportAccess::Near,
        served_zones: &["Centre-ville", "Spot de surf", "Hôtels"],
        lat: -21.1653,
        lon: 55.2881,
        description: "Station balnéaire, forte saisonnalité",
    },
    CommuneSeed {
        name: "Saint-Joseph",
        micro_region: MicroRegion::South,
        population: 37_882,
        taxi_count: 28,
        driver_count: 35,
        activity_level: ActivityLevel::Low,
        daily_demand: 320,
        monthly_revenue: 1980,
        primary_stations: 1,
        occupation_rate: 45.8,
        night_coverage: NightCoverage::VeryLow,
        airport_access: AirportAccess::VeryFar,
        served_zones: &["Centre-ville", "Villages isolés"],
        lat: -21.3778,
        lon: 55.6197,
        description: "Grande commune, demande dispersée",
    },
    CommuneSeed {
        name: "Saint-Benoît",
        micro_region: MicroRegion::East,
        population: 37_308,
        taxi_count: 32,
        driver_count: 38,
        activity_level: ActivityLevel::Low,
        daily_demand: 380,
        monthly_revenue: 2050,
        primary_stations: 1,
        occupation_rate: 48.2,
        night_coverage: NightCoverage::VeryLow,
        airport_access: AirportAccess::Far,
        served_zones: &["Centre-ville", "Est"],
        lat: -21.0339,
        lon: 55.7147,
        description: "Relief contraignant, activité limitée",
    },
    CommuneSeed {
        name: "Sainte-Marie",
        micro_region: MicroRegion::North,
        population: 34_167,
        taxi_count: 35,
        driver_count: 42,
        activity_level: ActivityLevel::Medium,
        daily_demand: 520,
        monthly_revenue: 2350,
        primary_stations: 1,
        occupation_rate: 62.5,
        night_coverage: NightCoverage::Low,
        airport_access: AirportAccess::Direct,
        served_zones: &["Aéroport", "Zones résidentielles"],
        lat: -20.8969,
        lon: 55.5492,
        description: "Proche aéroport, activité aéroportuaire",
    },
    CommuneSeed {
        name: "La Possession",
        micro_region: MicroRegion::West,
        population: 33_506,
        taxi_count: 40,
        driver_count: 48,
        activity_level: ActivityLevel::Medium,
        daily_demand: 610,
        monthly_revenue: 2280,
        primary_stations: 2,
        occupation_rate: 59.8,
        night_coverage: NightCoverage::Low,
        airport_access: AirportAccess::Near,
        served_zones: &["Centre-ville", "Liaison Ouest"],
        lat: -20.9253,
        lon: 55.3358,
        description: "Développement rapide, demande croissante",
    },
    CommuneSeed {
        name: "Le Port",
        micro_region: MicroRegion::West,
        population: 32_995,
        taxi_count: 48,
        driver_count: 58,
        activity_level: ActivityLevel::Medium,
        daily_demand: 780,
        monthly_revenue: 2420,
        primary_stations: 3,
        occupation_rate: 66.7,
        night_coverage: NightCoverage::Medium,
        airport_access: AirportAccess::Near,
        served_zones: &["Port", "Zones industrielles", "Gare"],
        lat: -20.9394,
        lon: 55.2928,
        description: "Ville portuaire, activité économique",
    },
    CommuneSeed {
        name: "Bras-Panon",
        micro_region: MicroRegion::East,
        population: 13_170,
        taxi_count: 15,
        driver_count: 18,
        activity_level: ActivityLevel::Low,
        daily_demand: 180,
        monthly_revenue: 1850,
        primary_stations: 1,
        occupation_rate: 42.3,
        night_coverage: NightCoverage::Absent,
        airport_access: AirportAccess::Far,
        served_zones: &["Centre-bourg"],
        lat: -21.0017,
        lon: 55.6772,
        description: "Commune rurale, activité limitée",
    },
    CommuneSeed {
        name: "Les Avirons",
        micro_region: MicroRegion::West,
        population: 11_447,
        taxi_count: 18,
        driver_count: 22,
        activity_level: ActivityLevel::Low,
        daily_demand: 220,
        monthly_revenue: 1920,
        primary_stations: 1,
        occupation_rate: 46.8,
        night_coverage: NightCoverage::Absent,
        airport_access: AirportAccess::Near,
        served_zones: &["Centre-bourg"],
        lat: -21.2408,
        lon: 55.3392,
        description: "Petite commune, demande locale",
    },
    CommuneSeed {
        name: "Entre-Deux",
        micro_region: MicroRegion::South,
        population: 7070,
        taxi_count: 8,
        driver_count: 10,
        activity_level: ActivityLevel::Limited,
        daily_demand: 85,
        monthly_revenue: 1650,
        primary_stations: 1,
        occupation_rate: 35.2,
        night_coverage: NightCoverage::Absent,
        airport_access: AirportAccess::VeryFar,
        served_zones: &["Centre-bourg"],
        lat: -21.2500,
        lon: 55.4722,
        description: "Commune des Hauts, activité réduite",
    },
    CommuneSeed {
        name: "L'Étang-Salé",
        micro_region: MicroRegion::West,
        population: 14_030,
        taxi_count: 22,
        driver_count: 26,
        activity_level: ActivityLevel::Low,
        daily_demand: 280,
        monthly_revenue: 2080,
        primary_stations: 1,
        occupation_rate: 52.4,
        night_coverage: NightCoverage::VeryLow,
        airport_access: AirportAccess::Near,
        served_zones: &["Centre-ville", "Plage", "Forêt"],
        lat: -21.2631,
        lon: 55.3842,
        description: "Littoral, activité touristique modérée",
    },
    CommuneSeed {
        name: "Petite-Île",
        micro_region: MicroRegion::South,
        population: 12_155,
        taxi_count: 14,
        driver_count: 17,
        activity_level: ActivityLevel::Low,
        daily_demand: 160,
        monthly_revenue: 1880,
        primary_stations: 1,
        occupation_rate: 41.6,
        night_coverage: NightCoverage::Absent,
        airport_access: AirportAccess::Far,
        served_zones: &["Centre-bourg"],
        lat: -21.3531,
        lon: 55.5639,
        description: "Petite commune, demande locale",
    },
    CommuneSeed {
        name: "Saint-Philippe",
        micro_region: MicroRegion::South,
        population: 5232,
        taxi_count: 6,
        driver_count: 7,
        activity_level: ActivityLevel::Limited,
        daily_demand: 65,
        monthly_revenue: 1550,
        primary_stations: 1,
        occupation_rate: 32.8,
        night_coverage: NightCoverage::Absent,
        airport_access: AirportAccess::VeryFar,
        served_zones: &["Centre-bourg"],
        lat: -21.3592,
        lon: 55.7672,
        description: "Sud Sauvage, activité très limitée",
    },
    CommuneSeed {
        name: "Sainte-Rose",
        micro_region: MicroRegion::East,
        population: 6424,
        taxi_count: 7,
        driver_count: 8,
        activity_level: ActivityLevel::Limited,
        daily_demand: 75,
        monthly_revenue: 1620,
        primary_stations: 1,
        occupation_rate: 34.1,
        night_coverage: NightCoverage::Absent,
        airport_access: AirportAccess::VeryFar,
        served_zones: &["Centre-bourg"],
        lat: -21.1242,
        lon: 55.7961,
        description: "Grande commune, très faible densité",
    },
    CommuneSeed {
        name: "Cilaos",
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
        served_zones: &["Centre-cirque"],
        lat: -21.1339,
        lon: 55.4719,
        description: "Cirque, activité touristique saisonnière",
    },
    CommuneSeed {
        name: "Salazie",
        micro_region: MicroRegion::Cirques,
        population: 7363,
        taxi_count: 6,
        driver_count: 7,
        activity_level: ActivityLevel::Limited,
        daily_demand: 70,
        monthly_revenue: 1520,
        primary_stations: 1,
        occupation_rate: 30.2,
        night_coverage: NightCoverage::Absent,
        airport_access: AirportAccess::VeryFar,
        served_zones: &["Centre-cirque"],
        lat: -21.0272,
        lon: 55.5392,
        description: "Cirque, activité très limitée",
    },
    CommuneSeed {
        name: "Sainte-Suzanne",
        micro_region: MicroRegion::North,
        population: 24_645,
        taxi_count: 28,
        driver_count: 33,
        activity_level: ActivityLevel::Low,
        daily_demand: 340,
        monthly_revenue: 2120,
        primary_stations: 1,
        occupation_rate: 51.7,
        night_coverage: NightCoverage::VeryLow,
        airport_access: AirportAccess::Direct,
        served_zones: &["Centre-ville", "Nord"],
        lat: -20.9061,
        lon: 55.6069,
        description: "Développement résidentiel, demande modérée",
    },
    CommuneSeed {
        name: "Les Trois-Bassins",
        micro_region: MicroRegion::West,
        population: 6980,
        taxi_count: 9,
        driver_count: 11,
        activity_level: ActivityLevel::Limited,
        daily_demand: 95,
        monthly_revenue: 1720,
        primary_stations: 1,
        occupation_rate: 38.4,
        night_coverage: NightCoverage::Absent,
        airport_access: AirportAccess::Near,
        served_zones: &["Centre-bourg"],
        lat: -21.1039,
        lon: 55.2992,
        description: "Petite commune, activité réduite",
    },
];
