//! Driver survey distributions.

use reunion_taxi_models::{DriverProfile, DriverProfileKind, ShareBucket};

const AGE_BAND: &[(&str, u32)] = &[
    ("<30 ans", 8),
    ("30-40 ans", 22),
    ("40-50 ans", 35),
    ("50-60 ans", 25),
    (">60 ans", 10),
];

const SENIORITY: &[(&str, u32)] = &[
    ("<5 ans", 15),
    ("5-10 ans", 25),
    ("10-15 ans", 30),
    ("15-20 ans", 20),
    (">20 ans", 10),
];

const WEEKLY_HOURS: &[(&str, u32)] = &[
    ("<35h", 5),
    ("35-45h", 25),
    ("45-55h", 40),
    ("55-65h", 20),
    (">65h", 10),
];

const CONTRACT_TYPE: &[(&str, u32)] = &[
    ("Indépendant", 65),
    ("Salarié", 20),
    ("Portage", 10),
    ("Coopérative", 5),
];

const TRAINING_LEVEL: &[(&str, u32)] = &[
    ("CAP/BEP", 35),
    ("Bac", 30),
    ("Bac+2", 20),
    ("Bac+3", 10),
    ("Supérieur", 5),
];

const LANGUAGES: &[(&str, u32)] = &[
    ("Anglais", 40),
    ("Allemand", 15),
    ("Italien", 10),
    ("Espagnol", 25),
    ("Chinois", 5),
];

const fn rows(kind: DriverProfileKind) -> &'static [(&'static str, u32)] {
    match kind {
        DriverProfileKind::AgeBand => AGE_BAND,
        DriverProfileKind::Seniority => SENIORITY,
        DriverProfileKind::WeeklyHours => WEEKLY_HOURS,
        DriverProfileKind::ContractType => CONTRACT_TYPE,
        DriverProfileKind::TrainingLevel => TRAINING_LEVEL,
        DriverProfileKind::Languages => LANGUAGES,
    }
}

/// Returns the distribution for a single survey dimension.
#[must_use]
pub fn driver_profile(kind: DriverProfileKind) -> DriverProfile {
    DriverProfile {
        kind,
        buckets: rows(kind)
            .iter()
            .map(|(label, percent)| ShareBucket {
                label: (*label).to_string(),
                percent: *percent,
            })
            .collect(),
    }
}

/// Returns every driver survey distribution, in dashboard order.
#[must_use]
pub fn driver_profiles() -> Vec<DriverProfile> {
    [
        DriverProfileKind::AgeBand,
        DriverProfileKind::Seniority,
        DriverProfileKind::WeeklyHours,
        DriverProfileKind::ContractType,
        DriverProfileKind::TrainingLevel,
        DriverProfileKind::Languages,
    ]
    .into_iter()
    .map(driver_profile)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_answer_profiles_sum_to_100() {
        for profile in driver_profiles() {
            if profile.kind == DriverProfileKind::Languages {
                continue;
            }
            let total: u32 = profile.buckets.iter().map(|b| b.percent).sum();
            assert_eq!(total, 100, "{} sums to {total}", profile.kind);
        }
    }

    #[test]
    fn contract_type_buckets() {
        let profile = driver_profile(DriverProfileKind::ContractType);
        assert_eq!(profile.buckets.len(), 4);
        assert_eq!(profile.buckets[0].label, "Indépendant");
        assert_eq!(profile.buckets[0].percent, 65);
    }
}
