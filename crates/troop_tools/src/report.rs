//! Human and JSON renderings of travel, haul and population figures.

use serde::Serialize;
use troop_core::catalog::{TroopCalculator, UnitCatalog};
use troop_core::data::UnitData;
use troop_core::travel::{calc_travel_durations, duration_from_millis};
use troop_core::troops::TroopCounts;
use troop_core::unit_type::{TravelRole, UnitType};

/// Format a millisecond duration as `H:MM:SS`.
///
/// Sentinel results (NaN, infinite, negative) render as `-`.
#[must_use]
pub fn format_duration(millis: f64) -> String {
    match duration_from_millis(millis) {
        Some(duration) => {
            let secs = duration.as_secs();
            format!("{}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
        }
        None => "-".to_string(),
    }
}

/// Travel time of one unit type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitTravel {
    /// Unit type.
    pub unit: UnitType,
    /// Duration in milliseconds.
    pub millis: f64,
    /// Duration as `H:MM:SS`.
    pub formatted: String,
}

/// Per-type travel table, in the fixed unit order.
#[must_use]
pub fn travel_table<C: UnitCatalog + ?Sized>(
    catalog: &C,
    distance: f64,
    world_speed: f64,
    unit_speed: f64,
) -> Vec<UnitTravel> {
    calc_travel_durations(catalog, distance, world_speed, unit_speed)
        .into_iter()
        .map(|(unit, millis)| UnitTravel {
            unit,
            millis,
            formatted: format_duration(millis),
        })
        .collect()
}

/// Travel figures for a whole troop aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTravel {
    /// Role the group marches under.
    pub role: TravelRole,
    /// Group pace in minutes per field, `None` for an empty group.
    pub minutes_per_field: Option<f64>,
    /// Duration in milliseconds, `None` for an empty group.
    pub millis: Option<f64>,
    /// Duration as `H:MM:SS`.
    pub formatted: String,
    /// Population the group takes up.
    pub population: i64,
}

/// Compute travel figures for `troops`, guarding against an empty group.
#[must_use]
pub fn group_travel<C: UnitCatalog + ?Sized>(
    catalog: &C,
    troops: &TroopCounts,
    distance: f64,
    role: TravelRole,
    world_speed: f64,
    unit_speed: f64,
) -> GroupTravel {
    let population = troops.population_used(catalog);

    if troops.is_zero() {
        tracing::warn!("Empty troop group has no travel pace");
        return GroupTravel {
            role,
            minutes_per_field: None,
            millis: None,
            formatted: format_duration(f64::NAN),
            population,
        };
    }

    let pace = troops.travel_minutes_per_field(catalog, role, world_speed, unit_speed);
    let millis = troops.travel_duration(catalog, distance, role, world_speed, unit_speed);

    GroupTravel {
        role,
        minutes_per_field: pace.is_finite().then_some(pace),
        millis: millis.is_finite().then_some(millis),
        formatted: format_duration(millis),
        population,
    }
}

/// Troops needed to haul a resource amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Haul {
    /// Unit type doing the hauling.
    pub unit: UnitType,
    /// Troops needed, `None` if the unit cannot carry anything.
    pub count: Option<f64>,
}

/// Compute a haul, guarding against units with no carry capacity.
#[must_use]
pub fn haul<C: UnitCatalog + ?Sized>(
    catalog: &C,
    unit: UnitType,
    resources: f64,
    bonus: f64,
) -> Haul {
    if !catalog.lookup(unit).unwrap_or(UnitData::ZERO).can_carry() {
        tracing::warn!("{unit} cannot carry resources");
        return Haul { unit, count: None };
    }

    let count = TroopCalculator::new(catalog).count_to_carry(unit, resources, bonus);
    Haul {
        unit,
        count: Some(count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use troop_core::catalog::TroopConfig;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0:00:00");
        assert_eq!(format_duration(600_000.0), "0:10:00");
        assert_eq!(format_duration(18_000_000.0), "5:00:00");
        assert_eq!(format_duration(90_061_000.0), "25:01:01");
    }

    #[test]
    fn test_format_sentinels() {
        assert_eq!(format_duration(f64::NAN), "-");
        assert_eq!(format_duration(f64::INFINITY), "-");
        assert_eq!(format_duration(-1.0), "-");
    }

    #[test]
    fn test_travel_table_order() {
        let config = TroopConfig::standard();
        let table = travel_table(&config, 1.0, 1.0, 1.0);
        let units: Vec<_> = table.iter().map(|row| row.unit).collect();
        assert_eq!(units, UnitType::ALL.to_vec());
        assert_eq!(table[0].formatted, "0:18:00");
    }

    #[test]
    fn test_group_travel_empty() {
        let config = TroopConfig::standard();
        let report = group_travel(&config, &TroopCounts::new(), 5.0, TravelRole::Attack, 1.0, 1.0);
        assert_eq!(report.minutes_per_field, None);
        assert_eq!(report.millis, None);
        assert_eq!(report.formatted, "-");
        assert_eq!(report.population, 0);
    }

    #[test]
    fn test_group_travel_support() {
        let config = TroopConfig::standard();
        let troops = TroopCounts::new()
            .with(UnitType::Sword, 100)
            .with(UnitType::Knight, 1);
        let report = group_travel(&config, &troops, 6.0, TravelRole::Support, 1.0, 1.0);
        assert_eq!(report.minutes_per_field, Some(10.0));
        assert_eq!(report.formatted, "1:00:00");
        assert_eq!(report.population, 110);
    }

    #[test]
    fn test_haul_carrier() {
        let config = TroopConfig::standard();
        let report = haul(&config, UnitType::Light, 1000.0, 0.0);
        assert_eq!(report.count, Some(12.5));
    }

    #[test]
    fn test_haul_non_carrier() {
        let config = TroopConfig::standard();
        assert_eq!(haul(&config, UnitType::Ram, 1000.0, 0.0).count, None);
        assert_eq!(haul(&TroopConfig::new(), UnitType::Light, 1000.0, 0.0).count, None);
    }

    #[test]
    fn test_group_travel_serializes() {
        let config = TroopConfig::standard();
        let troops = TroopCounts::new().with(UnitType::Ram, 1);
        let report = group_travel(&config, &troops, 1.0, TravelRole::Attack, 1.0, 1.0);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["role"], "attack");
        assert_eq!(json["millis"], 1_800_000.0);
        assert_eq!(json["formatted"], "0:30:00");
    }
}
