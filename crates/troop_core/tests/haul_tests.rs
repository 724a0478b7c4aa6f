//! Tests for haul and per-type travel calculations.

use troop_core::catalog::TroopCalculator;
use troop_core::travel::count_to_carry;
use troop_core::troops::TroopCounts;
use troop_core::unit_type::{TravelRole, UnitType};
use troop_test_utils::fixtures::{hauler_catalog, standard_catalog, two_pace_catalog};
use troop_test_utils::strategies::{arb_distance, arb_unit_type};

use proptest::prelude::*;

#[test]
fn test_haul_exact() {
    let config = hauler_catalog(50.0);
    let calc = TroopCalculator::new(&config);
    assert_eq!(calc.count_to_carry(UnitType::Spear, 1000.0, 0.0), 20.0);
}

#[test]
fn test_haul_with_bonus_rounds_to_tenth() {
    let config = hauler_catalog(50.0);
    let calc = TroopCalculator::new(&config);
    assert_eq!(calc.count_to_carry(UnitType::Spear, 1000.0, 30.0), 15.4);
}

#[test]
fn test_haul_stock_light_cavalry() {
    let config = standard_catalog();
    let calc = TroopCalculator::new(&config);
    // 25_000 / 80 = 312.5
    assert_eq!(calc.count_to_carry(UnitType::Light, 25_000.0, 0.0), 312.5);
}

#[test]
fn test_haul_non_carrier_is_infinite() {
    let config = standard_catalog();
    let calc = TroopCalculator::new(&config);
    assert!(calc.count_to_carry(UnitType::Ram, 100.0, 0.0).is_infinite());
}

#[test]
fn test_two_pace_table() {
    let config = two_pace_catalog();
    let calc = TroopCalculator::new(&config);
    let table = calc.travel_durations(1.0, 1.0, 1.0);

    assert_eq!(table[&UnitType::Light], 600_000.0);
    assert_eq!(table[&UnitType::Ram], 1_200_000.0);
    assert_eq!(table[&UnitType::Axe], 0.0);
}

#[test]
fn test_convoy_of_two_paces() {
    let config = two_pace_catalog();
    let troops = TroopCounts::new()
        .with(UnitType::Light, 1)
        .with(UnitType::Ram, 1);
    assert_eq!(
        troops.travel_minutes_per_field(&config, TravelRole::Attack, 1.0, 1.0),
        20.0
    );
}

proptest! {
    /// The per-type table agrees with a lone unit of that type.
    #[test]
    fn prop_table_matches_single_unit(unit in arb_unit_type(), distance in arb_distance()) {
        let config = standard_catalog();
        let calc = TroopCalculator::new(&config);
        let table = calc.travel_durations(distance, 1.0, 1.0);

        prop_assert_eq!(table[&unit], calc.travel_duration(unit, distance, 1.0, 1.0));

        let lone = TroopCounts::new().with(unit, 1);
        prop_assert_eq!(
            table[&unit],
            lone.travel_duration(&config, distance, TravelRole::Attack, 1.0, 1.0)
        );
    }

    /// A larger haul bonus never needs more troops.
    #[test]
    fn prop_bonus_never_increases_count(resources in 0.0f64..1_000_000.0, bonus in 0.0f64..200.0) {
        let config = standard_catalog();
        let base = count_to_carry(&config, UnitType::Light, resources, 0.0);
        let boosted = count_to_carry(&config, UnitType::Light, resources, bonus);
        prop_assert!(boosted <= base);
    }
}
