//! Tests for the compact serialized form of troop aggregates.

use troop_core::troops::TroopCounts;
use troop_core::unit_type::UnitType;
use troop_test_utils::fixtures::full_nuke;

#[test]
fn test_bincode_form_is_thirteen_counts() {
    let troops = full_nuke();
    let encoded = bincode::serialize(&troops).unwrap();

    // Fixed-length array, no length prefix.
    assert_eq!(encoded.len(), UnitType::COUNT * 8);

    let decoded: TroopCounts = bincode::deserialize(&encoded).unwrap();
    assert_eq!(decoded, troops);
}

#[test]
fn test_ron_form_follows_unit_order() {
    let troops = TroopCounts::new()
        .with(UnitType::Spear, 1)
        .with(UnitType::Militia, 2);
    let text = ron::to_string(&troops).unwrap();
    assert_eq!(text, "(1,0,0,0,0,0,0,0,0,0,0,0,2)");

    let parsed: TroopCounts = ron::from_str(&text).unwrap();
    assert_eq!(parsed, troops);
}

#[test]
fn test_ron_rejects_wrong_length() {
    let result: Result<TroopCounts, _> = ron::from_str("(1,2,3)");
    assert!(result.is_err());
}
