//! Proptest strategies for troop aggregates.
//!
//! These strategies generate random but reproducible inputs for
//! property-based testing of the aggregate laws.

use proptest::prelude::*;
use troop_core::troops::TroopCounts;
use troop_core::unit_type::UnitType;

/// Generate a non-negative troop count.
///
/// Range: 0 to 100_000 (larger than any real village holds)
pub fn arb_count() -> impl Strategy<Value = i64> {
    0i64..100_000
}

/// Generate a signed troop count, as found in differences.
pub fn arb_signed_count() -> impl Strategy<Value = i64> {
    -100_000i64..100_000
}

/// Generate an aggregate with non-negative counts.
pub fn arb_troops() -> impl Strategy<Value = TroopCounts> {
    proptest::collection::vec(arb_count(), UnitType::COUNT)
        .prop_map(|counts| TroopCounts::from_array(&counts))
}

/// Generate an aggregate with signed counts.
pub fn arb_signed_troops() -> impl Strategy<Value = TroopCounts> {
    proptest::collection::vec(arb_signed_count(), UnitType::COUNT)
        .prop_map(|counts| TroopCounts::from_array(&counts))
}

/// Generate an aggregate with at least one positive count.
pub fn arb_nonzero_troops() -> impl Strategy<Value = TroopCounts> {
    (arb_troops(), 0..UnitType::COUNT, 1i64..1000).prop_map(|(troops, index, count)| {
        troops.with(UnitType::ALL[index], count)
    })
}

/// Generate any unit type.
pub fn arb_unit_type() -> impl Strategy<Value = UnitType> {
    (0..UnitType::COUNT).prop_map(|index| UnitType::ALL[index])
}

/// Generate a map distance in fields.
///
/// Range: 0 to 200 (a large continent crossing)
pub fn arb_distance() -> impl Strategy<Value = f64> {
    0.0f64..200.0
}
