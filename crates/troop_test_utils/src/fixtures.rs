//! Test fixtures and helpers.
//!
//! Pre-built catalogs and troop aggregates for consistent testing.

use troop_core::catalog::TroopConfig;
use troop_core::data::UnitData;
use troop_core::troops::TroopCounts;
use troop_core::unit_type::UnitType;

/// Catalog with the stock attributes of a normal-speed world.
#[must_use]
pub fn standard_catalog() -> TroopConfig {
    TroopConfig::standard()
}

/// Catalog with only two units: light at 10 and ram at 20 minutes per field.
///
/// Handy for checking convoy pace without the stock numbers.
#[must_use]
pub fn two_pace_catalog() -> TroopConfig {
    TroopConfig::new()
        .with_unit(UnitType::Light, UnitData::new(4, 10.0, 80.0))
        .with_unit(UnitType::Ram, UnitData::new(5, 20.0, 0.0))
}

/// Catalog where only spears exist, carrying `carry` each.
#[must_use]
pub fn hauler_catalog(carry: f64) -> TroopConfig {
    TroopConfig::new().with_unit(UnitType::Spear, UnitData::new(1, 18.0, carry))
}

/// A typical offensive: axes, light cavalry and rams.
#[must_use]
pub fn full_nuke() -> TroopCounts {
    TroopCounts::new()
        .with(UnitType::Axe, 6500)
        .with(UnitType::Light, 3000)
        .with(UnitType::Marcher, 500)
        .with(UnitType::Ram, 300)
}

/// A typical defensive stack escorted by the paladin.
#[must_use]
pub fn escorted_support() -> TroopCounts {
    TroopCounts::new()
        .with(UnitType::Spear, 8000)
        .with(UnitType::Sword, 8000)
        .with(UnitType::Heavy, 500)
        .with(UnitType::Knight, 1)
}
