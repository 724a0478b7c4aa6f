//! Travel duration and haul formulas.
//!
//! These follow the game server's arithmetic exactly. Travel durations are
//! rounded to the nearest whole second and returned as milliseconds.
//!
//! # Arrival timestamps
//!
//! A travel *duration* is not an arrival *time*. The server stamps an
//! arrival as the wall-clock instant it began processing the request plus
//! the whole-second duration, so the millisecond part of the arrival is
//! copied from the request instant. e.g. a request processed at
//! 12:30:00.123 with a 10 minute march arrives at 12:40:00.123.
//!
//! Callers computing absolute arrivals must take the milliseconds from
//! the request clock and never synthesize them from these durations.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::catalog::UnitCatalog;
use crate::unit_type::UnitType;

const SECONDS_PER_MINUTE: f64 = 60.0;
const MILLIS_PER_SECOND: f64 = 1000.0;

/// Milliseconds needed to cover `distance` at `minutes_per_field`.
///
/// The raw seconds are rounded half away from zero. Non-finite paces
/// propagate: a NaN pace yields a NaN duration.
///
/// # Example
///
/// ```
/// use troop_core::travel::calc_travel_duration;
///
/// assert_eq!(calc_travel_duration(1.0, 10.0), 600_000.0);
/// ```
#[must_use]
pub fn calc_travel_duration(minutes_per_field: f64, distance: f64) -> f64 {
    (distance * minutes_per_field * SECONDS_PER_MINUTE).round() * MILLIS_PER_SECOND
}

/// Travel duration of every unit type marching alone over `distance`.
///
/// Each type uses its own base pace; no group logic applies. Types the
/// catalog does not know get a zero duration. `world_speed` and
/// `unit_speed` are accepted but not applied.
#[must_use]
pub fn calc_travel_durations<C: UnitCatalog + ?Sized>(
    catalog: &C,
    distance: f64,
    _world_speed: f64,
    _unit_speed: f64,
) -> BTreeMap<UnitType, f64> {
    UnitType::ALL
        .iter()
        .map(|&unit| {
            (
                unit,
                calc_travel_duration(catalog.travel_minutes(unit), distance),
            )
        })
        .collect()
}

/// How many `unit`s it takes to haul `resource_amount`, to one decimal.
///
/// `haul_bonus` is the extra haul from flags, events, etc. as a percentage
/// (30 for +30%, not 0.3). Fractional results are kept for planning.
///
/// The unit must have a positive carry capacity in `catalog`; otherwise the
/// division by zero yields infinity (or NaN for zero resources).
///
/// # Example
///
/// ```
/// use troop_core::catalog::TroopConfig;
/// use troop_core::travel::count_to_carry;
/// use troop_core::unit_type::UnitType;
///
/// let config = TroopConfig::standard();
/// assert_eq!(count_to_carry(&config, UnitType::Light, 1000.0, 0.0), 12.5);
/// ```
#[must_use]
pub fn count_to_carry<C: UnitCatalog + ?Sized>(
    catalog: &C,
    unit: UnitType,
    resource_amount: f64,
    haul_bonus: f64,
) -> f64 {
    let haul_per_unit = catalog.carry_capacity(unit) * (100.0 + haul_bonus) / 100.0;
    let troop_count = resource_amount / haul_per_unit;
    (10.0 * troop_count).round() / 10.0
}

/// Convert a millisecond result into a [`Duration`].
///
/// Returns `None` for the NaN, infinite or negative sentinels that
/// degenerate inputs produce.
#[must_use]
pub fn duration_from_millis(millis: f64) -> Option<Duration> {
    if millis.is_finite() && millis >= 0.0 {
        Some(Duration::from_secs_f64(millis / MILLIS_PER_SECOND))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TroopConfig;
    use crate::data::UnitData;

    fn hauler_catalog(carry: f64) -> TroopConfig {
        TroopConfig::new().with_unit(UnitType::Spear, UnitData::new(1, 18.0, carry))
    }

    #[test]
    fn test_whole_seconds_need_no_rounding() {
        assert_eq!(calc_travel_duration(1.0, 10.0), 600_000.0);
        assert_eq!(calc_travel_duration(0.5, 7.0), 210_000.0);
    }

    #[test]
    fn test_rounds_to_nearest_second() {
        // 0.004 * 60 = 0.24s -> 0s
        assert_eq!(calc_travel_duration(1.0, 0.004), 0.0);
        // 0.01 * 60 = 0.6s -> 1s
        assert_eq!(calc_travel_duration(1.0, 0.01), 1000.0);
        // 0.5 min/field over 0.05 fields = 1.5s, ties round up
        assert_eq!(calc_travel_duration(0.5, 0.05), 2000.0);
    }

    #[test]
    fn test_result_is_whole_seconds() {
        let ms = calc_travel_duration(18.0, 12.345_678);
        assert_eq!(ms % 1000.0, 0.0);
    }

    #[test]
    fn test_nan_pace_propagates() {
        assert!(calc_travel_duration(f64::NAN, 10.0).is_nan());
    }

    #[test]
    fn test_zero_distance() {
        assert_eq!(calc_travel_duration(30.0, 0.0), 0.0);
    }

    #[test]
    fn test_travel_durations_cover_every_type() {
        let config = TroopConfig::standard();
        let table = calc_travel_durations(&config, 2.0, 1.0, 1.0);

        assert_eq!(table.len(), UnitType::COUNT);
        let order: Vec<_> = table.keys().copied().collect();
        assert_eq!(order, UnitType::ALL.to_vec());
        assert_eq!(table[&UnitType::Ram], 2.0 * 30.0 * 60.0 * 1000.0);
        assert_eq!(table[&UnitType::Spy], 2.0 * 9.0 * 60.0 * 1000.0);
    }

    #[test]
    fn test_travel_durations_unknown_type_is_zero() {
        let config = hauler_catalog(25.0);
        let table = calc_travel_durations(&config, 4.0, 1.0, 1.0);
        assert_eq!(table[&UnitType::Snob], 0.0);
        assert_eq!(table[&UnitType::Spear], 4.0 * 18.0 * 60_000.0);
    }

    #[test]
    fn test_count_to_carry_exact() {
        let config = hauler_catalog(50.0);
        assert_eq!(count_to_carry(&config, UnitType::Spear, 1000.0, 0.0), 20.0);
    }

    #[test]
    fn test_count_to_carry_with_bonus() {
        let config = hauler_catalog(50.0);
        // 1000 / 65 = 15.38...
        assert_eq!(count_to_carry(&config, UnitType::Spear, 1000.0, 30.0), 15.4);
    }

    #[test]
    fn test_count_to_carry_keeps_fraction() {
        let config = hauler_catalog(80.0);
        assert_eq!(count_to_carry(&config, UnitType::Spear, 100.0, 0.0), 1.3);
    }

    #[test]
    fn test_count_to_carry_zero_capacity() {
        let config = hauler_catalog(0.0);
        assert!(count_to_carry(&config, UnitType::Spear, 1000.0, 0.0).is_infinite());
        assert!(count_to_carry(&config, UnitType::Spear, 0.0, 0.0).is_nan());
        // Unknown unit behaves like zero capacity.
        assert!(count_to_carry(&config, UnitType::Ram, 10.0, 0.0).is_infinite());
    }

    #[test]
    fn test_duration_from_millis() {
        assert_eq!(duration_from_millis(1500.0), Some(Duration::from_millis(1500)));
        assert_eq!(duration_from_millis(0.0), Some(Duration::ZERO));
        assert_eq!(duration_from_millis(f64::NAN), None);
        assert_eq!(duration_from_millis(f64::INFINITY), None);
        assert_eq!(duration_from_millis(f64::NEG_INFINITY), None);
        assert_eq!(duration_from_millis(-1000.0), None);
    }
}
