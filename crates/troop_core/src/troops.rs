//! Troop aggregates.
//!
//! [`TroopCounts`] holds one count per [`UnitType`], no more and no less.
//! Counts are signed so that the difference of two aggregates (losses,
//! deficits) is representable. Count arithmetic saturates at the `i64`
//! bounds instead of overflowing.

use std::ops::{Add, Index, IndexMut, Sub};

use serde::{Deserialize, Serialize};

use crate::catalog::UnitCatalog;
use crate::error::{Result, TroopError};
use crate::travel::calc_travel_duration;
use crate::unit_type::{TravelRole, UnitType};

/// A snapshot of counts across all unit types.
///
/// Serializes as the 13 counts in [`UnitType::ALL`] order, the same compact
/// numeric form produced by [`TroopCounts::to_array`].
///
/// # Example
///
/// ```
/// use troop_core::catalog::TroopConfig;
/// use troop_core::troops::TroopCounts;
/// use troop_core::unit_type::{TravelRole, UnitType};
///
/// let config = TroopConfig::standard();
/// let mut troops = TroopCounts::new();
/// troops[UnitType::Axe] = 100;
/// troops[UnitType::Ram] = 5;
///
/// assert_eq!(troops.population_used(&config), 125);
/// // Rams are slowest.
/// assert_eq!(troops.travel_minutes_per_field(&config, TravelRole::Attack, 1.0, 1.0), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TroopCounts {
    counts: [i64; UnitType::COUNT],
}

impl TroopCounts {
    /// Create an aggregate with every count set to zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; UnitType::COUNT],
        }
    }

    /// Count of `unit`.
    #[must_use]
    pub const fn get(&self, unit: UnitType) -> i64 {
        self.counts[unit.index()]
    }

    /// Set the count of `unit`.
    pub fn set(&mut self, unit: UnitType, count: i64) {
        self.counts[unit.index()] = count;
    }

    /// Builder form of [`TroopCounts::set`].
    #[must_use]
    pub fn with(mut self, unit: UnitType, count: i64) -> Self {
        self.set(unit, count);
        self
    }

    /// Counts in [`UnitType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitType, i64)> + '_ {
        UnitType::ALL.iter().map(|&unit| (unit, self.get(unit)))
    }

    /// True iff every count is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.counts.iter().fold(0, |sum, &count| sum.saturating_add(count))
    }

    /// Population taken up by these troops.
    ///
    /// Types missing from `catalog` cost nothing.
    #[must_use]
    pub fn population_used<C: UnitCatalog + ?Sized>(&self, catalog: &C) -> i64 {
        self.iter()
            .map(|(unit, count)| count.saturating_mul(i64::from(catalog.population_cost(unit))))
            .fold(0, i64::saturating_add)
    }

    /// Minutes the group needs to cross one field.
    ///
    /// The slowest type with a positive count sets the pace. On
    /// [`TravelRole::Support`] a present [`UnitType::SUPPORT_ESCORT`]
    /// overrides that, and the group moves at the escort's pace.
    ///
    /// With no positive count there is no pace and the result is NaN;
    /// check [`TroopCounts::is_zero`] first. A NaN pace on any present
    /// type also makes the result NaN.
    ///
    /// `world_speed` and `unit_speed` are accepted but not applied.
    #[must_use]
    pub fn travel_minutes_per_field<C: UnitCatalog + ?Sized>(
        &self,
        catalog: &C,
        role: TravelRole,
        _world_speed: f64,
        _unit_speed: f64,
    ) -> f64 {
        if role == TravelRole::Support && self.get(UnitType::SUPPORT_ESCORT) > 0 {
            tracing::trace!("Support escort present, using escort pace");
            return catalog.travel_minutes(UnitType::SUPPORT_ESCORT);
        }

        self.iter()
            .filter(|&(_, count)| count > 0)
            .map(|(unit, _)| catalog.travel_minutes(unit))
            .fold(None, |slowest: Option<f64>, pace| {
                Some(match slowest {
                    None => pace,
                    Some(s) if s.is_nan() || pace.is_nan() => f64::NAN,
                    Some(s) => s.max(pace),
                })
            })
            .unwrap_or(f64::NAN)
    }

    /// Milliseconds for the group to cover `distance`.
    ///
    /// This is a duration, not an arrival time; see [`crate::travel`].
    #[must_use]
    pub fn travel_duration<C: UnitCatalog + ?Sized>(
        &self,
        catalog: &C,
        distance: f64,
        role: TravelRole,
        world_speed: f64,
        unit_speed: f64,
    ) -> f64 {
        let minutes_per_field =
            self.travel_minutes_per_field(catalog, role, world_speed, unit_speed);
        calc_travel_duration(minutes_per_field, distance)
    }

    /// Per-type difference `self - other`. Counts may go negative.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        let mut difference = Self::new();
        for (slot, (a, b)) in difference
            .counts
            .iter_mut()
            .zip(self.counts.iter().zip(other.counts.iter()))
        {
            *slot = a.saturating_sub(*b);
        }
        difference
    }

    /// Counts in [`UnitType::ALL`] order.
    #[must_use]
    pub const fn to_array(&self) -> [i64; UnitType::COUNT] {
        self.counts
    }

    /// Assign `array[i]` to the i-th type of [`UnitType::ALL`].
    ///
    /// Types past the end of a short array stay zero; entries past the
    /// last type are ignored.
    #[must_use]
    pub fn from_array(array: &[i64]) -> Self {
        if array.len() != UnitType::COUNT {
            tracing::debug!(
                expected = UnitType::COUNT,
                actual = array.len(),
                "Troop array length mismatch"
            );
        }

        let mut troops = Self::new();
        for (slot, &count) in troops.counts.iter_mut().zip(array) {
            *slot = count;
        }
        troops
    }

    /// Like [`TroopCounts::from_array`], but rejects arrays whose length
    /// differs from [`UnitType::COUNT`].
    ///
    /// # Errors
    ///
    /// Returns [`TroopError::ArrayLength`] on a length mismatch.
    pub fn try_from_array(array: &[i64]) -> Result<Self> {
        let counts = <[i64; UnitType::COUNT]>::try_from(array).map_err(|_| {
            TroopError::ArrayLength {
                expected: UnitType::COUNT,
                actual: array.len(),
            }
        })?;
        Ok(Self { counts })
    }
}

impl From<[i64; UnitType::COUNT]> for TroopCounts {
    fn from(counts: [i64; UnitType::COUNT]) -> Self {
        Self { counts }
    }
}

impl Index<UnitType> for TroopCounts {
    type Output = i64;

    fn index(&self, unit: UnitType) -> &Self::Output {
        &self.counts[unit.index()]
    }
}

impl IndexMut<UnitType> for TroopCounts {
    fn index_mut(&mut self, unit: UnitType) -> &mut Self::Output {
        &mut self.counts[unit.index()]
    }
}

impl Sub for TroopCounts {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(&rhs)
    }
}

impl Add for TroopCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut sum = self;
        for (slot, count) in sum.counts.iter_mut().zip(rhs.counts) {
            *slot = slot.saturating_add(count);
        }
        sum
    }
}
