//! Unit catalog lookup.
//!
//! The catalog maps each [`UnitType`] to its static [`UnitData`]. It is an
//! explicit dependency: every calculation takes the catalog it should
//! consult, so there is no hidden initialization order to get wrong.
//!
//! - [`UnitCatalog`]: read-only lookup trait
//! - [`TroopConfig`]: the concrete, RON-loadable catalog
//! - [`TroopCalculator`]: per-unit-type formulas bound to a catalog
//!
//! # Thread Safety
//!
//! Catalogs are immutable after construction and can be shared across
//! threads (wrapped in Arc if needed).

use std::collections::BTreeMap;

use crate::data::UnitData;
use crate::error::{Result, TroopError};
use crate::travel;
use crate::unit_type::UnitType;

/// Read-only source of unit attributes.
///
/// A missing entry is not an error: it reads as [`UnitData::ZERO`] and
/// contributes zero to every metric.
pub trait UnitCatalog {
    /// Attributes for `unit`, if the catalog knows it.
    fn lookup(&self, unit: UnitType) -> Option<UnitData>;

    /// Population cost of one unit, 0 if unknown.
    fn population_cost(&self, unit: UnitType) -> u32 {
        self.lookup(unit).unwrap_or(UnitData::ZERO).pop
    }

    /// Base pace in minutes per field, 0 if unknown.
    fn travel_minutes(&self, unit: UnitType) -> f64 {
        self.lookup(unit).unwrap_or(UnitData::ZERO).speed
    }

    /// Resources one unit can haul, 0 if unknown.
    fn carry_capacity(&self, unit: UnitType) -> f64 {
        self.lookup(unit).unwrap_or(UnitData::ZERO).carry
    }
}

impl<C: UnitCatalog + ?Sized> UnitCatalog for &C {
    fn lookup(&self, unit: UnitType) -> Option<UnitData> {
        (**self).lookup(unit)
    }
}

/// Unit catalog backed by a fixed table indexed by [`UnitType`].
///
/// # Example
///
/// ```
/// use troop_core::catalog::{TroopConfig, UnitCatalog};
/// use troop_core::unit_type::UnitType;
///
/// let config = TroopConfig::standard();
/// assert_eq!(config.carry_capacity(UnitType::Light), 80.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TroopConfig {
    units: [Option<UnitData>; UnitType::COUNT],
}

impl TroopConfig {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock attributes of a normal-speed world.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_unit(UnitType::Spear, UnitData::new(1, 18.0, 25.0))
            .with_unit(UnitType::Sword, UnitData::new(1, 22.0, 15.0))
            .with_unit(UnitType::Axe, UnitData::new(1, 18.0, 10.0))
            .with_unit(UnitType::Archer, UnitData::new(1, 18.0, 10.0))
            .with_unit(UnitType::Spy, UnitData::new(2, 9.0, 0.0))
            .with_unit(UnitType::Light, UnitData::new(4, 10.0, 80.0))
            .with_unit(UnitType::Marcher, UnitData::new(5, 10.0, 50.0))
            .with_unit(UnitType::Heavy, UnitData::new(6, 11.0, 50.0))
            .with_unit(UnitType::Ram, UnitData::new(5, 30.0, 0.0))
            .with_unit(UnitType::Catapult, UnitData::new(8, 30.0, 0.0))
            .with_unit(UnitType::Knight, UnitData::new(10, 10.0, 100.0))
            .with_unit(UnitType::Snob, UnitData::new(100, 35.0, 0.0))
            .with_unit(UnitType::Militia, UnitData::new(0, 0.0, 0.0))
    }

    /// Builder form of [`TroopConfig::insert`].
    #[must_use]
    pub fn with_unit(mut self, unit: UnitType, data: UnitData) -> Self {
        self.insert(unit, data);
        self
    }

    /// Set the attributes of `unit`, replacing any previous entry.
    pub fn insert(&mut self, unit: UnitType, data: UnitData) {
        self.units[unit.index()] = Some(data);
    }

    /// Parse a catalog from RON text.
    ///
    /// The text is a map from unit identifier to attributes:
    ///
    /// ```ron
    /// {
    ///     "spear": (pop: 1, speed: 18.0, carry: 25.0),
    ///     "ram": (pop: 5, speed: 30.0),
    /// }
    /// ```
    ///
    /// Types left out of the map are simply absent from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`TroopError::CatalogParse`] for malformed RON and
    /// [`TroopError::UnknownUnitType`] for keys that name no unit type.
    pub fn from_ron_str(text: &str) -> Result<Self> {
        let raw: BTreeMap<String, UnitData> =
            ron::from_str(text).map_err(|e| TroopError::CatalogParse {
                message: e.to_string(),
            })?;

        let mut config = Self::new();
        for (key, data) in raw {
            let unit: UnitType = key.parse()?;
            config.insert(unit, data);
        }

        tracing::debug!(
            known = config.iter().count(),
            missing = config.missing().len(),
            "Loaded unit catalog"
        );
        Ok(config)
    }

    /// Entries in [`UnitType::ALL`] order, skipping absent types.
    pub fn iter(&self) -> impl Iterator<Item = (UnitType, UnitData)> + '_ {
        UnitType::ALL
            .iter()
            .filter_map(|&unit| self.lookup(unit).map(|data| (unit, data)))
    }

    /// Unit types with no entry.
    #[must_use]
    pub fn missing(&self) -> Vec<UnitType> {
        UnitType::ALL
            .iter()
            .copied()
            .filter(|&unit| self.lookup(unit).is_none())
            .collect()
    }

    /// Check the catalog for problems that would skew calculations.
    ///
    /// Returns a human-readable description of each problem; an empty list
    /// means the catalog is complete and sane. Militia never marches, so a
    /// zero pace is accepted for it.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut problems: Vec<String> = self
            .missing()
            .into_iter()
            .map(|unit| format!("missing unit type '{unit}'"))
            .collect();

        for (unit, data) in self.iter() {
            if !data.speed.is_finite() || data.speed < 0.0 {
                problems.push(format!("'{unit}' has invalid speed {}", data.speed));
            } else if data.speed == 0.0 && unit != UnitType::Militia {
                problems.push(format!("'{unit}' has zero speed"));
            }
            if !data.carry.is_finite() || data.carry < 0.0 {
                problems.push(format!("'{unit}' has invalid carry {}", data.carry));
            }
        }

        problems
    }

    /// Like [`TroopConfig::validate`], but as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`TroopError::InvalidCatalog`] listing every problem found.
    pub fn ensure_valid(&self) -> Result<()> {
        let problems = self.validate();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(TroopError::InvalidCatalog(problems))
        }
    }
}

impl UnitCatalog for TroopConfig {
    fn lookup(&self, unit: UnitType) -> Option<UnitData> {
        self.units[unit.index()]
    }
}

/// Per-unit-type formulas bound to a catalog.
#[derive(Debug, Clone, Copy)]
pub struct TroopCalculator<'a, C: UnitCatalog + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: UnitCatalog + ?Sized> TroopCalculator<'a, C> {
    /// Create a calculator that consults `catalog`.
    #[must_use]
    pub const fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// The catalog this calculator consults.
    #[must_use]
    pub const fn catalog(&self) -> &'a C {
        self.catalog
    }

    /// How many `unit`s it takes to haul `resource_amount`.
    ///
    /// See [`travel::count_to_carry`].
    #[must_use]
    pub fn count_to_carry(&self, unit: UnitType, resource_amount: f64, haul_bonus: f64) -> f64 {
        travel::count_to_carry(self.catalog, unit, resource_amount, haul_bonus)
    }

    /// Milliseconds for a lone `unit` to cover `distance`.
    ///
    /// `world_speed` and `unit_speed` are accepted but not applied; the
    /// catalog paces are expected to already reflect them.
    #[must_use]
    pub fn travel_duration(
        &self,
        unit: UnitType,
        distance: f64,
        _world_speed: f64,
        _unit_speed: f64,
    ) -> f64 {
        travel::calc_travel_duration(self.catalog.travel_minutes(unit), distance)
    }

    /// Per-type travel durations over `distance`.
    ///
    /// See [`travel::calc_travel_durations`].
    #[must_use]
    pub fn travel_durations(
        &self,
        distance: f64,
        world_speed: f64,
        unit_speed: f64,
    ) -> BTreeMap<UnitType, f64> {
        travel::calc_travel_durations(self.catalog, distance, world_speed, unit_speed)
    }
}
