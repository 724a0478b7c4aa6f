//! Unit attribute data for the unit catalog.

use serde::{Deserialize, Serialize};

/// Static attributes of one unit type.
///
/// Loaded once at startup and read-only afterwards.
///
/// # Example RON
///
/// ```ron
/// (
///     pop: 4,
///     speed: 10.0,  // minutes per field
///     carry: 80.0,
/// )
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitData {
    /// Population cost of one unit.
    pub pop: u32,

    /// Base pace in minutes needed to cross one field.
    pub speed: f64,

    /// Resources one unit can haul.
    #[serde(default)]
    pub carry: f64,
}

impl UnitData {
    /// Create unit data from its three attributes.
    #[must_use]
    pub const fn new(pop: u32, speed: f64, carry: f64) -> Self {
        Self { pop, speed, carry }
    }

    /// Attributes used when a catalog has no entry for a unit type.
    pub const ZERO: Self = Self::new(0, 0.0, 0.0);

    /// Check if this unit can haul resources.
    #[must_use]
    pub fn can_carry(&self) -> bool {
        self.carry > 0.0
    }
}
