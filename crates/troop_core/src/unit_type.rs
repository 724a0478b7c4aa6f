//! Unit type identifiers and travel roles.
//!
//! [`UnitType::ALL`] is the single source of truth for unit ordering.
//! Iteration, array (de)serialization and per-type tables all follow it,
//! so the compact numeric form of a troop aggregate stays stable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TroopError;

/// A discrete category of military unit.
///
/// Declaration order matches [`UnitType::ALL`]; the derived `Ord` therefore
/// sorts in the same order as the array form.
///
/// # Example
///
/// ```
/// use troop_core::unit_type::UnitType;
///
/// let unit: UnitType = "light".parse().unwrap();
/// assert_eq!(unit, UnitType::Light);
/// assert_eq!(unit.index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    /// Spear fighter.
    Spear,
    /// Swordsman.
    Sword,
    /// Axeman.
    Axe,
    /// Archer.
    Archer,
    /// Scout.
    Spy,
    /// Light cavalry.
    Light,
    /// Mounted archer.
    Marcher,
    /// Heavy cavalry.
    Heavy,
    /// Ram.
    Ram,
    /// Catapult.
    Catapult,
    /// Paladin. Sets the pace of any support detachment it escorts.
    Knight,
    /// Nobleman.
    Snob,
    /// Militia.
    Militia,
}

impl UnitType {
    /// Number of known unit types.
    pub const COUNT: usize = 13;

    /// Every unit type in the fixed serialization order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Spear,
        Self::Sword,
        Self::Axe,
        Self::Archer,
        Self::Spy,
        Self::Light,
        Self::Marcher,
        Self::Heavy,
        Self::Ram,
        Self::Catapult,
        Self::Knight,
        Self::Snob,
        Self::Militia,
    ];

    /// The unit whose pace overrides the group pace on support missions.
    pub const SUPPORT_ESCORT: Self = Self::Knight;

    /// Position of this type in [`UnitType::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit type at position `index` of [`UnitType::ALL`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Game identifier for this unit type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spear => "spear",
            Self::Sword => "sword",
            Self::Axe => "axe",
            Self::Archer => "archer",
            Self::Spy => "spy",
            Self::Light => "light",
            Self::Marcher => "marcher",
            Self::Heavy => "heavy",
            Self::Ram => "ram",
            Self::Catapult => "catapult",
            Self::Knight => "knight",
            Self::Snob => "snob",
            Self::Militia => "militia",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitType {
    type Err = TroopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| TroopError::UnknownUnitType(s.to_string()))
    }
}

/// Purpose of a troop movement.
///
/// Only affects pace: support detachments escorted by a
/// [`UnitType::SUPPORT_ESCORT`] march at the escort's pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelRole {
    /// Attack command.
    #[default]
    Attack,
    /// Support command.
    Support,
}

impl TravelRole {
    /// Game identifier for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Support => "support",
        }
    }
}

impl fmt::Display for TravelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelRole {
    type Err = TroopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attack" => Ok(Self::Attack),
            "support" => Ok(Self::Support),
            other => Err(TroopError::UnknownRole(other.to_string())),
        }
    }
}
