//! # Troop Core
//!
//! Troop logistics for a strategy-game assistant.
//!
//! This crate contains **only** pure calculations:
//! - No rendering
//! - No IO
//! - No global state (the unit catalog is always passed in)
//!
//! The arithmetic mirrors the game server exactly: travel durations are
//! rounded to whole seconds and returned in milliseconds, group pace is
//! set by the slowest unit present, and haul requirements are rounded to
//! one decimal place.
//!
//! ## Crate Structure
//!
//! - [`unit_type`] - The fixed, ordered set of unit types
//! - [`data`] - Static per-type attributes
//! - [`catalog`] - Unit catalog lookup and the [`catalog::TroopCalculator`]
//! - [`troops`] - The [`troops::TroopCounts`] aggregate
//! - [`travel`] - Travel duration and haul formulas
//!
//! ## Example
//!
//! ```
//! use troop_core::prelude::*;
//!
//! let config = TroopConfig::standard();
//! let troops = TroopCounts::new()
//!     .with(UnitType::Spear, 500)
//!     .with(UnitType::Knight, 1);
//!
//! // The paladin sets the pace of a support detachment.
//! let ms = troops.travel_duration(&config, 12.0, TravelRole::Support, 1.0, 1.0);
//! assert_eq!(ms, 12.0 * 10.0 * 60.0 * 1000.0);
//!
//! let calc = TroopCalculator::new(&config);
//! assert_eq!(calc.count_to_carry(UnitType::Spear, 1000.0, 0.0), 40.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod catalog;
pub mod data;
pub mod error;
pub mod travel;
pub mod troops;
pub mod unit_type;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{TroopCalculator, TroopConfig, UnitCatalog};
    pub use crate::data::UnitData;
    pub use crate::error::{Result, TroopError};
    pub use crate::travel::{
        calc_travel_duration, calc_travel_durations, count_to_carry, duration_from_millis,
    };
    pub use crate::troops::TroopCounts;
    pub use crate::unit_type::{TravelRole, UnitType};
}
