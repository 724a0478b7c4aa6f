//! Static per-unit-type attributes.
//!
//! This module contains pure data structures designed to be deserialized
//! from RON catalog files.
//!
//! **Note:** This module contains no IO - it only defines data types.
//! File loading is handled by `troop_tools`.

mod unit_data;

pub use unit_data::UnitData;
