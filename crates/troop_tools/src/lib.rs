//! # Troop Tools
//!
//! Command-line tools for troop logistics:
//! - Catalog loading and validation
//! - Travel, haul and population reports

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod loader;
pub mod report;
pub mod validate;
