//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (length, force, area,
//! pressure, temperature). This module provides extensions that are useful
//! for span modeling but aren't included in [`uom`]:
//!
//! - [`LinearWeight`] and [`ThermalExpansion`], quantities [`uom`] has no
//!   named type for, with plain-`f64` constructors
//!   ([`newtons_per_meter`], [`per_degree_celsius`]).
//! - [`TemperatureDifference`], an extension trait subtracting two absolute
//!   temperatures into a temperature interval.

mod quantities;
mod temperature_difference;

pub use quantities::{LinearWeight, ThermalExpansion, newtons_per_meter, per_degree_celsius};
pub use temperature_difference::TemperatureDifference;
