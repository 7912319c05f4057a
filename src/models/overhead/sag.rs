//! Sag and tension of a wire spanning two supports.
//!
//! The model covers four operations on a single span:
//!
//! - converting between dip and horizontal tension at the reference
//!   temperature ([`dip_from_tension`], [`tension_from_dip`], [`solve`]),
//! - adjusting both for a temperature change, accounting for thermal
//!   elongation and elastic stretch ([`at_temperature`],
//!   [`temperature_sweep`]),
//! - sampling the wire curve for display, for level and inclined spans
//!   ([`catenary`]).
//!
//! Wire physical constants come from a [`WireProperties`] record, typically
//! obtained through a caller-owned [`WireCatalog`]. All quantities are SI.
//!
//! # Example
//!
//! ```
//! use linesag::models::overhead::sag;
//! use linesag::support::units::newtons_per_meter;
//! use uom::si::f64::{Force, Length};
//! use uom::si::{force::newton, length::meter};
//!
//! let wire = sag::WireProperties::from_unit_weight(newtons_per_meter(1.0)).unwrap();
//!
//! let dip = sag::dip_from_tension(
//!     &wire,
//!     Length::new::<meter>(50.0),
//!     Force::new::<newton>(1000.0),
//! )
//! .unwrap();
//!
//! assert_eq!(dip.get::<meter>(), 0.3125);
//! ```

mod core;

pub use self::core::{
    ArgumentError, CatenaryCurve, CurvePoint, Given, SAMPLE_COUNT, SagError, Solution,
    SpanGeometry, WireCatalog, WireProperties, WireTable, at_temperature, catenary,
    dip_from_tension, solve, solve_either, temperature_sweep, tension_from_dip,
};
