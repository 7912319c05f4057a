//! Parabolic sag/tension computation for a single span.
//!
//! The wire is modeled as a parabola, the small-sag approximation of the
//! catenary. Dip and tension convert through `d = w·s² / (8·T)`; the
//! temperature-adjusted state comes from combining that relation with
//! Hooke's-law stretch and linear thermal expansion of the unstretched
//! length, which yields a cubic in the unknown dip or tension. The cubic is
//! solved in closed form, never iteratively.

mod curve;
mod error;
mod input;
mod results;
mod solve;

pub use curve::{CatenaryCurve, CurvePoint, SAMPLE_COUNT, catenary};
pub use error::{ArgumentError, SagError};
pub use input::{Given, SpanGeometry, WireCatalog, WireProperties, WireTable};
pub use results::Solution;
pub use solve::{
    at_temperature, dip_from_tension, solve, solve_either, temperature_sweep, tension_from_dip,
};
