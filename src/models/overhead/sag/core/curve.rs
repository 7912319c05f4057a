//! Sampled wire curve for display.

use uom::si::f64::Length;
use uom::si::length::meter;

use super::{
    SpanGeometry, WireProperties,
    error::{SagError, positive},
    results::Solution,
};

/// Number of points sampled along the span, endpoints included.
pub const SAMPLE_COUNT: usize = 100;

/// A single sampled point of the wire curve.
///
/// `x` is the horizontal distance from the first support; `y` is the
/// elevation above the same datum as the support heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Horizontal distance from the first support.
    pub x: Length,

    /// Wire elevation.
    pub y: Length,
}

/// The sampled wire curve over a span.
///
/// Regenerated on every call; carries no identity beyond point order.
#[derive(Debug, Clone, PartialEq)]
pub struct CatenaryCurve {
    /// Sampled points, ordered by increasing `x` over `[0, span]`.
    pub points: Vec<CurvePoint>,

    /// Horizontal position of the curve's vertex.
    ///
    /// Coincides with mid-span only when both supports are level.
    pub apex_offset: Length,
}

/// Samples the parabolic wire curve over the span.
///
/// For a level span the vertex sits at mid-span, a dip below the supports.
/// For an inclined span the vertex shifts toward the lower support by the
/// tension/weight-scaled height difference, and the curve is anchored so
/// that it passes through both support elevations exactly; the dip input is
/// not consumed in that case.
///
/// # Errors
///
/// Returns [`SagError::InvalidArgument`] if the unit weight, span, or
/// tension is not strictly positive, or if the dip is not strictly positive
/// on a level span.
pub fn catenary(
    wire: &WireProperties,
    geometry: &SpanGeometry,
    solution: &Solution,
) -> Result<CatenaryCurve, SagError> {
    let weight = positive("unit_weight", wire.unit_weight())?;
    let span = positive("span", geometry.span())?;
    let tension = positive("tension", solution.tension)?;

    let w = weight.value;
    let s = span.value;
    let t = tension.value;
    let h1 = geometry.height1().value;
    let curvature = w / (2.0 * t);

    let (apex, y_offset) = match geometry.height2() {
        None => {
            let dip = positive("dip", solution.dip)?.value;
            (s / 2.0, h1 - dip)
        }
        Some(h2) => {
            // Anchored so that y(0) = h1 and y(span) = h2 exactly.
            let apex = s / 2.0 - t * (h2.value - h1) / (w * s);
            (apex, h1 - curvature * apex * apex)
        }
    };

    let points = (0..SAMPLE_COUNT)
        .map(|i| {
            let x = s * i as f64 / (SAMPLE_COUNT - 1) as f64;
            let y = curvature * (x - apex) * (x - apex) + y_offset;
            CurvePoint {
                x: Length::new::<meter>(x),
                y: Length::new::<meter>(y),
            }
        })
        .collect();

    Ok(CatenaryCurve {
        points,
        apex_offset: Length::new::<meter>(apex),
    })
}
