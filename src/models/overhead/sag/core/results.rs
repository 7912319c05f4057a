use uom::si::f64::{Force, Length};

/// A resolved dip/tension pair for a span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Maximum vertical sag below the supports.
    pub dip: Length,

    /// Horizontal tension in the wire.
    pub tension: Force,
}
