use uom::si::f64::{Force, Length};

use crate::models::overhead::sag::core::error::{ArgumentError, SagError, positive};

/// Specifies which of dip and tension is known for a span.
///
/// Exactly one of the pair defines the wire state at the reference
/// temperature; the solver computes the counterpart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Given {
    /// The maximum vertical sag below the supports is known.
    Dip(Length),

    /// The horizontal tension is known.
    Tension(Force),
}

impl Given {
    /// Builds a `Given` from a pair of optional inputs.
    ///
    /// Positivity is checked only on the value actually supplied.
    ///
    /// # Errors
    ///
    /// Returns an error if neither or both values are supplied, or if the
    /// supplied value is not strictly positive.
    pub fn from_options(dip: Option<Length>, tension: Option<Force>) -> Result<Self, SagError> {
        match (dip, tension) {
            (Some(dip), None) => Ok(Self::Dip(positive("dip", dip)?)),
            (None, Some(tension)) => Ok(Self::Tension(positive("tension", tension)?)),
            (None, None) => Err(ArgumentError::NeitherGiven.into()),
            (Some(_), Some(_)) => Err(ArgumentError::BothGiven.into()),
        }
    }
}
