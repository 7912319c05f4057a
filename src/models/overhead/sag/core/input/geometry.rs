use uom::si::f64::Length;

use crate::models::overhead::sag::core::error::{SagError, positive};

/// Geometry of a single span: horizontal distance and support elevations.
///
/// A missing second height selects the level case, where both supports sit
/// at `height1`. Heights are elevations above an arbitrary common datum and
/// may take any value; only the span itself is constrained positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanGeometry {
    span: Length,
    height1: Length,
    height2: Option<Length>,
}

impl SpanGeometry {
    /// Constructs a level span with both supports at the same elevation.
    ///
    /// # Errors
    ///
    /// Returns an error if the span is not strictly positive.
    pub fn level(span: Length, height: Length) -> Result<Self, SagError> {
        let span = positive("span", span)?;
        Ok(Self {
            span,
            height1: height,
            height2: None,
        })
    }

    /// Constructs an inclined span with supports at different elevations.
    ///
    /// Equal heights are allowed; the curve then degenerates to the level
    /// shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the span is not strictly positive.
    pub fn inclined(span: Length, height1: Length, height2: Length) -> Result<Self, SagError> {
        let span = positive("span", span)?;
        Ok(Self {
            span,
            height1,
            height2: Some(height2),
        })
    }

    /// Returns the horizontal distance between the supports.
    #[must_use]
    pub fn span(&self) -> Length {
        self.span
    }

    /// Returns the elevation of the first support.
    #[must_use]
    pub fn height1(&self) -> Length {
        self.height1
    }

    /// Returns the elevation of the second support, if the span is inclined.
    #[must_use]
    pub fn height2(&self) -> Option<Length> {
        self.height2
    }

    /// Returns whether this span carries a second support height.
    #[must_use]
    pub fn is_inclined(&self) -> bool {
        self.height2.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::overhead::sag::core::error::ArgumentError;
    use uom::si::length::meter;

    #[test]
    fn level_span() {
        let geometry =
            SpanGeometry::level(Length::new::<meter>(50.0), Length::new::<meter>(10.0)).unwrap();
        assert!(!geometry.is_inclined());
        assert_eq!(geometry.height2(), None);
    }

    #[test]
    fn inclined_span_keeps_both_heights() {
        let geometry = SpanGeometry::inclined(
            Length::new::<meter>(50.0),
            Length::new::<meter>(10.0),
            Length::new::<meter>(14.0),
        )
        .unwrap();
        assert!(geometry.is_inclined());
        assert_eq!(geometry.height2(), Some(Length::new::<meter>(14.0)));
    }

    #[test]
    fn rejects_non_positive_span() {
        let err = SpanGeometry::level(Length::new::<meter>(0.0), Length::new::<meter>(10.0))
            .unwrap_err();
        assert!(matches!(
            err,
            SagError::InvalidArgument(ArgumentError::OutOfRange { name: "span", .. })
        ));
    }

    #[test]
    fn negative_heights_are_valid_elevations() {
        assert!(
            SpanGeometry::inclined(
                Length::new::<meter>(50.0),
                Length::new::<meter>(-2.0),
                Length::new::<meter>(3.0),
            )
            .is_ok()
        );
    }
}
