//! Dip/tension solving at reference temperature and under temperature change.

mod cubic;

use uom::si::f64::{Force, Length, ThermodynamicTemperature};
use uom::si::{force::newton, length::meter};

use crate::support::units::TemperatureDifference;

use super::{
    Given, Solution, WireProperties,
    error::{SagError, positive},
};

/// Computes the dip of a wire strung at the given horizontal tension.
///
/// Uses the parabolic relation `d = w·s² / (8·T)`.
///
/// # Errors
///
/// Returns [`SagError::InvalidArgument`] if the unit weight, span, or
/// tension is not strictly positive.
pub fn dip_from_tension(
    wire: &WireProperties,
    span: Length,
    tension: Force,
) -> Result<Length, SagError> {
    let weight = positive("unit_weight", wire.unit_weight())?;
    let span = positive("span", span)?;
    let tension = positive("tension", tension)?;

    Ok(weight * span * span / (8.0 * tension))
}

/// Computes the horizontal tension that produces the given dip.
///
/// Uses the parabolic relation `T = w·s² / (8·d)`.
///
/// # Errors
///
/// Returns [`SagError::InvalidArgument`] if the unit weight, span, or dip
/// is not strictly positive.
pub fn tension_from_dip(
    wire: &WireProperties,
    span: Length,
    dip: Length,
) -> Result<Force, SagError> {
    let weight = positive("unit_weight", wire.unit_weight())?;
    let span = positive("span", span)?;
    let dip = positive("dip", dip)?;

    Ok(weight * span * span / (8.0 * dip))
}

/// Resolves the dip/tension pair from whichever of the two is known.
///
/// # Errors
///
/// Returns [`SagError::InvalidArgument`] if the unit weight or span is not
/// strictly positive.
pub fn solve(wire: &WireProperties, span: Length, given: Given) -> Result<Solution, SagError> {
    match given {
        Given::Dip(dip) => Ok(Solution {
            dip,
            tension: tension_from_dip(wire, span, dip)?,
        }),
        Given::Tension(tension) => Ok(Solution {
            dip: dip_from_tension(wire, span, tension)?,
            tension,
        }),
    }
}

/// Resolves the dip/tension pair from a pair of optional inputs.
///
/// Convenience wrapper around [`Given::from_options`] and [`solve`] for
/// callers holding form-style input where either field may be blank.
///
/// # Errors
///
/// Returns [`SagError::InvalidArgument`] if neither or both inputs are
/// supplied, or if any consumed quantity is not strictly positive.
pub fn solve_either(
    wire: &WireProperties,
    span: Length,
    dip: Option<Length>,
    tension: Option<Force>,
) -> Result<Solution, SagError> {
    solve(wire, span, Given::from_options(dip, tension)?)
}

/// Computes the dip and tension at a temperature away from the reference.
///
/// The reference state is the tension measured at `reference`. Linear
/// thermal expansion and Hooke's-law elastic stretch of the unstretched
/// wire length, combined with the parabolic dip relation, yield one
/// depressed cubic for the adjusted dip and one for the adjusted tension.
/// Each is solved in closed form and the smallest positive real root is
/// taken (the cubics' constant terms make at most one positive root
/// possible for valid inputs).
///
/// # Errors
///
/// Returns [`SagError::InvalidArgument`] if the unit weight, span, tension,
/// cross-section, or elastic modulus is not strictly positive, and
/// [`SagError::NumericalDivergence`] if a cubic has no positive real root.
pub fn at_temperature(
    wire: &WireProperties,
    span: Length,
    tension_at_reference: Force,
    target: ThermodynamicTemperature,
    reference: ThermodynamicTemperature,
) -> Result<Solution, SagError> {
    let dip_at_reference = dip_from_tension(wire, span, tension_at_reference)?;
    let cross_section = positive("cross_section", wire.cross_section())?;
    let elastic_modulus = positive("elastic_modulus", wire.elastic_modulus())?;

    // The cubics mix dimensions (m², m³ and N, N³), so the algebra runs on
    // base-SI values.
    let ea = (cross_section * elastic_modulus).value;
    let w = wire.unit_weight().value;
    let s = span.value;
    let t0 = tension_at_reference.value;
    let d0 = dip_at_reference.value;
    let thermal_strain = wire.thermal_expansion().value * target.minus(reference).value;

    // Dip cubic: d³ + p·d + q = 0.
    let p = 3.0 * s * s / (8.0 * ea) * (t0 - ea * thermal_strain) - d0 * d0;
    let q = -(3.0 * w * s.powi(4)) / (64.0 * ea);
    let dip = cubic::smallest_positive(&cubic::real_roots(p, q))
        .ok_or(SagError::NumericalDivergence { unknown: "dip" })?;

    // Tension cubic: t³ + p·t + q = 0.
    let p = -(t0 - 8.0 * ea * d0 * d0 / (3.0 * s * s) - ea * thermal_strain);
    let q = -(ea * w * w * s * s) / 24.0;
    let tension = cubic::smallest_positive(&cubic::real_roots(p, q))
        .ok_or(SagError::NumericalDivergence { unknown: "tension" })?;

    Ok(Solution {
        dip: Length::new::<meter>(dip),
        tension: Force::new::<newton>(tension),
    })
}

/// Evaluates [`at_temperature`] at each target temperature, in order.
///
/// Fails fast on the first temperature whose cubic diverges.
///
/// # Errors
///
/// Propagates the first error from [`at_temperature`].
pub fn temperature_sweep(
    wire: &WireProperties,
    span: Length,
    tension_at_reference: Force,
    reference: ThermodynamicTemperature,
    targets: &[ThermodynamicTemperature],
) -> Result<Vec<(ThermodynamicTemperature, Solution)>, SagError> {
    targets
        .iter()
        .map(|&target| {
            at_temperature(wire, span, tension_at_reference, target, reference)
                .map(|solution| (target, solution))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, f64::{Area, Pressure}, pressure::gigapascal,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::models::overhead::sag::core::error::ArgumentError;
    use crate::support::units::{newtons_per_meter, per_degree_celsius};

    fn bare_wire(weight: f64) -> WireProperties {
        WireProperties::from_unit_weight(newtons_per_meter(weight)).unwrap()
    }

    fn elastic_wire() -> WireProperties {
        WireProperties::new(
            newtons_per_meter(1.0),
            Area::new::<square_meter>(1.0e-4),
            Pressure::new::<gigapascal>(70.0),
            per_degree_celsius(23.0e-6),
        )
        .unwrap()
    }

    fn meters(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn newtons(value: f64) -> Force {
        Force::new::<newton>(value)
    }

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn reference_dip_case() {
        let dip = dip_from_tension(&bare_wire(1.0), meters(50.0), newtons(1000.0)).unwrap();
        assert_eq!(dip.get::<meter>(), 0.3125);
    }

    #[test]
    fn reference_tension_case() {
        let tension = tension_from_dip(&bare_wire(1.0), meters(50.0), meters(0.5)).unwrap();
        assert_eq!(tension.get::<newton>(), 625.0);
    }

    #[test]
    fn dip_tension_round_trip() {
        let wire = bare_wire(6.97);
        let span = meters(120.0);
        for dip in [0.05, 0.5, 2.5] {
            let tension = tension_from_dip(&wire, span, meters(dip)).unwrap();
            let back = dip_from_tension(&wire, span, tension).unwrap();
            assert_relative_eq!(back.get::<meter>(), dip, epsilon = 1e-12);
        }
    }

    #[test]
    fn rejects_non_positive_quantities() {
        let wire = bare_wire(1.0);

        assert!(dip_from_tension(&wire, meters(0.0), newtons(1000.0)).is_err());
        assert!(dip_from_tension(&wire, meters(50.0), newtons(0.0)).is_err());
        assert!(dip_from_tension(&wire, meters(-50.0), newtons(1000.0)).is_err());
        assert!(tension_from_dip(&wire, meters(50.0), meters(-0.5)).is_err());
        assert!(tension_from_dip(&wire, meters(50.0), meters(0.0)).is_err());

        // A record built without validation still fails at the operation.
        let bad = WireProperties::new_unchecked(
            newtons_per_meter(-1.0),
            Area::new::<square_meter>(0.0),
            Pressure::new::<gigapascal>(0.0),
            per_degree_celsius(0.0),
        );
        let err = dip_from_tension(&bad, meters(50.0), newtons(1000.0)).unwrap_err();
        assert!(matches!(
            err,
            SagError::InvalidArgument(ArgumentError::OutOfRange {
                name: "unit_weight",
                ..
            })
        ));
    }

    #[test]
    fn solve_from_either_side() {
        let wire = bare_wire(1.0);
        let span = meters(50.0);

        let from_tension = solve(&wire, span, Given::Tension(newtons(1000.0))).unwrap();
        assert_relative_eq!(from_tension.dip.get::<meter>(), 0.3125);
        assert_relative_eq!(from_tension.tension.get::<newton>(), 1000.0);

        let from_dip = solve_either(&wire, span, Some(meters(0.5)), None).unwrap();
        assert_relative_eq!(from_dip.tension.get::<newton>(), 625.0);
    }

    #[test]
    fn solve_either_requires_exactly_one_input() {
        let wire = bare_wire(1.0);
        let span = meters(50.0);

        assert_eq!(
            solve_either(&wire, span, None, None).unwrap_err(),
            SagError::InvalidArgument(ArgumentError::NeitherGiven)
        );
        assert_eq!(
            solve_either(&wire, span, Some(meters(0.5)), Some(newtons(625.0))).unwrap_err(),
            SagError::InvalidArgument(ArgumentError::BothGiven)
        );
    }

    #[test]
    fn unchanged_temperature_reproduces_reference_dip() {
        let solution = at_temperature(
            &elastic_wire(),
            meters(50.0),
            newtons(1000.0),
            celsius(20.0),
            celsius(20.0),
        )
        .unwrap();
        assert_relative_eq!(solution.dip.get::<meter>(), 0.3125, epsilon = 1e-9);
    }

    #[test]
    fn heating_increases_dip() {
        let wire = elastic_wire();
        let span = meters(50.0);
        let tension = newtons(1000.0);

        let reference_dip = dip_from_tension(&wire, span, tension).unwrap();
        let hot = at_temperature(&wire, span, tension, celsius(100.0), celsius(20.0)).unwrap();

        assert!(hot.dip > reference_dip);
    }

    #[test]
    fn heating_relaxes_tension() {
        let wire = elastic_wire();
        let span = meters(50.0);
        let tension = newtons(1000.0);

        let baseline = at_temperature(&wire, span, tension, celsius(20.0), celsius(20.0)).unwrap();
        let hot = at_temperature(&wire, span, tension, celsius(100.0), celsius(20.0)).unwrap();

        assert!(hot.tension < baseline.tension);
        assert!(hot.tension.get::<newton>() > 0.0);
    }

    #[test]
    fn temperature_solve_requires_elastic_constants() {
        let err = at_temperature(
            &bare_wire(1.0),
            meters(50.0),
            newtons(1000.0),
            celsius(40.0),
            celsius(10.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SagError::InvalidArgument(ArgumentError::OutOfRange {
                name: "cross_section",
                ..
            })
        ));
    }

    #[test]
    fn sweep_preserves_target_order() {
        let wire = elastic_wire();
        let targets = [celsius(-20.0), celsius(40.0)];
        let results = temperature_sweep(
            &wire,
            meters(50.0),
            newtons(1000.0),
            celsius(10.0),
            &targets,
        )
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, targets[0]);
        assert_eq!(results[1].0, targets[1]);
        // Colder wire sags less than hotter wire.
        assert!(results[0].1.dip < results[1].1.dip);
    }
}
