use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// Subtracting two [`ThermodynamicTemperature`] values (absolute
/// temperatures) should yield a [`TemperatureInterval`] (a difference), but
/// [`uom`] does not provide that operator directly; see
/// [uom#380](https://github.com/iliekturtles/uom/issues/380). This trait
/// fills the gap with a [`minus`](Self::minus) method, used by the
/// temperature-adjusted solve to form the offset from the reference
/// temperature.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
