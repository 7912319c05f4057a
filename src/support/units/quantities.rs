use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Force, Length, TemperatureInterval},
        force::newton,
        length::meter,
        temperature_interval::degree_celsius,
    },
    typenum::{N1, N2, P1, Z0},
};

/// Weight per unit length of wire, N/m in SI.
pub type LinearWeight = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Linear thermal expansion coefficient, 1/K in SI.
pub type ThermalExpansion = Quantity<ISQ<Z0, Z0, Z0, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Constructs a [`LinearWeight`] from a value in newtons per meter.
///
/// [`uom`] defines no unit for this quantity, so construction goes through
/// quantity arithmetic.
#[must_use]
pub fn newtons_per_meter(value: f64) -> LinearWeight {
    Force::new::<newton>(value) / Length::new::<meter>(1.0)
}

/// Constructs a [`ThermalExpansion`] from a value in 1/°C.
///
/// A Celsius degree and a kelvin are the same interval, so the value doubles
/// as 1/K.
#[must_use]
pub fn per_degree_celsius(value: f64) -> ThermalExpansion {
    value / TemperatureInterval::new::<degree_celsius>(1.0)
}
