use uom::ConstZero;
use uom::si::f64::{Area, Pressure};

use crate::models::overhead::sag::core::error::{SagError, positive};
use crate::support::units::{LinearWeight, ThermalExpansion};

/// Physical constants of a wire, per meter of wire length.
///
/// The unit weight is guaranteed strictly positive. Cross-section and
/// elastic modulus are only consumed by the temperature-adjusted solve,
/// which validates them at the point of use, so a record built with
/// [`WireProperties::from_unit_weight`] is sufficient for every other
/// operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireProperties {
    unit_weight: LinearWeight,
    cross_section: Area,
    elastic_modulus: Pressure,
    thermal_expansion: ThermalExpansion,
}

impl WireProperties {
    /// Constructs a validated wire record.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit weight is not strictly positive.
    pub fn new(
        unit_weight: LinearWeight,
        cross_section: Area,
        elastic_modulus: Pressure,
        thermal_expansion: ThermalExpansion,
    ) -> Result<Self, SagError> {
        let unit_weight = positive("unit_weight", unit_weight)?;
        Ok(Self {
            unit_weight,
            cross_section,
            elastic_modulus,
            thermal_expansion,
        })
    }

    /// Constructs a minimal record for callers that only know the weight.
    ///
    /// The elastic and thermal constants are zero, so the record supports
    /// every operation except the temperature-adjusted solve, which will
    /// reject it.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit weight is not strictly positive.
    pub fn from_unit_weight(unit_weight: LinearWeight) -> Result<Self, SagError> {
        Self::new(
            unit_weight,
            Area::ZERO,
            Pressure::ZERO,
            ThermalExpansion::ZERO,
        )
    }

    /// Constructs a wire record without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the unit weight is strictly positive.
    /// Violating this invariant will result in errors from the operations
    /// that consume the record.
    #[must_use]
    pub fn new_unchecked(
        unit_weight: LinearWeight,
        cross_section: Area,
        elastic_modulus: Pressure,
        thermal_expansion: ThermalExpansion,
    ) -> Self {
        Self {
            unit_weight,
            cross_section,
            elastic_modulus,
            thermal_expansion,
        }
    }

    /// Returns the weight per meter of wire length.
    #[must_use]
    pub fn unit_weight(&self) -> LinearWeight {
        self.unit_weight
    }

    /// Returns the load-bearing cross-section.
    #[must_use]
    pub fn cross_section(&self) -> Area {
        self.cross_section
    }

    /// Returns the elastic (Young's) modulus.
    #[must_use]
    pub fn elastic_modulus(&self) -> Pressure {
        self.elastic_modulus
    }

    /// Returns the linear thermal expansion coefficient.
    #[must_use]
    pub fn thermal_expansion(&self) -> ThermalExpansion {
        self.thermal_expansion
    }
}

/// A source of wire records keyed by wire-type identifier.
///
/// Implementations own the loading and unit conversion of their backing
/// data; the models only require the four SI constants in
/// [`WireProperties`]. Passing the catalog in explicitly keeps its
/// lifecycle with the caller (load once, pass by reference) instead of in
/// module-level state.
pub trait WireCatalog {
    /// Looks up a wire by its type identifier.
    fn lookup(&self, kind: &str) -> Option<&WireProperties>;
}

/// An in-memory [`WireCatalog`].
///
/// Insertion order is preserved; a duplicate identifier shadows nothing,
/// the first inserted entry wins on lookup.
#[derive(Debug, Clone, Default)]
pub struct WireTable {
    entries: Vec<(String, WireProperties)>,
}

impl WireTable {
    /// Constructs an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a wire under the given type identifier.
    pub fn insert(&mut self, kind: impl Into<String>, wire: WireProperties) {
        self.entries.push((kind.into(), wire));
    }

    /// Returns the known wire-type identifiers in insertion order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(kind, _)| kind.as_str())
    }
}

impl WireCatalog for WireTable {
    fn lookup(&self, kind: &str) -> Option<&WireProperties> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == kind)
            .map(|(_, wire)| wire)
    }
}

impl FromIterator<(String, WireProperties)> for WireTable {
    fn from_iter<I: IntoIterator<Item = (String, WireProperties)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
