mod geometry;
mod given;
mod wire;

pub use geometry::SpanGeometry;
pub use given::Given;
pub use wire::{WireCatalog, WireProperties, WireTable};
