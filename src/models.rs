//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently just
//! [`overhead`]) based on an opinionated taxonomy. This organization may
//! evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The
//! module's top level is a thin facade that re-exports the core API;
//! the `core` module itself is an implementation detail.

pub mod overhead;
