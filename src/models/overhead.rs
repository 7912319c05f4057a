//! Overhead line models.
//!
//! This module contains models for overhead conductors strung between
//! supports, starting with the sag/tension model of a single span.

pub mod sag;
