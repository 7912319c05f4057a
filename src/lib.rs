//! # Linesag
//!
//! Sag ("dip") and tension models for overhead wire spans.
//!
//! The crate answers the questions a clearance study asks about a single
//! span: how far a wire of known unit weight sags under a given tension,
//! what tension produces a given sag, how both change when the conductor
//! temperature moves away from the stringing temperature, and what curve
//! the wire traces between its supports.
//!
//! All models use the parabolic approximation of the catenary, which is
//! accurate for the small sag-to-span ratios typical of distribution and
//! transmission spans.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific sag and tension models.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts inside a model's internal `core` module and moves to
//! [`support`] once it proves useful across models or outside this crate.

pub mod models;
pub mod support;
