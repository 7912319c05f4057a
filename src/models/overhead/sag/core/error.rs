use num_traits::Zero;
use thiserror::Error;

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// Errors that can occur while solving a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SagError {
    /// An input failed validation.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    /// The temperature-adjusted cubic has no positive real root.
    ///
    /// Physically this means the wire would go slack or snap under the
    /// requested temperature scenario; it is surfaced rather than defaulted.
    #[error("no positive real root for `{unknown}` under the requested temperature scenario")]
    NumericalDivergence {
        /// Name of the unknown whose cubic failed, `"dip"` or `"tension"`.
        unknown: &'static str,
    },
}

/// Reasons an input argument is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A required physical quantity is not strictly positive.
    #[error("`{name}` {source}")]
    OutOfRange {
        /// Name of the offending argument.
        name: &'static str,

        /// Underlying constraint violation.
        #[source]
        source: ConstraintError,
    },

    /// Neither dip nor tension was supplied where exactly one is required.
    #[error("exactly one of `dip` and `tension` must be given, got neither")]
    NeitherGiven,

    /// Both dip and tension were supplied where exactly one is required.
    #[error("exactly one of `dip` and `tension` must be given, got both")]
    BothGiven,
}

/// Validates that a quantity is strictly positive, naming it on failure.
pub(super) fn positive<T>(name: &'static str, value: T) -> Result<T, SagError>
where
    T: PartialOrd + Zero,
{
    Constrained::<T, StrictlyPositive>::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| ArgumentError::OutOfRange { name, source }.into())
}
