//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jataka_ephem::EphemError;
use jataka_time::TimeError;

/// Errors from KP chart computation.
///
/// `InvalidInput` is a caller error; `Computation` means the requested
/// geometry is degenerate or an iteration failed; `Position` propagates a
/// failure of the upstream position provider. A chart is never partially
/// populated — the first failure aborts the whole computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed calendar date, out-of-range coordinate, unknown selector.
    InvalidInput(String),
    /// House-system geometry undefined at this latitude, or an iterative
    /// method did not converge.
    Computation(&'static str),
    /// The position provider failed; a chart with a missing planet is not
    /// a valid chart.
    Position(EphemError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Computation(msg) => write!(f, "computation error: {msg}"),
            Self::Position(e) => write!(f, "position provider error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<EphemError> for ChartError {
    fn from(e: EphemError) -> Self {
        Self::Position(e)
    }
}
