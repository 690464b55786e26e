//! Error types for civil time conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar validation or offset handling.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar component outside its valid range (month 13, day 32, hour 25, ...).
    InvalidDate(String),
    /// UTC offset outside the plausible [-14, +14] hour range.
    InvalidOffset(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidOffset(msg) => write!(f, "invalid UTC offset: {msg}"),
        }
    }
}

impl Error for TimeError {}
