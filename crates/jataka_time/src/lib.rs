//! Civil time, Julian Day, sidereal time, and obliquity.
//!
//! This crate provides:
//! - Julian Day ↔ calendar conversions (proleptic Gregorian)
//! - A validated `CivilDateTime` type with UTC-offset → JD UT conversion
//! - Greenwich Mean Sidereal Time and Local Sidereal Time
//! - Mean obliquity of the ecliptic (IAU 1980)

pub mod civil;
pub mod error;
pub mod julian;
pub mod obliquity;
pub mod sidereal;

pub use civil::CivilDateTime;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use obliquity::mean_obliquity_deg;
pub use sidereal::{gmst_deg, local_sidereal_deg, local_sidereal_hours};
