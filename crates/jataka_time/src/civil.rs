//! Civil calendar date/time with validation and UTC-offset handling.
//!
//! `CivilDateTime` is the canonical birth-moment representation. Components
//! are range-checked at construction; conversion never clamps.

use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// Civil calendar date with sub-second precision.
///
/// Constructed only through [`CivilDateTime::new`], which rejects
/// out-of-range components instead of clamping them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

/// Days in a month of the proleptic Gregorian calendar.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gregorian leap-year rule.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl CivilDateTime {
    /// Create a validated civil date-time.
    ///
    /// Rejects month 0/13, day 0/32 (month- and leap-year-aware), hour 24,
    /// minute 60, and second outside [0, 60).
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!("month {month} out of 1..=12")));
        }
        let dim = days_in_month(year, month);
        if !(1..=dim).contains(&day) {
            return Err(TimeError::InvalidDate(format!(
                "day {day} out of 1..={dim} for {year}-{month:02}"
            )));
        }
        if hour >= 24 {
            return Err(TimeError::InvalidDate(format!("hour {hour} out of 0..=23")));
        }
        if minute >= 60 {
            return Err(TimeError::InvalidDate(format!(
                "minute {minute} out of 0..=59"
            )));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidDate(format!(
                "second {second} out of [0, 60)"
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Convert to a Julian Date in UT, shifting the civil moment to UTC by
    /// the given offset (east-of-Greenwich offsets are positive).
    pub fn to_jd_ut(&self, utc_offset_hours: f64) -> Result<f64, TimeError> {
        if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > 14.0 {
            return Err(TimeError::InvalidOffset(format!(
                "{utc_offset_hours} hours outside [-14, 14]"
            )));
        }
        let day_frac = self.day as f64
            + (self.hour as f64 - utc_offset_hours) / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        Ok(calendar_to_jd(self.year, self.month, day_frac))
    }
}

impl std::fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
