//! Julian Day ↔ calendar conversions.
//!
//! Proleptic Gregorian algorithm, valid for the full range where the
//! algorithm itself is defined. Dates before the Gregorian reform yield
//! algorithmically consistent (proleptic) values.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 7.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a proleptic Gregorian calendar date to a Julian Date.
///
/// `day` may carry a fractional part (0.5 = noon offset from 0h).
/// The caller is responsible for component validation; see
/// [`crate::CivilDateTime`] for the validated entry point.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * ((m + 1) as f64)).floor() + day + b
        - 1524.5
}

/// Convert a Julian Date back to a proleptic Gregorian calendar date.
///
/// Returns `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian centuries since J2000.0 for a given Julian Date.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let jd = calendar_to_jd(2000, 1, 1.5);
        assert!((jd - J2000_JD).abs() < 1e-9, "JD = {jd}");
    }

    #[test]
    fn epoch_1990() {
        // 1990-Jan-01 0h UT
        let jd = calendar_to_jd(1990, 1, 1.0);
        assert!((jd - 2_447_892.5).abs() < 1e-9, "JD = {jd}");
    }

    #[test]
    fn meeus_sputnik_example() {
        // Meeus example 7.a: 1957 October 4.81
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "JD = {jd}");
    }

    #[test]
    fn roundtrip_calendar() {
        for &(y, m, d) in &[
            (2000, 1, 1.5),
            (1990, 1, 1.0),
            (2024, 2, 29.25),
            (1875, 7, 14.75),
        ] {
            let jd = calendar_to_jd(y, m, d);
            let (y2, m2, d2) = jd_to_calendar(jd);
            assert_eq!(y, y2, "year roundtrip for JD {jd}");
            assert_eq!(m, m2, "month roundtrip for JD {jd}");
            assert!((d - d2).abs() < 1e-6, "day roundtrip for JD {jd}: {d2}");
        }
    }

    #[test]
    fn centuries_at_j2000() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
    }

    #[test]
    fn centuries_forward() {
        let t = jd_to_centuries(J2000_JD + DAYS_PER_CENTURY);
        assert!((t - 1.0).abs() < 1e-12);
    }

    #[test]
    fn day_boundary_continuity() {
        // JD is continuous across a calendar month boundary.
        let before = calendar_to_jd(2023, 12, 31.999_999);
        let after = calendar_to_jd(2024, 1, 1.000_001);
        assert!((after - before) < 1e-5, "gap = {}", after - before);
    }
}
