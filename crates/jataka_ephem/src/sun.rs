//! Geometric solar longitude.
//!
//! Mean longitude plus equation of center, the standard low-order solar
//! theory. Good to a few arcseconds over the modern era.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25.

/// Geometric geocentric solar longitude in degrees, [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn geometric_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;

    // Mean longitude of the Sun, referred to the mean equinox of date.
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;

    // Mean anomaly.
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2).to_radians();

    // Equation of center.
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    (l0 + c).rem_euclid(360.0)
}
