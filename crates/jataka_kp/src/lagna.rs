//! Ascendant (Lagna) and Midheaven (MC) computation.
//!
//! Standard spherical astronomy formulas for the ecliptic longitude of the
//! eastern-horizon and meridian intersections, with atan2 quadrant
//! correction so results land in [0, 2π).
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 13.

use std::f64::consts::TAU;

/// Ecliptic longitude of the Ascendant in radians, [0, 2π).
///
/// `Asc = atan2(-cos(LST), sin(LST)·cos(ε) + tan(φ)·sin(ε))`
pub fn ascendant_rad(lst_rad: f64, lat_rad: f64, eps_rad: f64) -> f64 {
    let asc = f64::atan2(
        -lst_rad.cos(),
        lst_rad.sin() * eps_rad.cos() + lat_rad.tan() * eps_rad.sin(),
    );
    asc.rem_euclid(TAU)
}

/// Ecliptic longitude of the Midheaven in radians, [0, 2π).
///
/// `MC = atan2(sin(LST), cos(LST)·cos(ε))`
pub fn midheaven_rad(lst_rad: f64, eps_rad: f64) -> f64 {
    let mc = f64::atan2(lst_rad.sin(), lst_rad.cos() * eps_rad.cos());
    mc.rem_euclid(TAU)
}

/// Ascendant and MC in degrees, sharing one set of inputs.
pub fn ascendant_mc_deg(lst_rad: f64, lat_rad: f64, eps_rad: f64) -> (f64, f64) {
    (
        ascendant_rad(lst_rad, lat_rad, eps_rad).to_degrees(),
        midheaven_rad(lst_rad, eps_rad).to_degrees(),
    )
}
