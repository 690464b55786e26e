//! Truncated principal lunar series.
//!
//! Mean longitude plus the dominant periodic terms of the lunar theory,
//! evaluated over the Delaunay arguments. Truncation keeps every term with
//! an amplitude above ~0.004°, which bounds the residual to well under an
//! arc-minute in longitude.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 47,
//! Tables 47.A / 47.B (principal terms).

use crate::args::fundamental_arguments;

/// Principal longitude terms: `[nl, nl', nF, nD, amplitude_deg]`.
///
/// `nl` multiplies the Moon's mean anomaly, `nl'` the Sun's, `nF` the
/// argument of latitude, `nD` the mean elongation.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[f64; 5]; 24] = [
    //  nl   nl'   nF    nD    amplitude (deg)
    [  1.0,  0.0,  0.0,  0.0,  6.288774],
    [ -1.0,  0.0,  0.0,  2.0,  1.274027],
    [  0.0,  0.0,  0.0,  2.0,  0.658314],
    [  2.0,  0.0,  0.0,  0.0,  0.213618],
    [  0.0,  1.0,  0.0,  0.0, -0.185116],
    [  0.0,  0.0,  2.0,  0.0, -0.114332],
    [ -2.0,  0.0,  0.0,  2.0,  0.058793],
    [ -1.0, -1.0,  0.0,  2.0,  0.057066],
    [  1.0,  0.0,  0.0,  2.0,  0.053322],
    [  0.0, -1.0,  0.0,  2.0,  0.045758],
    [ -1.0,  1.0,  0.0,  0.0, -0.040923],
    [  0.0,  0.0,  0.0,  1.0, -0.034720],
    [  1.0,  1.0,  0.0,  0.0, -0.030383],
    [  0.0,  0.0, -2.0,  2.0,  0.015327],
    [  1.0,  0.0,  2.0,  0.0, -0.012528],
    [  1.0,  0.0, -2.0,  0.0,  0.010980],
    [ -1.0,  0.0,  0.0,  4.0,  0.010675],
    [  3.0,  0.0,  0.0,  0.0,  0.010034],
    [ -2.0,  0.0,  0.0,  4.0,  0.008548],
    [ -1.0,  1.0,  0.0,  2.0, -0.007888],
    [  0.0,  1.0,  0.0,  2.0, -0.006766],
    [ -1.0,  0.0,  0.0,  1.0, -0.005163],
    [  0.0,  1.0,  0.0,  1.0,  0.004987],
    [  1.0, -1.0,  0.0,  2.0,  0.004036],
];

/// Principal latitude terms: `[nl, nl', nF, nD, amplitude_deg]`.
#[rustfmt::skip]
static LATITUDE_TERMS: [[f64; 5]; 14] = [
    //  nl   nl'   nF    nD    amplitude (deg)
    [  0.0,  0.0,  1.0,  0.0,  5.128122],
    [  1.0,  0.0,  1.0,  0.0,  0.280602],
    [  1.0,  0.0, -1.0,  0.0,  0.277693],
    [  0.0,  0.0, -1.0,  2.0,  0.173237],
    [ -1.0,  0.0,  1.0,  2.0,  0.055413],
    [ -1.0,  0.0, -1.0,  2.0,  0.046271],
    [  0.0,  0.0,  1.0,  2.0,  0.032573],
    [  2.0,  0.0,  1.0,  0.0,  0.017198],
    [  1.0,  0.0, -1.0,  2.0,  0.009266],
    [  2.0,  0.0, -1.0,  0.0,  0.008822],
    [  0.0, -1.0, -1.0,  2.0,  0.008216],
    [ -2.0,  0.0, -1.0,  2.0,  0.004324],
    [  1.0,  0.0,  1.0,  2.0,  0.004200],
    [  0.0,  1.0, -1.0,  0.0, -0.003359],
];

/// Mean longitude of the Moon in degrees (mean equinox of date).
fn mean_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0
}

/// Sum a term table over the Delaunay arguments, in degrees.
fn sum_terms(terms: &[[f64; 5]], args: &[f64; 5]) -> f64 {
    let mut total = 0.0_f64;
    for term in terms {
        let angle = term[0] * args[0] + term[1] * args[1] + term[2] * args[2] + term[3] * args[3];
        total += term[4] * angle.sin();
    }
    total
}

/// Geocentric tropical longitude and latitude of the Moon in degrees.
///
/// `t` = Julian centuries since J2000.0. Longitude is in [0, 360).
pub fn longitude_latitude_deg(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);
    let lon = mean_longitude_deg(t) + sum_terms(&LONGITUDE_TERMS, &args);
    let lat = sum_terms(&LATITUDE_TERMS, &args);
    (lon.rem_euclid(360.0), lat)
}
