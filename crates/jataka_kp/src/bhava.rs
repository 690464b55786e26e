//! House cusp computation: Equal and Placidus (KP standard).
//!
//! Equal: 30° arcs from the Ascendant, defined at any latitude.
//! Placidus: time-based semi-arc trisection, solved per cusp by fixed-point
//! iteration. Cusps 1/4/7/10 are the angles; 11, 12, 2, 3 iterate; 5, 6,
//! 8, 9 follow by opposite-point symmetry.
//!
//! Sources: standard spherical astronomy (Meeus, Montenbruck & Pfleger).

use std::f64::consts::{PI, TAU};

use crate::error::ChartError;
use crate::longitude::normalize_360;

/// Maximum latitude (degrees) at which the Placidus semi-arc division is
/// treated as well-defined. Beyond this the ecliptic can fail to intersect
/// the house circles and the cosine terms degenerate.
pub const MAX_PLACIDUS_LATITUDE_DEG: f64 = 66.5;

/// Convergence knobs for the Placidus fixed-point iteration.
#[derive(Debug, Clone, Copy)]
pub struct PlacidusConfig {
    /// Stop once successive right-ascension estimates differ by less than
    /// this (radians).
    pub tolerance_rad: f64,
    /// Give up (with a `Computation` error) after this many iterations.
    pub max_iterations: u32,
}

impl Default for PlacidusConfig {
    fn default() -> Self {
        Self {
            tolerance_rad: 1e-9,
            max_iterations: 100,
        }
    }
}

/// Equal house division: cusp[i] = asc + i·30°.
pub fn equal_cusps(asc_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(asc_deg + (i as f64) * 30.0);
    }
    cusps
}

/// Reject latitudes where the Placidus division degenerates.
pub fn check_placidus_latitude(latitude_deg: f64) -> Result<(), ChartError> {
    if latitude_deg.abs() > MAX_PLACIDUS_LATITUDE_DEG {
        return Err(ChartError::Computation(
            "Placidus houses are undefined beyond 66.5° latitude",
        ));
    }
    Ok(())
}

/// Placidus house cusps in tropical degrees.
///
/// `ramc` is the right ascension of the MC (equal to LST) in radians.
pub fn placidus_cusps(
    asc_deg: f64,
    mc_deg: f64,
    ramc: f64,
    lat: f64,
    eps: f64,
    config: &PlacidusConfig,
) -> Result<[f64; 12], ChartError> {
    let desc_deg = normalize_360(asc_deg + 180.0);
    let ic_deg = normalize_360(mc_deg + 180.0);

    let mut cusps = [0.0; 12];
    cusps[0] = asc_deg;
    cusps[3] = ic_deg;
    cusps[6] = desc_deg;
    cusps[9] = mc_deg;

    // Cusps 11, 12: MC -> Asc (diurnal semi-arc trisection)
    cusps[10] = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, true, config)?;
    cusps[11] = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, true, config)?;

    // Cusps 2, 3: Asc -> IC (nocturnal semi-arc trisection). Counting from
    // the IC side, house 2 sits 2/3 of the nocturnal arc before it.
    cusps[1] = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, false, config)?;
    cusps[2] = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, false, config)?;

    // Cusps 5, 6, 8, 9: opposite-point symmetry
    cusps[4] = normalize_360(cusps[10] + 180.0);
    cusps[5] = normalize_360(cusps[11] + 180.0);
    cusps[7] = normalize_360(cusps[1] + 180.0);
    cusps[8] = normalize_360(cusps[2] + 180.0);

    Ok(cusps)
}

/// Solve one Placidus cusp by iterative semi-arc trisection.
///
/// Diurnal branch (houses 11, 12): `RA = RAMC + fraction·SA_diurnal`.
/// Nocturnal branch (houses 2, 3): `RA = RAMC + π − fraction·SA_nocturnal`,
/// measuring back from the IC. The declination of the trial point feeds
/// back into the semi-arc, hence the fixed-point iteration.
fn placidus_cusp(
    ramc: f64,
    lat: f64,
    eps: f64,
    fraction: f64,
    above_horizon: bool,
    config: &PlacidusConfig,
) -> Result<f64, ChartError> {
    let mut ra = if above_horizon {
        ramc + fraction * PI / 2.0
    } else {
        ramc + PI - fraction * PI / 2.0
    };

    let mut converged = false;
    for _ in 0..config.max_iterations {
        let dec = (eps.sin() * ra.sin()).asin();
        let semi_arc = semi_arc_rad(dec, lat, above_horizon);
        let new_ra = if above_horizon {
            ramc + fraction * semi_arc
        } else {
            ramc + PI - fraction * semi_arc
        };

        let step = (new_ra - ra).abs();
        ra = new_ra;
        if step < config.tolerance_rad {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(ChartError::Computation(
            "Placidus cusp iteration did not converge",
        ));
    }

    Ok(normalize_360(
        equator_to_ecliptic_longitude_rad(ra, eps).to_degrees(),
    ))
}

/// Diurnal or nocturnal semi-arc in radians.
///
/// `semi_arc = acos(-tan(dec)·tan(lat))`; the nocturnal arc is its
/// supplement.
fn semi_arc_rad(dec: f64, lat: f64, diurnal: bool) -> f64 {
    let cos_ha = -(dec.tan() * lat.tan());
    let ha = cos_ha.clamp(-1.0, 1.0).acos();
    if diurnal { ha } else { PI - ha }
}

/// Convert equatorial right ascension to ecliptic longitude for a point on
/// the house circle, where `dec = asin(sin(ε)·sin(RA))`.
fn equator_to_ecliptic_longitude_rad(ra: f64, eps: f64) -> f64 {
    let dec = (eps.sin() * ra.sin()).asin();
    let sin_lon = ra.sin() * eps.cos() + dec.tan() * eps.sin();
    let cos_lon = ra.cos();
    f64::atan2(sin_lon, cos_lon).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lagna::{ascendant_rad, midheaven_rad};
    use crate::longitude::arc_forward;

    const EPS: f64 = 0.409_092_804; // 23.4393° in radians

    #[test]
    fn equal_cusps_30_deg_apart() {
        let cusps = equal_cusps(100.0);
        for (i, &cusp) in cusps.iter().enumerate() {
            let expected = normalize_360(100.0 + (i as f64) * 30.0);
            assert!(
                (cusp - expected).abs() < 1e-10,
                "cusp[{i}] = {cusp}, expected {expected}"
            );
        }
    }

    #[test]
    fn equal_cusps_wrap_around() {
        let cusps = equal_cusps(350.0);
        assert!((cusps[0] - 350.0).abs() < 1e-10);
        assert!((cusps[1] - 20.0).abs() < 1e-10);
        assert!((cusps[11] - 320.0).abs() < 1e-10);
    }

    #[test]
    fn equal_first_cusp_is_ascendant() {
        let cusps = equal_cusps(123.456);
        assert_eq!(cusps[0], 123.456);
    }

    fn placidus_for(lst_rad: f64, lat_deg: f64) -> Result<[f64; 12], ChartError> {
        let lat = lat_deg.to_radians();
        let asc = ascendant_rad(lst_rad, lat, EPS).to_degrees();
        let mc = midheaven_rad(lst_rad, EPS).to_degrees();
        placidus_cusps(asc, mc, lst_rad, lat, EPS, &PlacidusConfig::default())
    }

    #[test]
    fn placidus_angles_are_asc_and_mc() {
        let lst = 1.3_f64;
        let lat = 37.5665_f64.to_radians();
        let asc = ascendant_rad(lst, lat, EPS).to_degrees();
        let mc = midheaven_rad(lst, EPS).to_degrees();
        let cusps = placidus_cusps(asc, mc, lst, lat, EPS, &PlacidusConfig::default()).unwrap();
        assert_eq!(cusps[0], asc);
        assert_eq!(cusps[9], mc);
    }

    #[test]
    fn placidus_opposite_cusp_symmetry() {
        let cusps = placidus_for(2.1, 37.5665).unwrap();
        for i in 0..6 {
            let diff = arc_forward(cusps[i], cusps[i + 6]);
            assert!(
                (diff - 180.0).abs() < 1e-9,
                "cusp[{}] vs cusp[{}]: separation {diff}",
                i + 1,
                i + 7
            );
        }
    }

    #[test]
    fn placidus_cusps_in_forward_order() {
        // Successive cusps wind once around the circle.
        let cusps = placidus_for(0.7, 28.6).unwrap();
        let total: f64 = (0..12)
            .map(|i| arc_forward(cusps[i], cusps[(i + 1) % 12]))
            .sum();
        assert!((total - 360.0).abs() < 1e-6, "winding sum = {total}");
    }

    #[test]
    fn placidus_mid_latitudes_converge() {
        for &lat in &[-45.0, -20.0, 0.0, 20.0, 37.5665, 50.0] {
            for i in 0..8 {
                let lst = TAU * (i as f64) / 8.0;
                let result = placidus_for(lst, lat);
                assert!(result.is_ok(), "lat={lat}, lst={lst}: {result:?}");
            }
        }
    }

    #[test]
    fn placidus_rejected_past_66_5() {
        assert!(check_placidus_latitude(66.4).is_ok());
        assert!(matches!(
            check_placidus_latitude(70.0),
            Err(ChartError::Computation(_))
        ));
        assert!(check_placidus_latitude(-89.9).is_err());
    }

    #[test]
    fn zero_tolerance_forces_nonconvergence() {
        let config = PlacidusConfig {
            tolerance_rad: 0.0,
            max_iterations: 5,
        };
        let lat = 37.5665_f64.to_radians();
        let asc = ascendant_rad(1.0, lat, EPS).to_degrees();
        let mc = midheaven_rad(1.0, EPS).to_degrees();
        let result = placidus_cusps(asc, mc, 1.0, lat, EPS, &config);
        assert!(matches!(result, Err(ChartError::Computation(_))));
    }

    #[test]
    fn equal_defined_at_extreme_latitude() {
        // Equal houses stay valid where Placidus is rejected.
        let lat = 89.9_f64.to_radians();
        let asc = ascendant_rad(1.0, lat, EPS).to_degrees();
        let cusps = equal_cusps(asc);
        for &c in &cusps {
            assert!((0.0..360.0).contains(&c));
        }
    }

    #[test]
    fn semi_arc_equator_equinox() {
        let sa = semi_arc_rad(0.0, 0.0, true);
        assert!((sa - PI / 2.0).abs() < 1e-10, "semi-arc = {sa}");
    }

    #[test]
    fn semi_arc_nocturnal_complement() {
        let dec = 10.0_f64.to_radians();
        let lat = 40.0_f64.to_radians();
        let diurnal = semi_arc_rad(dec, lat, true);
        let nocturnal = semi_arc_rad(dec, lat, false);
        assert!((diurnal + nocturnal - PI).abs() < 1e-10);
    }

    #[test]
    fn equator_to_ecliptic_fixed_points() {
        // RA 0 and 90° map to ecliptic 0 and 90° (equinox/solstice points).
        let lon0 = equator_to_ecliptic_longitude_rad(0.0, EPS);
        assert!(lon0.abs() < 1e-10, "lon at RA=0: {lon0}");
        let lon90 = equator_to_ecliptic_longitude_rad(PI / 2.0, EPS);
        assert!((lon90 - PI / 2.0).abs() < 1e-10, "lon at RA=90°: {lon90}");
    }
}
