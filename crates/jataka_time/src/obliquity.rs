//! Mean obliquity of the ecliptic.
//!
//! IAU 1980 polynomial in Julian centuries since J2000.0, arcsecond
//! coefficients. Pure function, no branching.
//!
//! Source: IAU 1980 theory of nutation; Meeus Eq. 22.2.

use crate::julian::jd_to_centuries;

/// Mean obliquity of the ecliptic at a given Julian Date, in degrees.
///
/// ε = 84381.448″ − 46.8150″·T − 0.00059″·T² + 0.001813″·T³
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let arcsec = 84_381.448 - 46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn obliquity_at_j2000() {
        let eps = mean_obliquity_deg(J2000_JD);
        assert!(
            (eps - 23.439_291_1).abs() < 1e-6,
            "ε at J2000 = {eps}°, expected 23.4392911°"
        );
    }

    #[test]
    fn obliquity_physical_bound() {
        // Between 1800 and 2200 the mean obliquity stays well inside [22, 24].
        for year in (1800..=2200).step_by(25) {
            let jd = J2000_JD + (year - 2000) as f64 * 365.25;
            let eps = mean_obliquity_deg(jd);
            assert!(
                (22.0..=24.0).contains(&eps),
                "ε({year}) = {eps}° outside [22, 24]"
            );
        }
    }

    #[test]
    fn obliquity_decreasing_modern_era() {
        let e1900 = mean_obliquity_deg(2_415_020.5);
        let e2000 = mean_obliquity_deg(J2000_JD);
        let e2100 = mean_obliquity_deg(2_488_070.5);
        assert!(e1900 > e2000 && e2000 > e2100, "{e1900} > {e2000} > {e2100}");
    }

    #[test]
    fn obliquity_deterministic() {
        let jd = 2_447_893.0;
        assert_eq!(mean_obliquity_deg(jd), mean_obliquity_deg(jd));
    }
}
