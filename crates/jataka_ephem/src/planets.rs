//! Geocentric planet positions from mean Keplerian elements.
//!
//! J2000 osculating mean elements with linear century rates, Kepler's
//! equation solved by Newton iteration, heliocentric vectors differenced
//! against the Earth-Moon barycenter. Arc-minute class over 1800–2050.
//!
//! Source: Standish & Williams, "Approximate Positions of the Planets"
//! (JPL), Table 1. Public domain.

use crate::EphemError;

/// Planets evaluated from mean elements (the Sun and Moon have their own
/// series, the nodes are computed points).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// Mean Keplerian elements at J2000 and their per-century rates.
///
/// Units: au for `a`, degrees for the four angles; rates per Julian century.
struct Elements {
    a: f64,
    a_dot: f64,
    e: f64,
    e_dot: f64,
    incl: f64,
    incl_dot: f64,
    mean_lon: f64,
    mean_lon_dot: f64,
    peri_lon: f64,
    peri_lon_dot: f64,
    node_lon: f64,
    node_lon_dot: f64,
}

const MERCURY: Elements = Elements {
    a: 0.387_099_27,
    a_dot: 0.000_000_37,
    e: 0.205_635_93,
    e_dot: 0.000_019_06,
    incl: 7.004_979_02,
    incl_dot: -0.005_947_49,
    mean_lon: 252.250_323_50,
    mean_lon_dot: 149_472.674_111_75,
    peri_lon: 77.457_796_28,
    peri_lon_dot: 0.160_476_89,
    node_lon: 48.330_765_93,
    node_lon_dot: -0.125_340_81,
};

const VENUS: Elements = Elements {
    a: 0.723_335_66,
    a_dot: 0.000_003_90,
    e: 0.006_776_72,
    e_dot: -0.000_041_07,
    incl: 3.394_676_05,
    incl_dot: -0.000_788_90,
    mean_lon: 181.979_099_50,
    mean_lon_dot: 58_517.815_387_29,
    peri_lon: 131.602_467_18,
    peri_lon_dot: 0.002_683_29,
    node_lon: 76.679_842_55,
    node_lon_dot: -0.277_694_18,
};

/// Earth-Moon barycenter, used as the geocentric origin.
const EARTH: Elements = Elements {
    a: 1.000_002_61,
    a_dot: 0.000_005_62,
    e: 0.016_711_23,
    e_dot: -0.000_043_92,
    incl: -0.000_015_31,
    incl_dot: -0.012_946_68,
    mean_lon: 100.464_571_66,
    mean_lon_dot: 35_999.372_449_81,
    peri_lon: 102.937_681_93,
    peri_lon_dot: 0.323_273_64,
    node_lon: 0.0,
    node_lon_dot: 0.0,
};

const MARS: Elements = Elements {
    a: 1.523_710_34,
    a_dot: 0.000_018_47,
    e: 0.093_394_10,
    e_dot: 0.000_078_82,
    incl: 1.849_691_42,
    incl_dot: -0.008_131_31,
    mean_lon: -4.553_432_05,
    mean_lon_dot: 19_140.302_684_99,
    peri_lon: -23.943_629_59,
    peri_lon_dot: 0.444_410_88,
    node_lon: 49.559_538_91,
    node_lon_dot: -0.292_573_43,
};

const JUPITER: Elements = Elements {
    a: 5.202_887_00,
    a_dot: -0.000_116_07,
    e: 0.048_386_24,
    e_dot: -0.000_132_53,
    incl: 1.304_396_95,
    incl_dot: -0.001_837_14,
    mean_lon: 34.396_440_51,
    mean_lon_dot: 3_034.746_127_75,
    peri_lon: 14.728_479_83,
    peri_lon_dot: 0.212_526_68,
    node_lon: 100.473_909_09,
    node_lon_dot: 0.204_691_06,
};

const SATURN: Elements = Elements {
    a: 9.536_675_94,
    a_dot: -0.001_250_60,
    e: 0.053_861_79,
    e_dot: -0.000_509_91,
    incl: 2.485_991_87,
    incl_dot: 0.001_936_09,
    mean_lon: 49.954_244_23,
    mean_lon_dot: 1_222.493_622_01,
    peri_lon: 92.598_878_31,
    peri_lon_dot: -0.418_972_16,
    node_lon: 113.662_424_48,
    node_lon_dot: -0.288_677_94,
};

impl Planet {
    const fn elements(self) -> &'static Elements {
        match self {
            Self::Mercury => &MERCURY,
            Self::Venus => &VENUS,
            Self::Mars => &MARS,
            Self::Jupiter => &JUPITER,
            Self::Saturn => &SATURN,
        }
    }
}

/// Solve Kepler's equation E − e·sin E = M by Newton iteration.
///
/// `m` in radians; returns the eccentric anomaly in radians.
fn kepler_solve(m: f64, e: f64) -> Result<f64, EphemError> {
    let m = m.rem_euclid(std::f64::consts::TAU);
    let mut big_e = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..30 {
        let delta = (big_e - e * big_e.sin() - m) / (1.0 - e * big_e.cos());
        big_e -= delta;
        if delta.abs() < 1e-12 {
            return Ok(big_e);
        }
    }
    Err(EphemError::NoConvergence("kepler equation"))
}

/// Heliocentric ecliptic position of a body from its mean elements, in au.
fn heliocentric(el: &Elements, t: f64) -> Result<[f64; 3], EphemError> {
    let a = el.a + el.a_dot * t;
    let e = el.e + el.e_dot * t;
    let incl = (el.incl + el.incl_dot * t).to_radians();
    let mean_lon = el.mean_lon + el.mean_lon_dot * t;
    let peri_lon = el.peri_lon + el.peri_lon_dot * t;
    let node_lon = (el.node_lon + el.node_lon_dot * t).to_radians();

    let m = (mean_lon - peri_lon).to_radians();
    let omega = peri_lon.to_radians() - node_lon; // argument of perihelion

    let big_e = kepler_solve(m, e)?;
    let nu = 2.0 * f64::atan2(
        (1.0 + e).sqrt() * (big_e / 2.0).sin(),
        (1.0 - e).sqrt() * (big_e / 2.0).cos(),
    );
    let r = a * (1.0 - e * big_e.cos());

    let u = omega + nu; // argument of latitude
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_node, cos_node) = node_lon.sin_cos();
    let cos_i = incl.cos();

    Ok([
        r * (cos_node * cos_u - sin_node * sin_u * cos_i),
        r * (sin_node * cos_u + cos_node * sin_u * cos_i),
        r * sin_u * incl.sin(),
    ])
}

/// Geocentric tropical ecliptic longitude and latitude of a planet,
/// in degrees. `t` = Julian centuries since J2000.0.
pub fn geocentric_ecliptic(planet: Planet, t: f64) -> Result<(f64, f64), EphemError> {
    let p = heliocentric(planet.elements(), t)?;
    let earth = heliocentric(&EARTH, t)?;
    let x = p[0] - earth[0];
    let y = p[1] - earth[1];
    let z = p[2] - earth[2];

    let lon = f64::atan2(y, x).to_degrees().rem_euclid(360.0);
    let lat = f64::atan2(z, x.hypot(y)).to_degrees();
    Ok((lon, lat))
}
