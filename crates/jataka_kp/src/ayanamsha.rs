//! Ayanamsha computation for the two KP-relevant sidereal systems.
//!
//! The ayanamsha is the angular offset between the tropical zodiac
//! (equinox-anchored) and the sidereal zodiac (star-anchored). Each system
//! is defined by its J2000.0 reference value; the value at any other epoch
//! adds the IAU 2006 general precession in ecliptic longitude, so both
//! systems are smooth functions of time with no tabular discontinuities.

use std::str::FromStr;

use serde::Serialize;

use crate::error::ChartError;

/// Sidereal reference systems supported by the chart engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ayanamsha {
    /// Lahiri (Chitrapaksha): Indian government standard
    /// (Calendar Reform Committee, 1957). Spica at 0° Libra sidereal.
    Lahiri,
    /// Krishnamurti Paddhati refinement: small fixed offset from Lahiri.
    KpNew,
}

impl Ayanamsha {
    /// Reference ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.853,
            Self::KpNew => 23.850,
        }
    }

    /// Selector name as it appears at the external interface.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "LAHIRI",
            Self::KpNew => "KP_NEW",
        }
    }
}

impl FromStr for Ayanamsha {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LAHIRI" => Ok(Self::Lahiri),
            "KP_NEW" | "KP-NEW" | "KPNEW" => Ok(Self::KpNew),
            other => Err(ChartError::InvalidInput(format!(
                "unknown ayanamsha selector: {other}"
            ))),
        }
    }
}

/// IAU 2006 general precession in ecliptic longitude, in arcseconds.
///
/// `t` = Julian centuries since J2000.0. The dominant linear term is
/// ~5028.80″/century ≈ 1.397°/century.
///
/// Source: Capitaine, Wallace & Chapront 2003, Table 1.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// Ayanamsha in degrees at a given epoch.
///
/// `ayanamsha(T) = reference_j2000 + p_A(T) / 3600`
pub fn ayanamsha_deg(system: Ayanamsha, t_centuries: f64) -> f64 {
    system.reference_j2000_deg() + general_precession_longitude_arcsec(t_centuries) / 3600.0
}
