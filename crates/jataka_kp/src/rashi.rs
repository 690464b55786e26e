//! Rashi (zodiac sign) lookup and DMS formatting.
//!
//! The ecliptic circle divides into 12 equal signs of 30° each, starting
//! from Mesha (Aries) at sidereal 0°.

use crate::longitude::SiderealDeg;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name, as used in the chart output.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Result of a rashi lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Degrees within the sign, [0, 30).
    pub degrees_in_rashi: f64,
}

/// Determine the rashi from a sidereal longitude.
///
/// A longitude exactly on a sign boundary belongs to the sign that starts
/// there (closed-open intervals).
pub fn rashi_from_longitude(lon: SiderealDeg) -> RashiInfo {
    let deg = lon.degrees();
    let idx = ((deg / 30.0).floor() as usize).min(11);
    RashiInfo {
        rashi: ALL_RASHIS[idx],
        degrees_in_rashi: deg - idx as f64 * 30.0,
    }
}

/// Degrees-arcminutes-arcseconds rendering of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: u8,
}

/// Break a degree value into rounded DMS with carry.
///
/// Rounding the seconds can carry into minutes and degrees, so 29.999999°
/// renders as 030°00'00" rather than 029°60'00".
pub fn deg_to_dms(deg: f64) -> Dms {
    let deg = deg.rem_euclid(360.0);
    let mut d = deg.floor() as u32;
    let mut m = ((deg - d as f64) * 60.0).floor() as u32;
    let mut s = (((deg - d as f64) * 60.0 - m as f64) * 60.0).round() as u32;
    if s == 60 {
        s = 0;
        m += 1;
    }
    if m == 60 {
        m = 0;
        d += 1;
    }
    Dms {
        degrees: (d % 360) as u16,
        minutes: m as u8,
        seconds: s as u8,
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:03}\u{00ba}{:02}'{:02}\"",
            self.degrees, self.minutes, self.seconds
        )
    }
}
