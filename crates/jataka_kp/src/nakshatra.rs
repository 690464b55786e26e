//! Nakshatra (lunar mansion) lookup.
//!
//! The ecliptic circle divides into 27 equal nakshatras of 13°20'
//! (13.3333... deg) each, with 4 padas (quarters) of 3°20'. Each nakshatra
//! is ruled by a vimshottari lord following the cyclic 9-lord sequence
//! repeated three times across the 27 mansions.

use crate::graha::{Graha, VIMSHOTTARI_LORDS};
use crate::longitude::SiderealDeg;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// Span of one pada: 3.3333... degrees.
pub const PADA_SPAN_DEG: f64 = NAKSHATRA_SPAN_DEG / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ruling vimshottari lord (star lord) of this nakshatra.
    pub fn lord(self) -> Graha {
        VIMSHOTTARI_LORDS[self.index() as usize % 9]
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Degrees within the nakshatra, [0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Determine the nakshatra and pada from a sidereal longitude.
///
/// A longitude exactly on a boundary belongs to the segment that starts
/// there (closed-open intervals).
pub fn nakshatra_from_longitude(lon: SiderealDeg) -> NakshatraInfo {
    let deg = lon.degrees();
    let idx = ((deg / NAKSHATRA_SPAN_DEG).floor() as usize).min(26);
    let degrees_in = deg - idx as f64 * NAKSHATRA_SPAN_DEG;
    let pada_idx = ((degrees_in / PADA_SPAN_DEG).floor() as u8).min(3);

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[idx],
        nakshatra_index: idx as u8,
        pada: pada_idx + 1,
        degrees_in_nakshatra: degrees_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_nakshatras_count() {
        assert_eq!(ALL_NAKSHATRAS.len(), 27);
    }

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn nakshatra_at_zero() {
        let info = nakshatra_from_longitude(SiderealDeg::new(0.0));
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
        assert_eq!(info.degrees_in_nakshatra, 0.0);
    }

    #[test]
    fn all_27_boundaries_closed_open() {
        for i in 0..27u8 {
            let lon = SiderealDeg::new(i as f64 * NAKSHATRA_SPAN_DEG);
            let info = nakshatra_from_longitude(lon);
            assert_eq!(info.nakshatra_index, i, "boundary of nakshatra {i}");
            assert_eq!(info.pada, 1, "pada at boundary of nakshatra {i}");
        }
    }

    #[test]
    fn just_below_boundary_stays_in_previous() {
        let lon = SiderealDeg::new(2.0 * NAKSHATRA_SPAN_DEG - 1e-9);
        let info = nakshatra_from_longitude(lon);
        assert_eq!(info.nakshatra, Nakshatra::Bharani);
    }

    #[test]
    fn last_nakshatra_near_360() {
        let info = nakshatra_from_longitude(SiderealDeg::new(360.0 - 1e-9));
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.nakshatra_index, 26);
    }

    #[test]
    fn padas_progress() {
        let base = 3.0 * NAKSHATRA_SPAN_DEG; // Rohini start
        for p in 0..4u8 {
            let lon = SiderealDeg::new(base + p as f64 * PADA_SPAN_DEG + 0.1);
            let info = nakshatra_from_longitude(lon);
            assert_eq!(info.pada, p + 1, "pada at offset {p}");
        }
    }

    #[test]
    fn lord_cycle_repeats_three_times() {
        use crate::graha::Graha;
        assert_eq!(Nakshatra::Ashwini.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Magha.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Mula.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Krittika.lord(), Graha::Surya);
        assert_eq!(Nakshatra::Rohini.lord(), Graha::Chandra);
        assert_eq!(Nakshatra::Revati.lord(), Graha::Buddh);
    }
}
