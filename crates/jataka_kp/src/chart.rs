//! Chart assembly: one birth moment in, one immutable KP chart out.
//!
//! Orchestrates time conversion, sidereal time, obliquity, ayanamsha,
//! house cusps, planetary positions, and lordship resolution in dependency
//! order. The first component failure aborts the whole computation; a
//! partially populated chart is never returned.

use serde::Serialize;
use tracing::debug;

use jataka_ephem::PositionProvider;
use jataka_time::{
    CivilDateTime, gmst_deg, jd_to_centuries, local_sidereal_deg, mean_obliquity_deg,
};

use crate::ayanamsha::{Ayanamsha, ayanamsha_deg};
use crate::bhava::{PlacidusConfig, check_placidus_latitude, equal_cusps, placidus_cusps};
use crate::error::ChartError;
use crate::graha::{CHART_GRAHAS, rashi_lord};
use crate::lagna::ascendant_mc_deg;
use crate::longitude::{SiderealDeg, TropicalDeg, arc_forward};
use crate::nakshatra::nakshatra_from_longitude;
use crate::rashi::rashi_from_longitude;
use crate::sublord::lordship;

/// House division methods supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HouseSystem {
    /// Semi-arc trisection (the KP standard).
    Placidus,
    /// 30° arcs from the Ascendant; defined at any latitude.
    Equal,
}

impl std::str::FromStr for HouseSystem {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "P" | "PLACIDUS" => Ok(Self::Placidus),
            "E" | "EQUAL" => Ok(Self::Equal),
            other => Err(ChartError::InvalidInput(format!(
                "unknown house system selector: {other}"
            ))),
        }
    }
}

/// Validated birth moment and chart options.
///
/// Immutable once constructed; the chart result echoes it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirthInput {
    pub date: CivilDateTime,
    #[serde(rename = "utc_offset")]
    pub utc_offset_hours: f64,
    #[serde(rename = "latitude")]
    pub latitude_deg: f64,
    #[serde(rename = "longitude")]
    pub longitude_deg: f64,
    #[serde(rename = "ayanamsa")]
    pub ayanamsha: Ayanamsha,
    pub house_system: HouseSystem,
}

impl BirthInput {
    /// Range-check the coordinates. Calendar components are validated by
    /// [`CivilDateTime::new`]; latitudes valid here may still be rejected
    /// later by a house system with a narrower domain.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(ChartError::InvalidInput(format!(
                "latitude {} outside [-90, 90]",
                self.latitude_deg
            )));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(ChartError::InvalidInput(format!(
                "longitude {} outside [-180, 180]",
                self.longitude_deg
            )));
        }
        Ok(())
    }
}

/// One house cusp with its full lordship breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseCusp {
    pub house: u8,
    /// Sidereal longitude in degrees.
    pub longitude: f64,
    pub sign: &'static str,
    pub sign_lord: &'static str,
    pub nakshatra: &'static str,
    pub star_lord: &'static str,
    pub sub_lord: &'static str,
    pub sub_sub_lord: &'static str,
}

/// One planet entry of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub name: &'static str,
    /// Sidereal longitude in degrees.
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    pub sign: &'static str,
    pub sign_lord: &'static str,
    pub nakshatra: &'static str,
    pub star_lord: &'static str,
    pub sub_lord: &'static str,
    pub sub_sub_lord: &'static str,
    /// Occupied house, 1-12.
    pub house: u8,
    pub retrograde: bool,
}

/// Complete KP chart. Constructed once, read-only thereafter, and
/// serializable verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub input: BirthInput,
    #[serde(rename = "ayanamsa_value")]
    pub ayanamsha_deg: f64,
    pub julian_day: f64,
    /// Local sidereal time in hours, [0, 24).
    pub lst: f64,
    /// Mean obliquity of the ecliptic in degrees.
    pub obliquity: f64,
    pub cusps: [HouseCusp; 12],
    pub planets: Vec<PlanetPosition>,
}

/// Lordship fields shared by cusps and planets.
struct Lordships {
    sign: &'static str,
    sign_lord: &'static str,
    nakshatra: &'static str,
    star_lord: &'static str,
    sub_lord: &'static str,
    sub_sub_lord: &'static str,
}

fn describe(lon: SiderealDeg) -> Lordships {
    let rashi = rashi_from_longitude(lon);
    let nak = nakshatra_from_longitude(lon);
    let chain = lordship(lon);
    Lordships {
        sign: rashi.rashi.western_name(),
        sign_lord: rashi_lord(rashi.rashi).english_name(),
        nakshatra: nak.nakshatra.name(),
        star_lord: chain.star_lord.english_name(),
        sub_lord: chain.sub_lord.english_name(),
        sub_sub_lord: chain.sub_sub_lord.english_name(),
    }
}

/// Find the house whose cusp-to-next-cusp span contains `lon`.
///
/// Spans are closed-open with wraparound: a planet exactly on a cusp
/// belongs to the house that cusp begins.
fn occupied_house(cusp_lons: &[f64; 12], lon_deg: f64) -> u8 {
    let mut house = 12;
    for i in 0..12 {
        let span = arc_forward(cusp_lons[i], cusp_lons[(i + 1) % 12]);
        if arc_forward(cusp_lons[i], lon_deg) < span {
            house = (i as u8) + 1;
            break;
        }
    }
    house
}

/// Compute a chart with the default Placidus configuration.
pub fn compute_chart(
    provider: &dyn PositionProvider,
    input: &BirthInput,
) -> Result<ChartResult, ChartError> {
    compute_chart_with(provider, input, &PlacidusConfig::default())
}

/// Compute a chart with explicit Placidus convergence knobs.
pub fn compute_chart_with(
    provider: &dyn PositionProvider,
    input: &BirthInput,
    placidus: &PlacidusConfig,
) -> Result<ChartResult, ChartError> {
    input.validate()?;

    let jd = input.date.to_jd_ut(input.utc_offset_hours)?;
    let t = jd_to_centuries(jd);
    let lst_deg = local_sidereal_deg(gmst_deg(jd), input.longitude_deg);
    let obliquity = mean_obliquity_deg(jd);
    let ayanamsha = ayanamsha_deg(input.ayanamsha, t);
    debug!(
        julian_day = jd,
        lst_deg, obliquity, ayanamsha, "derived chart moment"
    );

    let lst_rad = lst_deg.to_radians();
    let lat_rad = input.latitude_deg.to_radians();
    let eps_rad = obliquity.to_radians();
    let (asc_deg, mc_deg) = ascendant_mc_deg(lst_rad, lat_rad, eps_rad);

    let tropical_cusps = match input.house_system {
        HouseSystem::Equal => equal_cusps(asc_deg),
        HouseSystem::Placidus => {
            check_placidus_latitude(input.latitude_deg)?;
            placidus_cusps(asc_deg, mc_deg, lst_rad, lat_rad, eps_rad, placidus)?
        }
    };

    let mut cusp_lons = [0.0_f64; 12];
    for (lon, &tropical) in cusp_lons.iter_mut().zip(tropical_cusps.iter()) {
        *lon = TropicalDeg::new(tropical).to_sidereal(ayanamsha).degrees();
    }
    let cusps: [HouseCusp; 12] = std::array::from_fn(|i| {
        let sidereal = SiderealDeg::new(cusp_lons[i]);
        let lords = describe(sidereal);
        HouseCusp {
            house: (i as u8) + 1,
            longitude: sidereal.degrees(),
            sign: lords.sign,
            sign_lord: lords.sign_lord,
            nakshatra: lords.nakshatra,
            star_lord: lords.star_lord,
            sub_lord: lords.sub_lord,
            sub_sub_lord: lords.sub_sub_lord,
        }
    });

    let mut planets = Vec::with_capacity(CHART_GRAHAS.len());
    for graha in CHART_GRAHAS {
        let position = provider.position(graha.body(), jd)?;
        let sidereal = TropicalDeg::new(position.longitude_deg).to_sidereal(ayanamsha);
        let lords = describe(sidereal);
        let house = occupied_house(&cusp_lons, sidereal.degrees());
        debug!(
            graha = graha.english_name(),
            longitude = sidereal.degrees(),
            house,
            "placed planet"
        );
        planets.push(PlanetPosition {
            name: graha.english_name(),
            longitude: sidereal.degrees(),
            latitude: position.latitude_deg,
            sign: lords.sign,
            sign_lord: lords.sign_lord,
            nakshatra: lords.nakshatra,
            star_lord: lords.star_lord,
            sub_lord: lords.sub_lord,
            sub_sub_lord: lords.sub_sub_lord,
            house,
            retrograde: position.retrograde(),
        });
    }

    Ok(ChartResult {
        input: *input,
        ayanamsha_deg: ayanamsha,
        julian_day: jd,
        lst: lst_deg / 15.0,
        obliquity,
        cusps,
        planets,
    })
}
