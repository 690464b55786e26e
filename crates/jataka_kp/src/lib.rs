//! Krishnamurti Paddhati (KP) sidereal chart computation.
//!
//! This crate turns a validated birth moment into a complete KP chart:
//! - Ayanamsha (Lahiri / KP-New) as a smooth function of time
//! - Ascendant, Midheaven, and 12 house cusps (Placidus or Equal)
//! - 9 planet positions with sign, nakshatra, and the KP star/sub/sub-sub
//!   lord chain
//!
//! All computation is pure and stateless per request; the only shared data
//! is the read-only lordship table, safe for unlimited concurrent readers.

pub mod ayanamsha;
pub mod bhava;
pub mod chart;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod longitude;
pub mod nakshatra;
pub mod rashi;
pub mod sublord;

pub use ayanamsha::{Ayanamsha, ayanamsha_deg};
pub use bhava::{PlacidusConfig, equal_cusps, placidus_cusps};
pub use chart::{
    BirthInput, ChartResult, HouseCusp, HouseSystem, PlanetPosition, compute_chart,
    compute_chart_with,
};
pub use error::ChartError;
pub use graha::{CHART_GRAHAS, Graha, rashi_lord};
pub use lagna::{ascendant_mc_deg, ascendant_rad, midheaven_rad};
pub use longitude::{SiderealDeg, TropicalDeg, arc_forward, normalize_360};
pub use nakshatra::{NAKSHATRA_SPAN_DEG, Nakshatra, nakshatra_from_longitude};
pub use rashi::{Dms, Rashi, deg_to_dms, rashi_from_longitude};
pub use sublord::{LordChain, LordshipTable, lordship};
