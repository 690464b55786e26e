//! KP sub-lord and sub-sub-lord resolution.
//!
//! Each 13°20' nakshatra divides into 9 unequal subs whose widths are
//! proportional to the vimshottari period lengths (7/120, 20/120, ...),
//! starting from the nakshatra's own star lord and cycling through the
//! lord sequence. Each sub divides again the same way for the sub-sub
//! level.
//!
//! The full partition is 27 × 9 × 9 = 2187 segments, built once at first
//! use and shared read-only by all chart computations. Lookup is a binary
//! search over the sorted segment starts. Intervals are closed-open at
//! every level: a longitude exactly on a boundary belongs to the segment
//! that starts there.

use std::sync::LazyLock;

use crate::graha::{Graha, VIMSHOTTARI_LORDS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS};
use crate::longitude::SiderealDeg;
use crate::nakshatra::NAKSHATRA_SPAN_DEG;

/// The three-level lordship of one zodiacal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LordChain {
    pub star_lord: Graha,
    pub sub_lord: Graha,
    pub sub_sub_lord: Graha,
}

/// One segment of the 2187-entry partition.
#[derive(Debug, Clone, Copy)]
struct Segment {
    start_deg: f64,
    chain: LordChain,
}

/// The full 360°-spanning KP lordship partition.
#[derive(Debug)]
pub struct LordshipTable {
    segments: Vec<Segment>,
}

/// Process-wide table instance.
static TABLE: LazyLock<LordshipTable> = LazyLock::new(LordshipTable::build);

impl LordshipTable {
    /// Shared read-only table, built on first use.
    pub fn global() -> &'static Self {
        &TABLE
    }

    /// Construct the partition from the vimshottari proportions.
    fn build() -> Self {
        let mut segments = Vec::with_capacity(27 * 9 * 9);
        for nak in 0..27usize {
            let nak_start = nak as f64 * NAKSHATRA_SPAN_DEG;
            let star_idx = nak % 9;

            let mut sub_years = 0.0;
            for s in 0..9usize {
                let sub_idx = (star_idx + s) % 9;
                let sub_start =
                    nak_start + NAKSHATRA_SPAN_DEG * (sub_years / VIMSHOTTARI_TOTAL_YEARS);
                let sub_span =
                    NAKSHATRA_SPAN_DEG * (VIMSHOTTARI_YEARS[sub_idx] / VIMSHOTTARI_TOTAL_YEARS);

                let mut ss_years = 0.0;
                for ss in 0..9usize {
                    let ss_idx = (sub_idx + ss) % 9;
                    let ss_start = sub_start + sub_span * (ss_years / VIMSHOTTARI_TOTAL_YEARS);
                    segments.push(Segment {
                        start_deg: ss_start,
                        chain: LordChain {
                            star_lord: VIMSHOTTARI_LORDS[star_idx],
                            sub_lord: VIMSHOTTARI_LORDS[sub_idx],
                            sub_sub_lord: VIMSHOTTARI_LORDS[ss_idx],
                        },
                    });
                    ss_years += VIMSHOTTARI_YEARS[ss_idx];
                }
                sub_years += VIMSHOTTARI_YEARS[sub_idx];
            }
        }
        Self { segments }
    }

    /// Resolve the lord chain for a sidereal longitude in O(log n).
    pub fn resolve(&self, lon: SiderealDeg) -> LordChain {
        let deg = lon.degrees();
        // First segment starts at 0.0 and deg >= 0, so idx >= 1.
        let idx = self.segments.partition_point(|s| s.start_deg <= deg);
        self.segments[idx - 1].chain
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.segments.len()
    }

    #[cfg(test)]
    fn starts(&self) -> impl Iterator<Item = f64> + '_ {
        self.segments.iter().map(|s| s.start_deg)
    }
}

/// Convenience lookup against the shared table.
pub fn lordship(lon: SiderealDeg) -> LordChain {
    LordshipTable::global().resolve(lon)
}
