//! Frame-tagged ecliptic longitudes and modular-angle helpers.
//!
//! Tropical and sidereal longitudes are distinct types so the ayanamsha
//! correction can only be applied in one direction, exactly once. All
//! values are kept normalized to [0, 360).

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Forward arc from `a` to `b` in degrees (always in [0, 360)).
pub fn arc_forward(a: f64, b: f64) -> f64 {
    (b - a).rem_euclid(360.0)
}

/// An ecliptic longitude measured from the tropical (equinox-anchored)
/// zodiac origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TropicalDeg(f64);

impl TropicalDeg {
    pub fn new(deg: f64) -> Self {
        Self(normalize_360(deg))
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Apply the ayanamsha correction, producing a sidereal longitude.
    pub fn to_sidereal(self, ayanamsha_deg: f64) -> SiderealDeg {
        SiderealDeg::new(self.0 - ayanamsha_deg)
    }
}

/// An ecliptic longitude measured from the sidereal (star-anchored)
/// zodiac origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealDeg(f64);

impl SiderealDeg {
    pub fn new(deg: f64) -> Self {
        Self(normalize_360(deg))
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Remove the ayanamsha correction, recovering the tropical longitude.
    pub fn to_tropical(self, ayanamsha_deg: f64) -> TropicalDeg {
        TropicalDeg::new(self.0 + ayanamsha_deg)
    }
}
