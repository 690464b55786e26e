//! Lordship boundary tests through the public API.
//!
//! The closed-open rule is the single most error-prone policy in the
//! engine, so every level gets an explicit boundary check here.

use jataka_kp::{
    Graha, NAKSHATRA_SPAN_DEG, SiderealDeg, lordship, nakshatra_from_longitude,
    rashi_from_longitude,
};

#[test]
fn zero_degrees_starts_ashwini() {
    let lon = SiderealDeg::new(0.0);
    let nak = nakshatra_from_longitude(lon);
    assert_eq!(nak.nakshatra_index, 0);
    let chain = lordship(lon);
    assert_eq!(chain.star_lord, Graha::Ketu);
    assert_eq!(chain.sub_lord, Graha::Ketu);
    assert_eq!(chain.sub_sub_lord, Graha::Ketu);
}

#[test]
fn thirteen_twenty_starts_bharani() {
    // 13°20' exactly: the boundary belongs to the segment starting there.
    let lon = SiderealDeg::new(NAKSHATRA_SPAN_DEG);
    let nak = nakshatra_from_longitude(lon);
    assert_eq!(nak.nakshatra_index, 1);
    assert_eq!(nak.degrees_in_nakshatra, 0.0);
    assert_eq!(lordship(lon).star_lord, Graha::Shukra);
}

#[test]
fn twenty_six_forty_starts_krittika() {
    let lon = SiderealDeg::new(2.0 * NAKSHATRA_SPAN_DEG);
    let nak = nakshatra_from_longitude(lon);
    assert_eq!(nak.nakshatra_index, 2);
    assert_eq!(lordship(lon).star_lord, Graha::Surya);
}

#[test]
fn just_below_360_stays_in_revati() {
    let lon = SiderealDeg::new(360.0 - 1e-9);
    let nak = nakshatra_from_longitude(lon);
    assert_eq!(nak.nakshatra_index, 26);
    assert_eq!(lordship(lon).star_lord, Graha::Buddh);
    // And the sign is Pisces, not Aries.
    assert_eq!(rashi_from_longitude(lon).rashi.index(), 11);
}

#[test]
fn full_circle_wraps_to_ashwini() {
    // 360° normalizes to 0° and resolves like 0°.
    let lon = SiderealDeg::new(360.0);
    assert_eq!(lon.degrees(), 0.0);
    assert_eq!(nakshatra_from_longitude(lon).nakshatra_index, 0);
    assert_eq!(lordship(lon).star_lord, Graha::Ketu);
}

#[test]
fn boundary_rule_consistent_across_levels() {
    // For every nakshatra start, all three lordship levels begin with the
    // same lord (the star lord's own sub and sub-sub come first).
    for i in 0..27 {
        let lon = SiderealDeg::new(i as f64 * NAKSHATRA_SPAN_DEG);
        let chain = lordship(lon);
        assert_eq!(chain.sub_lord, chain.star_lord, "nakshatra {i}");
        assert_eq!(chain.sub_sub_lord, chain.star_lord, "nakshatra {i}");
    }
}

#[test]
fn sign_boundaries_closed_open() {
    for i in 0..12u8 {
        let lon = SiderealDeg::new(i as f64 * 30.0);
        assert_eq!(rashi_from_longitude(lon).rashi.index(), i, "sign boundary {i}");
    }
}
