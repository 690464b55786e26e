//! Golden-value tests for the time chain against published almanac values.

use jataka_time::{
    CivilDateTime, J2000_JD, calendar_to_jd, gmst_deg, jd_to_centuries, local_sidereal_hours,
    mean_obliquity_deg,
};

#[test]
fn julian_day_epochs() {
    // Standard epochs from the Astronomical Almanac.
    assert_eq!(calendar_to_jd(2000, 1, 1.5), 2_451_545.0);
    assert_eq!(calendar_to_jd(1899, 12, 31.5), 2_415_020.0); // J1900.0
    assert_eq!(calendar_to_jd(1990, 1, 1.0), 2_447_892.5);
}

#[test]
fn civil_chain_matches_direct_jd() {
    // 1990-01-01 12:00 KST = 03:00 UT
    let civil = CivilDateTime::new(1990, 1, 1, 12, 0, 0.0).unwrap();
    let jd = civil.to_jd_ut(9.0).unwrap();
    assert!((jd - 2_447_892.625).abs() < 1e-9, "jd = {jd}");
}

#[test]
fn gmst_published_value() {
    // Meeus example 12.a: 1987 April 10.0 UT, θ0 = 13h 10m 46.3668s
    // = 197.693195°.
    let jd = calendar_to_jd(1987, 4, 10.0);
    let gmst = gmst_deg(jd);
    assert!(
        (gmst - 197.693_195).abs() < 1e-4,
        "GMST = {gmst}°, expected 197.693195°"
    );
}

#[test]
fn lst_for_seoul() {
    let jd = CivilDateTime::new(1990, 1, 1, 12, 0, 0.0)
        .unwrap()
        .to_jd_ut(9.0)
        .unwrap();
    let lst = local_sidereal_hours(gmst_deg(jd), 126.978);
    assert!((0.0..24.0).contains(&lst), "LST = {lst}h");
}

#[test]
fn obliquity_published_value() {
    // Meeus example 22.a: 1987 April 10.0, ε0 = 23°26'27.407" = 23.440946°.
    let jd = calendar_to_jd(1987, 4, 10.0);
    let eps = mean_obliquity_deg(jd);
    assert!(
        (eps - 23.440_946).abs() < 1e-5,
        "ε = {eps}°, expected 23.440946°"
    );
}

#[test]
fn centuries_sign_convention() {
    assert!(jd_to_centuries(J2000_JD - 36_525.0) < 0.0);
    assert!(jd_to_centuries(J2000_JD + 36_525.0) > 0.0);
}
