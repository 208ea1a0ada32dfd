//! Range and scenario checks for houses, vargas and ashtakavarga.

use kundali_vedic_base::{
    Amsha, BAV_TOTALS, ContributorPositions, DEFAULT_DIVISIONS, MAX_BINDUS, SAPTA_GRAHAS,
    SAV_TOTAL, VargaScheme, ashtakavarga, house_of, rashi_from_longitude, varga_from_longitude,
    varga_sign,
};
use rstest::rstest;

#[rstest]
#[case(100.0, 10.0, 4)]
#[case(10.0, 10.0, 1)]
#[case(9.999, 10.0, 12)]
#[case(190.0, 10.0, 7)]
#[case(0.0, 359.5, 1)]
fn house_scenarios(#[case] lon: f64, #[case] asc: f64, #[case] expected: u8) {
    assert_eq!(house_of(lon, asc), expected);
}

#[test]
fn house_always_in_range() {
    for a in 0..72 {
        for l in 0..144 {
            let h = house_of(l as f64 * 2.5 + 0.01, a as f64 * 5.0);
            assert!((1..=12).contains(&h));
        }
    }
}

#[test]
fn sign_and_degree_rebuild_longitude() {
    for i in 0..3600 {
        let lon = i as f64 * 0.1;
        let info = rashi_from_longitude(lon);
        assert_eq!(info.sign, (lon / 30.0).floor() as u8 + 1);
        let rebuilt = (info.sign as f64 - 1.0) * 30.0 + info.degrees_in_rashi;
        assert!((rebuilt - lon).abs() < 1e-9, "{lon} → {rebuilt}");
    }
}

#[test]
fn navamsha_scenario() {
    // 30/9 = 3.333°, ⌊15/3.333⌋ = 4, ((9·0 + 4) mod 12) + 1 = 5
    assert_eq!(varga_sign(1, 15.0, 9).unwrap(), (5, 5));
}

#[test]
fn varga_ranges_hold_for_all_factors() {
    for n in DEFAULT_DIVISIONS {
        for sign in 1..=12u8 {
            for step in 0..120 {
                let degree = step as f64 * 0.25;
                let (derived, part) = varga_sign(sign, degree, n).unwrap();
                assert!((1..=12).contains(&derived));
                assert!((1..=n).contains(&(part as u16)), "D{n} sign {sign} deg {degree}");
            }
        }
    }
}

#[rstest]
#[case(Amsha::D2)]
#[case(Amsha::D7)]
#[case(Amsha::D16)]
#[case(Amsha::D20)]
#[case(Amsha::D24)]
#[case(Amsha::D30)]
fn parashari_ranges_hold(#[case] amsha: Amsha) {
    for i in 0..1440 {
        let p = varga_from_longitude(i as f64 * 0.25, amsha, VargaScheme::Parashari);
        assert!((1..=12).contains(&p.sign));
        assert!((1..=amsha.divisions()).contains(&(p.part as u16)));
        assert!((0.0..30.0).contains(&p.degrees_in_sign));
    }
}

#[rstest]
#[case([1, 1, 1, 1, 1, 1, 1], 1)]
#[case([4, 8, 1, 12, 6, 10, 3], 1)]
#[case([12, 11, 10, 9, 8, 7, 6], 5)]
#[case([2, 2, 7, 7, 9, 3, 3], 11)]
fn ashtakavarga_bounds_and_totals(#[case] grahas: [u8; 7], #[case] lagna: u8) {
    let table = ashtakavarga(&ContributorPositions::new(grahas, lagna).unwrap()).unwrap();
    for (row, (&expected, graha)) in table.bhinna.iter().zip(BAV_TOTALS.iter().zip(SAPTA_GRAHAS)) {
        assert_eq!(row.graha, graha);
        assert!(row.bindus.iter().all(|&b| b <= MAX_BINDUS));
        assert_eq!(row.total(), expected as u16);
    }
    for house in 0..12 {
        let sum: u16 = table.bhinna.iter().map(|r| r.bindus[house] as u16).sum();
        assert_eq!(sum, table.sarva[house] as u16);
    }
    assert_eq!(table.sarva_total(), SAV_TOTAL);
}
