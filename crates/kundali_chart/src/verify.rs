//! Structural checks on an assembled chart.
//!
//! A failure here is a defect in the computation, never bad input.

use kundali_vedic_base::SAV_TOTAL;

use crate::error::ChartError;
use crate::types::{Chart, PlanetaryPosition};

const CONSISTENCY_EPS: f64 = 1e-9;

fn fail(msg: String) -> Result<(), ChartError> {
    Err(ChartError::Invariant(msg))
}

fn verify_position(p: &PlanetaryPosition) -> Result<(), ChartError> {
    let lon = p.longitude;
    if !(0.0..360.0).contains(&lon) {
        return fail(format!("{}: longitude {lon} outside [0, 360)", p.body));
    }
    let sign = (lon / 30.0).floor() as u8 + 1;
    if p.sign != sign || p.rashi.number() != sign {
        return fail(format!("{}: sign {} for longitude {lon}", p.body, p.sign));
    }
    if (p.degree_in_sign - lon % 30.0).abs() > CONSISTENCY_EPS {
        return fail(format!("{}: degree {} for longitude {lon}", p.body, p.degree_in_sign));
    }
    if !(1..=12).contains(&p.house) {
        return fail(format!("{}: house {}", p.body, p.house));
    }
    if !(1..=27).contains(&p.nakshatra_number) || !(1..=4).contains(&p.pada) {
        return fail(format!(
            "{}: nakshatra {} pada {}",
            p.body, p.nakshatra_number, p.pada
        ));
    }
    Ok(())
}

/// Check every cross-component guarantee of a chart.
pub fn verify_chart(chart: &Chart) -> Result<(), ChartError> {
    if chart.positions.len() != 10 {
        return fail(format!("{} positions, expected 10", chart.positions.len()));
    }
    for p in chart.positions.values() {
        verify_position(p)?;
    }
    if chart.ascendant().map(|a| a.house) != Some(1) {
        return fail("ascendant is not in house 1".to_string());
    }

    for (&n, varga) in &chart.vargas {
        if varga.amsha.divisions() != n {
            return fail(format!("varga keyed D{n} holds {}", varga.amsha));
        }
        let placements = varga.grahas.values().chain(std::iter::once(&varga.lagna));
        for p in placements {
            if !(1..=12).contains(&p.sign) || p.part == 0 || u16::from(p.part) > n {
                return fail(format!("D{n}: sign {} part {}", p.sign, p.part));
            }
        }
    }

    let av = &chart.ashtakavarga;
    for table in [&av.by_house, &av.by_sign] {
        table.verify()?;
        if table.sarva_total() != SAV_TOTAL {
            return fail(format!("sarva total {}", table.sarva_total()));
        }
    }

    let nested_sum: f64 = chart
        .dasha
        .timeline
        .iter()
        .map(|n| n.period.duration_years)
        .sum();
    let expected = chart.dasha.balance.remaining_years
        + 120.0 * f64::from(chart.dasha.options.cycles)
        - chart.dasha.balance.full_years;
    if (nested_sum - expected).abs() > 1e-6 {
        return fail(format!("mahadasha span {nested_sum} years, expected {expected}"));
    }
    Ok(())
}
