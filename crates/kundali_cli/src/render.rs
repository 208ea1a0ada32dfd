//! Plain-text rendering of command results.

use std::fmt::Write;

use kundali_chart::{Chart, ChartBody};
use kundali_time::jd_to_calendar;
use kundali_vedic_base::dasha::DashaPeriod;

/// `YYYY-MM-DD HH:MM` for a Julian Day, rounded to the nearest minute.
pub fn format_jd(jd: f64) -> String {
    // Whole minutes since the civil midnight before JD 0.
    let total = ((jd + 0.5) * 1440.0).round();
    let midnight = (total / 1440.0).floor();
    let minutes = (total - midnight * 1440.0) as u32;
    let (year, month, day_frac) = jd_to_calendar(midnight - 0.5);
    format!(
        "{year:04}-{month:02}-{:02} {:02}:{:02}",
        day_frac.floor() as u32,
        minutes / 60,
        minutes % 60
    )
}

pub fn period_line(p: &DashaPeriod) -> String {
    format!(
        "{:<18} {:<8} {} → {}  ({:.3} y)",
        p.level.name(),
        p.lord.english_name(),
        format_jd(p.start_jd),
        format_jd(p.end_jd),
        p.duration_years
    )
}

pub fn chart_text(chart: &Chart) -> String {
    let mut out = String::new();
    let label = chart.input.name.as_deref().unwrap_or("Birth chart");
    let _ = writeln!(out, "{label}  {}  {}", chart.input.datetime, chart.julian_day);
    if let Some(place) = chart.input.place.as_deref() {
        let _ = writeln!(out, "Place: {place}");
    }
    let _ = writeln!(
        out,
        "Location: {:.4}, {:.4}   Ayanamsa: {:.4}°",
        chart.input.latitude, chart.input.longitude, chart.ayanamsa_deg
    );
    if chart.provenance.degraded() {
        let _ = writeln!(out, "Note: computed with the fallback mean-motion model");
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:<10} {:>9} {:<11} {:>13} {:>5} {:<20} {:>4}",
        "Body", "Longitude", "Rashi", "In sign", "House", "Nakshatra", "Pada"
    );
    let ordered = std::iter::once(ChartBody::Ascendant)
        .chain(chart.positions.keys().copied().filter(|b| *b != ChartBody::Ascendant));
    for body in ordered {
        let Some(p) = chart.position(body) else {
            continue;
        };
        let _ = writeln!(
            out,
            "{:<10} {:>9.4} {:<11} {:>13} {:>5} {:<20} {:>4}{}",
            body.to_string(),
            p.longitude,
            p.rashi.name(),
            p.dms.to_string(),
            p.house,
            p.nakshatra.name(),
            p.pada,
            if p.retrograde { "  R" } else { "" }
        );
    }

    if !chart.vargas.is_empty() {
        let _ = writeln!(out, "\nVargas (ascendant sign / Moon sign)");
        for (n, v) in &chart.vargas {
            let moon = v
                .grahas
                .get(&kundali_vedic_base::Graha::Chandra)
                .map_or_else(String::new, |p| p.rashi().name().to_string());
            let _ = writeln!(out, "  D{n:<3} {:<14} {:<11} {moon}", v.name, v.lagna.rashi().name());
        }
    }

    let balance = &chart.dasha.balance;
    let _ = writeln!(
        out,
        "\nDasha balance: {} ({}), {:.3} of {} years remaining",
        balance.lord.english_name(),
        balance.nakshatra.name(),
        balance.remaining_years,
        balance.full_years
    );
    for p in &chart.dasha.active {
        let _ = writeln!(out, "  {}", period_line(p));
    }

    let sav = &chart.ashtakavarga.by_house.sarva;
    let _ = writeln!(
        out,
        "\nSarvashtakavarga by house: {}",
        sav.iter().map(u8::to_string).collect::<Vec<_>>().join(" ")
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_j2000_noon() {
        assert_eq!(format_jd(2_451_545.0), "2000-01-01 12:00");
    }

    #[test]
    fn formats_midnight() {
        assert_eq!(format_jd(2_451_544.5), "2000-01-01 00:00");
    }

    #[test]
    fn rounds_into_the_next_day() {
        // 2000-01-01 23:59:50
        let jd = 2_451_544.5 + (86_400.0 - 10.0) / 86_400.0;
        assert_eq!(format_jd(jd), "2000-01-02 00:00");
        // 1999-12-31 23:59:40 crosses the year
        let jd = 2_451_544.5 - 20.0 / 86_400.0;
        assert_eq!(format_jd(jd), "2000-01-01 00:00");
    }

    #[test]
    fn keeps_the_last_minute_of_the_day() {
        // 2000-01-01 23:59:20
        let jd = 2_451_544.5 + (86_400.0 - 40.0) / 86_400.0;
        assert_eq!(format_jd(jd), "2000-01-01 23:59");
    }
}
