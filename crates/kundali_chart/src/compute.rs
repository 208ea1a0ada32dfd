//! Chart assembly: resolve, correct, place, then fan out.

use std::collections::BTreeMap;

use kundali_ephemeris::Resolver;
use kundali_vedic_base::dasha::{
    dasha_hierarchy, dasha_snapshot, nest_hierarchy, verify_hierarchy,
};
use kundali_vedic_base::{
    ALL_GRAHAS, ContributorPositions, Graha, SAPTA_GRAHAS, ashtakavarga, deg_to_dms, dignity_of,
    equal_houses, house_of, nakshatra_from_longitude, rashi_from_longitude, sodhana, to_sidereal,
    varga_chart,
};
use tracing::{debug, info};

use crate::error::ChartError;
use crate::input::BirthInput;
use crate::options::ChartOptions;
use crate::types::{
    AshtakavargaReport, Chart, ChartBody, ChartProvenance, DashaReport, PlanetaryPosition,
};
use crate::verify::verify_chart;

struct Placement {
    body: ChartBody,
    tropical: f64,
    speed: Option<f64>,
    retrograde: bool,
}

fn place(p: Placement, ayanamsa_deg: f64, ascendant_sid: f64) -> PlanetaryPosition {
    let longitude = to_sidereal(p.tropical, ayanamsa_deg);
    let rashi = rashi_from_longitude(longitude);
    let nak = nakshatra_from_longitude(longitude);
    PlanetaryPosition {
        body: p.body,
        longitude,
        tropical_longitude: p.tropical,
        sign: rashi.sign,
        rashi: rashi.rashi,
        degree_in_sign: rashi.degrees_in_rashi,
        dms: deg_to_dms(rashi.degrees_in_rashi),
        house: house_of(longitude, ascendant_sid),
        nakshatra: nak.nakshatra,
        nakshatra_number: nak.number,
        pada: nak.pada,
        retrograde: p.retrograde,
        speed: p.speed,
        dignity: match p.body {
            ChartBody::Graha(g) => Some(dignity_of(g, longitude)),
            ChartBody::Ascendant => None,
        },
    }
}

/// Compute a full chart for one birth record.
///
/// Ephemeris unavailability degrades to the fallback models and is
/// recorded in [`Chart::provenance`]; every other failure is returned.
pub fn compute_chart(
    input: &BirthInput,
    options: &ChartOptions,
    resolver: &Resolver,
) -> Result<Chart, ChartError> {
    input.validate()?;
    let jd = input.julian_day();
    debug!(%jd, datetime = %input.datetime, "birth instant");

    let tropical = resolver.resolve_positions(jd);
    let ascendant = resolver.resolve_ascendant(jd, input.latitude, input.longitude)?;
    let ayanamsa_deg = options.ayanamsa.degrees_at(jd);
    let ascendant_sid = to_sidereal(ascendant.value, ayanamsa_deg);
    debug!(ayanamsa_deg, ascendant_sid, "sidereal frame");

    let mut positions = BTreeMap::new();
    positions.insert(
        ChartBody::Ascendant,
        place(
            Placement {
                body: ChartBody::Ascendant,
                tropical: ascendant.value,
                speed: None,
                retrograde: false,
            },
            ayanamsa_deg,
            ascendant_sid,
        ),
    );
    for b in tropical.value.iter() {
        let placed = place(
            Placement {
                body: ChartBody::Graha(b.graha),
                tropical: b.longitude,
                speed: b.speed,
                retrograde: b.retrograde,
            },
            ayanamsa_deg,
            ascendant_sid,
        );
        positions.insert(placed.body, placed);
    }

    let sidereal_of = |g: Graha| {
        positions
            .get(&ChartBody::Graha(g))
            .map(|p| p.longitude)
            .ok_or_else(|| ChartError::Invariant(format!("{g} missing from positions")))
    };
    let mut sidereal = Vec::with_capacity(ALL_GRAHAS.len());
    for g in ALL_GRAHAS {
        sidereal.push((g, sidereal_of(g)?));
    }

    let vargas = options
        .vargas
        .iter()
        .map(|&amsha| {
            let chart = varga_chart(amsha, options.varga_scheme, ascendant_sid, &sidereal);
            (amsha.divisions(), chart)
        })
        .collect();
    debug!(count = options.vargas.len(), "vargas built");

    let dasha = dasha_report(jd.value(), sidereal_of(Graha::Chandra)?, options)?;
    let ashtakavarga = ashtakavarga_report(&positions, ascendant_sid)?;

    let chart = Chart {
        input: input.clone(),
        julian_day: jd,
        ayanamsa: options.ayanamsa,
        ayanamsa_deg,
        houses: equal_houses(ascendant_sid),
        positions,
        vargas,
        dasha,
        ashtakavarga,
        provenance: ChartProvenance {
            positions: tropical.provenance,
            ascendant: ascendant.provenance,
        },
    };
    verify_chart(&chart)?;
    info!(
        %jd,
        ascendant = ascendant_sid,
        degraded = chart.provenance.degraded(),
        "chart computed"
    );
    Ok(chart)
}

fn dasha_report(
    birth_jd: f64,
    moon_sid: f64,
    options: &ChartOptions,
) -> Result<DashaReport, ChartError> {
    // The nested timeline stops where a full level would pass the period
    // cap; the active chain still reaches the configured depth.
    let timeline_options = options.dasha.materialized();
    if timeline_options.max_level < options.dasha.max_level {
        debug!(
            requested = options.dasha.max_level,
            timeline_level = timeline_options.max_level,
            "dasha timeline depth clipped"
        );
    }
    let hierarchy = dasha_hierarchy(birth_jd, moon_sid, &timeline_options)?;
    verify_hierarchy(&hierarchy)?;
    let reference = options.reference();
    let active = dasha_snapshot(birth_jd, moon_sid, reference.value(), &options.dasha)?.periods;
    debug!(
        lord = %hierarchy.balance.lord,
        remaining_years = hierarchy.balance.remaining_years,
        active_depth = active.len(),
        "dasha timeline"
    );
    Ok(DashaReport {
        options: options.dasha,
        timeline_level: timeline_options.max_level,
        balance: hierarchy.balance,
        reference_jd: reference,
        active,
        timeline: nest_hierarchy(&hierarchy, reference.value()),
    })
}

fn ashtakavarga_report(
    positions: &BTreeMap<ChartBody, PlanetaryPosition>,
    ascendant_sid: f64,
) -> Result<AshtakavargaReport, ChartError> {
    let lagna_sign = rashi_from_longitude(ascendant_sid).sign;
    let mut houses = [0u8; 7];
    let mut signs = [0u8; 7];
    for (i, g) in SAPTA_GRAHAS.into_iter().enumerate() {
        let p = positions
            .get(&ChartBody::Graha(g))
            .ok_or_else(|| ChartError::Invariant(format!("{g} missing from positions")))?;
        houses[i] = p.house;
        signs[i] = p.sign;
    }
    let by_house = ashtakavarga(&ContributorPositions::new(houses, 1)?)?;
    let by_sign = ashtakavarga(&ContributorPositions::new(signs, lagna_sign)?)?;
    Ok(AshtakavargaReport {
        sodhana: sodhana(&by_sign.sarva),
        by_house,
        by_sign,
    })
}
