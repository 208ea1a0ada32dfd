//! Positions service reached over HTTP.
//!
//! Two endpoints, both `GET` with JSON bodies:
//!
//! - `{base}/positions?jd=&bodies=sun,moon,…&sidereal=false` →
//!   `{"bodies":[{"body":"sun","longitude":280.1,"speed":1.01,"retrograde":false,"sign":10}]}`
//! - `{base}/ascendant?jd=&lat=&lon=&hsys=E` → `{"ascendant":123.4}`
//!
//! Longitudes are tropical. `speed`, `retrograde` and `sign` are optional;
//! a missing Ketu is derived from Rahu and a reported one must oppose it.
//! Responses are untrusted and are
//! checked before use.

use std::collections::BTreeMap;
use std::time::Duration;

use kundali_time::JulianDay;
use kundali_vedic_base::{ALL_GRAHAS, Graha, normalize_360};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::EphemerisError;
use crate::position::{BodyLongitude, TropicalPositions};
use crate::provider::EphemerisProvider;

pub const DEFAULT_TIMEOUT_MS: u64 = 2_000;

/// Equal houses.
pub const DEFAULT_HOUSE_SYSTEM: char = 'E';

/// Allowed departure of a reported Ketu from Rahu + 180°, in degrees.
pub const NODE_AXIS_TOLERANCE_DEG: f64 = 1e-3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpEphemerisConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    /// Single-letter house system code passed through to the service.
    pub house_system: char,
}

impl HttpEphemerisConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            house_system: DEFAULT_HOUSE_SYSTEM,
        }
    }

    fn validate(&self) -> Result<(), EphemerisError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(EphemerisError::InvalidConfig(
                "base_url must start with http:// or https://",
            ));
        }
        if self.timeout_ms == 0 {
            return Err(EphemerisError::InvalidConfig(
                "timeout_ms must be greater than zero",
            ));
        }
        if !self.house_system.is_ascii_alphabetic() {
            return Err(EphemerisError::InvalidConfig(
                "house_system must be a single ASCII letter",
            ));
        }
        Ok(())
    }
}

pub struct HttpEphemeris {
    config: HttpEphemerisConfig,
    client: reqwest::blocking::Client,
}

impl HttpEphemeris {
    pub fn new(config: HttpEphemerisConfig) -> Result<Self, EphemerisError> {
        config.validate()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| EphemerisError::Transport(e.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HttpEphemerisConfig {
        &self.config
    }

    fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, EphemerisError> {
        let url = format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'));
        debug!(%url, "ephemeris request");
        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|e| self.classify(e))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(EphemerisError::Status {
                status: status.as_u16(),
            });
        }
        let body = resp.text().map_err(|e| self.classify(e))?;
        serde_json::from_str(&body).map_err(|e| EphemerisError::MalformedResponse(e.to_string()))
    }

    fn classify(&self, e: reqwest::Error) -> EphemerisError {
        if e.is_timeout() {
            EphemerisError::Timeout {
                timeout_ms: self.config.timeout_ms,
            }
        } else {
            EphemerisError::Transport(e.to_string())
        }
    }
}

impl EphemerisProvider for HttpEphemeris {
    fn name(&self) -> &'static str {
        "http"
    }

    fn tropical_positions(&self, jd: JulianDay) -> Result<TropicalPositions, EphemerisError> {
        let bodies = ALL_GRAHAS.map(Graha::id).join(",");
        let resp: PositionsResponse = self.get(
            "positions",
            &[
                ("jd", format!("{:.8}", jd.value())),
                ("bodies", bodies),
                ("sidereal", "false".to_string()),
            ],
        )?;
        validate_positions(resp)
    }

    fn tropical_ascendant(
        &self,
        jd: JulianDay,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<f64, EphemerisError> {
        let resp: AscendantResponse = self.get(
            "ascendant",
            &[
                ("jd", format!("{:.8}", jd.value())),
                ("lat", latitude_deg.to_string()),
                ("lon", longitude_deg.to_string()),
                ("hsys", self.config.house_system.to_string()),
            ],
        )?;
        check_longitude("ascendant", resp.ascendant)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PositionsResponse {
    pub bodies: Vec<WireBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireBody {
    pub body: String,
    pub longitude: f64,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub retrograde: Option<bool>,
    /// Tropical sign, 1..=12.
    #[serde(default)]
    pub sign: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AscendantResponse {
    pub ascendant: f64,
}

fn check_longitude(what: &str, lon: f64) -> Result<f64, EphemerisError> {
    if lon.is_finite() && (0.0..360.0).contains(&lon) {
        Ok(lon)
    } else {
        Err(EphemerisError::MalformedResponse(format!(
            "{what} longitude {lon} outside [0, 360)"
        )))
    }
}

/// Check a positions payload and convert it.
///
/// Unknown bodies are ignored. Every graha except Ketu must appear exactly
/// once; Ketu, if absent, is placed opposite Rahu with the same motion.
pub fn validate_positions(resp: PositionsResponse) -> Result<TropicalPositions, EphemerisError> {
    let mut seen: BTreeMap<Graha, BodyLongitude> = BTreeMap::new();
    for wire in resp.bodies {
        let Ok(graha) = wire.body.parse::<Graha>() else {
            debug!(body = %wire.body, "ignoring unknown body");
            continue;
        };
        let longitude = check_longitude(graha.id(), wire.longitude)?;
        if let Some(sign) = wire.sign {
            let expected = (longitude / 30.0).floor() as u8 + 1;
            if sign != expected {
                return Err(EphemerisError::MalformedResponse(format!(
                    "{graha}: sign {sign} disagrees with longitude {longitude}"
                )));
            }
        }
        if wire.speed.is_some_and(|s| !s.is_finite()) {
            return Err(EphemerisError::MalformedResponse(format!(
                "{graha}: speed is not finite"
            )));
        }
        let retrograde = wire
            .retrograde
            .unwrap_or_else(|| wire.speed.is_some_and(|s| s < 0.0));
        let entry = BodyLongitude {
            graha,
            longitude,
            speed: wire.speed,
            retrograde,
        };
        if seen.insert(graha, entry).is_some() {
            return Err(EphemerisError::MalformedResponse(format!(
                "{graha} listed more than once"
            )));
        }
    }

    if let Some(rahu) = seen.get(&Graha::Rahu).copied() {
        let opposite = normalize_360(rahu.longitude + 180.0);
        match seen.get(&Graha::Ketu) {
            Some(ketu) => {
                let off = normalize_360(ketu.longitude - opposite);
                if off.min(360.0 - off) > NODE_AXIS_TOLERANCE_DEG {
                    return Err(EphemerisError::MalformedResponse(format!(
                        "Ketu {} is not opposite Rahu {}",
                        ketu.longitude, rahu.longitude
                    )));
                }
            }
            None => {
                seen.insert(
                    Graha::Ketu,
                    BodyLongitude {
                        graha: Graha::Ketu,
                        longitude: opposite,
                        ..rahu
                    },
                );
            }
        }
    }

    if let Some(missing) = ALL_GRAHAS.iter().find(|g| !seen.contains_key(g)) {
        return Err(EphemerisError::MalformedResponse(format!(
            "response is missing {missing}"
        )));
    }
    Ok(TropicalPositions::from_fn(|graha| seen[&graha]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(body: &str, longitude: f64) -> WireBody {
        WireBody {
            body: body.to_string(),
            longitude,
            speed: None,
            retrograde: None,
            sign: None,
        }
    }

    /// One body per sign, except Ketu, which opposes Rahu at 211°.
    fn full_set() -> Vec<WireBody> {
        ALL_GRAHAS
            .iter()
            .map(|g| match g {
                Graha::Ketu => wire(g.id(), 31.0),
                _ => wire(g.id(), g.index() as f64 * 30.0 + 1.0),
            })
            .collect()
    }

    #[test]
    fn complete_payload_accepted() {
        let p = validate_positions(PositionsResponse { bodies: full_set() }).unwrap();
        assert_eq!(p.get(Graha::Guru).longitude, 121.0);
    }

    #[test]
    fn ketu_derived_from_rahu() {
        let mut bodies = full_set();
        bodies.pop();
        bodies[7].speed = Some(-0.05);
        let p = validate_positions(PositionsResponse { bodies }).unwrap();
        assert_eq!(p.get(Graha::Ketu).longitude, 31.0);
        assert!(p.get(Graha::Ketu).retrograde);
    }

    #[test]
    fn reported_ketu_must_oppose_rahu() {
        let mut bodies = full_set();
        bodies[8].longitude = 41.0;
        let err = validate_positions(PositionsResponse { bodies }).unwrap_err();
        assert!(matches!(err, EphemerisError::MalformedResponse(m) if m.contains("Ketu")));

        let mut bodies = full_set();
        bodies[7].longitude = 180.0;
        bodies[8].longitude = 359.9999;
        assert!(validate_positions(PositionsResponse { bodies }).is_ok());
    }

    #[test]
    fn missing_body_rejected() {
        let mut bodies = full_set();
        bodies.remove(2);
        let err = validate_positions(PositionsResponse { bodies }).unwrap_err();
        assert!(matches!(err, EphemerisError::MalformedResponse(m) if m.contains("Mars")));
    }

    #[test]
    fn duplicate_rejected() {
        let mut bodies = full_set();
        bodies.push(wire("sun", 3.0));
        assert!(validate_positions(PositionsResponse { bodies }).is_err());
    }

    #[test]
    fn out_of_range_rejected() {
        let mut bodies = full_set();
        bodies[0].longitude = 360.0;
        assert!(validate_positions(PositionsResponse { bodies }).is_err());
    }

    #[test]
    fn inconsistent_sign_rejected() {
        let mut bodies = full_set();
        bodies[1].sign = Some(5);
        assert!(validate_positions(PositionsResponse { bodies }).is_err());
        let mut bodies = full_set();
        bodies[1].sign = Some(2);
        assert!(validate_positions(PositionsResponse { bodies }).is_ok());
    }

    #[test]
    fn unknown_bodies_ignored() {
        let mut bodies = full_set();
        bodies.push(wire("uranus", 12.0));
        assert!(validate_positions(PositionsResponse { bodies }).is_ok());
    }

    #[test]
    fn config_rejects_bad_values() {
        assert!(HttpEphemeris::new(HttpEphemerisConfig::new("ftp://x")).is_err());
        let mut c = HttpEphemerisConfig::new("http://127.0.0.1:1");
        c.timeout_ms = 0;
        assert!(HttpEphemeris::new(c).is_err());
        let mut c = HttpEphemerisConfig::new("http://127.0.0.1:1");
        c.house_system = '1';
        assert!(HttpEphemeris::new(c).is_err());
    }
}
