//! Primary ephemeris provider settings.

use kundali_ephemeris::{
    DEFAULT_HOUSE_SYSTEM, DEFAULT_TIMEOUT_MS, EphemerisProvider, HttpEphemeris,
    HttpEphemerisConfig,
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, invalid};

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_house_system() -> String {
    DEFAULT_HOUSE_SYSTEM.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EphemerisConfig {
    /// Base URL of the positions service. Absent means mean-motion only.
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_house_system")]
    pub house_system: String,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_ms: default_timeout_ms(),
            house_system: default_house_system(),
        }
    }
}

impl EphemerisConfig {
    pub fn is_configured(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(invalid("ephemeris.timeout_ms", "must be greater than zero"));
        }
        self.house_system_code()?;
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(invalid("ephemeris.url", format!("{url:?} is not an http(s) URL")));
            }
        }
        Ok(())
    }

    fn house_system_code(&self) -> Result<char, ConfigError> {
        let mut chars = self.house_system.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(c),
            _ => Err(invalid(
                "ephemeris.house_system",
                format!("{:?} is not a single letter", self.house_system),
            )),
        }
    }

    /// HTTP provider settings, when a URL is configured.
    pub fn http_config(&self) -> Result<Option<HttpEphemerisConfig>, ConfigError> {
        let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) else {
            return Ok(None);
        };
        Ok(Some(HttpEphemerisConfig {
            base_url: url.to_string(),
            timeout_ms: self.timeout_ms,
            house_system: self.house_system_code()?,
        }))
    }

    /// Build the configured provider, if any.
    pub fn provider(&self) -> Result<Option<Box<dyn EphemerisProvider>>, ConfigError> {
        let Some(config) = self.http_config()? else {
            return Ok(None);
        };
        let http = HttpEphemeris::new(config).map_err(|e| invalid("ephemeris", e.to_string()))?;
        Ok(Some(Box::new(http)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_by_default() {
        let c = EphemerisConfig::default();
        assert!(!c.is_configured());
        assert!(c.http_config().unwrap().is_none());
        assert_eq!(c.house_system, "E");
    }

    #[test]
    fn house_system_must_be_one_letter() {
        let c = EphemerisConfig { house_system: "EQ".into(), ..Default::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn url_scheme_checked() {
        let c = EphemerisConfig { url: Some("localhost:8080".into()), ..Default::default() };
        assert!(c.validate().is_err());
        let c = EphemerisConfig { url: Some("http://localhost:8080".into()), ..Default::default() };
        assert!(c.validate().is_ok());
        assert_eq!(c.http_config().unwrap().unwrap().house_system, 'E');
    }
}
