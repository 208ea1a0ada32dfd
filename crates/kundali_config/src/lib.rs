//! Layered configuration for kundali charts, loaded with figment.
//!
//! Sources in priority order, highest wins:
//! 1. Environment variables (`KUNDALI_*` prefix, `__` nests sections)
//! 2. An explicit file passed by the caller
//! 3. Project-level `./kundali.toml`
//! 4. User-level `~/.config/kundali/config.toml`
//! 5. Built-in defaults
//!
//! `KUNDALI_EPHEMERIS__URL` maps to `ephemeris.url`,
//! `KUNDALI_DASHA__MAX_LEVEL` to `dasha.max_level`, and so on.
//!
//! The loaded value is passed down explicitly to each computation; nothing
//! here is global.

mod ayanamsa;
mod dasha;
mod ephemeris;
mod error;
mod varga;

pub use ayanamsa::{AyanamsaConfig, AyanamsaMode};
pub use dasha::DashaConfig;
pub use ephemeris::EphemerisConfig;
pub use error::ConfigError;
pub use varga::VargaConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const ENV_PREFIX: &str = "KUNDALI_";
pub const PROJECT_CONFIG_FILE: &str = "kundali.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct KundaliConfig {
    #[serde(default)]
    pub ayanamsa: AyanamsaConfig,
    #[serde(default)]
    pub ephemeris: EphemerisConfig,
    #[serde(default)]
    pub dasha: DashaConfig,
    #[serde(default)]
    pub varga: VargaConfig,
}

impl KundaliConfig {
    /// Load from defaults, config files and the environment, then validate.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_file(None)
    }

    /// Like [`load`](Self::load), with one more TOML file layered above the
    /// standard locations. A missing explicit file is an error.
    pub fn load_with_file(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(p) = path {
            if !p.exists() {
                return Err(ConfigError::InvalidValue {
                    field: "config",
                    reason: format!("{} does not exist", p.display()),
                });
            }
        }
        let config: Self = Self::figment(path).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the provider chain without extracting.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global) = Self::global_config_path().filter(|p| p.exists()) {
            debug!(path = %global.display(), "merging user config");
            figment = figment.merge(Toml::file(global));
        }

        let local = PathBuf::from(PROJECT_CONFIG_FILE);
        if local.exists() {
            debug!(path = %local.display(), "merging project config");
            figment = figment.merge(Toml::file(local));
        }

        if let Some(p) = explicit {
            debug!(path = %p.display(), "merging explicit config");
            figment = figment.merge(Toml::file(p));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("kundali").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ayanamsa.validate()?;
        self.ephemeris.validate()?;
        self.dasha.validate()?;
        self.varga.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = KundaliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dasha.max_level, 2);
        assert_eq!(config.ephemeris.timeout_ms, 2_000);
    }

    #[test]
    fn figment_extracts_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config: KundaliConfig = KundaliConfig::figment(None).extract()?;
            assert_eq!(config.varga.divisions.len(), 14);
            Ok(())
        });
    }
}
