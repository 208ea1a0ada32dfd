//! Dasha depth and span settings.

use kundali_vedic_base::dasha::{DEFAULT_DASHA_LEVEL, DashaOptions, MAX_DASHA_LEVEL};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, invalid};

const fn default_max_level() -> u8 {
    DEFAULT_DASHA_LEVEL
}

const fn default_cycles() -> u8 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DashaConfig {
    /// Deepest level generated: 0 Mahadasha … 4 Pranadasha.
    #[serde(default = "default_max_level")]
    pub max_level: u8,

    /// Number of 120-year cycles, 1 or 2.
    #[serde(default = "default_cycles")]
    pub cycles: u8,
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self {
            max_level: default_max_level(),
            cycles: default_cycles(),
        }
    }
}

impl DashaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_level > MAX_DASHA_LEVEL {
            return Err(invalid("dasha.max_level", format!("{} > {MAX_DASHA_LEVEL}", self.max_level)));
        }
        if !(1..=2).contains(&self.cycles) {
            return Err(invalid("dasha.cycles", format!("{} is not 1 or 2", self.cycles)));
        }
        Ok(())
    }

    pub fn options(&self) -> DashaOptions {
        DashaOptions {
            max_level: self.max_level,
            cycles: self.cycles,
        }
    }
}
