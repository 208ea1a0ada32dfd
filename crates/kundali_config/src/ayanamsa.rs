//! Sidereal correction settings.

use kundali_vedic_base::{Ayanamsa, DEFAULT_AYANAMSA_DEG};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, invalid};

const fn default_degrees() -> f64 {
    DEFAULT_AYANAMSA_DEG
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AyanamsaMode {
    #[default]
    Fixed,
    Lahiri,
    Raman,
    Krishnamurti,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AyanamsaConfig {
    #[serde(default)]
    pub mode: AyanamsaMode,

    /// Constant used by `fixed` mode; ignored otherwise.
    #[serde(default = "default_degrees")]
    pub degrees: f64,
}

impl Default for AyanamsaConfig {
    fn default() -> Self {
        Self {
            mode: AyanamsaMode::default(),
            degrees: default_degrees(),
        }
    }
}

impl AyanamsaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.degrees.is_finite() || !(0.0..360.0).contains(&self.degrees) {
            return Err(invalid("ayanamsa.degrees", format!("{} not in [0, 360)", self.degrees)));
        }
        Ok(())
    }

    pub fn ayanamsa(&self) -> Ayanamsa {
        match self.mode {
            AyanamsaMode::Fixed => Ayanamsa::Fixed(self.degrees),
            AyanamsaMode::Lahiri => Ayanamsa::Lahiri,
            AyanamsaMode::Raman => Ayanamsa::Raman,
            AyanamsaMode::Krishnamurti => Ayanamsa::Krishnamurti,
        }
    }
}
