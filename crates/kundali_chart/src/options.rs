//! Per-request chart options.

use kundali_config::{ConfigError, KundaliConfig};
use kundali_time::JulianDay;
use kundali_vedic_base::{ALL_AMSHAS, Amsha, Ayanamsa, DEFAULT_DIVISIONS, DashaOptions, VargaScheme};

/// What to compute and how. Passed explicitly to every chart computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub ayanamsa: Ayanamsa,
    pub dasha: DashaOptions,
    /// Divisional charts to build, in output order.
    pub vargas: Vec<Amsha>,
    pub varga_scheme: VargaScheme,
    /// Instant that marks the active dasha chain. `None` uses the system clock.
    pub reference_jd: Option<JulianDay>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            ayanamsa: Ayanamsa::default(),
            dasha: DashaOptions::default(),
            vargas: ALL_AMSHAS
                .iter()
                .copied()
                .filter(|a| DEFAULT_DIVISIONS.contains(&a.divisions()))
                .collect(),
            varga_scheme: VargaScheme::default(),
            reference_jd: None,
        }
    }
}

impl ChartOptions {
    pub fn from_config(config: &KundaliConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            ayanamsa: config.ayanamsa.ayanamsa(),
            dasha: config.dasha.options(),
            vargas: config.varga.amshas()?,
            varga_scheme: config.varga.scheme,
            reference_jd: None,
        })
    }

    pub fn with_reference(mut self, jd: JulianDay) -> Self {
        self.reference_jd = Some(jd);
        self
    }

    pub(crate) fn reference(&self) -> JulianDay {
        self.reference_jd.unwrap_or_else(JulianDay::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config_defaults() {
        let from_config = ChartOptions::from_config(&KundaliConfig::default()).unwrap();
        assert_eq!(from_config, ChartOptions::default());
        assert_eq!(from_config.vargas.len(), 14);
        assert!(!from_config.vargas.contains(&Amsha::D1));
    }
}
