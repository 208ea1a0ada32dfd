//! Divisional chart selection.

use kundali_vedic_base::{Amsha, DEFAULT_DIVISIONS, VargaScheme};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, invalid};

fn default_divisions() -> Vec<u16> {
    DEFAULT_DIVISIONS.to_vec()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VargaConfig {
    #[serde(default = "default_divisions")]
    pub divisions: Vec<u16>,

    #[serde(default)]
    pub scheme: VargaScheme,
}

impl Default for VargaConfig {
    fn default() -> Self {
        Self {
            divisions: default_divisions(),
            scheme: VargaScheme::default(),
        }
    }
}

impl VargaConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.amshas().map(|_| ())
    }

    /// Requested vargas in configured order.
    pub fn amshas(&self) -> Result<Vec<Amsha>, ConfigError> {
        let mut out: Vec<Amsha> = Vec::with_capacity(self.divisions.len());
        for &n in &self.divisions {
            let amsha = Amsha::from_divisions(n).map_err(|e| invalid("varga.divisions", e.to_string()))?;
            if out.contains(&amsha) {
                return Err(invalid("varga.divisions", format!("D{n} listed twice")));
            }
            out.push(amsha);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_is_supported() {
        let amshas = VargaConfig::default().amshas().unwrap();
        assert_eq!(amshas.len(), DEFAULT_DIVISIONS.len());
        assert_eq!(amshas[7], Amsha::D9);
    }

    #[test]
    fn unsupported_and_duplicate_factors_rejected() {
        let c = VargaConfig { divisions: vec![9, 11], ..Default::default() };
        assert!(c.validate().is_err());
        let c = VargaConfig { divisions: vec![9, 9], ..Default::default() };
        assert!(c.validate().is_err());
    }
}
