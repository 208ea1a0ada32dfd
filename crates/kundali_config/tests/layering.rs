//! Config layering: TOML files and `KUNDALI_*` overrides.
//!
//! Uses figment::Jail so env vars and the working directory are sandboxed.

use std::path::Path;

use figment::Jail;
use kundali_config::{AyanamsaMode, ConfigError, KundaliConfig};
use kundali_vedic_base::{Amsha, Ayanamsa, VargaScheme};
use pretty_assertions::assert_eq;

#[test]
fn project_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "kundali.toml",
            r#"
[ayanamsa]
mode = "lahiri"

[dasha]
max_level = 3
cycles = 2

[varga]
divisions = [9, 10]
scheme = "parashari"
"#,
        )?;

        let config = KundaliConfig::load().expect("config loads");
        assert_eq!(config.ayanamsa.mode, AyanamsaMode::Lahiri);
        assert_eq!(config.ayanamsa.ayanamsa(), Ayanamsa::Lahiri);
        assert_eq!(config.dasha.max_level, 3);
        assert_eq!(config.dasha.cycles, 2);
        assert_eq!(config.varga.amshas().unwrap(), vec![Amsha::D9, Amsha::D10]);
        assert_eq!(config.varga.scheme, VargaScheme::Parashari);
        // Untouched sections keep their defaults.
        assert_eq!(config.ephemeris.timeout_ms, 2_000);
        Ok(())
    });
}

#[test]
fn env_beats_files() {
    Jail::expect_with(|jail| {
        jail.create_file("kundali.toml", "[ayanamsa]\ndegrees = 23.5\n")?;
        jail.set_env("KUNDALI_AYANAMSA__DEGREES", "23.9");
        jail.set_env("KUNDALI_EPHEMERIS__URL", "http://localhost:8088");
        jail.set_env("KUNDALI_EPHEMERIS__TIMEOUT_MS", "750");

        let config = KundaliConfig::load().expect("config loads");
        assert_eq!(config.ayanamsa.ayanamsa(), Ayanamsa::Fixed(23.9));
        assert!(config.ephemeris.is_configured());
        let http = config.ephemeris.http_config().unwrap().unwrap();
        assert_eq!(http.timeout_ms, 750);
        assert_eq!(http.base_url, "http://localhost:8088");
        Ok(())
    });
}

#[test]
fn explicit_file_sits_above_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("kundali.toml", "[dasha]\nmax_level = 1\n")?;
        jail.create_file("custom.toml", "[dasha]\nmax_level = 4\n")?;

        let config = KundaliConfig::load_with_file(Some(Path::new("custom.toml"))).expect("loads");
        assert_eq!(config.dasha.max_level, 4);
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let err = KundaliConfig::load_with_file(Some(Path::new("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "config", .. }));
        Ok(())
    });
}

#[test]
fn out_of_range_values_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("KUNDALI_DASHA__MAX_LEVEL", "5");
        let err = KundaliConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "dasha.max_level", .. }));
        Ok(())
    });

    Jail::expect_with(|jail| {
        jail.set_env("KUNDALI_VARGA__DIVISIONS", "[9, 11]");
        let err = KundaliConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "varga.divisions", .. }));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("kundali.toml", "[dasha\nmax_level = ")?;
        assert!(matches!(KundaliConfig::load(), Err(ConfigError::Figment(_))));
        Ok(())
    });
}
