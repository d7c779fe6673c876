use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::fractals::lyapunov::errors::{ConfigError, ConfigFileError};
use crate::core::fractals::lyapunov::palettes::PaletteKind;
use crate::core::fractals::lyapunov::pattern::{BASE_SYMBOL, EXCITED_SYMBOL, MAX_PATTERN_LENGTH};

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_PATTERN: &str = "AAABB";

/// Every knob a user can turn. The frame cycle only ever reads snapshots of
/// this; the numeric fields are smoothed before they reach the kernel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LyapunovConfig {
    pub zoom: f64,
    pub displace_x: f64,
    pub displace_y: f64,
    /// Degrees.
    pub rotation: f64,
    pub white_threshold: f64,
    pub black_threshold: f64,
    pub lyp_min: f64,
    pub lyp_max: f64,
    pub iter_max: u32,
    pub pattern: String,
    pub palette: PaletteKind,
    pub noise_enabled: bool,
    pub animate_time: bool,
}

impl Default for LyapunovConfig {
    fn default() -> Self {
        Self {
            zoom: 2.04,
            displace_x: 2.37,
            displace_y: 3.29,
            rotation: 0.0,
            white_threshold: 0.0,
            black_threshold: 0.0,
            lyp_min: -1.0,
            lyp_max: 1.0,
            iter_max: DEFAULT_MAX_ITERATIONS,
            pattern: DEFAULT_PATTERN.to_string(),
            palette: PaletteKind::default(),
            noise_enabled: true,
            animate_time: true,
        }
    }
}

impl LyapunovConfig {
    /// Reads a JSON config. Missing keys take their default values; the
    /// result is not validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let path = path.as_ref();
        let config = Self::from_json(&fs::read_to_string(path)?)?;

        debug!(path = %path.display(), ?config, "loaded config");

        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigFileError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks the documented option ranges. The kernel survives any input,
    /// so this is for callers that accept values from users.
    ///
    /// Patterns longer than the kernel capacity are accepted and truncated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_fields = [
            ("zoom", self.zoom),
            ("displace_x", self.displace_x),
            ("displace_y", self.displace_y),
            ("rotation", self.rotation),
            ("white_threshold", self.white_threshold),
            ("black_threshold", self.black_threshold),
            ("lyp_min", self.lyp_min),
            ("lyp_max", self.lyp_max),
        ];

        if let Some(&(field, value)) = finite_fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFiniteValue { field, value });
        }

        if self.zoom <= 0.0 {
            return Err(ConfigError::NonPositiveZoom(self.zoom));
        }

        for (field, value) in [
            ("white_threshold", self.white_threshold),
            ("black_threshold", self.black_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { field, value });
            }
        }

        if self.lyp_min >= self.lyp_max {
            return Err(ConfigError::InvertedExponentWindow {
                lyp_min: self.lyp_min,
                lyp_max: self.lyp_max,
            });
        }

        if self.iter_max == 0 {
            return Err(ConfigError::ZeroMaxIterationsError);
        }

        if self.pattern.is_empty() {
            return Err(ConfigError::EmptyPattern);
        }

        if let Some((position, symbol)) = self
            .pattern
            .chars()
            .enumerate()
            .find(|&(_, symbol)| symbol != BASE_SYMBOL && symbol != EXCITED_SYMBOL)
        {
            return Err(ConfigError::InvalidPatternSymbol { symbol, position });
        }

        Ok(())
    }

    #[must_use]
    pub fn pattern_is_truncated(&self) -> bool {
        self.pattern.chars().count() > MAX_PATTERN_LENGTH
    }

    pub fn reset_view(&mut self) {
        let defaults = Self::default();

        self.zoom = defaults.zoom;
        self.displace_x = defaults.displace_x;
        self.displace_y = defaults.displace_y;
        self.rotation = defaults.rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(LyapunovConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_zoom() {
        let config = LyapunovConfig {
            zoom: 0.0,
            ..LyapunovConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::NonPositiveZoom(0.0)));
    }

    #[test]
    fn rejects_non_finite_values() {
        let config = LyapunovConfig {
            displace_y: f64::INFINITY,
            ..LyapunovConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteValue {
                field: "displace_y",
                value: f64::INFINITY
            })
        );
    }

    #[test]
    fn rejects_thresholds_outside_unit_range() {
        let config = LyapunovConfig {
            black_threshold: -0.1,
            ..LyapunovConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::ThresholdOutOfRange {
                field: "black_threshold",
                value: -0.1
            })
        );
    }

    #[test]
    fn rejects_inverted_or_empty_exponent_window() {
        let config = LyapunovConfig {
            lyp_min: 1.0,
            lyp_max: 1.0,
            ..LyapunovConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedExponentWindow {
                lyp_min: 1.0,
                lyp_max: 1.0
            })
        );
    }

    #[test]
    fn rejects_zero_iterations() {
        let config = LyapunovConfig {
            iter_max: 0,
            ..LyapunovConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxIterationsError));
    }

    #[test]
    fn rejects_bad_patterns() {
        let empty = LyapunovConfig {
            pattern: String::new(),
            ..LyapunovConfig::default()
        };
        let lowercase = LyapunovConfig {
            pattern: "ABaB".to_string(),
            ..LyapunovConfig::default()
        };

        assert_eq!(empty.validate(), Err(ConfigError::EmptyPattern));
        assert_eq!(
            lowercase.validate(),
            Err(ConfigError::InvalidPatternSymbol {
                symbol: 'a',
                position: 2
            })
        );
    }

    #[test]
    fn long_patterns_are_valid_but_flagged() {
        let config = LyapunovConfig {
            pattern: "AB".repeat(20),
            ..LyapunovConfig::default()
        };

        assert_eq!(config.validate(), Ok(()));
        assert!(config.pattern_is_truncated());
    }

    #[test]
    fn deserializes_partial_json_over_defaults() {
        let json = r#"{ "zoom": 3.3, "pattern": "BBA", "palette": "inferno", "noise_enabled": false }"#;
        let config = LyapunovConfig::from_json(json).unwrap();

        assert_eq!(config.zoom, 3.3);
        assert_eq!(config.pattern, "BBA");
        assert_eq!(config.palette, PaletteKind::Inferno);
        assert!(!config.noise_enabled);
        assert_eq!(config.iter_max, DEFAULT_MAX_ITERATIONS);
        assert_eq!(config.displace_x, 2.37);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = LyapunovConfig::from_json(r#"{ "zoom": "wide" }"#);

        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn unknown_palette_name_is_rejected() {
        let result = LyapunovConfig::from_json(r#"{ "palette": "sepia" }"#);

        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = LyapunovConfig::load("/nonexistent/lyapunov.json");

        assert!(matches!(result, Err(ConfigFileError::Io(_))));
    }

    #[test]
    fn reset_view_keeps_non_view_settings() {
        let mut config = LyapunovConfig {
            zoom: 9.0,
            rotation: 45.0,
            iter_max: 500,
            ..LyapunovConfig::default()
        };

        config.reset_view();

        assert_eq!(config.zoom, 2.04);
        assert_eq!(config.rotation, 0.0);
        assert_eq!(config.iter_max, 500);
    }
}
