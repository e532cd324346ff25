//! Gesture configuration.
//! Defaults match the preview widget: scale bounded to [1, 3], 10px jitter,
//! double tap zooms to 1.5.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MIN_SCALE: f64 = 1.0;
pub const DEFAULT_MAX_SCALE: f64 = 3.0;
pub const DEFAULT_JITTER_THRESHOLD: f64 = 10.0;
pub const DEFAULT_DOUBLE_TAP_SCALE: f64 = 1.5;
pub const DEFAULT_MAX_CONTACTS: usize = 2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse gesture config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid gesture config: {0}")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Lower scale bound, also the value a reset returns to.
    pub min_scale: f64,
    pub max_scale: f64,
    /// Minimum change in finger distance (view units) before the scale is recomputed.
    pub jitter_threshold: f64,
    /// Target of a double tap when the image is not zoomed.
    pub double_tap_scale: f64,
    /// Capacity of the anchor and live point sets.
    pub max_contacts: usize,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            jitter_threshold: DEFAULT_JITTER_THRESHOLD,
            double_tap_scale: DEFAULT_DOUBLE_TAP_SCALE,
            max_contacts: DEFAULT_MAX_CONTACTS,
        }
    }
}

impl GestureConfig {
    /// Parses a JSON object; missing fields fall back to defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: GestureConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("jitter_threshold", self.jitter_threshold),
            ("double_tap_scale", self.double_tap_scale),
        ];
        if let Some((name, _)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Invalid(format!("{name} must be finite")));
        }
        if self.min_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::Invalid(format!(
                "min_scale {} exceeds max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        if self.jitter_threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "jitter_threshold must not be negative, got {}",
                self.jitter_threshold
            )));
        }
        if self.double_tap_scale < self.min_scale || self.double_tap_scale > self.max_scale {
            return Err(ConfigError::Invalid(format!(
                "double_tap_scale {} outside [{}, {}]",
                self.double_tap_scale, self.min_scale, self.max_scale
            )));
        }
        if self.max_contacts < 2 {
            return Err(ConfigError::Invalid(format!(
                "max_contacts must be at least 2, got {}",
                self.max_contacts
            )));
        }
        Ok(())
    }

    /// Clamps a raw distance ratio into the configured scale bounds.
    pub fn clamp_scale(&self, ratio: f64) -> f64 {
        if ratio > self.max_scale {
            self.max_scale
        } else if ratio < self.min_scale {
            self.min_scale
        } else {
            ratio
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = GestureConfig::default();
        assert_eq!(cfg.min_scale, 1.0);
        assert_eq!(cfg.max_scale, 3.0);
        assert_eq!(cfg.jitter_threshold, 10.0);
        assert_eq!(cfg.double_tap_scale, 1.5);
        assert_eq!(cfg.max_contacts, 2);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let cfg = GestureConfig::from_json(r#"{"max_scale": 4.0}"#).unwrap();
        assert_eq!(cfg.max_scale, 4.0);
        assert_eq!(cfg.min_scale, 1.0);
        assert_eq!(cfg.jitter_threshold, 10.0);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            GestureConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        let inverted = GestureConfig {
            min_scale: 2.0,
            max_scale: 1.0,
            double_tap_scale: 1.5,
            ..Default::default()
        };
        assert!(matches!(inverted.validate(), Err(ConfigError::Invalid(_))));

        let tap_out_of_range = GestureConfig {
            double_tap_scale: 5.0,
            ..Default::default()
        };
        assert!(tap_out_of_range.validate().is_err());

        let nan = GestureConfig {
            jitter_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());

        let one_finger = GestureConfig {
            max_contacts: 1,
            ..Default::default()
        };
        assert!(one_finger.validate().is_err());
    }

    #[test]
    fn test_clamp_scale() {
        let cfg = GestureConfig::default();
        assert_eq!(cfg.clamp_scale(3.5), 3.0);
        assert_eq!(cfg.clamp_scale(0.2), 1.0);
        assert_eq!(cfg.clamp_scale(2.25), 2.25);
    }
}
