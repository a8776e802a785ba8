//! Carousel configuration
//!
//! Every field is optional when deserializing; missing values fall back to
//! the compiled constants in [`crate::constants`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{breakpoints, gap, resize, selectors, swipe};
use crate::error::ConfigError;

/// Viewport widths at which the visible card count changes.
///
/// Both thresholds are inclusive of the smaller tier: a viewport exactly
/// `single_max` wide shows one card, exactly `double_max` wide shows two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub single_max: f32,
    pub double_max: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            single_max: breakpoints::SINGLE_MAX,
            double_max: breakpoints::DOUBLE_MAX,
        }
    }
}

/// How far one previous/next activation moves the track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    /// One card per activation.
    #[default]
    Card,
    /// A full page (the current visible count) per activation.
    Page,
}

/// Which focus contexts arrow keys are honored in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardScope {
    /// Anywhere in the document, except while an unrelated editable control
    /// holds focus.
    #[default]
    Document,
    /// Only while focus is inside the carousel or on its controls.
    Carousel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    pub scope: KeyboardScope,
}

/// CSS selectors locating the carousel structure in a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub track: String,
    pub viewport: String,
    pub prev: String,
    pub next: String,
    pub card: String,
    /// Matched inside the track; each match gates the initial layout until it
    /// has loaded.
    pub image: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            track: selectors::TRACK.to_string(),
            viewport: selectors::VIEWPORT.to_string(),
            prev: selectors::PREV.to_string(),
            next: selectors::NEXT.to_string(),
            card: selectors::CARD.to_string(),
            image: selectors::IMAGE.to_string(),
        }
    }
}

/// Static configuration for one carousel instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub breakpoints: Breakpoints,
    /// Spacing used when the track's own gap style is unreadable.
    pub default_gap: f32,
    /// Fraction of a card width a swipe must travel to commit a step.
    pub swipe_threshold: f32,
    pub resize_debounce_ms: u64,
    pub step: StepMode,
    pub keyboard: KeyboardConfig,
    pub selectors: Selectors,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            default_gap: gap::DEFAULT_PX,
            swipe_threshold: swipe::COMMIT_FRACTION,
            resize_debounce_ms: resize::DEBOUNCE_MS,
            step: StepMode::default(),
            keyboard: KeyboardConfig::default(),
            selectors: Selectors::default(),
        }
    }
}

impl CarouselConfig {
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Reject configurations the controller cannot lay out consistently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bp = &self.breakpoints;
        if !(bp.single_max.is_finite() && bp.double_max.is_finite()) {
            return Err(ConfigError::invalid(
                "breakpoints",
                "thresholds must be finite",
            ));
        }
        if bp.single_max >= bp.double_max {
            return Err(ConfigError::invalid(
                "breakpoints",
                format!(
                    "single_max ({}) must be below double_max ({})",
                    bp.single_max, bp.double_max
                ),
            ));
        }
        if !(self.swipe_threshold > 0.0 && self.swipe_threshold <= 1.0) {
            return Err(ConfigError::invalid(
                "swipe_threshold",
                format!("{} is outside (0, 1]", self.swipe_threshold),
            ));
        }
        if !self.default_gap.is_finite() || self.default_gap < 0.0 {
            return Err(ConfigError::invalid(
                "default_gap",
                format!("{} is not a non-negative length", self.default_gap),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = CarouselConfig::default();
        assert_eq!(config.breakpoints.single_max, 600.0);
        assert_eq!(config.breakpoints.double_max, 900.0);
        assert_eq!(config.default_gap, 20.0);
        assert_eq!(config.resize_debounce(), Duration::from_millis(90));
        assert_eq!(config.step, StepMode::Card);
        assert_eq!(config.keyboard.scope, KeyboardScope::Document);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_missing_fields() {
        let config: CarouselConfig = serde_json::from_str(
            r#"{ "step": "page", "breakpoints": { "double_max": 1024 } }"#,
        )
        .unwrap();
        assert_eq!(config.step, StepMode::Page);
        assert_eq!(config.breakpoints.single_max, 600.0);
        assert_eq!(config.breakpoints.double_max, 1024.0);
        assert_eq!(config.selectors.track, ".cards");
    }

    #[test]
    fn keyboard_scope_parses_lowercase() {
        let config: CarouselConfig =
            serde_json::from_str(r#"{ "keyboard": { "scope": "carousel" } }"#)
                .unwrap();
        assert_eq!(config.keyboard.scope, KeyboardScope::Carousel);
    }

    #[test]
    fn validate_rejects_inverted_breakpoints() {
        let mut config = CarouselConfig::default();
        config.breakpoints.single_max = 900.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("breakpoints"));
    }

    #[test]
    fn validate_rejects_threshold_out_of_range() {
        let mut config = CarouselConfig::default();
        config.swipe_threshold = 0.0;
        assert!(config.validate().is_err());
        config.swipe_threshold = 1.5;
        assert!(config.validate().is_err());
        config.swipe_threshold = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_gap() {
        let mut config = CarouselConfig::default();
        config.default_gap = -4.0;
        assert!(config.validate().is_err());
    }
}
