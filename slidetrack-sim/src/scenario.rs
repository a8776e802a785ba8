//! Scenario scripts
//!
//! ```toml
//! viewport_width = 1200
//! cards = 6
//! gap = "20px"
//! images_pending = 1
//!
//! [[events]]
//! type = "image_loaded"
//!
//! [[events]]
//! type = "key"
//! key = "ArrowRight"
//!
//! [[events]]
//! type = "resize"
//! width = 650
//!
//! [[events]]
//! type = "wait"
//! ms = 120
//! ```

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use slidetrack_core::FocusContext;

use crate::error::LoadError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    pub viewport_width: f32,
    pub cards: usize,
    /// Computed `gap` of the track. Left unset, the style reads as
    /// unavailable and the configured default applies.
    #[serde(default)]
    pub gap: Option<String>,
    /// Card images still loading when the page binds.
    #[serde(default)]
    pub images_pending: usize,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Scenario {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| LoadError::Scenario {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Where keyboard focus sits when a key event is dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    #[default]
    Document,
    Carousel,
    Editable,
    Control,
}

impl From<Focus> for FocusContext {
    fn from(focus: Focus) -> Self {
        match focus {
            Focus::Document => FocusContext::Document,
            Focus::Carousel => FocusContext::Carousel,
            Focus::Editable => FocusContext::EditableControl,
            Focus::Control => FocusContext::OtherControl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Next,
    Previous,
    Key {
        key: String,
        #[serde(default)]
        focus: Focus,
    },
    TouchStart {
        x: f32,
    },
    TouchMove {
        x: f32,
    },
    TouchEnd,
    TouchCancel,
    ImageLoaded,
    /// A card image failed to load; it settles the same as a load.
    ImageFailed,
    Resize {
        width: f32,
    },
    Wait {
        ms: u64,
    },
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("previous"),
            Self::Key { key, .. } => write!(f, "key {key}"),
            Self::TouchStart { x } => write!(f, "touch_start {x}"),
            Self::TouchMove { x } => write!(f, "touch_move {x}"),
            Self::TouchEnd => f.write_str("touch_end"),
            Self::TouchCancel => f.write_str("touch_cancel"),
            Self::ImageLoaded => f.write_str("image_loaded"),
            Self::ImageFailed => f.write_str("image_failed"),
            Self::Resize { width } => write!(f, "resize {width}"),
            Self::Wait { ms } => write!(f, "wait {ms}ms"),
        }
    }
}
