use std::fmt;

use thiserror::Error;

/// Structural pieces of the page a carousel binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    Track,
    Viewport,
    PrevControl,
    NextControl,
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Track => write!(f, "track"),
            Self::Viewport => write!(f, "viewport"),
            Self::PrevControl => write!(f, "previous control"),
            Self::NextControl => write!(f, "next control"),
        }
    }
}

/// Failures reading from the host surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("style property `{0}` is unavailable")]
    StyleUnavailable(String),
}

/// Reasons a carousel declines to bind. Hosts treat every variant as a silent
/// no-op: nothing is attached and nothing is rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("carousel has no cards")]
    NoCards,

    #[error("required element missing: {0}")]
    MissingElement(ElementRole),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
