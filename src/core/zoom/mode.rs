use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomMode {
    /// Jump straight to the zoomed viewport.
    #[default]
    Instant,
    /// Interpolate towards the zoomed viewport over several ticks.
    Animated,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown zoom mode '{0}', expected 'instant' or 'animated'")]
pub struct UnknownZoomMode(pub String);

impl ZoomMode {
    pub const ALL: &'static [Self] = &[Self::Instant, Self::Animated];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Instant => "instant",
            Self::Animated => "animated",
        }
    }
}

impl fmt::Display for ZoomMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoomMode {
    type Err = UnknownZoomMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instant" => Ok(Self::Instant),
            "animated" => Ok(Self::Animated),
            other => Err(UnknownZoomMode(other.to_string())),
        }
    }
}
