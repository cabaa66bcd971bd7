use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    #[default]
    GlowGradient,
    FireGradient,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown palette '{0}', expected one of: glow, fire")]
pub struct UnknownColourMapKind(pub String);

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::GlowGradient, Self::FireGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::GlowGradient => "Glow gradient",
            Self::FireGradient => "Fire gradient",
        }
    }

    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::GlowGradient => "glow",
            Self::FireGradient => "fire",
        }
    }
}

impl fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for MandelbrotColourMapKinds {
    type Err = UnknownColourMapKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.cli_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownColourMapKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_names() {
        assert_eq!("glow".parse::<MandelbrotColourMapKinds>(), Ok(MandelbrotColourMapKinds::GlowGradient));
        assert_eq!(" Fire ".parse::<MandelbrotColourMapKinds>(), Ok(MandelbrotColourMapKinds::FireGradient));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "rainbow".parse::<MandelbrotColourMapKinds>(),
            Err(UnknownColourMapKind("rainbow".to_string()))
        );
    }
}
