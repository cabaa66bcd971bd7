#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const LIGHT_BLUE: Self = Self { r: 173, g: 216, b: 230 };

    /// Converts HSL to RGB. `hue` is in degrees and wraps, `saturation` and
    /// `lightness` are fractions in `[0, 1]`.
    #[must_use]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let hue = hue.rem_euclid(360.0);
        let saturation = saturation.clamp(0.0, 1.0);
        let lightness = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = lightness - chroma / 2.0;

        let (r, g, b) = if hue < 60.0 {
            (chroma, x, 0.0)
        } else if hue < 120.0 {
            (x, chroma, 0.0)
        } else if hue < 180.0 {
            (0.0, chroma, x)
        } else if hue < 240.0 {
            (0.0, x, chroma)
        } else if hue < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        Self {
            r: to_channel(r + m),
            g: to_channel(g + m),
            b: to_channel(b + m),
        }
    }

    /// Largest per-channel difference between two colours.
    #[must_use]
    pub fn max_channel_distance(&self, other: &Self) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(Colour::from_hsl(0.0, 1.0, 0.5), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(Colour::from_hsl(120.0, 1.0, 0.5), Colour { r: 0, g: 255, b: 0 });
        assert_eq!(Colour::from_hsl(240.0, 1.0, 0.5), Colour { r: 0, g: 0, b: 255 });
    }

    #[test]
    fn test_hue_wraps_past_360() {
        assert_eq!(Colour::from_hsl(360.0, 1.0, 0.5), Colour::from_hsl(0.0, 1.0, 0.5));
        assert_eq!(Colour::from_hsl(480.0, 1.0, 0.5), Colour::from_hsl(120.0, 1.0, 0.5));
    }

    #[test]
    fn test_lightness_extremes() {
        assert_eq!(Colour::from_hsl(200.0, 1.0, 0.0), Colour::BLACK);
        assert_eq!(Colour::from_hsl(200.0, 1.0, 1.0), Colour { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn test_max_channel_distance() {
        let a = Colour { r: 10, g: 200, b: 30 };
        let b = Colour { r: 15, g: 180, b: 30 };

        assert_eq!(a.max_channel_distance(&b), 20);
        assert_eq!(a.max_channel_distance(&a), 0);
    }
}
