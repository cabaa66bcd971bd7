pub const DEFAULT_INSTANT_ZOOM_FACTOR: f64 = 0.5;
pub const DEFAULT_ANIMATED_ZOOM_FACTOR: f64 = 0.9;
pub const DEFAULT_ANIMATED_ZOOM_STEPS: u32 = 10;
pub const DEFAULT_MIN_PRECISION_FLOOR: f64 = 1e-10;

/// Tuning for both zoom modes. Factors below 1 zoom in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSettings {
    pub instant_zoom_factor: f64,
    /// Shrink applied per animation step; a whole session shrinks by
    /// `animated_zoom_factor ^ animated_zoom_steps`.
    pub animated_zoom_factor: f64,
    pub animated_zoom_steps: u32,
    /// Smallest plane extent an animated session may produce.
    pub min_precision_floor: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            instant_zoom_factor: DEFAULT_INSTANT_ZOOM_FACTOR,
            animated_zoom_factor: DEFAULT_ANIMATED_ZOOM_FACTOR,
            animated_zoom_steps: DEFAULT_ANIMATED_ZOOM_STEPS,
            min_precision_floor: DEFAULT_MIN_PRECISION_FLOOR,
        }
    }
}

impl ZoomSettings {
    /// Total shrink of one animated session.
    #[must_use]
    pub fn animated_total_factor(&self) -> f64 {
        self.animated_zoom_factor.powf(f64::from(self.animated_zoom_steps))
    }
}
