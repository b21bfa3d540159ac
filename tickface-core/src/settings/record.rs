//! Settings record

use tickface_display::Color;

/// Preferences pushed from the companion app
///
/// All four fields are always populated; [`Settings::DEFAULT`] is what a
/// watch with nothing persisted shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Window and label background
    pub background_color: Color,
    /// Label text color
    pub foreground_color: Color,
    /// Seconds label toggle
    pub second_tick: bool,
    /// Animations label toggle
    pub animations: bool,
}

impl Settings {
    /// Black background, white text, both toggles off
    pub const DEFAULT: Settings = Settings {
        background_color: Color::BLACK,
        foreground_color: Color::WHITE,
        second_tick: false,
        animations: false,
    };
}

impl Default for Settings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.background_color, Color::BLACK);
        assert_eq!(settings.foreground_color, Color::WHITE);
        assert!(!settings.second_tick);
        assert!(!settings.animations);
    }
}
