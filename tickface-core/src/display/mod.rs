//! Display projection
//!
//! Maps the settings record onto the window: background colors, text
//! colors, and the two status labels.

pub mod window;

use tickface_display::{DisplayError, LayerId, WindowBackend};

use crate::settings::Settings;

pub use window::{label_frames, WatchWindow, WindowState, LABEL_HEIGHT};

pub const SECONDS_ENABLED: &str = "seconds: enabled";
pub const SECONDS_DISABLED: &str = "seconds: disabled";
pub const ANIMATIONS_ENABLED: &str = "animations: enabled";
pub const ANIMATIONS_DISABLED: &str = "animations: disabled";

/// The two status text layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Labels {
    pub second_tick: LayerId,
    pub animations: LayerId,
}

/// Seconds label text for a toggle value
pub fn second_tick_text(enabled: bool) -> &'static str {
    if enabled {
        SECONDS_ENABLED
    } else {
        SECONDS_DISABLED
    }
}

/// Animations label text for a toggle value
pub fn animations_text(enabled: bool) -> &'static str {
    if enabled {
        ANIMATIONS_ENABLED
    } else {
        ANIMATIONS_DISABLED
    }
}

/// Project the settings onto a backend
///
/// Without labels only the window background is touched.
pub fn project<B: WindowBackend + ?Sized>(
    settings: &Settings,
    backend: &mut B,
    labels: Option<&Labels>,
) -> Result<(), DisplayError> {
    backend.set_window_background(settings.background_color);

    let Some(labels) = labels else {
        return Ok(());
    };

    let texts = [
        (labels.second_tick, second_tick_text(settings.second_tick)),
        (labels.animations, animations_text(settings.animations)),
    ];
    for (layer, text) in texts {
        backend.set_layer_background(layer, settings.background_color)?;
        backend.set_text_color(layer, settings.foreground_color)?;
        backend.set_text(layer, text)?;
    }
    Ok(())
}
