//! Message receiver
//!
//! Applies an inbound [`SettingsMessage`] to the settings record and
//! persists the result. Absent attributes leave their field untouched.

use tickface_display::Color;
use tickface_hal::FlashStorage;
use tickface_protocol::SettingsMessage;

use crate::settings::{Settings, SettingsStore, StoreError};
use crate::traits::DisplayUpdater;

/// Boolean interpretation of an integer attribute
///
/// Only exactly 1 counts as true.
#[inline]
pub fn is_truthy(value: i32) -> bool {
    value == 1
}

/// Overwrite the fields present in `message`
pub fn apply(settings: &mut Settings, message: &SettingsMessage) {
    if let Some(hex) = message.background_color {
        settings.background_color = Color::from_hex(hex);
    }
    if let Some(hex) = message.foreground_color {
        settings.foreground_color = Color::from_hex(hex);
    }
    if let Some(value) = message.second_tick {
        settings.second_tick = is_truthy(value);
    }
    if let Some(value) = message.animations {
        settings.animations = is_truthy(value);
    }
}

/// Apply a message and save
///
/// Saves exactly once per message, recognized keys or not, so every
/// message costs one write and one refresh.
pub async fn handle_message<S, D>(
    store: &mut SettingsStore<S>,
    display: &mut D,
    message: &SettingsMessage,
) -> Result<(), StoreError>
where
    S: FlashStorage,
    D: DisplayUpdater + ?Sized,
{
    apply(store.settings_mut(), message);
    store.save(display).await
}
