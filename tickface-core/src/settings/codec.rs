//! Persisted settings encoding
//!
//! Fixed-order, fixed-width layout:
//!
//! ```text
//! ┌─────────┬────────────┬────────────┬─────────────┬────────────┐
//! │ VERSION │ BACKGROUND │ FOREGROUND │ SECOND_TICK │ ANIMATIONS │
//! │ 1B      │ 1B ARGB    │ 1B ARGB    │ 1B (0/1)    │ 1B (0/1)   │
//! └─────────┴────────────┴────────────┴─────────────┴────────────┘
//! ```
//!
//! There is no migration: a blob of another size or version is rejected
//! and the caller keeps its defaults.

use tickface_display::Color;

use super::record::Settings;

/// Current blob format version
pub const SETTINGS_VERSION: u8 = 1;

/// Encoded size in bytes
pub const SETTINGS_BLOB_SIZE: usize = 5;

/// Reasons a stored blob cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodecError {
    /// Blob is not [`SETTINGS_BLOB_SIZE`] bytes
    SizeMismatch { len: usize },
    /// Blob was written by another format version
    VersionMismatch { found: u8 },
}

/// Encode settings into their persisted form
pub fn encode(settings: &Settings) -> [u8; SETTINGS_BLOB_SIZE] {
    [
        SETTINGS_VERSION,
        settings.background_color.argb(),
        settings.foreground_color.argb(),
        settings.second_tick as u8,
        settings.animations as u8,
    ]
}

/// Decode a persisted blob
///
/// Any nonzero flag byte reads as `true`.
pub fn decode(bytes: &[u8]) -> Result<Settings, CodecError> {
    let [version, background, foreground, second_tick, animations] = *bytes else {
        return Err(CodecError::SizeMismatch { len: bytes.len() });
    };
    if version != SETTINGS_VERSION {
        return Err(CodecError::VersionMismatch { found: version });
    }

    Ok(Settings {
        background_color: Color::from_argb(background),
        foreground_color: Color::from_argb(foreground),
        second_tick: second_tick != 0,
        animations: animations != 0,
    })
}
