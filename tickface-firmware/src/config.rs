//! Board configuration
//!
//! Constants generated by build.rs from watchface.toml.

use tickface_core::{AppConfig, ChannelConfig};

include!(concat!(env!("OUT_DIR"), "/watchface_config.rs"));

/// Runtime app configuration built from the board constants
pub fn app_config() -> AppConfig {
    AppConfig {
        channel: ChannelConfig {
            inbox_size: INBOX_SIZE,
            outbox_size: OUTBOX_SIZE,
        },
    }
}
