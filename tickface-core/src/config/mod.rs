//! Runtime configuration
//!
//! Board-level values (baud rates, display wiring) live in the firmware's
//! build-time config; this module only carries what the core needs.

/// Default inbound channel capacity in bytes
pub const DEFAULT_INBOX_SIZE: usize = 128;

/// Default outbound channel capacity in bytes
pub const DEFAULT_OUTBOX_SIZE: usize = 128;

/// Buffer sizes of the companion message channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelConfig {
    /// Largest inbound dictionary accepted, in bytes
    pub inbox_size: usize,
    /// Outbound capacity; reserved, nothing is ever sent
    pub outbox_size: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            inbox_size: DEFAULT_INBOX_SIZE,
            outbox_size: DEFAULT_OUTBOX_SIZE,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AppConfig {
    pub channel: ChannelConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_channel_sizes() {
        let config = AppConfig::default();
        assert_eq!(config.channel.inbox_size, 128);
        assert_eq!(config.channel.outbox_size, 128);
    }
}
