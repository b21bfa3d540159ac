//! Inbound message channel
//!
//! Gatekeeper between raw companion payloads and the receiver: rejects
//! anything larger than the configured inbox or not a valid dictionary.

use tickface_protocol::{Dictionary, DictionaryError};

use crate::config::ChannelConfig;

/// Why an inbound payload was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InboxDrop {
    /// The channel has not been opened
    NotOpen,
    /// Payload exceeds the inbox size
    BufferOverflow { size: usize, capacity: usize },
    /// Payload is not a valid dictionary
    Malformed(DictionaryError),
}

impl From<DictionaryError> for InboxDrop {
    fn from(e: DictionaryError) -> Self {
        InboxDrop::Malformed(e)
    }
}

/// Inbound side of the companion channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inbox {
    config: Option<ChannelConfig>,
}

impl Inbox {
    /// A closed inbox
    pub const fn closed() -> Self {
        Self { config: None }
    }

    /// Open with the given buffer sizes
    pub fn open(&mut self, config: ChannelConfig) {
        self.config = Some(config);
    }

    pub fn close(&mut self) {
        self.config = None;
    }

    pub fn is_open(&self) -> bool {
        self.config.is_some()
    }

    /// Buffer sizes, if open
    pub fn config(&self) -> Option<ChannelConfig> {
        self.config
    }

    /// Accept a payload and decode it
    pub fn receive<'a>(&self, bytes: &'a [u8]) -> Result<Dictionary<'a>, InboxDrop> {
        let config = self.config.ok_or(InboxDrop::NotOpen)?;
        if bytes.len() > config.inbox_size {
            return Err(InboxDrop::BufferOverflow {
                size: bytes.len(),
                capacity: config.inbox_size,
            });
        }
        Ok(Dictionary::parse(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickface_protocol::DictionaryBuilder;

    fn open_inbox() -> Inbox {
        let mut inbox = Inbox::closed();
        inbox.open(ChannelConfig::default());
        inbox
    }

    #[test]
    fn test_closed_inbox_drops() {
        let inbox = Inbox::closed();
        assert_eq!(inbox.receive(&[0]), Err(InboxDrop::NotOpen));
    }

    #[test]
    fn test_accepts_dictionary() {
        let mut builder = DictionaryBuilder::<64>::new();
        builder.push_int(10002, 1).unwrap();
        let bytes = builder.finish().unwrap();

        let dict = open_inbox().receive(&bytes).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.find(10002).map(|t| t.as_i32()), Some(1));
    }

    #[test]
    fn test_payload_at_capacity_accepted() {
        let mut builder = DictionaryBuilder::<128>::new();
        // 1 count byte + 7-byte header + 120-byte value = 128
        builder.push_bytes(1, &[0u8; 120]).unwrap();
        let bytes = builder.finish().unwrap();
        assert_eq!(bytes.len(), 128);

        assert!(open_inbox().receive(&bytes).is_ok());
    }

    #[test]
    fn test_oversize_payload_dropped() {
        let bytes = [0u8; 129];
        assert_eq!(
            open_inbox().receive(&bytes),
            Err(InboxDrop::BufferOverflow {
                size: 129,
                capacity: 128
            })
        );
    }

    #[test]
    fn test_malformed_payload_dropped() {
        // Claims one tuple but carries none
        assert_eq!(
            open_inbox().receive(&[1]),
            Err(InboxDrop::Malformed(DictionaryError::Truncated))
        );
    }

    #[test]
    fn test_close() {
        let mut inbox = open_inbox();
        inbox.close();
        assert!(!inbox.is_open());
        assert_eq!(inbox.config(), None);
    }
}
