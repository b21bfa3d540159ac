//! Typed view of a settings message
//!
//! Pulls the four settings attributes out of a dictionary as raw 32-bit
//! integers. Interpreting them (color conversion, truthiness) is up to
//! the receiver.

use heapless::Vec;

use crate::dictionary::{Dictionary, DictionaryBuilder, DictionaryError};
use crate::keys::MessageKey;

/// Settings attributes present in one inbound message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettingsMessage {
    pub background_color: Option<i32>,
    pub foreground_color: Option<i32>,
    pub second_tick: Option<i32>,
    pub animations: Option<i32>,
}

impl SettingsMessage {
    /// Extract the settings attributes from a dictionary
    ///
    /// Tuples with other keys are ignored.
    pub fn from_dictionary(dict: &Dictionary<'_>) -> Self {
        let field = |key: MessageKey| dict.find(key.as_u32()).map(|t| t.as_i32());
        Self {
            background_color: field(MessageKey::BackgroundColor),
            foreground_color: field(MessageKey::ForegroundColor),
            second_tick: field(MessageKey::SecondTick),
            animations: field(MessageKey::Animations),
        }
    }

    /// Whether no settings attribute is present
    pub fn is_empty(&self) -> bool {
        self.background_color.is_none()
            && self.foreground_color.is_none()
            && self.second_tick.is_none()
            && self.animations.is_none()
    }

    /// Encode the present attributes as int32 tuples
    pub fn to_dictionary<const N: usize>(&self) -> Result<Vec<u8, N>, DictionaryError> {
        let mut builder = DictionaryBuilder::<N>::new();
        let fields = [
            (MessageKey::BackgroundColor, self.background_color),
            (MessageKey::ForegroundColor, self.foreground_color),
            (MessageKey::SecondTick, self.second_tick),
            (MessageKey::Animations, self.animations),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                builder.push_int(key.as_u32(), value)?;
            }
        }
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unknown_keys_ignored() {
        let mut builder = DictionaryBuilder::<64>::new();
        builder
            .push_int(1, 5)
            .unwrap()
            .push_int(MessageKey::SecondTick.as_u32(), 1)
            .unwrap();
        let bytes = builder.finish().unwrap();
        let dict = Dictionary::parse(&bytes).unwrap();

        let msg = SettingsMessage::from_dictionary(&dict);
        assert_eq!(
            msg,
            SettingsMessage {
                second_tick: Some(1),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_empty_message() {
        let dict = Dictionary::parse(&[0]).unwrap();
        let msg = SettingsMessage::from_dictionary(&dict);
        assert!(msg.is_empty());
    }

    #[test]
    fn test_toggle_sent_as_uint8() {
        let mut builder = DictionaryBuilder::<32>::new();
        builder.push_u8(MessageKey::Animations.as_u32(), 1).unwrap();
        let bytes = builder.finish().unwrap();
        let dict = Dictionary::parse(&bytes).unwrap();

        let msg = SettingsMessage::from_dictionary(&dict);
        assert_eq!(msg.animations, Some(1));
    }

    fn any_field() -> impl Strategy<Value = Option<i32>> {
        proptest::option::of(any::<i32>())
    }

    proptest! {
        #[test]
        fn prop_dictionary_preserves_fields(
            bg in any_field(),
            fg in any_field(),
            tick in any_field(),
            anim in any_field(),
        ) {
            let msg = SettingsMessage {
                background_color: bg,
                foreground_color: fg,
                second_tick: tick,
                animations: anim,
            };
            let bytes = msg.to_dictionary::<64>().unwrap();
            let dict = Dictionary::parse(&bytes).unwrap();
            prop_assert_eq!(SettingsMessage::from_dictionary(&dict), msg);
        }
    }
}
