//! Message keys shared with the companion app
//!
//! Keys are assigned sequentially from 10000 in the order the companion
//! configuration page declares them. Both sides must agree on the numbers.

/// First auto-assigned message key
pub const MESSAGE_KEY_BASE: u32 = 10000;

/// Keys of the settings attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum MessageKey {
    /// Background color, 0xRRGGBB
    BackgroundColor = MESSAGE_KEY_BASE,
    /// Foreground (text) color, 0xRRGGBB
    ForegroundColor = MESSAGE_KEY_BASE + 1,
    /// Seconds toggle, 1 = enabled
    SecondTick = MESSAGE_KEY_BASE + 2,
    /// Animations toggle, 1 = enabled
    Animations = MESSAGE_KEY_BASE + 3,
}

impl MessageKey {
    /// All keys in declaration order
    pub const ALL: [MessageKey; 4] = [
        MessageKey::BackgroundColor,
        MessageKey::ForegroundColor,
        MessageKey::SecondTick,
        MessageKey::Animations,
    ];

    /// Wire value of the key
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Look up a key by its wire value
    pub fn from_u32(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_u32() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_values() {
        assert_eq!(MessageKey::BackgroundColor.as_u32(), 10000);
        assert_eq!(MessageKey::ForegroundColor.as_u32(), 10001);
        assert_eq!(MessageKey::SecondTick.as_u32(), 10002);
        assert_eq!(MessageKey::Animations.as_u32(), 10003);
    }

    #[test]
    fn test_from_u32() {
        for key in MessageKey::ALL {
            assert_eq!(MessageKey::from_u32(key.as_u32()), Some(key));
        }
        assert_eq!(MessageKey::from_u32(9999), None);
        assert_eq!(MessageKey::from_u32(10004), None);
    }
}
