//! Companion Link Protocol
//!
//! This crate defines how settings travel from the companion app to the
//! watch. The companion sends AppMessage dictionaries; on the firmware's
//! UART link each dictionary rides inside a small binary frame.
//!
//! # Frame
//!
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–250B      │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! # Dictionary
//!
//! A count byte followed by keyed tuples; see [`dictionary`]. The settings
//! attributes use the keys in [`MessageKey`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod dictionary;
pub mod frame;
pub mod keys;
pub mod settings;

pub use dictionary::{
    Dictionary, DictionaryBuilder, DictionaryError, Tuple, TupleType, TupleValue,
};
pub use frame::{
    Frame, FrameError, FrameParser, FrameType, FRAME_START, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE,
};
pub use keys::MessageKey;
pub use settings::SettingsMessage;
