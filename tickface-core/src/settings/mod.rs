//! Watchface settings
//!
//! The four-field settings record, its persisted encoding, and the store
//! that loads and saves it.

pub mod codec;
pub mod record;
pub mod store;

pub use codec::{CodecError, SETTINGS_BLOB_SIZE, SETTINGS_VERSION};
pub use record::Settings;
pub use store::{LoadOutcome, SettingsStore, StoreError};
