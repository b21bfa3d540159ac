//! Board-agnostic core logic for the watchface
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Settings record, its persisted encoding, and the settings store
//! - Message receiver applying companion messages to the settings
//! - Display projection and the watchface window
//! - Inbox and app lifecycle wiring the above together
//!
//! Everything is single-threaded: one inbound message is applied, saved
//! and projected before the next one is looked at.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod display;
pub mod receiver;
pub mod settings;
pub mod traits;

#[cfg(test)]
mod testing;

pub use app::{App, AppState, InboxDrop, ReceiveError, Startup};
pub use config::{AppConfig, ChannelConfig};
pub use settings::{LoadOutcome, Settings, SettingsStore, StoreError};
pub use traits::DisplayUpdater;
