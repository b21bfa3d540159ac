//! Tickface Hardware Abstraction Layer
//!
//! This crate defines the storage abstraction that chip-specific HALs
//! implement with their flash memory, so the watchface core can load and
//! save its settings without knowing which board it runs on.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (tickface-core, firmware)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tickface-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ tickface-hal- │       │  RamStorage   │
//! │    rp2040     │       │ (host / test) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`flash::FlashStorage`] - Persistent key-value storage

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod flash;
pub mod ram;

// Re-export key types at crate root for convenience
pub use flash::{FlashError, FlashStorage, StorageKey};
pub use ram::RamStorage;
