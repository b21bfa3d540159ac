//! RP2040-specific HAL for the watchface firmware
//!
//! Provides the RP2040 implementation of the shared `tickface-hal`
//! storage trait: a wear-leveled settings partition at the end of the
//! on-board QSPI flash.

#![no_std]

pub mod flash;

// Re-export shared traits from tickface-hal for convenience
pub use tickface_hal::{FlashStorage as FlashStorageTrait, StorageKey};
