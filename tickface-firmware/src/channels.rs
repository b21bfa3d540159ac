//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use heapless::Vec;

use tickface_display::Screen;
use tickface_protocol::MAX_PAYLOAD_SIZE;

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Channel capacity for inbound message payloads
const INBOX_CHANNEL_SIZE: usize = 4;

/// One AppMessage payload as received from the companion link
pub type Payload = Vec<u8, MAX_PAYLOAD_SIZE>;

/// AppMessage payloads from the companion UART, in arrival order
pub static INBOX_CHANNEL: Channel<CriticalSectionRawMutex, Payload, INBOX_CHANNEL_SIZE> =
    Channel::new();

/// Latest window snapshot published by the app task
pub static SCREEN_BUFFER: Mutex<CriticalSectionRawMutex, Screen> =
    Mutex::new(Screen::new(DISPLAY_WIDTH, DISPLAY_HEIGHT));

/// Signal that a new screen snapshot is ready to be drawn
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
