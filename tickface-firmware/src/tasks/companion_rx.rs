//! Companion UART receive task
//!
//! Receives frames from the companion link and queues their AppMessage
//! payloads for the app task.

use defmt::*;
use embassy_rp::uart::BufferedUart;
use embedded_io_async::Read;

use tickface_protocol::{Frame, FrameParser, FrameType};

use crate::channels::{Payload, INBOX_CHANNEL};

/// Buffer size for UART reads
const RX_BUF_SIZE: usize = 64;

/// Companion RX task - receives and parses frames from the companion link
#[embassy_executor::task]
pub async fn companion_rx_task(mut uart: BufferedUart) {
    info!("Companion RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match uart.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => handle_frame(frame),
                        Ok(None) => {}
                        Err(e) => {
                            warn!("Frame parse error: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Route a complete frame
fn handle_frame(frame: Frame) {
    match frame.kind() {
        Some(FrameType::AppMessage) => {
            debug!("AppMessage frame, {} bytes", frame.payload.len());
            let payload: Payload = frame.payload;
            // Never block the UART reader
            if INBOX_CHANNEL.try_send(payload).is_err() {
                warn!("Inbox channel full, dropping message");
            }
        }
        None => {
            warn!("Unknown frame type {=u8:#x}", frame.frame_type);
        }
    }
}
