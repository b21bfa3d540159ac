//! OLED display task
//!
//! Redraws the panel from the shared screen buffer whenever the app task
//! publishes a new snapshot.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;

use crate::channels::{SCREEN_BUFFER, SCREEN_UPDATE};
use crate::render::render;
use crate::sh1106::Sh1106;

/// The board's OLED
pub type Oled = Sh1106<I2c<'static, I2C0, Async>>;

/// Display task - renders screen snapshots
#[embassy_executor::task]
pub async fn display_task(mut display: Oled) {
    info!("Display task started");

    if let Err(e) = display.init().await {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
    }

    loop {
        SCREEN_UPDATE.wait().await;

        {
            let mut screen = SCREEN_BUFFER.lock().await;
            if !screen.is_dirty() {
                continue;
            }
            // Drawing into the frame buffer cannot fail
            let _ = render(&screen, &mut display);
            screen.mark_clean();
        }

        if let Err(e) = display.flush().await {
            warn!("Display flush failed: {:?}", e);
        } else {
            trace!("Display updated");
        }
    }
}
