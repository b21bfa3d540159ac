//! Watchface app task
//!
//! Owns the [`App`] and handles one inbound payload at a time. After each
//! message the window is copied into the shared screen buffer for the
//! display task.

use defmt::*;

use tickface_core::{App, LoadOutcome, ReceiveError, Startup};
use tickface_display::Screen;
use tickface_hal_rp2040::flash::Rp2040FlashStorage;

use crate::channels::{INBOX_CHANNEL, SCREEN_BUFFER, SCREEN_UPDATE};

/// The firmware's app instance
pub type WatchApp = App<Rp2040FlashStorage<'static>, Screen>;

/// Log what happened while starting the app
pub fn log_startup(startup: &Startup) {
    if startup.settings.is_restored() {
        info!("Settings restored from flash");
    } else {
        match startup.settings {
            LoadOutcome::SizeMismatch => {
                warn!("Stored settings have the wrong size, using defaults")
            }
            LoadOutcome::VersionMismatch => {
                warn!("Stored settings version unknown, using defaults")
            }
            LoadOutcome::ReadFailed(e) => error!("Settings read failed: {:?}, using defaults", e),
            _ => info!("No stored settings, using defaults"),
        }
    }

    if let Err(e) = startup.window {
        error!("Window load failed: {:?}", e);
    }
}

/// App task - applies companion messages in arrival order
#[embassy_executor::task]
pub async fn app_task(mut app: WatchApp) {
    info!("App task started");

    publish(&app).await;

    loop {
        let payload = INBOX_CHANNEL.receive().await;

        match app.receive(&payload).await {
            Ok(applied) => {
                debug!("Applied {:?}", applied);
            }
            Err(ReceiveError::Dropped(reason)) => {
                warn!("Message dropped: {:?}", reason);
                continue;
            }
            Err(ReceiveError::Store(e)) => {
                // The new settings stay in memory and on screen
                warn!("Settings save failed: {:?}", e);
            }
        }

        trace!("Settings now {:?}", app.settings());
        publish(&app).await;
    }
}

/// Copy the window into the shared buffer and wake the display task
async fn publish(app: &WatchApp) {
    {
        let mut screen = SCREEN_BUFFER.lock().await;
        screen.clone_from(app.window().backend());
        screen.mark_dirty();
    }
    SCREEN_UPDATE.signal(());
}
