//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod app;
pub mod companion_rx;
pub mod display;

pub use app::app_task;
pub use companion_rx::companion_rx_task;
pub use display::display_task;
