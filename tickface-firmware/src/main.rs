//! Tickface - Watchface Firmware
//!
//! Main firmware binary for RP2040-based boards with an SH1106 OLED.
//! A companion app pushes colors and two toggles over UART; the settings
//! are kept in flash and shown as two status labels.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, UART0};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tickface_core::App;
use tickface_display::Screen;
use tickface_hal_rp2040::flash::Rp2040FlashStorage;

mod channels;
mod config;
mod render;
mod sh1106;
mod tasks;

use crate::config::{
    app_config, COMPANION_BAUD_RATE, DISPLAY_HEIGHT, DISPLAY_I2C_ADDRESS, DISPLAY_WIDTH,
};
use crate::sh1106::Sh1106;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// UART ring buffer size in each direction
const UART_BUF_SIZE: usize = 128;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; UART_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tickface firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Settings partition at the end of the on-board flash
    let storage = Rp2040FlashStorage::new(p.FLASH, p.DMA_CH0);

    // Start the app: load settings, open the inbox, push the window
    let (app, startup) = App::init(
        storage,
        Screen::new(DISPLAY_WIDTH, DISPLAY_HEIGHT),
        &app_config(),
    )
    .await;
    tasks::app::log_startup(&startup);
    info!("Settings: {:?}", app.settings());

    // Setup UART for the companion link (GPIO0 TX, GPIO1 RX)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = COMPANION_BAUD_RATE;

    let tx_buf = TX_BUF.init([0u8; UART_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; UART_BUF_SIZE]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);

    info!("UART initialized at {} baud", COMPANION_BAUD_RATE);

    // Setup I2C for the OLED (GPIO5 SCL, GPIO4 SDA)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = 400_000;
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);
    let display = Sh1106::new(i2c, DISPLAY_I2C_ADDRESS);

    info!("I2C initialized, OLED at {=u8:#x}", DISPLAY_I2C_ADDRESS);

    // Spawn tasks
    spawner.spawn(tasks::display_task(display)).unwrap();
    spawner.spawn(tasks::app_task(app)).unwrap();
    spawner.spawn(tasks::companion_rx_task(uart)).unwrap();

    info!("All tasks spawned, firmware running");
}
