//! Build script for tickface-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates watchface.toml and turns it into constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Largest frame payload the companion link can carry
const MAX_PAYLOAD_SIZE: i64 = 250;

/// SH1106 frame buffer size
const PANEL_WIDTH: i64 = 128;
const PANEL_HEIGHT: i64 = 64;

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated board settings
struct WatchfaceConfig {
    baud_rate: i64,
    inbox_size: i64,
    outbox_size: i64,
    i2c_address: i64,
    width: i64,
    height: i64,
}

/// Validate watchface.toml at compile time
fn validate_config() -> WatchfaceConfig {
    println!("cargo:rerun-if-changed=watchface.toml");

    let config_path = Path::new("watchface.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: watchface.toml not found!                                ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a watchface.toml configuration file.      ║\n\
            ║  Please create one in the tickface-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read watchface.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in watchface.toml                    ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let baud_rate = require_int(&config, "companion", "baud_rate", 1200, 921_600, &mut errors);
    let inbox_size =
        require_int(&config, "companion", "inbox_size", 1, MAX_PAYLOAD_SIZE, &mut errors);
    let outbox_size =
        require_int(&config, "companion", "outbox_size", 1, MAX_PAYLOAD_SIZE, &mut errors);
    let i2c_address = require_int(&config, "display", "i2c_address", 0x08, 0x77, &mut errors);
    let width = require_int(&config, "display", "width", 1, PANEL_WIDTH, &mut errors);
    let height = require_int(&config, "display", "height", 1, PANEL_HEIGHT, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid watchface configuration                          ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=watchface.toml validated successfully");

    WatchfaceConfig {
        baud_rate,
        inbox_size,
        outbox_size,
        i2c_address,
        width,
        height,
    }
}

/// Look up `[section] key` and check it is an integer in `min..=max`
///
/// Problems are pushed to `errors`; the returned value is only meaningful
/// when none were.
fn require_int(
    config: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) -> i64 {
    let table = match config.get(section) {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push(format!("[{}] must be a table", section));
            return 0;
        }
        None => {
            errors.push(format!("Missing [{}] section", section));
            return 0;
        }
    };

    match table.get(key) {
        Some(toml::Value::Integer(value)) if (min..=max).contains(value) => *value,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            0
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the validated values to OUT_DIR/watchface_config.rs
fn generate_config(config: &WatchfaceConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let source = format!(
        "// Generated from watchface.toml by build.rs\n\
         \n\
         /// Companion UART baud rate\n\
         pub const COMPANION_BAUD_RATE: u32 = {};\n\
         /// Largest inbound message in bytes\n\
         pub const INBOX_SIZE: usize = {};\n\
         /// Outbound message capacity in bytes\n\
         pub const OUTBOX_SIZE: usize = {};\n\
         /// OLED I2C address\n\
         pub const DISPLAY_I2C_ADDRESS: u8 = {:#04x};\n\
         /// Window width in pixels\n\
         pub const DISPLAY_WIDTH: i16 = {};\n\
         /// Window height in pixels\n\
         pub const DISPLAY_HEIGHT: i16 = {};\n",
        config.baud_rate,
        config.inbox_size,
        config.outbox_size,
        config.i2c_address,
        config.width,
        config.height,
    );
    fs::write(out_dir.join("watchface_config.rs"), source).unwrap();
}
