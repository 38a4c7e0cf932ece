//! Build script for detent-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates dial.toml and bakes it into the image as `DIAL_CONFIG`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use detent_core::config::{ConfigError, DialConfig, MAX_DEBOUNCE_MS};

fn main() {
    setup_linker();
    let config = load_config();
    write_config(&config);
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

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate dial.toml
fn load_config() -> DialConfig {
    // Re-run if dial.toml changes
    println!("cargo:rerun-if-changed=dial.toml");

    let config_path = Path::new("dial.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: dial.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a dial.toml configuration file            ║\n\
            ║  in the detent-firmware directory.                               ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read dial.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML syntax
    let document: toml::Table = match toml::from_str(&config_content) {
        Ok(table) => table,
        Err(e) => fail("Invalid TOML syntax in dial.toml", &e.to_string()),
    };

    // [dial] is optional; a missing table means all defaults
    let config = match document.get("dial") {
        None => DialConfig::default(),
        Some(value) => match value.clone().try_into::<DialConfig>() {
            Ok(config) => config,
            Err(e) => fail("Invalid [dial] section in dial.toml", &e.to_string()),
        },
    };

    if let Err(e) = config.validate() {
        let detail = match e {
            ConfigError::ZeroDebounce => "debounce_ms must be at least 1".to_string(),
            ConfigError::DebounceTooLong => {
                format!("debounce_ms must be at most {}", MAX_DEBOUNCE_MS)
            }
        };
        fail("Invalid value in dial.toml", &detail);
    }

    println!("cargo:warning=dial.toml validated successfully");
    config
}

/// Emit the validated config as a Rust constant
fn write_config(config: &DialConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("dial_config.rs")).unwrap();

    writeln!(
        f,
        "/// Dial configuration baked in from dial.toml\n\
         pub const DIAL_CONFIG: DialConfig = DialConfig {{\n    \
             debounce_ms: {},\n    \
             button_active_low: {},\n    \
             self_test: {},\n\
         }};",
        config.debounce_ms, config.button_active_low, config.self_test
    )
    .unwrap();
}

/// Abort the build with a boxed error message
fn fail(title: &str, msg: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(msg)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
