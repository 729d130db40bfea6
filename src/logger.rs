//! Colored console backend for the `log` facade. The library itself only
//! emits through `log::` macros; installing this backend is optional and
//! mainly useful for demos and quick diagnostics.

use chrono::Utc;
use colored::{Color, Colorize};
use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::Lazy;

static CONSOLE_LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::default);

/// Installs the console logger at `Info` level.
pub fn init() -> Result<(), String> {
    init_with_level(LevelFilter::Info)
}

/// Installs the console logger with an explicit maximum level.
pub fn init_with_level(level: LevelFilter) -> Result<(), String> {
    log::set_logger(&*CONSOLE_LOGGER).map_err(|e| format!("failed to set logger: {:?}", e))?;
    log::set_max_level(level);
    Ok(())
}

#[derive(Default)]
struct ConsoleLogger;

fn level_color(level: Level) -> Color {
    match level {
        Level::Trace => Color::Cyan,
        Level::Debug => Color::Blue,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Utc::now().format("%H:%M:%S%.3f");
        let level = format!("{:5}", record.level())
            .color(level_color(record.level()))
            .bold();
        println!("{} {} {} {}", timestamp, level, record.target().dimmed(), record.args());
    }

    fn flush(&self) {}
}
