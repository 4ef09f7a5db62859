//! `log` sink on COM1.
//!
//! The VGA surface doubles as the input line, so diagnostics never go there.

use core::fmt::Write;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use spin::{Mutex, Once};
use uart_16550::SerialPort;
use x86_64::instructions::interrupts;
use crate::constants::serial::COM1_PORT;

static SERIAL: Once<Mutex<SerialPort>> = Once::new();
static LOGGER: SerialLogger = SerialLogger;

/// Everything down to `debug` reaches the port, including the keyboard
/// handler's spurious-interrupt report.
const MAX_LEVEL: LevelFilter = LevelFilter::Debug;

struct SerialLogger;

fn serial() -> &'static Mutex<SerialPort> {
    SERIAL.call_once(|| {
        // SAFETY: COM1 is the standard PC serial port and nothing else
        // drives it.
        let mut port = unsafe { SerialPort::new(COM1_PORT) };
        port.init();
        Mutex::new(port)
    })
}

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= MAX_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // The keyboard handler logs too; keep it out while the port is held.
        interrupts::without_interrupts(|| {
            let _ = writeln!(
                serial().lock(),
                "[{:>5}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        });
    }

    fn flush(&self) {}
}

/// Bring up COM1 and route the `log` macros to it.
pub fn init() -> Result<(), SetLoggerError> {
    serial();
    log::set_logger(&LOGGER)?;
    log::set_max_level(MAX_LEVEL);
    Ok(())
}
