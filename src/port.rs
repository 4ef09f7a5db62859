//! Byte-wide port I/O.
//!
//! Everything that talks to the PIC or the keyboard controller goes through
//! [`PortIo`], so the interrupt path can be driven by a mock on the host.

use x86_64::instructions::port::Port;

/// Single-byte access to hardware I/O ports.
pub trait PortIo {
    fn read(&mut self, port: u16) -> u8;
    fn write(&mut self, port: u16, value: u8);
}

/// The real I/O port space.
pub struct HardwarePorts;

impl PortIo for HardwarePorts {
    fn read(&mut self, port: u16) -> u8 {
        let mut port: Port<u8> = Port::new(port);
        // SAFETY: only the fixed PIC and keyboard controller ports from
        // `constants` are used, and reading them has no memory side effects.
        unsafe { port.read() }
    }

    fn write(&mut self, port: u16, value: u8) {
        let mut port: Port<u8> = Port::new(port);
        // SAFETY: see `read`.
        unsafe { port.write(value) }
    }
}
