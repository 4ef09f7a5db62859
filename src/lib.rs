//! Interrupt-driven keyboard input for a single-tasking x86_64 kernel.
//!
//! The 8259 PICs are remapped, a single IDT gate is installed for the
//! keyboard, and every key press is echoed into VGA text memory. The screen
//! itself is the input line: pressing Enter matches what is displayed after
//! the prompt against a small command table.

#![cfg_attr(not(test), no_std)]
#![feature(abi_x86_interrupt)]

pub mod constants;
pub mod idt;
pub mod interrupts;
pub mod keyboard;
pub mod logger;
pub mod pic;
pub mod port;
pub mod shell;
pub mod terminal;
pub mod vga_buffer;

#[cfg(test)]
mod testutil;
