#![no_std]
#![no_main]

use core::panic::PanicInfo;
use keyline::constants::terminal::PROMPT;
use keyline::interrupts;
use keyline::logger;
use keyline::terminal::Terminal;
use keyline::vga_buffer::{Buffer, Screen};

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    log::error!("{}", info);
    loop {
        x86_64::instructions::hlt();
    }
}

#[no_mangle]
pub extern "C" fn _start() -> ! {
    // Without a serial log the keyboard path still works
    let _ = logger::init();
    log::info!("starting keyline");

    // SAFETY: the bootloader identity maps the VGA buffer and this is the
    // only reference ever created to it.
    let screen = Screen::new(unsafe { Buffer::vga() });
    let terminal = Terminal::new(screen, PROMPT);

    interrupts::init(terminal);

    // Everything from here on happens in the keyboard handler
    loop {
        x86_64::instructions::hlt();
    }
}
