use x86_64::instructions::segmentation::{Segment, CS};
use x86_64::structures::idt::InterruptStackFrame;
use lazy_static::lazy_static;
use log::{debug, info};
use spin::Mutex;
use crate::constants::interrupts::PIC_1_OFFSET;
use crate::idt::InterruptTable;
use crate::pic;
use crate::port::{HardwarePorts, PortIo};
use crate::terminal::Terminal;

/// Hardware interrupt numbers (after remapping)
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum InterruptIndex {
    Keyboard = PIC_1_OFFSET + 1,
}

impl InterruptIndex {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// The input line serviced by the keyboard handler. Filled in by [`init`]
/// before the keyboard line is unmasked.
pub static TERMINAL: Mutex<Option<Terminal<'static>>> = Mutex::new(None);

lazy_static! {
    static ref IDT: InterruptTable = {
        let mut idt = InterruptTable::new();
        idt.set_handler(
            InterruptIndex::Keyboard.as_u8(),
            keyboard_interrupt_handler as usize as u64,
            CS::get_reg(),
        );
        idt
    };
}

/// Point the CPU at the table holding the keyboard gate.
pub fn install_interrupt_table() {
    IDT.load();
    debug!("IDT loaded, keyboard gate at vector {:#04x}", InterruptIndex::Keyboard.as_u8());
}

/// Hand `terminal` to the keyboard handler and start taking interrupts.
pub fn init(terminal: Terminal<'static>) {
    *TERMINAL.lock() = Some(terminal);

    bring_up(&mut HardwarePorts, |_| install_interrupt_table());

    info!("enabling interrupts");
    x86_64::instructions::interrupts::enable();
}

/// Install the table, bring up the controllers, then unmask the keyboard.
///
/// The table goes in before any controller write so the keyboard vector
/// never fires through an empty gate.
pub fn bring_up<P: PortIo>(ports: &mut P, install_table: impl FnOnce(&mut P)) {
    install_table(ports);

    pic::init_interrupt_controller(ports);
    debug!("PICs remapped, all lines masked");

    pic::unmask_keyboard(ports);
    debug!("keyboard line unmasked");
}

extern "x86-interrupt" fn keyboard_interrupt_handler(_stack_frame: InterruptStackFrame) {
    let mut ports = HardwarePorts;

    // An interrupt gate runs with IF clear, so the lock can only be held here
    // if something else took it; acknowledge and drop the key in that case.
    match TERMINAL.try_lock() {
        Some(mut guard) => match guard.as_mut() {
            Some(terminal) => terminal.handle_interrupt(&mut ports),
            None => pic::end_of_interrupt(&mut ports),
        },
        None => pic::end_of_interrupt(&mut ports),
    }
}
