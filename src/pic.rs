//! Legacy 8259 PIC bring-up.
//!
//! Both controllers are remapped to vectors 32-47 so hardware IRQs no longer
//! collide with CPU exceptions, then every line is masked. The keyboard line
//! is opened separately with [`unmask_keyboard`] once the interrupt table is
//! in place.

use crate::constants::interrupts::{PIC_1_OFFSET, PIC_2_OFFSET};
use crate::constants::pic::{
    END_OF_INTERRUPT, ICW1_INIT, ICW3_PRIMARY_CASCADE, ICW3_SECONDARY_IDENTITY, ICW4_8086,
    MASK_ALL, MASK_KEYBOARD_ONLY, PIC1_COMMAND, PIC1_DATA, PIC2_COMMAND, PIC2_DATA, WAIT_PORT,
};
use crate::port::PortIo;

/// Small I/O delay by writing to an unused port.
fn io_wait(ports: &mut dyn PortIo) {
    ports.write(WAIT_PORT, 0);
}

/// Run the four-word initialization sequence on both controllers and mask
/// every line.
pub fn init_interrupt_controller(ports: &mut dyn PortIo) {
    // ICW1: begin initialization
    ports.write(PIC1_COMMAND, ICW1_INIT);
    io_wait(ports);
    ports.write(PIC2_COMMAND, ICW1_INIT);
    io_wait(ports);

    // ICW2: vector offsets
    ports.write(PIC1_DATA, PIC_1_OFFSET);
    io_wait(ports);
    ports.write(PIC2_DATA, PIC_2_OFFSET);
    io_wait(ports);

    // ICW3: cascade wiring
    ports.write(PIC1_DATA, ICW3_PRIMARY_CASCADE);
    io_wait(ports);
    ports.write(PIC2_DATA, ICW3_SECONDARY_IDENTITY);
    io_wait(ports);

    // ICW4: 8086 mode
    ports.write(PIC1_DATA, ICW4_8086);
    io_wait(ports);
    ports.write(PIC2_DATA, ICW4_8086);
    io_wait(ports);

    ports.write(PIC1_DATA, MASK_ALL);
    ports.write(PIC2_DATA, MASK_ALL);
}

/// Enable IRQ1 and nothing else.
pub fn unmask_keyboard(ports: &mut dyn PortIo) {
    ports.write(PIC1_DATA, MASK_KEYBOARD_ONLY);
}

/// Re-arm the primary controller. IRQ1 never involves the secondary.
pub fn end_of_interrupt(ports: &mut dyn PortIo) {
    ports.write(PIC1_COMMAND, END_OF_INTERRUPT);
}
