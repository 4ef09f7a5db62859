/// System-wide constants to avoid magic numbers

/// VGA text mode constants
pub mod vga {
    /// VGA text buffer physical address
    pub const BUFFER_ADDR: usize = 0xb8000;

    /// VGA text mode dimensions
    pub const BUFFER_HEIGHT: usize = 25;
    pub const BUFFER_WIDTH: usize = 80;

    /// Number of addressable cells; a linear cell index is always below this.
    pub const CELL_COUNT: usize = BUFFER_WIDTH * BUFFER_HEIGHT;

    /// Each cell is a character byte followed by an attribute byte
    pub const BYTES_PER_CELL: usize = 2;
}

/// PS/2 Keyboard controller constants
pub mod keyboard {
    /// PS/2 keyboard data port
    pub const DATA_PORT: u16 = 0x60;

    /// PS/2 keyboard status/command port
    pub const STATUS_COMMAND_PORT: u16 = 0x64;

    /// Status register bit flags
    pub const STATUS_OUTPUT_BUFFER_FULL: u8 = 0x01;

    /// Command to reset CPU via keyboard controller
    pub const CMD_RESET_CPU: u8 = 0xFE;

    /// Set 1 scancodes with their high bit set are key releases
    pub const RELEASE_BIT: u8 = 0x80;

    /// Prefix byte of the two-byte extended (grey key) codes
    pub const EXTENDED_PREFIX: u8 = 0xE0;

    pub const SCANCODE_BACKSPACE: u8 = 0x0E;
    pub const SCANCODE_ENTER: u8 = 0x1C;
    /// Keypad `/` when it follows the extended prefix
    pub const SCANCODE_SLASH: u8 = 0x35;
}

/// 8259 PIC ports and command words
pub mod pic {
    pub const PIC1_COMMAND: u16 = 0x20;
    pub const PIC1_DATA: u16 = 0x21;
    pub const PIC2_COMMAND: u16 = 0xA0;
    pub const PIC2_DATA: u16 = 0xA1;

    /// Unused port written to give slow controllers time between commands
    pub const WAIT_PORT: u16 = 0x80;

    /// ICW1: begin initialization, ICW4 follows
    pub const ICW1_INIT: u8 = 0x11;
    /// ICW3 (primary): a secondary controller hangs off IRQ2
    pub const ICW3_PRIMARY_CASCADE: u8 = 0x04;
    /// ICW3 (secondary): cascade identity 2
    pub const ICW3_SECONDARY_IDENTITY: u8 = 0x02;
    /// ICW4: 8086/88 mode
    pub const ICW4_8086: u8 = 0x01;

    pub const END_OF_INTERRUPT: u8 = 0x20;

    pub const MASK_ALL: u8 = 0xFF;
    /// 0xFD is 11111101 - only IRQ1 (keyboard) enabled
    pub const MASK_KEYBOARD_ONLY: u8 = 0xFD;
}

/// Interrupt constants
pub mod interrupts {
    /// PIC (Programmable Interrupt Controller) offset
    /// We remap PIC interrupts to start at 32 to avoid conflicts with CPU exceptions
    pub const PIC_1_OFFSET: u8 = 32;
    pub const PIC_2_OFFSET: u8 = PIC_1_OFFSET + 8;

    /// Number of gate slots in the interrupt table
    pub const IDT_SIZE: usize = 256;

    /// Present, ring 0, 64-bit interrupt gate
    pub const INTERRUPT_GATE: u8 = 0x8E;
}

/// Serial logging
pub mod serial {
    /// COM1 I/O port address
    pub const COM1_PORT: u16 = 0x3F8;
}

/// Terminal layout
pub mod terminal {
    /// Printed once at boot; input starts right after it
    pub const PROMPT: &str = "> ";
}
