//! Host-side stand-ins for the hardware the interrupt path talks to.

use std::collections::VecDeque;

use crate::constants::interrupts::PIC_1_OFFSET;
use crate::constants::keyboard::{DATA_PORT, STATUS_COMMAND_PORT, STATUS_OUTPUT_BUFFER_FULL};
use crate::constants::pic::{END_OF_INTERRUPT, PIC1_COMMAND, PIC1_DATA, PIC2_COMMAND, PIC2_DATA, WAIT_PORT};
use crate::pic;
use crate::port::PortIo;
use crate::terminal::Terminal;
use crate::vga_buffer::Buffer;

/// Just enough of an 8259 to follow the init sequence, the mask register and
/// the in-service state of IRQ1.
#[derive(Debug, Default)]
pub struct MockPic {
    pub offset: u8,
    pub cascade: u8,
    pub mode: u8,
    pub mask: u8,
    pub in_service: bool,
    init_step: u8,
}

impl MockPic {
    fn command(&mut self, value: u8) {
        if value & 0x10 != 0 {
            // ICW1 clears the mask register on a real 8259
            self.init_step = 1;
            self.mask = 0;
        } else if value == END_OF_INTERRUPT {
            self.in_service = false;
        }
    }

    fn data(&mut self, value: u8) {
        match self.init_step {
            1 => self.offset = value,
            2 => self.cascade = value,
            3 => self.mode = value,
            _ => {
                self.mask = value;
                return;
            }
        }
        self.init_step = (self.init_step + 1) % 4;
    }
}

/// Records every port write (except I/O wait cycles) and plays scripted
/// scancodes back through the keyboard controller ports.
#[derive(Debug, Default)]
pub struct MockPorts {
    pub writes: Vec<(u16, u8)>,
    pub primary: MockPic,
    pub secondary: MockPic,
    output: VecDeque<u8>,
}

impl MockPorts {
    /// Controllers in their power-on state.
    pub fn new() -> MockPorts {
        MockPorts::default()
    }

    /// Controllers brought up with only the keyboard unmasked, write log empty.
    pub fn ready() -> MockPorts {
        let mut ports = MockPorts::new();
        pic::init_interrupt_controller(&mut ports);
        pic::unmask_keyboard(&mut ports);
        ports.writes.clear();
        ports
    }

    pub fn queue_scancode(&mut self, scancode: u8) {
        self.output.push_back(scancode);
    }

    /// Whether the primary controller would raise the keyboard vector now.
    pub fn keyboard_irq_deliverable(&self) -> bool {
        !self.output.is_empty()
            && self.primary.offset == PIC_1_OFFSET
            && self.primary.mask & 0x02 == 0
            && !self.primary.in_service
    }

    pub fn writes_to(&self, port: u16) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(p, _)| *p == port)
            .map(|(_, value)| *value)
            .collect()
    }
}

impl PortIo for MockPorts {
    fn read(&mut self, port: u16) -> u8 {
        match port {
            STATUS_COMMAND_PORT if !self.output.is_empty() => STATUS_OUTPUT_BUFFER_FULL,
            STATUS_COMMAND_PORT => 0,
            DATA_PORT => self.output.pop_front().unwrap_or(0),
            PIC1_DATA => self.primary.mask,
            PIC2_DATA => self.secondary.mask,
            _ => 0xFF,
        }
    }

    fn write(&mut self, port: u16, value: u8) {
        if port == WAIT_PORT {
            return;
        }
        self.writes.push((port, value));
        match port {
            PIC1_COMMAND => self.primary.command(value),
            PIC1_DATA => self.primary.data(value),
            PIC2_COMMAND => self.secondary.command(value),
            PIC2_DATA => self.secondary.data(value),
            _ => {}
        }
    }
}

pub fn blank_buffer() -> Box<Buffer> {
    Box::new(Buffer::blank())
}

/// Raise IRQ1 for `scancode` the way the PIC would. Returns whether the
/// handler ran.
pub fn deliver(terminal: &mut Terminal<'_>, ports: &mut MockPorts, scancode: u8) -> bool {
    ports.queue_scancode(scancode);
    if !ports.keyboard_irq_deliverable() {
        return false;
    }
    ports.primary.in_service = true;
    terminal.handle_interrupt(ports);
    true
}

/// Set 1 make code for a lowercase letter, digit or space.
pub fn scancode_for(c: char) -> u8 {
    const ROWS: [(&str, u8); 4] = [
        ("1234567890", 0x02),
        ("qwertyuiop", 0x10),
        ("asdfghjkl", 0x1E),
        ("zxcvbnm", 0x2C),
    ];
    if c == ' ' {
        return 0x39;
    }
    ROWS.iter()
        .find_map(|(keys, first)| keys.find(c).map(|i| first + i as u8))
        .unwrap_or_else(|| panic!("no scancode for {c:?}"))
}

/// Press each key of `text` in turn.
pub fn type_text(terminal: &mut Terminal<'_>, ports: &mut MockPorts, text: &str) {
    for c in text.chars() {
        assert!(deliver(terminal, ports, scancode_for(c)));
    }
}
