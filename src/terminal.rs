//! The input line and the keyboard interrupt state machine.
//!
//! There is no separate line buffer: what has been typed is exactly what is
//! on screen between the input boundary and the cursor. The boundary is the
//! cursor position right after the prompt and never moves, so every command
//! is typed on the prompt's row.

use core::ops::Range;
use log::debug;
use crate::constants::keyboard::{DATA_PORT, STATUS_COMMAND_PORT, STATUS_OUTPUT_BUFFER_FULL};
use crate::constants::vga::BUFFER_HEIGHT;
use crate::keyboard::{self, Scancode};
use crate::pic;
use crate::port::PortIo;
use crate::shell;
use crate::vga_buffer::{row_end, row_of, Screen};

pub struct Terminal<'a> {
    screen: Screen<'a>,
    prompt: &'static str,
    input_start: usize,
    /// The previous byte was the 0xE0 prefix.
    pending_extended: bool,
}

impl<'a> Terminal<'a> {
    /// Clear the screen, print the prompt and start the input line after it.
    pub fn new(screen: Screen<'a>, prompt: &'static str) -> Terminal<'a> {
        let mut terminal = Terminal {
            screen,
            prompt,
            input_start: 0,
            pending_extended: false,
        };
        terminal.redraw();
        terminal.input_start = terminal.screen.cursor();
        terminal
    }

    pub fn screen(&self) -> &Screen<'a> {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen<'a> {
        &mut self.screen
    }

    pub fn input_start(&self) -> usize {
        self.input_start
    }

    /// Cells that may hold typed text: the boundary up to the end of its row.
    pub fn input_line(&self) -> Range<usize> {
        self.input_start..row_end(self.input_start)
    }

    /// The row under the input line, where command output goes.
    pub fn output_row(&self) -> Option<usize> {
        let row = row_of(self.input_start) + 1;
        (row < BUFFER_HEIGHT).then_some(row)
    }

    /// Wipe the whole screen and put the prompt back. The prompt lands in the
    /// same cells as at boot, so the input boundary stays valid.
    pub fn redraw(&mut self) {
        self.screen.clear();
        self.screen.put_string(self.prompt);
    }

    /// Service one keyboard interrupt.
    ///
    /// The EOI goes out before anything else so the controller is re-armed
    /// whichever way this returns. Nothing here can fail: spurious
    /// interrupts, releases and untranslatable keys are dropped.
    pub fn handle_interrupt(&mut self, ports: &mut dyn PortIo) {
        pic::end_of_interrupt(ports);

        if ports.read(STATUS_COMMAND_PORT) & STATUS_OUTPUT_BUFFER_FULL == 0 {
            debug!("spurious keyboard interrupt");
            return;
        }

        let byte = ports.read(DATA_PORT);
        let scancode = if self.pending_extended {
            self.pending_extended = false;
            keyboard::classify_extended(byte)
        } else {
            keyboard::classify(byte)
        };

        match scancode {
            Scancode::Extended => self.pending_extended = true,
            Scancode::Release => {}
            Scancode::Enter => self.submit(ports),
            Scancode::Backspace => self.backspace(),
            Scancode::Press(code) => {
                if let Some(byte) = keyboard::translate(code) {
                    self.insert(byte);
                }
            }
        }
    }

    fn insert(&mut self, byte: u8) {
        if self.screen.cursor() < self.input_line().end {
            self.screen.put_char(byte);
        }
    }

    /// The prompt is never erased.
    fn backspace(&mut self) {
        if self.screen.cursor() > self.input_start {
            self.screen.backspace();
        }
    }

    fn submit(&mut self, ports: &mut dyn PortIo) {
        shell::execute(self, ports);
        self.reset_line();
    }

    fn reset_line(&mut self) {
        let line = self.input_line();
        self.screen.clear_span(line);
        self.screen.set_cursor(self.input_start);
    }
}
