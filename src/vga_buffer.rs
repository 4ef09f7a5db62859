use core::ops::Range;
use volatile::Volatile;
use crate::constants::vga::{BUFFER_ADDR, BUFFER_HEIGHT, BUFFER_WIDTH, BYTES_PER_CELL, CELL_COUNT};

#[allow(dead_code)]
#[derive(Clone, Copy)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }

    pub fn as_u8(self) -> u8 {
        self.0
    }
}

/// Attribute byte of every cell this module writes (0x07).
pub const DEFAULT_COLOR: ColorCode = ColorCode::new(Color::LightGray, Color::Black);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    pub ascii_character: u8,
    pub color_code: ColorCode,
}

impl ScreenChar {
    /// NUL on the default attribute. A NUL character ends the typed text.
    pub const BLANK: ScreenChar = ScreenChar {
        ascii_character: 0,
        color_code: DEFAULT_COLOR,
    };
}

#[repr(transparent)]
pub struct Buffer {
    chars: [[Volatile<ScreenChar>; BUFFER_WIDTH]; BUFFER_HEIGHT],
}

impl Buffer {
    /// The memory-mapped text buffer.
    ///
    /// # Safety
    ///
    /// The VGA buffer must be identity mapped and this must be the only
    /// live reference to it.
    pub unsafe fn vga() -> &'static mut Buffer {
        &mut *(BUFFER_ADDR as *mut Buffer)
    }

    #[cfg(test)]
    pub fn blank() -> Buffer {
        Buffer {
            chars: core::array::from_fn(|_| {
                core::array::from_fn(|_| Volatile::new(ScreenChar::BLANK))
            }),
        }
    }
}

pub fn row_of(cell: usize) -> usize {
    cell / BUFFER_WIDTH
}

/// First cell index past the row containing `cell`.
pub fn row_end(cell: usize) -> usize {
    (row_of(cell) + 1) * BUFFER_WIDTH
}

/// The display surface: the whole grid seen as 2000 linearly addressed cells
/// plus a cursor pointing at the next free one.
///
/// All writes are bounded. Anything addressed outside `[0, CELL_COUNT)` is
/// dropped rather than written.
pub struct Screen<'a> {
    cursor: usize,
    color_code: ColorCode,
    buffer: &'a mut Buffer,
}

impl<'a> Screen<'a> {
    pub fn new(buffer: &'a mut Buffer) -> Screen<'a> {
        Screen {
            cursor: 0,
            color_code: DEFAULT_COLOR,
            buffer,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(CELL_COUNT);
    }

    pub fn read_cell(&self, cell: usize) -> ScreenChar {
        if cell >= CELL_COUNT {
            return ScreenChar::BLANK;
        }
        self.buffer.chars[cell / BUFFER_WIDTH][cell % BUFFER_WIDTH].read()
    }

    fn write_cell(&mut self, cell: usize, byte: u8) {
        if cell >= CELL_COUNT {
            return;
        }
        self.buffer.chars[cell / BUFFER_WIDTH][cell % BUFFER_WIDTH].write(ScreenChar {
            ascii_character: byte,
            color_code: self.color_code,
        });
    }

    fn blank_cell(&mut self, cell: usize) {
        if cell < CELL_COUNT {
            self.buffer.chars[cell / BUFFER_WIDTH][cell % BUFFER_WIDTH].write(ScreenChar::BLANK);
        }
    }

    /// Write `byte` at the cursor and advance. No-op once the surface is full.
    pub fn put_char(&mut self, byte: u8) {
        if self.cursor >= CELL_COUNT {
            return;
        }
        self.write_cell(self.cursor, byte);
        self.cursor += 1;
    }

    pub fn put_string(&mut self, s: &str) {
        for byte in s.bytes() {
            self.put_char(byte);
        }
    }

    /// Write `bytes[0]`, `bytes[stride]`, `bytes[2 * stride]`... into `base_row`,
    /// the byte at index `i` landing in column `(i + start_offset) / stride`.
    ///
    /// With a stride of 2 this picks the character bytes out of a raw
    /// (character, attribute) dump produced by [`Screen::read_raw`]. Columns
    /// past the end of the row are dropped.
    pub fn put_strided(&mut self, bytes: &[u8], base_row: usize, stride: usize, start_offset: usize) {
        if stride == 0 || base_row >= BUFFER_HEIGHT {
            return;
        }
        for i in (0..bytes.len()).step_by(stride) {
            let column = (i + start_offset) / stride;
            if column >= BUFFER_WIDTH {
                break;
            }
            self.write_cell(base_row * BUFFER_WIDTH + column, bytes[i]);
        }
    }

    /// Copy the physical (character, attribute) byte pairs of `cells` into
    /// `out`, stopping at the first NUL character. Returns the number of
    /// bytes copied.
    pub fn read_raw(&self, cells: Range<usize>, out: &mut [u8]) -> usize {
        let mut len = 0;
        for cell in cells.start..cells.end.min(CELL_COUNT) {
            let screen_char = self.read_cell(cell);
            if screen_char.ascii_character == 0 || len + BYTES_PER_CELL > out.len() {
                break;
            }
            out[len] = screen_char.ascii_character;
            out[len + 1] = screen_char.color_code.as_u8();
            len += BYTES_PER_CELL;
        }
        len
    }

    /// Step the cursor back one cell and blank it.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.blank_cell(self.cursor);
        }
    }

    pub fn clear_span(&mut self, cells: Range<usize>) {
        for cell in cells {
            self.blank_cell(cell);
        }
    }

    pub fn clear_row(&mut self, row: usize) {
        self.clear_span(row * BUFFER_WIDTH..(row + 1) * BUFFER_WIDTH);
    }

    pub fn clear(&mut self) {
        for row in 0..BUFFER_HEIGHT {
            self.clear_row(row);
        }
        self.cursor = 0;
    }
}
