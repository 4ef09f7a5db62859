use pc_keyboard::{layouts, DecodedKey, HandleControl, Keyboard, ScancodeSet1};
use crate::constants::keyboard::{
    EXTENDED_PREFIX, RELEASE_BIT, SCANCODE_BACKSPACE, SCANCODE_ENTER, SCANCODE_SLASH,
};

/// What a raw byte from the keyboard data port means to the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scancode {
    /// 0xE0: the next byte belongs to an extended key
    Extended,
    /// Key release (high bit set)
    Release,
    Enter,
    Backspace,
    Press(u8),
}

pub fn classify(byte: u8) -> Scancode {
    match byte {
        EXTENDED_PREFIX => Scancode::Extended,
        b if b & RELEASE_BIT != 0 => Scancode::Release,
        SCANCODE_ENTER => Scancode::Enter,
        SCANCODE_BACKSPACE => Scancode::Backspace,
        code => Scancode::Press(code),
    }
}

/// Translate a set 1 make code to the printable ASCII character it produces
/// on an unmodified US keyboard.
///
/// Every call decodes with a fresh decoder, so the result depends on the
/// scancode alone. Modifiers, control keys and anything outside printable
/// ASCII yield `None`.
pub fn translate(scancode: u8) -> Option<u8> {
    let mut decoder = Keyboard::new(
        ScancodeSet1::new(),
        layouts::Us104Key,
        HandleControl::Ignore,
    );

    let key_event = decoder.add_byte(scancode).ok().flatten()?;
    match decoder.process_keyevent(key_event)? {
        DecodedKey::Unicode(c) if c == ' ' || c.is_ascii_graphic() => Some(c as u8),
        _ => None,
    }
}

/// Classify the byte that follows an 0xE0 prefix.
///
/// Only keypad Enter and keypad `/` mean anything to the input line. Arrows,
/// Insert/Delete, Home/End and the rest come back as `Release` so they are
/// dropped; decoded on their own they would read as keypad digits.
pub fn classify_extended(byte: u8) -> Scancode {
    match byte {
        SCANCODE_ENTER => Scancode::Enter,
        SCANCODE_SLASH => Scancode::Press(SCANCODE_SLASH),
        _ => Scancode::Release,
    }
}
