use core::ops::Range;
use log::debug;
use crate::constants::keyboard::{CMD_RESET_CPU, STATUS_COMMAND_PORT};
use crate::constants::vga::BUFFER_WIDTH;
use crate::port::PortIo;
use crate::terminal::Terminal;
use crate::vga_buffer::Screen;

/// Command function type. The range holds the cells after the command name
/// and its separator.
type CommandFn = fn(&mut Terminal<'_>, &mut dyn PortIo, Range<usize>);

/// Command registry entry
pub struct Command {
    pub name: &'static str,
    func: CommandFn,
}

/// Command dispatch table, searched in order
pub const COMMANDS: &[Command] = &[
    Command { name: "ls", func: cmd_ls },
    Command { name: "echo", func: cmd_echo },
    Command { name: "help", func: cmd_help },
    Command { name: "clear", func: cmd_clear },
    Command { name: "reboot", func: cmd_reboot },
];

/// Match `name` against the start of `line`, comparing only the character
/// byte of each cell.
///
/// The name must be used up exactly where the line has a space, a NUL
/// (never typed) cell, or its end. On a match, returns the cells holding the
/// arguments.
pub fn token_matches(screen: &Screen<'_>, line: Range<usize>, name: &str) -> Option<Range<usize>> {
    let mut cell = line.start;
    for expected in name.bytes() {
        if cell >= line.end || screen.read_cell(cell).ascii_character != expected {
            return None;
        }
        cell += 1;
    }

    if cell >= line.end {
        return Some(line.end..line.end);
    }
    match screen.read_cell(cell).ascii_character {
        b' ' => Some(cell + 1..line.end),
        0 => Some(cell..line.end),
        _ => None,
    }
}

/// Find command by name
pub fn find_command(screen: &Screen<'_>, line: Range<usize>) -> Option<(&'static Command, Range<usize>)> {
    COMMANDS.iter().find_map(|cmd| {
        token_matches(screen, line.clone(), cmd.name).map(|args| (cmd, args))
    })
}

/// Run whatever command is on the input line. Unknown commands are dropped
/// without touching the screen.
pub fn execute(terminal: &mut Terminal<'_>, ports: &mut dyn PortIo) {
    match find_command(terminal.screen(), terminal.input_line()) {
        Some((cmd, args)) => {
            debug!("dispatching {}", cmd.name);
            (cmd.func)(terminal, ports, args);
        }
        None => debug!("unknown command discarded"),
    }
}

// ============================================================================
// Command implementations
// ============================================================================

/// Nothing to list without a filesystem.
fn cmd_ls(_terminal: &mut Terminal<'_>, _ports: &mut dyn PortIo, _args: Range<usize>) {}

fn cmd_echo(terminal: &mut Terminal<'_>, _ports: &mut dyn PortIo, args: Range<usize>) {
    let Some(row) = terminal.output_row() else {
        return;
    };
    let mut raw = [0u8; 2 * BUFFER_WIDTH];
    let len = terminal.screen().read_raw(args, &mut raw);

    let screen = terminal.screen_mut();
    screen.clear_row(row);
    screen.put_strided(&raw[..len], row, 2, 0);
}

fn cmd_help(terminal: &mut Terminal<'_>, _ports: &mut dyn PortIo, _args: Range<usize>) {
    let Some(row) = terminal.output_row() else {
        return;
    };
    let screen = terminal.screen_mut();
    screen.clear_row(row);

    let mut column = 0;
    for cmd in COMMANDS {
        screen.put_strided(cmd.name.as_bytes(), row, 1, column);
        column += cmd.name.len() + 1;
    }
}

fn cmd_clear(terminal: &mut Terminal<'_>, _ports: &mut dyn PortIo, _args: Range<usize>) {
    terminal.redraw();
}

fn cmd_reboot(_terminal: &mut Terminal<'_>, ports: &mut dyn PortIo, _args: Range<usize>) {
    debug!("pulsing CPU reset line");
    ports.write(STATUS_COMMAND_PORT, CMD_RESET_CPU);
}
