// select/terminal.rs - Terminal I/O seam and its crossterm implementation

use super::theme::Color;
use crate::error::{Result, SelectError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color as CtColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self as ct_terminal, ClearType};
use crossterm::tty::IsTty;
use crossterm::{cursor, queue};
use std::io::{self, BufRead, Write};

/// A key as the menus understand it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Space,
    Other,
}

/// Everything a menu needs from a console.
///
/// Menus own the terminal exclusively while they run: cursor position and
/// colors are shared mutable state, so nested or concurrent menus against
/// the same handle are not supported.
pub trait Terminal {
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Blocking line read without the trailing newline. `None` on EOF.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Blocking single key read.
    ///
    /// Fails with [`SelectError::InteractiveInputRequired`] when input is
    /// redirected.
    fn read_key(&mut self) -> Result<Key>;

    /// Start delivering keys unbuffered, without echo or signals, until
    /// [`Terminal::leave_raw_mode`]. Ctrl-C then arrives as a key.
    fn enter_raw_mode(&mut self) -> io::Result<()>;

    fn leave_raw_mode(&mut self) -> io::Result<()>;

    /// Whether raw key reads are possible (input is a terminal).
    fn is_interactive(&self) -> bool;

    /// `(width, height)` in cells.
    fn window_size(&mut self) -> io::Result<(u16, u16)>;

    fn set_cursor_column(&mut self, column: u16) -> io::Result<()>;

    /// Move the cursor to column 0 of the line `rows` lines above the
    /// current one. `0` stays on the current line.
    fn move_to_previous_line(&mut self, rows: u16) -> io::Result<()>;

    /// Clear the whole screen and home the cursor.
    fn clear_screen(&mut self) -> io::Result<()>;

    fn clear_to_line_end(&mut self) -> io::Result<()>;

    /// Current foreground, `None` when unset (terminal default).
    fn foreground(&self) -> Option<Color>;

    fn set_foreground(&mut self, color: Option<Color>) -> io::Result<()>;

    fn background(&self) -> Option<Color>;

    fn set_background(&mut self, color: Option<Color>) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Replace the contents of the current line with `text`.
    fn rewrite_line(&mut self, text: &str) -> io::Result<()> {
        self.set_cursor_column(0)?;
        self.clear_to_line_end()?;
        self.write_text(text)
    }
}

/// Run `paint` and then put the foreground and background colors back to
/// what they were before, whether or not `paint` succeeded.
pub fn with_saved_colors<T, R, F>(term: &mut T, paint: F) -> io::Result<R>
where
    T: Terminal + ?Sized,
    F: FnOnce(&mut T) -> io::Result<R>,
{
    let fg = term.foreground();
    let bg = term.background();

    let painted = paint(term);

    let mut restored = Ok(());
    if term.foreground() != fg {
        restored = term.set_foreground(fg);
    }
    if term.background() != bg {
        restored = restored.and(term.set_background(bg));
    }

    let value = painted?;
    restored?;
    Ok(value)
}

/// Map a crossterm key event to a menu key.
pub fn key_from_event(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Char(' ') => Key::Space,
        _ => Key::Other,
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

fn ct_color(color: Option<Color>) -> CtColor {
    color.map(CtColor::from).unwrap_or(CtColor::Reset)
}

/// Console terminal over crossterm. Output goes to `W` (stderr by
/// default, keeping stdout free for results); input comes from stdin.
///
/// crossterm cannot read back the console's colors, so the handle tracks
/// the colors it has set itself and reports `None` until then. Cursor moves
/// are relative and written to `W`; nothing is ever queried through stdout.
pub struct CrosstermTerminal<W: Write = io::Stderr> {
    out: W,
    fg: Option<Color>,
    bg: Option<Color>,
    raw: bool,
}

impl CrosstermTerminal<io::Stderr> {
    pub fn stderr() -> Self {
        CrosstermTerminal::new(io::stderr())
    }
}

impl<W: Write> CrosstermTerminal<W> {
    pub fn new(out: W) -> Self {
        CrosstermTerminal {
            out,
            fg: None,
            bg: None,
            raw: false,
        }
    }

    fn read_key_raw(&mut self) -> Result<Key> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if is_interrupt(&key) {
                    return Err(SelectError::Interrupted);
                }
                return Ok(key_from_event(key));
            }
        }
    }
}

impl<W: Write> Terminal for CrosstermTerminal<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        // raw mode turns off output post-processing, so LF alone keeps the column
        let newline: &[u8] = if self.raw { b"\r\n" } else { b"\n" };
        self.out.write_all(newline)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn read_key(&mut self) -> Result<Key> {
        if !self.is_interactive() {
            return Err(SelectError::InteractiveInputRequired);
        }
        self.out.flush()?;

        if self.raw {
            return self.read_key_raw();
        }
        ct_terminal::enable_raw_mode()?;
        let key = self.read_key_raw();
        ct_terminal::disable_raw_mode()?;
        key
    }

    fn enter_raw_mode(&mut self) -> io::Result<()> {
        if !self.raw {
            ct_terminal::enable_raw_mode()?;
            self.raw = true;
        }
        Ok(())
    }

    fn leave_raw_mode(&mut self) -> io::Result<()> {
        if self.raw {
            self.raw = false;
            ct_terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    fn is_interactive(&self) -> bool {
        io::stdin().is_tty()
    }

    fn window_size(&mut self) -> io::Result<(u16, u16)> {
        ct_terminal::size()
    }

    fn set_cursor_column(&mut self, column: u16) -> io::Result<()> {
        queue!(self.out, cursor::MoveToColumn(column))
    }

    fn move_to_previous_line(&mut self, rows: u16) -> io::Result<()> {
        // CSI 0 F moves one line, not zero
        if rows == 0 {
            return queue!(self.out, cursor::MoveToColumn(0));
        }
        queue!(self.out, cursor::MoveToPreviousLine(rows))
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            ct_terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    fn clear_to_line_end(&mut self) -> io::Result<()> {
        queue!(self.out, ct_terminal::Clear(ClearType::UntilNewLine))
    }

    fn foreground(&self) -> Option<Color> {
        self.fg
    }

    fn set_foreground(&mut self, color: Option<Color>) -> io::Result<()> {
        queue!(self.out, SetForegroundColor(ct_color(color)))?;
        self.fg = color;
        Ok(())
    }

    fn background(&self) -> Option<Color> {
        self.bg
    }

    fn set_background(&mut self, color: Option<Color>) -> io::Result<()> {
        queue!(self.out, SetBackgroundColor(ct_color(color)))?;
        self.bg = color;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
