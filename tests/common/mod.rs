// tests/common/mod.rs - Shared test helpers (in-memory terminal, binary runner)
#![allow(dead_code)]

use qselect::{Color, Item, Key, SelectError, Terminal};
use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// One `write_text`/`write_line` call and the colors active during it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Painted {
    pub text: String,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

/// A scripted terminal that records everything a menu does to it.
///
/// Rows are tracked like a real console: writing a newline on the bottom
/// row scrolls instead of moving down.
pub struct FakeTerminal {
    pub keys: VecDeque<Key>,
    pub lines: VecDeque<String>,
    pub interactive: bool,
    pub width: u16,
    pub height: u16,
    pub row: u16,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    /// Everything written, in order.
    pub output: String,
    /// Text written since the last clear or row reposition.
    pub frame: String,
    /// Snapshot of `frame` taken at every key read.
    pub frames: Vec<String>,
    pub painted: Vec<Painted>,
    pub keys_read: usize,
    pub clears: usize,
    pub line_clears: usize,
    /// Row reached by each move back up to a region top.
    pub row_moves: Vec<u16>,
    pub raw: bool,
    /// Whether raw mode was on at each key read.
    pub raw_at_reads: Vec<bool>,
}

impl FakeTerminal {
    pub fn new(height: u16) -> Self {
        FakeTerminal {
            keys: VecDeque::new(),
            lines: VecDeque::new(),
            interactive: true,
            width: 80,
            height,
            row: 0,
            fg: None,
            bg: None,
            output: String::new(),
            frame: String::new(),
            frames: Vec::new(),
            painted: Vec::new(),
            keys_read: 0,
            clears: 0,
            line_clears: 0,
            row_moves: Vec::new(),
            raw: false,
            raw_at_reads: Vec::new(),
        }
    }

    pub fn with_keys(height: u16, keys: &[Key]) -> Self {
        let mut term = FakeTerminal::new(height);
        term.keys.extend(keys.iter().copied());
        term
    }

    pub fn with_lines(lines: &[&str]) -> Self {
        let mut term = FakeTerminal::new(24);
        term.lines.extend(lines.iter().map(|l| l.to_string()));
        term
    }

    pub fn redirected() -> Self {
        let mut term = FakeTerminal::new(24);
        term.interactive = false;
        term
    }

    /// Rows of the most recent frame shown before a key was read.
    pub fn last_frame_rows(&self) -> Vec<String> {
        self.frames
            .last()
            .map(|f| f.split('\n').map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn record(&mut self, text: &str) {
        self.output.push_str(text);
        self.frame.push_str(text);
        self.painted.push(Painted {
            text: text.to_string(),
            fg: self.fg,
            bg: self.bg,
        });
    }
}

impl Terminal for FakeTerminal {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.record(text);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.record(text);
        self.output.push('\n');
        self.frame.push('\n');
        self.row = (self.row + 1).min(self.height.saturating_sub(1));
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn read_key(&mut self) -> qselect::Result<Key> {
        if !self.interactive {
            return Err(SelectError::InteractiveInputRequired);
        }
        self.frames.push(self.frame.clone());
        self.raw_at_reads.push(self.raw);
        self.keys_read += 1;
        self.keys.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted").into()
        })
    }

    fn enter_raw_mode(&mut self) -> io::Result<()> {
        self.raw = true;
        Ok(())
    }

    fn leave_raw_mode(&mut self) -> io::Result<()> {
        self.raw = false;
        Ok(())
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn window_size(&mut self) -> io::Result<(u16, u16)> {
        Ok((self.width, self.height))
    }

    fn set_cursor_column(&mut self, _column: u16) -> io::Result<()> {
        Ok(())
    }

    fn move_to_previous_line(&mut self, rows: u16) -> io::Result<()> {
        self.row = self.row.saturating_sub(rows);
        self.row_moves.push(self.row);
        self.frame.clear();
        Ok(())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.clears += 1;
        self.row = 0;
        self.frame.clear();
        Ok(())
    }

    fn clear_to_line_end(&mut self) -> io::Result<()> {
        self.line_clears += 1;
        Ok(())
    }

    fn foreground(&self) -> Option<Color> {
        self.fg
    }

    fn set_foreground(&mut self, color: Option<Color>) -> io::Result<()> {
        self.fg = color;
        Ok(())
    }

    fn background(&self) -> Option<Color> {
        self.bg
    }

    fn set_background(&mut self, color: Option<Color>) -> io::Result<()> {
        self.bg = color;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// `[(a, "A"), (b, "B"), (c, "C")]`
pub fn abc() -> Vec<Item> {
    vec![Item::new("a", "A"), Item::new("b", "B"), Item::new("c", "C")]
}

/// `n` items keyed `k0..` and labelled `Item 0..`.
pub fn numbered(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item::new(format!("k{}", i), format!("Item {}", i)))
        .collect()
}

/// A scratch working directory for running the binary, isolated from the
/// user's own config.
pub struct Workspace {
    pub dir: PathBuf,
    pub config_dir: PathBuf,
    _dir_tmp: TempDir,
    _config_tmp: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir_tmp = TempDir::new().unwrap();
        let config_tmp = TempDir::new().unwrap();
        Workspace {
            dir: dir_tmp.path().to_path_buf(),
            config_dir: config_tmp.path().to_path_buf(),
            _dir_tmp: dir_tmp,
            _config_tmp: config_tmp,
        }
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Run the qselect binary with `stdin` piped in.
    pub fn run(&self, args: &[&str], stdin: &str) -> Output {
        let binary = qselect_binary_path();
        let mut child = Command::new(&binary)
            .args(args)
            .current_dir(&self.dir)
            .env("QSELECT_CONFIG_DIR", &self.config_dir)
            .env_remove("QSELECT_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap_or_else(|e| panic!("Failed to run {}: {}", binary.display(), e));

        // The child may exit before reading everything; a broken pipe is fine.
        if let Some(mut pipe) = child.stdin.take() {
            let _ = pipe.write_all(stdin.as_bytes());
        }
        child.wait_with_output().unwrap()
    }

    pub fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

fn qselect_binary_path() -> PathBuf {
    Path::new(env!("CARGO_BIN_EXE_qselect")).to_path_buf()
}
