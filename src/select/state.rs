// select/state.rs - Pure state machine for arrow menus (no terminal dependency)

use super::terminal::Key;
use super::viewport::{compute_viewport, Direction, Viewport};
use crate::error::{Result, SelectError};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Single,
    Multi,
}

/// What one key press did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Navigated,
    Toggled,
    Ignored,
    Confirmed,
}

/// Mutable state of one running menu.
///
/// The viewport is not stored: it is recomputed from the cursor and
/// direction on every frame. Only the toggled set carries over.
#[derive(Clone, Debug)]
pub struct Session {
    len: usize,
    mode: Mode,
    cursor: usize,
    direction: Direction,
    selected: BTreeSet<usize>,
}

impl Session {
    /// Start a session over `len` items with the cursor on the first one.
    pub fn new(len: usize, mode: Mode) -> Result<Self> {
        if len == 0 {
            return Err(SelectError::EmptyItemList);
        }
        Ok(Session {
            len,
            mode,
            cursor: 0,
            // Up anchors the window at the top, so the first frame is full.
            direction: Direction::Up,
            selected: BTreeSet::new(),
        })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Toggled indices in ascending order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selected.iter().copied().collect()
    }

    pub fn viewport(&self, height: usize) -> Viewport {
        compute_viewport(self.cursor, self.direction, self.len, height)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.direction = Direction::Up;
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.len {
            self.cursor += 1;
        }
        self.direction = Direction::Down;
    }

    /// Flip membership of the cursor row. Cursor and direction stay put.
    pub fn toggle(&mut self) {
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
    }

    pub fn handle_key(&mut self, key: Key) -> Transition {
        match key {
            Key::Up => {
                self.move_up();
                Transition::Navigated
            }
            Key::Down => {
                self.move_down();
                Transition::Navigated
            }
            Key::Space if self.mode == Mode::Multi => {
                self.toggle();
                Transition::Toggled
            }
            Key::Enter => Transition::Confirmed,
            _ => Transition::Ignored,
        }
    }
}
