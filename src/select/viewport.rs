// select/viewport.rs - Which slice of the list is on screen

/// Last navigation direction. Decides which viewport edge is anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Inclusive range of visible item indices for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub start: usize,
    pub end: usize,
    /// The list does not fit the terminal, so the frame is drawn on a
    /// cleared screen instead of over the previous one.
    pub needs_full_clear: bool,
}

impl Viewport {
    /// Number of rows drawn.
    pub fn rows(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Compute the visible window for a list of `len` items on a terminal
/// `height` rows tall.
///
/// When the list fits, everything is shown. Otherwise the window is
/// re-centred on the cursor every step: moving down pins the end at
/// `cursor + height/2`, moving up pins the start at `cursor - height/2`,
/// and the other edge follows within `height` rows.
///
/// `len` must be at least 1 and `cursor < len`.
pub fn compute_viewport(cursor: usize, direction: Direction, len: usize, height: usize) -> Viewport {
    debug_assert!(len > 0 && cursor < len);
    let height = height.max(1);
    let last = len - 1;

    if len <= height {
        return Viewport {
            start: 0,
            end: last,
            needs_full_clear: false,
        };
    }

    let half = height / 2;
    let (start, end) = match direction {
        Direction::Down => {
            let end = (cursor + half).min(last);
            ((end + 1).saturating_sub(height), end)
        }
        Direction::Up => {
            let start = cursor.saturating_sub(half);
            (start, (start + height - 1).min(last))
        }
    };

    Viewport {
        start,
        end,
        needs_full_clear: true,
    }
}
