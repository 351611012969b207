// select/theme.rs - Console palette and per-row color overrides

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 16-color console palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl Color {
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::DarkBlue,
        Color::DarkGreen,
        Color::DarkCyan,
        Color::DarkRed,
        Color::DarkMagenta,
        Color::DarkYellow,
        Color::Gray,
        Color::DarkGray,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Yellow,
        Color::White,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::DarkBlue => "dark-blue",
            Color::DarkGreen => "dark-green",
            Color::DarkCyan => "dark-cyan",
            Color::DarkRed => "dark-red",
            Color::DarkMagenta => "dark-magenta",
            Color::DarkYellow => "dark-yellow",
            Color::Gray => "gray",
            Color::DarkGray => "dark-gray",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Red => "red",
            Color::Magenta => "magenta",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = String;

    /// Accepts the kebab-case names, ignoring case, `_` for `-`, and `grey`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-").replace("grey", "gray");
        Color::ALL
            .into_iter()
            .find(|c| c.name() == normalized || c.name().replace('-', "") == normalized)
            .ok_or_else(|| {
                let names: Vec<&str> = Color::ALL.iter().map(|c| c.name()).collect();
                format!("unknown color '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        use crossterm::style::Color as Ct;
        match color {
            Color::Black => Ct::Black,
            Color::DarkBlue => Ct::DarkBlue,
            Color::DarkGreen => Ct::DarkGreen,
            Color::DarkCyan => Ct::DarkCyan,
            Color::DarkRed => Ct::DarkRed,
            Color::DarkMagenta => Ct::DarkMagenta,
            Color::DarkYellow => Ct::DarkYellow,
            Color::Gray => Ct::Grey,
            Color::DarkGray => Ct::DarkGrey,
            Color::Blue => Ct::Blue,
            Color::Green => Ct::Green,
            Color::Cyan => Ct::Cyan,
            Color::Red => Ct::Red,
            Color::Magenta => Ct::Magenta,
            Color::Yellow => Ct::Yellow,
            Color::White => Ct::White,
        }
    }
}

/// Optional color overrides for one kind of row. `None` leaves the
/// terminal's current color untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl RowStyle {
    pub fn new(fg: Option<Color>, bg: Option<Color>) -> Self {
        RowStyle { fg, bg }
    }

    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }
}

/// Colors for highlighted rows and for every other row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Theme {
    pub selected: RowStyle,
    pub not_selected: RowStyle,
}

impl Theme {
    pub fn style_for(&self, selected: bool) -> RowStyle {
        if selected {
            self.selected
        } else {
            self.not_selected
        }
    }
}
