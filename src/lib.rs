//! Interactive console selection menus.
//!
//! Three selectors are provided, all driven through a [`Terminal`] handle so
//! they can run against a real console or an in-memory fake:
//!
//! - [`SelectionMenu::input_select`]: numbered list, answer typed as a line.
//! - [`SelectionMenu::arrow_select`]: single choice with Up/Down/Enter.
//! - [`SelectionMenu::multi_select`]: Space toggles rows, Enter confirms.

pub mod config;
pub mod error;
pub mod select;

pub use error::{Result, SelectError};
pub use select::item::Item;
pub use select::menu::{ArrowSelectOptions, InputSelectOptions, MultiSelectOptions, SelectionMenu};
pub use select::terminal::{CrosstermTerminal, Key, Terminal};
pub use select::theme::{Color, RowStyle, Theme};
