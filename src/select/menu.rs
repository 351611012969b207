// select/menu.rs - The interactive selection loops

use super::item::Item;
use super::render::{draw_frame, Layout};
use super::state::{Mode, Session, Transition};
use super::terminal::Terminal;
use super::theme::Theme;
use crate::error::{Result, SelectError};
use tracing::{debug, info};

/// Options for [`SelectionMenu::input_select`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputSelectOptions {
    /// Written before each line read.
    pub prompt: String,
    /// Entry format: `{0}` is the 1-based ordinal, `{1}` the label.
    pub template: String,
}

impl Default for InputSelectOptions {
    fn default() -> Self {
        InputSelectOptions {
            prompt: ">".to_string(),
            template: "[{0}] {1}".to_string(),
        }
    }
}

/// Options for [`SelectionMenu::arrow_select`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrowSelectOptions {
    pub selected_prefix: String,
    pub not_selected_prefix: String,
    /// `selected` paints the cursor row, `not_selected` every other row.
    pub theme: Theme,
}

impl Default for ArrowSelectOptions {
    fn default() -> Self {
        ArrowSelectOptions {
            selected_prefix: "> ".to_string(),
            not_selected_prefix: "  ".to_string(),
            theme: Theme::default(),
        }
    }
}

/// Options for [`SelectionMenu::multi_select`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiSelectOptions {
    /// Marks the cursor row.
    pub cursor_prefix: String,
    pub idle_prefix: String,
    /// Marks rows toggled on.
    pub checked_prefix: String,
    pub unchecked_prefix: String,
    /// `selected` paints toggled rows, `not_selected` the rest.
    pub theme: Theme,
}

impl Default for MultiSelectOptions {
    fn default() -> Self {
        MultiSelectOptions {
            cursor_prefix: "> ".to_string(),
            idle_prefix: "  ".to_string(),
            checked_prefix: "[*] ".to_string(),
            unchecked_prefix: "[ ] ".to_string(),
            theme: Theme::default(),
        }
    }
}

/// Runs selection menus against a borrowed terminal.
pub struct SelectionMenu<'t, T: Terminal + ?Sized> {
    term: &'t mut T,
}

impl<'t, T: Terminal + ?Sized> SelectionMenu<'t, T> {
    pub fn new(term: &'t mut T) -> Self {
        SelectionMenu { term }
    }

    /// Print every item with its ordinal, then read lines until one names a
    /// valid ordinal. Bad input re-prompts without reprinting the list.
    pub fn input_select(&mut self, items: &[Item], opts: &InputSelectOptions) -> Result<String> {
        if items.is_empty() {
            return Err(SelectError::EmptyItemList);
        }

        for (i, item) in items.iter().enumerate() {
            self.term
                .write_line(&format_entry(&opts.template, i + 1, &item.label))?;
        }

        loop {
            self.term.write_text(&opts.prompt)?;
            self.term.flush()?;
            let line = self.term.read_line()?.ok_or(SelectError::InputClosed)?;
            match parse_choice(&line, items.len()) {
                Some(index) => {
                    let key = items[index].key.clone();
                    info!(index, key = %key, "input selection accepted");
                    return Ok(key);
                }
                None => debug!(input = %line, "rejected selection input"),
            }
        }
    }

    /// Single choice with Up/Down, confirmed by Enter. Returns the key of
    /// the cursor row.
    pub fn arrow_select(&mut self, items: &[Item], opts: &ArrowSelectOptions) -> Result<String> {
        let session = self.run_session(items, Mode::Single, Layout::Arrow(opts))?;
        let key = items[session.cursor()].key.clone();
        info!(index = session.cursor(), key = %key, "arrow selection confirmed");
        Ok(key)
    }

    /// Space toggles the cursor row, Enter confirms. Returns the keys of
    /// toggled rows in list order; nothing toggled yields an empty list.
    pub fn multi_select(
        &mut self,
        items: &[Item],
        opts: &MultiSelectOptions,
    ) -> Result<Vec<String>> {
        let session = self.run_session(items, Mode::Multi, Layout::Multi(opts))?;
        let keys: Vec<String> = session
            .selected_indices()
            .into_iter()
            .map(|i| items[i].key.clone())
            .collect();
        info!(count = keys.len(), "multi selection confirmed");
        Ok(keys)
    }

    /// Hold raw mode for the whole session so Ctrl-C between frames is
    /// still read as a key.
    fn run_session(&mut self, items: &[Item], mode: Mode, layout: Layout<'_>) -> Result<Session> {
        let mut session = Session::new(items.len(), mode)?;
        if !self.term.is_interactive() {
            return Err(SelectError::InteractiveInputRequired);
        }

        self.term.enter_raw_mode()?;
        let result = self.run_key_loop(items, &mut session, layout);
        let restored = self.term.leave_raw_mode();
        result?;
        restored?;

        self.term.write_line("")?;
        self.term.flush()?;
        Ok(session)
    }

    /// Render, read one key, update, repeat until Enter.
    fn run_key_loop(
        &mut self,
        items: &[Item],
        session: &mut Session,
        layout: Layout<'_>,
    ) -> Result<()> {
        loop {
            let (_, height) = self.term.window_size()?;
            let viewport = session.viewport(height as usize);
            if viewport.needs_full_clear {
                self.term.clear_screen()?;
            }
            draw_frame(&mut *self.term, items, session, &viewport, layout)?;

            let key = self.term.read_key()?;
            self.erase_echo()?;

            let transition = session.handle_key(key);
            debug!(
                ?key,
                ?transition,
                cursor = session.cursor(),
                start = viewport.start,
                end = viewport.end,
                "menu key"
            );
            if transition == Transition::Confirmed {
                break;
            }
            if !viewport.needs_full_clear {
                self.return_to_region_top(viewport.rows())?;
            }
        }
        Ok(())
    }

    /// Overwrite whatever the key press may have echoed on the current line.
    fn erase_echo(&mut self) -> Result<()> {
        self.term.set_cursor_column(0)?;
        self.term.write_text(" ")?;
        self.term.set_cursor_column(0)?;
        Ok(())
    }

    /// Move to the first row of a region of `rows` lines whose last line
    /// holds the cursor.
    fn return_to_region_top(&mut self, rows: usize) -> Result<()> {
        let up = u16::try_from(rows.saturating_sub(1)).unwrap_or(u16::MAX);
        self.term.move_to_previous_line(up)?;
        Ok(())
    }
}

/// Fill a `{0}`/`{1}` entry template.
pub fn format_entry(template: &str, ordinal: usize, label: &str) -> String {
    template
        .replace("{0}", &ordinal.to_string())
        .replace("{1}", label)
}

/// Parse a 1-based ordinal into an index, if it is within `1..=len`.
fn parse_choice(input: &str, len: usize) -> Option<usize> {
    let ordinal: usize = input.trim().parse().ok()?;
    (1..=len).contains(&ordinal).then(|| ordinal - 1)
}
