// select/render.rs - Painting arrow and multi-select frames

use super::item::Item;
use super::menu::{ArrowSelectOptions, MultiSelectOptions};
use super::state::Session;
use super::terminal::{with_saved_colors, Terminal};
use super::theme::RowStyle;
use super::viewport::Viewport;
use std::io;

/// Row layout for one kind of menu.
#[derive(Clone, Copy)]
pub(crate) enum Layout<'a> {
    Arrow(&'a ArrowSelectOptions),
    Multi(&'a MultiSelectOptions),
}

/// Draw the rows of `viewport`, one per line. The last row gets no
/// newline so the cursor stays inside the drawn region.
pub(crate) fn draw_frame<T: Terminal + ?Sized>(
    term: &mut T,
    items: &[Item],
    session: &Session,
    viewport: &Viewport,
    layout: Layout<'_>,
) -> io::Result<()> {
    for index in viewport.start..=viewport.end {
        let is_cursor = index == session.cursor();
        match layout {
            Layout::Arrow(opts) => draw_arrow_row(term, &items[index], is_cursor, opts)?,
            Layout::Multi(opts) => {
                draw_multi_row(term, &items[index], is_cursor, session.is_selected(index), opts)?
            }
        }
        // Wipe leftovers from a longer row drawn here in the previous frame.
        term.clear_to_line_end()?;
        if index < viewport.end {
            term.write_line("")?;
        }
    }
    term.flush()
}

fn apply_style<T: Terminal + ?Sized>(term: &mut T, style: RowStyle) -> io::Result<()> {
    if let Some(fg) = style.fg {
        term.set_foreground(Some(fg))?;
    }
    if let Some(bg) = style.bg {
        term.set_background(Some(bg))?;
    }
    Ok(())
}

/// Cursor rows are painted with the selected style, prefix included.
fn draw_arrow_row<T: Terminal + ?Sized>(
    term: &mut T,
    item: &Item,
    is_cursor: bool,
    opts: &ArrowSelectOptions,
) -> io::Result<()> {
    with_saved_colors(term, |t| {
        apply_style(t, opts.theme.style_for(is_cursor))?;
        let prefix = if is_cursor {
            &opts.selected_prefix
        } else {
            &opts.not_selected_prefix
        };
        t.write_text(prefix)?;
        t.write_text(&item.label)
    })
}

/// The cursor prefix stays uncolored; the theme follows the checked state
/// and covers the check marker and the label.
fn draw_multi_row<T: Terminal + ?Sized>(
    term: &mut T,
    item: &Item,
    is_cursor: bool,
    is_checked: bool,
    opts: &MultiSelectOptions,
) -> io::Result<()> {
    with_saved_colors(term, |t| {
        let cursor_prefix = if is_cursor {
            &opts.cursor_prefix
        } else {
            &opts.idle_prefix
        };
        t.write_text(cursor_prefix)?;

        apply_style(t, opts.theme.style_for(is_checked))?;
        let marker = if is_checked {
            &opts.checked_prefix
        } else {
            &opts.unchecked_prefix
        };
        t.write_text(marker)?;
        t.write_text(&item.label)
    })
}
