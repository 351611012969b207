// demo.rs - Interactive showcase of every menu style

use anyhow::Result;
use qselect::config::ResolvedConfig;
use qselect::{ArrowSelectOptions, Color, Item, RowStyle, SelectionMenu, Terminal, Theme};

const SAMPLE_COUNT: usize = 40;

fn main_menu() -> Vec<Item> {
    vec![
        Item::new("input", "Numbered input selection"),
        Item::new("multi", "Multi selection"),
        Item::new("highlight", "Highlighted arrow selection"),
        Item::new("inverse", "Inverse arrow selection"),
        Item::new("exit", "Exit"),
    ]
}

/// Long enough to scroll on most terminals.
fn sample_items() -> Vec<Item> {
    (1..=SAMPLE_COUNT)
        .map(|i| Item::new(format!("item-{:02}", i), format!("Sample item {}", i)))
        .collect()
}

fn banner<T: Terminal + ?Sized>(term: &mut T, title: &str) -> Result<()> {
    term.write_line("------------------")?;
    term.write_line(title)?;
    term.write_line("------------------")?;
    Ok(())
}

fn green_highlight(base: ArrowSelectOptions) -> ArrowSelectOptions {
    ArrowSelectOptions {
        theme: Theme {
            selected: RowStyle::new(Some(Color::Green), None),
            ..base.theme
        },
        ..base
    }
}

fn inverse() -> ArrowSelectOptions {
    ArrowSelectOptions {
        selected_prefix: "-> ".to_string(),
        not_selected_prefix: "   ".to_string(),
        theme: Theme {
            selected: RowStyle::new(Some(Color::Black), Some(Color::White)),
            not_selected: RowStyle::new(Some(Color::White), Some(Color::Black)),
        },
    }
}

/// Loop over the main menu until "Exit" is chosen.
pub fn run<T: Terminal + ?Sized>(term: &mut T, config: &ResolvedConfig) -> Result<()> {
    let menu_items = main_menu();
    let samples = sample_items();
    let main_opts = green_highlight(config.arrow_options());

    loop {
        banner(term, "Choose a demo:")?;
        let choice = SelectionMenu::new(&mut *term).arrow_select(&menu_items, &main_opts)?;
        if choice == "exit" {
            break;
        }

        let title = menu_items
            .iter()
            .find(|item| item.key == choice)
            .map(|item| item.label.as_str())
            .unwrap_or_default();
        term.write_line("")?;
        banner(term, title)?;

        let mut menu = SelectionMenu::new(&mut *term);
        let picked = match choice.as_str() {
            "input" => menu.input_select(&samples, &config.input_options())?,
            "multi" => menu
                .multi_select(&samples, &config.multi_options())?
                .join(","),
            "highlight" => menu.arrow_select(&samples, &main_opts)?,
            _ => menu.arrow_select(&samples, &inverse())?,
        };

        term.rewrite_line(&format!("Selected: {}", picked))?;
        term.write_line("")?;
        term.flush()?;
    }
    Ok(())
}
