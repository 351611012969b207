// cli.rs - CLI argument parsing and command dispatch

use crate::demo;
use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use qselect::config::{resolve_config, resolve_config_dir, MenuConfig};
use qselect::select::item::load_items_file;
use qselect::{Color, CrosstermTerminal, Item, SelectionMenu};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "qselect",
    version,
    about = "Pick items from a list in the terminal: by number, with the arrow keys, or several at once."
)]
pub struct Cli {
    /// Config file layered on top of qselect.json and qselect.local.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a numbered list and read the number of the choice
    Input {
        #[command(flatten)]
        items: ItemArgs,

        /// Prompt written before each answer
        #[arg(long, allow_hyphen_values = true)]
        prompt: Option<String>,

        /// Entry format: {0} is the number, {1} the label
        #[arg(long, allow_hyphen_values = true)]
        template: Option<String>,
    },

    /// Pick one item with the arrow keys and Enter
    Arrow {
        #[command(flatten)]
        items: ItemArgs,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Toggle items with Space, confirm with Enter
    Multi {
        #[command(flatten)]
        items: ItemArgs,

        #[command(flatten)]
        style: StyleArgs,

        /// Marker for toggled rows
        #[arg(long, allow_hyphen_values = true)]
        checked_prefix: Option<String>,

        /// Marker for rows not toggled
        #[arg(long, allow_hyphen_values = true)]
        unchecked_prefix: Option<String>,
    },

    /// Walk through every menu style
    Demo,
}

#[derive(Args, Debug, Default)]
pub struct ItemArgs {
    /// Items as KEY=LABEL (a bare LABEL is its own key)
    pub items: Vec<String>,

    /// JSON file of items: [{"key": .., "label": ..}] or {"key": "label"}
    #[arg(long)]
    pub items_file: Option<PathBuf>,
}

impl ItemArgs {
    /// File items first, then positional ones.
    fn load(&self) -> Result<Vec<Item>> {
        let mut items = match &self.items_file {
            Some(path) => load_items_file(path)?,
            None => Vec::new(),
        };
        items.extend(self.items.iter().map(|arg| Item::parse(arg)));
        Ok(items)
    }
}

#[derive(Args, Debug, Default)]
pub struct StyleArgs {
    /// Prefix of the row under the cursor
    #[arg(long, allow_hyphen_values = true)]
    pub cursor_prefix: Option<String>,

    /// Prefix of every other row
    #[arg(long, allow_hyphen_values = true)]
    pub idle_prefix: Option<String>,

    /// Foreground of highlighted rows
    #[arg(long)]
    pub selected_fg: Option<Color>,

    /// Background of highlighted rows
    #[arg(long)]
    pub selected_bg: Option<Color>,

    /// Foreground of other rows
    #[arg(long)]
    pub not_selected_fg: Option<Color>,

    /// Background of other rows
    #[arg(long)]
    pub not_selected_bg: Option<Color>,
}

impl StyleArgs {
    fn to_config(&self) -> MenuConfig {
        MenuConfig {
            cursor_prefix: self.cursor_prefix.clone(),
            idle_prefix: self.idle_prefix.clone(),
            selected_fg: self.selected_fg,
            selected_bg: self.selected_bg,
            not_selected_fg: self.not_selected_fg,
            not_selected_bg: self.not_selected_bg,
            ..Default::default()
        }
    }
}

impl Command {
    /// The command-line layer of the config.
    fn overrides(&self) -> MenuConfig {
        match self {
            Command::Input {
                prompt, template, ..
            } => MenuConfig {
                prompt: prompt.clone(),
                template: template.clone(),
                ..Default::default()
            },
            Command::Arrow { style, .. } => style.to_config(),
            Command::Multi {
                style,
                checked_prefix,
                unchecked_prefix,
                ..
            } => MenuConfig {
                checked_prefix: checked_prefix.clone(),
                unchecked_prefix: unchecked_prefix.clone(),
                ..style.to_config()
            },
            Command::Demo => MenuConfig::default(),
        }
    }
}

/// Main entry point after argument parsing. Results go to stdout, the
/// menus themselves draw on stderr.
pub fn run(args: Cli) -> Result<()> {
    if let Some(ref path) = args.config {
        if !path.is_file() {
            bail!("Config file does not exist: {}", path.display());
        }
    }

    let work_dir = std::env::current_dir()?;
    let config_dir = resolve_config_dir();
    let config = resolve_config(
        config_dir.as_deref(),
        &work_dir,
        args.config.as_deref(),
        args.command.overrides(),
    );
    debug!(?config, "resolved menu config");

    let mut term = CrosstermTerminal::stderr();
    match &args.command {
        Command::Input { items, .. } => {
            let items = items.load()?;
            let key = SelectionMenu::new(&mut term).input_select(&items, &config.input_options())?;
            println!("{}", key);
        }
        Command::Arrow { items, .. } => {
            let items = items.load()?;
            let key = SelectionMenu::new(&mut term).arrow_select(&items, &config.arrow_options())?;
            println!("{}", key);
        }
        Command::Multi { items, .. } => {
            let items = items.load()?;
            let keys = SelectionMenu::new(&mut term).multi_select(&items, &config.multi_options())?;
            for key in keys {
                println!("{}", key);
            }
        }
        Command::Demo => demo::run(&mut term, &config)?,
    }
    Ok(())
}
