// config.rs - Menu config loading and layer merging

use crate::select::menu::{ArrowSelectOptions, InputSelectOptions, MultiSelectOptions};
use crate::select::theme::{Color, RowStyle, Theme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const CONFIG_FILE: &str = "qselect.json";
pub const LOCAL_CONFIG_FILE: &str = "qselect.local.json";

/// Menu appearance with Option fields for layered merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    pub prompt: Option<String>,
    pub template: Option<String>,
    pub cursor_prefix: Option<String>,
    pub idle_prefix: Option<String>,
    pub checked_prefix: Option<String>,
    pub unchecked_prefix: Option<String>,
    pub selected_fg: Option<Color>,
    pub selected_bg: Option<Color>,
    pub not_selected_fg: Option<Color>,
    pub not_selected_bg: Option<Color>,
}

/// Resolved config with concrete values. Colors stay optional: absent
/// means "leave the terminal's color alone".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub prompt: String,
    pub template: String,
    pub cursor_prefix: String,
    pub idle_prefix: String,
    pub checked_prefix: String,
    pub unchecked_prefix: String,
    pub theme: Theme,
}

impl MenuConfig {
    /// Merge another config on top of self (other wins for present fields).
    pub fn merge(self, other: MenuConfig) -> MenuConfig {
        MenuConfig {
            prompt: other.prompt.or(self.prompt),
            template: other.template.or(self.template),
            cursor_prefix: other.cursor_prefix.or(self.cursor_prefix),
            idle_prefix: other.idle_prefix.or(self.idle_prefix),
            checked_prefix: other.checked_prefix.or(self.checked_prefix),
            unchecked_prefix: other.unchecked_prefix.or(self.unchecked_prefix),
            selected_fg: other.selected_fg.or(self.selected_fg),
            selected_bg: other.selected_bg.or(self.selected_bg),
            not_selected_fg: other.not_selected_fg.or(self.not_selected_fg),
            not_selected_bg: other.not_selected_bg.or(self.not_selected_bg),
        }
    }

    /// Resolve to concrete values, falling back to the menu defaults.
    pub fn resolve(self) -> ResolvedConfig {
        let input = InputSelectOptions::default();
        let multi = MultiSelectOptions::default();
        ResolvedConfig {
            prompt: self.prompt.unwrap_or(input.prompt),
            template: self.template.unwrap_or(input.template),
            cursor_prefix: self.cursor_prefix.unwrap_or(multi.cursor_prefix),
            idle_prefix: self.idle_prefix.unwrap_or(multi.idle_prefix),
            checked_prefix: self.checked_prefix.unwrap_or(multi.checked_prefix),
            unchecked_prefix: self.unchecked_prefix.unwrap_or(multi.unchecked_prefix),
            theme: Theme {
                selected: RowStyle::new(self.selected_fg, self.selected_bg),
                not_selected: RowStyle::new(self.not_selected_fg, self.not_selected_bg),
            },
        }
    }
}

impl ResolvedConfig {
    pub fn input_options(&self) -> InputSelectOptions {
        InputSelectOptions {
            prompt: self.prompt.clone(),
            template: self.template.clone(),
        }
    }

    pub fn arrow_options(&self) -> ArrowSelectOptions {
        ArrowSelectOptions {
            selected_prefix: self.cursor_prefix.clone(),
            not_selected_prefix: self.idle_prefix.clone(),
            theme: self.theme,
        }
    }

    pub fn multi_options(&self) -> MultiSelectOptions {
        MultiSelectOptions {
            cursor_prefix: self.cursor_prefix.clone(),
            idle_prefix: self.idle_prefix.clone(),
            checked_prefix: self.checked_prefix.clone(),
            unchecked_prefix: self.unchecked_prefix.clone(),
            theme: self.theme,
        }
    }
}

/// Load a JSON file as MenuConfig. Missing files yield the default
/// silently; unreadable or malformed ones are skipped with a warning.
pub fn load_menu_config(path: &Path) -> MenuConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return MenuConfig::default(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping unreadable config");
            return MenuConfig::default();
        }
    };
    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping malformed config");
            MenuConfig::default()
        }
    }
}

/// Resolve the user config directory (respects QSELECT_CONFIG_DIR env var).
pub fn resolve_config_dir() -> Option<PathBuf> {
    std::env::var_os("QSELECT_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("qselect")))
}

/// Merge config layers (lowest -> highest priority):
///   1. Built-in defaults
///   2. `<config dir>/config.json`
///   3. `<work dir>/qselect.json`
///   4. `<work dir>/qselect.local.json`
///   5. An explicit `--config` file
///   6. Command-line overrides
pub fn resolve_config(
    config_dir: Option<&Path>,
    work_dir: &Path,
    explicit: Option<&Path>,
    overrides: MenuConfig,
) -> ResolvedConfig {
    let mut layers = Vec::new();
    if let Some(dir) = config_dir {
        layers.push(load_menu_config(&dir.join("config.json")));
    }
    layers.push(load_menu_config(&work_dir.join(CONFIG_FILE)));
    layers.push(load_menu_config(&work_dir.join(LOCAL_CONFIG_FILE)));
    if let Some(path) = explicit {
        layers.push(load_menu_config(path));
    }
    layers.push(overrides);

    let mut config = MenuConfig::default();
    for layer in layers {
        config = config.merge(layer);
    }
    config.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_merge_overrides() {
        let base = MenuConfig {
            prompt: Some("?".to_string()),
            selected_fg: Some(Color::Green),
            ..Default::default()
        };
        let overlay = MenuConfig {
            selected_fg: Some(Color::Red),
            idle_prefix: Some("   ".to_string()),
            ..Default::default()
        };
        let merged = base.merge(overlay);
        assert_eq!(merged.prompt.as_deref(), Some("?"));
        assert_eq!(merged.selected_fg, Some(Color::Red));
        assert_eq!(merged.idle_prefix.as_deref(), Some("   "));
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = MenuConfig::default().resolve();
        assert_eq!(resolved.prompt, ">");
        assert_eq!(resolved.template, "[{0}] {1}");
        assert_eq!(resolved.cursor_prefix, "> ");
        assert_eq!(resolved.checked_prefix, "[*] ");
        assert_eq!(resolved.theme, Theme::default());
    }

    #[test]
    fn test_resolved_feeds_options() {
        let resolved = MenuConfig {
            cursor_prefix: Some("-> ".to_string()),
            selected_bg: Some(Color::White),
            ..Default::default()
        }
        .resolve();
        let arrow = resolved.arrow_options();
        assert_eq!(arrow.selected_prefix, "-> ");
        assert_eq!(arrow.theme.selected.bg, Some(Color::White));
        assert_eq!(resolved.multi_options().cursor_prefix, "-> ");
    }

    #[test]
    fn test_load_missing_file() {
        let config = load_menu_config(Path::new("/nonexistent/qselect.json"));
        assert_eq!(config, MenuConfig::default());
    }

    #[test]
    fn test_load_malformed_file_is_skipped() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_menu_config(&path), MenuConfig::default());

        fs::write(&path, r#"{"selected_fg": "mauve"}"#).unwrap();
        assert_eq!(load_menu_config(&path), MenuConfig::default());
    }

    #[test]
    fn test_layer_priority() {
        let config_dir = tempfile::TempDir::new().unwrap();
        let work_dir = tempfile::TempDir::new().unwrap();
        fs::write(
            config_dir.path().join("config.json"),
            r#"{"prompt": "user>", "template": "{0}. {1}", "selected_fg": "green"}"#,
        )
        .unwrap();
        fs::write(work_dir.path().join(CONFIG_FILE), r#"{"prompt": "repo>"}"#).unwrap();
        fs::write(
            work_dir.path().join(LOCAL_CONFIG_FILE),
            r#"{"selected_fg": "dark-cyan"}"#,
        )
        .unwrap();

        let resolved = resolve_config(
            Some(config_dir.path()),
            work_dir.path(),
            None,
            MenuConfig {
                template: Some("#{0} {1}".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(resolved.prompt, "repo>");
        assert_eq!(resolved.template, "#{0} {1}");
        assert_eq!(resolved.theme.selected.fg, Some(Color::DarkCyan));
    }

    #[test]
    fn test_explicit_file_beats_work_dir() {
        let work_dir = tempfile::TempDir::new().unwrap();
        fs::write(work_dir.path().join(CONFIG_FILE), r#"{"prompt": "repo>"}"#).unwrap();
        let explicit = work_dir.path().join("custom.json");
        fs::write(&explicit, r#"{"prompt": "custom>"}"#).unwrap();

        let resolved =
            resolve_config(None, work_dir.path(), Some(&explicit), MenuConfig::default());
        assert_eq!(resolved.prompt, "custom>");
    }
}
