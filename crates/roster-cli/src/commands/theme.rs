//! `roster theme` - drive the theme state machine once.
//!
//! The store starts at `ui.theme` from the configuration. Changes last for
//! this invocation only; use `roster shell` to keep a theme across commands.

use serde_json::json;

use roster_core::{
    application::{ThemeControl, ThemeStore},
    domain::Theme,
};

use crate::{
    cli::ThemeCommands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(cmd: ThemeCommands, config: &AppConfig, output: &mut OutputManager) -> CliResult<()> {
    let changes = !matches!(cmd, ThemeCommands::Show);
    let store = ThemeStore::new(config.ui.theme);
    let theme = apply(&store, cmd);
    output.set_theme(theme);
    render(theme, output)?;
    if changes {
        output.warning("Not saved; set ui.theme in the config file to keep it")?;
    }
    Ok(())
}

/// Run one theme command against `store` and return the resulting theme.
pub fn apply(store: &dyn ThemeControl, cmd: ThemeCommands) -> Theme {
    match cmd {
        ThemeCommands::Show => store.get(),
        ThemeCommands::Toggle => store.toggle(),
        ThemeCommands::Set { theme } => {
            store.set(theme.into());
            store.get()
        }
    }
}

pub fn render(theme: Theme, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(&json!({ "theme": theme }))?;
    } else {
        output.header(&format!("Theme: {theme}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ThemeArg;

    #[test]
    fn show_does_not_change_theme() {
        let store = ThemeStore::new(Theme::Dark);
        assert_eq!(apply(&store, ThemeCommands::Show), Theme::Dark);
        assert_eq!(store.get(), Theme::Dark);
    }

    #[test]
    fn toggle_flips() {
        let store = ThemeStore::new(Theme::Light);
        assert_eq!(apply(&store, ThemeCommands::Toggle), Theme::Dark);
        assert_eq!(apply(&store, ThemeCommands::Toggle), Theme::Light);
    }

    #[test]
    fn set_is_idempotent() {
        let store = ThemeStore::new(Theme::Light);
        let set_dark = || ThemeCommands::Set {
            theme: ThemeArg::Dark,
        };
        assert_eq!(apply(&store, set_dark()), Theme::Dark);
        assert_eq!(apply(&store, set_dark()), Theme::Dark);
    }
}
