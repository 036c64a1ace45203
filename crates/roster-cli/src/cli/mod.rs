//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use roster_core::domain::Theme;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "roster",
    bin_name = "roster",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "User directory client backed by a REST collection",
    long_about = "Roster loads, creates, edits and deletes users against a REST \
                  resource, keeping a local collection that only changes once \
                  the remote confirms.",
    after_help = "EXAMPLES:\n\
        \x20 roster users list\n\
        \x20 roster users create --name 'Ada Lovelace' --email ada@example.com\n\
        \x20 roster --offline shell\n\
        \x20 roster completions bash > /usr/share/bash-completion/completions/roster",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Work with the user collection.
    #[command(
        visible_alias = "u",
        about = "List, show, create, update and delete users",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 roster users list\n\
            \x20 roster users show 3\n\
            \x20 roster users update 3 --email new@example.com\n\
            \x20 roster users delete 3 --yes"
    )]
    Users(UsersCommands),

    /// Show or change the light/dark theme.
    #[command(
        about = "Show or change the theme",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 roster theme show\n\
            \x20 roster theme toggle\n\
            \x20 roster theme set dark"
    )]
    Theme(ThemeCommands),

    /// Start an interactive session holding one collection.
    #[command(
        about = "Interactive session",
        after_help = "Type 'help' inside the shell for the list of commands."
    )]
    Shell,

    /// Initialise a Roster configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 roster init                  # default location\n\
            \x20 roster init --path roster.toml\n\
            \x20 roster init --force          # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 roster completions bash > ~/.local/share/bash-completion/completions/roster\n\
            \x20 roster completions zsh  > ~/.zfunc/_roster\n\
            \x20 roster completions fish > ~/.config/fish/completions/roster.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Roster configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 roster config get collection.display_limit\n\
            \x20 roster config list\n\
            \x20 roster config path"
    )]
    Config(ConfigCommands),
}

// ── users ─────────────────────────────────────────────────────────────────────

/// Subcommands for `roster users`.
#[derive(Debug, Subcommand)]
pub enum UsersCommands {
    /// Load the collection and print it.
    #[command(visible_alias = "ls")]
    List,

    /// Fetch a single user straight from the remote.
    Show {
        /// User id.
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Create a user and append it to the collection.
    #[command(visible_alias = "add")]
    Create(CreateArgs),

    /// Change the name and/or email of a loaded user.
    #[command(visible_alias = "edit")]
    Update(UpdateArgs),

    /// Delete a loaded user.
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

/// Arguments for `roster users create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Display name.
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: String,

    /// Email address.
    #[arg(short = 'e', long = "email", value_name = "EMAIL")]
    pub email: String,
}

/// Arguments for `roster users update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Id of the user to change.
    #[arg(value_name = "ID")]
    pub id: u64,

    /// New display name.
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// New email address.
    #[arg(short = 'e', long = "email", value_name = "EMAIL")]
    pub email: Option<String>,
}

/// Arguments for `roster users delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the user to delete.
    #[arg(value_name = "ID")]
    pub id: u64,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Delete without asking")]
    pub yes: bool,
}

// ── theme ─────────────────────────────────────────────────────────────────────

/// Subcommands for `roster theme`.
#[derive(Debug, Subcommand)]
pub enum ThemeCommands {
    /// Print the current theme.
    Show,
    /// Flip between light and dark.
    Toggle,
    /// Set a specific theme.
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

/// Theme names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `roster init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to this file instead of the platform config location.
    #[arg(long = "path", value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `roster completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `roster config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `api.base_url`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn theme_arg_converts() {
        assert_eq!(Theme::from(ThemeArg::Light), Theme::Light);
        assert_eq!(Theme::from(ThemeArg::Dark), Theme::Dark);
    }

    #[test]
    fn parse_users_create() {
        let cli = Cli::parse_from([
            "roster", "users", "create", "--name", "Ada", "--email", "ada@x.com",
        ]);
        match cli.command {
            Commands::Users(UsersCommands::Create(args)) => {
                assert_eq!(args.name, "Ada");
                assert_eq!(args.email, "ada@x.com");
            }
            other => panic!("expected users create, got {other:?}"),
        }
    }

    #[test]
    fn parse_update_with_only_email() {
        let cli = Cli::parse_from(["roster", "users", "update", "3", "-e", "b@x.com"]);
        match cli.command {
            Commands::Users(UsersCommands::Update(args)) => {
                assert_eq!(args.id, 3);
                assert!(args.name.is_none());
                assert_eq!(args.email.as_deref(), Some("b@x.com"));
            }
            other => panic!("expected users update, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["roster", "users", "list", "--offline", "-vv"]);
        assert!(cli.global.offline);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(Cli::try_parse_from(["roster", "users", "show", "abc"]).is_err());
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(Cli::try_parse_from(["roster", "theme", "set", "blue"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["roster", "--quiet", "--verbose", "users", "list"]);
        assert!(result.is_err());
    }
}
