//! `roster shell` - one collection and one theme for a whole session.
//!
//! The session loads the collection once on start, then reads one command
//! per line from stdin until `quit` or end of input. Failed operations are
//! reported and the session carries on; only I/O errors end it early.

use std::future::Future;
use std::io::{self, BufRead, IsTerminal};
use std::str::FromStr;

use thiserror::Error;
use tokio::runtime::Runtime;
use tracing::{debug, info};

use roster_core::{
    application::{ThemeControl, ThemeStore, UserCollection},
    domain::{DomainError, DomainValidator, NewUser, Theme, ThemeAction, UserId, UserPatch},
};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

const PROMPT: &str = "roster> ";

const HELP: &[(&str, &str)] = &[
    ("load", "Reload the collection from the remote"),
    ("list", "Show the loaded users"),
    ("show <id>", "Fetch one user from the remote"),
    ("create <email> <name...>", "Create a user"),
    ("update <id> name|email <value...>", "Change one field of a loaded user"),
    ("delete <id>", "Delete a loaded user"),
    ("theme [show|toggle|set <light|dark>]", "Show or change the theme"),
    ("help", "Show this list"),
    ("quit", "Leave the shell"),
];

// ── Command parsing ───────────────────────────────────────────────────────────

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Load,
    List,
    Show(UserId),
    Create(NewUser),
    Update(UserId, UserPatch),
    Delete(UserId),
    /// `None` only reports the current theme.
    Theme(Option<ThemeAction>),
    Help,
    Quit,
}

/// Why a line could not be turned into a [`ShellCommand`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellParseError {
    #[error("Unknown command '{0}' (type 'help' for the list)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl FromStr for ShellCommand {
    type Err = ShellParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(ShellParseError::Usage("help"));
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "load" | "refresh" => Self::Load,
            "list" | "ls" => Self::List,
            "show" => Self::Show(parse_id(words.next(), "show <id>")?),
            "delete" | "rm" => Self::Delete(parse_id(words.next(), "delete <id>")?),
            "create" | "add" => {
                const USAGE: &str = "create <email> <name...>";
                let email = words.next().ok_or(ShellParseError::Usage(USAGE))?;
                let name = rest(words);
                Self::Create(DomainValidator::validate_draft(&name, email)?)
            }
            "update" | "edit" => {
                const USAGE: &str = "update <id> name|email <value...>";
                let id = parse_id(words.next(), USAGE)?;
                let field = words.next().ok_or(ShellParseError::Usage(USAGE))?;
                let value = rest(words);
                let patch = match field.to_ascii_lowercase().as_str() {
                    "name" => DomainValidator::validate_patch(Some(&value), None)?,
                    "email" => DomainValidator::validate_patch(None, Some(&value))?,
                    _ => return Err(ShellParseError::Usage(USAGE)),
                };
                Self::Update(id, patch)
            }
            "theme" => match words.next().map(str::to_ascii_lowercase).as_deref() {
                None | Some("show") => Self::Theme(None),
                Some("toggle") => Self::Theme(Some(ThemeAction::Toggle)),
                Some("set") => {
                    let name = words
                        .next()
                        .ok_or(ShellParseError::Usage("theme set <light|dark>"))?;
                    Self::Theme(Some(ThemeAction::Set(name.parse::<Theme>()?)))
                }
                Some(_) => return Err(ShellParseError::Usage("theme [show|toggle|set <light|dark>]")),
            },
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(ShellParseError::Unknown(verb.to_string())),
        };
        Ok(command)
    }
}

fn parse_id(word: Option<&str>, usage: &'static str) -> Result<UserId, ShellParseError> {
    let word = word.ok_or(ShellParseError::Usage(usage))?;
    Ok(word.parse::<UserId>()?)
}

fn rest<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words.collect::<Vec<_>>().join(" ")
}

// ── Session ───────────────────────────────────────────────────────────────────

/// State that lives for one shell session.
struct Session<'a> {
    collection: UserCollection,
    theme: ThemeStore,
    rt: Runtime,
    output: &'a mut OutputManager,
}

impl Session<'_> {
    /// Execute one command. Returns `false` when the session should end.
    fn run(&mut self, command: ShellCommand) -> CliResult<bool> {
        debug!(?command, "Shell command");
        match command {
            ShellCommand::Load => {
                self.drive("Loading users...", self.collection.fetch_all());
                self.report_and_list()?;
            }
            ShellCommand::List => self.list()?,
            ShellCommand::Show(id) => {
                let spinner = self.output.spinner("Fetching user...");
                let result = self.rt.block_on(self.collection.gateway().get(id));
                spinner.finish_and_clear();
                match result {
                    Ok(user) => self.output.user(&user)?,
                    Err(e) => self.output.error(&e.to_string())?,
                }
            }
            ShellCommand::Create(draft) => {
                self.drive("Creating user...", self.collection.create(draft));
                self.report_and_list()?;
            }
            ShellCommand::Update(id, patch) => {
                self.drive("Updating user...", self.collection.update(id, patch));
                self.report_and_list()?;
            }
            ShellCommand::Delete(id) => {
                self.drive("Deleting user...", self.collection.remove(id));
                self.report_and_list()?;
            }
            ShellCommand::Theme(action) => {
                let theme = match action {
                    Some(action) => self.theme.dispatch(action),
                    None => self.theme.get(),
                };
                self.output.set_theme(theme);
                super::theme::render(theme, self.output)?;
            }
            ShellCommand::Help => self.help()?,
            ShellCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Block on one collection operation behind a spinner.
    fn drive<F: Future<Output = ()>>(&self, message: &str, operation: F) {
        let spinner = self.output.spinner(message);
        self.rt.block_on(operation);
        spinner.finish_and_clear();
    }

    fn report_and_list(&self) -> CliResult<()> {
        if let Some(message) = self.collection.last_error() {
            self.output.error(&message)?;
        }
        self.list()
    }

    fn list(&self) -> CliResult<()> {
        let snapshot = self.collection.snapshot();
        self.output.header(&format!("Users ({})", snapshot.len()))?;
        self.output.users(&snapshot.items)?;
        Ok(())
    }

    fn help(&self) -> CliResult<()> {
        self.output.header("Commands:")?;
        let width = HELP.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
        for (usage, text) in HELP {
            self.output.print(&format!("  {usage:<width$}  {text}"))?;
        }
        Ok(())
    }
}

/// Run the interactive session until `quit` or end of input.
pub fn execute(global: &GlobalArgs, config: &AppConfig, output: &mut OutputManager) -> CliResult<()> {
    let collection = super::build_collection(global, config)?;
    let rt = super::runtime()?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    let mut session = Session {
        collection,
        theme: ThemeStore::new(config.ui.theme),
        rt,
        output,
    };

    info!(interactive, "Shell started");
    if interactive {
        session
            .output
            .info("Type 'help' for the list of commands, 'quit' to leave.")?;
    }
    session.run(ShellCommand::Load)?;

    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        if interactive {
            session.output.prompt(PROMPT)?;
        }

        line.clear();
        let read = input
            .read_line(&mut line)
            .with_cli_context(|| "Failed to read from stdin")?;
        if read == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed.parse::<ShellCommand>() {
            Ok(command) => {
                if !session.run(command)? {
                    break;
                }
            }
            Err(e) => session.output.error(&e.to_string())?,
        }
    }

    info!("Shell finished");
    Ok(())
}
