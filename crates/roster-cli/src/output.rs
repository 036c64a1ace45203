//! Output management and formatting.
//!
//! Everything the user sees on stdout goes through [`OutputManager`]. The
//! current [`Theme`] picks the accent colour for headers and the table.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::{Term, measure_text_width};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use roster_core::domain::{Theme, User};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    theme: Theme,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.ui.no_color
                || resolved_format != OutputFormat::Human,
            theme: config.ui.theme,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet || self.is_json() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet || self.is_json() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet || self.is_json() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold header line in the theme's accent colour.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet || self.is_json() {
            return Ok(());
        }
        let line = self.accent(text);
        self.term.write_line(&line)
    }

    /// Prompt text without a trailing newline.
    pub fn prompt(&self, text: &str) -> io::Result<()> {
        let text = self.accent(text);
        self.term.write_str(&text)?;
        self.term.flush()
    }

    /// Pretty JSON on stdout. Written even in quiet mode.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Render users as a table, or as a JSON array in JSON mode.
    pub fn users(&self, users: &[User]) -> io::Result<()> {
        if self.is_json() {
            return self.json(users);
        }
        if self.quiet {
            return Ok(());
        }
        if users.is_empty() {
            return self.term.write_line("(no users)");
        }
        for line in self.user_table(users) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }

    /// Render one user as `key: value` lines, or as a JSON object.
    pub fn user(&self, user: &User) -> io::Result<()> {
        if self.is_json() {
            return self.json(user);
        }
        if self.quiet {
            return Ok(());
        }
        self.term
            .write_line(&format!("{}    {}", self.accent("id:"), user.id))?;
        self.term
            .write_line(&format!("{}  {}", self.accent("name:"), user.name))?;
        self.term
            .write_line(&format!("{} {}", self.accent("email:"), user.email))
    }

    /// Spinner shown while an operation is awaiting the remote.
    ///
    /// Hidden unless the output is a human-facing terminal.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.quiet || self.resolved_format != OutputFormat::Human {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(msg.to_owned());
        bar.enable_steady_tick(Duration::from_millis(80));
        bar
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    /// Follow a theme change made during the session.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    // ── Internal helpers ──────────────────────────────────────────────────

    fn accent(&self, text: &str) -> String {
        if self.no_color {
            return text.to_owned();
        }
        match self.theme {
            Theme::Light => text.blue().bold().to_string(),
            Theme::Dark => text.bright_cyan().bold().to_string(),
        }
    }

    fn user_table(&self, users: &[User]) -> Vec<String> {
        let id_width = users
            .iter()
            .map(|u| u.id.to_string().len())
            .max()
            .unwrap_or(0)
            .max("ID".len());
        let name_width = users
            .iter()
            .map(|u| measure_text_width(&u.name))
            .max()
            .unwrap_or(0)
            .max("NAME".len());

        let heading = format!("{:>id_width$}  {:<name_width$}  EMAIL", "ID", "NAME");
        let mut lines = vec![self.accent(&heading)];
        lines.extend(users.iter().map(|u| {
            let pad = name_width.saturating_sub(measure_text_width(&u.name));
            format!(
                "{:>id_width$}  {}{}  {}",
                u.id.get(),
                u.name,
                " ".repeat(pad),
                u.email
            )
        }));
        lines
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
