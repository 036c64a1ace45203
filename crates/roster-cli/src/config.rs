//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--api-url`, `--no-color`), applied by [`AppConfig::apply_overrides`]
//! 2. Environment variables: `ROSTER_<SECTION>__<KEY>`, e.g. `ROSTER_API__BASE_URL`
//! 3. Config file (`--config FILE`, else the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use roster_adapters::gateway::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use roster_core::{application::DEFAULT_DISPLAY_LIMIT, domain::Theme};

use crate::cli::global::GlobalArgs;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote API settings.
    pub api: ApiConfig,
    /// Local collection settings.
    pub collection: CollectionConfig,
    /// Presentation settings.
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Users resource URL.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// How many users a fetch keeps.
    pub display_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme a session starts in.
    pub theme: Theme,
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.into(),
                timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            },
            collection: CollectionConfig {
                display_limit: DEFAULT_DISPLAY_LIMIT,
            },
            ui: UiConfig {
                theme: Theme::default(),
                no_color: false,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file, and environment.
    ///
    /// An explicitly given `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise built-in defaults")?;

        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        let config: Self = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix("ROSTER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Layer CLI flags over the loaded values.
    pub fn apply_overrides(&mut self, args: &GlobalArgs) {
        if let Some(url) = &args.api_url {
            self.api.base_url = url.clone();
        }
        if args.no_color {
            self.ui.no_color = true;
        }
    }

    /// Reject values the rest of the program cannot work with.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api.base_url.trim().is_empty() {
            bail!("api.base_url must not be empty");
        }
        if self.api.timeout_secs == 0 {
            bail!("api.timeout_secs must be at least 1");
        }
        if self.collection.display_limit == 0 {
            bail!("collection.display_limit must be at least 1");
        }
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.roster.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "roster", "roster")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".roster.toml"))
    }

    /// The file that `load` reads, given the `--config` flag.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file.map_or_else(Self::config_path, Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::cli::OutputFormat;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn args() -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Plain,
            offline: false,
            api_url: None,
        }
    }

    #[test]
    fn defaults_match_fixture_api() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.collection.display_limit, 5);
        assert_eq!(cfg.ui.theme, Theme::Light);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_config(
            "[collection]\ndisplay_limit = 3\n\n[ui]\ntheme = \"dark\"\nno_color = true\n",
        );

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();

        assert_eq!(cfg.collection.display_limit, 3);
        assert_eq!(cfg.ui.theme, Theme::Dark);
        assert!(cfg.ui.no_color);
        assert_eq!(cfg.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let path = PathBuf::from("/definitely/not/here/roster.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn zero_display_limit_is_rejected() {
        let file = write_config("[collection]\ndisplay_limit = 0\n");
        assert!(AppConfig::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let file = write_config("[ui]\ntheme = \"sepia\"\n");
        assert!(AppConfig::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn cli_flags_win() {
        let mut cfg = AppConfig::default();
        let mut flags = args();
        flags.api_url = Some("http://localhost:9000/users".into());
        flags.no_color = true;

        cfg.apply_overrides(&flags);

        assert_eq!(cfg.api.base_url, "http://localhost:9000/users");
        assert!(cfg.ui.no_color);
    }

    #[test]
    fn default_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn active_path_prefers_flag() {
        let flag = PathBuf::from("custom.toml");
        assert_eq!(AppConfig::active_path(Some(&flag)), flag);
        assert_eq!(AppConfig::active_path(None), AppConfig::config_path());
    }
}
