//! Command line options and the optional TOML config file.
//!
//! Values given on the command line win over the file, which wins over the
//! built-in defaults.

use crate::app::state::DEFAULT_SUGGESTIONS;
use crate::domain::navigation::HOME_PATH;
use crate::domain::submission::SubmitterOptions;
use crate::infrastructure::http_adapter::{Credentials, HttpSettings};
use crate::theme::PaletteType;
use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_URL: &str = "http://localhost:1312";

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "textabus-console",
    version,
    about = "Terminal console for a textabus server"
)]
pub struct Cli {
    /// Server base URL (env: TEXTABUS_URL, default: http://localhost:1312)
    #[arg(long, env = "TEXTABUS_URL")]
    pub url: Option<String>,

    /// Config file (default: ~/.config/textabus/console.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimal REPL: no progress indicator while a command is in flight
    #[arg(long)]
    pub repl: bool,

    /// Hide the progress indicator
    #[arg(long)]
    pub no_progress: bool,

    /// Page to open first, e.g. /admin/numbers
    #[arg(long)]
    pub page: Option<String>,

    /// Write logs here instead of the default location
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub server: ServerSection,
    pub console: ConsoleSection,
    pub log: LogSection,
    pub theme: Option<PaletteType>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub connect_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleSection {
    pub progress: Option<bool>,
    pub suggestions: Option<Vec<String>>,
    pub start_page: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub file: Option<PathBuf>,
    pub filter: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("textabus");
        path.push("console.toml");
        path
    })
}

pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("textabus-console.log")
}

/// Everything the binary needs after merging the command line and the file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub http: HttpSettings,
    pub submitter: SubmitterOptions,
    pub suggestions: Vec<String>,
    pub start_page: String,
    pub palette: PaletteType,
    pub log_file: PathBuf,
    pub log_filter: Option<String>,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        // An explicit path must exist; the default one is optional
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => FileConfig::load(&path)?,
                _ => FileConfig::default(),
            },
        };
        Ok(Self::merge(cli, file))
    }

    pub fn merge(cli: &Cli, file: FileConfig) -> Self {
        let FileConfig {
            server,
            console,
            log,
            theme,
        } = file;

        let base_url = cli
            .url
            .clone()
            .or(server.url)
            .unwrap_or_else(|| DEFAULT_URL.to_string());

        let credentials = server.username.map(|username| Credentials {
            username,
            password: server.password,
        });

        let show_progress = !(cli.repl || cli.no_progress) && console.progress.unwrap_or(true);

        let suggestions = console.suggestions.unwrap_or_else(|| {
            DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
        });

        let start_page = cli
            .page
            .clone()
            .or(console.start_page)
            .map(|p| normalize_path(&p))
            .unwrap_or_else(|| HOME_PATH.to_string());

        Self {
            base_url,
            http: HttpSettings {
                credentials,
                connect_timeout: server.connect_timeout_secs.map(Duration::from_secs),
            },
            submitter: SubmitterOptions { show_progress },
            suggestions,
            start_page,
            palette: theme.unwrap_or_default(),
            log_file: cli
                .log_file
                .clone()
                .or(log.file)
                .unwrap_or_else(default_log_path),
            log_filter: log.filter,
        }
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
