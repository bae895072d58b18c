//! Filesystem-backed persistence for goto destinations and history.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, warn};

use gt_core::{
    CoreError, CoreResult, Destination, DestinationRepository, Destinations, History,
    HistoryEntry, HistoryRepository,
};

/// Default configuration file name, relative to the home directory.
pub const CONFIG_FILE_NAME: &str = ".goto.toml";

/// Default history file name, relative to the home directory.
pub const HISTORY_FILE_NAME: &str = ".goto.history.json";

/// Environment variable overriding the configuration file path.
pub const CONFIG_ENV_VAR: &str = "GOTO_CONFIG_FILE";

/// Environment variable overriding the history file path.
pub const HISTORY_ENV_VAR: &str = "GOTO_HISTORY_FILE";

/// Table name of the history section older versions kept inside the config.
const LEGACY_HISTORY_KEY: &str = "history";

/// Configuration written on first run.
pub const DEFAULT_CONFIG: &str = r#"# Configuration for the "goto" command using TOML format
[Home]
path = "~/"
shortcut = "h"
command = "ls -la && echo 'Welcome to home directory!'"

[Desktop]
path = "~/Desktop"
shortcut = "d"

[Downloads]
path = "~/Downloads"
shortcut = "b"

[Documents]
path = "~/Documents"
shortcut = "D"

[goto-config]
path = "~/"
shortcut = "e"
command = "vi ~/.goto.toml"

["goto-web"]
path = "https://github.com/kujirahand/goto"

["kujirahand.com"]
path = "https://kujirahand.com"
shortcut = "K"
"#;

/// Resolve the configuration file: explicit path, then `GOTO_CONFIG_FILE`, then `~/.goto.toml`.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> CoreResult<PathBuf> {
    resolve_path(
        explicit,
        std::env::var(CONFIG_ENV_VAR).ok(),
        dirs::home_dir(),
        CONFIG_FILE_NAME,
    )
}

/// Resolve the history file: explicit path, then `GOTO_HISTORY_FILE`, then `~/.goto.history.json`.
pub fn resolve_history_path(explicit: Option<PathBuf>) -> CoreResult<PathBuf> {
    resolve_path(
        explicit,
        std::env::var(HISTORY_ENV_VAR).ok(),
        dirs::home_dir(),
        HISTORY_FILE_NAME,
    )
}

fn resolve_path(
    explicit: Option<PathBuf>,
    env_value: Option<String>,
    home: Option<PathBuf>,
    file_name: &str,
) -> CoreResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(value) = env_value {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    if let Some(home) = home {
        return Ok(home.join(file_name));
    }
    Err(CoreError::Storage(
        "unable to determine the home directory".into(),
    ))
}

/// A parsed configuration file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    /// Destinations keyed by label.
    pub destinations: Destinations,
    /// History entries embedded by older versions, if any.
    pub legacy_history: Vec<HistoryEntry>,
}

/// TOML configuration file holding the destinations.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the path of the configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the default configuration. Existing files are left untouched.
    pub fn create_default(&self) -> CoreResult<()> {
        if self.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| CoreError::Storage(err.to_string()))?;
        }
        fs::write(&self.path, DEFAULT_CONFIG)
            .map_err(|err| CoreError::Storage(err.to_string()))?;
        debug!("created default config at {}", self.path.display());
        Ok(())
    }

    /// Parse the whole file, including a legacy embedded history section.
    pub fn load_document(&self) -> CoreResult<ConfigDocument> {
        let contents =
            fs::read_to_string(&self.path).map_err(|err| CoreError::Storage(err.to_string()))?;
        debug!("loading config from {}", self.path.display());
        parse_config(&contents)
    }
}

impl DestinationRepository for ConfigFile {
    fn load(&self) -> CoreResult<Destinations> {
        self.load_document().map(|document| document.destinations)
    }

    fn append(&self, label: &str, destination: &Destination) -> CoreResult<()> {
        if self.exists() && self.load()?.contains_key(label) {
            return Err(CoreError::Validation(format!(
                "label '{label}' already exists"
            )));
        }
        let rendered = render_destination(label, destination)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| CoreError::Storage(err.to_string()))?;
        write!(file, "\n{rendered}").map_err(|err| CoreError::Storage(err.to_string()))?;
        Ok(())
    }
}

/// Render a single destination as a TOML table.
pub fn render_destination(label: &str, destination: &Destination) -> CoreResult<String> {
    let mut table = BTreeMap::new();
    table.insert(label, destination);
    toml::to_string(&table).map_err(|err| CoreError::Storage(err.to_string()))
}

/// Parse configuration text into destinations and legacy history.
pub fn parse_config(contents: &str) -> CoreResult<ConfigDocument> {
    let table: toml::Table = contents
        .parse()
        .map_err(|err: toml::de::Error| CoreError::Storage(err.to_string()))?;

    let mut document = ConfigDocument::default();
    for (key, value) in table {
        if key == LEGACY_HISTORY_KEY {
            if let toml::Value::Array(items) = &value {
                document.legacy_history = items.iter().filter_map(parse_legacy_entry).collect();
                continue;
            }
        }
        match value {
            toml::Value::Table(_) => {
                let destination: Destination = value
                    .try_into()
                    .map_err(|err| CoreError::Storage(format!("destination '{key}': {err}")))?;
                document.destinations.insert(key, destination);
            }
            other => warn!("ignoring config value '{key}' of type {}", other.type_str()),
        }
    }
    Ok(document)
}

fn parse_legacy_entry(item: &toml::Value) -> Option<HistoryEntry> {
    let label = item.get("label")?.as_str()?.to_string();
    let raw = match item.get("last_used")? {
        toml::Value::String(text) => text.clone(),
        toml::Value::Datetime(datetime) => datetime.to_string(),
        _ => return None,
    };
    let last_used = DateTime::parse_from_rfc3339(&raw).ok()?.with_timezone(&Utc);
    Some(HistoryEntry { label, last_used })
}

/// JSON file holding the navigation history.
#[derive(Debug, Clone)]
pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the path of the history file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, history: &History) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| CoreError::Storage(err.to_string()))?;
        }
        let contents = serde_json::to_string_pretty(history)
            .map_err(|err| CoreError::Storage(err.to_string()))?;
        fs::write(&self.path, contents).map_err(|err| CoreError::Storage(err.to_string()))?;
        Ok(())
    }
}

impl HistoryRepository for HistoryFile {
    /// Missing files read as an empty history. Oversized files are trimmed
    /// and written back before returning.
    fn load(&self) -> CoreResult<History> {
        if !self.path.exists() {
            return Ok(History::default());
        }
        let contents =
            fs::read_to_string(&self.path).map_err(|err| CoreError::Storage(err.to_string()))?;
        let mut history: History =
            serde_json::from_str(&contents).map_err(|err| CoreError::Storage(err.to_string()))?;
        if history.trim() {
            debug!("trimmed history at {}", self.path.display());
            if let Err(err) = self.write(&history) {
                warn!("failed to save trimmed history: {err}");
            }
        }
        Ok(history)
    }

    fn save(&self, history: &History) -> CoreResult<()> {
        let mut history = history.clone();
        history.trim();
        self.write(&history)
    }
}
