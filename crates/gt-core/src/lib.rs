//! Core domain entities, ranking and selection rules for goto.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Maximum number of history entries kept on disk.
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// Errors returned by core validation and domain rules.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Returned when a validation rule is violated.
    #[error("validation error: {0}")]
    Validation(String),
    /// Returned when repository operations fail.
    #[error("storage error: {0}")]
    Storage(String),
}

/// A bookmarked path (or URL) as written in the configuration file.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Destination {
    /// Target directory or URL. A leading `~/` is expanded on use.
    pub path: String,
    /// Optional single-character quick-select key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
    /// Optional shell command to run on arrival.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Destination {
    /// Create a new destination, rejecting empty paths and multi-character shortcuts.
    pub fn new(
        path: impl Into<String>,
        shortcut: Option<String>,
        command: Option<String>,
    ) -> CoreResult<Self> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(CoreError::Validation("path cannot be empty".into()));
        }
        let shortcut = match shortcut {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(validate_shortcut(&value)?.to_string()),
            None => None,
        };
        let command = command.filter(|cmd| !cmd.trim().is_empty());
        Ok(Self {
            path,
            shortcut,
            command,
        })
    }
}

/// Destinations keyed by label.
pub type Destinations = BTreeMap<String, Destination>;

/// Check that a label is usable as a destination name.
pub fn validate_label(label: &str) -> CoreResult<&str> {
    let label = label.trim();
    if label.is_empty() {
        return Err(CoreError::Validation("label cannot be empty".into()));
    }
    Ok(label)
}

/// Check that a shortcut is exactly one character.
pub fn validate_shortcut(shortcut: &str) -> CoreResult<&str> {
    let shortcut = shortcut.trim();
    if shortcut.chars().count() != 1 {
        return Err(CoreError::Validation(format!(
            "shortcut must be a single character, got '{shortcut}'"
        )));
    }
    Ok(shortcut)
}

/// A record of the last time a label was navigated to.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Destination label.
    pub label: String,
    /// Timestamp of the most recent navigation.
    pub last_used: DateTime<Utc>,
}

/// Recency log of navigations.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct History {
    /// One entry per label, in no particular order.
    #[serde(default)]
    pub entries: Vec<HistoryEntry>,
}

impl History {
    /// Mark `label` as used at `now`, adding an entry if needed.
    pub fn touch(&mut self, label: &str, now: DateTime<Utc>) {
        match self.entries.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.last_used = now,
            None => self.entries.push(HistoryEntry {
                label: label.to_string(),
                last_used: now,
            }),
        }
    }

    /// Keep only the most recent entries. Returns true when entries were dropped.
    pub fn trim(&mut self) -> bool {
        if self.entries.len() <= MAX_HISTORY_ENTRIES {
            return false;
        }
        self.sort_recent_first();
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        true
    }

    /// Order entries from most to least recently used.
    pub fn sort_recent_first(&mut self) {
        self.entries.sort_by(|a, b| {
            b.last_used
                .cmp(&a.last_used)
                .then_with(|| a.label.cmp(&b.label))
        });
    }

    /// Last use of `label`, if it has ever been navigated to.
    pub fn last_used(&self, label: &str) -> Option<DateTime<Utc>> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.last_used)
    }

    /// Whether no navigation has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A destination joined with its label, as shown in menus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub path: String,
    pub shortcut: Option<String>,
    pub command: Option<String>,
}

impl Entry {
    fn from_destination(label: &str, destination: &Destination) -> Self {
        Self {
            label: label.to_string(),
            path: destination.path.clone(),
            shortcut: destination.shortcut.clone(),
            command: destination.command.clone(),
        }
    }

    /// Path with a leading `~` expanded to the home directory.
    pub fn expanded_path(&self) -> String {
        gt_utils::expand_path(&self.path)
    }

    /// Whether this entry points at a web page instead of a directory.
    pub fn is_url(&self) -> bool {
        gt_utils::is_url(&self.path)
    }
}

/// Build the menu order: recently used first, the rest alphabetically.
///
/// Passing `None` for the history (for example when the history file could
/// not be read) yields a purely alphabetical list.
pub fn rank_entries(destinations: &Destinations, history: Option<&History>) -> Vec<Entry> {
    let recency: HashMap<&str, DateTime<Utc>> = history
        .map(|history| {
            history
                .entries
                .iter()
                .map(|entry| (entry.label.as_str(), entry.last_used))
                .collect()
        })
        .unwrap_or_default();

    let mut entries: Vec<Entry> = destinations
        .iter()
        .map(|(label, destination)| Entry::from_destination(label, destination))
        .collect();

    entries.sort_by(|a, b| {
        match (recency.get(a.label.as_str()), recency.get(b.label.as_str())) {
            (Some(time_a), Some(time_b)) => time_b.cmp(time_a).then_with(|| a.label.cmp(&b.label)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.label.cmp(&b.label),
        }
    });
    entries
}

/// Shortcut key to 1-based menu index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortcutMap {
    indices: HashMap<String, usize>,
}

impl ShortcutMap {
    /// Index the shortcuts of ranked entries. A later entry wins a shared shortcut.
    pub fn build(entries: &[Entry]) -> Self {
        let indices = entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                entry
                    .shortcut
                    .as_ref()
                    .filter(|shortcut| !shortcut.is_empty())
                    .map(|shortcut| (shortcut.clone(), index + 1))
            })
            .collect();
        Self { indices }
    }

    /// 1-based index bound to `shortcut`.
    pub fn get(&self, shortcut: &str) -> Option<usize> {
        self.indices.get(shortcut).copied()
    }

    /// Whether `shortcut` is already bound.
    pub fn contains(&self, shortcut: &str) -> bool {
        self.indices.contains_key(shortcut)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Resolve user text to an entry: number, then shortcut, then label.
///
/// Numbers are 1-based and bounds-checked; an out-of-range number does not
/// fall through to shortcut or label matching. Labels match case-insensitively.
pub fn resolve_choice<'a>(
    input: &str,
    entries: &'a [Entry],
    shortcuts: &ShortcutMap,
) -> Option<&'a Entry> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(number) = input.parse::<i64>() {
        return usize::try_from(number)
            .ok()
            .filter(|index| (1..=entries.len()).contains(index))
            .map(|index| &entries[index - 1]);
    }
    if let Some(index) = shortcuts.get(input) {
        return entries.get(index - 1);
    }
    let lowered = input.to_lowercase();
    entries
        .iter()
        .find(|entry| entry.label.to_lowercase() == lowered)
}

/// The decision produced by the interactive selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Go to the chosen entry.
    Navigate(Entry),
    /// Add the current working directory as a new destination.
    AddCurrent,
    /// Input ended or the terminal could not be used.
    Cancelled,
    /// The user asked to leave without choosing.
    Exit,
}

/// Read and update the configured destinations.
pub trait DestinationRepository {
    /// Load all destinations.
    fn load(&self) -> CoreResult<Destinations>;
    /// Persist a new destination under `label`.
    fn append(&self, label: &str, destination: &Destination) -> CoreResult<()>;
}

/// Read and update the navigation history.
pub trait HistoryRepository {
    /// Load the history, trimmed to the most recent entries.
    fn load(&self) -> CoreResult<History>;
    /// Persist the history.
    fn save(&self, history: &History) -> CoreResult<()>;

    /// Record a navigation to `label` at `now`.
    fn record(&self, label: &str, now: DateTime<Utc>) -> CoreResult<()> {
        let mut history = self.load().unwrap_or_default();
        history.touch(label, now);
        self.save(&history)
    }
}
