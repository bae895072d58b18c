use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::Parser;

use gt_core::{
    rank_entries, resolve_choice, validate_label, Choice, Destination, DestinationRepository,
    Destinations, Entry, History, HistoryRepository, ShortcutMap,
};
use gt_fs::{resolve_config_path, resolve_history_path, ConfigFile, HistoryFile};
use gt_locale::{fill, Language, Messages};
use gt_tui::Mode;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE_WIDTH: usize = 50;

#[derive(Debug, Parser)]
#[command(
    name = "goto",
    about = "Navigate directories quickly",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Show help.
    #[arg(short = 'h', long)]
    help: bool,
    /// Show the version.
    #[arg(short = 'v', long)]
    version: bool,
    /// Print labels for shell completion.
    #[arg(long)]
    complete: bool,
    /// Print the usage history.
    #[arg(long)]
    history: bool,
    /// Add the current directory.
    #[arg(long)]
    add: bool,
    /// Print numbered destinations with their paths.
    #[arg(long)]
    list: bool,
    /// Print destination labels.
    #[arg(long)]
    list_label: bool,
    /// Start the menu in cursor mode.
    #[arg(short = 'c', conflicts_with = "label_mode")]
    cursor_mode: bool,
    /// Start the menu in label input mode.
    #[arg(short = 'l')]
    label_mode: bool,
    /// Configuration file to use.
    #[arg(long, value_name = "PATH")]
    config_file: Option<PathBuf>,
    /// History file to use.
    #[arg(long, value_name = "PATH")]
    history_file: Option<PathBuf>,
    /// Number, shortcut or label of the destination.
    target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Help,
    Version,
    Complete,
    History,
    Add,
    List,
    ListLabels,
    Navigate(String),
    Interactive(Mode),
}

impl Cli {
    fn action(&self) -> Action {
        let target = self.target.as_deref();
        if self.help || target == Some("help") {
            Action::Help
        } else if self.version || target == Some("version") {
            Action::Version
        } else if self.complete {
            Action::Complete
        } else if self.history {
            Action::History
        } else if self.add {
            Action::Add
        } else if self.list {
            Action::List
        } else if self.list_label {
            Action::ListLabels
        } else if let Some(target) = target {
            Action::Navigate(target.to_string())
        } else if self.label_mode {
            Action::Interactive(Mode::Line)
        } else {
            Action::Interactive(Mode::Cursor)
        }
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print().context("failed to print usage error")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let messages = Language::detect().messages();
    let config = ConfigFile::new(
        resolve_config_path(cli.config_file.clone())
            .context("failed to resolve configuration file")?,
    );
    let history = HistoryFile::new(
        resolve_history_path(cli.history_file.clone()).context("failed to resolve history file")?,
    );
    log::debug!(
        "config file {}, history file {}",
        config.path().display(),
        history.path().display()
    );

    let mut stdout = io::stdout();
    let action = cli.action();
    match action {
        Action::Help => {
            gt_tui::write_usage(&mut stdout, config.path(), messages)?;
            return Ok(ExitCode::SUCCESS);
        }
        Action::Version => {
            writeln!(stdout, "goto version {VERSION}")?;
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    if !config.exists() {
        if let Err(err) = config.create_default() {
            println!("{} {err}", messages.error_writing_config_file);
            return Ok(ExitCode::FAILURE);
        }
        eprintln!(
            "{} {}",
            messages.created_default_config,
            config.path().display()
        );
    }

    if action == Action::Add {
        return Ok(exit_code(add_from_stdin(&config, messages)?));
    }

    let document = match config.load_document() {
        Ok(document) => document,
        Err(err) => {
            write_config_error(&mut stdout, config.path(), &err.to_string(), messages)?;
            return Ok(ExitCode::FAILURE);
        }
    };
    let recent = match history.load() {
        Ok(recent) => Some(recent),
        Err(err) => {
            log::warn!(
                "ignoring unreadable history {}: {err}",
                history.path().display()
            );
            None
        }
    };

    let entries = rank_entries(&document.destinations, recent.as_ref());
    if entries.is_empty() {
        println!("{}", messages.no_destinations_configured);
        return Ok(ExitCode::FAILURE);
    }
    let shortcuts = ShortcutMap::build(&entries);

    match action {
        Action::Complete | Action::ListLabels => {
            write_labels(&mut stdout, &entries)?;
            Ok(ExitCode::SUCCESS)
        }
        Action::List => {
            write_list(&mut stdout, &entries)?;
            Ok(ExitCode::SUCCESS)
        }
        Action::History => {
            let recent = recent.unwrap_or_else(|| History {
                entries: document.legacy_history.clone(),
            });
            write_history(&mut stdout, &recent, &document.destinations, messages)?;
            Ok(ExitCode::SUCCESS)
        }
        Action::Navigate(target) => match resolve_choice(&target, &entries, &shortcuts) {
            Some(entry) => {
                println!("{} {}", messages.found_destination, entry.label);
                Ok(exit_code(open_entry(entry, &history, messages)))
            }
            None => {
                write_not_found(&mut stdout, &target, &entries, messages)?;
                Ok(ExitCode::FAILURE)
            }
        },
        Action::Interactive(mode) => {
            match gt_tui::select(&entries, &shortcuts, mode, config.path(), messages)? {
                Choice::Navigate(entry) => Ok(exit_code(open_entry(&entry, &history, messages))),
                Choice::AddCurrent => Ok(exit_code(add_from_stdin(&config, messages)?)),
                Choice::Cancelled | Choice::Exit => {
                    println!("{}", messages.no_directory_selected);
                    Ok(ExitCode::SUCCESS)
                }
            }
        }
        Action::Help | Action::Version | Action::Add => Ok(ExitCode::SUCCESS),
    }
}

/// Launch `entry` and record it in the history when the launch succeeds.
fn open_entry(entry: &Entry, history: &impl HistoryRepository, messages: &Messages) -> bool {
    if let Err(err) = gt_launch::launch(entry, messages) {
        log::debug!("launch of {} failed: {err}", entry.label);
        println!("{}", err.localized(messages));
        return false;
    }
    if let Err(err) = history.record(&entry.label, Utc::now()) {
        println!("{} {err}", messages.warning_failed_to_update_history);
    }
    true
}

fn add_from_stdin(config: &ConfigFile, messages: &Messages) -> Result<bool> {
    let current_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            println!("{} {err}", messages.error_getting_current_dir);
            return Ok(false);
        }
    };
    add_current_directory(
        config,
        &current_dir.to_string_lossy(),
        &mut io::stdin().lock(),
        &mut io::stdout(),
        messages,
    )
}

/// Ask for a label and shortcut, then append `current_dir` to the repository.
///
/// Returns `Ok(false)` when the user cancels or the input is rejected.
pub fn add_current_directory<R: BufRead, W: Write>(
    repository: &impl DestinationRepository,
    current_dir: &str,
    input: &mut R,
    out: &mut W,
    messages: &Messages,
) -> Result<bool> {
    writeln!(out, "{} {current_dir}", messages.current_directory)?;

    let destinations = match repository.load() {
        Ok(destinations) => destinations,
        Err(err) => {
            writeln!(out, "{} {err}", messages.error_reading_config)?;
            return Ok(false);
        }
    };
    let shortcuts = ShortcutMap::build(&rank_entries(&destinations, None));

    let Some(label) = prompt(input, out, messages.enter_label, messages)? else {
        return Ok(false);
    };
    let Ok(label) = validate_label(&label) else {
        writeln!(out, "{}", messages.label_cannot_be_empty)?;
        return Ok(false);
    };
    if destinations.contains_key(label) {
        writeln!(out, "{}", fill(messages.label_already_exists, label))?;
        return Ok(false);
    }

    let mut question = messages.enter_shortcut_optional;
    let shortcut = loop {
        let Some(shortcut) = prompt(input, out, question, messages)? else {
            return Ok(false);
        };
        if shortcut.is_empty() {
            break None;
        }
        if shortcut.chars().count() > 1 {
            question = messages.shortcut_must_be_single_char;
        } else if shortcuts.contains(&shortcut) {
            writeln!(out, "{}", fill(messages.shortcut_already_exists, &shortcut))?;
            question = messages.enter_shortcut_optional;
        } else {
            break Some(shortcut);
        }
    };

    let destination = match Destination::new(current_dir, shortcut, None) {
        Ok(destination) => destination,
        Err(err) => {
            writeln!(out, "{} {err}", messages.error_writing_config_file)?;
            return Ok(false);
        }
    };
    if let Err(err) = repository.append(label, &destination) {
        writeln!(out, "{} {err}", messages.error_writing_config_file)?;
        return Ok(false);
    }

    writeln!(out, "{} '{label}' → {current_dir}", messages.added)?;
    if let Some(shortcut) = &destination.shortcut {
        writeln!(out, "{} {shortcut}", messages.shortcut)?;
    }
    Ok(true)
}

/// Print `question` and read one trimmed line. `None` means the input ended.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
    messages: &Messages,
) -> Result<Option<String>> {
    write!(out, "{question} ")?;
    out.flush()?;
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => {}
        Ok(_) => return Ok(Some(line.trim().to_string())),
        Err(err) => log::debug!("prompt input failed: {err}"),
    }
    writeln!(out, "\n{}", messages.operation_cancelled)?;
    Ok(None)
}

fn write_config_error(
    out: &mut impl Write,
    config_path: &Path,
    details: &str,
    messages: &Messages,
) -> io::Result<()> {
    writeln!(out, "{}", messages.error_reading_config)?;
    writeln!(out, "📁 {}: {}", messages.config_file, config_path.display())?;
    writeln!(out, "🔍 {}: {details}", messages.error_details)?;
    writeln!(out, "💡 {}", messages.config_fix_suggestion)
}

fn write_labels(out: &mut impl Write, entries: &[Entry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}", entry.label)?;
    }
    Ok(())
}

fn write_list(out: &mut impl Write, entries: &[Entry]) -> io::Result<()> {
    for (index, entry) in entries.iter().enumerate() {
        writeln!(out, "{}", gt_tui::entry_row(index + 1, entry, 1, usize::MAX))?;
    }
    Ok(())
}

fn write_not_found(
    out: &mut impl Write,
    target: &str,
    entries: &[Entry],
    messages: &Messages,
) -> io::Result<()> {
    writeln!(out, "{}", fill(messages.destination_not_found, target))?;
    writeln!(out)?;
    writeln!(out, "{}", messages.available_destinations_list)?;
    for entry in entries {
        let shortcut = entry
            .shortcut
            .as_deref()
            .map(|key| format!(" ({key})"))
            .unwrap_or_default();
        writeln!(
            out,
            "  • {}{shortcut} → {}",
            entry.label,
            entry.expanded_path()
        )?;
    }
    Ok(())
}

fn write_history(
    out: &mut impl Write,
    history: &History,
    destinations: &Destinations,
    messages: &Messages,
) -> io::Result<()> {
    if history.is_empty() {
        return writeln!(out, "{}", messages.no_usage_history_found);
    }

    writeln!(out, "{}", messages.recent_usage_history)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    let mut sorted = history.clone();
    sorted.sort_recent_first();
    let count = sorted.entries.len();
    for (index, entry) in sorted.entries.iter().enumerate() {
        let path = destinations
            .get(&entry.label)
            .map(|destination| format!(" → {}", gt_utils::expand_path(&destination.path)))
            .unwrap_or_default();
        let used = entry.last_used.with_timezone(&Local);
        writeln!(out, "{:>2}. {}{path}", index + 1, entry.label)?;
        writeln!(out, "    📅 {}", used.format("%Y-%m-%d %H:%M:%S"))?;
        if index + 1 < count {
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};
    use clap::CommandFactory;
    use gt_core::{CoreError, CoreResult};
    use std::cell::RefCell;
    use std::io::Cursor;

    fn english() -> &'static Messages {
        Language::English.messages()
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid arguments")
    }

    #[derive(Default)]
    struct MemoryDestinations {
        destinations: RefCell<Destinations>,
    }

    impl MemoryDestinations {
        fn with(entries: &[(&str, &str, Option<&str>)]) -> Self {
            let repository = Self::default();
            for (label, path, shortcut) in entries {
                repository.destinations.borrow_mut().insert(
                    (*label).to_string(),
                    Destination::new(*path, shortcut.map(Into::into), None).unwrap(),
                );
            }
            repository
        }
    }

    impl DestinationRepository for MemoryDestinations {
        fn load(&self) -> CoreResult<Destinations> {
            Ok(self.destinations.borrow().clone())
        }

        fn append(&self, label: &str, destination: &Destination) -> CoreResult<()> {
            let mut destinations = self.destinations.borrow_mut();
            if destinations.contains_key(label) {
                return Err(CoreError::Validation(format!("label '{label}' already exists")));
            }
            destinations.insert(label.to_string(), destination.clone());
            Ok(())
        }
    }

    fn add(repository: &MemoryDestinations, input: &str) -> (bool, String) {
        let mut out = Vec::new();
        let added = add_current_directory(
            repository,
            "/work/new",
            &mut Cursor::new(input.as_bytes()),
            &mut out,
            english(),
        )
        .unwrap();
        (added, String::from_utf8(out).unwrap())
    }

    fn entry(label: &str, path: &str, shortcut: Option<&str>) -> Entry {
        Entry {
            label: label.into(),
            path: path.into(),
            shortcut: shortcut.map(Into::into),
            command: None,
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn maps_arguments_to_actions() {
        assert_eq!(parse(&["goto"]).action(), Action::Interactive(Mode::Cursor));
        assert_eq!(parse(&["goto", "-c"]).action(), Action::Interactive(Mode::Cursor));
        assert_eq!(parse(&["goto", "-l"]).action(), Action::Interactive(Mode::Line));
        assert_eq!(parse(&["goto", "-h"]).action(), Action::Help);
        assert_eq!(parse(&["goto", "help"]).action(), Action::Help);
        assert_eq!(parse(&["goto", "--version"]).action(), Action::Version);
        assert_eq!(parse(&["goto", "version"]).action(), Action::Version);
        assert_eq!(parse(&["goto", "--complete"]).action(), Action::Complete);
        assert_eq!(parse(&["goto", "--history"]).action(), Action::History);
        assert_eq!(parse(&["goto", "--add"]).action(), Action::Add);
        assert_eq!(parse(&["goto", "--list"]).action(), Action::List);
        assert_eq!(parse(&["goto", "--list-label"]).action(), Action::ListLabels);
        assert_eq!(
            parse(&["goto", "Home"]).action(),
            Action::Navigate("Home".into())
        );
    }

    #[test]
    fn accepts_file_overrides() {
        let cli = parse(&[
            "goto",
            "--config-file",
            "/tmp/goto.toml",
            "--history-file",
            "/tmp/goto.json",
            "3",
        ]);
        assert_eq!(cli.config_file, Some(PathBuf::from("/tmp/goto.toml")));
        assert_eq!(cli.history_file, Some(PathBuf::from("/tmp/goto.json")));
        assert_eq!(cli.action(), Action::Navigate("3".into()));
    }

    #[test]
    fn rejects_unknown_flags_and_conflicting_modes() {
        assert!(Cli::try_parse_from(["goto", "--bogus"]).is_err());
        assert!(Cli::try_parse_from(["goto", "-c", "-l"]).is_err());
    }

    #[test]
    fn list_and_not_found_output() {
        let entries = vec![
            entry("Home", "/home/me", Some("h")),
            entry("work", "/srv/work", None),
        ];
        let mut out = Vec::new();
        write_list(&mut out, &entries).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1.(h) Home → /home/me\n2. work → /srv/work\n"
        );

        let mut out = Vec::new();
        write_not_found(&mut out, "nowhere", &entries, english()).unwrap();
        insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r###"
        ❌ Destination 'nowhere' not found.

        📋 Available destinations:
          • Home (h) → /home/me
          • work → /srv/work
        "###);
    }

    #[test]
    fn history_is_printed_most_recent_first() {
        let first: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap();
        let second: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 3, 2, 9, 45, 10).unwrap();
        let mut history = History::default();
        history.touch("Home", first);
        history.touch("gone", second);
        let mut destinations = Destinations::new();
        destinations.insert(
            "Home".into(),
            Destination::new("/home/me", None, None).unwrap(),
        );

        let mut out = Vec::new();
        write_history(&mut out, &history, &destinations, english()).unwrap();
        let local = |time: DateTime<Utc>| {
            time.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        };
        let expected = format!(
            "📈 Recent usage history:\n{}\n 1. gone\n    📅 {}\n\n 2. Home → /home/me\n    📅 {}\n",
            "=".repeat(50),
            local(second),
            local(first)
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);

        let mut out = Vec::new();
        write_history(&mut out, &History::default(), &destinations, english()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "📈 No usage history found.\n");
    }

    #[test]
    fn config_errors_name_the_file() {
        let mut out = Vec::new();
        write_config_error(&mut out, Path::new("/tmp/bad.toml"), "expected `=`", english())
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("/tmp/bad.toml"));
        assert!(text.contains("expected `=`"));
        assert!(text.ends_with("Please check the TOML syntax of the configuration file.\n"));
    }

    #[test]
    fn adds_directory_after_shortcut_retries() {
        let repository = MemoryDestinations::with(&[("Home", "~", Some("h"))]);
        let (added, output) = add(&repository, "project\nh\nxy\np\n");
        assert!(added);
        assert!(output.contains("❌ Shortcut 'h' already exists."));
        assert!(output.contains(english().shortcut_must_be_single_char));
        assert!(output.contains("✅ Added: 'project' → /work/new"));
        assert!(output.contains("🔑 Shortcut: p"));

        let destinations = repository.load().unwrap();
        assert_eq!(destinations["project"].path, "/work/new");
        assert_eq!(destinations["project"].shortcut.as_deref(), Some("p"));
    }

    #[test]
    fn adds_without_shortcut() {
        let repository = MemoryDestinations::default();
        let (added, output) = add(&repository, "  spaced label  \n\n");
        assert!(added);
        assert!(!output.contains("🔑"));
        assert_eq!(repository.load().unwrap()["spaced label"].shortcut, None);
    }

    #[test]
    fn rejects_empty_and_duplicate_labels() {
        let repository = MemoryDestinations::with(&[("Home", "~", Some("h"))]);
        let (added, output) = add(&repository, "   \n");
        assert!(!added);
        assert!(output.contains(english().label_cannot_be_empty));

        let (added, output) = add(&repository, "Home\n");
        assert!(!added);
        assert!(output.contains("❌ Label 'Home' already exists."));
        assert_eq!(repository.load().unwrap().len(), 1);
    }

    #[test]
    fn end_of_input_cancels() {
        let repository = MemoryDestinations::default();
        let (added, output) = add(&repository, "");
        assert!(!added);
        assert!(output.ends_with(&format!("{}\n", english().operation_cancelled)));

        let (added, _) = add(&repository, "label\n");
        assert!(!added);
        assert!(repository.load().unwrap().is_empty());
    }

    #[test]
    fn appends_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigFile::new(dir.path().join("goto.toml"));
        config.create_default().unwrap();
        let before = config.load().unwrap().len();

        let mut out = Vec::new();
        let added = add_current_directory(
            &config,
            "/srv/it's here",
            &mut Cursor::new(&b"quoted \"label\"\nq\n"[..]),
            &mut out,
            english(),
        )
        .unwrap();
        assert!(added);

        let destinations = config.load().unwrap();
        assert_eq!(destinations.len(), before + 1);
        let added = &destinations["quoted \"label\""];
        assert_eq!(added.path, "/srv/it's here");
        assert_eq!(added.shortcut.as_deref(), Some("q"));
    }
}
