use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::cursor::{MoveTo, MoveToColumn, MoveUp};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::style::Stylize;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};

use gt_core::{resolve_choice, Choice, Entry, ShortcutMap};
use gt_locale::Messages;
use gt_utils::{display_width, pad_to_width, shorten_path_middle};

/// Width used when the terminal size cannot be read.
pub const DEFAULT_WIDTH: usize = 80;

/// Paths are only shortened when at least this many columns are left for them.
const MIN_PATH_COLUMNS: usize = 8;

/// Column where descriptions start in the usage table.
const USAGE_COLUMN: usize = 28;

/// How the selector reads input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One raw keystroke at a time.
    #[default]
    Cursor,
    /// A full line of text per answer.
    Line,
}

/// Outcome of a single keystroke in cursor mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Ignored,
    Moved,
    Help,
    LineMode,
    Done(Choice),
}

/// Cursor-mode state: highlighted row and pending number.
///
/// Rows `0..entries.len()` are destinations; row `entries.len()` is Exit.
#[derive(Debug)]
pub struct Selector<'a> {
    entries: &'a [Entry],
    shortcuts: &'a ShortcutMap,
    selected: usize,
    pending: String,
}

impl<'a> Selector<'a> {
    pub fn new(entries: &'a [Entry], shortcuts: &'a ShortcutMap) -> Self {
        Self {
            entries,
            shortcuts,
            selected: 0,
            pending: String::new(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn exit_row(&self) -> usize {
        self.entries.len()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Step {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            self.pending.clear();
            return match key.code {
                KeyCode::Char('c') => Step::Done(Choice::Cancelled),
                _ => Step::Ignored,
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Enter => Step::Done(self.highlighted()),
            KeyCode::Esc => {
                self.pending.clear();
                Step::LineMode
            }
            KeyCode::Char('?') => {
                self.pending.clear();
                Step::Help
            }
            KeyCode::Char('+') => Step::Done(Choice::AddCurrent),
            KeyCode::Char(ch) if ch.is_ascii_digit() => self.push_digit(ch),
            KeyCode::Char(ch) if ch.is_ascii_alphabetic() => {
                self.pending.clear();
                let mut buf = [0; 4];
                match self.shortcuts.get(ch.encode_utf8(&mut buf)) {
                    Some(index) => self.navigate(index),
                    None => Step::Ignored,
                }
            }
            _ => {
                self.pending.clear();
                Step::Ignored
            }
        }
    }

    fn move_up(&mut self) -> Step {
        self.pending.clear();
        if self.selected == 0 {
            return Step::Ignored;
        }
        self.selected -= 1;
        Step::Moved
    }

    fn move_down(&mut self) -> Step {
        self.pending.clear();
        if self.selected >= self.exit_row() {
            return Step::Ignored;
        }
        self.selected += 1;
        Step::Moved
    }

    fn highlighted(&self) -> Choice {
        match self.entries.get(self.selected) {
            Some(entry) => Choice::Navigate(entry.clone()),
            None => Choice::Exit,
        }
    }

    fn push_digit(&mut self, digit: char) -> Step {
        if digit == '0' && self.pending.is_empty() {
            return Step::Done(Choice::Exit);
        }
        self.pending.push(digit);
        match self.pending.parse::<usize>() {
            Ok(number) if (1..=self.entries.len()).contains(&number) => self.navigate(number),
            Ok(number) if number <= self.entries.len() => Step::Ignored,
            _ => {
                self.pending.clear();
                Step::Ignored
            }
        }
    }

    /// Resolve the 1-based `index` to its entry.
    fn navigate(&mut self, index: usize) -> Step {
        self.pending.clear();
        match index.checked_sub(1).and_then(|i| self.entries.get(i)) {
            Some(entry) => Step::Done(Choice::Navigate(entry.clone())),
            None => Step::Ignored,
        }
    }
}

/// Outcome of a line of text in line mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    CursorMode,
    Done(Choice),
    Invalid,
}

pub fn resolve_line(input: &str, entries: &[Entry], shortcuts: &ShortcutMap) -> LineOutcome {
    let input = input.trim();
    if input.is_empty() {
        return LineOutcome::CursorMode;
    }
    if input == "+" {
        return LineOutcome::Done(Choice::AddCurrent);
    }
    if input == "0" || input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
        return LineOutcome::Done(Choice::Exit);
    }
    match resolve_choice(input, entries, shortcuts) {
        Some(entry) => LineOutcome::Done(Choice::Navigate(entry.clone())),
        None => LineOutcome::Invalid,
    }
}

/// Current terminal width in columns, or [`DEFAULT_WIDTH`].
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .ok()
        .map(|(columns, _)| usize::from(columns))
        .filter(|columns| *columns > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

/// `text` padded to `width` columns on a white background.
pub fn highlight(text: &str, width: usize) -> String {
    pad_to_width(text, width).black().on_white().to_string()
}

fn number_width(count: usize) -> usize {
    count.max(1).to_string().len()
}

/// Menu row for the 1-based `number`, with the path shortened to fit `width`.
pub fn entry_row(number: usize, entry: &Entry, digits: usize, width: usize) -> String {
    let shortcut = entry
        .shortcut
        .as_deref()
        .map(|key| format!("({key})"))
        .unwrap_or_default();
    let prefix = format!("{number:>digits$}.{shortcut} {} → ", entry.label);
    let path = entry.expanded_path();
    let available = width.saturating_sub(display_width(&prefix));
    if available > MIN_PATH_COLUMNS && display_width(&path) > available {
        format!("{prefix}{}", shorten_path_middle(&path, available))
    } else {
        format!("{prefix}{path}")
    }
}

/// All destination rows followed by the Exit row.
pub fn menu_rows(entries: &[Entry], width: usize, messages: &Messages) -> Vec<String> {
    let digits = number_width(entries.len());
    let mut rows: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| entry_row(index + 1, entry, digits, width))
        .collect();
    rows.push(format!("{:>digits$}. {}", 0, messages.exit_option));
    rows
}

/// Key bindings shown by `?`.
pub fn help_lines(messages: &Messages) -> Vec<String> {
    let hint = messages.cursor_mode_hint;
    let hint = hint.strip_prefix("💡").unwrap_or(hint).trim();
    hint.split(", ")
        .map(|item| format!("  {item}"))
        .chain(std::iter::once(format!("  {}", messages.add_current_directory)))
        .collect()
}

/// Write the usage table printed by `--help` and by `?` in the menu.
pub fn write_usage(
    out: &mut impl Write,
    config_path: &Path,
    messages: &Messages,
) -> io::Result<()> {
    let usage = [
        ("goto", messages.show_interactive_menu),
        ("goto <number>", messages.go_to_destination_by_number),
        ("goto <label>", messages.go_to_destination_by_label),
        ("goto <shortcut>", messages.go_to_destination_by_shortcut),
        ("goto -h, --help", messages.show_help_message),
        ("goto -v, --version", messages.show_version_info),
        ("goto --complete", messages.show_completion_candidates),
        ("goto --history", messages.show_recent_usage_history),
        ("goto --add", messages.add_current_directory_to_config),
        ("goto --list", messages.show_destination_list),
        ("goto --list-label", messages.show_label_list),
        ("goto -c", messages.use_cursor_mode),
        ("goto -l", messages.use_label_mode),
        ("goto --config-file <PATH>", messages.use_config_file),
        ("goto --history-file <PATH>", messages.use_history_file),
    ];
    let examples = [
        ("goto 1", messages.navigate_to_first_dest),
        ("goto Home", messages.navigate_to_home_dest),
        ("goto h", messages.navigate_using_shortcut),
        ("goto", messages.show_interactive_menu_example),
    ];

    writeln!(out, "{}", messages.navigate_directories_quickly)?;
    writeln!(out)?;
    writeln!(out, "{} {}", messages.configuration_file, config_path.display())?;
    writeln!(out)?;
    writeln!(out, "{}", messages.usage)?;
    for (command, description) in usage {
        writeln!(out, "  {command:<USAGE_COLUMN$}{description}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", messages.examples)?;
    for (command, description) in examples {
        writeln!(out, "  {command:<USAGE_COLUMN$}{description}")?;
    }
    Ok(())
}

/// Full help shown by `?`: the usage table, then the menu key bindings.
pub fn write_help_page(
    out: &mut impl Write,
    config_path: &Path,
    messages: &Messages,
) -> io::Result<()> {
    write_usage(out, config_path, messages)?;
    writeln!(out)?;
    writeln!(out, "{}", messages.key_bindings)?;
    for line in help_lines(messages) {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", messages.press_any_key)?;
    out.flush()
}

/// Terminal rows `text` occupies once wrapped at `width` columns.
pub fn screen_lines(text: &str, width: usize) -> usize {
    let columns = display_width(text);
    if width == 0 || columns == 0 {
        return 1;
    }
    columns.div_ceil(width)
}

/// Draw the cursor-mode menu and footer.
///
/// Returns the number of terminal rows written, counting lines that wrap
/// past `width` once per row they occupy.
pub fn draw_cursor_menu(
    out: &mut impl Write,
    rows: &[String],
    selected: usize,
    width: usize,
    messages: &Messages,
) -> io::Result<u16> {
    let mut drawn = 0;
    for (index, row) in rows.iter().enumerate() {
        if index == selected {
            writeln!(out, "{}", highlight(row, width))?;
            drawn += screen_lines(&pad_to_width(row, width), width);
        } else {
            writeln!(out, "{row}")?;
            drawn += screen_lines(row, width);
        }
    }
    for footer in [messages.add_current_directory, messages.cursor_mode_hint] {
        writeln!(out, "{footer}")?;
        drawn += screen_lines(footer, width);
    }
    out.flush()?;
    Ok(u16::try_from(drawn).unwrap_or(u16::MAX))
}

/// Draw the line-mode menu and leave the cursor after the prompt.
pub fn draw_line_menu(
    out: &mut impl Write,
    rows: &[String],
    messages: &Messages,
) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{row}")?;
    }
    writeln!(out, "{}", messages.add_current_directory)?;
    writeln!(out, "{}", messages.enter_choice)?;
    writeln!(out, "{}", messages.back_to_cursor_mode_hint)?;
    write!(out, "{} ", messages.enter_choice_prompt)?;
    out.flush()
}

fn erase_lines(out: &mut impl Write, lines: u16) -> io::Result<()> {
    if lines > 0 {
        queue!(out, MoveUp(lines))?;
    }
    queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
    out.flush()
}

fn clear_screen(out: &mut impl Write, width: usize, messages: &Messages) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(out, "{}", highlight(messages.available_destinations, width))?;
    out.flush()
}

/// Restores cooked mode when dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            log::warn!("failed to restore terminal mode: {err}");
        }
    }
}

/// Read one key press with raw mode enabled only for the read.
fn read_key() -> io::Result<KeyEvent> {
    let _guard = RawModeGuard::enter()?;
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

/// Show the menu and wait for the user to decide.
///
/// `config_path` is only shown on the `?` help page. Terminal failures while reading input end the selection as
/// [`Choice::Cancelled`]. Errors writing to stdout are returned.
pub fn select(
    entries: &[Entry],
    shortcuts: &ShortcutMap,
    mode: Mode,
    config_path: &Path,
    messages: &Messages,
) -> Result<Choice> {
    let mut stdout = io::stdout();
    let width = terminal_width();
    let rows = menu_rows(entries, width, messages);
    let mut selector = Selector::new(entries, shortcuts);
    let mut mode = mode;

    writeln!(stdout, "{}", highlight(messages.available_destinations, width))
        .context("failed to draw menu")?;

    loop {
        match mode {
            Mode::Cursor => {
                let mut drawn =
                    draw_cursor_menu(&mut stdout, &rows, selector.selected(), width, messages)
                        .context("failed to draw menu")?;
                loop {
                    let key = match read_key() {
                        Ok(key) => key,
                        Err(err) => {
                            log::debug!("cursor input unavailable: {err}");
                            return Ok(Choice::Cancelled);
                        }
                    };
                    match selector.handle_key(key) {
                        Step::Ignored => {}
                        Step::Moved => {
                            erase_lines(&mut stdout, drawn).context("failed to redraw menu")?;
                            drawn = draw_cursor_menu(
                                &mut stdout,
                                &rows,
                                selector.selected(),
                                width,
                                messages,
                            )
                            .context("failed to redraw menu")?;
                        }
                        Step::Help => {
                            writeln!(stdout)?;
                            write_help_page(&mut stdout, config_path, messages)
                                .context("failed to show help")?;
                            if let Err(err) = read_key() {
                                log::debug!("cursor input unavailable: {err}");
                                return Ok(Choice::Cancelled);
                            }
                            clear_screen(&mut stdout, width, messages)
                                .context("failed to redraw menu")?;
                            drawn = draw_cursor_menu(
                                &mut stdout,
                                &rows,
                                selector.selected(),
                                width,
                                messages,
                            )
                            .context("failed to redraw menu")?;
                        }
                        Step::LineMode => {
                            clear_screen(&mut stdout, width, messages)
                                .context("failed to redraw menu")?;
                            mode = Mode::Line;
                            break;
                        }
                        Step::Done(choice) => return Ok(choice),
                    }
                }
            }
            Mode::Line => {
                draw_line_menu(&mut stdout, &rows, messages).context("failed to draw menu")?;
                let mut line = String::new();
                match io::stdin().lock().read_line(&mut line) {
                    Ok(0) => {
                        println!("\n{}", messages.operation_cancelled);
                        return Ok(Choice::Cancelled);
                    }
                    Err(err) => {
                        log::debug!("line input unavailable: {err}");
                        println!("\n{}", messages.operation_cancelled);
                        return Ok(Choice::Cancelled);
                    }
                    Ok(_) => {}
                }
                match resolve_line(&line, entries, shortcuts) {
                    LineOutcome::CursorMode => {
                        clear_screen(&mut stdout, width, messages)
                            .context("failed to redraw menu")?;
                        mode = Mode::Cursor;
                    }
                    LineOutcome::Done(choice) => return Ok(choice),
                    LineOutcome::Invalid => println!("{}", messages.invalid_input),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_locale::Language;

    const LANGUAGES: [Language; 5] = [
        Language::English,
        Language::Japanese,
        Language::Chinese,
        Language::Korean,
        Language::Spanish,
    ];

    fn entry(label: &str, path: &str, shortcut: Option<&str>) -> Entry {
        Entry {
            label: label.into(),
            path: path.into(),
            shortcut: shortcut.map(Into::into),
            command: None,
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry("home", "/home/me", Some("h")),
            entry("projects", "/home/me/src/github.com/someone/goto/crates", None),
            entry("docs", "/srv/ドキュメント/共有/資料/二〇二四年", Some("d")),
            entry("jump", "/tmp/jump", Some("j")),
        ]
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Remove CSI escape sequences such as colors.
    fn strip_ansi(text: &str) -> String {
        let mut plain = String::new();
        let mut chars = text.chars();
        while let Some(ch) = chars.next() {
            if ch == '\u{1b}' {
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                plain.push(ch);
            }
        }
        plain
    }

    /// Terminal rows taken by captured output at `width` columns.
    fn rows_on_screen(output: &[u8], width: usize) -> usize {
        let text = strip_ansi(std::str::from_utf8(output).unwrap());
        text.lines()
            .map(|line| (display_width(line).max(1) + width - 1) / width)
            .sum()
    }

    fn label(step: Step) -> String {
        match step {
            Step::Done(Choice::Navigate(entry)) => entry.label,
            other => panic!("expected navigation, got {other:?}"),
        }
    }

    #[test]
    fn digits_resolve_as_soon_as_valid() {
        let entries = sample();
        let shortcuts = ShortcutMap::build(&entries);
        let mut selector = Selector::new(&entries, &shortcuts);
        assert_eq!(label(selector.handle_key(key(KeyCode::Char('3')))), "docs");
    }

    #[test]
    fn oversized_number_clears_the_buffer() {
        let entries = sample();
        let shortcuts = ShortcutMap::build(&entries);
        let mut selector = Selector::new(&entries, &shortcuts);
        assert_eq!(selector.handle_key(key(KeyCode::Char('9'))), Step::Ignored);
        assert!(selector.pending.is_empty());
        assert_eq!(label(selector.handle_key(key(KeyCode::Char('2')))), "projects");
    }

    #[test]
    fn digits_with_no_entries_never_panic() {
        let shortcuts = ShortcutMap::default();
        let mut selector = Selector::new(&[], &shortcuts);
        for ch in "123456789".chars() {
            assert_eq!(selector.handle_key(key(KeyCode::Char(ch))), Step::Ignored);
        }
        assert_eq!(selector.handle_key(key(KeyCode::Enter)), Step::Done(Choice::Exit));
    }

    #[test]
    fn zero_exits() {
        let entries = sample();
        let shortcuts = ShortcutMap::build(&entries);
        let mut selector = Selector::new(&entries, &shortcuts);
        assert_eq!(selector.handle_key(key(KeyCode::Char('0'))), Step::Done(Choice::Exit));
    }

    #[test]
    fn movement_is_clamped_and_reaches_exit_row() {
        let entries = sample();
        let shortcuts = ShortcutMap::build(&entries);
        let mut selector = Selector::new(&entries, &shortcuts);
        assert_eq!(selector.handle_key(key(KeyCode::Up)), Step::Ignored);
        assert_eq!(selector.handle_key(key(KeyCode::Char('k'))), Step::Ignored);
        for _ in 0..entries.len() {
            assert_eq!(selector.handle_key(key(KeyCode::Down)), Step::Moved);
        }
        assert_eq!(selector.selected(), entries.len());
        assert_eq!(selector.handle_key(key(KeyCode::Char('j'))), Step::Ignored);
        assert_eq!(selector.handle_key(key(KeyCode::Enter)), Step::Done(Choice::Exit));

        assert_eq!(selector.handle_key(key(KeyCode::Char('k'))), Step::Moved);
        assert_eq!(label(selector.handle_key(key(KeyCode::Enter))), "jump");
    }

    #[test]
    fn movement_keys_win_over_shortcuts() {
        let entries = sample();
        let shortcuts = ShortcutMap::build(&entries);
        let mut selector = Selector::new(&entries, &shortcuts);
        assert_eq!(selector.handle_key(key(KeyCode::Char('j'))), Step::Moved);
        assert_eq!(selector.selected(), 1);
    }

    #[test]
    fn shortcuts_and_commands() {
        let entries = sample();
        let shortcuts = ShortcutMap::build(&entries);
        let mut selector = Selector::new(&entries, &shortcuts);
        assert_eq!(selector.handle_key(key(KeyCode::Char('x'))), Step::Ignored);
        assert_eq!(label(selector.handle_key(key(KeyCode::Char('d')))), "docs");
        assert_eq!(selector.handle_key(key(KeyCode::Char('+'))), Step::Done(Choice::AddCurrent));
        assert_eq!(selector.handle_key(key(KeyCode::Esc)), Step::LineMode);
        assert_eq!(selector.handle_key(key(KeyCode::Char('?'))), Step::Help);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(selector.handle_key(ctrl_c), Step::Done(Choice::Cancelled));
    }

    #[test]
    fn line_mode_commands() {
        let entries = sample();
        let shortcuts = ShortcutMap::build(&entries);
        let resolve = |input: &str| resolve_line(input, &entries, &shortcuts);

        assert_eq!(resolve("\n"), LineOutcome::CursorMode);
        assert_eq!(resolve("+\n"), LineOutcome::Done(Choice::AddCurrent));
        assert_eq!(resolve("0"), LineOutcome::Done(Choice::Exit));
        assert_eq!(resolve("EXIT"), LineOutcome::Done(Choice::Exit));
        assert_eq!(resolve("Quit\n"), LineOutcome::Done(Choice::Exit));
        assert_eq!(resolve("nowhere"), LineOutcome::Invalid);
        assert_eq!(resolve("12"), LineOutcome::Invalid);
        assert_eq!(
            resolve("Projects"),
            LineOutcome::Done(Choice::Navigate(entries[1].clone()))
        );
        assert_eq!(
            resolve("h"),
            LineOutcome::Done(Choice::Navigate(entries[0].clone()))
        );
    }

    #[test]
    fn rows_shorten_long_paths() {
        let messages = Language::English.messages();
        let rows = menu_rows(&sample(), 40, messages).join("\n");
        insta::assert_snapshot!(rows, @r###"
        1.(h) home → /home/me
        2. projects → /home/me/sr.../goto/crates
        3.(d) docs → /srv/ドキュ.../二〇二四年
        4.(j) jump → /tmp/jump
        0. Exit
        "###);
        for row in menu_rows(&sample(), 40, messages) {
            assert!(display_width(&row) <= 40, "{row}");
        }
    }

    #[test]
    fn numbers_are_right_aligned() {
        let entries: Vec<Entry> = (0..12)
            .map(|i| entry(&format!("e{i}"), "/tmp", None))
            .collect();
        let rows = menu_rows(&entries, 80, Language::English.messages());
        assert_eq!(rows[0], " 1. e0 → /tmp");
        assert_eq!(rows[11], "12. e11 → /tmp");
        assert_eq!(rows[12], " 0. Exit");
    }

    #[test]
    fn narrow_terminals_keep_full_paths() {
        let long = entry("a-rather-long-label", "/var/lib/some/deep/path", None);
        assert_eq!(
            entry_row(1, &long, 1, 30),
            "1. a-rather-long-label → /var/lib/some/deep/path"
        );
    }

    #[test]
    fn help_lists_each_binding() {
        let lines = help_lines(Language::English.messages());
        assert_eq!(
            lines,
            [
                "  ↑↓/jk: move",
                "  Enter: select",
                "  number/key: jump",
                "  0: exit",
                "  ?: help",
                "  Esc: type",
                "  🌱 [+] Add current directory",
            ]
        );
    }

    #[test]
    fn cursor_menu_counts_terminal_rows() {
        for language in LANGUAGES {
            let messages = language.messages();
            let rows = menu_rows(&sample(), DEFAULT_WIDTH, messages);
            for selected in [0, rows.len() - 1] {
                let mut out = Vec::new();
                let drawn =
                    draw_cursor_menu(&mut out, &rows, selected, DEFAULT_WIDTH, messages).unwrap();
                assert_eq!(
                    usize::from(drawn),
                    rows_on_screen(&out, DEFAULT_WIDTH),
                    "{language:?}"
                );
                assert_eq!(usize::from(drawn), rows.len() + 2, "{language:?}");
            }
        }
    }

    #[test]
    fn wrapped_rows_are_counted_on_narrow_terminals() {
        let messages = Language::English.messages();
        let entries = [entry("a-rather-long-label", "/var/lib/some/deep/path", None)];
        let rows = menu_rows(&entries, 30, messages);
        let mut out = Vec::new();
        let drawn = draw_cursor_menu(&mut out, &rows, 1, 30, messages).unwrap();
        // 2 for the entry, 1 for Exit, 1 for the add line, 3 for the hint.
        assert_eq!(drawn, 7);
        assert_eq!(usize::from(drawn), rows_on_screen(&out, 30));

        let mut out = Vec::new();
        let drawn = draw_cursor_menu(&mut out, &rows, 0, 30, messages).unwrap();
        assert_eq!(drawn, 7);
    }

    #[test]
    fn screen_lines_round_up() {
        assert_eq!(screen_lines("", 80), 1);
        assert_eq!(screen_lines("abc", 3), 1);
        assert_eq!(screen_lines("abcd", 3), 2);
        assert_eq!(screen_lines("日本語", 4), 2);
        assert_eq!(screen_lines("abc", 0), 1);
    }

    #[test]
    fn menu_footer_fits_default_width() {
        for language in LANGUAGES {
            let messages = language.messages();
            for line in [
                messages.available_destinations,
                messages.add_current_directory,
                messages.cursor_mode_hint,
                messages.back_to_cursor_mode_hint,
                messages.enter_choice,
            ] {
                assert!(display_width(line) <= DEFAULT_WIDTH, "{language:?}: {line}");
            }
        }
    }

    #[test]
    fn only_letters_are_cursor_shortcuts() {
        let entries = vec![
            entry("bang", "/tmp/bang", Some("!")),
            entry("cafe", "/tmp/cafe", Some("é")),
            entry("upper", "/tmp/upper", Some("U")),
        ];
        let shortcuts = ShortcutMap::build(&entries);
        let mut selector = Selector::new(&entries, &shortcuts);
        assert_eq!(selector.handle_key(key(KeyCode::Char('!'))), Step::Ignored);
        assert_eq!(selector.handle_key(key(KeyCode::Char('é'))), Step::Ignored);
        assert_eq!(label(selector.handle_key(key(KeyCode::Char('U')))), "upper");

        assert_eq!(
            resolve_line("!", &entries, &shortcuts),
            LineOutcome::Done(Choice::Navigate(entries[0].clone()))
        );
    }

    #[test]
    fn help_lists_every_flag() {
        let mut out = Vec::new();
        write_usage(
            &mut out,
            Path::new("/home/me/.goto.toml"),
            Language::English.messages(),
        )
        .unwrap();
        let help = String::from_utf8(out).unwrap();
        insta::assert_snapshot!(help, @r###"
        🚀 goto - Navigate directories quickly

        Configuration file: /home/me/.goto.toml

        Usage:
          goto                        Show interactive menu
          goto <number>               Go to destination by number (e.g., goto 1)
          goto <label>                Go to destination by label name
          goto <shortcut>             Go to destination by shortcut key
          goto -h, --help             Show this help message
          goto -v, --version          Show version information
          goto --complete             Show completion candidates (for shell completion)
          goto --history              Show recent usage history
          goto --add                  Add current directory to configuration
          goto --list                 List destinations with numbers and paths
          goto --list-label           List destination labels only
          goto -c                     Start the menu in cursor mode (default)
          goto -l                     Start the menu in label input mode
          goto --config-file <PATH>   Use another configuration file
          goto --history-file <PATH>  Use another history file

        Examples:
          goto 1                      # Navigate to 1st destination
          goto Home                   # Navigate to 'Home' destination
          goto h                      # Navigate using shortcut 'h'
          goto                        # Show interactive menu
        "###);
    }

    #[test]
    fn help_page_shows_usage_and_key_bindings() {
        for language in LANGUAGES {
            let messages = language.messages();
            let mut out = Vec::new();
            write_help_page(&mut out, Path::new("/home/me/.goto.toml"), messages).unwrap();
            let page = String::from_utf8(out).unwrap();
            for expected in [
                messages.navigate_directories_quickly,
                messages.usage,
                messages.show_recent_usage_history,
                messages.examples,
                messages.key_bindings,
                messages.add_current_directory,
                messages.press_any_key,
            ] {
                assert!(page.contains(expected), "{language:?}: {expected}");
            }
            for line in help_lines(messages) {
                assert!(page.contains(&line), "{language:?}: {line}");
            }
            assert!(page.contains("/home/me/.goto.toml"));
        }
    }

    #[test]
    fn highlight_pads_to_full_width() {
        let highlighted = highlight("日本 → /tmp", 20);
        assert!(highlighted.contains(&pad_to_width("日本 → /tmp", 20)));
    }
}
