//! Opening destinations: a sub-shell for directories, the browser for URLs.

use std::io::Write;
use std::path::Path;
use std::process::Command;

use gt_core::Entry;
use gt_locale::Messages;
use thiserror::Error;

/// Shell used when `$SHELL` is unset or empty.
pub const FALLBACK_SHELL: &str = "/bin/sh";

const SCRIPT_RULE_WIDTH: usize = 40;
const BANNER_RULE_WIDTH: usize = 50;

/// Errors raised while opening a destination.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("directory does not exist: {0}")]
    MissingDirectory(String),
    #[error("failed to open {url}: {source}")]
    OpenUrl {
        url: String,
        source: std::io::Error,
    },
    #[error("failed to create startup script: {0}")]
    Script(#[source] std::io::Error),
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

impl LaunchError {
    /// User-facing message for this error in the given language.
    pub fn localized(&self, messages: &Messages) -> String {
        match self {
            Self::MissingDirectory(dir) => format!("{} {dir}", messages.directory_not_exist),
            Self::OpenUrl { source, .. } => format!("{} {source}", messages.error_opening_url),
            Self::Script(source) => format!("{} {source}", messages.error_creating_temp_file),
            Self::Spawn { source, .. } => format!("{} {source}", messages.error_opening_shell),
        }
    }
}

/// Open `entry`: URLs go to the default browser, directories get a new shell.
///
/// Returns once the spawned shell exits. A non-zero exit status is not an error.
pub fn launch(entry: &Entry, messages: &Messages) -> Result<(), LaunchError> {
    if entry.is_url() {
        return open_url(&entry.path, messages);
    }
    open_shell(
        &entry.expanded_path(),
        entry.command.as_deref(),
        &entry.label,
        messages,
    )
}

/// Open `url` with the system default handler.
pub fn open_url(url: &str, messages: &Messages) -> Result<(), LaunchError> {
    println!("{} {url}", messages.opening_url);
    open::that(url).map_err(|source| LaunchError::OpenUrl {
        url: url.to_string(),
        source,
    })
}

/// Start the user's shell in `target`, optionally running `command` first.
pub fn open_shell(
    target: &str,
    command: Option<&str>,
    label: &str,
    messages: &Messages,
) -> Result<(), LaunchError> {
    if !Path::new(target).is_dir() {
        return Err(LaunchError::MissingDirectory(target.to_string()));
    }

    let banner = format!("{} {target}", messages.opening_shell);
    println!("{}", gt_tui::highlight(&banner, gt_tui::terminal_width()));
    if !label.is_empty() {
        println!("{} {label}", messages.destination);
    }

    let shell = user_shell();
    match command.filter(|cmd| !cmd.trim().is_empty()) {
        Some(command) => {
            println!("{} {command}", messages.will_execute);
            println!("{}", "=".repeat(BANNER_RULE_WIDTH));
            run_with_command(target, command, &shell, messages)
        }
        None => {
            println!("{}", messages.type_exit_to_return);
            println!("{}", "=".repeat(BANNER_RULE_WIDTH));
            println!("{} {target}", messages.you_are_now_in);
            spawn(Command::new(&shell).current_dir(target), &shell)
        }
    }
}

fn run_with_command(
    target: &str,
    command: &str,
    shell: &str,
    messages: &Messages,
) -> Result<(), LaunchError> {
    let mut script = tempfile::Builder::new()
        .prefix("goto_")
        .suffix(".sh")
        .tempfile()
        .map_err(LaunchError::Script)?;
    script
        .write_all(startup_script(target, command, shell, messages).as_bytes())
        .and_then(|()| script.flush())
        .map_err(LaunchError::Script)?;
    log::debug!("startup script written to {}", script.path().display());

    // The script file is removed when `script` drops, after the shell exits.
    spawn(
        Command::new(FALLBACK_SHELL)
            .arg(script.path())
            .current_dir(target),
        FALLBACK_SHELL,
    )
}

fn spawn(command: &mut Command, program: &str) -> Result<(), LaunchError> {
    let status = command.status().map_err(|source| LaunchError::Spawn {
        program: program.to_string(),
        source,
    })?;
    if !status.success() {
        log::debug!("{program} exited with {status}");
    }
    Ok(())
}

/// The user's login shell, or `/bin/sh`.
pub fn user_shell() -> String {
    shell_or_fallback(std::env::var("SHELL").ok())
}

fn shell_or_fallback(value: Option<String>) -> String {
    value
        .filter(|shell| !shell.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_SHELL.to_string())
}

/// Quote `text` for a POSIX shell using single quotes.
pub fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

/// POSIX startup script that enters `target`, runs `command`, then replaces
/// itself with `shell`.
pub fn startup_script(target: &str, command: &str, shell: &str, messages: &Messages) -> String {
    let rule = "-".repeat(SCRIPT_RULE_WIDTH);
    let lines = [
        "#!/bin/sh".to_string(),
        format!("cd {} || exit 1", shell_quote(target)),
        format!("echo {} \"$(pwd)\"", shell_quote(messages.current_directory)),
        format!(
            "echo {}",
            shell_quote(&format!("{} {command}", messages.executing_command))
        ),
        format!("echo '{rule}'"),
        command.to_string(),
        format!("echo '{rule}'"),
        format!("echo {} \"$(pwd)\"", shell_quote(messages.command_completed)),
        format!("echo {}", shell_quote(messages.type_exit_to_return)),
        format!("exec {}", shell_quote(shell)),
    ];
    let mut script = lines.join("\n");
    script.push('\n');
    script
}
