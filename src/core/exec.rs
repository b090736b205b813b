//! # Command Execution
//!
//! The subprocess boundary. [`CommandRunner`] is the seam: production code
//! uses [`ProcessRunner`] (spawn, wait, capture), tests swap in a scripted
//! fake. Execution is **blocking by contract** — the caller is suspended
//! for the child's full lifetime, with no timeout and no cancellation. A
//! non-blocking variant would implement `CommandRunner` on a worker task
//! and deliver a completion action; callers would not change.
//!
//! Failures are data, not errors: a spawn failure or non-zero exit comes
//! back as `succeeded = false` with the failure rendered inline in the
//! captured output. Nothing here returns `Result` to the dispatch path.

use std::io::Read;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, info};

use crate::core::state::App;
use crate::core::status::FlashTicket;

/// What one command run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Stdout and stderr interleaved in the order the child produced them,
    /// plus any inline `Error:` rendering.
    pub output: String,
    pub succeeded: bool,
}

/// How a command to run was expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSpec {
    /// A raw command line, split on whitespace. Arguments containing
    /// spaces cannot be expressed this way — a documented limitation of
    /// the raw form, not something to special-case.
    Line(String),
    /// A structured argument vector (`argv[0]` is the program). Built by
    /// the interactive dialogs so user parameters survive verbatim,
    /// whitespace included.
    Args(Vec<String>),
}

impl CommandSpec {
    /// The command line as recorded in history and shown to the user.
    /// Structured arguments containing whitespace are quoted for display
    /// only; execution never re-parses this string.
    pub fn display_line(&self) -> String {
        match self {
            CommandSpec::Line(line) => line.clone(),
            CommandSpec::Args(args) => args
                .iter()
                .map(|a| {
                    if a.is_empty() || a.chars().any(char::is_whitespace) {
                        format!("\"{a}\"")
                    } else {
                        a.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Program name plus argument list, or `None` for an empty command.
    pub fn argv(&self) -> Option<(String, Vec<String>)> {
        match self {
            CommandSpec::Line(line) => {
                let mut parts = line.split_whitespace().map(str::to_string);
                let program = parts.next()?;
                Some((program, parts.collect()))
            }
            CommandSpec::Args(args) => {
                let (program, rest) = args.split_first()?;
                Some((program.clone(), rest.to_vec()))
            }
        }
    }
}

/// The seam between dispatch logic and the operating system.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` to completion and report what happened.
    /// Never fails at the call level; failures are encoded in the outcome.
    fn run(&self, program: &str, args: &[String]) -> CommandOutcome;
}

/// Spawns real child processes.
///
/// Stdout and stderr share one pipe write end, so the captured buffer
/// preserves the order the child wrote in (same as the original's combined
/// capture). The call blocks until the child exits.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> CommandOutcome {
        debug!("Spawning: {} {:?}", program, args);

        let spawned = std::io::pipe().and_then(|(reader, writer)| {
            let stderr_writer = writer.try_clone()?;
            let child = Command::new(program)
                .args(args)
                .stdin(Stdio::null())
                .stdout(writer)
                .stderr(stderr_writer)
                .spawn()?;
            Ok((reader, child))
        });

        let (mut reader, mut child) = match spawned {
            Ok(pair) => pair,
            Err(e) => {
                return CommandOutcome {
                    output: format!("Error: {e}\n"),
                    succeeded: false,
                };
            }
        };

        // Both write ends were moved into the child, so this reads to EOF
        // when the child closes them (normally at exit).
        let mut raw = Vec::new();
        let read_result = reader.read_to_end(&mut raw);
        let wait_result = child.wait();
        let mut output = String::from_utf8_lossy(&raw).into_owned();

        let succeeded = match (read_result, wait_result) {
            (Ok(_), Ok(status)) if status.success() => true,
            (Ok(_), Ok(status)) => {
                output = format!("Error: {status}\n\n{output}");
                false
            }
            (_, Err(e)) | (Err(e), _) => {
                output = format!("Error: {e}\n\n{output}");
                false
            }
        };

        CommandOutcome { output, succeeded }
    }
}

/// Run one command through the full dispatch flow: flash "Executing",
/// append the history entry (before output is known, submission-ordered),
/// run to completion, store the captured output, flash the result.
///
/// Returns the flash tickets the shell must arm expiry timers for.
pub fn execute(app: &mut App, spec: &CommandSpec) -> Vec<FlashTicket> {
    let line = spec.display_line();
    let mut tickets = vec![
        app.status
            .flash(format!("Executing: {line}"), app.flash_duration),
    ];

    let sequence = app.history.append(line.clone()).sequence;
    info!("Executing command #{sequence}: {line}");

    let outcome = match spec.argv() {
        Some((program, args)) => app.runner.run(&program, &args),
        None => CommandOutcome {
            output: "Error: empty command line\n".to_string(),
            succeeded: false,
        },
    };

    app.output = format!("$ {line}\n\n{}", outcome.output);
    app.last_succeeded = Some(outcome.succeeded);

    let message = if outcome.succeeded {
        "Command completed"
    } else {
        "Command failed"
    };
    tickets.push(app.status.flash(message, app.flash_duration));
    tickets
}

/// Current context identifier from the wrapped tool, or `"Unknown"`.
/// Environment probes bypass history — they are not user commands.
pub fn fetch_context(runner: &dyn CommandRunner, tool: &str) -> String {
    probe(runner, tool, &["config", "current-context"]).unwrap_or_else(|| "Unknown".to_string())
}

/// Current project/namespace identifier from the wrapped tool, or `"default"`.
pub fn fetch_project(runner: &dyn CommandRunner, tool: &str) -> String {
    probe(runner, tool, &["project", "-q"]).unwrap_or_else(|| "default".to_string())
}

fn probe(runner: &dyn CommandRunner, tool: &str, args: &[&str]) -> Option<String> {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let outcome = runner.run(tool, &args);
    if !outcome.succeeded {
        return None;
    }
    let trimmed = outcome.output.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Whether `tool` can be found: an explicit path, or a file in some `PATH`
/// directory. Checked once at startup; a missing tool is fatal.
pub fn tool_on_path(tool: &str) -> bool {
    let candidate = Path::new(tool);
    if candidate.components().count() > 1 {
        return candidate.is_file();
    }
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join(tool).is_file()))
        .unwrap_or(false)
}

/// Run a command with inherited stdio, for the CLI shortcut flags that act
/// and exit without starting the UI.
pub fn run_passthrough(program: &str, args: &[&str]) -> std::io::Result<ExitStatus> {
    println!("Executing: {} {}", program, args.join(" "));
    Command::new(program).args(args).status()
}
