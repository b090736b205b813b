//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use crate::core::catalog::main_menu;
use crate::core::config::ResolvedConfig;
use crate::core::exec::{CommandOutcome, CommandRunner};
use crate::core::history::HistoryLog;
use crate::core::state::App;

/// A scripted stand-in for [`crate::core::exec::ProcessRunner`]: returns a
/// fixed outcome for every call and records what was asked of it.
pub struct ScriptedRunner {
    outcome: CommandOutcome,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedRunner {
    pub fn new(outcome: CommandOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding(output: &str) -> Self {
        Self::new(CommandOutcome {
            output: output.to_string(),
            succeeded: true,
        })
    }

    pub fn failing(output: &str) -> Self {
        Self::new(CommandOutcome {
            output: output.to_string(),
            succeeded: false,
        })
    }

    /// Every `(program, args)` pair this runner was invoked with.
    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> CommandOutcome {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));
        self.outcome.clone()
    }
}

/// Creates a test App over the built-in menu with a succeeding runner and
/// empty history.
pub fn test_app() -> App {
    let config = ResolvedConfig::default();
    App::new(
        Arc::new(ScriptedRunner::succeeding("")),
        &config,
        main_menu(&config.tool),
        HistoryLog::new(),
    )
}
