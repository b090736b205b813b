//! # Application State
//!
//! Core business state for ocnav. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── runner: Arc<dyn CommandRunner>   // subprocess boundary
//! ├── tool: String                     // wrapped CLI binary ("oc")
//! ├── nav: NavigationStack             // menu drill-down state
//! ├── history: HistoryLog              // append-only command log
//! ├── status: StatusLine               // baseline + transient overlay
//! ├── context_name: String             // current cluster context
//! ├── project: String                  // current project/namespace
//! ├── output: String                   // last command's captured output
//! ├── last_succeeded: Option<bool>     // last command's exit outcome
//! └── flash_duration: Duration         // overlay lifetime
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs
//! and the execute flow in exec.rs. This keeps things predictable, so no
//! surprise mutations.

use std::sync::Arc;
use std::time::Duration;

use crate::core::catalog::{self, MenuNode};
use crate::core::config::ResolvedConfig;
use crate::core::exec::{self, CommandRunner};
use crate::core::history::HistoryLog;
use crate::core::nav::NavigationStack;
use crate::core::status::StatusLine;

pub struct App {
    pub runner: Arc<dyn CommandRunner>,
    pub tool: String,
    pub nav: NavigationStack,
    pub history: HistoryLog,
    pub status: StatusLine,
    pub context_name: String,
    pub project: String,
    pub output: String,
    pub last_succeeded: Option<bool>,
    pub flash_duration: Duration,
}

impl App {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        config: &ResolvedConfig,
        root_menu: Vec<MenuNode>,
        history: HistoryLog,
    ) -> Self {
        let mut app = Self {
            runner,
            tool: config.tool.clone(),
            nav: NavigationStack::new(root_menu, catalog::ROOT_TITLE),
            history,
            status: StatusLine::default(),
            context_name: "Unknown".to_string(),
            project: "default".to_string(),
            output: String::new(),
            last_succeeded: None,
            flash_duration: Duration::from_millis(config.status_flash_ms),
        };
        let baseline = app.baseline_text();
        app.status.set_baseline(baseline);
        app
    }

    /// Re-query the wrapped tool for the current context and project and
    /// rebuild the status baseline. Called at startup, on Ctrl+R, and after
    /// project-affecting commands.
    pub fn refresh_environment(&mut self) {
        let runner = self.runner.clone();
        self.context_name = exec::fetch_context(runner.as_ref(), &self.tool);
        self.project = exec::fetch_project(runner.as_ref(), &self.tool);
        let baseline = self.baseline_text();
        self.status.set_baseline(baseline);
    }

    fn baseline_text(&self) -> String {
        format!(
            "Context: {} | Project: {} | Esc Back | Ctrl+C Quit | Ctrl+H History | Ctrl+X Custom | Ctrl+R Refresh",
            self.context_name, self.project
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::test_support::{test_app, ScriptedRunner};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.tool, "oc");
        assert_eq!(app.context_name, "Unknown");
        assert_eq!(app.project, "default");
        assert!(app.history.is_empty());
        assert_eq!(app.nav.depth(), 0);
        assert!(app.status.display().starts_with("Context: Unknown"));
    }

    #[test]
    fn test_refresh_environment_updates_baseline() {
        let mut app = test_app();
        app.runner = Arc::new(ScriptedRunner::succeeding("prod\n"));
        app.refresh_environment();
        assert_eq!(app.context_name, "prod");
        assert_eq!(app.project, "prod");
        assert!(app.status.display().starts_with("Context: prod | Project: prod"));
    }

    #[test]
    fn test_refresh_environment_keeps_fallbacks_on_failure() {
        let mut app = test_app();
        app.runner = Arc::new(ScriptedRunner::failing("no cluster\n"));
        app.refresh_environment();
        assert_eq!(app.context_name, "Unknown");
        assert_eq!(app.project, "default");
    }
}
