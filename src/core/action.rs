//! # Actions
//!
//! Everything that can happen in ocnav becomes an `Action`.
//! User presses Enter on a menu entry? That's `Action::Activate(index)`.
//! A flash timer fires? That's `Action::OverlayElapsed(generation)`.
//!
//! The `update()` function mutates the state for one action and returns an
//! `Effect` telling the shell what follow-up work to do (run a command,
//! open a dialog, quit). Subprocess I/O happens in `exec.rs`, never here.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```
//!
//! The selection decision order is fixed: submenu → direct execution →
//! named action table → static description (the detail pane already shows
//! it). Out-of-range activation is ignored.

use log::debug;

use crate::core::exec::CommandSpec;
use crate::core::state::App;

/// Named interactive flows reachable from action leaves in the menu. Each
/// collects parameters via a dialog and synthesizes a command, except
/// `CommandHistory` which opens the history overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedAction {
    SwitchProject,
    CreateProject,
    DeleteProject,
    PodLogs,
    FollowLogs,
    CustomCommand,
    CommandHistory,
}

impl NamedAction {
    /// The fixed table mapping action-leaf names to flows.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Switch project" => Some(Self::SwitchProject),
            "Create new project" => Some(Self::CreateProject),
            "Delete project" => Some(Self::DeleteProject),
            "Pod logs" => Some(Self::PodLogs),
            "Follow logs" => Some(Self::FollowLogs),
            "Custom Commands" => Some(Self::CustomCommand),
            "Command History" => Some(Self::CommandHistory),
            _ => None,
        }
    }

    /// Deleting a project cannot be undone, so its dialog demands a
    /// secondary confirmation before submitting.
    pub fn is_destructive(self) -> bool {
        matches!(self, Self::DeleteProject)
    }

    /// Commands that change the active project; the environment is
    /// re-queried after they run.
    pub fn affects_project(self) -> bool {
        matches!(self, Self::SwitchProject | Self::CreateProject | Self::DeleteProject)
    }

    /// Synthesize the command for this flow from the dialog's collected
    /// parameters. Parameters go into a structured argv, so whitespace in
    /// user input survives. Returns `None` when a required parameter is
    /// missing (treated as cancelled) or the flow runs no command.
    pub fn build_command(self, tool: &str, params: &[String]) -> Option<CommandSpec> {
        let first = params.first().map(|s| s.trim()).filter(|s| !s.is_empty())?;
        match self {
            Self::SwitchProject => Some(CommandSpec::Args(vec![
                tool.to_string(),
                "project".to_string(),
                first.to_string(),
            ])),
            Self::CreateProject => {
                let mut args = vec![tool.to_string(), "new-project".to_string(), first.to_string()];
                if let Some(description) = params.get(1).map(|s| s.trim()).filter(|s| !s.is_empty()) {
                    args.push("--description".to_string());
                    args.push(description.to_string());
                }
                Some(CommandSpec::Args(args))
            }
            Self::DeleteProject => Some(CommandSpec::Args(vec![
                tool.to_string(),
                "delete".to_string(),
                "project".to_string(),
                first.to_string(),
            ])),
            Self::PodLogs => Some(CommandSpec::Args(vec![
                tool.to_string(),
                "logs".to_string(),
                first.to_string(),
            ])),
            Self::FollowLogs => Some(CommandSpec::Args(vec![
                tool.to_string(),
                "logs".to_string(),
                "-f".to_string(),
                first.to_string(),
            ])),
            // Custom commands stay a raw line with whitespace-split
            // semantics; the tool name is prepended if missing.
            Self::CustomCommand => {
                let line = if first.starts_with(&format!("{tool} ")) || first == tool {
                    first.to_string()
                } else {
                    format!("{tool} {first}")
                };
                Some(CommandSpec::Line(line))
            }
            Self::CommandHistory => None,
        }
    }
}

/// Everything the user (or a timer) can ask the core to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Activate the menu entry at this index in the current frame.
    Activate(usize),
    /// Go back one level; at the root this means exit.
    Back,
    /// Submit an already-formed command (dialogs, custom, history re-run).
    Submit(CommandSpec),
    /// A flash timer for this overlay generation elapsed.
    OverlayElapsed(u64),
    /// Re-query context and project from the wrapped tool.
    RefreshEnvironment,
    Quit,
}

/// What the shell must do after an `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The visible frame changed; reset the selection to the first entry.
    MenuChanged,
    /// Run this command (blocking) through `exec::execute`.
    Execute(CommandSpec),
    /// Open the interactive dialog for a named action.
    OpenDialog(NamedAction),
    /// Open the command history overlay.
    OpenHistory,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Quit => Effect::Quit,

        Action::Back => {
            if app.nav.ascend() {
                Effect::MenuChanged
            } else {
                // Back at the root is the exit condition, not an error.
                Effect::Quit
            }
        }

        Action::Activate(index) => {
            // Out-of-range selection is silently ignored.
            let Some(node) = app.nav.current().nodes.get(index).cloned() else {
                return Effect::None;
            };
            if node.is_group() {
                app.nav.descend(&node);
                Effect::MenuChanged
            } else if node.is_exec_leaf() {
                Effect::Execute(CommandSpec::Line(node.command))
            } else {
                match NamedAction::from_name(&node.name) {
                    Some(NamedAction::CommandHistory) => Effect::OpenHistory,
                    Some(named) => Effect::OpenDialog(named),
                    // No table entry: the detail pane already shows the
                    // node's description, nothing to execute.
                    None => Effect::None,
                }
            }
        }

        Action::Submit(spec) => Effect::Execute(spec),

        Action::OverlayElapsed(generation) => {
            app.status.overlay_elapsed(generation);
            Effect::None
        }

        Action::RefreshEnvironment => {
            app.refresh_environment();
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::MenuNode;
    use crate::test_support::test_app;

    fn leaf(name: &str, command: &str, is_executable: bool) -> MenuNode {
        MenuNode {
            name: name.to_string(),
            command: command.to_string(),
            description: String::new(),
            submenu: Vec::new(),
            is_executable,
        }
    }

    #[test]
    fn test_activate_group_descends() {
        let mut app = test_app();
        // Index 0 of the built-in menu is the "Projects & Namespaces" group.
        let effect = update(&mut app, Action::Activate(0));
        assert_eq!(effect, Effect::MenuChanged);
        assert_eq!(app.nav.current().title, "Projects & Namespaces");
        assert_eq!(app.nav.depth(), 1);
    }

    #[test]
    fn test_group_wins_over_command_template() {
        let mut app = test_app();
        app.nav = crate::core::nav::NavigationStack::new(
            vec![MenuNode {
                name: "Both".to_string(),
                command: "oc get pods".to_string(),
                description: String::new(),
                submenu: vec![leaf("Child", "", false)],
                is_executable: true,
            }],
            "Navigation",
        );
        // A node with children always descends, never executes.
        let effect = update(&mut app, Action::Activate(0));
        assert_eq!(effect, Effect::MenuChanged);
        assert_eq!(app.nav.current().title, "Both");
    }

    #[test]
    fn test_activate_exec_leaf_submits_command_verbatim() {
        let mut app = test_app();
        app.nav = crate::core::nav::NavigationStack::new(
            vec![leaf("Pods", "oc get pods", true)],
            "Navigation",
        );
        let effect = update(&mut app, Action::Activate(0));
        assert_eq!(effect, Effect::Execute(CommandSpec::Line("oc get pods".to_string())));
    }

    #[test]
    fn test_activate_out_of_range_is_ignored() {
        let mut app = test_app();
        let depth_before = app.nav.depth();
        let effect = update(&mut app, Action::Activate(999));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.nav.depth(), depth_before);
    }

    #[test]
    fn test_activate_action_leaf_opens_dialog() {
        let mut app = test_app();
        app.nav = crate::core::nav::NavigationStack::new(
            vec![leaf("Switch project", "", false), leaf("Command History", "", false)],
            "Navigation",
        );
        assert_eq!(
            update(&mut app, Action::Activate(0)),
            Effect::OpenDialog(NamedAction::SwitchProject)
        );
        assert_eq!(update(&mut app, Action::Activate(1)), Effect::OpenHistory);
    }

    #[test]
    fn test_activate_unknown_leaf_falls_back_to_description() {
        let mut app = test_app();
        app.nav = crate::core::nav::NavigationStack::new(
            vec![leaf("Mystery", "", false)],
            "Navigation",
        );
        assert_eq!(update(&mut app, Action::Activate(0)), Effect::None);
    }

    #[test]
    fn test_back_at_root_quits() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Back), Effect::Quit);
    }

    #[test]
    fn test_back_below_root_ascends() {
        let mut app = test_app();
        update(&mut app, Action::Activate(0));
        assert_eq!(update(&mut app, Action::Back), Effect::MenuChanged);
        assert_eq!(app.nav.depth(), 0);
    }

    #[test]
    fn test_overlay_elapsed_stale_generation_is_noop() {
        let mut app = test_app();
        let stale = app.status.flash("A", app.flash_duration);
        app.status.flash("B", app.flash_duration);

        let effect = update(&mut app, Action::OverlayElapsed(stale.generation));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.status.display(), "B");
    }

    #[test]
    fn test_named_action_table_covers_original_names() {
        for (name, expected) in [
            ("Switch project", NamedAction::SwitchProject),
            ("Create new project", NamedAction::CreateProject),
            ("Delete project", NamedAction::DeleteProject),
            ("Pod logs", NamedAction::PodLogs),
            ("Follow logs", NamedAction::FollowLogs),
            ("Custom Commands", NamedAction::CustomCommand),
            ("Command History", NamedAction::CommandHistory),
        ] {
            assert_eq!(NamedAction::from_name(name), Some(expected));
        }
        assert_eq!(NamedAction::from_name("Pods"), None);
    }

    #[test]
    fn test_build_command_switch_project() {
        let spec = NamedAction::SwitchProject
            .build_command("oc", &["dev".to_string()])
            .unwrap();
        assert_eq!(
            spec,
            CommandSpec::Args(vec!["oc".into(), "project".into(), "dev".into()])
        );
    }

    #[test]
    fn test_build_command_create_project_with_description() {
        let spec = NamedAction::CreateProject
            .build_command("oc", &["demo".to_string(), "my demo app".to_string()])
            .unwrap();
        let CommandSpec::Args(args) = spec else { panic!("expected argv") };
        assert_eq!(args.last().unwrap(), "my demo app");
    }

    #[test]
    fn test_build_command_requires_first_parameter() {
        assert!(NamedAction::DeleteProject.build_command("oc", &["  ".to_string()]).is_none());
        assert!(NamedAction::PodLogs.build_command("oc", &[]).is_none());
    }

    #[test]
    fn test_build_command_custom_prefixes_tool() {
        let spec = NamedAction::CustomCommand
            .build_command("oc", &["get pods -o wide".to_string()])
            .unwrap();
        assert_eq!(spec, CommandSpec::Line("oc get pods -o wide".to_string()));

        let already = NamedAction::CustomCommand
            .build_command("oc", &["oc get svc".to_string()])
            .unwrap();
        assert_eq!(already, CommandSpec::Line("oc get svc".to_string()));
    }

    #[test]
    fn test_follow_logs_inserts_follow_flag() {
        let spec = NamedAction::FollowLogs
            .build_command("oc", &["api-pod".to_string()])
            .unwrap();
        assert_eq!(
            spec,
            CommandSpec::Args(vec!["oc".into(), "logs".into(), "-f".into(), "api-pod".into()])
        );
    }
}
