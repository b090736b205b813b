//! # Dialog Component
//!
//! The parameter-collecting overlay behind every named interactive action:
//! one or two text fields, submitted with Enter, dismissed with Esc. The
//! dialog only collects strings — command synthesis lives in
//! [`NamedAction::build_command`], so the core owns what actually runs.
//!
//! Destructive actions (delete project) get a second stage: after Enter the
//! dialog switches to a confirmation modal that must be answered with
//! Enter/`y` before the values are released.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DialogState` lives in `TuiState`
//! - `Dialog` is created each frame with borrowed state

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::action::NamedAction;
use crate::tui::component::EventHandler;
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone)]
pub struct DialogField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogStage {
    Editing,
    /// Secondary confirmation for destructive actions.
    Confirming,
}

/// Persistent state for an open dialog.
pub struct DialogState {
    pub action: NamedAction,
    pub fields: Vec<DialogField>,
    pub focused: usize,
    pub stage: DialogStage,
}

impl DialogState {
    /// Build the dialog for a named action. `CommandHistory` opens the
    /// history overlay instead and never reaches here.
    pub fn for_action(action: NamedAction) -> Self {
        let labels: &[&'static str] = match action {
            NamedAction::SwitchProject => &["Project name"],
            NamedAction::CreateProject => &["Project name", "Description (optional)"],
            NamedAction::DeleteProject => &["Project name to delete"],
            NamedAction::PodLogs | NamedAction::FollowLogs => &["Pod name"],
            NamedAction::CustomCommand => &["Command"],
            NamedAction::CommandHistory => &[],
        };
        debug_assert!(!labels.is_empty());
        Self {
            action,
            fields: labels
                .iter()
                .map(|label| DialogField {
                    label,
                    value: String::new(),
                })
                .collect(),
            focused: 0,
            stage: DialogStage::Editing,
        }
    }

    fn title(&self) -> &'static str {
        match self.action {
            NamedAction::SwitchProject => " Switch Project ",
            NamedAction::CreateProject => " Create New Project ",
            NamedAction::DeleteProject => " Delete Project ",
            NamedAction::PodLogs => " View Pod Logs ",
            NamedAction::FollowLogs => " Follow Pod Logs ",
            NamedAction::CustomCommand => " Custom Command ",
            NamedAction::CommandHistory => "",
        }
    }

    fn values(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.value.clone()).collect()
    }

    fn first_value_empty(&self) -> bool {
        self.fields
            .first()
            .is_none_or(|f| f.value.trim().is_empty())
    }
}

/// Events emitted by a dialog.
#[derive(Debug, PartialEq, Eq)]
pub enum DialogEvent {
    /// The user confirmed; these are the collected field values in order.
    Submitted(Vec<String>),
    /// Cancelled; nothing runs.
    Dismissed,
}

impl EventHandler for DialogState {
    type Event = DialogEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match self.stage {
            DialogStage::Editing => match event {
                TuiEvent::Back => Some(DialogEvent::Dismissed),
                TuiEvent::InputChar(c) => {
                    self.fields[self.focused].value.push(*c);
                    None
                }
                TuiEvent::Backspace => {
                    self.fields[self.focused].value.pop();
                    None
                }
                TuiEvent::Tab | TuiEvent::CursorDown => {
                    self.focused = (self.focused + 1) % self.fields.len();
                    None
                }
                TuiEvent::CursorUp => {
                    self.focused = self.focused.checked_sub(1).unwrap_or(self.fields.len() - 1);
                    None
                }
                TuiEvent::Submit => {
                    // An empty required parameter means cancel, like
                    // closing the form without running anything.
                    if self.first_value_empty() {
                        return Some(DialogEvent::Dismissed);
                    }
                    if self.action.is_destructive() {
                        self.stage = DialogStage::Confirming;
                        None
                    } else {
                        Some(DialogEvent::Submitted(self.values()))
                    }
                }
                _ => None,
            },
            DialogStage::Confirming => match event {
                TuiEvent::Submit | TuiEvent::InputChar('y') => {
                    Some(DialogEvent::Submitted(self.values()))
                }
                TuiEvent::Back | TuiEvent::InputChar('n') => Some(DialogEvent::Dismissed),
                _ => None,
            },
        }
    }
}

/// Transient render wrapper for the dialog overlay.
pub struct Dialog<'a> {
    state: &'a DialogState,
}

impl<'a> Dialog<'a> {
    pub fn new(state: &'a DialogState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self.state.stage {
            DialogStage::Editing => self.render_form(frame, area),
            DialogStage::Confirming => self.render_confirmation(frame, area),
        }
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 30, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.state.title())
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Run  Tab Next field  Esc Cancel ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let constraints = vec![Constraint::Length(1); self.state.fields.len()];
        let rows = Layout::vertical(constraints).spacing(1).split(inner);

        for (i, field) in self.state.fields.iter().enumerate() {
            let focused = i == self.state.focused;
            let label_style = if focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let cursor = if focused { "█" } else { "" };
            let line = Line::from(vec![
                Span::styled(format!("{}: ", field.label), label_style),
                Span::raw(field.value.as_str()),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ]);
            if let Some(row) = rows.get(i) {
                frame.render_widget(Paragraph::new(line), *row);
            }
        }
    }

    fn render_confirmation(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 20, area);
        frame.render_widget(Clear, overlay);

        let name = self
            .state
            .fields
            .first()
            .map(|f| f.value.trim())
            .unwrap_or_default();
        let text = format!(
            "Are you sure you want to delete project '{name}'?\nThis action cannot be undone!"
        );

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Confirm Delete ")
                    .title_bottom(Line::from(" Enter/y Delete  Esc/n Cancel ").centered())
                    .padding(Padding::uniform(1)),
            );
        frame.render_widget(paragraph, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(dialog: &mut DialogState, text: &str) {
        for c in text.chars() {
            dialog.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut dialog = DialogState::for_action(NamedAction::SwitchProject);
        type_text(&mut dialog, "devx");
        dialog.handle_event(&TuiEvent::Backspace);
        assert_eq!(dialog.fields[0].value, "dev");
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut dialog = DialogState::for_action(NamedAction::CreateProject);
        type_text(&mut dialog, "demo");
        dialog.handle_event(&TuiEvent::Tab);
        type_text(&mut dialog, "a demo");
        assert_eq!(dialog.fields[1].value, "a demo");
        dialog.handle_event(&TuiEvent::Tab);
        assert_eq!(dialog.focused, 0);
    }

    #[test]
    fn test_submit_emits_collected_values() {
        let mut dialog = DialogState::for_action(NamedAction::PodLogs);
        type_text(&mut dialog, "api-pod");
        assert_eq!(
            dialog.handle_event(&TuiEvent::Submit),
            Some(DialogEvent::Submitted(vec!["api-pod".to_string()]))
        );
    }

    #[test]
    fn test_submit_with_empty_required_field_dismisses() {
        let mut dialog = DialogState::for_action(NamedAction::SwitchProject);
        assert_eq!(
            dialog.handle_event(&TuiEvent::Submit),
            Some(DialogEvent::Dismissed)
        );
    }

    #[test]
    fn test_delete_requires_secondary_confirmation() {
        let mut dialog = DialogState::for_action(NamedAction::DeleteProject);
        type_text(&mut dialog, "old-project");

        // First Enter only arms the confirmation stage.
        assert_eq!(dialog.handle_event(&TuiEvent::Submit), None);
        assert_eq!(dialog.stage, DialogStage::Confirming);

        assert_eq!(
            dialog.handle_event(&TuiEvent::Submit),
            Some(DialogEvent::Submitted(vec!["old-project".to_string()]))
        );
    }

    #[test]
    fn test_delete_confirmation_can_back_out() {
        let mut dialog = DialogState::for_action(NamedAction::DeleteProject);
        type_text(&mut dialog, "old-project");
        dialog.handle_event(&TuiEvent::Submit);
        assert_eq!(
            dialog.handle_event(&TuiEvent::InputChar('n')),
            Some(DialogEvent::Dismissed)
        );
    }

    #[test]
    fn test_escape_dismisses_while_editing() {
        let mut dialog = DialogState::for_action(NamedAction::CustomCommand);
        type_text(&mut dialog, "get pods");
        assert_eq!(
            dialog.handle_event(&TuiEvent::Back),
            Some(DialogEvent::Dismissed)
        );
    }
}
