//! # History View Component
//!
//! Full-screen overlay listing previously executed commands, newest first
//! (a presentation choice — storage order stays oldest first). Enter
//! re-submits the selected command line, which appends a fresh history
//! entry; the original record is never touched.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HistoryViewState` lives in `TuiState`
//! - `HistoryView` is created each frame with borrowed state

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};
use ratatui::Frame;

use crate::core::history::{HistoryEntry, HistoryLog};
use crate::tui::component::EventHandler;
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

/// Persistent state for the history overlay.
pub struct HistoryViewState {
    /// Newest first.
    pub entries: Vec<HistoryEntry>,
    pub selected: usize,
    pub list_state: ListState,
}

impl HistoryViewState {
    pub fn new(log: &HistoryLog) -> Self {
        let entries: Vec<HistoryEntry> = log.entries().iter().rev().cloned().collect();
        let mut list_state = ListState::default();
        if !entries.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            entries,
            selected: 0,
            list_state,
        }
    }
}

/// Events emitted by the history overlay.
#[derive(Debug, PartialEq, Eq)]
pub enum HistoryEvent {
    /// Re-submit this command line as a new execution.
    ReExecute(String),
    Dismiss,
}

impl EventHandler for HistoryViewState {
    type Event = HistoryEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Back => Some(HistoryEvent::Dismiss),
            TuiEvent::CursorUp => {
                if !self.entries.is_empty() {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if !self.entries.is_empty() {
                    self.selected = (self.selected + 1).min(self.entries.len() - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => self
                .entries
                .get(self.selected)
                .map(|entry| HistoryEvent::ReExecute(entry.command_line.clone())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the history overlay.
pub struct HistoryView<'a> {
    state: &'a mut HistoryViewState,
}

impl<'a> HistoryView<'a> {
    pub fn new(state: &'a mut HistoryViewState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(70, 70, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Command History ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Re-run  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        if self.state.entries.is_empty() {
            let empty = Paragraph::new("No commands in history")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>4}  ", entry.sequence),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(entry.command_line.as_str()),
                    Span::styled(
                        format!("  {}", entry.executed_at.format("%Y-%m-%d %H:%M")),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_with(commands: &[&str]) -> HistoryLog {
        let mut log = HistoryLog::new();
        for command in commands {
            log.append(*command);
        }
        log
    }

    #[test]
    fn test_entries_are_listed_newest_first() {
        let state = HistoryViewState::new(&log_with(&["first", "second", "third"]));
        let lines: Vec<&str> = state.entries.iter().map(|e| e.command_line.as_str()).collect();
        assert_eq!(lines, vec!["third", "second", "first"]);
        // Sequence numbers untouched by the display reversal.
        assert_eq!(state.entries[0].sequence, 3);
    }

    #[test]
    fn test_submit_re_executes_selected_line() {
        let mut state = HistoryViewState::new(&log_with(&["oc get pods", "oc get svc"]));
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(HistoryEvent::ReExecute("oc get pods".to_string()))
        );
    }

    #[test]
    fn test_submit_on_empty_history_is_noop() {
        let mut state = HistoryViewState::new(&HistoryLog::new());
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(
            state.handle_event(&TuiEvent::Back),
            Some(HistoryEvent::Dismiss)
        );
    }
}
