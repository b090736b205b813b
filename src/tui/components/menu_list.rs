//! # Menu List Component
//!
//! The left pane: the current navigation frame as a selectable list, each
//! entry showing its name with the description underneath. Emits
//! [`MenuEvent::Activate`] on Enter; the reducer decides what activation
//! means.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, ListState};
use ratatui::Frame;

use crate::core::nav::NavigationFrame;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent selection state for the menu list.
pub struct MenuListState {
    pub selected: usize,
    /// Entry count of the frame on screen, synced by the event loop before
    /// dispatch so cursor movement stays in bounds.
    pub len: usize,
    pub list_state: ListState,
}

impl MenuListState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            len: 0,
            list_state,
        }
    }

    /// Sync the entry count with the frame about to be rendered.
    pub fn sync(&mut self, len: usize) {
        self.len = len;
        if len > 0 && self.selected >= len {
            self.selected = len - 1;
            self.list_state.select(Some(self.selected));
        }
    }

    /// The frame changed (descend or ascend): selection resets to the top.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.list_state.select(Some(0));
    }
}

impl Default for MenuListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the menu list.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The entry at this index was activated.
    Activate(usize),
}

impl EventHandler for MenuListState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                if self.len > 0 {
                    self.selected = self.selected.saturating_sub(1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::CursorDown => {
                if self.len > 0 {
                    self.selected = (self.selected + 1).min(self.len - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit => Some(MenuEvent::Activate(self.selected)),
            _ => None,
        }
    }
}

/// Transient render wrapper.
pub struct MenuList<'a> {
    frame: &'a NavigationFrame,
    state: &'a mut MenuListState,
}

impl<'a> MenuList<'a> {
    pub fn new(frame: &'a NavigationFrame, state: &'a mut MenuListState) -> Self {
        Self { frame, state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .frame
            .nodes
            .iter()
            .map(|node| {
                let marker = if node.is_group() { "▸ " } else { "  " };
                ListItem::new(vec![
                    Line::from(format!("{marker}{}", node.name)),
                    Line::styled(
                        format!("  {}", node.description),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::bordered().title(format!(" {} ", self.frame.title)))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_len(len: usize) -> MenuListState {
        let mut state = MenuListState::new();
        state.sync(len);
        state
    }

    #[test]
    fn test_cursor_moves_stay_in_bounds() {
        let mut state = state_with_len(3);
        assert!(state.handle_event(&TuiEvent::CursorUp).is_none());
        assert_eq!(state.selected, 0);

        for _ in 0..10 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_submit_emits_selected_index() {
        let mut state = state_with_len(5);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(MenuEvent::Activate(2))
        );
    }

    #[test]
    fn test_reset_returns_selection_to_top() {
        let mut state = state_with_len(4);
        state.handle_event(&TuiEvent::CursorDown);
        state.reset();
        assert_eq!(state.selected, 0);
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_sync_clamps_selection_to_shorter_frame() {
        let mut state = state_with_len(8);
        for _ in 0..7 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        state.sync(3);
        assert_eq!(state.selected, 2);
    }
}
