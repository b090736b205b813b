//! # Output View Component
//!
//! The right-hand bottom pane: the last command's captured output inside a
//! scroll view. Scroll events (arrow-key pages, mouse wheel) are handled
//! internally; the component emits nothing.

use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent scroll state for the output pane.
#[derive(Default)]
pub struct OutputViewState {
    pub scroll_state: ScrollViewState,
}

impl OutputViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// New output starts at the top.
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for OutputViewState {
    type Event = (); // scroll is handled internally, nothing to emit

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper over the captured output.
pub struct OutputView<'a> {
    output: &'a str,
    succeeded: Option<bool>,
    state: &'a mut OutputViewState,
}

impl<'a> OutputView<'a> {
    pub fn new(output: &'a str, succeeded: Option<bool>, state: &'a mut OutputViewState) -> Self {
        Self {
            output,
            succeeded,
            state,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = match self.succeeded {
            Some(false) => Style::default().fg(Color::Red),
            _ => Style::default(),
        };
        let block = Block::bordered()
            .title(" Command Output ")
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.output.is_empty() {
            let hint = Paragraph::new("Select an entry and press Enter to run it.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, inner);
            return;
        }

        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(self.output).wrap(Wrap { trim: false });
        let content_height = (paragraph.line_count(content_width) as u16).max(inner.height);

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            paragraph,
            Rect::new(0, 0, content_width, content_height),
        );
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_events_are_consumed_silently() {
        let mut state = OutputViewState::new();
        assert!(state.handle_event(&TuiEvent::ScrollDown).is_none());
        assert!(state.handle_event(&TuiEvent::ScrollPageDown).is_none());
        assert!(state.handle_event(&TuiEvent::Submit).is_none());
    }

    #[test]
    fn test_reset_scrolls_back_to_top() {
        let mut state = OutputViewState::new();
        state.scroll_state.scroll_down();
        state.scroll_state.scroll_down();
        state.reset();
        assert_eq!(state.scroll_state.offset().y, 0);
    }
}
