//! # Status Bar Component
//!
//! The single bottom line. Renders whatever the core's [`StatusLine`]
//! says to display: yellow while a transient overlay is up, default
//! otherwise.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::Frame;

use crate::core::status::StatusLine;

pub struct StatusBar<'a> {
    status: &'a StatusLine,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: &'a StatusLine) -> Self {
        Self { status }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let style = if self.status.has_overlay() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        frame.render_widget(
            Span::styled(format!(" {}", self.status.display()), style),
            area,
        );
    }
}
