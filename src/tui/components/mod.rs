//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Stateless components (detail view, status bar) receive their data as
//! props each frame. Stateful components (menu list, output view, dialogs,
//! history overlay) keep persistent state in `TuiState` and are rendered
//! through a transient wrapper created per frame with borrowed state —
//! the same pattern throughout:
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── menu_list.rs      (left pane: current menu level)
//! ├── detail_view.rs    (right top: highlighted node details)
//! ├── output_view.rs    (right bottom: scrollable command output)
//! ├── status_bar.rs     (bottom line: baseline/overlay status)
//! ├── dialog.rs         (parameter-collecting overlay forms)
//! └── history_view.rs   (command history overlay)
//! ```
//!
//! Each component file co-locates its state type, event type, rendering
//! and tests.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub mod detail_view;
pub mod dialog;
pub mod history_view;
pub mod menu_list;
pub mod output_view;
pub mod status_bar;

pub use detail_view::DetailView;
pub use dialog::{Dialog, DialogEvent, DialogState};
pub use history_view::{HistoryEvent, HistoryView, HistoryViewState};
pub use menu_list::{MenuEvent, MenuList, MenuListState};
pub use output_view::{OutputView, OutputViewState};
pub use status_bar::StatusBar;

/// Center an overlay of `percent_x` by `percent_y` of `area`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    area
}
