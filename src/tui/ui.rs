use crate::core::state::App;
use crate::tui::components::{Dialog, DetailView, HistoryView, MenuList, OutputView, StatusBar};
use crate::tui::TuiState;

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

/// Frame layout:
///
/// ```text
/// ┌ Navigation ──────┐┌ Details ───────────────┐
/// │ menu list        ││ highlighted node info  │
/// │                  │└────────────────────────┘
/// │                  │┌ Command Output ────────┐
/// │                  ││ captured subprocess    │
/// │                  ││ output (scrollable)    │
/// └──────────────────┘└────────────────────────┘
///  status line (baseline or transient overlay)
/// ```
///
/// Dialogs and the history overlay draw on top of everything but the
/// status line.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};

    let [main_area, status_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());
    let [menu_area, right_area] =
        Layout::horizontal([Percentage(34), Percentage(66)]).areas(main_area);
    let [detail_area, output_area] =
        Layout::vertical([Percentage(40), Percentage(60)]).areas(right_area);

    let nav_frame = app.nav.current();
    MenuList::new(nav_frame, &mut tui.menu_list).render(frame, menu_area);

    let highlighted = nav_frame.nodes.get(tui.menu_list.selected);
    DetailView::new(highlighted).render(frame, detail_area);

    OutputView::new(&app.output, app.last_succeeded, &mut tui.output).render(frame, output_area);

    StatusBar::new(&app.status).render(frame, status_area);

    // Overlays last, above the panes.
    if let Some(ref mut history_view) = tui.history_view {
        HistoryView::new(history_view).render(frame, main_area);
    }
    if let Some(ref dialog) = tui.dialog {
        Dialog::new(dialog).render(frame, main_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::NamedAction;
    use crate::test_support::test_app;
    use crate::tui::components::DialogState;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_draw_ui() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new();
        tui.menu_list.sync(app.nav.current().nodes.len());
        terminal
            .draw(|f| {
                draw_ui(f, &app, &mut tui);
            })
            .unwrap();
    }

    #[test]
    fn test_draw_ui_with_output_and_overlays() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        app.output = "$ oc get pods\n\npod-a Running\n".to_string();
        app.last_succeeded = Some(false);

        let mut tui = TuiState::new();
        tui.menu_list.sync(app.nav.current().nodes.len());
        tui.dialog = Some(DialogState::for_action(NamedAction::SwitchProject));
        terminal
            .draw(|f| {
                draw_ui(f, &app, &mut tui);
            })
            .unwrap();
    }
}
