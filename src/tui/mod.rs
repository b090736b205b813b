//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One loop: draw when something changed, poll for input with a timeout,
//! route events (open overlay first, then panes, then global keys), apply
//! the reducer's effects, and drain the action channel that overlay-expiry
//! timers post to.
//!
//! Command execution happens inline on this loop and **blocks it** for the
//! child's full lifetime — no input, no redraw, no cancellation while a
//! command runs. That mirrors the executor's contract; the only concurrent
//! writers anywhere are the flash-expiry timers, and they go through the
//! action channel rather than touching state directly.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{update, Action, Effect, NamedAction};
use crate::core::catalog;
use crate::core::config::ResolvedConfig;
use crate::core::exec::{self, CommandSpec, ProcessRunner};
use crate::core::history;
use crate::core::state::App;
use crate::core::status::FlashTicket;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DialogEvent, DialogState, HistoryEvent, HistoryViewState, MenuEvent, MenuListState,
    OutputViewState,
};
use crate::tui::event::{poll_event_immediate, poll_event_timeout, TuiEvent};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub menu_list: MenuListState,
    pub output: OutputViewState,
    // Overlays (None = hidden); a dialog takes precedence over history
    pub dialog: Option<DialogState>,
    pub history_view: Option<HistoryViewState>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            menu_list: MenuListState::new(),
            output: OutputViewState::new(),
            dialog: None,
            history_view: None,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture for wheel-scrolling the output pane; the cursor is
        // hidden because there is no free-text editing surface.
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let runner = Arc::new(ProcessRunner);
    let root_menu = catalog::root_menu(&config.tool, config.menu_file.as_deref());
    let mut app = App::new(runner, &config, root_menu, history::load_history());
    app.refresh_environment();

    let mut tui = TuiState::new();
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from flash-expiry timer tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    loop {
        // Sync menu list bounds with the frame about to render
        tui.menu_list.sync(app.nav.current().nodes.len());

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(Duration::from_millis(250));
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of what's open
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // When a dialog is open, route all events to it
            if let Some(ref mut dialog) = tui.dialog {
                if let Some(dialog_event) = dialog.handle_event(&event) {
                    let named = dialog.action;
                    tui.dialog = None;
                    if let DialogEvent::Submitted(values) = dialog_event {
                        match named.build_command(&app.tool, &values) {
                            Some(spec) => {
                                run_command(&mut app, &mut tui, &spec, &tx);
                                if named.affects_project() {
                                    app.refresh_environment();
                                }
                            }
                            None => info!("Dialog for {:?} produced no command", named),
                        }
                    }
                }
                continue;
            }

            // Same for the history overlay
            if let Some(ref mut history_view) = tui.history_view {
                if let Some(history_event) = history_view.handle_event(&event) {
                    match history_event {
                        HistoryEvent::ReExecute(line) => {
                            tui.history_view = None;
                            // A new entry with a new sequence number; the
                            // original record stays as it was.
                            run_command(&mut app, &mut tui, &CommandSpec::Line(line), &tx);
                        }
                        HistoryEvent::Dismiss => {
                            tui.history_view = None;
                        }
                    }
                }
                continue;
            }

            // Scroll events — always go to the output pane
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.output.handle_event(&event);
                continue;
            }

            // Global shortcuts
            match event {
                TuiEvent::Back => {
                    if apply_effect(update(&mut app, Action::Back), &mut app, &mut tui, &tx) {
                        should_quit = true;
                    }
                }
                TuiEvent::RefreshEnvironment => {
                    update(&mut app, Action::RefreshEnvironment);
                }
                TuiEvent::OpenHistory => {
                    tui.history_view = Some(HistoryViewState::new(&app.history));
                }
                TuiEvent::OpenCustom => {
                    tui.dialog = Some(DialogState::for_action(NamedAction::CustomCommand));
                }
                _ => {
                    // Everything else is menu navigation
                    if let Some(MenuEvent::Activate(index)) = tui.menu_list.handle_event(&event) {
                        let effect = update(&mut app, Action::Activate(index));
                        if apply_effect(effect, &mut app, &mut tui, &tx) {
                            should_quit = true;
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle flash-expiry actions from timer tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            let effect = update(&mut app, action);
            if apply_effect(effect, &mut app, &mut tui, &tx) {
                should_quit = true;
            }
        }
        if should_quit {
            break;
        }
    }

    // Persist history on the way out
    if let Err(e) = history::save_history(&app.history) {
        warn!("Failed to save history: {}", e);
    }

    ratatui::restore();
    Ok(())
}

/// Interpret one reducer effect. Returns `true` when the app should quit.
fn apply_effect(
    effect: Effect,
    app: &mut App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::Quit => true,
        Effect::MenuChanged => {
            tui.menu_list.reset();
            false
        }
        Effect::Execute(spec) => {
            run_command(app, tui, &spec, tx);
            false
        }
        Effect::OpenDialog(named) => {
            tui.dialog = Some(DialogState::for_action(named));
            false
        }
        Effect::OpenHistory => {
            tui.history_view = Some(HistoryViewState::new(&app.history));
            false
        }
        Effect::None => false,
    }
}

/// Run a command through the core's execute flow (blocking), reset the
/// output pane's scroll, and arm expiry timers for the flashes it raised.
fn run_command(app: &mut App, tui: &mut TuiState, spec: &CommandSpec, tx: &mpsc::Sender<Action>) {
    for ticket in exec::execute(app, spec) {
        spawn_overlay_timer(ticket, tx.clone());
    }
    tui.output.reset();
}

/// One detached task per flash: sleep, then post the expiry back to the
/// event loop. A stale generation is discarded by the reducer, so a timer
/// from a superseded flash can never clobber a newer overlay.
fn spawn_overlay_timer(ticket: FlashTicket, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        tokio::time::sleep(ticket.duration).await;
        if tx.send(Action::OverlayElapsed(ticket.generation)).is_err() {
            warn!(
                "Failed to send overlay expiry for generation {}: receiver dropped",
                ticket.generation
            );
        }
    });
}
