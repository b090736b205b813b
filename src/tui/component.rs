/// A component that handles terminal events.
///
/// Stateful components (menu list, dialogs, history overlay) keep their
/// persistent state in `TuiState` and translate low-level `TuiEvent`s into
/// the high-level event their owner acts on. Rendering is done by transient
/// wrapper structs created each frame with borrowed state.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
