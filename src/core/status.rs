//! # Status Line
//!
//! One-line status display: a persistent baseline (context/project plus key
//! hints) and an optional transient overlay that reverts after a delay.
//!
//! Overlays are generation-counted. Every [`StatusLine::flash`] increments
//! the generation and returns a [`FlashTicket`]; the shell turns the ticket
//! into a delayed [`crate::core::action::Action::OverlayElapsed`]. Expiry
//! only clears the overlay if its generation is still current, so a newer
//! flash always wins over a stale timer. (The original implementation
//! captured the displayed text and restored it after a sleep, which let an
//! older flash's timer clobber a newer flash; that behavior is deliberately
//! not reproduced.)

use std::time::Duration;

#[derive(Debug, Clone)]
struct Overlay {
    text: String,
    generation: u64,
}

/// Handed to the shell so it can schedule the overlay's expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashTicket {
    pub generation: u64,
    pub duration: Duration,
}

#[derive(Debug, Default)]
pub struct StatusLine {
    baseline: String,
    overlay: Option<Overlay>,
    generation: u64,
}

impl StatusLine {
    pub fn new(baseline: impl Into<String>) -> Self {
        Self {
            baseline: baseline.into(),
            overlay: None,
            generation: 0,
        }
    }

    /// Update the persistent text. Shows immediately unless an overlay is
    /// still active.
    pub fn set_baseline(&mut self, text: impl Into<String>) {
        self.baseline = text.into();
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// Show `text` now, to be cleared after `duration` unless a newer flash
    /// supersedes this one first.
    pub fn flash(&mut self, text: impl Into<String>, duration: Duration) -> FlashTicket {
        self.generation += 1;
        self.overlay = Some(Overlay {
            text: text.into(),
            generation: self.generation,
        });
        FlashTicket {
            generation: self.generation,
            duration,
        }
    }

    /// Expire the overlay belonging to `generation`. A stale generation
    /// (a newer flash happened since the timer was armed) is a no-op.
    pub fn overlay_elapsed(&mut self, generation: u64) {
        if self.overlay.as_ref().is_some_and(|o| o.generation == generation) {
            self.overlay = None;
        }
    }

    /// The text to render: active overlay if any, baseline otherwise.
    pub fn display(&self) -> &str {
        match &self.overlay {
            Some(overlay) => &overlay.text,
            None => &self.baseline,
        }
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLASH: Duration = Duration::from_millis(100);

    #[test]
    fn test_baseline_shows_when_no_overlay() {
        let mut status = StatusLine::new("Context: dev");
        assert_eq!(status.display(), "Context: dev");
        status.set_baseline("Context: prod");
        assert_eq!(status.display(), "Context: prod");
    }

    #[test]
    fn test_flash_overlays_then_expires_to_baseline() {
        let mut status = StatusLine::new("base");
        let ticket = status.flash("Executing: oc get pods", FLASH);
        assert_eq!(status.display(), "Executing: oc get pods");

        status.overlay_elapsed(ticket.generation);
        assert_eq!(status.display(), "base");
    }

    #[test]
    fn test_baseline_change_hidden_behind_overlay() {
        let mut status = StatusLine::new("old");
        let ticket = status.flash("busy", FLASH);
        status.set_baseline("new");
        assert_eq!(status.display(), "busy");
        status.overlay_elapsed(ticket.generation);
        assert_eq!(status.display(), "new");
    }

    #[test]
    fn test_newer_flash_supersedes_stale_timer() {
        // Flash "A" (long), then "B" (short): when A's timer fires late it
        // must not disturb whatever the current overlay state is.
        let mut status = StatusLine::new("base");
        let a = status.flash("A", Duration::from_millis(100));
        let b = status.flash("B", Duration::from_millis(50));
        assert_eq!(status.display(), "B");

        // B's timer fires first: back to baseline.
        status.overlay_elapsed(b.generation);
        assert_eq!(status.display(), "base");

        // A's timer fires afterwards: stale, "A" never reappears.
        status.overlay_elapsed(a.generation);
        assert_eq!(status.display(), "base");
    }

    #[test]
    fn test_stale_timer_does_not_clear_newer_overlay() {
        let mut status = StatusLine::new("base");
        let a = status.flash("A", FLASH);
        let _b = status.flash("B", FLASH);

        status.overlay_elapsed(a.generation);
        assert_eq!(status.display(), "B");
    }
}
