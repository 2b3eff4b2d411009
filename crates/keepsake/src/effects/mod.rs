pub mod confetti;
pub mod hearts;

use std::time::{Duration, Instant};

use eframe::egui;

use self::confetti::ConfettiBurst;

/// Delay between entering the last slide and the confetti burst, so the
/// slide transition settles first.
pub const BURST_DELAY: Duration = Duration::from_millis(500);

/// Schedules and owns the completion-effect burst for the terminal slide.
///
/// Re-entering the last slide re-triggers the burst, but a burst that is
/// still live makes scheduling a check-and-skip no-op, so rapid repeated
/// entries never stack overlapping particle containers.
#[derive(Default)]
pub struct Finale {
    pending: Option<Instant>,
    burst: Option<ConfettiBurst>,
}

impl Finale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the one-shot burst timer. An already-armed timer is replaced.
    pub fn schedule(&mut self, now: Instant) {
        self.pending = Some(now + BURST_DELAY);
    }

    /// Advance timers: spawn the burst when due, drop it when expired.
    pub fn tick(&mut self, now: Instant) {
        if self.burst.as_ref().is_some_and(|b| b.is_finished(now)) {
            self.burst = None;
        }
        if self.pending.is_some_and(|due| now >= due) {
            self.pending = None;
            if self.burst.is_none() {
                self.burst = Some(ConfettiBurst::new(now));
            }
        }
    }

    /// True while a burst is live or armed; the app keeps repainting.
    pub fn is_active(&self) -> bool {
        self.pending.is_some() || self.burst.is_some()
    }

    pub fn draw(&self, ui: &egui::Ui, rect: egui::Rect, now: Instant) {
        if let Some(burst) = &self.burst {
            burst.draw(ui, rect, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_spawns_after_the_delay() {
        let mut finale = Finale::new();
        let t0 = Instant::now();
        finale.schedule(t0);
        finale.tick(t0 + Duration::from_millis(499));
        assert!(finale.burst.is_none());
        finale.tick(t0 + Duration::from_millis(500));
        assert!(finale.burst.is_some());
    }

    #[test]
    fn rapid_rescheduling_does_not_stack_bursts() {
        let mut finale = Finale::new();
        let t0 = Instant::now();
        finale.schedule(t0);
        finale.tick(t0 + BURST_DELAY);
        assert!(finale.burst.is_some());

        // Re-enter the last slide while the burst is still falling.
        finale.schedule(t0 + Duration::from_secs(1));
        finale.tick(t0 + Duration::from_secs(1) + BURST_DELAY);
        let burst_started = finale.burst.as_ref().map(|b| b.started_at());
        assert_eq!(burst_started, Some(t0 + BURST_DELAY));
    }

    #[test]
    fn finished_burst_makes_room_for_a_new_one() {
        let mut finale = Finale::new();
        let t0 = Instant::now();
        finale.schedule(t0);
        finale.tick(t0 + BURST_DELAY);

        let later = t0 + Duration::from_secs(30);
        finale.schedule(later);
        finale.tick(later + BURST_DELAY);
        assert_eq!(
            finale.burst.as_ref().map(|b| b.started_at()),
            Some(later + BURST_DELAY)
        );
    }

    #[test]
    fn inactive_when_nothing_is_armed() {
        let mut finale = Finale::new();
        assert!(!finale.is_active());
        let t0 = Instant::now();
        finale.schedule(t0);
        assert!(finale.is_active());
        finale.tick(t0 + Duration::from_secs(60));
        assert!(!finale.is_active());
    }
}
