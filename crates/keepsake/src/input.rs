use std::time::{Duration, Instant};

/// Horizontal displacement a drag must exceed to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Quiet period after the last wheel event before it fires.
pub const WHEEL_DEBOUNCE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Next,
    Prev,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Swipe(NavIntent),
    /// Release within the threshold: a plain tap/click on the background.
    Tap,
    /// No gesture was in progress.
    None,
}

/// Tracks a horizontal press-drag-release gesture. A press starts the
/// gesture and each observed drag position updates it, so the release
/// resolves even when the pointer position is already gone by then (a
/// touch lift reports no hover position).
#[derive(Debug, Default)]
pub struct SwipeTracker {
    /// `(origin_x, last_x)` while a gesture is held.
    gesture: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32) {
        self.gesture = Some((x, x));
    }

    pub fn is_tracking(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn cancel(&mut self) {
        self.gesture = None;
    }

    /// Record the pointer position while the gesture is held.
    pub fn drag_to(&mut self, x: f32) {
        if let Some((_, last_x)) = self.gesture.as_mut() {
            *last_x = x;
        }
    }

    /// Resolve the gesture at the last tracked position.
    pub fn release(&mut self) -> SwipeOutcome {
        let Some((origin, x)) = self.gesture.take() else {
            return SwipeOutcome::None;
        };
        // Swipe left (negative displacement) advances, mirroring a page turn.
        if x < origin - SWIPE_THRESHOLD {
            SwipeOutcome::Swipe(NavIntent::Next)
        } else if x > origin + SWIPE_THRESHOLD {
            SwipeOutcome::Swipe(NavIntent::Prev)
        } else {
            SwipeOutcome::Tap
        }
    }
}

/// Trailing-edge debounce for wheel navigation: every wheel event restarts
/// the quiet period, and the most recent direction fires once it elapses.
/// The pending intent is an explicit handle, cancellable by navigation.
#[derive(Debug, Default)]
pub struct WheelDebouncer {
    pending: Option<(Instant, NavIntent)>,
}

impl WheelDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, intent: NavIntent, now: Instant) {
        self.pending = Some((now + WHEEL_DEBOUNCE, intent));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns the debounced intent once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<NavIntent> {
        match self.pending {
            Some((deadline, intent)) if now >= deadline => {
                self.pending = None;
                Some(intent)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_left_past_threshold_advances() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        tracker.drag_to(240.0);
        assert_eq!(tracker.release(), SwipeOutcome::Swipe(NavIntent::Next));
    }

    #[test]
    fn swipe_right_past_threshold_goes_back() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        tracker.drag_to(351.0);
        assert_eq!(tracker.release(), SwipeOutcome::Swipe(NavIntent::Prev));
    }

    #[test]
    fn displacement_at_threshold_is_a_tap() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        tracker.drag_to(250.0);
        assert_eq!(tracker.release(), SwipeOutcome::Tap);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.drag_to(100.0);
        assert_eq!(tracker.release(), SwipeOutcome::None);
    }

    #[test]
    fn release_consumes_the_gesture() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(0.0);
        tracker.drag_to(-60.0);
        tracker.release();
        assert_eq!(tracker.release(), SwipeOutcome::None);
    }

    #[test]
    fn release_resolves_at_the_last_dragged_position() {
        // A touch lift reports no position; the gesture still resolves
        // from the drag positions seen while it was held.
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        tracker.drag_to(280.0);
        tracker.drag_to(200.0);
        assert_eq!(tracker.release(), SwipeOutcome::Swipe(NavIntent::Next));
    }

    #[test]
    fn release_without_any_drag_is_a_tap() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        assert_eq!(tracker.release(), SwipeOutcome::Tap);
    }

    #[test]
    fn wheel_fires_only_after_the_quiet_period() {
        let mut debouncer = WheelDebouncer::new();
        let t0 = Instant::now();
        debouncer.observe(NavIntent::Next, t0);
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(99)), None);
        assert_eq!(
            debouncer.poll(t0 + Duration::from_millis(100)),
            Some(NavIntent::Next)
        );
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(200)), None);
    }

    #[test]
    fn later_wheel_events_restart_the_window_and_win() {
        let mut debouncer = WheelDebouncer::new();
        let t0 = Instant::now();
        debouncer.observe(NavIntent::Next, t0);
        debouncer.observe(NavIntent::Prev, t0 + Duration::from_millis(60));
        // The original deadline has passed but was superseded.
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(120)), None);
        assert_eq!(
            debouncer.poll(t0 + Duration::from_millis(160)),
            Some(NavIntent::Prev)
        );
    }

    #[test]
    fn cancel_discards_the_pending_intent() {
        let mut debouncer = WheelDebouncer::new();
        let t0 = Instant::now();
        debouncer.observe(NavIntent::Next, t0);
        debouncer.cancel();
        assert_eq!(debouncer.poll(t0 + Duration::from_millis(500)), None);
    }
}
