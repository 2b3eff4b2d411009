//! Slide navigation state machine.
//!
//! Owns the current slide index and provides the only mutation path for it.
//! All visual consequences (active/previous marks, indicator highlights,
//! button enablement, the finale effect) flow through the [`DeckView`] port,
//! so the controller is testable without a window.

/// Visual state of a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    Active,
    Previous,
    Inactive,
}

/// Rendering port the controller drives.
///
/// The app implements this against egui; tests implement it with a
/// recording fake.
pub trait DeckView {
    /// A slide was entered. `previous` is set only when arriving via a
    /// forward [`SlideController::next`], and names the outgoing slide.
    fn slide_shown(&mut self, index: usize, previous: Option<usize>);

    /// Button enablement, recomputed on every transition.
    fn nav_enabled(&mut self, prev_enabled: bool, next_enabled: bool);

    /// The terminal slide was entered. The app schedules the completion
    /// effect 500ms after this so the slide transition settles first.
    fn finale_reached(&mut self, index: usize);
}

/// Navigation state: a single index in `[0, count)`.
///
/// Invariant: exactly one slide is active at any time, equal to `current()`.
/// The outgoing slide of a forward transition carries a transient previous
/// marker until the next transition overwrites it. There is no terminal
/// state; backward and replay transitions from the last slide remain legal.
pub struct SlideController {
    current: usize,
    count: usize,
    previous: Option<usize>,
}

impl SlideController {
    /// `count` must be at least 1; callers reject empty cards before
    /// constructing a controller.
    pub fn new(count: usize) -> Self {
        Self {
            current: 0,
            count,
            previous: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn at_first(&self) -> bool {
        self.current == 0
    }

    pub fn at_last(&self) -> bool {
        self.current + 1 == self.count
    }

    pub fn state_of(&self, index: usize) -> SlideState {
        if index == self.current {
            SlideState::Active
        } else if Some(index) == self.previous {
            SlideState::Previous
        } else {
            SlideState::Inactive
        }
    }

    /// Jump to an arbitrary slide. Returns false (and changes nothing) for
    /// an out-of-range index. Any stale previous marker is cleared; only
    /// forward `next()` applies one.
    pub fn go_to(&mut self, index: usize, view: &mut impl DeckView) -> bool {
        if index >= self.count {
            return false;
        }
        self.show(index, None, view);
        true
    }

    /// Advance one slide. Returns false at the last slide so chained input
    /// handlers (swipe, wheel) can no-op.
    pub fn next(&mut self, view: &mut impl DeckView) -> bool {
        if self.at_last() {
            return false;
        }
        let outgoing = self.current;
        self.show(outgoing + 1, Some(outgoing), view);
        true
    }

    /// Go back one slide. Returns false at the first slide.
    pub fn prev(&mut self, view: &mut impl DeckView) -> bool {
        if self.at_first() {
            return false;
        }
        self.show(self.current - 1, None, view);
        true
    }

    /// Replay from the start.
    pub fn reset(&mut self, view: &mut impl DeckView) {
        self.show(0, None, view);
    }

    fn show(&mut self, index: usize, previous: Option<usize>, view: &mut impl DeckView) {
        self.previous = previous;
        self.current = index;
        view.slide_shown(index, previous);
        // Enablement is a pure function of the index, never cached.
        view.nav_enabled(index > 0, index + 1 < self.count);
        if index + 1 == self.count {
            view.finale_reached(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingView {
        shown: Vec<(usize, Option<usize>)>,
        enablement: Vec<(bool, bool)>,
        finales: Vec<usize>,
    }

    impl DeckView for RecordingView {
        fn slide_shown(&mut self, index: usize, previous: Option<usize>) {
            self.shown.push((index, previous));
        }

        fn nav_enabled(&mut self, prev_enabled: bool, next_enabled: bool) {
            self.enablement.push((prev_enabled, next_enabled));
        }

        fn finale_reached(&mut self, index: usize) {
            self.finales.push(index);
        }
    }

    #[test]
    fn starts_at_zero_with_no_previous() {
        let controller = SlideController::new(5);
        assert_eq!(controller.current(), 0);
        assert_eq!(controller.state_of(0), SlideState::Active);
        for i in 1..5 {
            assert_eq!(controller.state_of(i), SlideState::Inactive);
        }
    }

    #[test]
    fn exactly_one_active_slide_after_any_transition() {
        let mut controller = SlideController::new(5);
        let mut view = RecordingView::default();
        controller.next(&mut view);
        controller.next(&mut view);
        controller.go_to(4, &mut view);
        controller.prev(&mut view);

        let active: Vec<usize> = (0..5)
            .filter(|&i| controller.state_of(i) == SlideState::Active)
            .collect();
        assert_eq!(active, vec![controller.current()]);
    }

    #[test]
    fn prev_at_first_slide_fails_and_changes_nothing() {
        let mut controller = SlideController::new(3);
        let mut view = RecordingView::default();
        assert!(!controller.prev(&mut view));
        assert_eq!(controller.current(), 0);
        assert!(view.shown.is_empty());
    }

    #[test]
    fn next_at_last_slide_fails_and_changes_nothing() {
        let mut controller = SlideController::new(5);
        let mut view = RecordingView::default();
        controller.go_to(4, &mut view);
        let finales_before = view.finales.len();
        assert!(!controller.next(&mut view));
        assert_eq!(controller.current(), 4);
        assert_eq!(view.finales.len(), finales_before);
    }

    #[test]
    fn next_marks_outgoing_slide_previous() {
        let mut controller = SlideController::new(3);
        let mut view = RecordingView::default();
        assert!(controller.next(&mut view));
        assert_eq!(view.shown, vec![(1, Some(0))]);
        assert_eq!(controller.state_of(0), SlideState::Previous);
        assert_eq!(controller.state_of(1), SlideState::Active);
    }

    #[test]
    fn prev_and_go_to_clear_the_previous_marker() {
        let mut controller = SlideController::new(4);
        let mut view = RecordingView::default();
        controller.next(&mut view);
        controller.prev(&mut view);
        assert!((0..4).all(|i| controller.state_of(i) != SlideState::Previous));

        controller.next(&mut view);
        controller.go_to(3, &mut view);
        assert!((0..4).all(|i| controller.state_of(i) != SlideState::Previous));
    }

    #[test]
    fn go_to_is_idempotent_without_duplicate_previous_markers() {
        let mut controller = SlideController::new(5);
        let mut view = RecordingView::default();
        controller.next(&mut view);
        assert!(controller.go_to(2, &mut view));
        assert!(controller.go_to(2, &mut view));
        assert_eq!(controller.current(), 2);
        let previous_count = (0..5)
            .filter(|&i| controller.state_of(i) == SlideState::Previous)
            .count();
        assert_eq!(previous_count, 0);
    }

    #[test]
    fn go_to_out_of_range_is_rejected() {
        let mut controller = SlideController::new(3);
        let mut view = RecordingView::default();
        assert!(!controller.go_to(3, &mut view));
        assert_eq!(controller.current(), 0);
        assert!(view.shown.is_empty());
    }

    #[test]
    fn enablement_is_a_pure_function_of_the_index() {
        let mut controller = SlideController::new(3);
        let mut view = RecordingView::default();
        controller.go_to(0, &mut view);
        controller.go_to(1, &mut view);
        controller.go_to(2, &mut view);
        assert_eq!(
            view.enablement,
            vec![(false, true), (true, true), (true, false)]
        );
    }

    #[test]
    fn walking_five_slides_forward_reaches_the_finale_once() {
        let mut controller = SlideController::new(5);
        let mut view = RecordingView::default();
        for _ in 0..4 {
            assert!(controller.next(&mut view));
        }
        assert_eq!(controller.current(), 4);
        assert_eq!(view.finales, vec![4]);
        assert_eq!(view.enablement.last(), Some(&(true, false)));
    }

    #[test]
    fn re_entering_the_last_slide_reports_the_finale_again() {
        let mut controller = SlideController::new(3);
        let mut view = RecordingView::default();
        controller.go_to(2, &mut view);
        controller.reset(&mut view);
        controller.go_to(2, &mut view);
        assert_eq!(view.finales, vec![2, 2]);
    }

    #[test]
    fn reset_returns_to_the_first_slide() {
        let mut controller = SlideController::new(4);
        let mut view = RecordingView::default();
        controller.go_to(3, &mut view);
        controller.reset(&mut view);
        assert_eq!(controller.current(), 0);
        assert_eq!(view.enablement.last(), Some(&(false, true)));
    }
}
