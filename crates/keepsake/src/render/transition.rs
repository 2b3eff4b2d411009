use std::time::Instant;

/// Slide transitions run for 500ms; the finale burst is delayed by the same
/// amount so it never fires mid-transition.
pub const TRANSITION_DURATION: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    SlideHorizontal,
    Fade,
    None,
}

impl TransitionKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "fade" => Self::Fade,
            "none" => Self::None,
            _ => Self::SlideHorizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    Forward,
    Backward,
}

/// An in-flight transition between two slides.
pub struct ActiveTransition {
    pub from: usize,
    pub to: usize,
    pub kind: TransitionKind,
    pub direction: TransitionDirection,
    start: Instant,
}

impl ActiveTransition {
    pub fn new(
        from: usize,
        to: usize,
        kind: TransitionKind,
        direction: TransitionDirection,
    ) -> Self {
        Self {
            from,
            to,
            kind,
            direction,
            start: Instant::now(),
        }
    }

    /// Eased progress in [0, 1].
    pub fn progress(&self) -> f32 {
        let raw = (self.start.elapsed().as_secs_f32() / TRANSITION_DURATION).clamp(0.0, 1.0);
        ease_in_out(raw)
    }

    pub fn is_complete(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= TRANSITION_DURATION
    }
}

pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_name_defaults_to_slide() {
        assert_eq!(TransitionKind::from_name("fade"), TransitionKind::Fade);
        assert_eq!(TransitionKind::from_name("none"), TransitionKind::None);
        assert_eq!(
            TransitionKind::from_name("slide"),
            TransitionKind::SlideHorizontal
        );
        assert_eq!(
            TransitionKind::from_name("anything"),
            TransitionKind::SlideHorizontal
        );
    }

    #[test]
    fn easing_is_anchored_and_symmetric() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
    }
}
