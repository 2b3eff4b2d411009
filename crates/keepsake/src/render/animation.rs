use std::time::Duration;

use eframe::egui;

use crate::card::EnterAnimation;

/// Delay before a freshly entered slide's animations start, mirroring the
/// tag-removal/reflow/re-add dance so they restart from the first keyframe
/// on every entry, including repeated entries into the same slide.
pub const RESTART_DELAY: Duration = Duration::from_millis(100);

/// Visual transform a block carries at a point in its enter animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockTransform {
    pub offset: egui::Vec2,
    pub scale: f32,
    pub opacity: f32,
}

impl BlockTransform {
    pub const IDENTITY: Self = Self {
        offset: egui::Vec2::ZERO,
        scale: 1.0,
        opacity: 1.0,
    };
}

/// How long each animation plays, in seconds.
pub fn duration(kind: EnterAnimation) -> f32 {
    match kind {
        EnterAnimation::Pop => 0.5,
        EnterAnimation::FadeIn => 0.8,
        EnterAnimation::SlideLeft | EnterAnimation::SlideRight | EnterAnimation::SlideUp => 0.6,
        EnterAnimation::Bounce => 0.9,
    }
}

/// Sample an animation at progress `t`. Values outside [0, 1] clamp to the
/// first and last keyframe respectively.
pub fn sample(kind: EnterAnimation, t: f32) -> BlockTransform {
    let t = t.clamp(0.0, 1.0);
    let eased = ease_out_cubic(t);
    let fade_in = (t * 2.5).min(1.0);

    match kind {
        EnterAnimation::Pop => {
            // Overshoot to 110% around 80%, settle at 100%.
            let scale = if t < 0.8 {
                0.5 + (t / 0.8) * 0.6
            } else {
                1.1 - ((t - 0.8) / 0.2) * 0.1
            };
            BlockTransform {
                offset: egui::Vec2::ZERO,
                scale,
                opacity: fade_in,
            }
        }
        EnterAnimation::FadeIn => BlockTransform {
            offset: egui::Vec2::ZERO,
            scale: 1.0,
            opacity: t,
        },
        EnterAnimation::SlideLeft => BlockTransform {
            offset: egui::vec2(-120.0 * (1.0 - eased), 0.0),
            scale: 1.0,
            opacity: fade_in,
        },
        EnterAnimation::SlideRight => BlockTransform {
            offset: egui::vec2(120.0 * (1.0 - eased), 0.0),
            scale: 1.0,
            opacity: fade_in,
        },
        EnterAnimation::SlideUp => BlockTransform {
            offset: egui::vec2(0.0, 80.0 * (1.0 - eased)),
            scale: 1.0,
            opacity: fade_in,
        },
        EnterAnimation::Bounce => BlockTransform {
            offset: egui::vec2(0.0, -60.0 * (1.0 - ease_out_bounce(t))),
            scale: 1.0,
            opacity: fade_in,
        },
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_out_bounce(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}
