use std::time::Instant;

use eframe::egui;
use rand::Rng;

const GLYPHS: &[&str] = &[
    "\u{2764}\u{FE0F}",  // red heart
    "\u{1F496}", // sparkling heart
    "\u{1F49D}", // heart with ribbon
    "\u{1F495}", // two hearts
    "\u{1F498}", // heart with arrow
    "\u{1F497}", // growing heart
    "\u{1F493}", // beating heart
    "\u{1F49E}", // revolving hearts
];

const HEART_COUNT: usize = 20;

/// Pause between a heart finishing its climb and restarting from below.
const RESTART_PAUSE: f32 = 1.0;

struct Heart {
    glyph: &'static str,
    x_frac: f32,
    size: f32,
    base_opacity: f32,
    climb_secs: f32,
    spin_radians: f32,
    cycle_start: Instant,
}

impl Heart {
    fn randomize(rng: &mut impl Rng, cycle_start: Instant) -> Self {
        Self {
            glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
            x_frac: rng.random_range(0.0..1.0),
            size: rng.random_range(20.0..50.0),
            base_opacity: rng.random_range(0.3..0.8),
            climb_secs: rng.random_range(20.0..35.0),
            spin_radians: rng.random_range(0.0..std::f32::consts::TAU * 2.0),
            cycle_start,
        }
    }

    fn progress(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.cycle_start).as_secs_f32() / self.climb_secs
    }
}

/// Ambient background hearts drifting up from below the window. Started
/// once at load; each heart recycles itself independently of navigation.
pub struct FloatingHearts {
    hearts: Vec<Heart>,
}

impl FloatingHearts {
    pub fn new(now: Instant) -> Self {
        let mut rng = rand::rng();
        let hearts = (0..HEART_COUNT)
            .map(|_| {
                // Initial stagger so the sky is not empty at launch.
                let mut heart = Heart::randomize(&mut rng, now);
                let head_start =
                    std::time::Duration::from_secs_f32(rng.random_range(0.0..heart.climb_secs));
                heart.cycle_start = now.checked_sub(head_start).unwrap_or(now);
                heart
            })
            .collect();
        Self { hearts }
    }

    /// Recycle hearts that have climbed off the top of the window.
    pub fn update(&mut self, now: Instant) {
        let mut rng = rand::rng();
        for heart in &mut self.hearts {
            if heart.progress(now) >= 1.0 + RESTART_PAUSE / heart.climb_secs {
                *heart = Heart::randomize(&mut rng, now);
            }
        }
    }

    pub fn draw(&self, ui: &egui::Ui, rect: egui::Rect, now: Instant) {
        for heart in &self.hearts {
            let t = heart.progress(now);
            if !(0.0..1.0).contains(&t) {
                continue;
            }
            let eased = ease_out_cubic(t);

            let x = rect.left() + heart.x_frac * rect.width();
            // From just below the bottom edge to 20% above the top.
            let travel = rect.height() * 1.2 + heart.size;
            let y = rect.bottom() + heart.size - eased * travel;
            let opacity = heart.base_opacity * (1.0 - t);

            let color = egui::Color32::from_white_alpha((opacity * 255.0) as u8);
            let galley = ui.painter().layout_no_wrap(
                heart.glyph.to_string(),
                egui::FontId::proportional(heart.size),
                color,
            );
            let pos = egui::pos2(x - galley.rect.width() / 2.0, y);
            ui.painter().add(
                egui::epaint::TextShape::new(pos, galley, color)
                    .with_angle(heart.spin_radians * eased),
            );
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
