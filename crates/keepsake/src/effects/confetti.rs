use std::time::Instant;

use eframe::egui;
use rand::Rng;

const GLYPHS: &[&str] = &[
    "\u{1F389}", // party popper
    "\u{1F38A}", // confetti ball
    "\u{1F388}", // balloon
    "\u{1F381}", // gift
    "\u{2764}\u{FE0F}",  // heart
    "\u{1F496}", // sparkling heart
    "\u{1F973}", // partying face
    "\u{1F382}", // cake
    "\u{2728}",  // sparkles
    "\u{1F31F}", // glowing star
];

const PARTICLE_COUNT: usize = 60;

/// Hard cap on the burst's lifetime; also the upper bound of
/// delay (2s) + fall duration (7s) with a little slack.
const MAX_LIFETIME: f32 = 10.0;

struct Particle {
    glyph: &'static str,
    x_frac: f32,
    size: f32,
    fall_secs: f32,
    delay_secs: f32,
    spin_radians: f32,
}

/// A one-shot shower of emoji falling from the top of the window.
pub struct ConfettiBurst {
    particles: Vec<Particle>,
    start: Instant,
}

impl ConfettiBurst {
    pub fn new(start: Instant) -> Self {
        let mut rng = rand::rng();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                x_frac: rng.random_range(0.0..1.0),
                size: rng.random_range(20.0..45.0),
                fall_secs: rng.random_range(3.0..7.0),
                delay_secs: rng.random_range(0.0..2.0),
                spin_radians: rng.random_range(0.0..std::f32::consts::TAU * 2.0),
            })
            .collect();
        Self { particles, start }
    }

    pub fn started_at(&self) -> Instant {
        self.start
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        elapsed >= MAX_LIFETIME
            || self
                .particles
                .iter()
                .all(|p| elapsed >= p.delay_secs + p.fall_secs)
    }

    pub fn draw(&self, ui: &egui::Ui, rect: egui::Rect, now: Instant) {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f32();

        for p in &self.particles {
            let t = (elapsed - p.delay_secs) / p.fall_secs;
            if !(0.0..1.0).contains(&t) {
                continue;
            }
            let eased = ease_out_cubic(t);

            let x = rect.left() + p.x_frac * rect.width();
            let y = rect.top() - 50.0 + eased * (rect.height() + 150.0);
            let opacity = 1.0 - t;

            let color = egui::Color32::from_white_alpha((opacity * 255.0) as u8);
            let galley = ui.painter().layout_no_wrap(
                p.glyph.to_string(),
                egui::FontId::proportional(p.size),
                color,
            );
            let pos = egui::pos2(x - galley.rect.width() / 2.0, y);
            ui.painter().add(
                egui::epaint::TextShape::new(pos, galley, color)
                    .with_angle(p.spin_radians * eased),
            );
        }
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
