use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

use crate::audio::MusicPlayer;
use crate::card::{self, Card, DisplayNames};
use crate::config::Config;
use crate::controller::{DeckView, SlideController};
use crate::effects::Finale;
use crate::effects::hearts::FloatingHearts;
use crate::input::{NavIntent, SwipeOutcome, SwipeTracker, WheelDebouncer};
use crate::render;
use crate::render::transition::{ActiveTransition, TransitionDirection, TransitionKind};
use crate::theme::Theme;

/// The built-in card, presented when no card file is given.
const DEFAULT_CARD: &str = include_str!("../assets/default.md");

/// Navigation calls the input handlers translate to.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Action {
    Prev,
    Next,
    GoTo(usize),
    Replay,
    ToggleMusic,
    ToggleTheme,
}

/// Buffers the controller's port notifications for one navigation call, so
/// the app can turn them into timers and transitions afterwards.
#[derive(Default)]
struct ViewEvents {
    shown: Option<(usize, Option<usize>)>,
    nav_enabled: Option<(bool, bool)>,
    finale: bool,
}

impl DeckView for ViewEvents {
    fn slide_shown(&mut self, index: usize, previous: Option<usize>) {
        self.shown = Some((index, previous));
    }

    fn nav_enabled(&mut self, prev_enabled: bool, next_enabled: bool) {
        self.nav_enabled = Some((prev_enabled, next_enabled));
    }

    fn finale_reached(&mut self, _index: usize) {
        self.finale = true;
    }
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let duration = 1.5;
        let fade_start = 1.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= 1.5
    }
}

/// Screen rectangles of the interactive chrome, recomputed every frame.
/// A pointer press inside one of these never starts a swipe.
struct ChromeLayout {
    prev_button: egui::Rect,
    next_button: egui::Rect,
    indicators: Vec<egui::Rect>,
    music_toggle: Option<egui::Rect>,
    replay: Option<egui::Rect>,
}

impl ChromeLayout {
    fn contains(&self, pos: egui::Pos2) -> bool {
        self.prev_button.contains(pos)
            || self.next_button.contains(pos)
            || self.indicators.iter().any(|r| r.contains(pos))
            || self.music_toggle.is_some_and(|r| r.contains(pos))
            || self.replay.is_some_and(|r| r.contains(pos))
    }
}

struct CardApp {
    card: Card,
    controller: SlideController,
    theme: Theme,
    transition_kind: TransitionKind,
    transition: Option<ActiveTransition>,
    /// When the current slide was entered; drives the enter-animation
    /// restart. Replaced (never stacked) on every navigation.
    entered_at: Instant,
    prev_enabled: bool,
    next_enabled: bool,
    finale: Finale,
    hearts: FloatingHearts,
    music: Option<MusicPlayer>,
    swipe: SwipeTracker,
    wheel: WheelDebouncer,
    toast: Option<Toast>,
    last_esc: Option<Instant>,
}

impl CardApp {
    fn new(card: Card, theme: Theme, transition_kind: TransitionKind, music: Option<MusicPlayer>) -> Self {
        let now = Instant::now();
        let slide_count = card.slides.len();
        let mut app = Self {
            card,
            controller: SlideController::new(slide_count),
            theme,
            transition_kind,
            transition: None,
            entered_at: now,
            prev_enabled: false,
            next_enabled: slide_count > 1,
            finale: Finale::new(),
            hearts: FloatingHearts::new(now),
            music,
            swipe: SwipeTracker::new(),
            wheel: WheelDebouncer::new(),
            toast: None,
            last_esc: None,
        };
        // A single-slide card opens directly on the finale.
        if slide_count == 1 {
            app.finale.schedule(now);
        }
        app
    }

    fn slide_count(&self) -> usize {
        self.controller.count()
    }

    fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Prev => self.navigate(now, |c, v| c.prev(v)),
            Action::Next => self.navigate(now, |c, v| c.next(v)),
            Action::GoTo(index) => self.navigate(now, move |c, v| c.go_to(index, v)),
            Action::Replay => self.navigate(now, |c, v| {
                c.reset(v);
                true
            }),
            Action::ToggleMusic => self.toggle_music(),
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
            }
        }
    }

    fn navigate(
        &mut self,
        now: Instant,
        op: impl FnOnce(&mut SlideController, &mut ViewEvents) -> bool,
    ) {
        // A navigation arriving mid-transition cuts the old one short; the
        // controller already sits on that transition's target, so the next
        // leg starts from there and no input is dropped.
        let from = self.controller.current();
        let mut events = ViewEvents::default();
        if !op(&mut self.controller, &mut events) {
            return;
        }

        if let Some((index, _previous)) = events.shown {
            // Entering a slide restarts its enter animations; any stale
            // restart timer is replaced, and a pending wheel intent that
            // raced the navigation is dropped.
            self.entered_at = now;
            self.wheel.cancel();
            if index != from && self.transition_kind != TransitionKind::None {
                let direction = if index > from {
                    TransitionDirection::Forward
                } else {
                    TransitionDirection::Backward
                };
                self.transition = Some(ActiveTransition::new(
                    from,
                    index,
                    self.transition_kind,
                    direction,
                ));
            }
        }
        if let Some((prev_enabled, next_enabled)) = events.nav_enabled {
            self.prev_enabled = prev_enabled;
            self.next_enabled = next_enabled;
        }
        if events.finale {
            self.finale.schedule(now);
        }
    }

    fn toggle_music(&mut self) {
        // No music source configured: the binding is skipped gracefully.
        let Some(music) = self.music.as_mut() else {
            return;
        };
        let state = music.toggle();
        self.toast = Some(Toast::new(state.label().to_string()));
    }

    fn compute_scale(rect: egui::Rect) -> f32 {
        let ref_w = 1920.0;
        let ref_h = 1080.0;
        (rect.width() / ref_w).min(rect.height() / ref_h)
    }

    fn chrome_layout(&self, rect: egui::Rect, scale: f32) -> ChromeLayout {
        let button_radius = 34.0 * scale;
        let margin = 28.0 * scale;
        let prev_center = egui::pos2(rect.left() + margin + button_radius, rect.center().y);
        let next_center = egui::pos2(rect.right() - margin - button_radius, rect.center().y);
        let button_size = egui::Vec2::splat(button_radius * 2.0);

        let count = self.slide_count();
        let spacing = 30.0 * scale;
        let dots_width = spacing * (count.saturating_sub(1)) as f32;
        let dots_y = rect.bottom() - 50.0 * scale;
        let indicators = (0..count)
            .map(|i| {
                let x = rect.center().x - dots_width / 2.0 + i as f32 * spacing;
                egui::Rect::from_center_size(
                    egui::pos2(x, dots_y),
                    egui::Vec2::splat(24.0 * scale),
                )
            })
            .collect();

        let music_toggle = self.music.as_ref().map(|_| {
            egui::Rect::from_min_size(
                egui::pos2(rect.right() - 240.0 * scale, rect.top() + 16.0 * scale),
                egui::vec2(224.0 * scale, 40.0 * scale),
            )
        });

        // The replay control only exists on the last slide.
        let replay = self.controller.at_last().then(|| {
            egui::Rect::from_min_size(
                egui::pos2(rect.left() + 16.0 * scale, rect.top() + 16.0 * scale),
                egui::vec2(160.0 * scale, 40.0 * scale),
            )
        });

        ChromeLayout {
            prev_button: egui::Rect::from_center_size(prev_center, button_size),
            next_button: egui::Rect::from_center_size(next_center, button_size),
            indicators,
            music_toggle,
            replay,
        }
    }

    /// Translate pointer presses/releases into controller calls. A press on
    /// a control fires it; a press on the background starts a swipe whose
    /// release resolves to next/prev past the 50px threshold, or to a
    /// background tap (= next) under it.
    fn handle_pointer(&mut self, ctx: &egui::Context, chrome: &ChromeLayout, now: Instant) {
        let (pressed, released, pos) = ctx.input(|i| {
            (
                i.pointer.button_pressed(egui::PointerButton::Primary),
                i.pointer.button_released(egui::PointerButton::Primary),
                i.pointer.hover_pos(),
            )
        });
        if let Some(pos) = pos {
            if pressed {
                if chrome.prev_button.contains(pos) {
                    if self.prev_enabled {
                        self.apply(Action::Prev, now);
                    }
                } else if chrome.next_button.contains(pos) {
                    if self.next_enabled {
                        self.apply(Action::Next, now);
                    }
                } else if let Some(k) = chrome.indicators.iter().position(|r| r.contains(pos)) {
                    self.apply(Action::GoTo(k), now);
                } else if chrome.music_toggle.is_some_and(|r| r.contains(pos)) {
                    self.apply(Action::ToggleMusic, now);
                } else if chrome.replay.is_some_and(|r| r.contains(pos)) {
                    self.apply(Action::Replay, now);
                } else {
                    self.swipe.begin(pos.x);
                }
                return;
            }
            self.swipe.drag_to(pos.x);
        }

        // A touch lift can report no hover position; the tracker resolves
        // the gesture from the positions seen while it was held.
        if released && self.swipe.is_tracking() {
            match self.swipe.release() {
                SwipeOutcome::Swipe(NavIntent::Next) => self.apply(Action::Next, now),
                SwipeOutcome::Swipe(NavIntent::Prev) => self.apply(Action::Prev, now),
                // Click on the slide background advances.
                SwipeOutcome::Tap => {
                    if pos.is_none_or(|p| !chrome.contains(p)) {
                        self.apply(Action::Next, now);
                    }
                }
                SwipeOutcome::None => {}
            }
        }
    }
}

impl eframe::App for CardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let rect = ctx.screen_rect();
        let scale = Self::compute_scale(rect);
        let chrome = self.chrome_layout(rect, scale);

        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let mut actions: Vec<Action> = Vec::new();

        ctx.input(|i| {
            // Quit: Q from anywhere
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }

            // Esc double-tap to quit
            if i.key_pressed(egui::Key::Escape) {
                if let Some(last) = self.last_esc {
                    if last.elapsed().as_secs_f32() < 1.0 {
                        viewport_cmds.push(egui::ViewportCommand::Close);
                        return;
                    }
                }
                self.last_esc = Some(Instant::now());
                self.toast = Some(Toast::new("Press Esc again to exit".to_string()));
                return;
            }

            // Fullscreen toggle: F
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
                return;
            }

            if i.key_pressed(egui::Key::ArrowLeft) {
                actions.push(Action::Prev);
            }
            if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Space) {
                actions.push(Action::Next);
            }
            if i.key_pressed(egui::Key::Home) {
                actions.push(Action::GoTo(0));
            }
            if i.key_pressed(egui::Key::End) {
                actions.push(Action::GoTo(self.slide_count().saturating_sub(1)));
            }
            if i.key_pressed(egui::Key::M) {
                actions.push(Action::ToggleMusic);
            }
            if i.key_pressed(egui::Key::D) {
                actions.push(Action::ToggleTheme);
            }

            // Wheel navigation, trailing-edge debounced. Scrolling down
            // (negative delta) advances, matching page direction.
            let scroll = i.smooth_scroll_delta.y;
            if scroll < 0.0 {
                self.wheel.observe(NavIntent::Next, now);
            } else if scroll > 0.0 {
                self.wheel.observe(NavIntent::Prev, now);
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }
        for action in actions {
            self.apply(action, now);
        }

        self.handle_pointer(ctx, &chrome, now);

        if let Some(intent) = self.wheel.poll(now) {
            match intent {
                NavIntent::Next => self.apply(Action::Next, now),
                NavIntent::Prev => self.apply(Action::Prev, now),
            }
        }

        // Advance the slide transition
        if self.transition.as_ref().is_some_and(|t| t.is_complete()) {
            self.transition = None;
        }

        // Advance ambient and finale effects
        self.hearts.update(now);
        self.finale.tick(now);

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let bg = self.theme.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                ui.painter().rect_filled(rect, 0.0, bg);

                // Ambient hearts sit behind the slide content.
                self.hearts.draw(ui, rect, now);

                let animating = self.draw_slides(ui, rect, scale, now);

                self.draw_chrome(ui, rect, scale, &chrome);

                if let Some(ref toast) = self.toast {
                    draw_toast(ui, toast, &self.theme, rect, scale);
                    ctx.request_repaint();
                }

                // Confetti falls over everything.
                self.finale.draw(ui, rect, now);

                if animating
                    || self.transition.is_some()
                    || self.finale.is_active()
                    || self.wheel.is_pending()
                {
                    ctx.request_repaint();
                } else {
                    // Ambient hearts keep drifting even on idle slides.
                    ctx.request_repaint_after(std::time::Duration::from_millis(33));
                }
            });
    }
}

impl CardApp {
    fn draw_slides(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32, now: Instant) -> bool {
        let Some(ref t) = self.transition else {
            return render::render_slide(
                ui,
                &self.card.slides[self.controller.current()],
                &self.theme,
                rect,
                1.0,
                scale,
                Some(self.entered_at),
                now,
            );
        };

        let progress = t.progress();
        match t.kind {
            TransitionKind::Fade => {
                render::render_slide(
                    ui,
                    &self.card.slides[t.from],
                    &self.theme,
                    rect,
                    1.0 - progress,
                    scale,
                    None,
                    now,
                );
                render::render_slide(
                    ui,
                    &self.card.slides[t.to],
                    &self.theme,
                    rect,
                    progress,
                    scale,
                    Some(self.entered_at),
                    now,
                );
            }
            TransitionKind::SlideHorizontal => {
                let w = rect.width();
                let sign = match t.direction {
                    TransitionDirection::Forward => -1.0,
                    TransitionDirection::Backward => 1.0,
                };
                let from_offset = sign * progress * w;
                let to_offset = from_offset - sign * w;

                let from_rect = rect.translate(egui::vec2(from_offset, 0.0));
                let to_rect = rect.translate(egui::vec2(to_offset, 0.0));

                render::render_slide(
                    ui,
                    &self.card.slides[t.from],
                    &self.theme,
                    from_rect,
                    1.0,
                    scale,
                    None,
                    now,
                );
                render::render_slide(
                    ui,
                    &self.card.slides[t.to],
                    &self.theme,
                    to_rect,
                    1.0,
                    scale,
                    Some(self.entered_at),
                    now,
                );
            }
            TransitionKind::None => {
                render::render_slide(
                    ui,
                    &self.card.slides[t.to],
                    &self.theme,
                    rect,
                    1.0,
                    scale,
                    Some(self.entered_at),
                    now,
                );
            }
        }
        true
    }

    fn draw_chrome(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32, chrome: &ChromeLayout) {
        // Prev/next buttons: dimmed and non-interactive at the boundaries.
        self.draw_nav_button(ui, chrome.prev_button, "\u{2039}", self.prev_enabled, scale);
        self.draw_nav_button(ui, chrome.next_button, "\u{203A}", self.next_enabled, scale);

        // Indicator dots mirror the active slide.
        for (i, dot_rect) in chrome.indicators.iter().enumerate() {
            let active = i == self.controller.current();
            let (radius, color) = if active {
                (9.0 * scale, self.theme.accent)
            } else {
                (6.0 * scale, Theme::with_opacity(self.theme.foreground, 0.35))
            };
            ui.painter().circle_filled(dot_rect.center(), radius, color);
        }

        // Slide counter
        let counter_text = format!(
            "{} / {}",
            self.controller.current() + 1,
            self.slide_count()
        );
        let counter_color = Theme::with_opacity(self.theme.foreground, 0.3);
        let counter_galley = ui.painter().layout_no_wrap(
            counter_text,
            egui::FontId::monospace(14.0 * scale),
            counter_color,
        );
        let counter_pos = egui::pos2(
            rect.right() - counter_galley.rect.width() - 16.0 * scale,
            rect.bottom() - 30.0 * scale,
        );
        ui.painter()
            .galley(counter_pos, counter_galley, counter_color);

        if let (Some(music_rect), Some(music)) = (chrome.music_toggle, self.music.as_ref()) {
            self.draw_pill_button(ui, music_rect, music.state().label(), scale);
        }

        if let Some(replay_rect) = chrome.replay {
            self.draw_pill_button(ui, replay_rect, "\u{27F2} Replay", scale);
        }
    }

    fn draw_nav_button(&self, ui: &egui::Ui, rect: egui::Rect, glyph: &str, enabled: bool, scale: f32) {
        let opacity = if enabled { 1.0 } else { 0.35 };
        let fill = Theme::with_opacity(self.theme.chrome_background, 0.85 * opacity);
        let fg = Theme::with_opacity(self.theme.accent, opacity);
        ui.painter()
            .circle_filled(rect.center(), rect.width() / 2.0, fill);
        let galley = ui.painter().layout_no_wrap(
            glyph.to_string(),
            egui::FontId::proportional(40.0 * scale),
            fg,
        );
        let pos = rect.center() - galley.rect.size() / 2.0;
        ui.painter().galley(pos, galley, fg);
    }

    fn draw_pill_button(&self, ui: &egui::Ui, rect: egui::Rect, label: &str, scale: f32) {
        let fill = Theme::with_opacity(self.theme.chrome_background, 0.85);
        ui.painter().rect_filled(rect, rect.height() / 2.0, fill);
        let galley = ui.painter().layout_no_wrap(
            label.to_string(),
            egui::FontId::proportional(18.0 * scale),
            self.theme.accent,
        );
        let pos = rect.center() - galley.rect.size() / 2.0;
        ui.painter().galley(pos, galley, self.theme.accent);
    }
}

fn draw_toast(ui: &egui::Ui, toast: &Toast, theme: &Theme, rect: egui::Rect, scale: f32) {
    let opacity = toast.opacity();
    if opacity <= 0.0 {
        return;
    }
    let toast_color = Theme::with_opacity(theme.foreground, opacity * 0.9);
    let toast_bg = Theme::with_opacity(theme.chrome_background, opacity * 0.9);
    let galley = ui.painter().layout_no_wrap(
        toast.message.clone(),
        egui::FontId::proportional(20.0 * scale),
        toast_color,
    );
    let padding = 16.0 * scale;
    let toast_rect = egui::Rect::from_min_size(
        egui::pos2(
            rect.center().x - galley.rect.width() / 2.0 - padding,
            rect.bottom() - 110.0 * scale,
        ),
        egui::vec2(
            galley.rect.width() + padding * 2.0,
            galley.rect.height() + padding * 2.0,
        ),
    );
    ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
    let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
    ui.painter().galley(text_pos, galley, toast_color);
}

pub fn run(file: Option<PathBuf>, windowed: bool, start_slide: Option<usize>) -> anyhow::Result<()> {
    let (content, base_path) = match &file {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let base = path
                .parent()
                .unwrap_or(std::path::Path::new("."))
                .to_path_buf();
            (content, base)
        }
        None => (DEFAULT_CARD.to_string(), PathBuf::from(".")),
    };

    let mut card = card::parse(&content);
    if card.slides.is_empty() {
        match &file {
            Some(path) => anyhow::bail!("No slides found in {}", path.display()),
            None => anyhow::bail!("The built-in card is empty"),
        }
    }

    let config = Config::load_or_default();
    let config_names = config.names.clone().unwrap_or_default();
    let defaults = DisplayNames::default();
    let names = DisplayNames {
        recipient: card
            .meta
            .recipient
            .clone()
            .or(config_names.recipient)
            .unwrap_or(defaults.recipient),
        sender: card
            .meta
            .sender
            .clone()
            .or(config_names.sender)
            .unwrap_or(defaults.sender),
    };
    card::substitute_names(&mut card, &names);

    let config_defaults = config.defaults.unwrap_or_default();
    let theme_name = card
        .meta
        .theme
        .clone()
        .or(config_defaults.theme)
        .unwrap_or_else(|| "light".to_string());
    let theme = Theme::from_name(&theme_name);

    let transition_name = card
        .meta
        .transition
        .clone()
        .or(config_defaults.transition)
        .unwrap_or_else(|| "slide".to_string());
    let transition_kind = TransitionKind::from_name(&transition_name);

    let music = card
        .meta
        .music
        .clone()
        .map(|m| MusicPlayer::new(base_path.join(m)));

    let title = card
        .meta
        .title
        .clone()
        .unwrap_or_else(|| "Keepsake".to_string());
    let slide_count = card.slides.len();

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(&title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(&title)
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let initial_slide = start_slide
        .map(|s| s.saturating_sub(1))
        .unwrap_or(0)
        .min(slide_count.saturating_sub(1));

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            let mut app = CardApp::new(card, theme, transition_kind, music);
            if initial_slide > 0 {
                app.navigate(Instant::now(), |c, v| c.go_to(initial_slide, v));
                // No transition when opening mid-card.
                app.transition = None;
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(slide_count: usize) -> CardApp {
        let body = (0..slide_count)
            .map(|i| format!("# Slide {i}"))
            .collect::<Vec<_>>()
            .join("\n\n---\n\n");
        let card = card::parse(&body);
        assert_eq!(card.slides.len(), slide_count);
        CardApp::new(card, Theme::light(), TransitionKind::SlideHorizontal, None)
    }

    #[test]
    fn rapid_presses_mid_transition_all_navigate() {
        let mut app = test_app(5);
        let now = Instant::now();
        // All four presses land inside the first 500ms transition window.
        for _ in 0..4 {
            app.apply(Action::Next, now);
        }
        assert_eq!(app.controller.current(), 4);
        assert!(!app.next_enabled);
        let t = app.transition.as_ref().unwrap();
        assert_eq!((t.from, t.to), (3, 4));
    }

    #[test]
    fn interrupted_transition_continues_from_its_target() {
        let mut app = test_app(3);
        let now = Instant::now();
        app.apply(Action::Next, now);
        app.apply(Action::Prev, now);
        assert_eq!(app.controller.current(), 0);
        let t = app.transition.as_ref().unwrap();
        assert_eq!((t.from, t.to), (1, 0));
    }

    #[test]
    fn boundary_press_mid_transition_keeps_the_running_transition() {
        let mut app = test_app(2);
        let now = Instant::now();
        app.apply(Action::Next, now);
        app.apply(Action::Next, now);
        assert_eq!(app.controller.current(), 1);
        let t = app.transition.as_ref().unwrap();
        assert_eq!((t.from, t.to), (0, 1));
    }
}
