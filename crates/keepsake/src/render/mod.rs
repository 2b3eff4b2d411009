pub mod animation;
pub mod transition;

use std::time::Instant;

use eframe::egui;

use crate::card::{BlockKind, Slide};
use crate::theme::Theme;
use animation::{BlockTransform, RESTART_DELAY};

/// Render a slide's blocks vertically centered in `rect`.
///
/// `entered_at` is the instant the slide was entered; blocks carrying an
/// animation tag play from their first keyframe starting [`RESTART_DELAY`]
/// after it, on every entry. `None` draws the slide fully settled (used for
/// the outgoing side of a transition).
///
/// Returns true while any block is still animating, so the caller keeps
/// repainting.
pub fn render_slide(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
    entered_at: Option<Instant>,
    now: Instant,
) -> bool {
    let content_width = rect.width() * 0.8;
    let mut animating = false;

    // Measure pass at resting size, so animated scaling never reflows the
    // other blocks.
    let mut slots: Vec<(f32, f32)> = Vec::with_capacity(slide.blocks.len()); // (font_size, height)
    let mut total_height = 0.0;
    for (i, block) in slide.blocks.iter().enumerate() {
        let font_size = block_font_size(block.kind, theme) * scale;
        let galley = ui.painter().layout(
            block.text.clone(),
            egui::FontId::proportional(font_size),
            egui::Color32::WHITE,
            content_width,
        );
        let height = galley.rect.height();
        if i > 0 {
            total_height += block_gap(slide.blocks[i - 1].kind) * scale;
        }
        total_height += height;
        slots.push((font_size, height));
    }

    let mut y = rect.center().y - total_height / 2.0;

    for (block, &(font_size, slot_height)) in slide.blocks.iter().zip(&slots) {
        let transform = match (block.animation, entered_at) {
            (Some(kind), Some(entered)) => {
                let since_entry = now.saturating_duration_since(entered);
                let elapsed = since_entry
                    .saturating_sub(RESTART_DELAY)
                    .as_secs_f32();
                let t = if since_entry < RESTART_DELAY {
                    0.0
                } else {
                    elapsed / animation::duration(kind)
                };
                if t < 1.0 {
                    animating = true;
                }
                animation::sample(kind, t)
            }
            _ => BlockTransform::IDENTITY,
        };

        let alpha = opacity * transform.opacity;
        if alpha > 0.004 {
            let color = match block.kind {
                BlockKind::Heading { .. } => Theme::with_opacity(theme.heading_color, alpha),
                BlockKind::Paragraph => Theme::with_opacity(theme.foreground, alpha),
            };
            let galley = ui.painter().layout(
                block.text.clone(),
                egui::FontId::proportional(font_size * transform.scale),
                color,
                content_width,
            );
            // Keep the block centered in its resting slot while it scales.
            let pos = egui::pos2(
                rect.center().x - galley.rect.width() / 2.0 + transform.offset.x * scale,
                y + (slot_height - galley.rect.height()) / 2.0 + transform.offset.y * scale,
            );
            ui.painter().galley(pos, galley, color);
        }

        y += slot_height + block_gap(block.kind) * scale;
    }

    animating
}

fn block_font_size(kind: BlockKind, theme: &Theme) -> f32 {
    match kind {
        BlockKind::Heading { level } => theme.heading_size(level),
        BlockKind::Paragraph => theme.body_size,
    }
}

fn block_gap(kind: BlockKind) -> f32 {
    match kind {
        BlockKind::Heading { .. } => 36.0,
        BlockKind::Paragraph => 24.0,
    }
}
