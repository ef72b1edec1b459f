//! Shared drawing helpers for the menu screens and HUD

use macroquad::prelude::*;

use super::Rect;

/// Draw a rounded rectangle (simple approximation using overlapping rects)
pub fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    // Main body
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    // Corners (circles)
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}

/// Draw text horizontally centered on center_x, baseline at y
pub fn draw_text_centered(text: &str, center_x: f32, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, (center_x - dims.width * 0.5).round(), y.round(), font_size, color);
}

/// Flat rounded button, returns true when clicked this frame
pub fn text_button(rect: &Rect, label: &str, base: Color) -> bool {
    let (mx, my) = mouse_position();
    let hovered = rect.contains(mx, my);
    let bg = if hovered {
        Color::new(
            (base.r * 1.25).min(1.0),
            (base.g * 1.25).min(1.0),
            (base.b * 1.25).min(1.0),
            base.a,
        )
    } else {
        base
    };
    draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, 6.0, bg);
    draw_text_centered(label, rect.center_x(), rect.center_y() + 7.0, 22.0, WHITE);

    hovered && is_mouse_button_pressed(MouseButton::Left)
}
