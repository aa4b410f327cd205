use macroquad::prelude::*;

use crate::assets::Assets;
use crate::button::Button;
use crate::session::{Session, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::slot::Slot;
use crate::step::DraggableStep;

const TITLE: &str = "Boolean Bakery";
const INSTRUCTIONS: &str = "Sleep de stappen in de juiste volgorde en klik op 'Check!'";
const SUCCESS_MESSAGE: &str = "Goed gedaan! Alle stappen zijn correct!";
const FAILURE_MESSAGE: &str = "Niet alle stappen zijn correct, probeer het opnieuw!";

const FONT_SIZE: u16 = 24;
const TITLE_FONT_SIZE: u16 = 36;

// Fills as RGB bytes: cards 242/159/93, slots 248/200/143,
// correct 135/211/124, incorrect 235/106/106.
const STEP_FILL: Color = Color::new(0.949, 0.6235, 0.3647, 1.0);
const SLOT_FILL: Color = Color::new(0.9725, 0.7843, 0.5608, 1.0);
const CORRECT_FILL: Color = Color::new(0.5294, 0.8275, 0.4863, 1.0);
const INCORRECT_FILL: Color = Color::new(0.9216, 0.4157, 0.4157, 1.0);

const CORNER_RADIUS: f32 = 10.0;
const TITLE_TOP: f32 = 50.0;
const INSTRUCTIONS_TOP: f32 = 100.0;
const MESSAGE_TOP: f32 = WINDOW_HEIGHT - 140.0;
const SCORE_TOP: f32 = WINDOW_HEIGHT - 100.0;
const TIMER_ICON_X: f32 = WINDOW_WIDTH - 100.0;
const TIMER_ICON_Y: f32 = 20.0;
const TIMER_ICON_SIZE: f32 = 50.0;
const TIMER_TEXT_X: f32 = WINDOW_WIDTH - 60.0;
const TIMER_TEXT_Y: f32 = 30.0;
const SLOT_LABEL_GAP: f32 = 20.0;
const GLYPH_GAP: f32 = 10.0;

fn text_params(font: &Font, size: u16, color: Color) -> TextParams<'_> {
    TextParams {
        font: Some(font),
        font_size: size,
        color,
        ..Default::default()
    }
}

fn draw_text_f(text: &str, x: f32, y: f32, font: &Font, size: u16, color: Color) {
    draw_text_ex(text, x, y, text_params(font, size, color));
}

fn measure_text_f(text: &str, font: &Font, size: u16) -> TextDimensions {
    measure_text(text, Some(font), size, 1.0)
}

/// Draw text centered on `center`, both axes.
fn draw_text_centered(text: &str, center: Vec2, font: &Font, size: u16, color: Color) {
    let dims = measure_text_f(text, font, size);
    let x = center.x - dims.width / 2.0;
    let y = center.y - dims.height / 2.0 + dims.offset_y;
    draw_text_f(text, x, y, font, size, color);
}

/// Draw text horizontally centered with its top edge at `top`.
fn draw_text_top_centered(text: &str, top: f32, font: &Font, size: u16, color: Color) {
    let dims = measure_text_f(text, font, size);
    let x = WINDOW_WIDTH / 2.0 - dims.width / 2.0;
    draw_text_f(text, x, top + dims.offset_y, font, size, color);
}

// macroquad has no rounded-rect primitive; compose one from two
// rectangles and four corner circles.
fn draw_rounded_rect(rect: Rect, radius: f32, color: Color) {
    draw_rectangle(rect.x + radius, rect.y, rect.w - 2.0 * radius, rect.h, color);
    draw_rectangle(rect.x, rect.y + radius, rect.w, rect.h - 2.0 * radius, color);
    draw_circle(rect.x + radius, rect.y + radius, radius, color);
    draw_circle(rect.right() - radius, rect.y + radius, radius, color);
    draw_circle(rect.x + radius, rect.bottom() - radius, radius, color);
    draw_circle(rect.right() - radius, rect.bottom() - radius, radius, color);
}

fn timer_label(remaining: f32) -> String {
    if remaining > 0.0 {
        format!("{}", remaining as u32)
    } else {
        "0".to_string()
    }
}

/// Paint one frame from the current session state. Mutates nothing.
pub(crate) fn render(session: &Session, assets: &Assets) {
    draw_texture_ex(
        assets.background(),
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(screen_width(), screen_height())),
            ..Default::default()
        },
    );

    let font = assets.font();
    draw_text_top_centered(TITLE, TITLE_TOP, font, TITLE_FONT_SIZE, WHITE);
    if !session.solved {
        draw_text_top_centered(INSTRUCTIONS, INSTRUCTIONS_TOP, font, FONT_SIZE, WHITE);
    }

    for step in &session.steps {
        draw_step(step, font);
    }
    for slot in &session.slots {
        draw_slot(slot, font);
    }
    if !session.solved {
        draw_check_button(&session.check_button, assets);
    }
    draw_timer(session.remaining(), assets);
    if session.solved {
        draw_results(session, font);
    }
}

fn draw_step(step: &DraggableStep, font: &Font) {
    let fill = if !step.checked {
        STEP_FILL
    } else if step.correct {
        CORRECT_FILL
    } else {
        INCORRECT_FILL
    };
    draw_rounded_rect(step.rect, CORNER_RADIUS, fill);
    draw_text_centered(step.text, step.rect.center(), font, FONT_SIZE, BLACK);

    if step.checked {
        let glyph = if step.correct { "✓" } else { "✗" };
        let dims = measure_text_f(glyph, font, FONT_SIZE);
        let y = step.rect.center().y - dims.height / 2.0 + dims.offset_y;
        draw_text_f(glyph, step.rect.right() + GLYPH_GAP, y, font, FONT_SIZE, WHITE);
    }
}

fn draw_slot(slot: &Slot, font: &Font) {
    draw_rounded_rect(slot.rect, CORNER_RADIUS, SLOT_FILL);
    let label_center = vec2(slot.rect.left() - SLOT_LABEL_GAP, slot.rect.center().y);
    draw_text_centered(&slot.index.to_string(), label_center, font, FONT_SIZE, BLACK);
}

fn draw_check_button(button: &Button, assets: &Assets) {
    draw_texture_ex(
        assets.button(),
        button.rect.x,
        button.rect.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(button.rect.size()),
            ..Default::default()
        },
    );
    draw_text_centered(button.label, button.rect.center(), assets.font(), FONT_SIZE, WHITE);
}

fn draw_timer(remaining: f32, assets: &Assets) {
    draw_texture_ex(
        assets.timer(),
        TIMER_ICON_X,
        TIMER_ICON_Y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(TIMER_ICON_SIZE, TIMER_ICON_SIZE)),
            ..Default::default()
        },
    );
    let label = timer_label(remaining);
    let dims = measure_text_f(&label, assets.font(), FONT_SIZE);
    draw_text_f(
        &label,
        TIMER_TEXT_X,
        TIMER_TEXT_Y + dims.offset_y,
        assets.font(),
        FONT_SIZE,
        BLACK,
    );
}

fn draw_results(session: &Session, font: &Font) {
    let score_line = format!("Score: {}", session.score);
    draw_text_top_centered(&score_line, SCORE_TOP, font, FONT_SIZE, BLACK);

    let message = if session.all_correct() {
        SUCCESS_MESSAGE
    } else {
        FAILURE_MESSAGE
    };
    draw_text_top_centered(message, MESSAGE_TOP, font, FONT_SIZE, BLACK);
}

#[cfg(test)]
mod tests {
    use super::timer_label;

    #[test]
    fn timer_label_floors_remaining_seconds() {
        assert_eq!(timer_label(59.9), "59");
        assert_eq!(timer_label(1.0), "1");
        assert_eq!(timer_label(0.4), "0");
    }

    #[test]
    fn timer_label_clamps_at_zero() {
        assert_eq!(timer_label(0.0), "0");
        assert_eq!(timer_label(-12.5), "0");
    }
}
