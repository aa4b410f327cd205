use macroquad::math::{Rect, Vec2};

pub(crate) const STEP_WIDTH: f32 = 300.0;
pub(crate) const STEP_HEIGHT: f32 = 50.0;

/// One shuffled instruction card the player drags around the screen.
#[derive(Debug, Clone)]
pub(crate) struct DraggableStep {
    pub(crate) text: &'static str,
    pub(crate) rect: Rect,
    pub(crate) dragging: bool,
    pub(crate) drag_offset: Vec2,
    pub(crate) checked: bool,
    pub(crate) correct: bool,
}

impl DraggableStep {
    pub(crate) fn new(text: &'static str, x: f32, y: f32) -> Self {
        Self {
            text,
            rect: Rect::new(x, y, STEP_WIDTH, STEP_HEIGHT),
            dragging: false,
            drag_offset: Vec2::ZERO,
            checked: false,
            correct: false,
        }
    }

    /// Start dragging, remembering where inside the card the pointer grabbed it.
    pub(crate) fn begin_drag(&mut self, pointer: Vec2) {
        self.dragging = true;
        self.drag_offset = self.rect.point() - pointer;
    }

    /// Move the card so the pointer stays anchored to its grab point.
    pub(crate) fn drag_to(&mut self, pointer: Vec2) {
        self.rect.move_to(pointer + self.drag_offset);
    }

    pub(crate) fn end_drag(&mut self) {
        self.dragging = false;
    }
}
