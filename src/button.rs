use macroquad::math::{Rect, Vec2};

pub(crate) const BUTTON_WIDTH: f32 = 120.0;
pub(crate) const BUTTON_HEIGHT: f32 = 50.0;

/// A static labelled click target.
#[derive(Debug, Clone)]
pub(crate) struct Button {
    pub(crate) rect: Rect,
    pub(crate) label: &'static str,
}

impl Button {
    pub(crate) fn new(x: f32, y: f32, label: &'static str) -> Self {
        Self {
            rect: Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
            label,
        }
    }

    pub(crate) fn clicked(&self, pointer: Vec2) -> bool {
        self.rect.contains(pointer)
    }
}
