use macroquad::prelude::*;

/// A primitive pointer event with the position it happened at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PointerEvent {
    Press(Vec2),
    Move(Vec2),
    Release(Vec2),
}

/// Turns macroquad's per-frame mouse state into discrete pointer events.
pub(crate) struct InputState {
    last_pointer: Option<Vec2>,
}

impl InputState {
    pub(crate) fn new() -> Self {
        Self { last_pointer: None }
    }

    /// Poll the mouse for this frame's events, in press/move/release order.
    ///
    /// A `Move` is only emitted when the pointer actually changed position
    /// since the previous frame.
    pub(crate) fn poll(&mut self) -> Vec<PointerEvent> {
        let (x, y) = mouse_position();
        let pointer = Vec2::new(x, y);

        let mut events = Vec::new();
        if is_mouse_button_pressed(MouseButton::Left) {
            events.push(PointerEvent::Press(pointer));
        }
        if self.last_pointer.is_some_and(|last| last != pointer) {
            events.push(PointerEvent::Move(pointer));
        }
        if is_mouse_button_released(MouseButton::Left) {
            events.push(PointerEvent::Release(pointer));
        }
        self.last_pointer = Some(pointer);
        events
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
