use macroquad::math::Rect;

use crate::step::{STEP_HEIGHT, STEP_WIDTH};

/// A fixed drop target, identified by its 1-based position in the sequence.
///
/// `filled_by` indexes into the session's step list. It is written when a
/// card is dropped here and never cleared afterwards, so a card dragged back
/// out still counts as this slot's occupant at evaluation time.
#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub(crate) rect: Rect,
    pub(crate) index: usize,
    pub(crate) filled_by: Option<usize>,
}

impl Slot {
    pub(crate) fn new(x: f32, y: f32, index: usize) -> Self {
        Self {
            rect: Rect::new(x, y, STEP_WIDTH, STEP_HEIGHT),
            index,
            filled_by: None,
        }
    }
}
