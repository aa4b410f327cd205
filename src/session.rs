use macroquad::math::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::button::Button;
use crate::input::PointerEvent;
use crate::slot::Slot;
use crate::step::DraggableStep;

pub(crate) const WINDOW_WIDTH: f32 = 1000.0;
pub(crate) const WINDOW_HEIGHT: f32 = 600.0;

/// The correct sequence of baking steps the player must reconstruct.
pub(crate) const REFERENCE_ORDER: [&str; 4] = [
    "Pak alle tools & ingrediënten",
    "Vul de bakblik met bakmix",
    "Mix de Ingrediënten",
    "Bak de cake",
];

pub(crate) const TIME_LIMIT: f32 = 60.0;
const POINTS_PER_CORRECT: u32 = 10;

const COLUMN_TOP: f32 = 150.0;
const ROW_SPACING: f32 = 70.0;
const STEP_COLUMN_X: f32 = 100.0;
const SLOT_COLUMN_X: f32 = WINDOW_WIDTH - 400.0;

/// Full state of one round: shuffled cards, slots, clock, and score.
pub(crate) struct Session {
    pub(crate) steps: Vec<DraggableStep>,
    pub(crate) slots: Vec<Slot>,
    pub(crate) check_button: Button,
    pub(crate) elapsed: f32,
    pub(crate) solved: bool,
    pub(crate) score: u32,
    dragged: Option<usize>,
}

impl Session {
    /// Lay out the board with the reference steps in shuffled order.
    pub(crate) fn new(rng: &mut impl Rng) -> Self {
        let mut order: Vec<&'static str> = REFERENCE_ORDER.to_vec();
        order.shuffle(rng);

        let steps = order
            .into_iter()
            .enumerate()
            .map(|(row, text)| {
                DraggableStep::new(text, STEP_COLUMN_X, COLUMN_TOP + row as f32 * ROW_SPACING)
            })
            .collect();
        let slots = (1..=REFERENCE_ORDER.len())
            .map(|index| {
                Slot::new(
                    SLOT_COLUMN_X,
                    COLUMN_TOP + (index - 1) as f32 * ROW_SPACING,
                    index,
                )
            })
            .collect();

        Self {
            steps,
            slots,
            check_button: Button::new(WINDOW_WIDTH - 200.0, WINDOW_HEIGHT - 80.0, "Check!"),
            elapsed: 0.0,
            solved: false,
            score: 0,
            dragged: None,
        }
    }

    /// Advance the round clock. Crossing the time limit while unsolved
    /// triggers evaluation with no remaining time to award.
    pub(crate) fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        if !self.solved && self.elapsed >= TIME_LIMIT {
            self.evaluate();
        }
    }

    /// Apply one pointer event. Once solved, all events are inert.
    pub(crate) fn handle_event(&mut self, event: PointerEvent) {
        if self.solved {
            return;
        }
        match event {
            PointerEvent::Press(pointer) => self.press(pointer),
            PointerEvent::Move(pointer) => self.drag(pointer),
            PointerEvent::Release(_) => self.release(),
        }
    }

    pub(crate) fn remaining(&self) -> f32 {
        TIME_LIMIT - self.elapsed
    }

    pub(crate) fn all_correct(&self) -> bool {
        self.correct_count() == self.slots.len()
    }

    fn press(&mut self, pointer: Vec2) {
        for (i, step) in self.steps.iter_mut().enumerate() {
            if step.rect.contains(pointer) {
                step.begin_drag(pointer);
                self.dragged = Some(i);
                break;
            }
        }
        if self.check_button.clicked(pointer) {
            self.evaluate();
        }
    }

    fn drag(&mut self, pointer: Vec2) {
        if let Some(i) = self.dragged
            && self.steps[i].dragging
        {
            self.steps[i].drag_to(pointer);
        }
    }

    /// Drop the dragged card: slots are tried in index order and the first
    /// one that overlaps the card and is still empty receives it. Occupied
    /// slots are skipped; with no candidate the card stays where it was
    /// released.
    fn release(&mut self) {
        let Some(i) = self.dragged.take() else {
            return;
        };
        for slot in &mut self.slots {
            if slot.rect.overlaps(&self.steps[i].rect) && slot.filled_by.is_none() {
                slot.filled_by = Some(i);
                self.steps[i].rect.move_to(slot.rect.point());
                log::debug!("placed {:?} in slot {}", self.steps[i].text, slot.index);
                break;
            }
        }
        self.steps[i].end_drag();
    }

    /// Score the board. Runs exactly once per round; the button click and
    /// the timeout both end up here.
    fn evaluate(&mut self) {
        let remaining = self.remaining().max(0.0);
        for slot in &self.slots {
            if let Some(i) = slot.filled_by {
                let step = &mut self.steps[i];
                step.checked = true;
                step.correct = step.text == REFERENCE_ORDER[slot.index - 1];
            }
        }

        let correct = self.correct_count();
        self.score = correct as u32 * POINTS_PER_CORRECT;
        if correct == self.slots.len() {
            self.score += remaining as u32;
        }
        self.solved = true;
        self.dragged = None;
        log::info!(
            "round over: {correct}/{} correct, score {}",
            self.slots.len(),
            self.score
        );
    }

    fn correct_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.filled_by.is_some_and(|i| self.steps[i].correct))
            .count()
    }
}
