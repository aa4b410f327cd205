use macroquad::time::get_frame_time;
use macroquad::window::Conf;

use crate::assets::Assets;
use crate::input::InputState;
use crate::render::render;
use crate::session::{Session, WINDOW_HEIGHT, WINDOW_WIDTH};

pub fn window_conf() -> Conf {
    Conf {
        window_title: "Boolean Bakery".to_string(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

pub struct App {
    session: Session,
    input: InputState,
    assets: Assets,
}

impl App {
    pub fn new(assets: Assets) -> Self {
        Self {
            session: Session::new(&mut rand::rng()),
            input: InputState::new(),
            assets,
        }
    }

    /// Run one frame: advance the round clock, apply this frame's pointer
    /// events, then draw. The clock runs first so a check click arriving in
    /// the same frame the limit expires is ignored.
    pub fn tick(&mut self) {
        self.session.advance(get_frame_time());
        for event in self.input.poll() {
            self.session.handle_event(event);
        }
        render(&self.session, &self.assets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::session::REFERENCE_ORDER;

    // macroquad's prelude re-exports quad_rand under the name `rand`, so this
    // module sticks to narrow imports; the shuffle must draw from the rand
    // crate itself.
    #[test]
    fn thread_rng_deal_contains_every_step() {
        let session = Session::new(&mut rand::rng());
        let texts: Vec<&str> = session.steps.iter().map(|step| step.text).collect();
        for expected in REFERENCE_ORDER {
            assert!(texts.contains(&expected), "missing step: {expected}");
        }
    }
}
