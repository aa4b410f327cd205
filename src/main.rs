use macroquad::window::next_frame;

use boolean_bakery::app::{App, window_conf};
use boolean_bakery::assets::Assets;

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let mut app = App::new(Assets::load().await);
    loop {
        app.tick();
        next_frame().await;
    }
}
