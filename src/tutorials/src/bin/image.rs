//! Blits a bitmap onto the window surface and keeps it up for two seconds.

use std::path::Path;

use backend::config::{IMAGES_DIR, SCREEN_HEIGHT, SCREEN_WIDTH, SHOW_DELAY, WINDOW_TITLE};
use backend::lifecycle;
use backend::media::load_surface;
use backend::presenter::{show_once, Frame};
use backend::system::System;

fn main() {
    env_logger::init();

    lifecycle::run(
        || System::new(WINDOW_TITLE, SCREEN_WIDTH, SCREEN_HEIGHT),
        |_| load_surface(&Path::new(IMAGES_DIR).join("hello_world.bmp")),
        |system, hello_world| show_once(system, Frame::Image(hello_world), SHOW_DELAY),
    );
}
