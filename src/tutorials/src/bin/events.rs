//! Shows a bitmap until the window is closed.

use std::path::Path;

use backend::config::{IMAGES_DIR, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use backend::lifecycle;
use backend::media::load_surface;
use backend::presenter::{run_event_loop, Blit, Still};
use backend::system::System;

fn main() {
    env_logger::init();

    lifecycle::run(
        || System::new(WINDOW_TITLE, SCREEN_WIDTH, SCREEN_HEIGHT),
        |_| load_surface(&Path::new(IMAGES_DIR).join("x.bmp")),
        |system, x_out| {
            run_event_loop(system, &mut Still(x_out), Blit::Plain)?;
            Ok(())
        },
    );
}
