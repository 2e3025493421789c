//! Converts a small bitmap to the window's pixel format once, then draws it
//! scaled to fill the whole window every frame until the window is closed.

use std::path::Path;

use backend::config::{IMAGES_DIR, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use backend::lifecycle;
use backend::media::load_optimized_surface;
use backend::presenter::{run_event_loop, Blit, Still};
use backend::system::System;
use backend::TutorialError;

fn main() {
    env_logger::init();

    lifecycle::run(
        || System::new(WINDOW_TITLE, SCREEN_WIDTH, SCREEN_HEIGHT),
        |system| {
            let format = system.pixel_format().map_err(TutorialError::ResourceLoad)?;
            let path = Path::new(IMAGES_DIR).join("stretch.bmp");
            load_optimized_surface(&path, format)
        },
        |system, stretched| {
            run_event_loop(system, &mut Still(stretched), Blit::Stretched)?;
            Ok(())
        },
    );
}
