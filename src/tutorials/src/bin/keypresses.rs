//! Arrow keys switch between four images, any other key goes back to the
//! default one.

use std::path::Path;

use backend::config::{IMAGES_DIR, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use backend::keypress::KeyPressSurfaces;
use backend::lifecycle;
use backend::media::load_surface;
use backend::presenter::{run_event_loop, Blit, KeyPressScene};
use backend::system::System;

fn main() {
    env_logger::init();

    lifecycle::run(
        || System::new(WINDOW_TITLE, SCREEN_WIDTH, SCREEN_HEIGHT),
        |_| KeyPressSurfaces::load(Path::new(IMAGES_DIR), load_surface),
        |system, surfaces| {
            let mut scene = KeyPressScene::new(surfaces);
            run_event_loop(system, &mut scene, Blit::Plain)?;
            log::info!("last image shown: {:?}", scene.selected());
            Ok(())
        },
    );
}
