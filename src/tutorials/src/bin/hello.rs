//! Opens a window, paints it white and keeps it up for two seconds.

use backend::config::{SCREEN_HEIGHT, SCREEN_WIDTH, SHOW_DELAY, WINDOW_TITLE};
use backend::lifecycle;
use backend::presenter::{show_once, Frame};
use backend::system::System;

fn main() {
    env_logger::init();

    lifecycle::run(
        || System::new(WINDOW_TITLE, SCREEN_WIDTH, SCREEN_HEIGHT),
        |_| Ok(()),
        |system, _| show_once(system, Frame::Fill(0xFF, 0xFF, 0xFF), SHOW_DELAY),
    );
}
