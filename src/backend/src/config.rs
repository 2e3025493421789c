use std::time::Duration;

// screen size
pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;

pub const WINDOW_TITLE: &str = "SDL Tutorial";

/// Directory, relative to the working directory, all tutorial bitmaps are read from.
pub const IMAGES_DIR: &str = "Images";

/// How long the one-shot programs keep their single frame on screen.
pub const SHOW_DELAY: Duration = Duration::from_millis(2000);
