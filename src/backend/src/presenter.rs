use std::time::Duration;

use sdl2::keyboard::Keycode;

use crate::keypress::{KeyPressSurface, KeyPressSurfaces};
use crate::system::IoEvents;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blit {
    /// copy at the image's own size into the top-left corner
    Plain,
    /// scale the image to cover the whole window
    Stretched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Quit,
}

pub trait EventSource {
    /// Drains every event that is pending right now, oldest first. Never blocks.
    fn poll_events(&mut self) -> Vec<IoEvents>;
}

/// The window surface as seen by the presentation code.
pub trait Screen {
    type Image;

    fn fill(&mut self, r: u8, g: u8, b: u8) -> Result<(), String>;
    fn draw(&mut self, image: &Self::Image, blit: Blit) -> Result<(), String>;
    /// Publishes the back buffer to the display.
    fn present(&mut self) -> Result<(), String>;

    fn wait(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Decides which image is drawn each frame.
pub trait Scene {
    type Image;

    fn on_key(&mut self, key: Option<Keycode>);
    fn current(&self) -> &Self::Image;
}

/// A single image that ignores the keyboard.
pub struct Still<'a, T>(pub &'a T);

impl<T> Scene for Still<'_, T> {
    type Image = T;

    fn on_key(&mut self, _key: Option<Keycode>) {}

    fn current(&self) -> &T {
        self.0
    }
}

pub struct KeyPressScene<'a, T> {
    surfaces: &'a KeyPressSurfaces<T>,
    selected: KeyPressSurface,
}

impl<'a, T> KeyPressScene<'a, T> {
    pub fn new(surfaces: &'a KeyPressSurfaces<T>) -> Self {
        Self {
            surfaces,
            selected: KeyPressSurface::Default,
        }
    }

    pub fn selected(&self) -> KeyPressSurface {
        self.selected
    }
}

impl<T> Scene for KeyPressScene<'_, T> {
    type Image = T;

    fn on_key(&mut self, key: Option<Keycode>) {
        self.selected = KeyPressSurface::from_key(key);
        log::debug!("key {key:?} selects {:?}", self.selected);
    }

    fn current(&self) -> &T {
        &self.surfaces[self.selected]
    }
}

pub enum Frame<'a, I> {
    Fill(u8, u8, u8),
    Image(&'a I),
}

/// Draws a single frame, publishes it and keeps it up for `wait`.
/// The event queue is not looked at.
pub fn show_once<S: Screen>(
    screen: &mut S,
    frame: Frame<'_, S::Image>,
    wait: Duration,
) -> Result<(), String> {
    match frame {
        Frame::Fill(r, g, b) => screen.fill(r, g, b)?,
        Frame::Image(image) => screen.draw(image, Blit::Plain)?,
    }
    screen.present()?;
    screen.wait(wait);
    Ok(())
}

/// Drains events, then draws and publishes the scene's current image, until a
/// quit request shows up. The frame in which quit was drained is still drawn;
/// nothing after it is. Returns the number of frames drawn.
pub fn run_event_loop<S, C>(io: &mut S, scene: &mut C, blit: Blit) -> Result<usize, String>
where
    S: Screen + EventSource,
    C: Scene<Image = S::Image>,
{
    let mut state = LoopState::Running;
    let mut frames = 0;
    while state == LoopState::Running {
        for event in io.poll_events() {
            match event {
                IoEvents::Quit => state = LoopState::Quit,
                IoEvents::KeyDown(key) => scene.on_key(key),
            }
        }

        io.draw(scene.current(), blit)?;
        io.present()?;
        frames += 1;
    }
    log::info!("quit requested after {frames} frames");
    Ok(frames)
}
