use sdl2;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::surface::{Surface, SurfaceRef};

use crate::error::TutorialError;
use crate::presenter::{Blit, EventSource, Screen};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoEvents {
    Quit,
    // key code, None when SDL could not map the key
    KeyDown(Option<Keycode>),
}

/// Owns everything SDL hands out for the lifetime of a tutorial program.
///
/// Field order is drop order: the event queue and the window go away before
/// the video subsystem and the SDL context, which shuts SDL down.
pub struct System {
    pub w: u32,
    pub h: u32,
    pub event_pump: sdl2::EventPump,
    pub window: sdl2::video::Window,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl_context: sdl2::Sdl,
}

impl System {
    pub fn new(title: &str, w: u32, h: u32) -> Result<System, TutorialError> {
        let sdl_context = sdl2::init().map_err(init_error)?;
        let video_subsystem = sdl_context.video().map_err(init_error)?;

        // position is left undefined, the window is shown as soon as it is built
        let window = match video_subsystem.window(title, w, h).build() {
            Ok(w) => w,
            Err(e) => {
                return Err(TutorialError::SubsystemInit(format!(
                    "Window could not be created! SDL Error: {e}"
                )))
            }
        };

        let event_pump = sdl_context.event_pump().map_err(init_error)?;

        // the window surface is fetched per frame, but make sure it exists now
        window
            .surface(&event_pump)
            .map_err(|e| {
                TutorialError::SubsystemInit(format!(
                    "Window surface is not available! SDL Error: {e}"
                ))
            })?;

        log::info!("created {w}x{h} window \"{title}\"");

        Ok(System {
            w,
            h,
            event_pump,
            window,
            video_subsystem,
            sdl_context,
        })
    }

    /// Pixel layout of the window surface, the target format for optimized images.
    pub fn pixel_format(&self) -> Result<PixelFormatEnum, String> {
        Ok(self.window.surface(&self.event_pump)?.pixel_format_enum())
    }

    pub fn process_io_events(&mut self) -> Vec<IoEvents> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(IoEvents::Quit),
                Event::KeyDown { keycode, .. } => events.push(IoEvents::KeyDown(keycode)),
                _ => {}
            }
        }
        events
    }
}

impl Drop for System {
    fn drop(&mut self) {
        log::debug!("destroying window and shutting SDL down");
    }
}

impl EventSource for System {
    fn poll_events(&mut self) -> Vec<IoEvents> {
        self.process_io_events()
    }
}

impl Screen for System {
    type Image = Surface<'static>;

    fn fill(&mut self, r: u8, g: u8, b: u8) -> Result<(), String> {
        let mut screen = self.window.surface(&self.event_pump)?;
        fill_onto(&mut screen, r, g, b)
    }

    fn draw(&mut self, image: &Surface<'static>, blit: Blit) -> Result<(), String> {
        let mut screen = self.window.surface(&self.event_pump)?;
        blit_onto(image, &mut screen, blit)
    }

    fn present(&mut self) -> Result<(), String> {
        self.window.surface(&self.event_pump)?.update_window()
    }
}

/// Paints the whole of `dst` in one colour.
pub fn fill_onto(dst: &mut SurfaceRef, r: u8, g: u8, b: u8) -> Result<(), String> {
    dst.fill_rect(None, Color::RGB(r, g, b))
}

/// Copies `image` onto `dst`, either as is at the top-left corner or scaled
/// to cover all of `dst`.
pub fn blit_onto(image: &SurfaceRef, dst: &mut SurfaceRef, blit: Blit) -> Result<(), String> {
    match blit {
        Blit::Plain => {
            image.blit(None, dst, None)?;
        }
        Blit::Stretched => {
            let stretch_rect = Rect::new(0, 0, dst.width(), dst.height());
            image.blit_scaled(None, dst, stretch_rect)?;
        }
    }
    Ok(())
}

fn init_error(e: String) -> TutorialError {
    TutorialError::SubsystemInit(format!("SDL could not initialize! SDL Error: {e}"))
}
