use std::ops::Index;
use std::path::Path;

use sdl2::keyboard::Keycode;

use crate::error::TutorialError;
use crate::media;

#[cfg(test)]
mod tests;

/// Which of the key-press images is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPressSurface {
    Default,
    Up,
    Down,
    Left,
    Right,
}

impl KeyPressSurface {
    pub const TOTAL: usize = 5;

    pub const ALL: [KeyPressSurface; KeyPressSurface::TOTAL] = [
        KeyPressSurface::Default,
        KeyPressSurface::Up,
        KeyPressSurface::Down,
        KeyPressSurface::Left,
        KeyPressSurface::Right,
    ];

    /// Arrow keys pick their own image, anything else falls back to the default one.
    pub fn from_key(key: Option<Keycode>) -> Self {
        match key {
            Some(Keycode::Up) => KeyPressSurface::Up,
            Some(Keycode::Down) => KeyPressSurface::Down,
            Some(Keycode::Left) => KeyPressSurface::Left,
            Some(Keycode::Right) => KeyPressSurface::Right,
            _ => KeyPressSurface::Default,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            KeyPressSurface::Default => "press.bmp",
            KeyPressSurface::Up => "up.bmp",
            KeyPressSurface::Down => "down.bmp",
            KeyPressSurface::Left => "left.bmp",
            KeyPressSurface::Right => "right.bmp",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// One loaded image per [`KeyPressSurface`].
pub struct KeyPressSurfaces<T> {
    surfaces: [T; KeyPressSurface::TOTAL],
}

impl<T> KeyPressSurfaces<T> {
    pub fn new(surfaces: [T; KeyPressSurface::TOTAL]) -> Self {
        Self { surfaces }
    }

    /// Loads all five images from `dir`, trying every file even after a failure.
    pub fn load<F>(dir: &Path, loader: F) -> Result<Self, TutorialError>
    where
        F: FnMut(&Path) -> Result<T, TutorialError>,
    {
        let paths = KeyPressSurface::ALL.map(|s| dir.join(s.file_name()));
        let loaded = media::load_all(&paths, loader)?;
        match <[T; KeyPressSurface::TOTAL]>::try_from(loaded) {
            Ok(surfaces) => Ok(Self::new(surfaces)),
            Err(v) => Err(TutorialError::ResourceLoad(format!(
                "expected {} key press images, got {}",
                KeyPressSurface::TOTAL,
                v.len()
            ))),
        }
    }
}

impl<T> Index<KeyPressSurface> for KeyPressSurfaces<T> {
    type Output = T;

    fn index(&self, s: KeyPressSurface) -> &T {
        &self.surfaces[s.slot()]
    }
}
