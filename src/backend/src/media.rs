use std::path::Path;

use sdl2::pixels::PixelFormatEnum;
use sdl2::surface::Surface;

use crate::error::TutorialError;


/// Decodes a BMP file into a surface owned by the caller.
pub fn load_surface(path: &Path) -> Result<Surface<'static>, TutorialError> {
    let surface = Surface::load_bmp(path).map_err(|e| {
        TutorialError::ResourceLoad(format!(
            "Unable to load image {}! SDL Error: {e}",
            path.display()
        ))
    })?;
    log::debug!(
        "loaded {:?}: {}x{} {:?}",
        path,
        surface.width(),
        surface.height(),
        surface.pixel_format_enum()
    );
    Ok(surface)
}

/// Decodes a BMP file and converts it to `format`, so blitting it onto a
/// surface of that format does not convert pixels on every frame.
///
/// The decoded surface is released as soon as the converted copy exists.
pub fn load_optimized_surface(
    path: &Path,
    format: PixelFormatEnum,
) -> Result<Surface<'static>, TutorialError> {
    let loaded = load_surface(path)?;
    optimize(&loaded, format).map_err(|e| {
        TutorialError::ResourceLoad(format!(
            "Unable to optimize image {}! SDL Error: {e}",
            path.display()
        ))
    })
}

pub fn optimize(surface: &Surface, format: PixelFormatEnum) -> Result<Surface<'static>, String> {
    log::debug!("converting {:?} surface to {format:?}", surface.pixel_format_enum());
    surface.convert_format(format)
}

/// Loads every path with `loader`, keeping going after a failure so that all
/// broken files get reported at once.
///
/// On failure whatever did load is dropped before the error is returned.
pub fn load_all<T, P, F>(paths: &[P], mut loader: F) -> Result<Vec<T>, TutorialError>
where
    P: AsRef<Path>,
    F: FnMut(&Path) -> Result<T, TutorialError>,
{
    let mut loaded = Vec::with_capacity(paths.len());
    let mut failures = Vec::new();
    for path in paths {
        let path = path.as_ref();
        match loader(path) {
            Ok(item) => loaded.push(item),
            Err(e) => {
                log::error!("{}", e.message());
                failures.push(path.display().to_string());
            }
        }
    }

    if failures.is_empty() {
        Ok(loaded)
    } else {
        Err(TutorialError::ResourceLoad(format!(
            "failed to load {} of {} images: {}",
            failures.len(),
            paths.len(),
            failures.join(", ")
        )))
    }
}
