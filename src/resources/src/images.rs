use std::io;
use std::path::Path;

use crate::bmp;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

const WHITE: Pixel = Pixel::rgb(0xff, 0xff, 0xff);
const BLACK: Pixel = Pixel::rgb(0x00, 0x00, 0x00);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

/// What gets painted on top of the background colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mark {
    None,
    Band,
    Cross,
    Arrow(Arrow),
    Checkers(usize),
}

/// A bitmap one of the tutorial programs reads from the images directory.
#[derive(Debug, Copy, Clone)]
pub struct TutorialImage {
    pub file_name: &'static str,
    pub width: usize,
    pub height: usize,
    pub background: Pixel,
    pub mark: Mark,
}

const BLUE: Pixel = Pixel::rgb(0x30, 0x60, 0xc0);
const GREY: Pixel = Pixel::rgb(0x80, 0x80, 0x80);
const RED: Pixel = Pixel::rgb(0xc0, 0x30, 0x30);
const GREEN: Pixel = Pixel::rgb(0x30, 0xa0, 0x30);
const YELLOW: Pixel = Pixel::rgb(0xd0, 0xb0, 0x20);
const PURPLE: Pixel = Pixel::rgb(0x80, 0x30, 0xb0);
const TEAL: Pixel = Pixel::rgb(0x20, 0xa0, 0xa0);

pub const TUTORIAL_IMAGES: [TutorialImage; 8] = [
    full("hello_world.bmp", BLUE, Mark::Band),
    full("x.bmp", WHITE, Mark::Cross),
    full("press.bmp", GREY, Mark::None),
    full("up.bmp", RED, Mark::Arrow(Arrow::Up)),
    full("down.bmp", GREEN, Mark::Arrow(Arrow::Down)),
    full("left.bmp", YELLOW, Mark::Arrow(Arrow::Left)),
    full("right.bmp", PURPLE, Mark::Arrow(Arrow::Right)),
    // smaller than the window so stretching is visible
    image("stretch.bmp", 160, 120, TEAL, Mark::Checkers(20)),
];

// window sized
const fn full(file_name: &'static str, background: Pixel, mark: Mark) -> TutorialImage {
    image(file_name, 640, 480, background, mark)
}

const fn image(
    file_name: &'static str,
    width: usize,
    height: usize,
    background: Pixel,
    mark: Mark,
) -> TutorialImage {
    TutorialImage {
        file_name,
        width,
        height,
        background,
        mark,
    }
}

/// RGB pixels in memory, rows top to bottom.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pixels: Vec<Pixel>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width * height],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Pixel {
        self.pixels[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, p: Pixel) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = p;
        }
    }

    fn fill_rect(&mut self, x0: usize, y0: usize, w: usize, h: usize, p: Pixel) {
        for y in y0..(y0 + h).min(self.height) {
            for x in x0..(x0 + w).min(self.width) {
                self.set(x, y, p);
            }
        }
    }

    fn paint(&mut self, mark: Mark) {
        let (w, h) = (self.width, self.height);
        match mark {
            Mark::None => {}
            Mark::Band => self.fill_rect(0, h * 2 / 5, w, h / 5, WHITE),
            Mark::Cross => {
                let thickness = (w.min(h) / 40).max(1);
                for y in 0..h {
                    let x = y * w / h;
                    self.fill_rect(x.saturating_sub(thickness / 2), y, thickness, 1, BLACK);
                    let mirrored = (w - 1 - x).saturating_sub(thickness / 2);
                    self.fill_rect(mirrored, y, thickness, 1, BLACK);
                }
            }
            Mark::Arrow(dir) => self.paint_arrow(dir),
            Mark::Checkers(cell) => {
                let cell = cell.max(1);
                for y in 0..h {
                    for x in 0..w {
                        if (x / cell + y / cell) % 2 == 1 {
                            self.set(x, y, WHITE);
                        }
                    }
                }
            }
        }
    }

    // filled triangle in the middle of the canvas, apex towards `dir`
    fn paint_arrow(&mut self, dir: Arrow) {
        let size = self.width.min(self.height) / 2;
        let cx = self.width / 2;
        let cy = self.height / 2;
        let half = size / 2;
        for i in 0..size {
            // i runs from the apex to the base, the span grows along the way
            let span = i * half / size.max(1);
            for j in 0..=2 * span {
                let offset = j as isize - span as isize;
                let (x, y) = match dir {
                    Arrow::Up => (cx as isize + offset, (cy - half + i) as isize),
                    Arrow::Down => (cx as isize + offset, (cy + half - i) as isize),
                    Arrow::Left => ((cx - half + i) as isize, cy as isize + offset),
                    Arrow::Right => ((cx + half - i) as isize, cy as isize + offset),
                };
                if x >= 0 && y >= 0 {
                    self.set(x as usize, y as usize, WHITE);
                }
            }
        }
    }

    /// Pixel bytes in the B, G, R order BMP files use.
    pub fn to_bgr(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| [p.b, p.g, p.r]).collect()
    }

    pub fn to_file(&self, filename: &Path) -> io::Result<()> {
        let pixels = self.to_bgr();
        bmp::BMP::from_mem(self.width, self.height, &pixels)?.to_file(filename)
    }
}

impl TutorialImage {
    pub fn render(&self) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height, self.background);
        canvas.paint(self.mark);
        canvas
    }
}

/// Writes every tutorial image into `dir`, creating it if needed.
pub fn generate_all(dir: &Path) -> io::Result<Vec<std::path::PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(TUTORIAL_IMAGES.len());
    for img in TUTORIAL_IMAGES.iter() {
        let dest = dir.join(img.file_name);
        img.render().to_file(&dest)?;
        log::info!("wrote {dest:?} ({} x {})", img.width, img.height);
        written.push(dest);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bgr_bytes_swap_red_and_blue() {
        let canvas = Canvas::new(2, 1, Pixel::rgb(1, 2, 3));
        assert_eq!(canvas.to_bgr(), vec![3, 2, 1, 3, 2, 1]);
    }

    #[test]
    fn arrows_point_the_right_way() {
        let up = Mark::Arrow(Arrow::Up);
        let up = image("up.bmp", 64, 64, BLACK, up).render();
        // apex is a single pixel at the top, the base is wide at the bottom
        assert_eq!(up.get(32, 16), WHITE);
        assert_eq!(up.get(31, 16), BLACK);
        assert_eq!(up.get(24, 47), WHITE);

        let left = Mark::Arrow(Arrow::Left);
        let left = image("left.bmp", 64, 64, BLACK, left).render();
        assert_eq!(left.get(16, 32), WHITE);
        assert_eq!(left.get(16, 31), BLACK);
        assert_eq!(left.get(47, 24), WHITE);
    }

    #[test]
    fn every_key_press_image_is_distinct() {
        let names = ["press.bmp", "up.bmp", "down.bmp", "left.bmp", "right.bmp"];
        let rendered: Vec<Vec<u8>> = TUTORIAL_IMAGES
            .iter()
            .filter(|img| names.contains(&img.file_name))
            .map(|img| img.render().to_bgr())
            .collect();

        assert_eq!(rendered.len(), names.len());
        for (i, a) in rendered.iter().enumerate() {
            for b in rendered.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn generates_every_tutorial_image() {
        let dir_name = format!("sdlimg-test-{}", std::process::id());
        let dir = std::env::temp_dir().join(dir_name);

        let written = generate_all(&dir).unwrap();

        assert_eq!(written.len(), TUTORIAL_IMAGES.len());
        // 160 pixels * 3 bytes per row needs no padding
        let stretch = std::fs::metadata(dir.join("stretch.bmp")).unwrap();
        assert_eq!(stretch.len(), 54 + 160 * 3 * 120);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
