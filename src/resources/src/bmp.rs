use std::io::{self, Write};
use std::path::Path;

const BMP_MAGIC: u16 = 0x4d42; // "BM"
const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BmpFHEAD {
    pub bf_type: u16,
    pub bf_size: u32,
    pub bf_reserved: u32,
    pub bf_off_bits: u32,
}

impl BmpFHEAD {
    pub fn from(pixel_array_size: usize) -> Self {
        Self {
            bf_type: BMP_MAGIC,
            bf_size: FILE_HEADER_SIZE + INFO_HEADER_SIZE + pixel_array_size as u32,
            bf_reserved: 0,
            bf_off_bits: FILE_HEADER_SIZE + INFO_HEADER_SIZE,
        }
    }

    fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.bf_type.to_le_bytes())?;
        w.write_all(&self.bf_size.to_le_bytes())?;
        w.write_all(&self.bf_reserved.to_le_bytes())?;
        w.write_all(&self.bf_off_bits.to_le_bytes())
    }

}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BmpIHEAD {
    pub bi_size: u32,
    pub bi_width: i32,
    /// negative for top-down pixel rows
    pub bi_height: i32,
    pub bi_planes: u16,
    pub bi_bit_count: u16,
    pub bi_compression: u32,
    pub bi_size_image: u32,
    pub bi_x_pels_per_meter: i32,
    pub bi_y_pels_per_meter: i32,
    pub bi_clr_used: u32,
    pub bi_clr_important: u32,
}

impl BmpIHEAD {
    pub fn from(width: usize, height: usize, pixel_array_size: usize) -> Self {
        Self {
            bi_size: INFO_HEADER_SIZE,
            bi_width: width as i32,
            bi_height: -(height as i32),
            bi_planes: 1,
            bi_bit_count: 24,
            bi_compression: 0,
            bi_size_image: pixel_array_size as u32,
            bi_x_pels_per_meter: 2835,
            bi_y_pels_per_meter: 2835,
            bi_clr_used: 0,
            bi_clr_important: 0,
        }
    }

    fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.bi_size.to_le_bytes())?;
        w.write_all(&self.bi_width.to_le_bytes())?;
        w.write_all(&self.bi_height.to_le_bytes())?;
        w.write_all(&self.bi_planes.to_le_bytes())?;
        w.write_all(&self.bi_bit_count.to_le_bytes())?;
        w.write_all(&self.bi_compression.to_le_bytes())?;
        w.write_all(&self.bi_size_image.to_le_bytes())?;
        w.write_all(&self.bi_x_pels_per_meter.to_le_bytes())?;
        w.write_all(&self.bi_y_pels_per_meter.to_le_bytes())?;
        w.write_all(&self.bi_clr_used.to_le_bytes())?;
        w.write_all(&self.bi_clr_important.to_le_bytes())
    }

}

/// 24-bit image, pixels stored as tightly packed B, G, R triples, top row first.
pub struct BMP<'a> {
    pub width: usize,
    pub height: usize,
    pub pixels: &'a [u8],
}

impl<'a> BMP<'a> {
    pub fn from_mem(width: usize, height: usize, pixels: &'a [u8]) -> io::Result<Self> {
        if width == 0 || height == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty images can't be stored as BMP",
            ));
        }
        if pixels.len() != width * height * 3 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "{width}x{height} image needs {} bytes, got {}",
                    width * height * 3,
                    pixels.len()
                ),
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let row_size = (3 * self.width + 3) & !3; // Row size must be padded to 4 bytes
        let pixel_array_size = row_size * self.height;
        BmpFHEAD::from(pixel_array_size).write_to(w)?;
        BmpIHEAD::from(self.width, self.height, pixel_array_size).write_to(w)?;

        let padding = vec![0u8; row_size - self.width * 3];
        for row in self.pixels.chunks_exact(self.width * 3) {
            w.write_all(row)?;
            w.write_all(&padding)?;
        }
        Ok(())
    }

    pub fn to_file(&self, filename: &Path) -> io::Result<()> {
        let mut file = io::BufWriter::new(std::fs::File::create(filename)?);
        self.write_to(&mut file)?;
        file.flush()
    }
}
