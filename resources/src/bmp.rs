use crate::reader::BinaryDataReader;
use std::io::{self, Write};
use std::path::Path;

pub const BMP_MAGIC: u16 = 0x4d42;
pub const FILE_HEADER_SIZE: u32 = 14;
pub const INFO_HEADER_SIZE: u32 = 40;

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

    pub fn read(reader: &mut BinaryDataReader) -> io::Result<Self> {
        Ok(Self {
            bf_type: reader.read_u16_le()?,
            bf_size: reader.read_u32_le()?,
            bf_reserved: reader.read_u32_le()?,
            bf_off_bits: reader.read_u32_le()?,
        })
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.bf_type.to_le_bytes())?;
        out.write_all(&self.bf_size.to_le_bytes())?;
        out.write_all(&self.bf_reserved.to_le_bytes())?;
        out.write_all(&self.bf_off_bits.to_le_bytes())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BmpIHEAD {
    pub bi_size: u32,
    pub bi_width: i32,
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
    /// Header for a 24-bit, uncompressed, top-down image.
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

    /// Reads the common prefix shared by every BITMAPINFOHEADER revision
    /// (40, 108 and 124 byte variants).
    pub fn read(reader: &mut BinaryDataReader) -> io::Result<Self> {
        let bi_size = reader.read_u32_le()?;
        if bi_size < INFO_HEADER_SIZE {
            return Err(invalid_data(format!(
                "unsupported info header size {bi_size}"
            )));
        }
        Ok(Self {
            bi_size,
            bi_width: reader.read_i32_le()?,
            bi_height: reader.read_i32_le()?,
            bi_planes: reader.read_u16_le()?,
            bi_bit_count: reader.read_u16_le()?,
            bi_compression: reader.read_u32_le()?,
            bi_size_image: reader.read_u32_le()?,
            bi_x_pels_per_meter: reader.read_i32_le()?,
            bi_y_pels_per_meter: reader.read_i32_le()?,
            bi_clr_used: reader.read_u32_le()?,
            bi_clr_important: reader.read_u32_le()?,
        })
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.bi_size.to_le_bytes())?;
        out.write_all(&self.bi_width.to_le_bytes())?;
        out.write_all(&self.bi_height.to_le_bytes())?;
        out.write_all(&self.bi_planes.to_le_bytes())?;
        out.write_all(&self.bi_bit_count.to_le_bytes())?;
        out.write_all(&self.bi_compression.to_le_bytes())?;
        out.write_all(&self.bi_size_image.to_le_bytes())?;
        out.write_all(&self.bi_x_pels_per_meter.to_le_bytes())?;
        out.write_all(&self.bi_y_pels_per_meter.to_le_bytes())?;
        out.write_all(&self.bi_clr_used.to_le_bytes())?;
        out.write_all(&self.bi_clr_important.to_le_bytes())
    }
}

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

/// Dimensions and layout read from a BMP header without touching the pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BmpInfo {
    pub width: u32,
    pub height: u32,
    pub bit_count: u16,
    pub top_down: bool,
}

pub fn probe(filename: &Path) -> io::Result<BmpInfo> {
    let bytes = std::fs::read(filename)?;
    parse_info(bytes)
}

pub fn parse_info(bytes: Vec<u8>) -> io::Result<BmpInfo> {
    let mut reader = BinaryDataReader::new(bytes);
    let file_header = BmpFHEAD::read(&mut reader)?;
    if file_header.bf_type != BMP_MAGIC {
        return Err(invalid_data(format!(
            "bad magic {:#06x}, not a BMP file",
            file_header.bf_type
        )));
    }
    let info_header = BmpIHEAD::read(&mut reader)?;
    if info_header.bi_width <= 0 || info_header.bi_height == 0 {
        return Err(invalid_data(format!(
            "invalid dimensions {} x {}",
            info_header.bi_width, info_header.bi_height
        )));
    }
    match info_header.bi_bit_count {
        1 | 4 | 8 | 16 | 24 | 32 => {}
        bits => return Err(invalid_data(format!("unsupported bit depth {bits}"))),
    }
    Ok(BmpInfo {
        width: info_header.bi_width as u32,
        height: info_header.bi_height.unsigned_abs(),
        bit_count: info_header.bi_bit_count,
        top_down: info_header.bi_height < 0,
    })
}

/// 24-bit image over a caller-owned pixel buffer in BGR order, rows top to bottom.
pub struct BMP<'a> {
    pub width: usize,
    pub height: usize,
    pub pixels: &'a [u8],
}

impl<'a> BMP<'a> {
    pub fn from_mem(width: usize, height: usize, pixels: &'a [u8]) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn to_file(&self, filename: &Path) -> io::Result<()> {
        let mut file = io::BufWriter::new(std::fs::File::create(filename)?);
        self.write_to(&mut file)?;
        file.flush()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "bitmap must be at least 1 x 1",
            ));
        }
        if self.pixels.len() != self.width * self.height * 3 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "pixel buffer holds {} bytes, {} x {} needs {}",
                    self.pixels.len(),
                    self.width,
                    self.height,
                    self.width * self.height * 3
                ),
            ));
        }
        let row_size = (3 * self.width + 3) & !3; // Row size must be padded to 4 bytes
        let pixel_array_size = row_size * self.height;
        BmpFHEAD::from(pixel_array_size).write_to(out)?;
        BmpIHEAD::from(self.width, self.height, pixel_array_size).write_to(out)?;

        let padding = vec![0u8; row_size - self.width * 3];
        for row in self.pixels.chunks_exact(self.width * 3) {
            out.write_all(row)?;
            out.write_all(&padding)?;
        }
        Ok(())
    }
}

/// BGR buffer of a single colour.
pub fn solid(width: usize, height: usize, color: Pixel) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for _ in 0..width * height {
        pixels.extend_from_slice(&[color.b, color.g, color.r]);
    }
    pixels
}

/// BGR checkerboard with square cells of `cell` pixels.
pub fn checkerboard(width: usize, height: usize, cell: usize, a: Pixel, b: Pixel) -> Vec<u8> {
    let cell = cell.max(1);
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let p = if (x / cell + y / cell) % 2 == 0 { a } else { b };
            pixels.extend_from_slice(&[p.b, p.g, p.r]);
        }
    }
    pixels
}

/// BGR buffer filled with `fill` and a `border` pixel wide frame of `frame`.
pub fn framed(width: usize, height: usize, border: usize, fill: Pixel, frame: Pixel) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let edge = x < border || y < border || x + border >= width || y + border >= height;
            let p = if edge { frame } else { fill };
            pixels.extend_from_slice(&[p.b, p.g, p.r]);
        }
    }
    pixels
}

fn invalid_data(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}
