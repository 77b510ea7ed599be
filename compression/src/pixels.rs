use crate::colour::Rgb;
use crate::error::{CompressionError, CompressionResult};

const CHANNELS: usize = 4;

/// Row-major RGBA8 pixels with a top-left origin, the layout canvas
/// surfaces hand out and accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> CompressionResult<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(CompressionError::InvalidBufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let mut buffer = Self::new(width, height);
        for pixel in buffer.data.chunks_exact_mut(CHANNELS) {
            pixel.copy_from_slice(&color.to_rgba());
        }
        buffer
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline(always)]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = self.offset(x, y);
        let mut pixel = [0u8; 4];
        pixel.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        Some(pixel)
    }

    pub fn rgb(&self, x: u32, y: u32) -> Option<Rgb> {
        self.pixel(x, y).map(|[red, green, blue, _]| Rgb::new(red, green, blue))
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = self.offset(x, y);
        self.data[offset..offset + CHANNELS].copy_from_slice(&rgba);
    }

    /// Paints pixels `x_start..x_end` of row `y`. The span is clipped to the buffer.
    pub fn fill_row(&mut self, y: u32, x_start: u32, x_end: u32, rgba: [u8; 4]) {
        if y >= self.height {
            return;
        }
        let x_end = x_end.min(self.width);
        if x_start >= x_end {
            return;
        }
        let start = self.offset(x_start, y);
        let end = self.offset(x_end, y);
        for pixel in self.data[start..end].chunks_exact_mut(CHANNELS) {
            pixel.copy_from_slice(&rgba);
        }
    }
}
