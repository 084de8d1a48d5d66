//! Binary foreground/background mask stored as a 0/255 gray buffer.
//!
//! The 0/255 encoding lets the mask go straight into `imageproc` routines and
//! be rendered as a grayscale thumbnail without conversion.
use super::traits::ImageView;
use image::{GrayImage, Luma};

pub const FOREGROUND: u8 = 255;
pub const BACKGROUND: u8 = 0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryMask {
    pixels: GrayImage,
}

impl BinaryMask {
    /// All-background mask of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: GrayImage::new(width, height),
        }
    }

    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        Self {
            pixels: GrayImage::from_fn(width, height, |x, y| Luma([encode(f(x, y))])),
        }
    }

    /// Wrap a gray buffer, mapping every non-zero pixel to foreground.
    pub fn from_gray(mut pixels: GrayImage) -> Self {
        for p in pixels.pixels_mut() {
            p[0] = encode(p[0] != BACKGROUND);
        }
        Self { pixels }
    }

    #[inline]
    pub fn is_foreground(&self, x: u32, y: u32) -> bool {
        self.pixels.get_pixel(x, y)[0] != BACKGROUND
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, foreground: bool) {
        self.pixels.put_pixel(x, y, Luma([encode(foreground)]));
    }

    pub fn foreground_count(&self) -> usize {
        self.pixels
            .as_raw()
            .iter()
            .filter(|&&v| v != BACKGROUND)
            .count()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn as_gray(&self) -> &GrayImage {
        &self.pixels
    }
}

#[inline]
fn encode(foreground: bool) -> u8 {
    if foreground {
        FOREGROUND
    } else {
        BACKGROUND
    }
}

impl ImageView for BinaryMask {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.pixels.width() as usize
    }
    #[inline]
    fn height(&self) -> usize {
        self.pixels.height() as usize
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let w = self.width();
        let start = y * w;
        &self.pixels.as_raw()[start..start + w]
    }
}
