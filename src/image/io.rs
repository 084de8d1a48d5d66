//! I/O helpers for the input image and the rendered output.
//!
//! - `decode_image`: sniff and decode JPEG/PNG/TIFF bytes, rejecting anything else.
//! - `DecodedImage::to_grayscale`: derive the single-channel image the sweep runs on.
//! - `save_gray_png` / `save_rgb_png`: write the previews and pages to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageU8;
use crate::error::{LensError, Result};
use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Formats accepted on input.
pub const ACCEPTED_FORMATS: [ImageFormat; 3] =
    [ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::Tiff];

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer from tightly packed rows.
    ///
    /// `data` must hold exactly `width * height` bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width.checked_mul(height).ok_or_else(|| {
            LensError::InvalidConfig(format!("image size {width}x{height} overflows"))
        })?;
        if data.len() != expected {
            return Err(LensError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::packed(width, height, data))
    }

    fn packed(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            stride: width,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }

    /// Copy into an `image` crate buffer for encoding.
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            image::Luma([self.data[y as usize * self.stride + x as usize]])
        })
    }
}

impl From<GrayImage> for GrayImageU8 {
    fn from(img: GrayImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        Self::packed(width, height, img.into_raw())
    }
}

/// A successfully decoded input image together with its container format.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub format: ImageFormat,
    pub image: DynamicImage,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// True when the image carries more than one color channel (alpha excluded).
    pub fn is_color(&self) -> bool {
        self.image.color().has_color()
    }

    /// Single-channel 8-bit version of the image.
    ///
    /// Gray inputs are used as-is (16-bit samples are scaled to 8 bits).
    /// Color inputs are converted with the BT.601 luma weights, using the
    /// 14-bit fixed-point form so results are exact and platform independent.
    pub fn to_grayscale(&self) -> GrayImageU8 {
        match &self.image {
            DynamicImage::ImageLuma8(gray) => GrayImageU8::from(gray.clone()),
            img if !img.color().has_color() => GrayImageU8::from(img.to_luma8()),
            img => {
                let rgb = img.to_rgb8();
                let (w, h) = rgb.dimensions();
                let data = rgb
                    .pixels()
                    .map(|p| luma_bt601(p[0], p[1], p[2]))
                    .collect();
                GrayImageU8::packed(w as usize, h as usize, data)
            }
        }
    }
}

#[inline]
fn luma_bt601(r: u8, g: u8, b: u8) -> u8 {
    // 0.299, 0.587, 0.114 scaled by 2^14; the weights sum to exactly 2^14.
    const SHIFT: u32 = 14;
    let acc = u32::from(r) * 4899 + u32::from(g) * 9617 + u32::from(b) * 1868;
    ((acc + (1 << (SHIFT - 1))) >> SHIFT) as u8
}

/// Decode raw bytes as one of the accepted raster formats.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage> {
    if bytes.is_empty() {
        return Err(LensError::Decode("input is empty".to_string()));
    }
    let format = image::guess_format(bytes)
        .map_err(|_| LensError::Decode("unrecognized image signature".to_string()))?;
    if !ACCEPTED_FORMATS.contains(&format) {
        return Err(LensError::UnsupportedFormat(format!("{format:?}")));
    }
    let image = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| LensError::Decode(e.to_string()))?;
    ensure_not_empty(image.width(), image.height())?;
    Ok(DecodedImage { format, image })
}

/// Reject images without pixels; nothing downstream accepts them.
pub fn ensure_not_empty(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(LensError::EmptyImage { width, height });
    }
    Ok(())
}

/// Read an image file from disk and decode it.
pub fn load_image(path: &Path) -> Result<DecodedImage> {
    let bytes = fs::read(path).map_err(|e| LensError::io(path, e))?;
    decode_image(&bytes)
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_gray_png(image: &GrayImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| LensError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Save an RGB buffer to a PNG.
pub fn save_rgb_png(image: &RgbImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| LensError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| LensError::Json(format!("{}: {e}", path.display())))?;
    fs::write(path, json).map_err(|e| LensError::io(path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| LensError::io(parent, e))?;
        }
    }
    Ok(())
}
