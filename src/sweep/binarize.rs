//! Global thresholding of an 8-bit grayscale image.
use super::Polarity;
use crate::image::{BinaryMask, ImageU8, ImageView};
use image::{GrayImage, Luma};

/// Classify every pixel against `threshold`.
///
/// `BrightOnDark` keeps `intensity >= threshold`; `DarkOnBright` keeps the
/// exact complement, so the two masks at the same threshold never overlap and
/// together cover the image.
pub fn binarize(gray: ImageU8<'_>, threshold: f64, polarity: Polarity) -> BinaryMask {
    let (w, h) = (gray.width(), gray.height());
    let mut out = GrayImage::new(w as u32, h as u32);
    // Compare in integer space: the smallest intensity at or above `threshold`.
    let cut = threshold.ceil();
    for (y, row) in gray.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let bright = f64::from(v) >= cut;
            let fg = match polarity {
                Polarity::BrightOnDark => bright,
                Polarity::DarkOnBright => !bright,
            };
            if fg {
                out.put_pixel(x as u32, y as u32, Luma([crate::image::mask::FOREGROUND]));
            }
        }
    }
    BinaryMask::from_gray(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Vec<u8> {
        (0..16u8).map(|v| v * 16).collect()
    }

    fn view(data: &[u8]) -> ImageU8<'_> {
        ImageU8 {
            w: 4,
            h: 4,
            stride: 4,
            data,
        }
    }

    #[test]
    fn bright_keeps_pixels_at_or_above_threshold() {
        let data = ramp();
        let mask = binarize(view(&data), 128.0, Polarity::BrightOnDark);
        // 128..=240 -> 8 pixels
        assert_eq!(mask.foreground_count(), 8);
        assert!(mask.is_foreground(0, 2));
        assert!(!mask.is_foreground(3, 1));
    }

    #[test]
    fn fractional_threshold_rounds_up() {
        let data = ramp();
        let at = binarize(view(&data), 127.5, Polarity::BrightOnDark);
        let above = binarize(view(&data), 128.0, Polarity::BrightOnDark);
        assert_eq!(at, above);
    }

    #[test]
    fn polarities_are_complementary() {
        let data = ramp();
        let bright = binarize(view(&data), 100.0, Polarity::BrightOnDark);
        let dark = binarize(view(&data), 100.0, Polarity::DarkOnBright);
        for y in 0..4 {
            for x in 0..4 {
                assert_ne!(bright.is_foreground(x, y), dark.is_foreground(x, y));
            }
        }
    }

    #[test]
    fn threshold_above_range_is_empty() {
        let data = ramp();
        let mask = binarize(view(&data), 300.0, Polarity::BrightOnDark);
        assert_eq!(mask.foreground_count(), 0);
    }
}
