#![allow(dead_code)]

use image::{DynamicImage, GrayImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Top-left corners of the three droplets drawn by [`three_squares_u8`].
pub const SQUARE_ORIGINS: [(usize, usize); 3] = [(10, 10), (45, 45), (80, 15)];
pub const SQUARE_SIDE: usize = 10;

/// 100×100 dark background (0) with three separated 10×10 squares at `value`.
pub fn three_squares_u8(value: u8) -> Vec<u8> {
    let (width, height) = (100usize, 100usize);
    let mut img = vec![0u8; width * height];
    for &(x0, y0) in &SQUARE_ORIGINS {
        for y in y0..y0 + SQUARE_SIDE {
            for x in x0..x0 + SQUARE_SIDE {
                img[y * width + x] = value;
            }
        }
    }
    img
}

pub fn encode_gray(width: u32, height: u32, data: Vec<u8>, format: ImageFormat) -> Vec<u8> {
    let gray = GrayImage::from_raw(width, height, data).expect("buffer matches dimensions");
    encode(DynamicImage::ImageLuma8(gray), format)
}

/// Encode the gray buffer as an RGB image with equal channels.
pub fn encode_as_rgb(width: u32, height: u32, data: &[u8], format: ImageFormat) -> Vec<u8> {
    let rgb = RgbImage::from_fn(width, height, |x, y| {
        let v = data[(y * width + x) as usize];
        Rgb([v, v, v])
    });
    encode(DynamicImage::ImageRgb8(rgb), format)
}

fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, format)
        .expect("encoding synthetic image");
    out.into_inner()
}
