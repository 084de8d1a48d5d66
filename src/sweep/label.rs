//! Connected-component labeling of binary masks.
use super::Connectivity;
use crate::image::mask::BACKGROUND;
use crate::image::BinaryMask;
use image::{ImageBuffer, Luma};
use imageproc::region_labelling::connected_components;

/// Per-pixel component labels; 0 is background, components are `1..=count`.
pub struct LabelMap {
    pub labels: ImageBuffer<Luma<u32>, Vec<u32>>,
    pub count: usize,
}

impl LabelMap {
    #[inline]
    pub fn label_at(&self, x: u32, y: u32) -> u32 {
        self.labels.get_pixel(x, y)[0]
    }

    /// Pixel area of each label, indexed by label (entry 0 is the background).
    pub fn areas(&self) -> Vec<usize> {
        let mut areas = vec![0usize; self.count + 1];
        for p in self.labels.pixels() {
            areas[p[0] as usize] += 1;
        }
        areas
    }
}

pub fn label_components(mask: &BinaryMask, connectivity: Connectivity) -> LabelMap {
    let labels = connected_components(mask.as_gray(), connectivity.into(), Luma([BACKGROUND]));
    // imageproc assigns consecutive labels starting at 1.
    let count = labels.pixels().map(|p| p[0]).max().unwrap_or(0) as usize;
    LabelMap { labels, count }
}

/// Number of connected foreground objects in `mask`.
pub fn count_objects(mask: &BinaryMask, connectivity: Connectivity) -> usize {
    label_components(mask, connectivity).count
}
