//! Mask cleanup: small-region suppression and morphological closing.
use super::label::label_components;
use super::Connectivity;
use crate::image::BinaryMask;
use imageproc::morphology::{grayscale_close, Mask};

/// Drop foreground regions with fewer than `min_area` pixels.
///
/// Regions at or above `min_area` are always kept, however large.
pub fn remove_small_objects(
    mask: &BinaryMask,
    min_area: usize,
    connectivity: Connectivity,
) -> BinaryMask {
    if min_area <= 1 {
        return mask.clone();
    }
    let map = label_components(mask, connectivity);
    let areas = map.areas();
    let (w, h) = mask.dimensions();
    BinaryMask::from_fn(w, h, |x, y| {
        let label = map.label_at(x, y) as usize;
        label != 0 && areas[label] >= min_area
    })
}

/// Dilation followed by erosion with a disk of the given radius.
pub fn close_mask(mask: &BinaryMask, radius: u8) -> BinaryMask {
    if radius == 0 {
        return mask.clone();
    }
    let disk = Mask::disk(radius);
    BinaryMask::from_gray(grayscale_close(mask.as_gray(), &disk))
}
