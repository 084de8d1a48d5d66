//! Page composition: captioned mask thumbnails laid out on a fixed grid.
use super::caption::caption_lines;
use super::glyphs::{draw_text, line_height, text_width};
use super::paginate::{paginate, Page, PageLayout, PAGE_SIZE};
use crate::error::{LensError, Result};
use crate::image::BinaryMask;
use crate::sweep::ThresholdResult;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};
use log::debug;
use serde::{Deserialize, Serialize};

/// Largest accepted `panel_size`, in pixels.
pub const MAX_PANEL_SIZE: u32 = 1024;
/// Largest accepted `caption_scale`.
pub const MAX_CAPTION_SCALE: u32 = 8;
/// Largest accepted `margin`, in pixels.
pub const MAX_MARGIN: u32 = 256;

const PAPER: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Visual knobs for page rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Edge length of the square area each mask thumbnail is fitted into.
    pub panel_size: u32,
    /// Integer magnification of the 5×7 caption glyphs.
    pub caption_scale: u32,
    /// Blank border around every cell.
    pub margin: u32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            panel_size: 240,
            caption_scale: 2,
            margin: 8,
        }
    }
}

impl RenderStyle {
    /// Reject zero sizes and values past the `MAX_*` bounds, which keep the
    /// page canvas under a hundred megabytes.
    pub fn validate(&self) -> Result<()> {
        check_range("panel size", self.panel_size, 1, MAX_PANEL_SIZE)?;
        check_range("caption scale", self.caption_scale, 1, MAX_CAPTION_SCALE)?;
        check_range("margin", self.margin, 0, MAX_MARGIN)
    }

    fn caption_height(&self) -> u32 {
        // Two lines with a half-line gap between them and below.
        2 * line_height(self.caption_scale) + 2 * (line_height(self.caption_scale) / 2)
    }

    pub fn cell_size(&self) -> (u32, u32) {
        let w = self.panel_size + 2 * self.margin;
        let h = self.caption_height() + self.panel_size + 2 * self.margin;
        (w, h)
    }

    /// Canvas size of a page; identical for full and partial pages.
    pub fn page_size(&self, layout: PageLayout) -> (u32, u32) {
        let (cw, ch) = self.cell_size();
        (cw * layout.cols as u32, ch * layout.rows as u32)
    }
}

fn check_range(name: &str, value: u32, min: u32, max: u32) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(LensError::InvalidConfig(format!(
            "{name} must be in {min}..={max}, got {value}"
        )));
    }
    Ok(())
}

/// Render one page of results onto a white canvas.
pub fn render_page(page: &Page<'_>, layout: PageLayout, style: &RenderStyle) -> RgbImage {
    let (pw, ph) = style.page_size(layout);
    let mut canvas = RgbImage::from_pixel(pw, ph, PAPER);
    let (cw, ch) = style.cell_size();

    for (slot, result) in page.panels.iter().take(layout.capacity()).enumerate() {
        let (row, col) = layout.cell(slot);
        let x0 = col as u32 * cw;
        let y0 = row as u32 * ch;
        draw_panel(&mut canvas, x0, y0, result, style);
    }
    debug!(
        "render_page page={} panels={} size={}x{}",
        page.number,
        page.len(),
        pw,
        ph
    );
    canvas
}

/// Paginate `results` and render every page.
pub fn render_pages(results: &[ThresholdResult], style: &RenderStyle) -> Vec<RgbImage> {
    paginate(results, PAGE_SIZE)
        .iter()
        .map(|page| render_page(page, PageLayout::STANDARD, style))
        .collect()
}

fn draw_panel(
    canvas: &mut RgbImage,
    x0: u32,
    y0: u32,
    result: &ThresholdResult,
    style: &RenderStyle,
) {
    let (cw, _) = style.cell_size();
    let scale = style.caption_scale;
    let line_h = line_height(scale);

    let mut text_y = y0 + style.margin;
    for line in caption_lines(result.threshold, result.count) {
        let tw = text_width(&line, scale);
        let tx = x0 + cw.saturating_sub(tw) / 2;
        draw_text(canvas, tx as i32, text_y as i32, &line, scale, INK);
        text_y += line_h + line_h / 2;
    }

    let thumb = thumbnail(&result.mask, style.panel_size);
    let panel_y = y0 + style.margin + style.caption_height();
    let tx = x0 + style.margin + (style.panel_size - thumb.width()) / 2;
    let ty = panel_y + (style.panel_size - thumb.height()) / 2;
    imageops::replace(canvas, &thumb, i64::from(tx), i64::from(ty));
}

/// Nearest-neighbour resize of the mask to fit a `size`×`size` box, aspect kept.
fn thumbnail(mask: &BinaryMask, size: u32) -> RgbImage {
    let (w, h) = mask.dimensions();
    if w == 0 || h == 0 {
        return RgbImage::new(0, 0);
    }
    let fit = f64::from(size) / f64::from(w.max(h));
    let tw = ((f64::from(w) * fit).round() as u32).clamp(1, size);
    let th = ((f64::from(h) * fit).round() as u32).clamp(1, size);
    let resized = imageops::resize(mask.as_gray(), tw, th, FilterType::Nearest);
    DynamicImage::ImageLuma8(resized).to_rgb8()
}
