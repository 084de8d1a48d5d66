mod common;

use common::synthetic_image::three_squares_u8;
use lipid_lens::image::{GrayImageU8, ImageU8};
use lipid_lens::render::{caption_lines, paginate, render_pages, RenderStyle, PAGE_SIZE};
use lipid_lens::sweep::{
    evaluate_threshold, Polarity, SweepParams, ThresholdResult, ThresholdSweep,
};

/// Deterministic pseudo-random texture with a few bright blobs.
fn textured(width: usize, height: usize) -> GrayImageU8 {
    let mut state = 0x2545_f491_u32;
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let noise = (state % 60) as u8;
            let blob = ((x / 16) + (y / 16)) % 3 == 0;
            data.push(if blob { 150 + noise } else { noise });
        }
    }
    GrayImageU8::new(width, height, data).unwrap()
}

fn page_groups(results: &[ThresholdResult]) -> Vec<Vec<usize>> {
    paginate(results, PAGE_SIZE)
        .iter()
        .map(|p| p.panels.iter().map(|r| r.index).collect())
        .collect()
}

fn view(gray: &GrayImageU8) -> ImageU8<'_> {
    gray.as_view()
}

#[test]
fn same_threshold_gives_identical_mask_and_count() {
    let gray = textured(80, 64);
    let params = SweepParams::default();
    for &t in &[40.0, 97.3, 151.0, 210.8] {
        let a = evaluate_threshold(view(&gray), 0, t, &params);
        let b = evaluate_threshold(view(&gray), 0, t, &params);
        assert_eq!(a, b, "threshold {t} not reproducible");
    }
}

#[test]
fn sweeps_are_reproducible_and_independent() {
    let gray = textured(80, 64);
    let sweep = ThresholdSweep::new(SweepParams::default()).unwrap();
    let first = sweep.run(view(&gray)).unwrap();
    let second = sweep.run(view(&gray)).unwrap();
    assert_eq!(first.results, second.results);

    // Each entry matches a standalone evaluation of that threshold.
    for r in first.results.iter().step_by(7) {
        let alone = evaluate_threshold(view(&gray), r.index, r.threshold, sweep.params());
        assert_eq!(&alone, r);
    }
}

#[test]
fn rendering_twice_is_identical() {
    let gray = textured(48, 48);
    let sweep = ThresholdSweep::new(SweepParams {
        samples: 15,
        ..Default::default()
    })
    .unwrap()
    .run(view(&gray))
    .unwrap();
    let style = RenderStyle {
        panel_size: 40,
        caption_scale: 1,
        margin: 2,
    };

    assert_eq!(page_groups(&sweep.results), page_groups(&sweep.results));

    let captions: Vec<_> = sweep
        .results
        .iter()
        .map(|r| caption_lines(r.threshold, r.count))
        .collect();
    let again: Vec<_> = sweep
        .results
        .iter()
        .map(|r| caption_lines(r.threshold, r.count))
        .collect();
    assert_eq!(captions, again);

    assert_eq!(
        render_pages(&sweep.results, &style),
        render_pages(&sweep.results, &style)
    );
}

#[test]
fn threshold_at_minimum_intensity_is_degenerate() {
    let data = three_squares_u8(200);
    let gray = GrayImageU8::new(100, 100, data).unwrap();
    let (min, max) = gray.as_view().intensity_range().unwrap();
    assert_eq!((min, max), (0, 200));

    let bright = SweepParams::default();
    let dark = SweepParams {
        polarity: Polarity::DarkOnBright,
        ..Default::default()
    };

    let at_min = f64::from(min);
    assert_eq!(evaluate_threshold(view(&gray), 0, at_min, &bright).count, 1);
    assert_eq!(evaluate_threshold(view(&gray), 0, at_min, &dark).count, 0);

    let above_max = f64::from(max) + 1.0;
    assert_eq!(evaluate_threshold(view(&gray), 0, above_max, &bright).count, 0);
    assert_eq!(evaluate_threshold(view(&gray), 0, above_max, &dark).count, 1);
}

#[test]
fn counts_are_never_negative_and_masks_match_input_size() {
    let gray = textured(64, 40);
    let result = ThresholdSweep::new(SweepParams {
        lower: 0.0,
        upper: 255.0,
        samples: 26,
        ..Default::default()
    })
    .unwrap()
    .run(view(&gray))
    .unwrap();
    for r in &result.results {
        // usize is unsigned; the bound that matters is the pixel budget.
        assert!(r.count <= 64 * 40);
        assert_eq!(r.mask.dimensions(), (64, 40));
        if r.mask.foreground_count() == 0 {
            assert_eq!(r.count, 0);
        }
    }
}
