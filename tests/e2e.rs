mod common;

use common::synthetic_image::{encode_as_rgb, encode_gray, three_squares_u8};
use image::ImageFormat;
use lipid_lens::analyzer::{analyze_bytes, analyze_gray};
use lipid_lens::config::AnalyzerConfig;
use lipid_lens::error::LensError;
use lipid_lens::image::GrayImageU8;
use lipid_lens::render::{paginate, RenderStyle, PAGE_SIZE};
use lipid_lens::sweep::Polarity;

fn small_render() -> RenderStyle {
    RenderStyle {
        panel_size: 50,
        caption_scale: 1,
        margin: 2,
    }
}

fn config() -> AnalyzerConfig {
    AnalyzerConfig {
        render: small_render(),
        ..Default::default()
    }
}

#[test]
fn three_bright_squares_are_counted_up_to_their_intensity() {
    let _ = env_logger::builder().is_test(true).try_init();
    let bytes = encode_gray(100, 100, three_squares_u8(200), ImageFormat::Png);
    let analysis = analyze_bytes(&bytes, &config()).expect("analysis succeeds");

    let results = &analysis.sweep.results;
    assert_eq!(results.len(), 50);
    assert_eq!(results[0].threshold, 40.0);
    assert_eq!(results[49].threshold, 300.0);

    for r in results {
        let expected = if r.threshold <= 200.0 { 3 } else { 0 };
        assert_eq!(
            r.count, expected,
            "threshold {:.2} gave {} objects",
            r.threshold, r.count
        );
    }
    let threes = results.iter().filter(|r| r.count == 3).count();
    assert!(threes >= 30, "expected a long run of count 3, got {threes}");
}

#[test]
fn color_input_goes_through_grayscale_conversion() {
    let data = three_squares_u8(200);
    let bytes = encode_as_rgb(100, 100, &data, ImageFormat::Png);
    let analysis = analyze_bytes(&bytes, &config()).expect("analysis succeeds");
    assert!(analysis.report.input.color);
    assert_eq!(analysis.gray.data(), data.as_slice());
    assert_eq!(analysis.sweep.results[0].count, 3);
}

#[test]
fn tiff_input_is_accepted() {
    let bytes = encode_gray(100, 100, three_squares_u8(200), ImageFormat::Tiff);
    let analysis = analyze_bytes(&bytes, &config()).expect("tiff analysis succeeds");
    assert_eq!(analysis.report.input.format.as_deref(), Some("Tiff"));
}

#[test]
fn corrupted_bytes_yield_decode_error_and_no_pages() {
    let mut bytes = encode_gray(100, 100, three_squares_u8(200), ImageFormat::Png);
    bytes.truncate(40);
    let err = analyze_bytes(&bytes, &config()).expect_err("truncated png must fail");
    assert!(err.is_decode_failure(), "unexpected error: {err}");

    let err = analyze_bytes(b"\x00\x01\x02 not an image at all", &config())
        .expect_err("garbage must fail");
    assert!(err.is_decode_failure(), "unexpected error: {err}");
}

#[test]
fn fifty_samples_render_five_pages() {
    let gray = GrayImageU8::new(100, 100, three_squares_u8(200)).unwrap();
    let analysis = analyze_gray(gray, &config()).expect("analysis succeeds");

    assert_eq!(analysis.pages.len(), 5);
    assert_eq!(analysis.report.page_count, 5);
    let pages = paginate(&analysis.sweep.results, PAGE_SIZE);
    let sizes: Vec<usize> = pages.iter().map(|p| p.len()).collect();
    assert_eq!(sizes, vec![12, 12, 12, 12, 2]);

    let dims = analysis.pages[0].dimensions();
    assert!(analysis.pages.iter().all(|p| p.dimensions() == dims));

    let last = analysis.report.samples.last().unwrap();
    assert_eq!(last.page, 4);
    assert_eq!(last.slot, [0, 1]);
}

#[test]
fn dark_polarity_sees_the_background_as_one_object() {
    let gray = GrayImageU8::new(100, 100, three_squares_u8(200)).unwrap();
    let mut cfg = config();
    cfg.sweep.polarity = Polarity::DarkOnBright;
    let analysis = analyze_gray(gray, &cfg).expect("analysis succeeds");
    assert!(analysis.sweep.results.iter().all(|r| r.count == 1));
}

#[test]
fn outputs_are_written_to_disk() {
    let dir = std::env::temp_dir().join(format!("lipid_lens_e2e_{}", std::process::id()));
    let gray = GrayImageU8::new(100, 100, three_squares_u8(200)).unwrap();
    let mut cfg = config();
    cfg.sweep.samples = 14;
    let analysis = analyze_gray(gray, &cfg).expect("analysis succeeds");
    let written = analysis.write_to_dir(&dir).expect("write outputs");

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "original.png",
            "gray.png",
            "page_01.png",
            "page_02.png",
            "sweep.json"
        ]
    );
    let json = std::fs::read_to_string(dir.join("sweep.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["pageCount"], 2);
    assert_eq!(value["samples"].as_array().unwrap().len(), 14);
    assert_eq!(value["params"]["polarity"], "bright_on_dark");

    let page = image::open(dir.join("page_02.png")).unwrap();
    assert_eq!(
        (page.width(), page.height()),
        analysis.pages[1].dimensions()
    );
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn zero_area_image_is_rejected_before_the_sweep() {
    let gray = GrayImageU8::new(0, 0, Vec::new()).unwrap();
    let err = analyze_gray(gray, &config()).expect_err("empty image must fail");
    assert!(matches!(err, LensError::EmptyImage { .. }), "{err:?}");
    assert!(err.is_decode_failure());
}

#[test]
fn oversized_margin_is_a_config_error() {
    let gray = GrayImageU8::new(4, 4, vec![0; 16]).unwrap();
    let mut cfg = config();
    cfg.render.margin = u32::MAX / 2 + 1;
    let err = analyze_gray(gray, &cfg).expect_err("margin out of range");
    assert!(matches!(err, LensError::InvalidConfig(_)), "{err:?}");
}
