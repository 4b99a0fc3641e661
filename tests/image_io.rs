#![cfg(feature = "image-io")]

use edgefx::io::{color_view_from_rgb_image, load_rgb_image, save_gray_image, to_gray_image};
use edgefx::{gray_scale, EdgeFxError, Filter, OwnedImage};

#[test]
fn gray_result_survives_png_round_trip() {
    let data: Vec<u8> = (0..48u8).map(|v| v * 5).collect();
    let img = OwnedImage::new(data, 8, 6).unwrap();
    let path = std::env::temp_dir().join(format!("edgefx-io-{}.png", std::process::id()));

    save_gray_image(&path, &img).unwrap();
    let loaded = load_rgb_image(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!((loaded.width(), loaded.height()), (8, 6));
    assert_eq!(loaded.view().pixel(3, 0), Some([15, 15, 15]));

    // Gray samples come back as equal RGB triples; luma weights sum to 0.9999.
    let gray = gray_scale(loaded.view()).unwrap();
    for (&out, &orig) in gray.data().iter().zip(img.data()) {
        assert_eq!(out, orig.saturating_sub(1));
    }
}

#[test]
fn rgb_buffer_is_viewed_without_copy() {
    let rgb = image::RgbImage::from_pixel(5, 4, image::Rgb([10, 20, 30]));
    let view = color_view_from_rgb_image(&rgb).unwrap();
    assert_eq!(view.as_slice().as_ptr(), rgb.as_raw().as_ptr());
    let out = Filter::Outline.apply(view).unwrap();
    assert_eq!(to_gray_image(&out).unwrap().dimensions(), (3, 2));
}

#[test]
fn missing_file_reports_image_io() {
    let err = load_rgb_image("/nonexistent/edgefx/input.png").unwrap_err();
    assert!(matches!(err, EdgeFxError::ImageIo { .. }));
}
