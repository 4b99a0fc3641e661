use edgefx::filter::{apply, apply_to_gray, Filter};
use edgefx::{
    emboss, gray_scale, invert, left_sobel, outline, rgb_to_gray, right_sobel, sharpen,
    top_sobel, ColorView, EdgeFxError, EdgeFxResult, ImageView, OwnedImage,
};

type FilterFn = fn(ColorView<'_, u8>) -> EdgeFxResult<OwnedImage<u8>>;

/// RGB image whose left half is black and right half is white.
fn vertical_edge(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 3);
    for _ in 0..height {
        for x in 0..width {
            let v = if x < width / 2 { 0u8 } else { 200u8 };
            data.extend_from_slice(&[v, v, v]);
        }
    }
    data
}

/// RGB image whose top half is white and bottom half is black.
fn horizontal_edge(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        let v = if y < height / 2 { 200u8 } else { 0u8 };
        for _ in 0..width {
            data.extend_from_slice(&[v, v, v]);
        }
    }
    data
}

fn make_color(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            data.push(((x * 13) ^ (y * 7)) as u8);
            data.push(((x * y) & 0xFF) as u8);
            data.push(((x + y) * 5) as u8);
        }
    }
    data
}

fn row_is_flat(img: &OwnedImage<u8>, y: usize) -> bool {
    let row = &img.data()[y * img.width()..(y + 1) * img.width()];
    row.iter().all(|&v| v == row[0])
}

#[test]
fn every_filter_has_expected_output_shape() {
    let (width, height) = (9, 7);
    let data = make_color(width, height);
    let view = ColorView::from_slice(&data, width, height).unwrap();
    for filter in Filter::ALL {
        let out = apply(filter, view).unwrap();
        if filter == Filter::Grayscale {
            assert_eq!((out.width(), out.height()), (width, height));
        } else {
            assert_eq!((out.width(), out.height()), (width - 2, height - 2));
        }
    }
}

#[test]
fn per_filter_entry_points_match_catalog_dispatch() {
    let data = make_color(8, 8);
    let view = ColorView::from_slice(&data, 8, 8).unwrap();
    let entry_points: [(Filter, FilterFn); 7] = [
        (Filter::LeftSobel, left_sobel::<u8>),
        (Filter::RightSobel, right_sobel::<u8>),
        (Filter::TopSobel, top_sobel::<u8>),
        (Filter::Outline, outline::<u8>),
        (Filter::Sharpen, sharpen::<u8>),
        (Filter::Emboss, emboss::<u8>),
        (Filter::Grayscale, gray_scale::<u8>),
    ];
    for (filter, run) in entry_points {
        assert_eq!(run(view).unwrap(), filter.apply(view).unwrap(), "{filter}");
    }
}

#[test]
fn inverting_filters_are_inverted_correlation() {
    let data = make_color(10, 6);
    let view = ColorView::from_slice(&data, 10, 6).unwrap();
    let gray = rgb_to_gray(view).unwrap();
    for filter in Filter::ALL {
        let Some(kernel) = filter.kernel() else {
            continue;
        };
        let plain = edgefx::quantize_u8(&edgefx::correlate(gray.view(), kernel).unwrap());
        let mut out = apply(filter, view).unwrap();
        if filter.inverts() {
            for (&o, &p) in out.data().iter().zip(plain.data()) {
                assert_eq!(o, 255 - p);
            }
            invert(&mut out);
        }
        assert_eq!(out, plain, "{filter}");
    }
}

#[test]
fn left_and_right_sobel_respond_to_opposite_edges() {
    let (width, height) = (8, 5);
    let data = vertical_edge(width, height);
    let view = ColorView::from_slice(&data, width, height).unwrap();

    // Dark-to-bright going right: the right detector fires, the left one clamps to zero.
    let left = left_sobel(view).unwrap();
    let right = right_sobel(view).unwrap();
    assert!(left.data().iter().all(|&v| v == 255));
    assert!(right.data().iter().any(|&v| v < 255));

    // Columns away from the edge see a flat patch.
    for y in 0..right.height() {
        assert_eq!(right.get(0, y).copied(), Some(255));
        assert_eq!(right.get(right.width() - 1, y).copied(), Some(255));
    }
}

#[test]
fn top_sobel_fires_on_bright_to_dark_going_down() {
    let (width, height) = (5, 8);
    let data = horizontal_edge(width, height);
    let view = ColorView::from_slice(&data, width, height).unwrap();
    let out = top_sobel(view).unwrap();
    assert!(out.data().iter().any(|&v| v < 255));
    assert!(row_is_flat(&out, 0));
}

#[test]
fn grayscale_is_deterministic_and_truncated() {
    let data = make_color(6, 4);
    let view = ColorView::from_slice(&data, 6, 4).unwrap();
    let first = gray_scale(view).unwrap();
    let second = gray_scale(view).unwrap();
    assert_eq!(first, second);

    let luma = rgb_to_gray(view).unwrap();
    for (&q, &l) in first.data().iter().zip(luma.data()) {
        assert_eq!(q, l.trunc() as u8);
    }
}

#[test]
fn uniform_color_through_sharpen_and_emboss() {
    // 0.2989 + 0.5870 + 0.1140 = 0.9999, so uniform 100 becomes 99.99.
    let data = vec![100u8; 5 * 5 * 3];
    let view = ColorView::from_slice(&data, 5, 5).unwrap();
    assert_eq!(sharpen(view).unwrap().data(), &[99u8; 9]);
    assert_eq!(emboss(view).unwrap().data(), &[99u8; 9]);
    assert_eq!(outline(view).unwrap().data(), &[255u8; 9]);
}

#[test]
fn float_color_input_is_accepted() {
    let data: Vec<f32> = make_color(6, 6).into_iter().map(f32::from).collect();
    let bytes = make_color(6, 6);
    let from_f32 = apply(Filter::Emboss, ColorView::from_slice(&data, 6, 6).unwrap()).unwrap();
    let from_u8 = apply(Filter::Emboss, ColorView::from_slice(&bytes, 6, 6).unwrap()).unwrap();
    assert_eq!(from_f32, from_u8);
}

#[test]
fn small_inputs_fail_before_producing_output() {
    let data = vec![1u8; 2 * 2 * 3];
    let view = ColorView::from_slice(&data, 2, 2).unwrap();
    for filter in Filter::ALL {
        let result = apply(filter, view);
        if filter == Filter::Grayscale {
            assert_eq!(result.unwrap().data().len(), 4);
        } else {
            assert!(result.unwrap_err().is_invalid_shape());
        }
    }

    let data = [0u8; 4];
    let gray = ImageView::from_slice(&data, 2, 2).unwrap();
    assert!(matches!(
        apply_to_gray(Filter::Sharpen, gray),
        Err(EdgeFxError::TooSmallForKernel { .. })
    ));
}

#[test]
fn luminance_on_integer_boundary_is_not_truncated_low() {
    // Both colors have luminance exactly on an integer in double precision.
    for (rgb, expected) in [([0u8, 230, 35], 139u8), ([0, 130, 85], 86)] {
        let data: Vec<u8> = rgb.iter().copied().cycle().take(5 * 5 * 3).collect();
        let view = ColorView::from_slice(&data, 5, 5).unwrap();
        assert_eq!(sharpen(view).unwrap().data(), &[expected; 9], "{rgb:?}");
        assert_eq!(emboss(view).unwrap().data(), &[expected; 9], "{rgb:?}");
        assert_eq!(gray_scale(view).unwrap().data(), &[expected; 25], "{rgb:?}");
    }
}
