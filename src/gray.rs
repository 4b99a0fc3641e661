//! RGB to single-channel luminance conversion.
//!
//! Luminance stays in `f64` until quantization.

use crate::image::{ColorView, OwnedImage};
use crate::trace::{trace_event, trace_span};
use crate::util::EdgeFxResult;

/// Per-channel weights applied to `[r, g, b]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LumaWeights {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LumaWeights {
    /// ITU-R BT.601 luma coefficients.
    pub const BT601: Self = Self {
        r: 0.299,
        g: 0.587,
        b: 0.114,
    };

    #[inline]
    fn apply(&self, r: f64, g: f64, b: f64) -> f64 {
        self.r * r + self.g * g + self.b * b
    }
}

/// Weights used by every catalog filter.
pub const LUMA_WEIGHTS: LumaWeights = LumaWeights {
    r: 0.2989,
    g: 0.5870,
    b: 0.1140,
};

/// Converts an RGB view to luminance using [`LUMA_WEIGHTS`].
pub fn rgb_to_gray<T>(color: ColorView<'_, T>) -> EdgeFxResult<OwnedImage<f64>>
where
    T: Copy + Into<f64>,
{
    rgb_to_gray_weighted(color, LUMA_WEIGHTS)
}

/// Converts an RGB view to luminance using caller-supplied weights.
pub fn rgb_to_gray_weighted<T>(
    color: ColorView<'_, T>,
    weights: LumaWeights,
) -> EdgeFxResult<OwnedImage<f64>>
where
    T: Copy + Into<f64>,
{
    let width = color.width();
    let height = color.height();
    let _span = trace_span!("rgb_to_gray", width = width, height = height).entered();

    let gray: Vec<f64> = color
        .as_slice()
        .chunks_exact(3)
        .map(|rgb| weights.apply(rgb[0].into(), rgb[1].into(), rgb[2].into()))
        .collect();

    trace_event!("gray_converted", pixels = gray.len());
    OwnedImage::new(gray, width, height)
}
