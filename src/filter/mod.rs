//! Named filters built on the correlation engine.
//!
//! Every filter runs the same pipeline: RGB to luminance, valid-mode
//! correlation with the filter's kernel, truncating 8-bit quantization and an
//! optional tonal inversion. Filters differ only by their row in [`CATALOG`].

use std::fmt;
use std::str::FromStr;

use crate::gray::rgb_to_gray;
use crate::image::{ColorView, ImageView, OwnedImage};
use crate::kernel::{self, Kernel3};
use crate::quantize::{invert, quantize_u8};
use crate::trace::{trace_event, trace_span};
use crate::util::{EdgeFxError, EdgeFxResult};

mod catalog;

pub use catalog::{
    FilterSpec, CATALOG, EMBOSS, LEFT_SOBEL, OUTLINE, RIGHT_SOBEL, SHARPEN, TOP_SOBEL,
};

/// Filters available in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter {
    LeftSobel,
    RightSobel,
    TopSobel,
    Outline,
    Sharpen,
    Emboss,
    Grayscale,
}

impl Filter {
    /// All filters in catalog order.
    pub const ALL: [Filter; 7] = [
        Filter::LeftSobel,
        Filter::RightSobel,
        Filter::TopSobel,
        Filter::Outline,
        Filter::Sharpen,
        Filter::Emboss,
        Filter::Grayscale,
    ];

    /// Returns this filter's catalog row.
    pub fn spec(self) -> &'static FilterSpec {
        &CATALOG[self as usize]
    }

    /// Canonical kebab-case name, e.g. `"left-sobel"`.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Correlation kernel, or `None` for the plain grayscale filter.
    pub fn kernel(self) -> Option<&'static Kernel3> {
        self.spec().kernel.as_ref()
    }

    /// Whether the quantized output is tonally inverted.
    pub fn inverts(self) -> bool {
        self.spec().invert
    }

    /// Runs the filter on an RGB image.
    pub fn apply<T>(self, color: ColorView<'_, T>) -> EdgeFxResult<OwnedImage<u8>>
    where
        T: Copy + Into<f64>,
    {
        apply(self, color)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = EdgeFxError;

    /// Parses canonical names case-insensitively; `_` is accepted for `-` and
    /// `gray-scale` is an alias of `grayscale`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let lookup = match normalized.as_str() {
            "gray-scale" => "grayscale",
            other => other,
        };
        Filter::ALL
            .into_iter()
            .find(|filter| filter.name() == lookup)
            .ok_or_else(|| EdgeFxError::UnknownFilter {
                name: s.to_string(),
            })
    }
}

/// Runs `filter` on an RGB image: grayscale, correlate, quantize, invert if flagged.
pub fn apply<T>(filter: Filter, color: ColorView<'_, T>) -> EdgeFxResult<OwnedImage<u8>>
where
    T: Copy + Into<f64>,
{
    let _span = trace_span!("filter", filter = filter.name()).entered();
    let gray = rgb_to_gray(color)?;
    finish(filter, gray.view(), kernel::correlate::<f64>)
}

/// Runs `filter` on an image that is already single-channel.
pub fn apply_to_gray<T>(filter: Filter, gray: ImageView<'_, T>) -> EdgeFxResult<OwnedImage<u8>>
where
    T: Copy + Into<f64>,
{
    let _span = trace_span!("filter", filter = filter.name()).entered();
    finish(filter, gray, kernel::correlate::<T>)
}

/// Parallel variant of [`apply`]; output is identical.
#[cfg(feature = "rayon")]
pub fn apply_par<T>(filter: Filter, color: ColorView<'_, T>) -> EdgeFxResult<OwnedImage<u8>>
where
    T: Copy + Into<f64>,
{
    let _span = trace_span!("filter", filter = filter.name(), parallel = true).entered();
    let gray = rgb_to_gray(color)?;
    finish(filter, gray.view(), kernel::rayon::correlate_par::<f64>)
}

fn finish<T, C>(
    filter: Filter,
    gray: ImageView<'_, T>,
    correlate: C,
) -> EdgeFxResult<OwnedImage<u8>>
where
    T: Copy + Into<f64>,
    C: FnOnce(ImageView<'_, T>, &Kernel3) -> EdgeFxResult<OwnedImage<f64>>,
{
    let spec = filter.spec();
    let mut out = match &spec.kernel {
        Some(kernel) => quantize_u8(&correlate(gray, kernel)?),
        None => quantize_u8(&OwnedImage::from_view(gray)?.map(Into::<f64>::into)),
    };
    if spec.invert {
        invert(&mut out);
    }
    trace_event!(
        "filter_done",
        width = out.width(),
        height = out.height(),
        inverted = spec.invert
    );
    Ok(out)
}

/// Left Sobel edge detector (inverted).
pub fn left_sobel<T>(color: ColorView<'_, T>) -> EdgeFxResult<OwnedImage<u8>>
where
    T: Copy + Into<f64>,
{
    apply(Filter::LeftSobel, color)
}

/// Right Sobel edge detector (inverted).
pub fn right_sobel<T>(color: ColorView<'_, T>) -> EdgeFxResult<OwnedImage<u8>>
where
    T: Copy + Into<f64>,
{
    apply(Filter::RightSobel, color)
}

/// Top Sobel edge detector (inverted).
pub fn top_sobel<T>(color: ColorView<'_, T>) -> EdgeFxResult<OwnedImage<u8>>
where
    T: Copy + Into<f64>,
{
    apply(Filter::TopSobel, color)
}

/// Outline (8-neighbour Laplacian) filter (inverted).
pub fn outline<T>(color: ColorView<'_, T>) -> EdgeFxResult<OwnedImage<u8>>
where
    T: Copy + Into<f64>,
{
    apply(Filter::Outline, color)
}

/// Sharpen filter.
pub fn sharpen<T>(color: ColorView<'_, T>) -> EdgeFxResult<OwnedImage<u8>>
where
    T: Copy + Into<f64>,
{
    apply(Filter::Sharpen, color)
}

/// Emboss filter.
pub fn emboss<T>(color: ColorView<'_, T>) -> EdgeFxResult<OwnedImage<u8>>
where
    T: Copy + Into<f64>,
{
    apply(Filter::Emboss, color)
}

/// Quantized luminance at full resolution.
pub fn gray_scale<T>(color: ColorView<'_, T>) -> EdgeFxResult<OwnedImage<u8>>
where
    T: Copy + Into<f64>,
{
    apply(Filter::Grayscale, color)
}
