//! Rayon-parallel correlation (feature-gated).
//!
//! Output rows are independent: each one reads only the three input rows
//! under it and the shared read-only kernel, so rows are split across the
//! thread pool without synchronization.

use crate::image::{ImageView, OwnedImage};
use crate::kernel::scalar::correlate_row;
use crate::kernel::{valid_output_dims, Kernel3};
use crate::trace::{trace_event, trace_span};
use crate::util::EdgeFxResult;
use rayon::prelude::*;

/// Row-parallel valid-mode correlation.
///
/// Produces exactly the same values as [`crate::kernel::correlate`].
pub fn correlate_par<T>(
    image: ImageView<'_, T>,
    kernel: &Kernel3,
) -> EdgeFxResult<OwnedImage<f64>>
where
    T: Copy + Into<f64> + Sync,
{
    let (out_width, out_height) = valid_output_dims(image.width(), image.height())?;
    let _span = trace_span!(
        "correlate",
        width = image.width(),
        height = image.height(),
        parallel = true
    )
    .entered();

    // Resolve every input row up front so the parallel section cannot fail.
    let rows = (0..image.height())
        .map(|y| image.row_checked(y))
        .collect::<EdgeFxResult<Vec<&[T]>>>()?;

    let mut out = vec![0.0f64; out_width * out_height];
    out.par_chunks_exact_mut(out_width)
        .enumerate()
        .for_each(|(y, out_row)| {
            correlate_row([rows[y], rows[y + 1], rows[y + 2]], kernel, out_row);
        });

    trace_event!("correlated", out_width = out_width, out_height = out_height);
    OwnedImage::new(out, out_width, out_height)
}
