//! Scalar reference implementation of valid-mode correlation.

use crate::image::{ImageView, OwnedImage};
use crate::kernel::{valid_output_dims, Kernel3, KERNEL_SIZE};
use crate::trace::{trace_event, trace_span};
use crate::util::EdgeFxResult;

/// Computes one output row from the three input rows it covers.
///
/// `out` holds `rows[i].len() - 2` values; sums are accumulated row by row in
/// kernel order and clamped to zero. Both the scalar and the parallel paths go
/// through here, so they produce identical bits.
#[inline]
pub(crate) fn correlate_row<T>(rows: [&[T]; KERNEL_SIZE], kernel: &Kernel3, out: &mut [f64])
where
    T: Copy + Into<f64>,
{
    let weights = kernel.weights();
    for (x, dst) in out.iter_mut().enumerate() {
        let mut sum = 0.0f64;
        for (row, krow) in rows.iter().zip(weights.iter()) {
            let patch = &row[x..x + KERNEL_SIZE];
            for (&value, &w) in patch.iter().zip(krow.iter()) {
                sum += value.into() * w;
            }
        }
        *dst = sum.max(0.0);
    }
}

/// Valid-mode correlation over the whole image, one output row at a time.
pub fn correlate_valid<T>(
    image: ImageView<'_, T>,
    kernel: &Kernel3,
) -> EdgeFxResult<OwnedImage<f64>>
where
    T: Copy + Into<f64>,
{
    let (out_width, out_height) = valid_output_dims(image.width(), image.height())?;
    let _span = trace_span!(
        "correlate",
        width = image.width(),
        height = image.height(),
        parallel = false
    )
    .entered();

    let mut out = vec![0.0f64; out_width * out_height];
    for (y, out_row) in out.chunks_exact_mut(out_width).enumerate() {
        let rows = [
            image.row_checked(y)?,
            image.row_checked(y + 1)?,
            image.row_checked(y + 2)?,
        ];
        correlate_row(rows, kernel, out_row);
    }

    trace_event!("correlated", out_width = out_width, out_height = out_height);
    OwnedImage::new(out, out_width, out_height)
}
