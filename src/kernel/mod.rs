//! 3x3 correlation kernels and the valid-mode correlation engine.
//!
//! `correlate` slides a kernel over a single-channel image without padding,
//! so the output shrinks by `KERNEL_SIZE - 1` in each dimension. Every sum is
//! clamped to zero before it is stored.

use crate::image::{ImageView, OwnedImage};
use crate::util::{EdgeFxError, EdgeFxResult};

pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;

/// Side length of every kernel handled by the engine.
pub const KERNEL_SIZE: usize = 3;

/// Immutable 3x3 weight matrix stored row-major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kernel3 {
    weights: [[f64; KERNEL_SIZE]; KERNEL_SIZE],
}

impl Kernel3 {
    /// Creates a kernel from row-major weights (`weights[row][col]`).
    pub const fn new(weights: [[f64; KERNEL_SIZE]; KERNEL_SIZE]) -> Self {
        Self { weights }
    }

    /// Returns the row-major weights.
    pub fn weights(&self) -> &[[f64; KERNEL_SIZE]; KERNEL_SIZE] {
        &self.weights
    }

    /// Returns the weight at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is not below [`KERNEL_SIZE`].
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> f64 {
        self.weights[y][x]
    }

    /// Sum of all nine weights.
    pub fn sum(&self) -> f64 {
        self.weights.iter().flatten().sum()
    }
}

/// Correlates `image` with `kernel` in valid mode, clamping negative sums to zero.
///
/// Returns an `(width - 2) x (height - 2)` image; inputs with fewer than three
/// rows or columns are rejected before any work is done.
pub fn correlate<T>(image: ImageView<'_, T>, kernel: &Kernel3) -> EdgeFxResult<OwnedImage<f64>>
where
    T: Copy + Into<f64>,
{
    scalar::correlate_valid(image, kernel)
}

/// Output size of a valid-mode 3x3 correlation over a `width x height` image.
pub(crate) fn valid_output_dims(width: usize, height: usize) -> EdgeFxResult<(usize, usize)> {
    if width < KERNEL_SIZE || height < KERNEL_SIZE {
        return Err(EdgeFxError::TooSmallForKernel {
            width,
            height,
            kernel_width: KERNEL_SIZE,
            kernel_height: KERNEL_SIZE,
        });
    }
    Ok((width - KERNEL_SIZE + 1, height - KERNEL_SIZE + 1))
}
