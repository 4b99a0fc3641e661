//! Image views and owned buffers.
//!
//! `ImageView` is a borrowed 2D view into a 1D buffer with an explicit stride.
//! The stride counts elements between the starts of consecutive rows, so a
//! stride larger than the width represents padded rows. ROI slices are zero-copy
//! views into the same backing slice and retain the original stride.
//!
//! Color input is described separately by [`ColorView`], an interleaved
//! `height x width x 3` buffer in RGB order.

use crate::util::{EdgeFxError, EdgeFxResult};

mod color;
mod owned;

#[cfg(feature = "image-io")]
pub mod io;

pub use color::{ColorView, OwnedColorImage, RGB_CHANNELS};
pub use owned::OwnedImage;

/// Borrowed 2D single-channel image view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> EdgeFxResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> EdgeFxResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(EdgeFxError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the element at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&'a T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.stride)?.checked_add(x)?;
        self.data.get(idx)
    }

    /// Returns a contiguous slice for row `y` with length `width`.
    pub fn row(&self, y: usize) -> Option<&'a [T]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Returns row `y`, reporting a short backing buffer as an error.
    pub(crate) fn row_checked(&self, y: usize) -> EdgeFxResult<&'a [T]> {
        self.row(y).ok_or_else(|| {
            let needed = y
                .checked_mul(self.stride)
                .and_then(|v| v.checked_add(self.width))
                .unwrap_or(usize::MAX);
            EdgeFxError::BufferTooSmall {
                needed,
                got: self.data.len(),
            }
        })
    }

    /// Returns a zero-copy ROI view into the same backing buffer.
    pub fn roi(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> EdgeFxResult<ImageView<'a, T>> {
        if width == 0 || height == 0 {
            return Err(EdgeFxError::InvalidDimensions { width, height });
        }

        let out_of_bounds = EdgeFxError::RoiOutOfBounds {
            x,
            y,
            width,
            height,
            img_width: self.width,
            img_height: self.height,
        };
        let end_x = x.checked_add(width).ok_or_else(|| out_of_bounds.clone())?;
        let end_y = y.checked_add(height).ok_or_else(|| out_of_bounds.clone())?;
        if end_x > self.width || end_y > self.height {
            return Err(out_of_bounds);
        }

        let start = y
            .checked_mul(self.stride)
            .and_then(|v| v.checked_add(x))
            .ok_or(EdgeFxError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        let data = self.data.get(start..).ok_or(EdgeFxError::BufferTooSmall {
            needed: start.saturating_add(1),
            got: self.data.len(),
        })?;

        ImageView::new(data, width, height, self.stride)
    }
}

pub(crate) fn required_len(width: usize, height: usize, stride: usize) -> EdgeFxResult<usize> {
    if width == 0 || height == 0 {
        return Err(EdgeFxError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(EdgeFxError::InvalidStride { width, stride });
    }
    let needed = (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(EdgeFxError::InvalidDimensions { width, height })?;
    Ok(needed)
}
