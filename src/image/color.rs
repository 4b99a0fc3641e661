//! Interleaved RGB color views and owned color images.

use crate::util::{EdgeFxError, EdgeFxResult};

/// Number of interleaved channels in an RGB color image.
pub const RGB_CHANNELS: usize = 3;

/// Borrowed interleaved RGB view (`height x width x 3`, row-major).
#[derive(Copy, Clone, Debug)]
pub struct ColorView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
}

impl<'a, T> ColorView<'a, T> {
    /// Creates a view over a tightly packed RGB buffer.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> EdgeFxResult<Self> {
        Self::new(data, width, height, RGB_CHANNELS)
    }

    /// Creates a view over an interleaved buffer with `channels` samples per pixel.
    ///
    /// Only 3-channel (RGB) input is accepted; any other channel count fails
    /// before the buffer is inspected.
    pub fn new(data: &'a [T], width: usize, height: usize, channels: usize) -> EdgeFxResult<Self> {
        if channels != RGB_CHANNELS {
            return Err(EdgeFxError::ChannelMismatch {
                expected: RGB_CHANNELS,
                got: channels,
            });
        }
        if width == 0 || height == 0 {
            return Err(EdgeFxError::InvalidDimensions { width, height });
        }
        let expected = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(RGB_CHANNELS))
            .ok_or(EdgeFxError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(EdgeFxError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
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

    /// Returns the interleaved backing slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the interleaved samples of row `y` (`width * 3` elements).
    pub fn row(&self, y: usize) -> Option<&'a [T]> {
        if y >= self.height {
            return None;
        }
        let len = self.width * RGB_CHANNELS;
        let start = y * len;
        self.data.get(start..start + len)
    }
}

impl<T: Copy> ColorView<'_, T> {
    /// Returns the `[r, g, b]` samples at `(x, y)` if within bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[T; 3]> {
        if x >= self.width {
            return None;
        }
        let row = self.row(y)?;
        let base = x * RGB_CHANNELS;
        Some([row[base], row[base + 1], row[base + 2]])
    }
}

/// Owned interleaved RGB image.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedColorImage {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl OwnedColorImage {
    /// Creates an owned RGB image from a packed `width * height * 3` buffer.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> EdgeFxResult<Self> {
        ColorView::from_slice(&data, width, height)?;
        Ok(Self {
            data,
            width,
            height,
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

    /// Returns the interleaved RGB samples.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns a borrowed color view.
    pub fn view(&self) -> ColorView<'_, u8> {
        ColorView {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ColorView;
    use crate::util::EdgeFxError;

    #[test]
    fn color_view_rejects_non_rgb_channel_counts() {
        let data = [0u8; 16];
        let err = ColorView::new(&data, 2, 2, 4).unwrap_err();
        assert_eq!(
            err,
            EdgeFxError::ChannelMismatch {
                expected: 3,
                got: 4
            }
        );
        assert!(err.is_invalid_shape());
    }

    #[test]
    fn color_view_rejects_wrong_length() {
        let data = [0u8; 11];
        let err = ColorView::from_slice(&data, 2, 2).unwrap_err();
        assert_eq!(
            err,
            EdgeFxError::BufferSizeMismatch {
                expected: 12,
                got: 11
            }
        );
    }

    #[test]
    fn pixel_reads_interleaved_samples() {
        let data: Vec<u8> = (0u8..12).collect();
        let view = ColorView::from_slice(&data, 2, 2).unwrap();
        assert_eq!(view.pixel(1, 0), Some([3, 4, 5]));
        assert_eq!(view.pixel(0, 1), Some([6, 7, 8]));
        assert_eq!(view.pixel(2, 0), None);
    }
}
