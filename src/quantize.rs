//! 8-bit quantization and tonal inversion.
//!
//! Quantization truncates toward zero and keeps only the low eight bits of
//! the integer part, the same result an unchecked float-to-`uint8` array cast
//! gives. Rust's `as u8` saturates instead, so the conversion goes through
//! `u64` explicitly.

use crate::image::OwnedImage;

/// Truncates a single value to 8 bits (`254.9 -> 254`, `300.0 -> 44`).
///
/// Negative and non-finite inputs map to zero.
#[inline]
pub fn quantize_value(value: f64) -> u8 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    (value.trunc() as u64 & 0xFF) as u8
}

/// Quantizes every pixel of `image` with [`quantize_value`].
pub fn quantize_u8(image: &OwnedImage<f64>) -> OwnedImage<u8> {
    image.map(quantize_value)
}

/// Maps every pixel `v` to `255 - v` in place.
pub fn invert(image: &mut OwnedImage<u8>) {
    for value in image.data_mut() {
        *value = u8::MAX - *value;
    }
}
