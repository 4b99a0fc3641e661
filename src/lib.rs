//! edgefx applies fixed 3x3 correlation kernels to grayscale-converted images.
//!
//! The crate provides a scalar valid-mode correlation engine and a small
//! declarative catalog of edge and enhancement filters (Sobel, outline,
//! sharpen, emboss, grayscale) on top of it, with optional row parallelism via
//! the `rayon` feature and file I/O via `image-io`.

pub mod filter;
pub mod gray;
pub mod image;
pub mod kernel;
pub mod quantize;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use filter::{
    apply, apply_to_gray, emboss, gray_scale, left_sobel, outline, right_sobel, sharpen,
    top_sobel, Filter, FilterSpec, CATALOG,
};
pub use gray::{rgb_to_gray, rgb_to_gray_weighted, LumaWeights, LUMA_WEIGHTS};
pub use crate::image::{ColorView, ImageView, OwnedColorImage, OwnedImage};
pub use kernel::{correlate, Kernel3, KERNEL_SIZE};
pub use quantize::{invert, quantize_u8, quantize_value};
pub use util::{EdgeFxError, EdgeFxResult};

#[cfg(feature = "rayon")]
pub use filter::apply_par;
#[cfg(feature = "rayon")]
pub use kernel::rayon::correlate_par;
