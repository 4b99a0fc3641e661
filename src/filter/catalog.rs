//! Declarative filter table.

use crate::kernel::Kernel3;

/// One row of the filter table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterSpec {
    /// Canonical kebab-case name.
    pub name: &'static str,
    /// Correlation kernel; `None` passes the luminance image through.
    pub kernel: Option<Kernel3>,
    /// Apply `v -> 255 - v` after quantization.
    pub invert: bool,
}

pub const LEFT_SOBEL: Kernel3 =
    Kernel3::new([[1.0, 0.0, -1.0], [2.0, 0.0, -2.0], [1.0, 0.0, -1.0]]);
pub const RIGHT_SOBEL: Kernel3 =
    Kernel3::new([[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]]);
pub const TOP_SOBEL: Kernel3 =
    Kernel3::new([[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]]);
pub const OUTLINE: Kernel3 =
    Kernel3::new([[-1.0, -1.0, -1.0], [-1.0, 8.0, -1.0], [-1.0, -1.0, -1.0]]);
pub const SHARPEN: Kernel3 =
    Kernel3::new([[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]]);
pub const EMBOSS: Kernel3 =
    Kernel3::new([[-2.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 2.0]]);

/// Filter table, indexed by `Filter as usize`.
pub static CATALOG: [FilterSpec; 7] = [
    FilterSpec {
        name: "left-sobel",
        kernel: Some(LEFT_SOBEL),
        invert: true,
    },
    FilterSpec {
        name: "right-sobel",
        kernel: Some(RIGHT_SOBEL),
        invert: true,
    },
    FilterSpec {
        name: "top-sobel",
        kernel: Some(TOP_SOBEL),
        invert: true,
    },
    FilterSpec {
        name: "outline",
        kernel: Some(OUTLINE),
        invert: true,
    },
    FilterSpec {
        name: "sharpen",
        kernel: Some(SHARPEN),
        invert: false,
    },
    FilterSpec {
        name: "emboss",
        kernel: Some(EMBOSS),
        invert: false,
    },
    FilterSpec {
        name: "grayscale",
        kernel: None,
        invert: false,
    },
];
