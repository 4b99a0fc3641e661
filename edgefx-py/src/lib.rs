//! Python bindings for the edgefx filter library.
//!
//! Images cross the boundary as numpy arrays: `H x W x 3` `uint8` in,
//! `H' x W'` `uint8` out.

use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray3, PyUntypedArrayMethods};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use edgefx::{ColorView, EdgeFxError, Filter, OwnedImage};

/// Convert an EdgeFxError to a Python exception.
fn to_py_err(err: EdgeFxError) -> PyErr {
    if err.is_invalid_shape() || matches!(err, EdgeFxError::UnknownFilter { .. }) {
        PyValueError::new_err(err.to_string())
    } else {
        PyRuntimeError::new_err(err.to_string())
    }
}

fn to_numpy<'py, T: numpy::Element>(
    py: Python<'py>,
    img: OwnedImage<T>,
) -> PyResult<Bound<'py, PyArray2<T>>> {
    let shape = (img.height(), img.width());
    let array = Array2::from_shape_vec(shape, img.into_vec())
        .map_err(|err| PyRuntimeError::new_err(err.to_string()))?;
    Ok(array.into_pyarray(py))
}

fn run<'py>(
    py: Python<'py>,
    image: PyReadonlyArray3<'py, u8>,
    filter: Filter,
    parallel: bool,
) -> PyResult<Bound<'py, PyArray2<u8>>> {
    let shape = image.shape();
    let (height, width, channels) = (shape[0], shape[1], shape[2]);
    let data = image.as_slice()?;
    let view = ColorView::new(data, width, height, channels).map_err(to_py_err)?;

    let out = if parallel {
        edgefx::apply_par(filter, view)
    } else {
        edgefx::apply(filter, view)
    }
    .map_err(to_py_err)?;
    to_numpy(py, out)
}

/// Apply a named filter to an RGB image.
///
/// Args:
///     image: 3D uint8 numpy array (height x width x 3)
///     filter: filter name, e.g. "left-sobel" (see `filters()`)
///     parallel: split rows across threads (default: False)
///
/// Returns:
///     2D uint8 array; two pixels smaller in each dimension except for
///     "grayscale".
#[pyfunction]
#[pyo3(signature = (image, filter, parallel = false))]
fn apply<'py>(
    py: Python<'py>,
    image: PyReadonlyArray3<'py, u8>,
    filter: &str,
    parallel: bool,
) -> PyResult<Bound<'py, PyArray2<u8>>> {
    let filter: Filter = filter.parse().map_err(to_py_err)?;
    run(py, image, filter, parallel)
}

/// Convert an RGB image to float64 luminance.
#[pyfunction]
fn rgb2gray<'py>(
    py: Python<'py>,
    image: PyReadonlyArray3<'py, u8>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let shape = image.shape();
    let data = image.as_slice()?;
    let view = ColorView::new(data, shape[1], shape[0], shape[2]).map_err(to_py_err)?;
    let gray = edgefx::rgb_to_gray(view).map_err(to_py_err)?;
    to_numpy(py, gray)
}

/// Names of all filters in catalog order.
#[pyfunction]
fn filters() -> Vec<&'static str> {
    Filter::ALL.iter().map(|f| f.name()).collect()
}

macro_rules! filter_fn {
    ($name:ident, $filter:expr) => {
        #[pyfunction]
        fn $name<'py>(
            py: Python<'py>,
            image: PyReadonlyArray3<'py, u8>,
        ) -> PyResult<Bound<'py, PyArray2<u8>>> {
            run(py, image, $filter, false)
        }
    };
}

filter_fn!(left_sobel, Filter::LeftSobel);
filter_fn!(right_sobel, Filter::RightSobel);
filter_fn!(top_sobel, Filter::TopSobel);
filter_fn!(outline, Filter::Outline);
filter_fn!(sharpen, Filter::Sharpen);
filter_fn!(emboss, Filter::Emboss);
filter_fn!(gray_scale, Filter::Grayscale);

/// Python module for edgefx.
#[pymodule]
fn _edgefx(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apply, m)?)?;
    m.add_function(wrap_pyfunction!(rgb2gray, m)?)?;
    m.add_function(wrap_pyfunction!(filters, m)?)?;
    m.add_function(wrap_pyfunction!(left_sobel, m)?)?;
    m.add_function(wrap_pyfunction!(right_sobel, m)?)?;
    m.add_function(wrap_pyfunction!(top_sobel, m)?)?;
    m.add_function(wrap_pyfunction!(outline, m)?)?;
    m.add_function(wrap_pyfunction!(sharpen, m)?)?;
    m.add_function(wrap_pyfunction!(emboss, m)?)?;
    m.add_function(wrap_pyfunction!(gray_scale, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
