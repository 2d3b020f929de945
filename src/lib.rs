//! Native extension stub for the `_bootstrap` module.
//!
//! The module deliberately exposes nothing. Shipping a compiled extension in
//! the wheel forces the packaging toolchain to tag it as platform-specific
//! instead of pure Python; that tagging is the crate's entire job.

use pyo3::prelude::*;

/// No-op module; exists only to mark the wheel as binary.
#[pymodule]
fn _bootstrap(_m: &Bound<'_, PyModule>) -> PyResult<()> {
    Ok(())
}
