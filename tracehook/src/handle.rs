//! Opaque handle for 64-bit values crossing the FFI boundary

use std::ffi::c_void;
use std::ptr;

/// Reinterpret a 64-bit integer's storage as an untyped handle.
///
/// Identity operation: the returned pointer is the address of `value`,
/// unchanged. No conversion, copy, or validation happens here; the helper
/// exists only so a downstream encoder that does not understand the integer
/// width can carry the value across an interface boundary.
///
/// The caller retains ownership of the storage and must keep it alive for as
/// long as the handle is in use. The receiving side is responsible for
/// reading the handle back at 64-bit width.
pub fn i64_handle(value: &i64) -> *mut c_void {
    ptr::from_ref(value).cast_mut().cast()
}
