//! C ABI exports
//!
//! The foreign surface of the shim, mirroring [`crate::hook`] and
//! [`crate::handle`] one-to-one for engines that link (or `dlopen`) this
//! crate as a `cdylib`. The callback crosses the boundary as an untyped
//! pointer and is reinterpreted to the interpreter's trace-function
//! signature without any check, so the caller's interface stays stable
//! across interpreter versions.

use std::ffi::c_void;
use std::mem;

use pyo3_ffi::{self as ffi, Py_tracefunc};

/// Install a trace callback through the C surface.
///
/// # Safety
///
/// The caller must hold the GIL. `callback` must be a non-null function
/// pointer with the `Py_tracefunc` ABI and `context` a valid object pointer
/// or null. Nothing is validated.
#[no_mangle]
pub unsafe extern "C" fn tracehook_set_trace(callback: *mut c_void, context: *mut ffi::PyObject) {
    let callback = unsafe { mem::transmute::<*mut c_void, Py_tracefunc>(callback) };
    unsafe { crate::hook::set_trace(callback, context) }
}

/// Clear the trace slot. Idempotent.
///
/// # Safety
///
/// The caller must hold the GIL.
#[no_mangle]
pub unsafe extern "C" fn tracehook_unset_trace() {
    unsafe { crate::hook::unset_trace() }
}

/// Install a profile callback through the C surface.
///
/// # Safety
///
/// Same contract as [`tracehook_set_trace`].
#[no_mangle]
pub unsafe extern "C" fn tracehook_set_profile(callback: *mut c_void, context: *mut ffi::PyObject) {
    let callback = unsafe { mem::transmute::<*mut c_void, Py_tracefunc>(callback) };
    unsafe { crate::hook::set_profile(callback, context) }
}

/// Clear the profile slot. Idempotent.
///
/// # Safety
///
/// The caller must hold the GIL.
#[no_mangle]
pub unsafe extern "C" fn tracehook_unset_profile() {
    unsafe { crate::hook::unset_profile() }
}

/// Reinterpret 64-bit integer storage as an opaque handle.
///
/// Returns `value` unchanged as an untyped pointer, null included. The
/// storage stays owned by the caller and must outlive the handle.
#[no_mangle]
pub extern "C" fn tracehook_i64_handle(value: *mut i64) -> *mut c_void {
    value.cast()
}

#[cfg(test)]
mod tests {
    use std::os::raw::c_int;
    use std::ptr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::Result;
    use pyo3::prelude::*;
    use pyo3::types::PyDict;

    use super::*;

    #[test]
    fn untyped_pointer_path_installs_and_removes_the_hook() -> Result<()> {
        static EVENTS: AtomicUsize = AtomicUsize::new(0);

        extern "C" fn count(
            _context: *mut ffi::PyObject,
            _frame: *mut ffi::PyFrameObject,
            _what: c_int,
            _arg: *mut ffi::PyObject,
        ) -> c_int {
            EVENTS.fetch_add(1, Ordering::SeqCst);
            0
        }

        Python::attach(|py| -> Result<()> {
            let ns = PyDict::new(py);
            py.run(c"def probe():\n    return None\n", Some(&ns), Some(&ns))?;
            let probe = ns.get_item("probe")?.expect("function should be defined");

            let callback: Py_tracefunc = count;
            unsafe { tracehook_set_trace(callback as *mut c_void, ptr::null_mut()) };
            probe.call0()?;
            unsafe { tracehook_unset_trace() };

            let seen = EVENTS.load(Ordering::SeqCst);
            assert!(seen >= 2, "at least the call and return events expected, got {seen}");

            probe.call0()?;
            assert_eq!(EVENTS.load(Ordering::SeqCst), seen, "cleared hook must not fire");
            Ok(())
        })
    }

    #[test]
    fn c_handle_is_the_storage_address() {
        let mut storage = -7_i64;
        let handle = tracehook_i64_handle(&mut storage);
        assert_eq!(handle as usize, &storage as *const i64 as usize);
        assert_eq!(unsafe { *handle.cast::<i64>() }, -7, "value readable through the handle");
    }

    #[test]
    fn c_handle_passes_null_through() {
        assert!(tracehook_i64_handle(ptr::null_mut()).is_null());
    }
}
