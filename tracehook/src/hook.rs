//! Interpreter hook registration
//!
//! This module wraps `PyEval_SetTrace` and `PyEval_SetProfile`, the
//! interpreter's two hook-registration entry points. Each guards a single
//! slot in the calling thread's interpreter state: installing a callback
//! replaces whatever was there, and clearing an empty slot is a no-op. The
//! interpreter serializes both operations with the GIL and manages the
//! reference count of the context object; the shim adds no locking, no
//! validation, and no state of its own.
//!
//! The trace slot delivers `PyTrace_CALL`, `PyTrace_RETURN`, `PyTrace_LINE`,
//! and `PyTrace_EXCEPTION` events. The profile slot delivers call and return
//! events plus `PyTrace_C_CALL`/`PyTrace_C_RETURN`/`PyTrace_C_EXCEPTION`,
//! and never line events.

use std::ptr;

use pyo3_ffi::{self as ffi, Py_tracefunc};

/// Install `callback` as the trace function for the calling thread's
/// interpreter state.
///
/// The interpreter invokes the callback with `context` as its first argument
/// on every traced event until the slot is cleared or overwritten. A previous
/// registration is replaced silently; last writer wins.
///
/// # Safety
///
/// The caller must hold the GIL. `callback` must follow the [`Py_tracefunc`]
/// contract for the running interpreter version, and `context` must be a
/// valid object pointer or null. Neither is checked here; a mismatch is
/// undefined behavior at the first traced event.
pub unsafe fn set_trace(callback: Py_tracefunc, context: *mut ffi::PyObject) {
    tracing::debug!("installing trace hook, context {:p}", context);
    unsafe { ffi::PyEval_SetTrace(Some(callback), context) }
}

/// Clear the calling thread's trace slot.
///
/// Equivalent to installing a null callback with null context. Idempotent:
/// clearing an empty slot does nothing and signals nothing.
///
/// # Safety
///
/// The caller must hold the GIL.
pub unsafe fn unset_trace() {
    tracing::debug!("removing trace hook");
    unsafe { ffi::PyEval_SetTrace(None, ptr::null_mut()) }
}

/// Install `callback` as the profile function for the calling thread's
/// interpreter state.
///
/// Same contract as [`set_trace`], against the profile slot. The two slots
/// are independent and may be occupied simultaneously.
///
/// # Safety
///
/// The caller must hold the GIL. `callback` must follow the [`Py_tracefunc`]
/// contract and `context` must be a valid object pointer or null; neither is
/// checked.
pub unsafe fn set_profile(callback: Py_tracefunc, context: *mut ffi::PyObject) {
    tracing::debug!("installing profile hook, context {:p}", context);
    unsafe { ffi::PyEval_SetProfile(Some(callback), context) }
}

/// Clear the calling thread's profile slot. Idempotent.
///
/// # Safety
///
/// The caller must hold the GIL.
pub unsafe fn unset_profile() {
    tracing::debug!("removing profile hook");
    unsafe { ffi::PyEval_SetProfile(None, ptr::null_mut()) }
}
