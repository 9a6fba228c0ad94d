//! Trace-hook shim for the CPython interpreter
//!
//! This crate wraps the interpreter's trace and profile hook registration so
//! a profiling engine can install its callback without touching the
//! version-specific `Py_tracefunc` machinery directly.
//!
//! # Overview
//!
//! The shim exposes five operations and nothing else:
//!
//! * [`set_trace`] / [`unset_trace`] — occupy or clear the trace slot, which
//!   delivers call, return, line, and exception events
//! * [`set_profile`] / [`unset_profile`] — occupy or clear the profile slot,
//!   which delivers call, return, and C-call events without line overhead
//! * [`i64_handle`] — reinterpret a 64-bit integer's storage as an opaque
//!   handle for a downstream encoder
//!
//! Each slot holds at most one registration at a time; installing a new
//! callback silently replaces the previous one. The same surface is exported
//! with a C ABI in [`capi`] for engines built against a stable
//! foreign-function interface, and the crate builds as a `cdylib` for that
//! purpose.
//!
//! # Usage
//!
//! ```no_run
//! use std::os::raw::c_int;
//!
//! use pyo3::Python;
//! use pyo3_ffi as ffi;
//!
//! extern "C" fn on_event(
//!     context: *mut ffi::PyObject,
//!     frame: *mut ffi::PyFrameObject,
//!     what: c_int,
//!     arg: *mut ffi::PyObject,
//! ) -> c_int {
//!     let _ = (context, frame, what, arg);
//!     0
//! }
//!
//! Python::attach(|_py| unsafe {
//!     tracehook::set_trace(on_event, std::ptr::null_mut());
//!     // ... run the code to be traced ...
//!     tracehook::unset_trace();
//! });
//! ```
//!
//! # Limitations
//!
//! * Registration affects the calling thread's interpreter state, serialized
//!   by the GIL. Hooking additional threads is the engine's responsibility.
//! * Nothing is validated. A callback that does not follow the
//!   [`Py_tracefunc`] contract is undefined behavior at the first traced
//!   event, caught only by whatever protections the interpreter itself has.

pub mod capi;
pub mod handle;
pub mod hook;

pub use handle::i64_handle;
pub use hook::{set_profile, set_trace, unset_profile, unset_trace};

// Interpreter callback type and event codes, re-exported so consumers can
// decode the `what` argument without their own pyo3-ffi dependency.
pub use pyo3_ffi::{
    PyTrace_C_CALL, PyTrace_C_EXCEPTION, PyTrace_C_RETURN, PyTrace_CALL, PyTrace_EXCEPTION,
    PyTrace_LINE, PyTrace_OPCODE, PyTrace_RETURN, Py_tracefunc,
};
