use std::os::raw::{c_char, c_int, c_uchar};

// android ffi imports
#[cfg(target_os = "android")]
extern "C" {
    pub(crate) fn __system_property_get(name: *const c_uchar, value: *mut c_uchar) -> c_int;
    pub(crate) fn __system_property_set(name: *const c_uchar, value: *const c_uchar) -> c_int;
    pub(crate) fn __android_log_print(prio: c_int, tag: *const c_char, fmt: *const c_char, ...) -> c_int;
}

// host builds have no bionic, these keep callers target independent
#[cfg(not(target_os = "android"))]
pub(crate) unsafe fn __system_property_get(_name: *const c_uchar, _value: *mut c_uchar) -> c_int {
    0
}
#[cfg(not(target_os = "android"))]
pub(crate) unsafe fn __system_property_set(_name: *const c_uchar, _value: *const c_uchar) -> c_int {
    -1
}
#[cfg(not(target_os = "android"))]
pub(crate) unsafe fn __android_log_print(_prio: c_int, _tag: *const c_char, _fmt: *const c_char, msg: *const c_char) -> c_int {
    let msg = std::ffi::CStr::from_ptr(msg).to_string_lossy();
    eprintln!("{}", msg);
    0
}
