use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::constants::PROP_VALUE_MAX;
use crate::error::{Error, Result};
use crate::ffi::{__system_property_get, __system_property_set};

// system property utilities
pub(crate) fn get_prop(key: &str) -> Option<String> {
    let c_key = CString::new(key).ok()?;
    let mut buffer = vec![0u8; PROP_VALUE_MAX];
    let len = unsafe { __system_property_get(c_key.as_ptr() as *const u8, buffer.as_mut_ptr()) };
    if len > 0 {
        let c_str = unsafe { CStr::from_ptr(buffer.as_ptr() as *const c_char) };
        Some(c_str.to_string_lossy().into_owned())
    } else { None }
}
pub(crate) fn set_prop(key: &str, val: &str) -> Result<()> {
    let property = || Error::Property(key.to_string());
    let c_key = CString::new(key).map_err(|_| property())?;
    let c_val = CString::new(val).map_err(|_| property())?;
    let rc = unsafe { __system_property_set(c_key.as_ptr() as *const u8, c_val.as_ptr() as *const u8) };
    if rc == 0 { Ok(()) } else { Err(property()) }
}

// "true"/"1" and "false"/"0", anything else is unknown
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
