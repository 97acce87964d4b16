//! Wide-string and error-code helpers for Win32 calls.

use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;

use crate::error::OsError;

/// NUL-terminated UTF-16 copy of `s`.
#[inline]
pub(super) fn to_wide(s: impl AsRef<OsStr>) -> Vec<u16> {
    s.as_ref().encode_wide().chain(std::iter::once(0)).collect()
}

/// Recover the Win32 error code from a `windows` crate error.
///
/// Failed calls surface as `HRESULT_FROM_WIN32(code)`; anything outside the
/// Win32 facility is passed through as the raw HRESULT.
pub(super) fn os_error(err: &windows::core::Error) -> OsError {
    let hr = err.code().0 as u32;
    if hr & 0xFFFF_0000 == 0x8007_0000 {
        OsError::new(hr & 0xFFFF)
    } else {
        OsError::new(hr)
    }
}
