//! Process elevation check.

use std::mem;

use windows::Win32::Foundation::HANDLE;
use windows::Win32::Security::{GetTokenInformation, TOKEN_ELEVATION, TOKEN_QUERY, TokenElevation};
use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

use super::handles::TokenHandle;
use super::utils::os_error;
use crate::error::OsError;

/// Whether the current process token is elevated.
pub(super) fn is_elevated() -> Result<bool, OsError> {
    let mut raw: HANDLE = HANDLE::default();

    unsafe {
        OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &mut raw).map_err(|e| os_error(&e))?;
    }
    let token = TokenHandle(raw);

    let mut elevation = TOKEN_ELEVATION::default();
    let mut return_length: u32 = 0;

    unsafe {
        GetTokenInformation(
            token.handle(),
            TokenElevation,
            Some(&mut elevation as *mut _ as *mut std::ffi::c_void),
            mem::size_of::<TOKEN_ELEVATION>() as u32,
            &mut return_length,
        )
        .map_err(|e| os_error(&e))?;
    }

    Ok(elevation.TokenIsElevated != 0)
}

/// Logs a warning when the process token is not elevated.
pub(super) fn check_privileges() {
    match is_elevated() {
        Ok(true) => {}
        Ok(false) => log::warn!(
            "Process is not elevated; the service control manager will likely deny access"
        ),
        Err(e) => log::debug!("Could not query token elevation: {e}"),
    }
}
