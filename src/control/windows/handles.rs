//! Owned Win32 handles. Each wrapper closes its handle when dropped, which is
//! what orders cleanup in the loader: the service handle goes before the
//! manager handle it was opened from.

use log::warn;
use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Services::{CloseServiceHandle, SC_HANDLE};

use super::utils::os_error;
use crate::error::OsError;

/// Handle returned by `OpenSCManagerW`.
pub(super) struct ScManagerHandle(pub(super) SC_HANDLE);

impl ScManagerHandle {
    pub(super) fn handle(&self) -> SC_HANDLE {
        self.0
    }
}

impl Drop for ScManagerHandle {
    fn drop(&mut self) {
        if let Err(e) = close_service_handle(self.0) {
            warn!("Failed to close service control manager handle: {e}");
        }
    }
}

/// Handle returned by `CreateServiceW` or `OpenServiceW`.
pub(super) struct ServiceHandle(pub(super) SC_HANDLE);

impl ServiceHandle {
    pub(super) fn handle(&self) -> SC_HANDLE {
        self.0
    }
}

impl Drop for ServiceHandle {
    fn drop(&mut self) {
        if let Err(e) = close_service_handle(self.0) {
            warn!("Failed to close service handle: {e}");
        }
    }
}

/// Null handles were never opened and are skipped.
fn close_service_handle(handle: SC_HANDLE) -> Result<(), OsError> {
    if handle.is_invalid() {
        return Ok(());
    }
    unsafe { CloseServiceHandle(handle) }.map_err(|e| os_error(&e))
}

/// Process token opened for the elevation query.
pub(super) struct TokenHandle(pub(super) HANDLE);

impl TokenHandle {
    pub(super) fn handle(&self) -> HANDLE {
        self.0
    }
}

impl Drop for TokenHandle {
    fn drop(&mut self) {
        if !self.0.is_invalid() {
            unsafe {
                let _ = CloseHandle(self.0);
            }
        }
    }
}
