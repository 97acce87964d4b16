//! Service creation and control operations.

use std::mem;

use windows::Win32::System::Services::{
    ControlService, CreateServiceW, DeleteService, OpenServiceW, SERVICE_ALL_ACCESS,
    SERVICE_CONTROL_STOP, SERVICE_DEMAND_START, SERVICE_ERROR_IGNORE, SERVICE_KERNEL_DRIVER,
    SERVICE_STATUS, StartServiceW,
};
use windows::core::PCWSTR;

use super::handles::{ScManagerHandle, ServiceHandle};
use super::utils::{os_error, to_wide};
use crate::error::OsError;
use crate::scm::KernelDriverRegistration;

/// Register a demand-start kernel driver service
pub(super) fn create_service(
    sc_manager: &ScManagerHandle,
    registration: &KernelDriverRegistration<'_>,
) -> Result<ServiceHandle, OsError> {
    let service_name = to_wide(registration.service_name);
    let display_name = to_wide(registration.display_name);
    let binary_path = to_wide(registration.image_path);

    let handle = unsafe {
        CreateServiceW(
            sc_manager.handle(),
            PCWSTR(service_name.as_ptr()),
            PCWSTR(display_name.as_ptr()),
            SERVICE_ALL_ACCESS,
            SERVICE_KERNEL_DRIVER,
            SERVICE_DEMAND_START,
            SERVICE_ERROR_IGNORE,
            PCWSTR(binary_path.as_ptr()),
            PCWSTR::null(),
            None,
            PCWSTR::null(),
            PCWSTR::null(),
            PCWSTR::null(),
        )
    }
    .map_err(|e| os_error(&e))?;

    Ok(ServiceHandle(handle))
}

/// Open an existing service by name
pub(super) fn open_service(
    sc_manager: &ScManagerHandle,
    name: &str,
) -> Result<ServiceHandle, OsError> {
    let service_name = to_wide(name);

    let handle = unsafe {
        OpenServiceW(
            sc_manager.handle(),
            PCWSTR(service_name.as_ptr()),
            SERVICE_ALL_ACCESS,
        )
    }
    .map_err(|e| os_error(&e))?;

    Ok(ServiceHandle(handle))
}

/// Start the service
pub(super) fn start_service(service: &ServiceHandle) -> Result<(), OsError> {
    unsafe { StartServiceW(service.handle(), None) }.map_err(|e| os_error(&e))
}

/// Stop the service
pub(super) fn stop_service(service: &ServiceHandle) -> Result<(), OsError> {
    let mut service_status: SERVICE_STATUS = unsafe { mem::zeroed() };

    unsafe { ControlService(service.handle(), SERVICE_CONTROL_STOP, &mut service_status) }
        .map_err(|e| os_error(&e))
}

/// Mark the service for deletion
pub(super) fn delete_service(service: &ServiceHandle) -> Result<(), OsError> {
    unsafe { DeleteService(service.handle()) }.map_err(|e| os_error(&e))
}
