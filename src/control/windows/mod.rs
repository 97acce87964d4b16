//! Windows backend on top of the Service Control Manager.

use log::debug;
use windows::Win32::System::Services::{OpenSCManagerW, SC_MANAGER_CREATE_SERVICE};
use windows::core::PCWSTR;

use crate::error::OsError;
use crate::scm::{DriverService, KernelDriverRegistration, ServiceControlManager};

mod handles;
mod privileges;
mod service_creation;
mod utils;

use handles::{ScManagerHandle, ServiceHandle};
use privileges::check_privileges;
use service_creation::{create_service, delete_service, open_service, start_service, stop_service};
use utils::os_error;

/// Local Service Control Manager opened with `SC_MANAGER_CREATE_SERVICE`.
pub struct PlatformManager(ScManagerHandle);

/// Service opened with `SERVICE_ALL_ACCESS`.
pub struct PlatformService(ServiceHandle);

impl PlatformManager {
    pub(super) fn open() -> Result<Self, OsError> {
        check_privileges();

        let handle = unsafe {
            OpenSCManagerW(PCWSTR::null(), PCWSTR::null(), SC_MANAGER_CREATE_SERVICE)
        }
        .map_err(|e| os_error(&e))?;
        debug!("Opened service control manager");

        Ok(Self(ScManagerHandle(handle)))
    }
}

impl ServiceControlManager for PlatformManager {
    type Service = PlatformService;

    fn create_kernel_driver(
        &self,
        registration: &KernelDriverRegistration<'_>,
    ) -> Result<PlatformService, OsError> {
        create_service(&self.0, registration).map(PlatformService)
    }

    fn open_service(&self, name: &str) -> Result<PlatformService, OsError> {
        open_service(&self.0, name).map(PlatformService)
    }
}

impl DriverService for PlatformService {
    fn start(&self) -> Result<(), OsError> {
        start_service(&self.0)
    }

    fn stop(&self) -> Result<(), OsError> {
        stop_service(&self.0)
    }

    fn delete(&self) -> Result<(), OsError> {
        delete_service(&self.0)
    }
}
