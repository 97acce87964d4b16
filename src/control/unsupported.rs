//! Stand-in for hosts without a Windows Service Control Manager.

use log::error;

use crate::error::{ERROR_NOT_SUPPORTED, OsError};
use crate::scm::{DriverService, KernelDriverRegistration, ServiceControlManager};

/// Cannot be constructed; `open` always fails.
pub enum PlatformManager {}

/// Cannot be constructed.
pub enum PlatformService {}

impl PlatformManager {
    pub(super) fn open() -> Result<Self, OsError> {
        error!("Kernel driver services are only available on Windows");
        Err(OsError::new(ERROR_NOT_SUPPORTED))
    }
}

impl ServiceControlManager for PlatformManager {
    type Service = PlatformService;

    fn create_kernel_driver(
        &self,
        _registration: &KernelDriverRegistration<'_>,
    ) -> Result<PlatformService, OsError> {
        match *self {}
    }

    fn open_service(&self, _name: &str) -> Result<PlatformService, OsError> {
        match *self {}
    }
}

impl DriverService for PlatformService {
    fn start(&self) -> Result<(), OsError> {
        match *self {}
    }

    fn stop(&self) -> Result<(), OsError> {
        match *self {}
    }

    fn delete(&self) -> Result<(), OsError> {
        match *self {}
    }
}
