//! Service Control Manager seam.
//!
//! The loader only talks to these traits. Releasing a handle is tied to
//! `Drop` on the implementing types, so a manager or service handle is
//! closed on every exit path once it has been obtained.

use std::path::Path;

use crate::error::OsError;

/// Parameters of a kernel-driver service registration.
///
/// The service is always registered as kernel-driver type, demand-start,
/// ignore-on-error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelDriverRegistration<'a> {
    pub service_name: &'a str,
    pub display_name: &'a str,
    pub image_path: &'a Path,
}

/// An open handle to the Service Control Manager. Dropping it closes the handle.
pub trait ServiceControlManager {
    type Service: DriverService;

    /// Register a new kernel-driver service. Fails with
    /// `ERROR_SERVICE_EXISTS` when the name is already taken.
    fn create_kernel_driver(
        &self,
        registration: &KernelDriverRegistration<'_>,
    ) -> Result<Self::Service, OsError>;

    /// Open an already registered service by name.
    fn open_service(&self, name: &str) -> Result<Self::Service, OsError>;
}

/// An open service handle. Dropping it closes the handle but leaves the
/// registration in place.
pub trait DriverService {
    /// Start the service with no arguments.
    fn start(&self) -> Result<(), OsError>;

    /// Send a stop control.
    fn stop(&self) -> Result<(), OsError>;

    /// Mark the service registration for deletion.
    fn delete(&self) -> Result<(), OsError>;
}
