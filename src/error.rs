//! Error types for the driver loader.

use std::path::PathBuf;

/// `ERROR_NOT_SUPPORTED`
pub const ERROR_NOT_SUPPORTED: u32 = 0x32;

/// `ERROR_SERVICE_EXISTS`
pub const ERROR_SERVICE_EXISTS: u32 = 0x431;

/// Raw Win32 error code reported by a Service Control Manager call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("os error {code:#x}")]
pub struct OsError {
    code: u32,
}

impl OsError {
    #[inline]
    pub const fn new(code: u32) -> Self {
        Self { code }
    }

    #[inline]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// The service name is already registered with the SCM.
    #[inline]
    pub const fn is_service_exists(&self) -> bool {
        self.code == ERROR_SERVICE_EXISTS
    }
}

/// Every way a load can fail. All of them end the process with exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{0}")]
    Usage(String),

    #[error("Driver does not exist at path {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to open handle to service control manager ({0})")]
    ManagerUnavailable(#[source] OsError),

    #[error("Failed to create service for driver with path {} ({source})", .path.display())]
    RegistrationFailed {
        path: PathBuf,
        #[source]
        source: OsError,
    },

    #[error("Failed to open existing service {name} ({source})")]
    OpenExistingFailed {
        name: String,
        #[source]
        source: OsError,
    },

    #[error("Failed to start service for driver with path {} ({source})", .path.display())]
    StartFailed {
        path: PathBuf,
        #[source]
        source: OsError,
    },
}
