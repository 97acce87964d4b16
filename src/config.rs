use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::scm::KernelDriverRegistration;

/// Resolved loader settings (mirrors the command line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub driver_path: PathBuf,
    pub service_name: String,
    pub display_name: String,
}

impl LoaderConfig {
    /// Service and display name default to the driver path as given.
    pub fn new(
        driver_path: impl Into<PathBuf>,
        service_name: Option<String>,
        display_name: Option<String>,
    ) -> Self {
        let driver_path = driver_path.into();
        let service_name =
            service_name.unwrap_or_else(|| driver_path.to_string_lossy().into_owned());
        let display_name = display_name.unwrap_or_else(|| service_name.clone());

        Self {
            driver_path,
            service_name,
            display_name,
        }
    }

    /// Fails with `NotFound` unless the driver path is a regular file.
    pub fn ensure_driver_exists(&self) -> Result<(), LoadError> {
        if self.driver_path.is_file() {
            Ok(())
        } else {
            Err(LoadError::NotFound(self.driver_path.clone()))
        }
    }

    /// Absolute form of the driver path; the SCM resolves relative kernel
    /// image paths against the system root rather than the working directory.
    pub fn image_path(&self) -> PathBuf {
        std::path::absolute(&self.driver_path).unwrap_or_else(|_| self.driver_path.clone())
    }

    pub fn registration<'a>(&'a self, image_path: &'a Path) -> KernelDriverRegistration<'a> {
        KernelDriverRegistration {
            service_name: &self.service_name,
            display_name: &self.display_name,
            image_path,
        }
    }
}
