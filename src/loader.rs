//! Register, start, and tear down a kernel driver service.

use std::io;

use log::{debug, info, warn};

use crate::config::LoaderConfig;
use crate::error::{LoadError, OsError};
use crate::scm::{DriverService, ServiceControlManager};

/// Service registration owned by this run.
///
/// Dropping it stops the service (only if this run started it) and deletes
/// the registration. The service handle itself is closed afterwards when the
/// inner value drops.
pub struct ScopedService<S: DriverService> {
    service: S,
    name: String,
    started: bool,
}

impl<S: DriverService> ScopedService<S> {
    fn new(service: S, name: &str) -> Self {
        Self {
            service,
            name: name.to_owned(),
            started: false,
        }
    }

    fn start(&mut self) -> Result<(), OsError> {
        self.service.start()?;
        self.started = true;
        Ok(())
    }
}

impl<S: DriverService> Drop for ScopedService<S> {
    fn drop(&mut self) {
        if self.started {
            match self.service.stop() {
                Ok(()) => debug!("Stopped service {}", self.name),
                Err(e) => warn!("Failed to stop service {}: {e}", self.name),
            }
        }
        match self.service.delete() {
            Ok(()) => debug!("Deleted service {}", self.name),
            Err(e) => warn!("Failed to delete service {}: {e}", self.name),
        }
    }
}

/// Create the kernel driver service, or open it when it already exists.
pub fn register<M: ServiceControlManager>(
    manager: &M,
    config: &LoaderConfig,
) -> Result<ScopedService<M::Service>, LoadError> {
    let image_path = config.image_path();
    let registration = config.registration(&image_path);
    debug!(
        "Registering service {} for {}",
        registration.service_name,
        image_path.display()
    );

    let service = match manager.create_kernel_driver(&registration) {
        Ok(service) => service,
        Err(e) if e.is_service_exists() => {
            warn!("Service already exists. Opening handle to existing service...");
            manager
                .open_service(&config.service_name)
                .map_err(|source| LoadError::OpenExistingFailed {
                    name: config.service_name.clone(),
                    source,
                })?
        }
        Err(source) => {
            return Err(LoadError::RegistrationFailed {
                path: config.driver_path.clone(),
                source,
            });
        }
    };

    Ok(ScopedService::new(service, &config.service_name))
}

/// Run the whole load sequence.
///
/// `open_manager` is only called once the driver file has been found, and
/// `wait` only once the service is running. Whatever was acquired is
/// released in reverse order before this returns: the service is stopped and
/// deleted, then the manager handle is closed.
pub fn load_driver<M, O, W>(config: &LoaderConfig, open_manager: O, wait: W) -> Result<(), LoadError>
where
    M: ServiceControlManager,
    O: FnOnce() -> Result<M, OsError>,
    W: FnOnce() -> io::Result<()>,
{
    config.ensure_driver_exists()?;

    let manager = open_manager().map_err(LoadError::ManagerUnavailable)?;
    let mut service = register(&manager, config)?;

    service.start().map_err(|source| LoadError::StartFailed {
        path: config.driver_path.clone(),
        source,
    })?;
    info!("Service {} started", config.service_name);

    if let Err(e) = wait() {
        warn!("Failed to read operator input: {e}");
    }

    drop(service);
    drop(manager);
    Ok(())
}
