//! Load a Windows kernel driver as a temporary demand-start service.
//!
//! The driver is registered with the Service Control Manager, started, kept
//! loaded until the operator releases it, then stopped and deregistered.

pub mod config;
pub mod control;
pub mod error;
pub mod loader;
pub mod scm;

pub use config::LoaderConfig;
pub use error::{LoadError, OsError};
pub use loader::load_driver;
