//! Platform service control - delegates to the OS-native service manager
//!
//! - Windows: Service Control Manager (Windows API)
//! - elsewhere: no service manager; opening one always fails

use crate::error::OsError;

cfg_if::cfg_if! {
    if #[cfg(target_os = "windows")] {
        mod windows;
        use self::windows as platform;
    } else {
        mod unsupported;
        use self::unsupported as platform;
    }
}

pub use platform::PlatformManager;

/// Open the local service manager with rights to create services.
pub fn open_manager() -> Result<PlatformManager, OsError> {
    PlatformManager::open()
}
