use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use drvload::{LoadError, LoaderConfig};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Load a kernel driver as a temporary demand-start service",
    after_help = "Options must come before DRIVER_PATH; anything after SERVICE_NAME is ignored."
)]
pub struct Args {
    /// Path to the driver image (.sys)
    pub driver_path: PathBuf,

    /// Service name (defaults to DRIVER_PATH)
    #[arg(allow_hyphen_values = true)]
    pub service_name: Option<String>,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<OsString>,

    /// Display name (defaults to SERVICE_NAME)
    #[arg(long)]
    pub display_name: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Parse the command line. `--help` and `--version` print and exit 0;
    /// every other argument error becomes a usage failure.
    pub fn parse_or_usage() -> Result<Self, LoadError> {
        Self::parse_from_or_usage(std::env::args_os())
    }

    pub fn parse_from_or_usage<I, T>(argv: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(argv) {
            Ok(args) => Ok(args),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => Err(LoadError::Usage(e.render().to_string().trim_end().to_owned())),
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }

    pub fn into_config(self) -> LoaderConfig {
        LoaderConfig::new(self.driver_path, self.service_name, self.display_name)
    }
}
