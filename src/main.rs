mod cli;

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::Result;
use log::debug;

fn main() -> ExitCode {
    let args = match cli::Args::parse_or_usage() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // stderr only; stdout is reserved for the operator prompt
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(args.log_level())
        .target(env_logger::Target::Stderr)
        .init();

    match real_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn real_main(args: cli::Args) -> Result<()> {
    let config = args.into_config();
    debug!("{config:?}");
    drvload::load_driver(&config, drvload::control::open_manager, wait_for_keypress)?;
    Ok(())
}

/// Prompt on stdout and block until one byte arrives on stdin.
fn wait_for_keypress() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Driver started. Press any key to stop the driver...")?;
    stdout.flush()?;

    let mut byte = [0u8; 1];
    let _read = io::stdin().read(&mut byte)?;
    Ok(())
}
