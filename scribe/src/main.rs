use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use vitae::error::Result;
use vitae::{Settings, Site};

mod flags;

/// Installs the log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u32) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(flags: flags::Scribe) -> Result<PathBuf> {
    let root = flags.root.unwrap_or_else(|| PathBuf::from("."));
    let mut settings = match &flags.config {
        Some(path) => Settings::read(path)?,
        None => Settings::discover(&root)?,
    };

    if let Some(output) = flags.output {
        settings.output = output;
    }

    tracing::debug!("settings: {settings:?}");

    let site = Site::discover(&root, settings)?;
    site.generate(chrono::Local::now().naive_local())
}

pub fn main() -> ExitCode {
    let flags = flags::Scribe::from_env_or_exit();
    init_logging(flags.verbose);

    match run(flags) {
        Ok(path) => {
            println!("Generated: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprint!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
