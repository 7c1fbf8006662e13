use crate::{APP_NAME, VERSION};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "debug";

/// Installs the global subscriber: every event goes to `path` (appended,
/// never truncated) and, when `verbose` is set, info and above also go to stderr.
/// The start message is the first event of every run.
pub fn initialize(path: &Path, verbose: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .with_filter(env_filter);

    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_filter(LevelFilter::INFO)
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to set tracing subscriber")?;

    info!("Starting {} v{}", APP_NAME, VERSION);

    Ok(())
}
