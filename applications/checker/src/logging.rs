/// Console and result-log tracing setup
use crate::config::{parse_level, LogSettings};
use crate::error::{CheckerError, Result};
use std::fs::File;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Build the two-sink subscriber.
///
/// The console layer writes to stdout at `console_level`, or whatever
/// `RUST_LOG` asks for. The file layer writes plain text to `log_file` at
/// `file_level`, independent of `RUST_LOG`.
pub fn subscriber(
    settings: &LogSettings,
    log_file: File,
) -> Result<impl Subscriber + Send + Sync + 'static> {
    let console_filter = EnvFilter::builder()
        .with_default_directive(parse_level(&settings.console_level)?.into())
        .from_env_lossy();
    let file_level = parse_level(&settings.file_level)?;

    Ok(tracing_subscriber::registry()
        .with(fmt::layer().with_filter(console_filter))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .with_filter(file_level),
        ))
}

/// Create (truncating) the result log and install the global subscriber
pub fn init(settings: &LogSettings) -> Result<()> {
    let log_file = File::create(&settings.file).map_err(|e| {
        CheckerError::Logging(format!(
            "cannot create log file {}: {e}",
            settings.file.display()
        ))
    })?;

    subscriber(settings, log_file)?
        .try_init()
        .map_err(|e| CheckerError::Logging(e.to_string()))
}
