use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming a file to log to instead of stderr.
pub const LOG_FILE_ENV: &str = "BULLETIN_LOG";

/// Initialize tracing.
///
/// The filter comes from `RUST_LOG` (default `info`). Output goes to stderr
/// unless `BULLETIN_LOG` names a file, so stdout stays clean for command
/// output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = std::env::var(LOG_FILE_ENV).ok().and_then(|path| {
        match std::fs::File::create(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: Failed to create log file {}: {}", path, e);
                None
            }
        }
    });

    let registry = tracing_subscriber::registry().with(filter);

    match file {
        Some(file) => registry
            .with(
                fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .with_timer(UtcTime::rfc_3339()),
            )
            .init(),
        None => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_timer(UtcTime::rfc_3339()),
            )
            .init(),
    }
}
