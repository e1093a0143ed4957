//! Tracing bootstrap
//!
//! Local-time console logging (stderr), plus a daily rolling file when a log
//! directory is configured.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::{ClientError, ClientResult};

const LOG_FILE_PREFIX: &str = "storefront.log";

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Directory for rolling log files
    pub dir: Option<PathBuf>,
    /// Filter directive used when `RUST_LOG` is unset
    pub default_filter: Option<String>,
}

fn default_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,storefront_client=debug,storefront=debug"
    } else {
        "warn,storefront_client=info"
    }
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for as long as file logging should
/// flush; it is `None` when logging to the console only.
pub fn init(config: &LogConfig) -> ClientResult<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.default_filter.as_deref().unwrap_or(default_filter()))
    });

    let console_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .map_err(|e| ClientError::Config(format!("log dir {}: {e}", dir.display())))?;
            let (writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, LOG_FILE_PREFIX));
            let layer = fmt::layer()
                .with_timer(LocalTimer)
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ClientError::Config(format!("tracing already initialized: {e}")))?;

    if let Some(dir) = &config.dir {
        tracing::info!(path = %dir.display(), "file logging enabled");
    }
    Ok(guard)
}
