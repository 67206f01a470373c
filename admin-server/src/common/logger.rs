//! Logging Infrastructure
//!
//! Console output, pretty in development and JSON when asked for, plus an
//! optional daily rotating JSON file under `LOG_DIR`.

use std::fs;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

use crate::core::config::LogConfig;

/// File name prefix of rotated log files (`admin-server.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "admin-server";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize the global subscriber
///
/// `RUST_LOG` takes precedence over `config.level`.
pub fn init_logger(config: &LogConfig) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let mut layers: Vec<BoxedLayer> = Vec::new();

    if config.json {
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .boxed(),
        );
    } else {
        layers.push(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .boxed(),
        );
    }

    if let Some(dir) = &config.dir {
        fs::create_dir_all(dir)?;
        let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
        layers.push(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::sync::Mutex::new(appender))
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()?;

    Ok(())
}
