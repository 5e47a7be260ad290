use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Where and how much to log.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Directory for daily rotated log files. `None` disables file output.
    pub log_dir: Option<Utf8PathBuf>,
    /// Prefix for log file names.
    pub log_prefix: String,
    /// Debug level instead of info.
    pub debug_mode: bool,
    /// Also log to the console.
    pub console_output: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            log_dir: None,
            log_prefix: "hybris-context".to_string(),
            debug_mode: false,
            console_output: true,
        }
    }
}

impl LogOptions {
    fn filter(&self) -> EnvFilter {
        if self.debug_mode {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    }
}

/// Install the global tracing subscriber.
///
/// # Arguments
/// * `options` - Log directory, file prefix, level and console switch
///
/// # Errors
/// Fails if the log directory cannot be created or a global subscriber is
/// already installed.
///
/// # Returns
/// A guard that must be held for the duration of the program to keep file
/// logging active, or `None` when file output is disabled.
pub fn setup_logging(options: &LogOptions) -> Result<Option<WorkerGuard>> {
    let mut layers = Vec::new();
    let mut guard = None;

    if let Some(log_dir) = &options.log_dir {
        if !log_dir.exists() {
            fs::create_dir_all(log_dir)
                .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
        }

        let file_appender = rolling::daily(log_dir, &options.log_prefix);
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(worker_guard);

        layers.push(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false) // No ANSI codes in log files
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .boxed(),
        );
    }

    if options.console_output {
        layers.push(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(false)
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(options.filter())
        .with(layers)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(
        "Logging initialized: dir={:?}, prefix={}, debug={}, console={}",
        options.log_dir,
        options.log_prefix,
        options.debug_mode,
        options.console_output
    );

    Ok(guard)
}
