//! hybris-context - command line report of a workspace's derived facts.
//!
//! # Usage
//!
//! ```text
//! hybris-context [--debug] [--log-dir DIR] [CONFIG_DIR]
//! ```
//!
//! `CONFIG_DIR` (default `.`) holds `hybris-context.yaml`. The current
//! directory is the workspace root. Environment variables prefixed with
//! `HYBRIS_CONTEXT_` override file values.
//!
//! # Execution Flow
//!
//! 1. Initialize logging (console, plus daily files when `--log-dir` is given)
//! 2. Load the layered workspace configuration
//! 3. Ask the [`ProjectContext`] facade for recognition, staleness and URLs
//! 4. Print the report, warning when the project was imported by an outdated version

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use hybris_context::logging::{LogOptions, setup_logging};
use hybris_context::constants::OUTDATED_IMPORT_WARNING;
use hybris_context::{
    APP_NAME, ConfigManager, NotificationSink, ProjectContext, UnitKind, VERSION, WorkspaceHandle,
};

/// Warnings go to the log, which the console layer shows.
struct LogNotifications;

impl NotificationSink for LogNotifications {
    fn show_warning_message(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Warn about an outdated import of a recognized project. Returns whether it warned.
fn warn_if_import_outdated<N: NotificationSink>(recognized: bool, outdated: bool, sink: &N) -> bool {
    let warn = recognized && outdated;
    if warn {
        sink.show_warning_message(OUTDATED_IMPORT_WARNING);
    }
    warn
}

/// Print the derived facts of a hybris workspace.
#[derive(Debug, Parser)]
#[command(name = "hybris-context", version = VERSION, about, long_about = None)]
struct Args {
    /// Log at debug level
    #[arg(long)]
    debug: bool,

    /// Also write daily rotated log files to this directory
    #[arg(long, value_name = "DIR")]
    log_dir: Option<Utf8PathBuf>,

    /// Directory holding hybris-context.yaml (default: current directory)
    config_dir: Option<Utf8PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _guard = setup_logging(&LogOptions {
        log_dir: args.log_dir.clone(),
        debug_mode: args.debug,
        ..LogOptions::default()
    })?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let root = std::env::current_dir().context("Failed to read current directory")?;
    let root = Utf8PathBuf::try_from(root).context("Workspace path is not valid UTF-8")?;
    let workspace = WorkspaceHandle::new(root)?;

    let manager = ConfigManager::new(args.config_dir.unwrap_or_else(|| Utf8PathBuf::from(".")))?;
    let provider = manager.load_provider()?;
    let context = ProjectContext::new(provider.clone(), provider);

    let recognized = context.is_hybris_project(&workspace);
    let outdated = context.is_outdated_hybris_project(&workspace);

    println!("workspace:            {}", workspace);
    println!("hybris project:       {}", recognized);
    println!(
        "potentially hybris:   {}",
        context.is_potentially_hybris_project(&workspace)
    );
    println!("outdated import:      {}", outdated);
    println!(
        "platform unit:        {}",
        context
            .unit_of_kind(&workspace, UnitKind::Platform)
            .map(|unit| unit.name)
            .unwrap_or_else(|| "-".to_string())
    );
    println!("hybris directory:     {}", context.hybris_directory(&workspace).unwrap_or_default());
    println!("custom directory:     {}", context.custom_directory(&workspace).unwrap_or_default());
    println!("host url:             {}", context.host_url(&workspace, None));
    println!("hac url:              {}", context.host_hac_url(&workspace, None));
    println!("solr url:             {}", context.host_solr_url(&workspace, None));

    warn_if_import_outdated(recognized, outdated, &LogNotifications);

    tracing::info!("Report complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink(RefCell<Vec<String>>);

    impl NotificationSink for RecordingSink {
        fn show_warning_message(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_outdated_import_warning_only_for_recognized_projects() {
        let sink = RecordingSink::default();
        assert!(!warn_if_import_outdated(false, true, &sink));
        assert!(!warn_if_import_outdated(true, false, &sink));
        assert!(sink.0.borrow().is_empty());

        assert!(warn_if_import_outdated(true, true, &sink));
        assert_eq!(*sink.0.borrow(), vec![OUTDATED_IMPORT_WARNING.to_string()]);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["hybris-context"]).unwrap();
        assert!(!args.debug);
        assert!(args.log_dir.is_none());
        assert!(args.config_dir.is_none());
    }

    #[test]
    fn test_args_all_options() {
        let args =
            Args::try_parse_from(["hybris-context", "--debug", "--log-dir", "logs", "conf"]).unwrap();
        assert!(args.debug);
        assert_eq!(args.log_dir, Some(Utf8PathBuf::from("logs")));
        assert_eq!(args.config_dir, Some(Utf8PathBuf::from("conf")));
    }

    #[test]
    fn test_args_rejects_bad_input() {
        assert!(Args::try_parse_from(["hybris-context", "--verbose"]).is_err());
        assert!(Args::try_parse_from(["hybris-context", "--log-dir"]).is_err());
        assert!(Args::try_parse_from(["hybris-context", "a", "b"]).is_err());
    }
}
