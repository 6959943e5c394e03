//! Logging bootstrap for dirlist front ends.
//!
//! Installs a `tracing` subscriber with two sinks: a rolling, append-only file under the user's
//! data directory and a stderr console layer. `log` records from dependencies are bridged into
//! `tracing`. Call [`init`] once at startup; repeated calls hand back the first handle.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::SystemTime;

use anyhow::{Context, Result};
use tracing_appender::rolling::Rotation;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, util::SubscriberInitExt};

/// Environment variables consulted (in order) for a filter directive.
const ENV_FILTER_VARS: [&str; 2] = ["DIRLIST_LOG", "RUST_LOG"];

static LOG_HANDLE: OnceLock<LogHandle> = OnceLock::new();

pub use tracing_subscriber::filter::LevelFilter as LogLevel;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LogRolling {
    Hourly,
    Daily,
    /// Single append-only file.
    Never,
}

impl LogRolling {
    fn rotation(self) -> Rotation {
        match self {
            LogRolling::Hourly => Rotation::HOURLY,
            LogRolling::Daily => Rotation::DAILY,
            LogRolling::Never => Rotation::NEVER,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding the rolling log files.
    pub directory: PathBuf,
    /// File name prefix; the suffix is always `.log`.
    pub file_prefix: String,
    /// Rolled files to keep. `None` disables pruning.
    pub retention: Option<usize>,
    pub file_level: LevelFilter,
    pub console_level: LevelFilter,
    /// Forward `log` crate records into `tracing`.
    pub capture_log: bool,
    /// Directive such as `dirlist_core=debug`; falls back to `DIRLIST_LOG` / `RUST_LOG`.
    pub env_filter: Option<String>,
    pub rolling: LogRolling,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            file_prefix: "dirlist".to_string(),
            retention: Some(7),
            file_level: LevelFilter::DEBUG,
            console_level: LevelFilter::WARN,
            capture_log: true,
            env_filter: env_directive(),
            rolling: LogRolling::Daily,
        }
    }
}

impl LogConfig {
    pub fn with_directory<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.directory = path.into();
        self
    }

    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn with_console_level(mut self, level: LevelFilter) -> Self {
        self.console_level = level;
        self
    }

    /// Overrides any directive picked up from the environment.
    pub fn with_env_filter<S: Into<String>>(mut self, directive: S) -> Self {
        self.env_filter = Some(directive.into());
        self
    }

    pub fn with_rolling(mut self, rolling: LogRolling) -> Self {
        self.rolling = rolling;
        self
    }
}

/// Keeps the non-blocking file writer alive; logs are flushed when it drops.
#[derive(Debug)]
pub struct LogHandle {
    _guard: tracing_appender::non_blocking::WorkerGuard,
    directory: PathBuf,
    file_prefix: String,
}

impl LogHandle {
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn file_prefix(&self) -> &str {
        &self.file_prefix
    }
}

/// Install the global subscriber. The first call wins; later configurations are ignored.
pub fn init(config: LogConfig) -> Result<&'static LogHandle> {
    if let Some(handle) = LOG_HANDLE.get() {
        return Ok(handle);
    }

    let handle = setup(config)?;
    let _ = LOG_HANDLE.set(handle);
    Ok(LOG_HANDLE.get().expect("log handle initialised"))
}

fn setup(config: LogConfig) -> Result<LogHandle> {
    if config.capture_log {
        let max_level = config.file_level.max(config.console_level);
        let _ = tracing_log::LogTracer::builder().with_max_level(as_log_level(max_level)).init();
    }

    fs::create_dir_all(&config.directory)
        .with_context(|| format!("creating log directory at {}", config.directory.display()))?;

    if let Some(retention) = config.retention.filter(|r| *r > 0) {
        prune_old_logs(&config.directory, &config.file_prefix, retention)
            .context("applying log retention policy")?;
    }

    let appender = tracing_appender::rolling::Builder::new()
        .rotation(config.rolling.rotation())
        .filename_prefix(&config.file_prefix)
        .filename_suffix("log")
        .build(&config.directory)
        .context("creating rolling log appender")?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let directive = config
        .env_filter
        .or_else(env_directive)
        .unwrap_or_else(|| if cfg!(debug_assertions) { "debug" } else { "info" }.to_string());
    let env_filter = EnvFilter::try_new(directive).context("parsing env filter directive")?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(file_writer)
        .with_target(true)
        .with_filter(config.file_level);
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_filter(config.console_level);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    Ok(LogHandle { _guard: guard, directory: config.directory, file_prefix: config.file_prefix })
}

fn env_directive() -> Option<String> {
    ENV_FILTER_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .filter(|directive| !directive.trim().is_empty())
}

fn as_log_level(level: LevelFilter) -> log::LevelFilter {
    match level {
        LevelFilter::OFF => log::LevelFilter::Off,
        LevelFilter::ERROR => log::LevelFilter::Error,
        LevelFilter::WARN => log::LevelFilter::Warn,
        LevelFilter::INFO => log::LevelFilter::Info,
        LevelFilter::DEBUG => log::LevelFilter::Debug,
        LevelFilter::TRACE => log::LevelFilter::Trace,
    }
}

/// Remove the oldest `prefix*` files so at most `retention` remain.
fn prune_old_logs(dir: &Path, prefix: &str, retention: usize) -> Result<()> {
    let mut logs: Vec<(PathBuf, SystemTime)> = fs::read_dir(dir)
        .with_context(|| format!("reading log directory at {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| matches_prefix(&entry.path(), prefix))
        .filter_map(|entry| {
            let meta = entry.metadata().ok().filter(|meta| meta.is_file())?;
            Some((entry.path(), meta.modified().unwrap_or(SystemTime::UNIX_EPOCH)))
        })
        .collect();

    if logs.len() <= retention {
        return Ok(());
    }

    logs.sort_by_key(|(_, modified)| *modified);
    let excess = logs.len() - retention;
    for (path, _) in logs.into_iter().take(excess) {
        let _ = fs::remove_file(&path);
    }

    Ok(())
}

fn matches_prefix(path: &Path, prefix: &str) -> bool {
    path.file_name().and_then(OsStr::to_str).is_some_and(|name| name.starts_with(prefix))
}

fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("org", "Dirlist", "dirlist")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("dirlist-logs"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn prune_keeps_newest_files() {
        let temp = tempfile::tempdir().expect("temp dir");
        let names = ["dirlist.1.log", "dirlist.2.log", "dirlist.3.log", "other.log"];
        for (age, name) in names.into_iter().enumerate() {
            let file = fs::File::create(temp.path().join(name)).unwrap();
            file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(60 * age as u64 + 60))
                .unwrap();
        }

        prune_old_logs(temp.path(), "dirlist", 2).expect("prune");

        let mut remaining: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        remaining.sort();
        assert_eq!(remaining, vec!["dirlist.2.log", "dirlist.3.log", "other.log"]);
    }

    #[test]
    fn builders_override_defaults() {
        let config = LogConfig::default()
            .with_env_filter("dirlist_core=trace")
            .with_rolling(LogRolling::Never);
        assert_eq!(config.env_filter.as_deref(), Some("dirlist_core=trace"));
        assert_eq!(config.rolling.rotation(), Rotation::NEVER);
        assert_eq!(LogRolling::Hourly.rotation(), Rotation::HOURLY);
        assert_eq!(LogConfig::default().rolling.rotation(), Rotation::DAILY);
    }

    #[test]
    fn init_is_idempotent() {
        let temp = tempfile::tempdir().expect("temp dir");
        let config =
            LogConfig::default().with_directory(temp.path().join("logs")).with_prefix("test-log");

        let first = init(config.clone()).expect("init once");
        assert!(first.directory().exists());

        let second = init(config).expect("init twice");
        assert!(std::ptr::eq(first, second));
    }
}
