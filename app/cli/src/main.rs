use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dirlist_core::fs::{Lister, Listing};
use dirlist_core::log::{LogConfig, LogLevel, LogRolling};
use dirlist_core::{ListerConfig, SortOptions, SortOrder};
use serde::Serialize;

/// List and classify the entries of a directory.
#[derive(Debug, Parser)]
#[command(name = "dirlist", version, about)]
struct Cli {
    /// Directory to list.
    dir: PathBuf,

    /// Accepted extensions, `|`-delimited (e.g. `sfc|.smc|zip`).
    #[arg(short = 'e', long = "ext")]
    extensions: Option<String>,

    /// Leave subdirectories out of the listing.
    #[arg(long)]
    no_dirs: bool,

    /// Drop archives whose extension is not in the filter.
    #[arg(long)]
    no_compressed: bool,

    /// Ordering applied after enumeration.
    #[arg(long, value_enum)]
    sort: Option<SortArg>,

    /// Interleave directories with files instead of listing them first.
    #[arg(long)]
    mixed: bool,

    /// JSON file with `list` / `sort` defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit JSON instead of text lines.
    #[arg(long)]
    json: bool,

    /// Directory for rolling log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// How often the log file rolls over.
    #[arg(long, value_enum, default_value_t = RollingArg::Daily)]
    log_rolling: RollingArg,

    /// Log at debug level, echoing to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    /// Keep raw enumeration order.
    None,
    Lexical,
    Natural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RollingArg {
    Hourly,
    Daily,
    /// Single append-only file.
    Never,
}

impl From<RollingArg> for LogRolling {
    fn from(arg: RollingArg) -> Self {
        match arg {
            RollingArg::Hourly => LogRolling::Hourly,
            RollingArg::Daily => LogRolling::Daily,
            RollingArg::Never => LogRolling::Never,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    dir: &'a std::path::Path,
    entries: &'a Listing,
}

impl Cli {
    /// Merge command-line flags over the (optional) configuration file.
    fn resolve(&self) -> Result<ListerConfig> {
        let mut config = match &self.config {
            Some(path) => ListerConfig::load(path)?,
            None => ListerConfig::default(),
        };

        if let Some(extensions) = &self.extensions {
            config.list.extensions = Some(extensions.clone());
        }
        if self.no_dirs {
            config.list.include_dirs = false;
        }
        if self.no_compressed {
            config.list.include_compressed = false;
        }

        match self.sort {
            Some(SortArg::None) => config.sort = None,
            Some(SortArg::Lexical) => {
                config.sort.get_or_insert_with(SortOptions::default).order = SortOrder::Lexical;
            }
            Some(SortArg::Natural) => {
                config.sort.get_or_insert_with(SortOptions::default).order = SortOrder::Natural;
            }
            None => {}
        }
        if self.mixed {
            if let Some(sort) = config.sort.as_mut() {
                sort.directories_first = false;
            }
        }

        Ok(config)
    }

    fn log_config(&self) -> LogConfig {
        let mut config = LogConfig::default().with_rolling(self.log_rolling.into());
        if let Some(dir) = &self.log_dir {
            config = config.with_directory(dir);
        }
        if self.verbose {
            config = config.with_env_filter("debug").with_console_level(LogLevel::DEBUG);
        }
        config
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = dirlist_core::log::init(cli.log_config()) {
        eprintln!("failed to initialise logging: {err:#}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(dir = %cli.dir.display(), "listing failed: {err:#}");
            eprintln!("dirlist: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve()?;
    tracing::debug!(?config, "resolved configuration");

    let mut listing = Lister::new().enumerate(&cli.dir, &config.list)?;
    if let Some(sort) = config.sort {
        listing.sort_with(sort);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        let report = Report { dir: &cli.dir, entries: &listing };
        serde_json::to_writer_pretty(&mut out, &report).context("serialising listing")?;
        writeln!(out)?;
    } else {
        write_text(&mut out, &listing)?;
    }
    out.flush()?;
    Ok(())
}

fn write_text(out: &mut impl Write, listing: &Listing) -> io::Result<()> {
    for entry in listing {
        writeln!(out, "{:<7} {}", entry.kind.label(), entry.path.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dirlist").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_sort_directories_first() {
        let config = parse(&["/tmp"]).resolve().unwrap();
        assert_eq!(config, ListerConfig::default());
    }

    #[test]
    fn flags_override_list_options() {
        let config = parse(&["/tmp", "--ext", "sfc|zip", "--no-dirs", "--no-compressed"])
            .resolve()
            .unwrap();
        assert_eq!(config.list.extensions.as_deref(), Some("sfc|zip"));
        assert!(!config.list.include_dirs);
        assert!(!config.list.include_compressed);
    }

    #[test]
    fn sort_flags_map_to_options() {
        assert_eq!(parse(&["/tmp", "--sort", "none"]).resolve().unwrap().sort, None);
        assert_eq!(
            parse(&["/tmp", "--sort", "natural", "--mixed"]).resolve().unwrap().sort,
            Some(SortOptions { directories_first: false, order: SortOrder::Natural })
        );
    }

    #[test]
    fn flags_layer_over_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dirlist.json");
        let json = r#"{ "list": { "extensions": "txt", "includeDirs": false }, "sort": null }"#;
        fs::write(&path, json).unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let config =
            parse(&["/tmp", "--config", &path_arg, "--sort", "lexical"]).resolve().unwrap();
        assert_eq!(config.list.extensions.as_deref(), Some("txt"));
        assert!(!config.list.include_dirs);
        assert_eq!(config.sort, Some(SortOptions::default()));
    }

    #[test]
    fn verbose_raises_filter_and_console_to_debug() {
        let config = parse(&["/tmp", "--verbose"]).log_config();
        assert_eq!(config.env_filter.as_deref(), Some("debug"));
        assert_eq!(config.console_level, LogLevel::DEBUG);

        let quiet = parse(&["/tmp"]).log_config();
        assert_eq!(quiet.console_level, LogLevel::WARN);
    }

    #[test]
    fn log_flags_choose_directory_and_rolling() {
        let config = parse(&["/tmp", "--log-dir", "/var/tmp/dirlist", "--log-rolling", "hourly"])
            .log_config();
        assert_eq!(config.directory, PathBuf::from("/var/tmp/dirlist"));
        assert_eq!(config.rolling, LogRolling::Hourly);
        assert_eq!(parse(&["/tmp"]).log_config().rolling, LogRolling::Daily);
        let never = parse(&["/tmp", "--log-rolling", "never"]).log_config();
        assert_eq!(never.rolling, LogRolling::Never);
    }

    #[test]
    fn text_output_labels_each_kind() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let mut listing = dirlist_core::fs::enumerate(dir.path(), None, true, true).unwrap();
        listing.sort(true);
        let mut buf = Vec::new();
        write_text(&mut buf, &listing).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let labels: Vec<&str> =
            text.lines().map(|line| line.split_whitespace().next().unwrap()).collect();
        assert_eq!(labels, vec!["dir", "file"]);
    }
}
