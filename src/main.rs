//! edubrowse - Entry Point

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use edubrowse::config::{self, CliOverrides, ResolvedConfig};
use edubrowse::model::{AppError, StoreError};
use edubrowse::report::{self, ReportFormat};
use edubrowse::source::CsvSource;
use edubrowse::state::{replay, startup_actions};
use edubrowse::store::RecordStore;
use edubrowse::view::{self, ColorConfig, SessionOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// edubrowse - search and browse a spreadsheet of educational materials
#[derive(Parser, Debug)]
#[command(name = "edubrowse")]
#[command(version)]
#[command(about = "Search and browse a spreadsheet of educational materials")]
pub struct Args {
    /// CSV export of the materials sheet (falls back to EDUBROWSE_SOURCE or the config file)
    pub file: Option<PathBuf>,

    /// Start with this search text committed
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start with this title opened
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub title: Option<String>,

    /// Start filtered by this tag
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub tag: Option<String>,

    /// Print the matching materials and exit instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Output format for --print
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file);
    let with_env = config::apply_env_overrides(merged);
    Ok(config::apply_cli_overrides(
        with_env,
        CliOverrides {
            source_path: args.file.clone(),
            no_color: args.no_color,
        },
    ))
}

fn run(args: Args) -> Result<(), AppError> {
    let config = resolve_config(&args)?;

    edubrowse::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let path = config.source_path.clone().ok_or_else(|| {
        StoreError::unavailable(
            "(none)",
            format!("no materials table given; pass FILE or set {}", config::SOURCE_ENV_VAR),
        )
    })?;
    let source = CsvSource::new(path);

    let startup = startup_actions(
        args.search.as_deref(),
        args.title.as_deref(),
        args.tag.as_deref(),
    );

    // Loaded before the terminal switches to raw mode, for both modes, so a
    // bad source reports the same way.
    let store = RecordStore::load(&source)?;

    if args.print {
        let navigation = replay(startup);
        let stdout = std::io::stdout();
        report::write_report(&mut stdout.lock(), &store, &navigation, args.format)?;
        return Ok(());
    }

    view::run_session(
        store,
        Box::new(source),
        SessionOptions {
            max_suggestions: config.max_suggestions,
            startup,
            color: ColorConfig::from_env_and_setting(config.color),
        },
    )?;

    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Exiting with error");
            eprintln!("edubrowse: {e}");
            ExitCode::FAILURE
        }
    }
}
