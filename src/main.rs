use std::fs::File;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lgbrowse::app;
use lgbrowse::core::config::{self, CliOverrides, DEFAULT_ERROR_COLOR, ResolvedConfig};
use lgbrowse::core::error::AppError;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "lgbrowse", about = "Browse CloudWatch Logs log groups in the terminal")]
struct Args {
    /// AWS region (defaults to AWS_REGION, then the config file, then eu-west-1)
    #[arg(short, long)]
    region: Option<String>,

    /// AWS shared-config profile
    #[arg(short, long)]
    profile: Option<String>,

    /// Only list log groups whose name starts with this prefix
    #[arg(long)]
    prefix: Option<String>,

    /// Print names one per line instead of opening the browser
    #[arg(long)]
    plain: bool,

    /// Match the filter case-sensitively
    #[arg(long)]
    case_sensitive: bool,

    /// Config file (default: ~/.lgbrowse/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a debug log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => return fail(&AppError::from(e), DEFAULT_ERROR_COLOR),
    };

    let cli = CliOverrides {
        region: args.region,
        profile: args.profile,
        name_prefix: args.prefix,
        case_sensitive: args.case_sensitive,
        // Piped output gets the plain listing
        plain: args.plain || !std::io::stdout().is_terminal(),
        log_file: args.log_file,
    };
    let resolved = config::resolve(&file_config, &cli);

    init_logging(&resolved);
    log::info!(
        "lgbrowse starting up (region={}, plain={})",
        resolved.region,
        resolved.plain
    );

    match app::run(&resolved).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e, resolved.error_color),
    }
}

/// File logger only: the browser owns the terminal, so nothing goes to stderr.
fn init_logging(config: &ResolvedConfig) {
    let Some(path) = config.log_file.as_deref() else {
        return;
    };

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = parse_level(&config.log_level);

    match File::create(path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(level, log_config, log_file);
        }
        Err(e) => eprintln!("warning: cannot open log file {}: {}", path.display(), e),
    }
}

fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Debug)
}

fn fail(err: &AppError, error_color: u8) -> ExitCode {
    log::error!("{}", err);
    eprintln!("{}", app::error_message(err, error_color));
    ExitCode::from(err.exit_code())
}
