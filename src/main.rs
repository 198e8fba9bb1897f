use clap::Parser;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

use userlist::cli;
use userlist::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "userlist", about = "Fetch and list users, newest first")]
struct Args {
    /// User id to leave out of the list
    #[arg(short, long)]
    exclude: Option<String>,

    /// Base URL of the listing API (the `/users` path is appended)
    #[arg(long)]
    base_url: Option<String>,

    /// Keep prompting for ids to exclude after each fetch
    #[arg(short, long)]
    interactive: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Log file path (default: userlist.log in the current directory)
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let overrides = CliOverrides {
        base_url: args.base_url,
        log_file: args.log_file,
        interactive: args.interactive,
        verbose: args.verbose,
    };

    // Initialize file logger before the config is read so its warnings land too.
    // The logger passes everything; log::max_level does the filtering.
    let log_path = config::resolve_log_file(&overrides);
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(&log_path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
            log::set_max_level(config::bootstrap_log_level(&overrides));
        }
        Err(e) => eprintln!("userlist: cannot open log file {}: {e}", log_path.display()),
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to load config: {}", e);
            eprintln!("userlist: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&file_config, &overrides);
    log::set_max_level(resolved.log_level);

    log::info!(
        "userlist starting up: base_url={}, interactive={}",
        resolved.base_url,
        resolved.interactive
    );

    match cli::run(&resolved, args.exclude) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::warn!("Output error: {}", e);
            eprintln!("userlist: {e}");
            ExitCode::FAILURE
        }
    }
}
