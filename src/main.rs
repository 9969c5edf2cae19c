use clap::Parser;
use roam2org::application::{ConvertOptions, ConvertService};
use roam2org::cli::{format_report, Cli};
use roam2org::error::ConvertError;
use roam2org::infrastructure::{Config, ErrorPolicy, FileSystemNoteStore};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    match run(cli) {
        Ok(true) => std::process::exit(0),
        // Some notes failed under the continue policy
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Returns whether every eligible note was converted
fn run(cli: Cli) -> Result<bool, ConvertError> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    // Command line wins over the config file
    if let Some(policy) = &cli.on_error {
        config.on_error = ErrorPolicy::from_str(policy).map_err(ConvertError::Config)?;
    }

    let store = FileSystemNoteStore::open(cli.dir)?;
    let service = ConvertService::new(store);
    let report = service.execute(&ConvertOptions {
        config,
        dry_run: cli.dry_run,
    })?;

    println!("{}", format_report(&report));

    Ok(!report.has_failures())
}
