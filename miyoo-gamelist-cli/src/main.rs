//! miyoo-gamelist CLI
//!
//! Command-line interface for generating Miyoo game list catalogs.

mod cli_types;
mod commands;
mod error;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{CatalogArgs, Cli, Commands, ConfigAction};
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let command = cli.command.unwrap_or(Commands::Generate {
        catalog: CatalogArgs::default(),
        extensions: None,
        dry_run: false,
    });

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".if_supports_color(Stderr, |t| t.red()), e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Generate {
            catalog,
            extensions,
            dry_run,
        } => commands::generate::run_generate(catalog, extensions, dry_run),
        Commands::Show { catalog } => commands::show::run_show(catalog),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetRoot { path } => commands::config::run_config_set_root(&path),
            ConfigAction::ClearRoot => commands::config::run_config_clear_root(),
        },
    }
}

/// Route `log` output to stdout. `RUST_LOG` still overrides the level.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        log::LevelFilter::Warn
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout);

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    builder.init();
}
