use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use miyoo_gamelist_lib::settings::load_settings;
use miyoo_gamelist_lib::{load_gamelist, resolve_options};

use crate::cli_types::CatalogArgs;
use crate::commands::print_entry;
use crate::error::CliError;

pub(crate) fn run_show(catalog: CatalogArgs) -> Result<(), CliError> {
    let options = resolve_options(catalog.into_overrides(None), load_settings()?);
    let path = options.output_path();
    let entries = load_gamelist(&path)?;

    log::info!(
        "{}:",
        path.display().if_supports_color(Stdout, |t| t.bold()),
    );
    for entry in &entries {
        print_entry(entry);
    }
    log::info!("");
    log::info!("{} games", entries.len());

    Ok(())
}
