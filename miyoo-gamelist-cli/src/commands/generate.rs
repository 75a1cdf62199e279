use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use miyoo_gamelist_lib::settings::load_settings;
use miyoo_gamelist_lib::{build_catalog, preview_catalog, resolve_options};

use crate::cli_types::CatalogArgs;
use crate::commands::print_entry;
use crate::error::CliError;

/// Scan the ROM folder and write its catalog (or just list it on a dry run).
pub(crate) fn run_generate(
    catalog: CatalogArgs,
    extensions: Option<Vec<String>>,
    dry_run: bool,
) -> Result<(), CliError> {
    let options = resolve_options(catalog.into_overrides(extensions), load_settings()?);

    log::info!(
        "Scanning {} ({})",
        options
            .rom_dir
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
        options.extensions.join(", "),
    );

    if dry_run {
        let entries = preview_catalog(&options)?;
        for entry in &entries {
            print_entry(entry);
        }
        log::info!("");
        log::info!(
            "{} {} games would be written to {}",
            "Dry run:".if_supports_color(Stdout, |t| t.yellow()),
            entries.len(),
            options.output_path().display(),
        );
        return Ok(());
    }

    let summary = build_catalog(&options)?;
    for entry in &summary.entries {
        print_entry(entry);
    }
    if summary.entries.is_empty() {
        log::warn!(
            "No files matching {} in {}",
            options.extensions.join(", "),
            options.rom_dir.display(),
        );
    }

    log::info!("");
    log::info!(
        "{} {} of {} entries to {}",
        "Wrote".if_supports_color(Stdout, |t| t.green()),
        summary.entries.len(),
        summary.scanned,
        summary
            .output_path
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );

    Ok(())
}
