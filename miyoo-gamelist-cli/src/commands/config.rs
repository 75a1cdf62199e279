use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use miyoo_gamelist_lib::settings::{
    load_settings, load_settings_string, save_rom_dir, settings_path,
};
use miyoo_gamelist_lib::{Overrides, resolve_options};

use crate::error::CliError;

/// Show the settings file and the options a run would use.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "miyoo-gamelist Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if let Some(contents) = load_settings_string()? {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
        log::info!("");
        for line in contents.lines() {
            log::info!("    {}", line);
        }
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let options = resolve_options(Overrides::default(), load_settings()?);
    log::info!("  ROM folder:  {}", options.rom_dir.display());
    log::info!("  Catalog:     {}", options.output_path().display());
    log::info!("  Extensions:  {}", options.extensions.join(", "));

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}

/// Save the default ROM folder.
pub(crate) fn run_config_set_root(path: &Path) -> Result<(), CliError> {
    if !path.is_dir() {
        return Err(CliError::config(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    save_rom_dir(Some(path))?;
    log::info!(
        "ROM folder set to {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Remove the saved ROM folder.
pub(crate) fn run_config_clear_root() -> Result<(), CliError> {
    save_rom_dir(None)?;
    log::info!("ROM folder cleared");
    Ok(())
}
