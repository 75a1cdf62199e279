//! Game list catalog builder for Miyoo-style retro handheld frontends.
//!
//! Scans one ROM folder (non-recursively), keeps the files whose names end
//! with a recognized extension, and writes a `miyoogamelist.xml` catalog
//! mapping each file to a display name.

pub mod error;
pub mod gamelist;
pub mod scanner;
pub mod settings;

pub use error::CatalogError;
pub use gamelist::{GAMELIST_FILENAME, load_gamelist, parse_gamelist, render, write_gamelist};
pub use scanner::{GameEntry, build_entries, filter_by_extension, scan};
pub use settings::{CatalogOptions, Overrides, Settings, resolve_options};

use std::ffi::OsString;
use std::path::PathBuf;

/// Outcome of a catalog run.
#[derive(Debug, Clone)]
pub struct CatalogSummary {
    /// Where the catalog was written.
    pub output_path: PathBuf,
    /// Number of directory entries seen before filtering.
    pub scanned: usize,
    /// The entries written, in catalog order.
    pub entries: Vec<GameEntry>,
}

/// Scan, filter, and build entries without writing anything.
pub fn preview_catalog(options: &CatalogOptions) -> Result<Vec<GameEntry>, CatalogError> {
    let names = scan(&options.rom_dir)?;
    collect_entries(names, options)
}

/// Build the catalog for `options.rom_dir` and write it to `options.output_path()`.
///
/// A missing or unreadable folder fails before the output file is created.
pub fn build_catalog(options: &CatalogOptions) -> Result<CatalogSummary, CatalogError> {
    log::debug!(
        "Scanning {} for {}",
        options.rom_dir.display(),
        options.extensions.join(", ")
    );
    let names = scan(&options.rom_dir)?;
    let scanned = names.len();
    let entries = collect_entries(names, options)?;

    let output_path = options.output_path();
    write_gamelist(&entries, &output_path)?;

    Ok(CatalogSummary {
        output_path,
        scanned,
        entries,
    })
}

fn collect_entries(
    names: Vec<OsString>,
    options: &CatalogOptions,
) -> Result<Vec<GameEntry>, CatalogError> {
    let matching = filter_by_extension(&options.rom_dir, names, options.extensions.as_slice())?;
    Ok(build_entries(&matching))
}
