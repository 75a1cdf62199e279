//! Catalog settings (ROM directory, output filename, extensions).
//!
//! Values come from a priority chain: CLI override, then the `[catalog]`
//! table of `~/.config/miyoo-gamelist/settings.toml`, then built-in
//! defaults. Keys that are absent from the file fall through to the default.

use std::path::{Path, PathBuf};

use crate::CatalogError;
use crate::gamelist::GAMELIST_FILENAME;
use crate::scanner::normalize_extensions;

/// ROM folder scanned when nothing else is configured.
pub const DEFAULT_ROM_DIR: &str = "/Volumes/DISK_IMG/Roms/GBA/";

/// Extensions recognized when nothing else is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".z64", ".n64"];

/// Everything a catalog run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    pub rom_dir: PathBuf,
    pub output_name: String,
    pub extensions: Vec<String>,
}

impl CatalogOptions {
    pub fn new(rom_dir: impl Into<PathBuf>) -> Self {
        Self {
            rom_dir: rom_dir.into(),
            ..Self::default()
        }
    }

    pub fn output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    pub fn extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.extensions = normalize_extensions(extensions);
        self
    }

    /// Full path of the catalog file inside the ROM folder.
    pub fn output_path(&self) -> PathBuf {
        self.rom_dir.join(&self.output_name)
    }
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            rom_dir: PathBuf::from(DEFAULT_ROM_DIR),
            output_name: GAMELIST_FILENAME.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Values read from the `[catalog]` table; `None` means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub rom_dir: Option<PathBuf>,
    pub output_name: Option<String>,
    pub extensions: Option<Vec<String>>,
}

/// Per-run overrides, typically from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub rom_dir: Option<PathBuf>,
    pub output_name: Option<String>,
    pub extensions: Option<Vec<String>>,
}

/// Canonical path to the settings file: `~/.config/miyoo-gamelist/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("miyoo-gamelist").join("settings.toml")
}

/// Load settings from the canonical settings file.
pub fn load_settings() -> Result<Settings, CatalogError> {
    load_settings_from(&settings_path())
}

/// Load settings from `path`. A missing file yields empty settings.
pub fn load_settings_from(path: &Path) -> Result<Settings, CatalogError> {
    let Some(doc) = read_settings_doc(path)? else {
        log::debug!("No settings file at {}", path.display());
        return Ok(Settings::default());
    };

    let Some(catalog) = doc.get("catalog") else {
        return Ok(Settings::default());
    };
    let catalog = catalog
        .as_table()
        .ok_or_else(|| CatalogError::settings("[catalog] is not a table"))?;

    let rom_dir = string_key(catalog, "rom_dir")?
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);
    let output_name = string_key(catalog, "output_name")?.filter(|s| !s.is_empty());
    let extensions = match catalog.get("extensions") {
        None => None,
        Some(value) => {
            let items = value
                .as_array()
                .ok_or_else(|| CatalogError::settings("catalog.extensions must be an array"))?;
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                let ext = item.as_str().ok_or_else(|| {
                    CatalogError::settings("catalog.extensions must contain strings")
                })?;
                list.push(ext.to_string());
            }
            Some(normalize_extensions(list.as_slice()))
        }
    };

    Ok(Settings {
        rom_dir,
        output_name,
        extensions,
    })
}

/// Resolve the options for a run: override, then settings, then default.
pub fn resolve_options(overrides: Overrides, settings: Settings) -> CatalogOptions {
    let defaults = CatalogOptions::default();
    CatalogOptions {
        rom_dir: overrides
            .rom_dir
            .or(settings.rom_dir)
            .unwrap_or(defaults.rom_dir),
        output_name: overrides
            .output_name
            .or(settings.output_name)
            .unwrap_or(defaults.output_name),
        extensions: overrides
            .extensions
            .map(|e| normalize_extensions(e.as_slice()))
            .or(settings.extensions)
            .unwrap_or(defaults.extensions),
    }
}

/// Save (or clear) the ROM directory in the canonical settings file.
pub fn save_rom_dir(path: Option<&Path>) -> Result<(), CatalogError> {
    save_rom_dir_to(&settings_path(), path)
}

/// Save (or clear) `catalog.rom_dir` in the settings file at `settings`.
///
/// Uses `toml::Value` for a surgical update so other keys are preserved.
/// An unreadable or malformed file is an error and is left untouched.
pub fn save_rom_dir_to(settings: &Path, path: Option<&Path>) -> Result<(), CatalogError> {
    let mut doc =
        read_settings_doc(settings)?.unwrap_or_else(|| toml::Value::Table(Default::default()));

    let table = doc
        .as_table_mut()
        .ok_or_else(|| CatalogError::settings("settings.toml root is not a table"))?;
    let catalog = table
        .entry("catalog")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let catalog_table = catalog
        .as_table_mut()
        .ok_or_else(|| CatalogError::settings("[catalog] is not a table"))?;

    match path {
        Some(p) => {
            catalog_table.insert(
                "rom_dir".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            catalog_table.remove("rom_dir");
        }
    }

    let write_err = |source: std::io::Error| CatalogError::Write {
        path: settings.to_path_buf(),
        source,
    };

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let serialized =
        toml::to_string_pretty(&doc).map_err(|e| CatalogError::settings(e.to_string()))?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized).map_err(write_err)?;
    std::fs::rename(&tmp, settings).map_err(write_err)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Result<Option<String>, CatalogError> {
    load_settings_string_from(&settings_path())
}

/// Pretty-print the settings file at `path`; `None` when it does not exist.
pub fn load_settings_string_from(path: &Path) -> Result<Option<String>, CatalogError> {
    match read_settings_doc(path)? {
        Some(doc) => toml::to_string_pretty(&doc)
            .map(Some)
            .map_err(|e| CatalogError::settings(e.to_string())),
        None => Ok(None),
    }
}

/// Read and parse the settings file. A missing file yields `None`.
fn read_settings_doc(path: &Path) -> Result<Option<toml::Value>, CatalogError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(CatalogError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    contents
        .parse::<toml::Value>()
        .map(Some)
        .map_err(|e| CatalogError::settings(format!("{}: {}", path.display(), e)))
}

fn string_key(table: &toml::Table, key: &str) -> Result<Option<String>, CatalogError> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| CatalogError::settings(format!("catalog.{} must be a string", key))),
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
