use thiserror::Error;

use miyoo_gamelist_lib::CatalogError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Scan, write, or settings failure from the library
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
