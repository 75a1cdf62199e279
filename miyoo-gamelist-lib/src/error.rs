use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or reading a game list catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The ROM directory is missing or unreadable
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single entry of the directory listing could not be read
    #[error("cannot read entry in {}: {source}", path.display())]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A name matching a recognized extension is not valid UTF-8
    #[error("filename in {} is not valid UTF-8: {name}", folder.display())]
    InvalidFilename { folder: PathBuf, name: String },

    /// Reading an existing file (catalog or settings) failed
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the output file failed
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML rendering or parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Malformed settings file
    #[error("Settings error: {0}")]
    Settings(String),
}

impl CatalogError {
    pub fn xml(msg: impl Into<String>) -> Self {
        Self::Xml(msg.into())
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
