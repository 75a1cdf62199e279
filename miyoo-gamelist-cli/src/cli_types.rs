//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use miyoo_gamelist_lib::Overrides;

#[derive(Parser)]
#[command(name = "miyoo-gamelist")]
#[command(about = "Generate a miyoogamelist.xml catalog for a ROM folder", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    // Runs `generate` with configured settings when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments that select the ROM folder and catalog file.
#[derive(Args, Clone, Default)]
pub(crate) struct CatalogArgs {
    /// ROM folder to scan (defaults to the configured folder)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Catalog filename written inside the ROM folder
    #[arg(short, long)]
    pub output: Option<String>,
}

impl CatalogArgs {
    pub(crate) fn into_overrides(self, extensions: Option<Vec<String>>) -> Overrides {
        Overrides {
            rom_dir: self.root,
            output_name: self.output,
            extensions,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Scan a ROM folder and write its catalog
    Generate {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Recognized extensions (e.g., .z64,.n64)
        #[arg(short, long, value_delimiter = ',')]
        extensions: Option<Vec<String>>,

        /// Show the entries that would be written without writing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List the entries of an existing catalog
    Show {
        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the resolved options
    Show,

    /// Print the settings file path
    Path,

    /// Save the default ROM folder
    SetRoot {
        /// ROM folder to scan when --root is not given
        path: PathBuf,
    },

    /// Remove the saved ROM folder
    ClearRoot,
}
