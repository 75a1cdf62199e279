pub(crate) mod config;
pub(crate) mod generate;
pub(crate) mod show;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use miyoo_gamelist_lib::GameEntry;

/// Print one catalog entry as `  Name  (./File.ext)`.
pub(crate) fn print_entry(entry: &GameEntry) {
    log::info!(
        "  {}  {}",
        entry.name.if_supports_color(Stdout, |t| t.bold()),
        format!("({})", entry.path).if_supports_color(Stdout, |t| t.dimmed()),
    );
}
