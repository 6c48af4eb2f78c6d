//! Stylelift
//!
//! Moves shared CSS rules out of the inline `<style>` blocks of a site's
//! HTML pages into its canonical stylesheet.

mod config;
mod discover;
mod error;
mod run;

pub use config::{read_lossy, resolve_styles_path, Args, Config};
pub use discover::html_files;
pub use error::{AppError, AppResult};
pub use run::{run, RunSummary};
