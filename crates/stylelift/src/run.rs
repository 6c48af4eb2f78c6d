//! One extraction pass over a site

use std::fmt;
use std::fs;
use std::path::Path;

use stylelift_css::{merge_into_stylesheet, Whitelist};
use stylelift_html::extract_from_document;

use crate::config::{read_lossy, Config};
use crate::discover::html_files;
use crate::error::{AppError, AppResult};

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// HTML files scanned
    pub scanned: usize,
    /// HTML files whose content changed
    pub updated: usize,
    /// Moved CSS blocks collected across all files
    pub moved_blocks: usize,
    /// Whether the canonical stylesheet gained new rules
    pub stylesheet_changed: bool,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} HTML files, updated {}, moved CSS blocks: {}",
            self.scanned, self.updated, self.moved_blocks
        )
    }
}

/// Run one extraction pass.
///
/// Every document is rewritten before the stylesheet is read and merged, so
/// the merge sees the moved rules of the whole site at once. With `dry_run`
/// nothing is written.
pub fn run(config: &Config) -> AppResult<RunSummary> {
    let whitelist = config.load_whitelist()?;

    if !config.styles_path.exists() {
        return Err(AppError::StylesheetNotFound {
            path: config.styles_path.clone(),
        });
    }

    let files = html_files(&config.root, config.recursive)?;
    let mut summary = RunSummary {
        scanned: files.len(),
        ..RunSummary::default()
    };
    let mut moved_rules: Vec<String> = Vec::new();

    for file in &files {
        if process_document(file, &whitelist, config.dry_run, &mut moved_rules)? {
            summary.updated += 1;
        }
    }
    summary.moved_blocks = moved_rules.len();

    let styles = read_lossy(&config.styles_path)?;
    let merged = merge_into_stylesheet(&styles, &moved_rules);
    if merged != styles {
        summary.stylesheet_changed = true;
        if config.dry_run {
            log::info!("Would update {}", config.styles_path.display());
        } else {
            fs::write(&config.styles_path, merged)
                .map_err(|e| AppError::write(&config.styles_path, e))?;
            log::info!("Updated {}", config.styles_path.display());
        }
    }

    Ok(summary)
}

/// Extract shared rules from one document, appending them to `moved_rules`.
/// Returns whether the document changed.
fn process_document(
    path: &Path,
    whitelist: &Whitelist,
    dry_run: bool,
    moved_rules: &mut Vec<String>,
) -> AppResult<bool> {
    let original = read_lossy(path)?;
    let extraction = extract_from_document(&original, whitelist);
    let changed = extraction.changed();
    moved_rules.extend(extraction.moved);

    if !changed {
        return Ok(false);
    }
    if dry_run {
        log::info!("Would update {}", path.display());
    } else {
        fs::write(path, extraction.html).map_err(|e| AppError::write(path, e))?;
        log::info!("Updated {}", path.display());
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let summary = RunSummary {
            scanned: 4,
            updated: 2,
            moved_blocks: 3,
            stylesheet_changed: true,
        };
        assert_eq!(
            summary.to_string(),
            "Processed 4 HTML files, updated 2, moved CSS blocks: 3"
        );
    }

    #[test]
    fn test_missing_stylesheet_fails_before_scanning() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, "<style>.btn{a:b}</style>").unwrap();

        let err = run(&Config::new(dir.path())).unwrap_err();
        assert!(matches!(err, AppError::StylesheetNotFound { .. }));
        assert_eq!(fs::read_to_string(&page).unwrap(), "<style>.btn{a:b}</style>");
    }
}
