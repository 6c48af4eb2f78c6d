//! Command line arguments and resolved run configuration

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use stylelift_css::Whitelist;

use crate::error::{AppError, AppResult};

/// Move shared CSS rules out of inline <style> blocks into one stylesheet
#[derive(Debug, Parser)]
#[command(name = "stylelift", version)]
#[command(about = "Extract shared inline CSS into the canonical stylesheet")]
pub struct Args {
    /// Site root to scan for HTML files
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Canonical stylesheet; a leading '/' is relative to the root
    #[arg(long, default_value = "/styles.css")]
    pub styles_path: String,

    /// Whitelist of shared base selectors, one per line
    #[arg(long)]
    pub selectors_file: Option<PathBuf>,

    /// Process HTML files in subdirectories too
    #[arg(long)]
    pub recursive: bool,

    /// Compute everything but write nothing
    #[arg(long)]
    pub dry_run: bool,
}

/// Resolved configuration of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub styles_path: PathBuf,
    pub selectors_file: Option<PathBuf>,
    pub recursive: bool,
    pub dry_run: bool,
}

impl Config {
    /// Build a configuration for `root` with the default stylesheet location
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let styles_path = resolve_styles_path(&root, "/styles.css");
        Self {
            root,
            styles_path,
            selectors_file: None,
            recursive: false,
            dry_run: false,
        }
    }

    /// Load the whitelist, falling back to the built-in selectors when no
    /// file is configured or the file does not exist.
    pub fn load_whitelist(&self) -> AppResult<Whitelist> {
        let Some(path) = &self.selectors_file else {
            return Ok(Whitelist::default());
        };
        if !path.exists() {
            log::warn!("Selectors file {} not found, using defaults", path.display());
            return Ok(Whitelist::default());
        }

        let text = read_lossy(path)?;
        let whitelist = Whitelist::parse(&text);
        log::debug!("Loaded {} selectors from {}", whitelist.selectors().len(), path.display());
        Ok(whitelist)
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let styles_path = resolve_styles_path(&args.root, &args.styles_path);
        Self {
            root: args.root,
            styles_path,
            selectors_file: args.selectors_file,
            recursive: args.recursive,
            dry_run: args.dry_run,
        }
    }
}

/// Resolve the stylesheet path against the site root. Site-absolute paths
/// (leading '/') are taken relative to the root as well.
pub fn resolve_styles_path(root: &Path, styles_path: &str) -> PathBuf {
    root.join(styles_path.trim_start_matches('/'))
}

/// Read a file as UTF-8, replacing invalid sequences with U+FFFD
pub fn read_lossy(path: &Path) -> AppResult<String> {
    let bytes = fs::read(path).map_err(|e| AppError::read(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_site_absolute_path() {
        let root = Path::new("site");
        assert_eq!(resolve_styles_path(root, "/styles.css"), root.join("styles.css"));
        assert_eq!(resolve_styles_path(root, "//css/main.css"), root.join("css/main.css"));
    }

    #[test]
    fn test_resolve_relative_path() {
        let root = Path::new("site");
        assert_eq!(resolve_styles_path(root, "css/main.css"), root.join("css/main.css"));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["stylelift"]);
        let config = Config::from(args);
        assert_eq!(config, Config::new("."));
    }

    #[test]
    fn test_args_flags() {
        let args = Args::parse_from([
            "stylelift",
            "--root",
            "site",
            "--styles-path",
            "/assets/site.css",
            "--selectors-file",
            "shared.txt",
            "--recursive",
            "--dry-run",
        ]);
        let config = Config::from(args);
        assert_eq!(config.styles_path, Path::new("site").join("assets/site.css"));
        assert_eq!(config.selectors_file, Some(PathBuf::from("shared.txt")));
        assert!(config.recursive);
        assert!(config.dry_run);
    }

    #[test]
    fn test_missing_selectors_file_uses_defaults() {
        let mut config = Config::new(".");
        config.selectors_file = Some(PathBuf::from("does/not/exist.txt"));
        assert_eq!(config.load_whitelist().unwrap(), Whitelist::default());
    }
}
