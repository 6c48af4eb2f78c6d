//! Run error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Run result type
pub type AppResult<T> = Result<T, AppError>;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Stylesheet not found: {}", path.display())]
    StylesheetNotFound { path: PathBuf },

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to scan directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl AppError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { action: "read", path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { action: "write", path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = AppError::StylesheetNotFound { path: PathBuf::from("site/styles.css") };
        assert_eq!(format!("{}", err), "Stylesheet not found: site/styles.css");
    }

    #[test]
    fn test_io_display() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::write("index.html", source);
        assert_eq!(format!("{}", err), "Failed to write index.html: denied");
    }
}
