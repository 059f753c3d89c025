//! Error handling for material dumping

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for material dump operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while importing a model or writing its report
#[derive(Error, Debug)]
pub enum Error {
    /// The importer rejected the file or produced an unusable scene
    #[error("ERROR::Assimp:: {message} ({})", .path.display())]
    Import {
        /// File handed to the importer
        path: PathBuf,
        /// Importer's own diagnostic, or the scene check that failed
        message: String,
    },

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new import error
    pub fn import_failed<P: AsRef<Path>, S: Into<String>>(path: P, message: S) -> Self {
        Self::Import {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_carries_importer_message() {
        let error = Error::import_failed("broken.gltf", "Unable to open file");
        assert!(matches!(error, Error::Import { .. }));
        assert_eq!(
            error.to_string(),
            "ERROR::Assimp:: Unable to open file (broken.gltf)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
        assert_eq!(error.to_string(), "I/O error: pipe closed");
    }
}
