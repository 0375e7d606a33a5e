//! Error types for preset and configuration operations.

use std::path::PathBuf;
use thiserror::Error;

use crate::format::FormatError;

/// Errors that can occur during preset and configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Expected config or preset file is missing
    #[error("file not found: '{path}'")]
    NotFound {
        /// Path of the missing file.
        path: PathBuf,
    },

    /// File content does not match the positional line format
    #[error("malformed config '{path}': {source}")]
    Malformed {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// Underlying format error.
        #[source]
        source: FormatError,
    },

    /// Save attempted with an empty or colliding preset name
    #[error("invalid preset name: '{0}'")]
    InvalidName(String),

    /// Named preset does not exist in the catalog
    #[error("unknown preset: '{0}'")]
    UnknownPreset(String),

    /// Band index out of range for the active preset
    #[error("no band at index {index} (preset has {count})")]
    InvalidBand {
        /// Requested band index.
        index: usize,
        /// Number of bands in the preset.
        count: usize,
    },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to delete a file
    #[error("failed to remove file '{path}': {source}")]
    RemoveFile {
        /// Path of the file that could not be deleted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a not-found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::NotFound { path: path.into() }
    }

    /// Create a malformed-config error.
    pub fn malformed(path: impl Into<PathBuf>, source: FormatError) -> Self {
        ConfigError::Malformed {
            path: path.into(),
            source,
        }
    }

    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a remove file error.
    pub fn remove_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::RemoveFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Map an I/O read error, distinguishing "file missing" from other failures.
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(path)
        } else {
            Self::read_file(path, source)
        }
    }
}
