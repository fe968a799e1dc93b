//! Ingestion error taxonomy.
//!
//! Per-field decode failures are not errors (they become `Value::Na`);
//! these variants cover the failures that abort a whole load call.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A failure while reading or decompressing an input file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read (missing, unreadable, permissions).
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file name ends in `.gz` but the content is not valid gzip.
    #[error("'{}' is not valid gzip data: {source}", path.display())]
    Gzip {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// The path of the file that failed to load.
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Io { path, .. } | LoadError::Gzip { path, .. } => path,
        }
    }
}
