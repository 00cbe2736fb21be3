//! Database configuration for runtime backend selection.

use std::error::Error;
use std::path::PathBuf;

use crate::db::{CozoBackend, DatabaseBackend};

/// Configuration for database backend selection.
///
/// Parsed from the `--db` CLI argument, which accepts a plain file path, a
/// `sqlite://` URL, or `:memory:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    /// Local CozoDB with SQLite storage (default).
    Sqlite { path: PathBuf },

    /// Local CozoDB with in-memory storage.
    Mem,
}

impl DatabaseConfig {
    /// Parse from a connection URL or file path.
    ///
    /// Supported formats:
    /// - `./path/to/db.sqlite` or `/absolute/path` → Sqlite
    /// - `sqlite://path/to/db` → Sqlite
    /// - `:memory:` → Mem
    pub fn from_url(url: &str) -> Result<Self, Box<dyn Error>> {
        if url == ":memory:" {
            return Ok(Self::Mem);
        }

        if let Some(path) = url.strip_prefix("sqlite://") {
            if path.is_empty() {
                return Err("sqlite:// URL is missing a path".into());
            }
            return Ok(Self::Sqlite {
                path: PathBuf::from(path),
            });
        }

        if url.is_empty() {
            return Err("Database location must not be empty".into());
        }

        // Default: treat as a file path
        Ok(Self::Sqlite {
            path: PathBuf::from(url),
        })
    }

    /// Create a backend instance from this configuration.
    pub fn connect(&self) -> Result<Box<dyn DatabaseBackend>, Box<dyn Error>> {
        let backend = match self {
            Self::Sqlite { path } => Box::new(CozoBackend::open(path)?) as Box<dyn DatabaseBackend>,
            Self::Mem => Box::new(CozoBackend::open_mem()?) as Box<dyn DatabaseBackend>,
        };
        Ok(backend)
    }
}
