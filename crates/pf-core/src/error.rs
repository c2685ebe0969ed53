//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `PfError` as one variant
//! via `#[from]`, so name-parsing and table-reading failures bubble up with
//! `?` from any layer.

use std::path::PathBuf;

use thiserror::Error;

/// The top-level error type for `pf-core`.
#[derive(Debug, Error)]
pub enum PfError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("cannot parse file name {name:?}: {reason}")]
    FileName { name: String, reason: String },

    #[error("{}: line {line}: {reason}", .path.display())]
    Table {
        path:   PathBuf,
        line:   usize,
        reason: String,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PfError {
    pub(crate) fn file_name(name: &str, reason: impl Into<String>) -> Self {
        Self::FileName { name: name.to_owned(), reason: reason.into() }
    }
}

/// Shorthand result type for all `pf-*` crates.
pub type PfResult<T> = Result<T, PfError>;
