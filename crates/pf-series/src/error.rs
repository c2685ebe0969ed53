//! Time-series error type.

use std::path::PathBuf;

use thiserror::Error;

use pf_core::{AreaId, PfError};

/// Errors produced by `pf-series`.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("no N(t) file for measurement area {0}")]
    AreaNotFound(AreaId),

    #[error("no N(t) files to plot")]
    NothingToPlot,

    #[error("no N(t) files in {}", .0.display())]
    NoFiles(PathBuf),

    #[error("{} has {found} column(s); need time and count", .path.display())]
    TooFewColumns { path: PathBuf, found: usize },

    #[error("{} has no file name", .0.display())]
    NoFileName(PathBuf),

    #[error("invalid discovery pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("cannot read directory entry: {0}")]
    Glob(#[from] glob::GlobError),

    #[error(transparent)]
    Core(#[from] PfError),
}

pub type SeriesResult<T> = Result<T, SeriesError>;
