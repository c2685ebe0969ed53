//! Field-pipeline error type.

use std::path::PathBuf;

use thiserror::Error;

use pf_core::{AreaId, FieldKind, FrameIndex, PfError};

/// Errors produced by `pf-field`.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("no {kind} frames for measurement area {area} in {}", .dir.display())]
    NoFrames {
        area: AreaId,
        kind: FieldKind,
        dir:  PathBuf,
    },

    #[error("{0} is derived and has no raster files")]
    Derived(FieldKind),

    #[error("frame axis is empty")]
    EmptyAxis,

    #[error("steady window [{begin}, {end}] contains no available frame")]
    EmptyWindow { begin: FrameIndex, end: FrameIndex },

    #[error("no {kind} frame of window [{begin}, {end}] could be loaded")]
    NothingLoaded {
        kind:  FieldKind,
        begin: FrameIndex,
        end:   FrameIndex,
    },

    #[error("shape mismatch in {origin}: expected {}x{}, found {}x{}", .expected.0, .expected.1, .found.0, .found.1)]
    ShapeMismatch {
        expected: (usize, usize),
        found:    (usize, usize),
        origin:   String,
    },

    #[error("raster file {} holds no values", .0.display())]
    EmptyGrid(PathBuf),

    #[error("grid layout error: {0}")]
    Layout(#[from] ndarray::ShapeError),

    #[error("invalid discovery pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("cannot read directory entry: {0}")]
    Glob(#[from] glob::GlobError),

    #[error(transparent)]
    Core(#[from] PfError),
}

pub type FieldResult<T> = Result<T, FieldError>;
