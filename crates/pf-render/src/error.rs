//! Rendering error type.

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

use pf_core::Extent;

/// Errors produced by `pf-render`.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("cannot create output directory {}: {source}", .path.display())]
    OutputDir {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot store image {}: {source}", .path.display())]
    Persist {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("canvas {width}x{height} has no pixels")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("geometry extent {0} has no area")]
    DegenerateExtent(Extent),

    #[error("field grid is empty")]
    EmptyGrid,

    #[error("no series to plot")]
    NoSeries,
}

/// Backend errors are flattened to text so one error type serves every
/// backend.
impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Draw(e.to_string())
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
