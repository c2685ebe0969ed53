//! PNG output through a staging file.
//!
//! An image is drawn into a temporary file inside the output directory and
//! renamed onto its final name only after drawing and encoding succeeded.
//! A failed render removes the staging file, so the destination either
//! holds a complete image or is untouched.

use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::{RenderError, RenderResult};

/// Draw a `size` canvas with `draw` and store it as `<out_dir>/<file_name>`.
///
/// `out_dir` is created if missing.
pub(crate) fn write_png<F>(out_dir: &Path, file_name: &str, size: (u32, u32), draw: F) -> RenderResult<PathBuf>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> RenderResult<()>,
{
    if size.0 == 0 || size.1 == 0 {
        return Err(RenderError::EmptyCanvas {
            width:  size.0,
            height: size.1,
        });
    }

    let dir_error = |source| RenderError::OutputDir {
        path: out_dir.to_path_buf(),
        source,
    };
    std::fs::create_dir_all(out_dir).map_err(dir_error)?;
    let staging = tempfile::Builder::new()
        .prefix(".pedflow-")
        .suffix(".png")
        .tempfile_in(out_dir)
        .map_err(dir_error)?;

    {
        let root = BitMapBackend::new(staging.path(), size).into_drawing_area();
        draw(&root)?;
        root.present()?;
    }

    let path = out_dir.join(file_name);
    staging.persist(&path).map_err(|e| RenderError::Persist {
        path:   path.clone(),
        source: e.error,
    })?;
    Ok(path)
}
