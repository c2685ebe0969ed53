//! Raster grids and the infer-then-validate shape guard.

use std::path::Path;

use ndarray::Array2;
use tracing::debug;

use pf_core::read_table_file;

use crate::{FieldError, FieldResult};

/// One scalar per spatial cell; `grid[[row, col]]`, row 0 at the lowest y.
pub type Grid = Array2<f64>;

/// Load a raster file as a `rows × cols` grid.
pub fn load_grid(path: &Path) -> FieldResult<Grid> {
    let table = read_table_file(path)?;
    if table.is_empty() {
        return Err(FieldError::EmptyGrid(path.to_path_buf()));
    }
    let grid = Array2::from_shape_vec((table.rows, table.cols), table.values)?;
    debug!(path = %path.display(), rows = table.rows, cols = table.cols, "loaded grid");
    Ok(grid)
}

/// Remembers the shape of the first grid it sees and rejects any later grid
/// of a different shape.
///
/// One guard is shared by the density and velocity passes of a profile, so
/// the shape comes from the first loaded density file.
#[derive(Clone, Debug, Default)]
pub struct ShapeGuard {
    shape: Option<(usize, usize)>,
}

impl ShapeGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The inferred shape, once a grid has been checked.
    pub fn shape(&self) -> Option<(usize, usize)> {
        self.shape
    }

    /// Infer the shape from `grid` if none is known yet, otherwise validate.
    ///
    /// `origin` names the grid in the error message.
    pub fn check(&mut self, grid: &Grid, origin: &dyn std::fmt::Display) -> FieldResult<()> {
        let found = grid.dim();
        match self.shape {
            None => {
                self.shape = Some(found);
                Ok(())
            }
            Some(expected) if expected == found => Ok(()),
            Some(expected) => Err(FieldError::ShapeMismatch {
                expected,
                found,
                origin: origin.to_string(),
            }),
        }
    }
}
