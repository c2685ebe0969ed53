//! Loading and selecting N(t) files.

use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use tracing::debug;

use pf_core::naming::series_glob;
use pf_core::{AreaId, AreaSelector, parse_series_area, read_table_file};

use crate::{SeriesError, SeriesResult};

/// Cumulative count of one measurement area over time.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries {
    pub area:   AreaId,
    pub path:   PathBuf,
    /// `(t, N)` in file order.
    pub points: Vec<(f64, f64)>,
}

impl TimeSeries {
    /// `(min, max)` of t and N, or `None` for an empty series.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let (&(t0, n0), rest) = self.points.split_first()?;
        Some(rest.iter().fold(((t0, t0), (n0, n0)), |((tl, th), (nl, nh)), &(t, n)| {
            ((tl.min(t), th.max(t)), (nl.min(n), nh.max(n)))
        }))
    }
}

/// Area id embedded in an N(t) file path.
pub fn series_area(path: &Path) -> SeriesResult<AreaId> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SeriesError::NoFileName(path.to_path_buf()))?;
    Ok(parse_series_area(name)?)
}

/// Read one N(t) file: column 0 is t, column 1 is N.
pub fn load_series(path: &Path) -> SeriesResult<TimeSeries> {
    let area = series_area(path)?;
    let table = read_table_file(path)?;
    let points: Vec<(f64, f64)> = match (table.column(0), table.column(1)) {
        (Some(t), Some(n)) => t.into_iter().zip(n).collect(),
        _ if table.is_empty() => Vec::new(),
        _ => {
            return Err(SeriesError::TooFewColumns {
                path:  path.to_path_buf(),
                found: table.cols,
            });
        }
    };
    debug!(path = %path.display(), %area, points = points.len(), "loaded N(t) series");
    Ok(TimeSeries {
        area,
        path: path.to_path_buf(),
        points,
    })
}

/// Every `Flow_NT_*id_*.dat` file in `dir`, sorted by path.
pub fn discover_series(dir: &Path) -> SeriesResult<Vec<PathBuf>> {
    let pattern = format!("{}/{}", Pattern::escape(&dir.to_string_lossy()), series_glob());
    let mut files = glob(&pattern)?.collect::<Result<Vec<_>, _>>()?;
    if files.is_empty() {
        return Err(SeriesError::NoFiles(dir.to_path_buf()));
    }
    files.sort();
    Ok(files)
}

/// Load the files that `selector` picks out of `files`, keeping their order.
///
/// [`AreaSelector::All`] loads every file.  A specific area loads only the
/// files whose embedded id matches; file names are checked before any file
/// is read.
///
/// # Errors
///
/// [`SeriesError::AreaNotFound`] if a specific area matches no file, or any
/// name or load error.
pub fn select_series<P: AsRef<Path>>(files: &[P], selector: AreaSelector) -> SeriesResult<Vec<TimeSeries>> {
    let mut picked = Vec::new();
    for file in files {
        let path = file.as_ref();
        let area = series_area(path)?;
        if selector.matches(area) {
            picked.push(path);
        } else {
            debug!(path = %path.display(), %area, %selector, "N(t) file not selected");
        }
    }

    if picked.is_empty() {
        return Err(match selector {
            AreaSelector::Area(area) => SeriesError::AreaNotFound(area),
            AreaSelector::All => SeriesError::NothingToPlot,
        });
    }

    picked.into_iter().map(load_series).collect()
}
