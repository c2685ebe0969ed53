//! Whitespace-separated numeric table reader.
//!
//! # Format
//!
//! ```text
//! # comment lines and trailing comments are ignored
//! 0.00   0.12   0.40
//! 0.10   0.33   0.51   # trailing comment
//! ```
//!
//! Any run of spaces or tabs separates columns; blank lines are skipped.
//! Every data row must have the same number of columns.  Values are stored
//! row-major so the result feeds `ndarray::Array2::from_shape_vec` directly.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{PfError, PfResult};

/// Comment character; everything from it to the end of the line is dropped.
pub const COMMENT_CHAR: char = '#';

/// A dense, row-major table of `f64`.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub rows:   usize,
    pub cols:   usize,
    pub values: Vec<f64>,
}

impl Table {
    /// Copy of one column, top to bottom.
    pub fn column(&self, col: usize) -> Option<Vec<f64>> {
        (col < self.cols).then(|| (0..self.rows).map(|r| self.values[r * self.cols + col]).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

/// Read a table from `path`.
pub fn read_table_file(path: &Path) -> PfResult<Table> {
    let file = File::open(path).map_err(|source| PfError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_table(BufReader::new(file), path)
}

/// Like [`read_table_file`] but accepts any `BufRead` source.
///
/// `origin` only labels error messages; pass the logical source path (tests
/// use a fixed dummy path with a `Cursor`).
pub fn read_table<R: BufRead>(reader: R, origin: &Path) -> PfResult<Table> {
    let mut values = Vec::new();
    let mut rows = 0usize;
    let mut cols = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|source| PfError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
        let data = match line.split_once(COMMENT_CHAR) {
            Some((data, _)) => data,
            None => line.as_str(),
        };

        let before = values.len();
        for tok in data.split_whitespace() {
            let v = tok.parse::<f64>().map_err(|_| PfError::Table {
                path:   origin.to_path_buf(),
                line:   line_no,
                reason: format!("{tok:?} is not a number"),
            })?;
            values.push(v);
        }
        let width = values.len() - before;
        if width == 0 {
            continue;
        }

        if rows == 0 {
            cols = width;
        } else if width != cols {
            return Err(PfError::Table {
                path:   origin.to_path_buf(),
                line:   line_no,
                reason: format!("expected {cols} columns, found {width}"),
            });
        }
        rows += 1;
    }

    Ok(Table { rows, cols, values })
}
