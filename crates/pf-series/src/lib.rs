//! `pf-series` — cumulative pedestrian counts N(t) per measurement area.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`series`] | `TimeSeries`, `load_series`, `discover_series`, `select_series`, `series_area` |
//! | [`error`]  | `SeriesError`, `SeriesResult<T>`                             |
//!
//! A series file holds at least two whitespace-separated columns; the first
//! is time, the second the count.  Further columns are ignored.

pub mod error;
pub mod series;

#[cfg(test)]
mod tests;

pub use error::{SeriesError, SeriesResult};
pub use series::{TimeSeries, discover_series, load_series, select_series, series_area};
