//! `pf-render` — the images: stacked field heatmaps and N(t) charts.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`colormap`]   | `jet`, `ColorAxis` (fixed per-field bounds and labels)     |
//! | [`figure`]     | `ProfileFigure`, `Panel`, `CellRect`, `FigureStyle`, `build_profile_figure` |
//! | [`profile`]    | `draw_profile_figure`, `write_profile_png`                 |
//! | [`timeseries`] | `NtChart`, `NtSeries`, `NtStyle`, `build_nt_chart`, `draw_nt_chart`, `write_nt_png` |
//! | [`error`]      | `RenderError`, `RenderResult<T>`                           |
//! | `output`       | staged PNG writing shared by both `write_*` functions      |
//!
//! # Two steps
//!
//! Building a figure is pure: it turns averaged fields and geometry into a
//! value holding every cell rectangle and overlay in physical coordinates.
//! Drawing takes that value and any plotters backend; the `write_*`
//! functions pick a PNG file backend, stage the image next to its
//! destination and report the written path.  Nothing
//! touches the disk until a figure has been built in full.
//!
//! Set `annotate: false` in the style to skip axes, captions and labels;
//! such drawings need no fonts.

pub mod colormap;
pub mod error;
pub mod figure;
mod output;
pub mod profile;
pub mod timeseries;


pub use colormap::{ColorAxis, jet};
pub use error::{RenderError, RenderResult};
pub use figure::{CellRect, FigureStyle, Panel, ProfileFigure, build_profile_figure};
pub use profile::{draw_profile_figure, write_profile_png};
pub use timeseries::{NtBounds, NtChart, NtSeries, NtStyle, build_nt_chart, draw_nt_chart, write_nt_png};
