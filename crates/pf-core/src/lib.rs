//! `pf-core` — foundational types for the `pedflow` workspace.
//!
//! This crate is a dependency of every other `pf-*` crate.  It has no
//! `pf-*` dependencies and a single required external one (`thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`ids`]       | `AreaId`, `FrameIndex`, `AreaSelector`                   |
//! | [`field`]     | `FieldKind` (density / velocity / flow)                  |
//! | [`geo`]       | `Point2`, `Extent`                                       |
//! | [`naming`]    | file-name conventions, `RasterName`, name parsers        |
//! | [`table`]     | whitespace-separated numeric table reader                |
//! | [`config`]    | `ProfileConfig`, `SteadyRequest`, `AveragingPolicy`      |
//! | [`error`]     | `PfError`, `PfResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, geometry and config.|

pub mod config;
pub mod error;
pub mod field;
pub mod geo;
pub mod ids;
pub mod naming;
pub mod table;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AveragingPolicy, ProfileConfig, SteadyRequest};
pub use error::{PfError, PfResult};
pub use field::FieldKind;
pub use geo::{Extent, Point2};
pub use ids::{AreaId, AreaSelector, FrameIndex};
pub use naming::{RasterName, parse_raster_name, parse_series_area, raster_file_name, series_file_name};
pub use table::{Table, read_table, read_table_file};
