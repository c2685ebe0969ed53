//! `pf-geometry` — walls, obstacles and the extent they span.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`model`]    | `Polyline`, `Polygon`, `Geometry`                          |
//! | [`provider`] | `GeometryProvider` trait, `JpsGeometryFile`, `parse_geometry_str` |
//! | [`error`]    | `GeometryError`, `GeometryResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the geometry model.     |

pub mod error;
pub mod model;
pub mod provider;

#[cfg(test)]
mod tests;

pub use error::{GeometryError, GeometryResult};
pub use model::{Geometry, Polygon, Polyline};
pub use provider::{GeometryProvider, JpsGeometryFile, parse_geometry_str};
