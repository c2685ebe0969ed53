//! `pf-field` — steady-state density, velocity and flow fields.
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`discovery`]   | `RasterFile`, `discover_frames`                        |
//! | [`window`]      | `FrameAxis`, `ResolvedWindow`, `resolve_window`        |
//! | [`grid`]        | `Grid`, `load_grid`, `ShapeGuard`                      |
//! | [`averager`]    | `AveragedField`, `average_field`                       |
//! | [`flow`]        | `compute_flow`                                         |
//! | [`profile`]     | `ProfileFields`, `compute_profiles`                    |
//! | [`error`]       | `FieldError`, `FieldResult<T>`                         |
//!
//! # Pipeline (summary)
//!
//! ```text
//! velocity frames ──► FrameAxis ──► resolve_window(request) ──► [begin, end]
//!                                                                  │
//! density files  ──► average_field ◄───────────────────────────────┤
//! velocity files ──► average_field ◄───────────────────────────────┘
//!                          │
//!              density × velocity ──► flow
//! ```
//!
//! The velocity frames form the canonical axis.  Every nominal frame of the
//! window is looked up in each field's file list; frames whose file is
//! absent are skipped and reported, and the divisor follows the configured
//! [`AveragingPolicy`](pf_core::AveragingPolicy).

pub mod averager;
pub mod discovery;
pub mod error;
pub mod flow;
pub mod grid;
pub mod profile;
pub mod window;


pub use averager::{AveragedField, average_field};
pub use discovery::{RasterFile, discover_frames};
pub use error::{FieldError, FieldResult};
pub use flow::compute_flow;
pub use grid::{Grid, ShapeGuard, load_grid};
pub use profile::{ProfileFields, compute_profiles};
pub use window::{FrameAxis, ResolvedWindow, resolve_window};
