//! Profile run configuration.
//!
//! Typically assembled by the application crate from command-line flags
//! (optionally layered over a TOML file) and passed to
//! `pf_field::compute_profiles`.

use std::path::PathBuf;

use crate::{AreaId, FrameIndex};

// ── SteadyRequest ─────────────────────────────────────────────────────────────

/// Requested steady-state window, inclusive on both ends.
///
/// `None` means "use the first / last available frame".  Bounds outside the
/// available frames are clamped during resolution, never rejected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteadyRequest {
    pub begin: Option<FrameIndex>,
    pub end:   Option<FrameIndex>,
}

impl SteadyRequest {
    /// Every available frame.
    pub const FULL: SteadyRequest = SteadyRequest { begin: None, end: None };

    pub fn new(begin: Option<u32>, end: Option<u32>) -> Self {
        Self {
            begin: begin.map(FrameIndex),
            end:   end.map(FrameIndex),
        }
    }
}

// ── AveragingPolicy ───────────────────────────────────────────────────────────

/// How frames missing on disk inside the steady window affect the mean.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AveragingPolicy {
    /// Divide by the nominal window length whatever was found.
    ///
    /// A missing frame contributes zero, biasing the mean toward zero by
    /// `missing / nominal`.  This reproduces the long-standing behaviour of
    /// the profile plots and is the default.
    #[default]
    BiasedByNominalWindow,

    /// Divide by the number of frames actually loaded.
    CompleteFramesOnly,
}

impl AveragingPolicy {
    /// Divisor for a window of `nominal` frames of which `loaded` were read.
    ///
    /// Returns `None` when the divisor would be zero.
    pub fn divisor(self, nominal: usize, loaded: usize) -> Option<usize> {
        let d = match self {
            AveragingPolicy::BiasedByNominalWindow => nominal,
            AveragingPolicy::CompleteFramesOnly    => loaded,
        };
        (d > 0).then_some(d)
    }
}

// ── ProfileConfig ─────────────────────────────────────────────────────────────

/// Inputs of one steady-state profile computation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileConfig {
    /// Directory holding the `density/` and `velocity/` sub-folders.
    pub field_dir: PathBuf,

    /// Measurement area whose raster files are averaged.
    pub area: AreaId,

    /// Requested steady window; defaults to every available frame.
    #[cfg_attr(feature = "serde", serde(default))]
    pub steady: SteadyRequest,

    /// Missing-frame policy; defaults to the nominal-window divisor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: AveragingPolicy,
}

impl ProfileConfig {
    /// Config averaging every available frame with the default policy.
    pub fn new(field_dir: impl Into<PathBuf>, area: AreaId) -> Self {
        Self {
            field_dir: field_dir.into(),
            area,
            steady: SteadyRequest::FULL,
            policy: AveragingPolicy::default(),
        }
    }
}
