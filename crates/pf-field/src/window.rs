//! Steady-window resolution.
//!
//! # Policy
//!
//! ```text
//! begin = max(request.begin or first, first)
//! end   = min(request.end   or last,  last)
//! ```
//!
//! then both bounds snap inward to the nearest available frame and are
//! mapped to positional offsets into the sorted axis.  With contiguous
//! frames the offsets are simply `frame - first`.  Resolution never fails
//! for a request that overlaps the axis; a request that misses it entirely
//! (begin > end after clamping) is [`FieldError::EmptyWindow`].

use std::ops::RangeInclusive;

use pf_core::{FrameIndex, SteadyRequest};

use crate::{FieldError, FieldResult, RasterFile};

// ── FrameAxis ─────────────────────────────────────────────────────────────────

/// Sorted, duplicate-free, non-empty list of available frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameAxis {
    frames: Vec<FrameIndex>,
}

impl FrameAxis {
    /// Build an axis from frames in any order.
    pub fn new(mut frames: Vec<FrameIndex>) -> FieldResult<Self> {
        frames.sort_unstable();
        frames.dedup();
        if frames.is_empty() {
            return Err(FieldError::EmptyAxis);
        }
        Ok(Self { frames })
    }

    /// Axis over the frames of discovered raster files.
    pub fn from_files(files: &[RasterFile]) -> FieldResult<Self> {
        Self::new(files.iter().map(|f| f.frame).collect())
    }

    #[inline]
    pub fn first(&self) -> FrameIndex {
        self.frames[0]
    }

    #[inline]
    pub fn last(&self) -> FrameIndex {
        self.frames[self.frames.len() - 1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn frames(&self) -> &[FrameIndex] {
        &self.frames
    }
}

// ── ResolvedWindow ────────────────────────────────────────────────────────────

/// A steady window clamped to a [`FrameAxis`].
///
/// Invariant: `axis.first() <= begin <= end <= axis.last()` and
/// `begin_offset <= end_offset < axis.len()`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWindow {
    pub begin:        FrameIndex,
    pub end:          FrameIndex,
    pub begin_offset: usize,
    pub end_offset:   usize,
}

impl ResolvedWindow {
    /// Number of nominal frames in the window (inclusive on both ends).
    #[inline]
    pub fn len(&self) -> usize {
        self.end_offset - self.begin_offset + 1
    }

    /// Always `false`: a resolved window holds at least one frame.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Positional offsets into the axis.
    #[inline]
    pub fn offsets(&self) -> RangeInclusive<usize> {
        self.begin_offset..=self.end_offset
    }

    /// The nominal frames of the window, ascending.
    pub fn frames<'a>(&self, axis: &'a FrameAxis) -> &'a [FrameIndex] {
        &axis.frames()[self.offsets()]
    }

    /// The window as an explicit request; resolving it again is a no-op.
    pub fn as_request(&self) -> SteadyRequest {
        SteadyRequest {
            begin: Some(self.begin),
            end:   Some(self.end),
        }
    }
}

/// Clamp `request` to `axis`.
pub fn resolve_window(request: SteadyRequest, axis: &FrameAxis) -> FieldResult<ResolvedWindow> {
    let begin = request.begin.map_or(axis.first(), |b| b.max(axis.first()));
    let end = request.end.map_or(axis.last(), |e| e.min(axis.last()));
    if begin > end {
        return Err(FieldError::EmptyWindow { begin, end });
    }

    let frames = axis.frames();
    // First frame >= begin, last frame <= end; both exist because
    // first <= begin <= end <= last.
    let begin_offset = frames.partition_point(|f| *f < begin);
    let end_offset = frames.partition_point(|f| *f <= end) - 1;
    if begin_offset > end_offset {
        return Err(FieldError::EmptyWindow { begin, end });
    }

    Ok(ResolvedWindow {
        begin: frames[begin_offset],
        end: frames[end_offset],
        begin_offset,
        end_offset,
    })
}
