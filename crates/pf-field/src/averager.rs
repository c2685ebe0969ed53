//! Windowed element-wise averaging of one field.

use pf_core::{AveragingPolicy, FieldKind, FrameIndex};
use tracing::{debug, warn};

use crate::discovery::find_frame;
use crate::{FieldError, FieldResult, FrameAxis, Grid, RasterFile, ResolvedWindow, ShapeGuard, load_grid};

/// The steady-state mean of one field plus how it was obtained.
#[derive(Clone, Debug)]
pub struct AveragedField {
    pub kind:    FieldKind,
    pub grid:    Grid,
    pub policy:  AveragingPolicy,
    /// Frames in the resolved window.
    pub nominal: usize,
    /// Frames whose file was read and summed.
    pub loaded:  usize,
    /// Frames of the window with no file on disk, ascending.
    pub skipped: Vec<FrameIndex>,
}

impl AveragedField {
    #[inline]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Average the `files` of one field over `window`.
///
/// Each nominal frame of the window is looked up in `files` (sorted by
/// frame, as returned by [`discover_frames`](crate::discover_frames)).  A
/// frame without a file, or whose file has vanished from disk, is skipped.
/// Grids are summed in ascending frame order and divided according to
/// `policy`.  Every loaded grid passes through `guard`.
///
/// # Errors
///
/// [`FieldError::NothingLoaded`] when no frame of the window could be read,
/// [`FieldError::ShapeMismatch`] from the guard, and any load error.
pub fn average_field(
    kind:   FieldKind,
    files:  &[RasterFile],
    axis:   &FrameAxis,
    window: &ResolvedWindow,
    policy: AveragingPolicy,
    guard:  &mut ShapeGuard,
) -> FieldResult<AveragedField> {
    let nominal = window.frames(axis);
    let mut sum: Option<Grid> = None;
    let mut loaded = 0usize;
    let mut skipped = Vec::new();

    for &frame in nominal {
        let Some(file) = find_frame(files, frame).filter(|f| f.path.exists()) else {
            warn!(%kind, %frame, "frame missing in steady window, skipped");
            skipped.push(frame);
            continue;
        };

        let grid = load_grid(&file.path)?;
        guard.check(&grid, &file.path.display())?;
        match sum.as_mut() {
            Some(acc) => *acc += &grid,
            None => sum = Some(grid),
        }
        loaded += 1;
    }

    let nothing_loaded = || FieldError::NothingLoaded {
        kind,
        begin: window.begin,
        end:   window.end,
    };
    let mut grid = sum.ok_or_else(nothing_loaded)?;
    let divisor = policy.divisor(nominal.len(), loaded).ok_or_else(nothing_loaded)?;
    grid /= divisor as f64;

    debug!(
        %kind,
        nominal = nominal.len(),
        loaded,
        skipped = skipped.len(),
        divisor,
        "averaged field"
    );

    Ok(AveragedField {
        kind,
        grid,
        policy,
        nominal: nominal.len(),
        loaded,
        skipped,
    })
}
