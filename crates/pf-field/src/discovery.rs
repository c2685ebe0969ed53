//! Raster-frame discovery.
//!
//! Lists `<field_dir>/<kind>/Prf_<tag>_*id_<area>_*.dat`, recovers each
//! file's frame from its name and returns the hits sorted by frame.  Names
//! that match the glob but parse to another area (a trajectory stem
//! containing `id_`) are dropped.

use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use tracing::{debug, warn};

use pf_core::naming::raster_glob;
use pf_core::{AreaId, FieldKind, FrameIndex, parse_raster_name};

use crate::{FieldError, FieldResult};

/// One raster file and the frame it holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterFile {
    pub path:  PathBuf,
    pub frame: FrameIndex,
}

/// Enumerate the raster files of `kind` for `area` under `field_dir`.
///
/// The result is sorted ascending by frame and holds at most one file per
/// frame (the lexicographically first path wins; the rest are logged).
///
/// # Errors
///
/// [`FieldError::NoFrames`] if nothing matches, [`FieldError::Derived`] for
/// [`FieldKind::Flow`].
pub fn discover_frames(field_dir: &Path, kind: FieldKind, area: AreaId) -> FieldResult<Vec<RasterFile>> {
    let (Some(subdir), Some(file_pattern)) = (kind.subdir(), raster_glob(kind, area)) else {
        return Err(FieldError::Derived(kind));
    };
    let dir = field_dir.join(subdir);
    let pattern = format!(
        "{}/{}",
        Pattern::escape(&dir.to_string_lossy()),
        file_pattern
    );

    let mut files = Vec::new();
    for entry in glob(&pattern)? {
        let path = entry?;
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match parse_raster_name(name) {
            Ok(parsed) if parsed.area == area => files.push(RasterFile { path, frame: parsed.frame }),
            Ok(parsed) => debug!(file = name, other = %parsed.area, "skipping file of another area"),
            Err(e) => warn!("skipping {}: {e}", path.display()),
        }
    }

    if files.is_empty() {
        return Err(FieldError::NoFrames { area, kind, dir });
    }

    files.sort_by(|a, b| a.frame.cmp(&b.frame).then_with(|| a.path.cmp(&b.path)));
    files.dedup_by(|later, kept| {
        let dup = later.frame == kept.frame;
        if dup {
            warn!(
                frame = %later.frame,
                kept = %kept.path.display(),
                "ignoring duplicate {kind} frame file {}",
                later.path.display()
            );
        }
        dup
    });

    debug!(
        %kind,
        %area,
        count = files.len(),
        first = %files[0].frame,
        last = %files[files.len() - 1].frame,
        "discovered raster frames"
    );
    Ok(files)
}

/// Position of `frame` in a frame-sorted file list.
pub(crate) fn find_frame(files: &[RasterFile], frame: FrameIndex) -> Option<&RasterFile> {
    files
        .binary_search_by_key(&frame, |f| f.frame)
        .ok()
        .map(|i| &files[i])
}
