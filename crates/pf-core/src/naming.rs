//! File-name conventions of the analysis output.
//!
//! # Layout
//!
//! ```text
//! <field_dir>/density/Prf_d_<traj>_id_<area>_<frame>.dat
//! <field_dir>/velocity/Prf_v_<traj>_id_<area>_<frame>.dat
//! <series_dir>/Flow_NT_<traj>_id_<area>.dat
//! ```
//!
//! `<traj>` is the trajectory file stem and may itself contain `_` or even
//! `id_`; parsing therefore works from the right-hand end of the name.
//! Frames are written zero-padded to [`FRAME_DIGITS`] digits, but any
//! width parses.

use crate::{AreaId, FieldKind, FrameIndex, PfError, PfResult};

/// Prefix of every raster profile file.
pub const RASTER_PREFIX: &str = "Prf_";

/// Prefix of every N(t) file.
pub const SERIES_PREFIX: &str = "Flow_NT_";

/// Marker preceding the measurement-area token.
pub const AREA_MARKER: &str = "id_";

/// Separator between name tokens.
pub const TOKEN_DELIMITER: char = '_';

/// Extension (without the dot) of raster and series files.
pub const DATA_EXTENSION: &str = "dat";

/// Zero-padding width of the frame token when writing names.
pub const FRAME_DIGITS: usize = 5;

/// Metadata recovered from a raster file name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RasterName {
    pub area:  AreaId,
    pub frame: FrameIndex,
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `(area, frame)` out of a raster file name such as
/// `Prf_d_traj_id_1_00042.dat`.
///
/// Only the final path component is expected; callers pass
/// `path.file_name()`.
pub fn parse_raster_name(name: &str) -> PfResult<RasterName> {
    let stem = strip_extension(name)?;

    let (head, frame_tok) = stem
        .rsplit_once(TOKEN_DELIMITER)
        .ok_or_else(|| PfError::file_name(name, "no frame token"))?;
    let frame = parse_u32(frame_tok)
        .map(FrameIndex)
        .ok_or_else(|| PfError::file_name(name, format!("frame token {frame_tok:?} is not a number")))?;

    let area_tok = after_marker(head)
        .ok_or_else(|| PfError::file_name(name, format!("missing {AREA_MARKER:?} marker")))?;
    let area = parse_u32(area_tok)
        .map(AreaId)
        .ok_or_else(|| PfError::file_name(name, format!("area token {area_tok:?} is not a number")))?;

    Ok(RasterName { area, frame })
}

/// Parse the measurement area out of an N(t) file name such as
/// `Flow_NT_traj_id_3.dat`.
pub fn parse_series_area(name: &str) -> PfResult<AreaId> {
    let stem = strip_extension(name)?;
    let area_tok = after_marker(stem)
        .ok_or_else(|| PfError::file_name(name, format!("missing {AREA_MARKER:?} marker")))?;
    parse_u32(area_tok)
        .map(AreaId)
        .ok_or_else(|| PfError::file_name(name, format!("area token {area_tok:?} is not a number")))
}

fn strip_extension(name: &str) -> PfResult<&str> {
    match name.rsplit_once('.') {
        Some((stem, ext)) if ext == DATA_EXTENSION => Ok(stem),
        Some((_, ext)) => Err(PfError::file_name(
            name,
            format!("extension {ext:?} is not {DATA_EXTENSION:?}"),
        )),
        None => Err(PfError::file_name(name, "no extension")),
    }
}

/// Text following the last area marker.
fn after_marker(s: &str) -> Option<&str> {
    s.rfind(AREA_MARKER).map(|pos| &s[pos + AREA_MARKER.len()..])
}

fn parse_u32(tok: &str) -> Option<u32> {
    if tok.is_empty() || !tok.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    tok.parse().ok()
}

// ── Formatting ────────────────────────────────────────────────────────────────

/// Build the raster file name for `kind`, trajectory stem `traj`, `area` and
/// `frame`.
///
/// Fails for [`FieldKind::Flow`], which is never stored on disk.
pub fn raster_file_name(kind: FieldKind, traj: &str, area: AreaId, frame: FrameIndex) -> PfResult<String> {
    let tag = kind
        .tag()
        .ok_or_else(|| PfError::Config(format!("{kind} has no raster files")))?;
    Ok(format!(
        "{RASTER_PREFIX}{tag}_{traj}_{AREA_MARKER}{area}_{frame:0width$}.{DATA_EXTENSION}",
        frame = frame.0,
        width = FRAME_DIGITS,
    ))
}

/// Glob pattern (file-name part only) matching every raster file of `kind`
/// and `area`.
///
/// The pattern can over-match when a trajectory stem itself contains the
/// marker; discovery re-checks each hit with [`parse_raster_name`].
pub fn raster_glob(kind: FieldKind, area: AreaId) -> Option<String> {
    kind.tag().map(|tag| {
        format!("{RASTER_PREFIX}{tag}_*{AREA_MARKER}{area}_*.{DATA_EXTENSION}")
    })
}

/// Build the N(t) file name for trajectory stem `traj` and `area`.
pub fn series_file_name(traj: &str, area: AreaId) -> String {
    format!("{SERIES_PREFIX}{traj}_{AREA_MARKER}{area}.{DATA_EXTENSION}")
}

/// Glob pattern (file-name part only) matching every N(t) file.
pub fn series_glob() -> String {
    format!("{SERIES_PREFIX}*{AREA_MARKER}*.{DATA_EXTENSION}")
}
