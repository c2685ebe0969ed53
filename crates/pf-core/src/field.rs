//! The three scalar fields of a steady-state profile.

use std::fmt;

/// A raster field kind.
///
/// Density and velocity are read from disk; flow is always derived.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    Density,
    Velocity,
    Flow,
}

impl FieldKind {
    /// Kinds in panel order, top to bottom.
    pub const ALL: [FieldKind; 3] = [FieldKind::Density, FieldKind::Velocity, FieldKind::Flow];

    /// Lower-case name used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Density  => "density",
            FieldKind::Velocity => "velocity",
            FieldKind::Flow     => "flow",
        }
    }

    /// Sub-folder of the field directory holding this kind's raster files.
    ///
    /// `None` for flow, which has no files of its own.
    pub fn subdir(self) -> Option<&'static str> {
        match self {
            FieldKind::Density  => Some("density"),
            FieldKind::Velocity => Some("velocity"),
            FieldKind::Flow     => None,
        }
    }

    /// Single-letter tag following the `Prf_` prefix (`Prf_d_…`, `Prf_v_…`).
    pub fn tag(self) -> Option<&'static str> {
        match self {
            FieldKind::Density  => Some("d"),
            FieldKind::Velocity => Some("v"),
            FieldKind::Flow     => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
