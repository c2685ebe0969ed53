//! Strongly typed identifier wrappers.
//!
//! Both ids are `Copy + Ord + Hash`, so they sort and key maps without
//! ceremony.  The inner integer is `pub`; file-name formatting and parsing
//! go through [`crate::naming`] rather than touching it directly.

use std::fmt;
use std::str::FromStr;

/// Generate a typed id wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identifier of a measurement area, as embedded in `..._id_<n>...` file names.
    pub struct AreaId(u32);
}

typed_id! {
    /// Simulation frame number, the last `_`-separated token of a raster file name.
    pub struct FrameIndex(u32);
}

// ── AreaSelector ──────────────────────────────────────────────────────────────

/// Which measurement areas a time-series plot covers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AreaSelector {
    /// Overlay every discovered area, one labelled series each.
    All,
    /// Plot only the given area.
    Area(AreaId),
}

impl AreaSelector {
    /// `true` if a series of `area` belongs in the plot.
    #[inline]
    pub fn matches(self, area: AreaId) -> bool {
        match self {
            AreaSelector::All     => true,
            AreaSelector::Area(a) => a == area,
        }
    }
}

impl fmt::Display for AreaSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaSelector::All     => f.write_str("all"),
            AreaSelector::Area(a) => write!(f, "{a}"),
        }
    }
}

/// Accepts `all`, `-1` (the legacy "all areas" sentinel) or a non-negative id.
impl FromStr for AreaSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "-1" => Ok(AreaSelector::All),
            n => n
                .parse::<u32>()
                .map(|id| AreaSelector::Area(AreaId(id)))
                .map_err(|_| format!("invalid area {n:?}: expected \"all\", -1 or a non-negative integer")),
        }
    }
}
