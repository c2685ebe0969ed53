//! Optional TOML settings for the `profiles` command.
//!
//! ```toml
//! [profiles]
//! field_dir    = "Output/Fundamental_Diagram/Classical_Voronoi/field"
//! geometry     = "geometry.xml"
//! area         = 1
//! begin        = 100
//! end          = 400
//! policy       = "complete_frames_only"   # or "biased_by_nominal_window"
//! out_dir      = "plots"
//! panel_width  = 960
//! panel_height = 360
//! ```
//!
//! Every key is optional; a flag given on the command line wins over the
//! file.  Relative paths are taken as they are, relative to the working
//! directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use pf_core::AveragingPolicy;

/// Whole settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub profiles: ProfilesSection,
}

/// `[profiles]` table.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProfilesSection {
    pub field_dir:    Option<PathBuf>,
    pub geometry:     Option<PathBuf>,
    pub area:         Option<u32>,
    pub begin:        Option<u32>,
    pub end:          Option<u32>,
    pub policy:       Option<AveragingPolicy>,
    pub out_dir:      Option<PathBuf>,
    pub panel_width:  Option<u32>,
    pub panel_height: Option<u32>,
}

impl SettingsFile {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing settings {}", path.display()))
    }
}
