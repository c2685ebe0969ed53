//! `pedflow nt`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueHint};

use pf_core::AreaSelector;
use pf_render::{NtStyle, build_nt_chart, write_nt_png};
use pf_series::{discover_series, select_series};

#[derive(Args, Debug)]
pub struct NtArgs {
    /// Measurement area id, or `all` (also `-1`) to overlay every area
    #[arg(long, default_value = "all", allow_hyphen_values = true)]
    pub area: AreaSelector,

    /// N(t) files (Flow_NT_*_id_<area>.dat); searched in --dir when omitted
    #[arg(value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Directory searched for N(t) files when none are listed
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Where to write Nt_<area>.png
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath)]
    pub out_dir: PathBuf,
}

pub fn run(args: &NtArgs) -> Result<PathBuf> {
    let files = if args.files.is_empty() {
        discover_series(&args.dir)
            .with_context(|| format!("looking for N(t) files in {}", args.dir.display()))?
    } else {
        args.files.clone()
    };

    let series = select_series(&files, args.area)
        .with_context(|| format!("selecting N(t) series for area {}", args.area))?;
    let chart = build_nt_chart(args.area, &series)?;
    let path = write_nt_png(&chart, &args.out_dir, &NtStyle::default())
        .with_context(|| format!("writing N(t) chart for area {}", args.area))?;
    Ok(path)
}
