//! `pedflow profiles`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Args, ValueEnum, ValueHint};
use tracing::info;

use pf_core::{AreaId, AveragingPolicy, ProfileConfig, SteadyRequest};
use pf_field::compute_profiles;
use pf_geometry::{GeometryProvider, JpsGeometryFile};
use pf_render::{FigureStyle, build_profile_figure, write_profile_png};

use crate::settings::{ProfilesSection, SettingsFile};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyOpt {
    /// Divide by the nominal window length; missing frames count as zero
    Nominal,
    /// Divide by the number of frames actually read
    Complete,
}

impl From<PolicyOpt> for AveragingPolicy {
    fn from(p: PolicyOpt) -> Self {
        match p {
            PolicyOpt::Nominal  => AveragingPolicy::BiasedByNominalWindow,
            PolicyOpt::Complete => AveragingPolicy::CompleteFramesOnly,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ProfilesArgs {
    /// Directory holding the density/ and velocity/ raster folders
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub field_dir: Option<PathBuf>,

    /// JuPedSim geometry XML
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub geometry: Option<PathBuf>,

    /// Measurement area id
    #[arg(long)]
    pub area: Option<u32>,

    /// First frame of the steady window (default: first available)
    #[arg(long)]
    pub begin: Option<u32>,

    /// Last frame of the steady window, inclusive (default: last available)
    #[arg(long)]
    pub end: Option<u32>,

    /// How frames missing on disk affect the mean
    #[arg(long, value_enum)]
    pub policy: Option<PolicyOpt>,

    /// Where to write profiles_<area>.png [default: .]
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub out_dir: Option<PathBuf>,

    /// Width of one heatmap panel in pixels
    #[arg(long)]
    pub panel_width: Option<u32>,

    /// Height of one heatmap panel in pixels
    #[arg(long)]
    pub panel_height: Option<u32>,

    /// TOML settings with a [profiles] table; flags override it
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}

/// Fully resolved inputs of one `profiles` run.
#[derive(Debug)]
pub struct ProfilesPlan {
    pub config:   ProfileConfig,
    pub geometry: PathBuf,
    pub out_dir:  PathBuf,
    pub style:    FigureStyle,
}

/// Merge flags over the settings file section.
pub fn plan(args: &ProfilesArgs, file: ProfilesSection) -> Result<ProfilesPlan> {
    let field_dir = args
        .field_dir
        .clone()
        .or(file.field_dir)
        .ok_or_else(|| missing("field-dir"))?;
    let geometry = args
        .geometry
        .clone()
        .or(file.geometry)
        .ok_or_else(|| missing("geometry"))?;
    let area = args.area.or(file.area).map(AreaId).ok_or_else(|| missing("area"))?;

    let steady = SteadyRequest::new(args.begin.or(file.begin), args.end.or(file.end));

    let defaults = FigureStyle::default();
    let style = FigureStyle {
        panel_width: args.panel_width.or(file.panel_width).unwrap_or(defaults.panel_width),
        panel_height: args.panel_height.or(file.panel_height).unwrap_or(defaults.panel_height),
        ..defaults
    };
    style
        .validate()
        .context("--panel-width and --panel-height must be positive")?;

    Ok(ProfilesPlan {
        config: ProfileConfig {
            field_dir,
            area,
            steady,
            policy: args.policy.map(Into::into).or(file.policy).unwrap_or_default(),
        },
        geometry,
        out_dir: args.out_dir.clone().or(file.out_dir).unwrap_or_else(|| PathBuf::from(".")),
        style,
    })
}

fn missing(flag: &str) -> anyhow::Error {
    anyhow!("--{flag} is required (on the command line or in the [profiles] settings table)")
}

pub fn run(args: &ProfilesArgs) -> Result<PathBuf> {
    let section = match &args.config {
        Some(path) => SettingsFile::load(path)?.profiles,
        None => ProfilesSection::default(),
    };
    let plan = plan(args, section)?;
    execute(&plan)
}

/// Compute, build and write; returns the image path.
pub fn execute(plan: &ProfilesPlan) -> Result<PathBuf> {
    let area = plan.config.area;
    info!(
        %area,
        field_dir = %plan.config.field_dir.display(),
        policy = ?plan.config.policy,
        "computing steady-state profiles"
    );

    let fields = compute_profiles(&plan.config)
        .with_context(|| format!("computing profiles of area {area}"))?;
    let geometry = load_geometry(&plan.geometry)?;
    let figure = build_profile_figure(&fields, &geometry)
        .with_context(|| format!("building profile figure of area {area}"))?;
    let path = write_profile_png(&figure, &plan.out_dir, &plan.style)
        .with_context(|| format!("writing profile image of area {area}"))?;
    Ok(path)
}

fn load_geometry(path: &Path) -> Result<pf_geometry::Geometry> {
    JpsGeometryFile::new(path)
        .geometry()
        .with_context(|| format!("loading geometry {}", path.display()))
}
