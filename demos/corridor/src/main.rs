//! corridor — end-to-end pedflow run on synthetic data.
//!
//! Writes a JuPedSim geometry, 200 frames of density and velocity rasters
//! and two N(t) files into `output/corridor/`, then averages the steady
//! window, renders `profiles_1.png` and both N(t) charts next to them.
//! One density frame inside the window is deliberately left out so the
//! skipped-frame report has something to say.

mod synth;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use pf_core::{AreaId, AreaSelector, AveragingPolicy, ProfileConfig, SteadyRequest};
use pf_field::compute_profiles;
use pf_geometry::{GeometryProvider, JpsGeometryFile};
use pf_render::{FigureStyle, NtStyle, build_nt_chart, build_profile_figure, write_nt_png, write_profile_png};
use pf_series::{discover_series, select_series};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:     &str = "output/corridor";
const AREA:           AreaId = AreaId(1);
const FIRST_FRAME:    u32 = 0;
const LAST_FRAME:     u32 = 199;
const STEADY_BEGIN:   u32 = 50;
const STEADY_END:     u32 = 150;
const MISSING_FRAMES: [u32; 1] = [120];
const SEED:           u64 = 42;

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    println!("=== corridor — pedflow synthetic run ===");
    println!(
        "Frames: {FIRST_FRAME}..={LAST_FRAME}  |  Steady: {STEADY_BEGIN}..={STEADY_END}  |  Seed: {SEED}"
    );
    println!();

    // ── Synthesize inputs ─────────────────────────────────────────────────────
    let out = Path::new(OUTPUT_DIR);
    let field_dir = out.join("field");
    let series_dir = out.join("flow");
    std::fs::create_dir_all(out)?;

    let geometry_path = out.join("geometry.xml");
    std::fs::write(&geometry_path, synth::geometry_xml())?;
    let files = synth::write_fields(&field_dir, AREA, FIRST_FRAME..=LAST_FRAME, &MISSING_FRAMES, SEED)?;
    synth::write_series(&series_dir, &[(AreaId(1), 1.2), (AreaId(2), 0.7)], 60, 8, SEED)?;
    println!("Wrote {files} raster files under {}", field_dir.display());

    // ── Profiles ──────────────────────────────────────────────────────────────
    let t0 = Instant::now();
    let config = ProfileConfig {
        field_dir,
        area: AREA,
        steady: SteadyRequest::new(Some(STEADY_BEGIN), Some(STEADY_END)),
        policy: AveragingPolicy::BiasedByNominalWindow,
    };
    let fields = compute_profiles(&config)?;
    let geometry = JpsGeometryFile::new(&geometry_path).geometry()?;
    let figure = build_profile_figure(&fields, &geometry)?;
    let profile_png = write_profile_png(&figure, out, &FigureStyle::default())?;

    let (rows, cols) = fields.shape();
    println!(
        "Averaged {rows}x{cols} grids over frames {}..={} in {:.3} s",
        fields.window.begin,
        fields.window.end,
        t0.elapsed().as_secs_f64()
    );
    println!(
        "Density: {} of {} frames loaded, skipped {:?}",
        fields.density.loaded, fields.density.nominal, fields.density.skipped
    );
    println!("---> {}", profile_png.display());

    // ── N(t) ──────────────────────────────────────────────────────────────────
    let series_files = discover_series(&series_dir)?;
    for selector in [AreaSelector::All, AreaSelector::Area(AreaId(2))] {
        let series = select_series(&series_files, selector)?;
        let chart = build_nt_chart(selector, &series)?;
        let path = write_nt_png(&chart, out, &NtStyle::default())?;
        println!("---> {}", path.display());
    }

    Ok(())
}
