//! Synthetic analysis output for a straight corridor with one pillar.
//!
//! Pedestrians walk in +x.  Density rises in front of the pillar and drops
//! in its wake; speed falls with density along a linear fundamental
//! diagram.  Every frame gets a little seeded noise so the averages are
//! visibly smoother than any single frame.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pf_core::{AreaId, FieldKind, FrameIndex, raster_file_name, series_file_name};

// ── Corridor layout (metres) ──────────────────────────────────────────────────

pub const LENGTH: f64 = 12.0;
pub const WIDTH:  f64 = 4.0;
pub const PILLAR: (f64, f64, f64, f64) = (5.5, 6.5, 1.5, 2.5); // x0, x1, y0, y1

/// Raster cell edge.
const CELL: f64 = 0.2;

/// Free-flow speed and jam density of the linear fundamental diagram.
const FREE_SPEED:  f64 = 1.3;
const JAM_DENSITY: f64 = 5.4;

const TRAJECTORY: &str = "corridor_traj";

pub fn geometry_xml() -> String {
    let (x0, x1, y0, y1) = PILLAR;
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<geometry version="0.8" caption="corridor" unit="m">
  <rooms>
    <room id="0" caption="corridor">
      <subroom id="0" class="corridor">
        <polygon caption="wall">
          <vertex px="0.0" py="0.0"/>
          <vertex px="{LENGTH}" py="0.0"/>
        </polygon>
        <polygon caption="wall">
          <vertex px="0.0" py="{WIDTH}"/>
          <vertex px="{LENGTH}" py="{WIDTH}"/>
        </polygon>
        <obstacle id="0" caption="pillar">
          <polygon>
            <vertex px="{x0}" py="{y0}"/>
            <vertex px="{x1}" py="{y0}"/>
            <vertex px="{x1}" py="{y1}"/>
            <vertex px="{x0}" py="{y1}"/>
          </polygon>
        </obstacle>
      </subroom>
    </room>
  </rooms>
</geometry>
"#
    )
}

fn grid_shape() -> (usize, usize) {
    ((WIDTH / CELL).round() as usize, (LENGTH / CELL).round() as usize)
}

/// Mean density of the cell centred at `(x, y)`.
fn base_density(x: f64, y: f64) -> f64 {
    let (x0, x1, y0, y1) = PILLAR;
    if (x0..=x1).contains(&x) && (y0..=y1).contains(&y) {
        return 0.0;
    }
    let cy = 0.5 * (y0 + y1);
    let lateral = (-(y - cy).powi(2) / 0.8).exp();
    let upstream = (-(x - x0).powi(2) / 2.0).exp() * lateral;
    let wake = if x > x1 { (-(x - x1) / 1.5).exp() * lateral } else { 0.0 };
    (1.6 + 1.8 * upstream - 1.2 * wake).max(0.0)
}

fn speed(density: f64) -> f64 {
    if density <= 0.0 {
        return 0.0;
    }
    (FREE_SPEED * (1.0 - density / JAM_DENSITY)).max(0.05)
}

fn render_rows(rows: usize, cols: usize, cell: impl Fn(usize, usize) -> f64) -> String {
    let mut text = String::with_capacity(rows * cols * 8);
    for r in 0..rows {
        for c in 0..cols {
            if c > 0 {
                text.push('\t');
            }
            let _ = write!(text, "{:.5}", cell(r, c));
        }
        text.push('\n');
    }
    text
}

/// Write density and velocity rasters for every frame in `frames`, except
/// the density files of `drop_density`.
pub fn write_fields(
    field_dir: &Path,
    area: AreaId,
    frames: std::ops::RangeInclusive<u32>,
    drop_density: &[u32],
    seed: u64,
) -> Result<usize> {
    let density_dir = field_dir.join("density");
    let velocity_dir = field_dir.join("velocity");
    std::fs::create_dir_all(&density_dir)?;
    std::fs::create_dir_all(&velocity_dir)?;

    let (rows, cols) = grid_shape();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut written = 0;

    for frame in frames {
        let noise: Vec<f64> = (0..rows * cols).map(|_| rng.gen_range(-0.15..0.15)).collect();
        let density = |r: usize, c: usize| {
            let x = (c as f64 + 0.5) * CELL;
            let y = (r as f64 + 0.5) * CELL;
            let d = base_density(x, y);
            if d == 0.0 { 0.0 } else { (d + noise[r * cols + c]).max(0.0) }
        };

        if !drop_density.contains(&frame) {
            let name = raster_file_name(FieldKind::Density, TRAJECTORY, area, FrameIndex(frame))?;
            std::fs::write(density_dir.join(name), render_rows(rows, cols, &density))?;
            written += 1;
        }
        let name = raster_file_name(FieldKind::Velocity, TRAJECTORY, area, FrameIndex(frame))?;
        std::fs::write(velocity_dir.join(name), render_rows(rows, cols, |r, c| speed(density(r, c))))?;
        written += 1;
    }
    Ok(written)
}

/// Write a cumulative count file per area; `rates` are pedestrians per
/// second.
pub fn write_series(dir: &Path, rates: &[(AreaId, f64)], seconds: u32, fps: u32, seed: u64) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    for &(area, rate) in rates {
        let mut text = String::from("#Time [s]\tCumulative pedestrians\n");
        let mut n = 0.0_f64;
        for frame in 0..=seconds * fps {
            let t = frame as f64 / fps as f64;
            if rng.gen_bool((rate / fps as f64).min(1.0)) {
                n += 1.0;
            }
            let _ = writeln!(text, "{t:.2}\t{n}");
        }
        std::fs::write(dir.join(series_file_name(TRAJECTORY, area)), text)?;
    }
    Ok(())
}
