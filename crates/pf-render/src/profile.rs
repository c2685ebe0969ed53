//! Drawing a [`ProfileFigure`].
//!
//! ```text
//! ┌──────────────────────────────┬────┐
//! │ density heatmap + overlay    │ cb │
//! ├──────────────────────────────┼────┤
//! │ velocity heatmap + overlay   │ cb │
//! ├──────────────────────────────┼────┤
//! │ flow heatmap + overlay       │ cb │
//! └──────────────────────────────┴────┘
//! ```
//!
//! Overlays are drawn after the raster: obstacles filled white, walls
//! stroked white.

use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::output::write_png;
use crate::{ColorAxis, FigureStyle, Panel, ProfileFigure, RenderResult};

/// Discrete steps of a colour bar.
const COLORBAR_STEPS: usize = 256;

/// Draw `figure` onto `root`, which should be `style.canvas_size(3)` large.
pub fn draw_profile_figure<DB>(
    root: &DrawingArea<DB, Shift>,
    figure: &ProfileFigure,
    style: &FigureStyle,
) -> RenderResult<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE)?;
    let rows = root.split_evenly((figure.panels.len(), 1));
    for (panel, area) in figure.panels.iter().zip(rows.iter()) {
        let (width, _) = area.dim_in_pixel();
        let split = width.saturating_sub(style.colorbar_width) as i32;
        let (plot_area, bar_area) = area.split_horizontally(split);
        draw_panel(&plot_area, figure, panel, style)?;
        draw_colorbar(&bar_area, &panel.axis, style)?;
    }
    Ok(())
}

fn draw_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    figure: &ProfileFigure,
    panel: &Panel,
    style: &FigureStyle,
) -> RenderResult<()>
where
    DB: DrawingBackend,
{
    let e = figure.extent;
    let mut builder = ChartBuilder::on(area);
    builder.margin(10);
    if style.annotate {
        builder.x_label_area_size(40).y_label_area_size(50);
    }
    let mut chart = builder.build_cartesian_2d(e.min_x..e.max_x, e.min_y..e.max_y)?;

    if style.annotate {
        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("x [m]")
            .y_desc("y [m]")
            .label_style(("sans-serif", 14))
            .axis_desc_style(("sans-serif", 16))
            .draw()?;
    }

    // Non-finite cells stay background.
    chart.draw_series(
        panel
            .cells
            .iter()
            .filter(|c| c.value.is_finite())
            .map(|c| Rectangle::new([(c.x0, c.y0), (c.x1, c.y1)], panel.axis.color(c.value).filled())),
    )?;

    chart.draw_series(
        figure
            .obstacles
            .iter()
            .filter(|o| o.len() >= 3)
            .map(|o| Polygon::new(o.clone(), WHITE.filled())),
    )?;
    chart.draw_series(
        figure
            .walls
            .iter()
            .map(|w| PathElement::new(w.clone(), WHITE.stroke_width(1))),
    )?;
    Ok(())
}

fn draw_colorbar<DB>(area: &DrawingArea<DB, Shift>, axis: &ColorAxis, style: &FigureStyle) -> RenderResult<()>
where
    DB: DrawingBackend,
{
    let mut builder = ChartBuilder::on(area);
    builder.margin_top(10).margin_bottom(if style.annotate { 50 } else { 10 }).margin_left(10).margin_right(10);
    if style.annotate {
        builder.set_label_area_size(LabelAreaPosition::Right, 70);
    }
    let mut chart = builder.build_cartesian_2d(0.0..1.0, axis.min..axis.max)?;

    if style.annotate {
        chart
            .configure_mesh()
            .disable_x_axis()
            .disable_mesh()
            .y_desc(axis.label)
            .label_style(("sans-serif", 14))
            .axis_desc_style(("sans-serif", 16))
            .y_label_formatter(&|v| format!("{v:.1}"))
            .draw()?;
    }

    let delta = (axis.max - axis.min) / COLORBAR_STEPS as f64;
    chart.draw_series((0..COLORBAR_STEPS).map(|step| {
        let v0 = axis.min + delta * step as f64;
        let v1 = v0 + delta;
        Rectangle::new([(0.0, v0), (1.0, v1)], axis.color((v0 + v1) * 0.5).filled())
    }))?;
    Ok(())
}

/// Draw `figure` to `<out_dir>/profiles_<area>.png` and return the path.
///
/// `out_dir` is created if missing.  Nothing is left at the destination
/// when the style is unusable or drawing fails.
pub fn write_profile_png(figure: &ProfileFigure, out_dir: &Path, style: &FigureStyle) -> RenderResult<PathBuf> {
    style.validate()?;
    let path = write_png(
        out_dir,
        &figure.file_name(),
        style.canvas_size(figure.panels.len()),
        |root| draw_profile_figure(root, figure, style),
    )?;

    info!(
        area = %figure.area,
        begin = %figure.window.0,
        end = %figure.window.1,
        path = %path.display(),
        "wrote profile image"
    );
    Ok(path)
}
