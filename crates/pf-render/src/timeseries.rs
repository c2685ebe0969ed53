//! N(t) line charts.
//!
//! With [`AreaSelector::All`] every series is drawn, labelled by its area id,
//! and a legend is shown.  With a specific area only that area's series is
//! drawn, without label or legend.

use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use pf_core::AreaSelector;
use pf_series::TimeSeries;

use crate::output::write_png;
use crate::{RenderError, RenderResult};

/// Canvas size and decoration switch for an N(t) chart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NtStyle {
    pub width:    u32,
    pub height:   u32,
    /// Draw axes, axis labels and the legend.  Needs a usable font.
    pub annotate: bool,
}

impl Default for NtStyle {
    fn default() -> Self {
        Self {
            width:    1280,
            height:   760,
            annotate: true,
        }
    }
}

/// One line of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct NtSeries {
    /// Legend entry; `None` for an unlabelled line.
    pub label:  Option<String>,
    pub points: Vec<(f64, f64)>,
}

/// Min/max of t and of N over every line.
pub type NtBounds = ((f64, f64), (f64, f64));

/// The chart as a value.
#[derive(Clone, Debug, PartialEq)]
pub struct NtChart {
    pub selector: AreaSelector,
    pub series:   Vec<NtSeries>,
    pub legend:   bool,
    /// `None` when every line is empty.
    pub bounds:   Option<NtBounds>,
}

impl NtChart {
    /// `Nt_<area>.png`, or `Nt_all.png`.
    pub fn file_name(&self) -> String {
        format!("Nt_{}.png", self.selector)
    }

    /// Axis ranges covering every point; degenerate spans are widened to 1.
    pub fn ranges(&self) -> (Range<f64>, Range<f64>) {
        match self.bounds {
            Some((t, n)) => (widen(t), widen(n)),
            None => (0.0..1.0, 0.0..1.0),
        }
    }
}

fn widen((lo, hi): (f64, f64)) -> Range<f64> {
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    if hi - lo <= 0.0 { lo..lo + 1.0 } else { lo..hi }
}

/// Pick and label the series `selector` asks for.
///
/// # Errors
///
/// [`RenderError::NoSeries`] when nothing is left to plot.
pub fn build_nt_chart(selector: AreaSelector, series: &[TimeSeries]) -> RenderResult<NtChart> {
    let picked: Vec<&TimeSeries> = series.iter().filter(|s| selector.matches(s.area)).collect();
    if picked.is_empty() {
        return Err(RenderError::NoSeries);
    }

    let bounds = picked
        .iter()
        .filter_map(|s| s.bounds())
        .reduce(|((tl, th), (nl, nh)), ((t0, t1), (n0, n1))| {
            ((tl.min(t0), th.max(t1)), (nl.min(n0), nh.max(n1)))
        });
    let lines = picked
        .iter()
        .map(|s| NtSeries {
            label:  matches!(selector, AreaSelector::All).then(|| s.area.to_string()),
            points: s.points.clone(),
        })
        .collect();

    Ok(NtChart {
        selector,
        legend: matches!(selector, AreaSelector::All),
        series: lines,
        bounds,
    })
}

/// Draw `chart` onto `root`.
pub fn draw_nt_chart<DB>(root: &DrawingArea<DB, Shift>, chart: &NtChart, style: &NtStyle) -> RenderResult<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE)?;
    let (x_range, y_range) = chart.ranges();

    let mut builder = ChartBuilder::on(root);
    builder.margin(25);
    if style.annotate {
        builder
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 40);
    }
    let mut ctx = builder.build_cartesian_2d(x_range, y_range)?;

    if style.annotate {
        ctx.configure_mesh()
            .x_desc("t")
            .y_desc("N")
            .label_style(("sans-serif", 18))
            .axis_desc_style(("sans-serif", 20))
            .draw()?;
    }

    for (i, line) in chart.series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let anno = ctx.draw_series(LineSeries::new(line.points.iter().copied(), color.stroke_width(2)))?;
        if let Some(label) = &line.label {
            anno.label(label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(2)));
        }
    }

    if chart.legend && style.annotate {
        ctx.configure_series_labels()
            .background_style(WHITE.mix(0.7))
            .border_style(BLACK.mix(0.3))
            .label_font(("sans-serif", 16))
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;
    }
    Ok(())
}

/// Draw `chart` to `<out_dir>/Nt_<area>.png` and return the path.
///
/// Nothing is left at the destination when drawing fails.
pub fn write_nt_png(chart: &NtChart, out_dir: &Path, style: &NtStyle) -> RenderResult<PathBuf> {
    let path = write_png(out_dir, &chart.file_name(), (style.width, style.height), |root| {
        draw_nt_chart(root, chart, style)
    })?;

    info!(
        selector = %chart.selector,
        series = chart.series.len(),
        path = %path.display(),
        "wrote N(t) chart"
    );
    Ok(path)
}
