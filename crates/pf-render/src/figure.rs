//! The profile figure as a plain value.
//!
//! # Placement
//!
//! A `rows × cols` grid is stretched over the geometry extent.  Cell
//! `[r, c]` covers
//!
//! ```text
//! x ∈ [min_x + c·dx, min_x + (c+1)·dx]     dx = width  / cols
//! y ∈ [min_y + r·dy, min_y + (r+1)·dy]     dy = height / rows
//! ```
//!
//! so row 0 sits at the bottom (origin lower-left).

use pf_core::{AreaId, Extent, FieldKind, FrameIndex};
use pf_field::{Grid, ProfileFields};
use pf_geometry::Geometry;

use crate::{ColorAxis, RenderError, RenderResult};

// ── Style ─────────────────────────────────────────────────────────────────────

/// Pixel sizes and decoration switch for a profile image.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FigureStyle {
    /// Width of one heatmap panel, colour bar excluded.
    pub panel_width:    u32,
    pub panel_height:   u32,
    pub colorbar_width: u32,
    /// Draw axes, axis labels and colour-bar labels.  Needs a usable font.
    pub annotate:       bool,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            panel_width:    960,
            panel_height:   360,
            colorbar_width: 120,
            annotate:       true,
        }
    }
}

impl FigureStyle {
    /// Canvas size for `panels` vertically stacked panels.
    pub fn canvas_size(&self, panels: usize) -> (u32, u32) {
        (
            self.panel_width + self.colorbar_width,
            self.panel_height * panels as u32,
        )
    }

    /// Reject styles that leave no room to draw a panel.
    pub fn validate(&self) -> RenderResult<()> {
        if self.panel_width == 0 || self.panel_height == 0 {
            return Err(RenderError::EmptyCanvas {
                width:  self.panel_width,
                height: self.panel_height,
            });
        }
        Ok(())
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

/// One raster cell in physical coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellRect {
    pub row:   usize,
    pub col:   usize,
    pub x0:    f64,
    pub x1:    f64,
    pub y0:    f64,
    pub y1:    f64,
    pub value: f64,
}

/// One heatmap panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub kind:  FieldKind,
    pub axis:  ColorAxis,
    pub cells: Vec<CellRect>,
}

/// Everything needed to draw the three stacked profile panels.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileFigure {
    pub area:      AreaId,
    pub window:    (FrameIndex, FrameIndex),
    pub extent:    Extent,
    /// Density, velocity, flow; top to bottom.
    pub panels:    Vec<Panel>,
    /// Closed obstacle outlines, filled in the background colour.
    pub obstacles: Vec<Vec<(f64, f64)>>,
    /// Wall polylines, stroked.
    pub walls:     Vec<Vec<(f64, f64)>>,
}

impl ProfileFigure {
    /// `profiles_<area>.png`.
    pub fn file_name(&self) -> String {
        format!("profiles_{}.png", self.area)
    }

    pub fn panel(&self, kind: FieldKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.kind == kind)
    }
}

/// Lay the averaged fields over `geometry`.
///
/// # Errors
///
/// [`RenderError::DegenerateExtent`] when the geometry spans no area,
/// [`RenderError::EmptyGrid`] for a grid without cells.
pub fn build_profile_figure(fields: &ProfileFields, geometry: &Geometry) -> RenderResult<ProfileFigure> {
    let extent = geometry.extent();
    if !extent.is_proper() {
        return Err(RenderError::DegenerateExtent(extent));
    }

    let panels = FieldKind::ALL
        .iter()
        .map(|&kind| -> RenderResult<Panel> {
            Ok(Panel {
                kind,
                axis: ColorAxis::for_kind(kind),
                cells: cell_rects(fields.grid(kind), extent)?,
            })
        })
        .collect::<RenderResult<Vec<_>>>()?;

    let outline = |vertices: &[pf_core::Point2]| vertices.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>();

    Ok(ProfileFigure {
        area: fields.area,
        window: (fields.window.begin, fields.window.end),
        extent,
        panels,
        obstacles: geometry.obstacles().iter().map(|o| outline(&o.vertices)).collect(),
        walls: geometry.walls().iter().map(|w| outline(&w.vertices)).collect(),
    })
}

/// Cell rectangles of `grid` stretched over `extent`, row-major.
pub fn cell_rects(grid: &Grid, extent: Extent) -> RenderResult<Vec<CellRect>> {
    let (rows, cols) = grid.dim();
    if rows == 0 || cols == 0 {
        return Err(RenderError::EmptyGrid);
    }
    let dx = extent.width() / cols as f64;
    let dy = extent.height() / rows as f64;

    Ok(grid
        .indexed_iter()
        .map(|((row, col), &value)| CellRect {
            row,
            col,
            x0: extent.min_x + col as f64 * dx,
            x1: extent.min_x + (col + 1) as f64 * dx,
            y0: extent.min_y + row as f64 * dy,
            y1: extent.min_y + (row + 1) as f64 * dy,
            value,
        })
        .collect())
}
