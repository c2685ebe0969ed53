//! One-call steady-state profile computation.

use tracing::info;

use pf_core::{AreaId, FieldKind, ProfileConfig};

use crate::{
    AveragedField, FieldResult, FrameAxis, Grid, ResolvedWindow, ShapeGuard, average_field,
    compute_flow, discover_frames, resolve_window,
};

/// Averaged density and velocity plus the derived flow of one area.
#[derive(Clone, Debug)]
pub struct ProfileFields {
    pub area:     AreaId,
    pub window:   ResolvedWindow,
    pub density:  AveragedField,
    pub velocity: AveragedField,
    pub flow:     Grid,
}

impl ProfileFields {
    /// Grid of `kind`.
    pub fn grid(&self, kind: FieldKind) -> &Grid {
        match kind {
            FieldKind::Density  => &self.density.grid,
            FieldKind::Velocity => &self.velocity.grid,
            FieldKind::Flow     => &self.flow,
        }
    }

    /// `(rows, cols)` shared by all three grids.
    pub fn shape(&self) -> (usize, usize) {
        self.flow.dim()
    }
}

/// Discover, window, average and multiply for `config.area`.
///
/// # Errors
///
/// Any [`FieldError`](crate::FieldError): no frames for the area, an empty
/// window, nothing loadable, a shape mismatch or an unreadable file.
pub fn compute_profiles(config: &ProfileConfig) -> FieldResult<ProfileFields> {
    let velocity_files = discover_frames(&config.field_dir, FieldKind::Velocity, config.area)?;
    let density_files = discover_frames(&config.field_dir, FieldKind::Density, config.area)?;

    let axis = FrameAxis::from_files(&velocity_files)?;
    let window = resolve_window(config.steady, &axis)?;
    info!(
        area = %config.area,
        begin = %window.begin,
        end = %window.end,
        frames = window.len(),
        "resolved steady window"
    );

    let mut guard = ShapeGuard::new();
    let density = average_field(
        FieldKind::Density,
        &density_files,
        &axis,
        &window,
        config.policy,
        &mut guard,
    )?;
    let velocity = average_field(
        FieldKind::Velocity,
        &velocity_files,
        &axis,
        &window,
        config.policy,
        &mut guard,
    )?;
    let flow = compute_flow(&density.grid, &velocity.grid)?;

    if density.skipped_count() + velocity.skipped_count() > 0 {
        info!(
            area = %config.area,
            density_skipped = density.skipped_count(),
            velocity_skipped = velocity.skipped_count(),
            "averaged with missing frames"
        );
    }

    Ok(ProfileFields {
        area: config.area,
        window,
        density,
        velocity,
        flow,
    })
}
