//! Flow field: J = ρ · v.

use crate::{FieldError, FieldResult, Grid};

/// Element-wise product of the averaged density and velocity grids.
///
/// Shapes must match exactly; no broadcasting.
pub fn compute_flow(density: &Grid, velocity: &Grid) -> FieldResult<Grid> {
    if density.dim() != velocity.dim() {
        return Err(FieldError::ShapeMismatch {
            expected: density.dim(),
            found:    velocity.dim(),
            origin:   "averaged velocity".to_owned(),
        });
    }
    Ok(density * velocity)
}
