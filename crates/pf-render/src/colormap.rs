//! Colour mapping with fixed, per-field bounds.
//!
//! Fixed bounds keep profiles of different runs comparable: the same colour
//! always means the same density, speed or flow.

use plotters::style::RGBColor;

use pf_core::FieldKind;

/// The `jet` colormap: dark blue → cyan → yellow → dark red.
///
/// `t` is clamped to `[0, 1]`.
pub fn jet(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let four_t = 4.0 * t;
    let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    let r = (four_t - 1.5).min(4.5 - four_t);
    let g = (four_t - 0.5).min(3.5 - four_t);
    let b = (four_t + 0.5).min(2.5 - four_t);
    RGBColor(channel(r), channel(g), channel(b))
}

/// Colour-axis bounds and the colour-bar label of one field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorAxis {
    pub min:   f64,
    pub max:   f64,
    pub label: &'static str,
}

impl ColorAxis {
    pub const DENSITY: ColorAxis = ColorAxis {
        min:   0.0,
        max:   4.0,
        label: "Density [1/m²]",
    };
    pub const VELOCITY: ColorAxis = ColorAxis {
        min:   0.0,
        max:   1.2,
        label: "Velocity [m/s]",
    };
    pub const FLOW: ColorAxis = ColorAxis {
        min:   0.0,
        max:   2.0,
        label: "Flow [1/(m·s)]",
    };

    pub fn for_kind(kind: FieldKind) -> ColorAxis {
        match kind {
            FieldKind::Density  => ColorAxis::DENSITY,
            FieldKind::Velocity => ColorAxis::VELOCITY,
            FieldKind::Flow     => ColorAxis::FLOW,
        }
    }

    /// Position of `value` on the axis, clamped to `[0, 1]`.
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn color(&self, value: f64) -> RGBColor {
        jet(self.normalize(value))
    }
}
