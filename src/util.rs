// Formatting helpers for the demo overlays

/// Grid cell size in CSS pixels at scale 1.0.
pub const GRID_PX: f64 = 32.0;

pub fn format_scale(scale: f64) -> String {
    if !scale.is_finite() {
        return "—".to_string();
    }
    if scale >= 10.0 {
        format!("{:.1}×", scale)
    } else {
        format!("{:.2}×", scale)
    }
}

/// Grid spacing for `scale`, halved or doubled to stay readable on screen.
pub fn grid_spacing(scale: f64) -> f64 {
    if !(scale.is_finite() && scale > 0.0) {
        return GRID_PX;
    }
    let mut spacing = GRID_PX * scale;
    while spacing < 8.0 {
        spacing *= 2.0;
    }
    while spacing > 128.0 {
        spacing /= 2.0;
    }
    spacing
}
