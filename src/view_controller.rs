use crate::data_types::AxisRange;

/// ViewController holds the arithmetic of viewport interactions (zoom, pan)
/// independently of the GPUI infrastructure to facilitate testing.
pub struct ViewController;

impl ViewController {
    /// Calculates and applies a pan on an axis based on a pixel delta.
    pub fn pan_axis(range: &mut AxisRange, delta_pixels: f32, total_pixels: f32, is_y: bool) {
        if total_pixels <= 0.0 {
            return;
        }
        let ratio = range.span() / total_pixels as f64;

        // Dragging pulls the content along with the pointer: moving right shows
        // what was on the left, so x values decrease. Screen y points down, so a
        // downward drag reveals larger data values at the top.
        let delta_data = if is_y {
            delta_pixels as f64 * ratio
        } else {
            -delta_pixels as f64 * ratio
        };

        range.pan(delta_data);
    }

    /// Zooms on an axis at a specific pivot point (expressed as a fraction of the domain).
    /// `factor` multiplies the span: below 1 zooms in.
    pub fn zoom_axis_at(range: &mut AxisRange, pivot_pct: f64, factor: f64) {
        let mut new_factor = factor;
        const MIN_SPAN: f64 = 1e-9;

        if range.span() * factor < MIN_SPAN {
            new_factor = MIN_SPAN / range.span();
        }

        let pivot_data = range.min + range.span() * pivot_pct;
        range.zoom_at(pivot_data, pivot_pct, new_factor);
    }

    /// Clamps a requested zoom against the allowed scale extent.
    ///
    /// Returns the new cumulative scale and the span multiplier that moves
    /// the axes from `current_scale` to it.
    pub fn clamp_zoom(current_scale: f64, factor: f64, extent: (f64, f64)) -> (f64, f64) {
        let target = (current_scale * factor).clamp(extent.0, extent.1);
        (target, current_scale / target)
    }

    /// Scale multiplier for a wheel delta; positive deltas zoom in.
    pub fn wheel_zoom_factor(delta: f32, sensitivity: f64) -> f64 {
        2f64.powf(delta as f64 * sensitivity)
    }

    /// Centers the axis on a given value, keeping its span.
    pub fn move_to_center(range: &mut AxisRange, center_data: f64) {
        let span = range.span();
        range.min = center_data - span / 2.0;
        range.max = center_data + span / 2.0;
    }

    /// Maps a pixel offset to the fraction of the axis it sits at.
    pub fn pixel_fraction(pixels: f32, total_pixels: f32, invert: bool) -> f64 {
        if total_pixels <= 0.0 {
            return 0.5;
        }
        let pct = (pixels / total_pixels) as f64;
        if invert {
            1.0 - pct
        } else {
            pct
        }
    }
}
