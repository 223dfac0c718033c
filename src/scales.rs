use d3rs::scale::{LinearScale, Scale as D3Scale};

/// How far past either end of the pixel range a mapped value may land.
/// Keeps far-away data off-screen instead of overflowing `f32`.
pub const MAX_OVERSHOOT_PX: f64 = 1e6;

/// Linear mapping between a data domain and a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScale {
    scale: LinearScale,
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        let scale = LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0 as f64, range.1 as f64);
        Self { scale }
    }

    /// Data value to pixel offset, clamped to the range widened by
    /// [`MAX_OVERSHOOT_PX`] on both sides.
    pub fn map(&self, value: f64) -> f32 {
        let (r0, r1) = D3Scale::range(&self.scale);
        let lo = r0.min(r1) - MAX_OVERSHOOT_PX;
        let hi = r0.max(r1) + MAX_OVERSHOOT_PX;
        let res = self.scale.scale(value);
        if res.is_nan() {
            // Only a NaN input gets here; park it off the low end.
            return lo as f32;
        }
        res.clamp(lo, hi) as f32
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        let d0 = self.domain().0;
        self.scale.invert(pixel as f64).unwrap_or(d0)
    }

    pub fn domain(&self) -> (f64, f64) {
        D3Scale::domain(&self.scale)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.scale.ticks(count)
    }

    pub fn format_tick(&self, value: f64) -> String {
        if value.abs() < 0.001 && value.abs() > 0.0 {
            format!("{:.4}", value)
        } else if value.abs() > 1000.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.2}", value)
        }
    }
}
