//! Frame-ticked camera animation.

use super::Camera;

/// Cubic ease-out on `t ∈ [0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Interpolates the camera between two states over a fixed duration.
///
/// Nothing runs on its own; the host calls [`ViewportAnimation::sample`]
/// once per frame with the current time.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportAnimation {
    from: Camera,
    to: Camera,
    start_ms: f64,
    duration_ms: f64,
}

impl ViewportAnimation {
    pub fn new(from: Camera, to: Camera, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
        }
    }

    pub fn target(&self) -> Camera {
        self.to
    }

    /// Progress in `[0, 1]` at `now_ms`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Camera state at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> Camera {
        let k = ease_out_cubic(self.progress(now_ms));
        let lerp = |a: f64, b: f64| a + (b - a) * k;
        Camera {
            x: lerp(self.from.x, self.to.x),
            y: lerp(self.from.y, self.to.y),
            zoom: lerp(self.from.zoom, self.to.zoom),
        }
    }
}
