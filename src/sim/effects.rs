//! Jump burst effects
//!
//! Bursts are driven by wall-clock time only, so they last the same on a
//! 30 Hz and a 144 Hz display.

use glam::Vec2;

use super::state::Burst;
use crate::tuning::Tuning;

/// Create a burst at `origin`, starting at host time `now` (ms)
pub fn spawn_burst(origin: Vec2, now: f64, tuning: &Tuning) -> Burst {
    Burst {
        origin,
        radius: tuning.burst_start_radius,
        opacity: tuning.burst_start_opacity,
        started_at: now,
        duration_ms: tuning.burst_duration_ms,
        start_radius: tuning.burst_start_radius,
        growth: tuning.burst_growth,
        start_opacity: tuning.burst_start_opacity,
    }
}

impl Burst {
    /// Fraction of the lifetime elapsed at `now`, clamped to [0, 1]
    pub fn progress(&self, now: f64) -> f32 {
        let elapsed = (now - self.started_at) as f32;
        (elapsed / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Recompute radius and opacity for `now`; returns the progress used
    pub fn sample(&mut self, now: f64) -> f32 {
        let progress = self.progress(now);
        self.radius = self.start_radius + self.growth * progress;
        self.opacity = self.start_opacity * (1.0 - progress);
        progress
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Animate every burst to `now` and drop the ones that have run their course
pub fn tick_bursts(bursts: &mut Vec<Burst>, now: f64) {
    bursts.retain_mut(|burst| {
        burst.sample(now);
        !burst.is_finished(now)
    });
}
