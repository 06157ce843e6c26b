//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`] so a host can ship a JSON
//! override without rebuilding. Missing fields fall back to [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors produced while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field_width: f32,
    pub field_height: f32,
    pub ground_y: f32,
    pub reference_frame_ms: f32,

    pub gravity: f32,
    pub jump_velocity: f32,

    pub body_start_x: f32,
    pub body_start_y: f32,
    pub body_radius: f32,

    pub obstacle_speed: f32,
    pub obstacle_gap: f32,
    pub obstacle_width: f32,
    pub spawn_interval_frames: u64,
    pub top_height_min: u32,
    pub top_height_span: u32,

    pub burst_start_radius: f32,
    pub burst_growth: f32,
    pub burst_start_opacity: f32,
    pub burst_duration_ms: f32,
    pub burst_offset_x: f32,
    pub burst_offset_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_y: GROUND_Y,
            reference_frame_ms: REFERENCE_FRAME_MS,

            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            body_start_x: BODY_START_X,
            body_start_y: BODY_START_Y,
            body_radius: BODY_RADIUS,

            obstacle_speed: OBSTACLE_SPEED,
            obstacle_gap: OBSTACLE_GAP,
            obstacle_width: OBSTACLE_WIDTH,
            spawn_interval_frames: SPAWN_INTERVAL_FRAMES,
            top_height_min: TOP_HEIGHT_MIN,
            top_height_span: TOP_HEIGHT_SPAN,

            burst_start_radius: BURST_START_RADIUS,
            burst_growth: BURST_GROWTH,
            burst_start_opacity: BURST_START_OPACITY,
            burst_duration_ms: BURST_DURATION_MS,
            burst_offset_x: BURST_OFFSET_X,
            burst_offset_y: BURST_OFFSET_Y,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!(
            "Loaded tuning (spawn every {} frames, gap {})",
            tuning.spawn_interval_frames,
            tuning.obstacle_gap
        );
        Ok(tuning)
    }

    /// Reject values that would break the simulation's invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("reference_frame_ms", self.reference_frame_ms),
            ("body_radius", self.body_radius),
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_gap", self.obstacle_gap),
            ("obstacle_width", self.obstacle_width),
            ("burst_duration_ms", self.burst_duration_ms),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be greater than zero",
                });
            }
        }

        let finite = [
            ("ground_y", self.ground_y),
            ("body_start_x", self.body_start_x),
            ("body_start_y", self.body_start_y),
            ("burst_start_radius", self.burst_start_radius),
            ("burst_growth", self.burst_growth),
            ("burst_start_opacity", self.burst_start_opacity),
            ("burst_offset_x", self.burst_offset_x),
            ("burst_offset_y", self.burst_offset_y),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a finite number",
                });
            }
        }

        // Gravity pulls down, a jump pushes up
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(TuningError::Invalid {
                field: "gravity",
                reason: "must be zero or greater",
            });
        }
        if !self.jump_velocity.is_finite() || self.jump_velocity >= 0.0 {
            return Err(TuningError::Invalid {
                field: "jump_velocity",
                reason: "must be negative (upward)",
            });
        }

        if self.spawn_interval_frames == 0 {
            return Err(TuningError::Invalid {
                field: "spawn_interval_frames",
                reason: "must be at least 1",
            });
        }
        if self.top_height_span == 0 {
            return Err(TuningError::Invalid {
                field: "top_height_span",
                reason: "must be at least 1",
            });
        }
        if self.obstacle_gap >= self.field_height {
            return Err(TuningError::Invalid {
                field: "obstacle_gap",
                reason: "must be smaller than the field height",
            });
        }
        let Some(max_top) = self.top_height_min.checked_add(self.top_height_span) else {
            return Err(TuningError::Invalid {
                field: "top_height_min",
                reason: "top height range overflows",
            });
        };
        if max_top as f32 + self.obstacle_gap > self.field_height {
            return Err(TuningError::Invalid {
                field: "top_height_span",
                reason: "gap would extend below the field",
            });
        }
        Ok(())
    }

    /// Upper bound (exclusive) of a spawned top barrier height
    pub fn top_height_max(&self) -> u32 {
        self.top_height_min.saturating_add(self.top_height_span)
    }
}
