//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::motion::ConfigError;

/// How the fixed step moves horizontal velocity toward the input target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Locomotion {
    /// Close a fraction of the gap each step. `deceleration` applies when the
    /// target speed is near zero.
    Accelerated { acceleration: f32, deceleration: f32 },
    /// Snap straight to the target speed.
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSlideTuning {
    /// Downward speed held while sliding.
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallJumpTuning {
    pub force_x: f32,
    pub force_y: f32,
    /// Seconds a wall must be touched before it can be jumped off.
    pub dwell: f32,
    /// Keep the push-off direction of the first contact until contact breaks.
    pub lock_side: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgeTuning {
    pub step_up_velocity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LadderTuning {
    pub climb_speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashTuning {
    pub speed: f32,
    pub duration: f32,
    /// Seconds after the dash ends before the next one is allowed.
    pub cooldown: f32,
}

/// Author-time movement constants. Optional blocks switch whole abilities
/// off when `None`.
///
/// Fields missing from a RON file are taken from [`MotionTuning::default`].
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionTuning {
    pub move_speed: f32,
    pub locomotion: Locomotion,
    pub jump_force: f32,
    /// Jumps available in the air before landing again (1 = double jump).
    pub air_jumps: u8,
    /// Gravity scale restored whenever the body is off a ladder.
    pub default_gravity_scale: f32,
    pub wall_slide: Option<WallSlideTuning>,
    pub wall_jump: Option<WallJumpTuning>,
    pub ledge: Option<LedgeTuning>,
    pub ladder: Option<LadderTuning>,
    pub dash: Option<DashTuning>,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self::dash_runner()
    }
}

impl MotionTuning {
    /// Full move set: accelerated running, double jump, wall slide and wave
    /// jump, ledge correction, ladders and dash.
    pub fn dash_runner() -> Self {
        Self {
            move_speed: 6.0,
            locomotion: Locomotion::Accelerated {
                acceleration: 15.0,
                deceleration: 15.0,
            },
            jump_force: 12.0,
            air_jumps: 1,
            default_gravity_scale: 3.0,
            wall_slide: Some(WallSlideTuning { speed: 1.5 }),
            wall_jump: Some(WallJumpTuning {
                force_x: 4.0,
                force_y: 12.0,
                dwell: 0.0,
                lock_side: false,
            }),
            ledge: Some(LedgeTuning {
                step_up_velocity: 8.0,
            }),
            ladder: Some(LadderTuning { climb_speed: 4.0 }),
            dash: Some(DashTuning {
                speed: 20.0,
                duration: 0.15,
                cooldown: 0.7,
            }),
        }
    }

    /// Minimal move set: instant running, single jump, and a wall jump that
    /// needs a one second hold on the wall.
    pub fn wall_jumper() -> Self {
        Self {
            move_speed: 5.0,
            locomotion: Locomotion::Instant,
            jump_force: 12.0,
            air_jumps: 0,
            default_gravity_scale: 3.0,
            wall_slide: None,
            wall_jump: Some(WallJumpTuning {
                force_x: 8.0,
                force_y: 12.0,
                dwell: 1.0,
                lock_side: true,
            }),
            ledge: None,
            ladder: None,
            dash: None,
        }
    }

    /// Rejects values no controller can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("move_speed", self.move_speed)?;
        if let Locomotion::Accelerated {
            acceleration,
            deceleration,
        } = self.locomotion
        {
            non_negative("locomotion.acceleration", acceleration)?;
            non_negative("locomotion.deceleration", deceleration)?;
        }
        non_negative("jump_force", self.jump_force)?;
        non_negative("default_gravity_scale", self.default_gravity_scale)?;

        if let Some(slide) = &self.wall_slide {
            non_negative("wall_slide.speed", slide.speed)?;
        }
        if let Some(wall_jump) = &self.wall_jump {
            // force_x is a magnitude; direction comes from the wall side
            non_negative("wall_jump.force_x", wall_jump.force_x)?;
            non_negative("wall_jump.force_y", wall_jump.force_y)?;
            non_negative("wall_jump.dwell", wall_jump.dwell)?;
        }
        if let Some(ledge) = &self.ledge {
            non_negative("ledge.step_up_velocity", ledge.step_up_velocity)?;
        }
        if let Some(ladder) = &self.ladder {
            non_negative("ladder.climb_speed", ladder.climb_speed)?;
        }
        if let Some(dash) = &self.dash {
            non_negative("dash.speed", dash.speed)?;
            positive("dash.duration", dash.duration)?;
            non_negative("dash.cooldown", dash.cooldown)?;
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

pub(crate) fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

/// Polled input levels for the current frame. Edges are derived by the
/// controller, so `jump_held`/`dash_held` are plain button states.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MotionInput {
    pub axis: Vec2,
    pub jump_held: bool,
    pub dash_held: bool,
}
