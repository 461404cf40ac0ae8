//! Movement domain: the per-frame input-to-velocity state machine.
//!
//! [`MotionController::update`] runs once per variable-rate frame with a
//! fresh [`SensorSnapshot`] and makes every state decision: jumps, wall
//! slide and wall jump, ledge correction, ladder gravity and dash.
//! [`MotionController::fixed_update`] runs on the fixed step and only
//! integrates horizontal speed and ladder climbing.

use bevy::prelude::*;

use crate::motion::{
    ConfigError, DashTuning, Facing, Locomotion, MotionInput, MotionTuning, SensorRig,
    SensorSnapshot,
};

/// Target speeds at or below this use the deceleration rate.
const STOP_THRESHOLD: f32 = 0.1;

/// The slice of rigid body state the controller reads and overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub velocity: Vec2,
    pub gravity_scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ladder,
    Wall,
    Ground,
    Air,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashPhase {
    #[default]
    Ready,
    Dashing { direction: f32, remaining: f32 },
    /// Counts down to Ready. Starts at the cooldown minus the time the last
    /// dash frame ran past the dash duration.
    Cooling { remaining: f32 },
}

/// Turns a polled button level into a press edge.
#[derive(Debug, Clone, Copy, Default)]
struct ButtonEdge {
    held: bool,
}

impl ButtonEdge {
    fn press(&mut self, held: bool) -> bool {
        let pressed = held && !self.held;
        self.held = held;
        pressed
    }
}

#[derive(Debug, Clone, Default)]
pub struct MotionState {
    pub grounded: bool,
    pub touching_left_wall: bool,
    pub touching_right_wall: bool,
    pub wall_sliding: bool,
    pub on_ladder: bool,
    /// Seconds of continuous wall contact since the touching edge.
    pub wall_contact_time: f32,
    /// Horizontal sign of a wall jump: away from the wall.
    pub wall_push_sign: f32,
    pub jumps_left: u8,
    pub dash: DashPhase,
    pub facing: Facing,
    /// Horizontal input latched by the last non-dashing frame.
    pub move_input: f32,
    pub climb_input: f32,
    /// Jump performed this frame, if any.
    pub last_jump: Option<JumpKind>,
    was_touching_wall: bool,
    jump_button: ButtonEdge,
    dash_button: ButtonEdge,
}

#[derive(Component, Debug, Clone)]
pub struct MotionController {
    tuning: MotionTuning,
    sensors: SensorRig,
    state: MotionState,
}

impl MotionController {
    /// Build a controller, refusing configurations that would fault later.
    pub fn new(tuning: MotionTuning, sensors: SensorRig) -> Result<Self, ConfigError> {
        tuning.validate()?;
        sensors.validate_for(&tuning)?;

        let state = MotionState {
            jumps_left: tuning.air_jumps,
            wall_push_sign: 1.0,
            ..default()
        };
        Ok(Self {
            tuning,
            sensors,
            state,
        })
    }

    pub fn tuning(&self) -> &MotionTuning {
        &self.tuning
    }

    pub fn sensors(&self) -> &SensorRig {
        &self.sensors
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self.state.dash, DashPhase::Dashing { .. })
    }

    pub fn dash_ready(&self) -> bool {
        self.tuning.dash.is_some() && self.state.dash == DashPhase::Ready
    }

    /// Variable-rate step. `sensors` must have been sampled this frame.
    pub fn update(
        &mut self,
        dt: f32,
        input: &MotionInput,
        sensors: &SensorSnapshot,
        body: &mut Body,
    ) {
        self.state.last_jump = None;

        let jump_pressed = self.state.jump_button.press(input.jump_held);
        let dash_pressed = self.state.dash_button.press(input.dash_held);

        if !self.is_dashing() {
            self.latch_horizontal(input.axis.x);
        }
        self.refresh_dash_cooldown(dt);
        self.apply_contacts(dt, sensors);
        self.apply_ladder(input, sensors, body);

        if dash_pressed {
            self.try_start_dash();
        }
        if let Some(dash) = self.tuning.dash {
            if self.is_dashing() {
                self.dash_step(dt, dash, body);
                return;
            }
        }

        if jump_pressed {
            self.state.last_jump = self.jump(sensors, body);
        }
        self.apply_wall_slide(body);
        self.apply_ledge_correction(sensors, body);
    }

    /// Fixed-rate step: horizontal integration toward the input target and
    /// ladder climbing. Does nothing while dashing.
    pub fn fixed_update(&mut self, dt: f32, body: &mut Body) {
        if self.is_dashing() {
            return;
        }

        let target = self.state.move_input * self.tuning.move_speed;
        body.velocity.x = match self.tuning.locomotion {
            Locomotion::Instant => target,
            Locomotion::Accelerated {
                acceleration,
                deceleration,
            } => {
                let rate = if target.abs() > STOP_THRESHOLD {
                    acceleration
                } else {
                    deceleration
                };
                // Capped so a long step cannot overshoot the target
                let blend = (rate * dt).min(1.0);
                body.velocity.x + (target - body.velocity.x) * blend
            }
        };

        if let Some(ladder) = &self.tuning.ladder {
            if self.state.on_ladder {
                body.velocity.y = self.state.climb_input * ladder.climb_speed;
            }
        }
    }

    fn latch_horizontal(&mut self, x: f32) {
        self.state.move_input = x;
        if x > 0.0 {
            self.state.facing = Facing::Right;
        } else if x < 0.0 {
            self.state.facing = Facing::Left;
        }
    }

    fn refresh_dash_cooldown(&mut self, dt: f32) {
        if let DashPhase::Cooling { remaining } = self.state.dash {
            let remaining = remaining - dt;
            self.state.dash = if remaining <= 0.0 {
                debug!("Dash ready");
                DashPhase::Ready
            } else {
                DashPhase::Cooling { remaining }
            };
        }
    }

    fn apply_contacts(&mut self, dt: f32, sensors: &SensorSnapshot) {
        let was_grounded = self.state.grounded;
        self.state.grounded = sensors.grounded;

        if sensors.grounded {
            self.state.jumps_left = self.tuning.air_jumps;
            if !was_grounded {
                debug!("Landed: jumps_left={}", self.state.jumps_left);
            }
        } else if was_grounded {
            debug!("Left ground: jumps_left={}", self.state.jumps_left);
        }

        self.state.touching_left_wall = sensors.left_wall;
        self.state.touching_right_wall = sensors.right_wall;

        let touching = sensors.touching_wall();
        let lock_side = self
            .tuning
            .wall_jump
            .as_ref()
            .is_some_and(|wall_jump| wall_jump.lock_side);
        if let Some(side) = sensors.wall_side() {
            let first_contact = !self.state.was_touching_wall;
            if first_contact {
                self.state.wall_contact_time = 0.0;
            } else {
                self.state.wall_contact_time += dt;
            }
            if first_contact || !lock_side {
                self.state.wall_push_sign = -side;
            }
        }
        self.state.was_touching_wall = touching;
    }

    fn apply_ladder(&mut self, input: &MotionInput, sensors: &SensorSnapshot, body: &mut Body) {
        let on_ladder = self.tuning.ladder.is_some() && sensors.on_ladder;
        if on_ladder != self.state.on_ladder {
            debug!("Ladder contact: {}", on_ladder);
        }
        self.state.on_ladder = on_ladder;

        body.gravity_scale = if on_ladder {
            0.0
        } else {
            self.tuning.default_gravity_scale
        };
        self.state.climb_input = if on_ladder { input.axis.y } else { 0.0 };
    }

    fn try_start_dash(&mut self) {
        let Some(dash) = &self.tuning.dash else {
            return;
        };
        if self.state.dash != DashPhase::Ready {
            return;
        }

        let direction = if self.state.move_input != 0.0 {
            self.state.move_input.signum()
        } else {
            self.state.facing.sign()
        };
        self.state.dash = DashPhase::Dashing {
            direction,
            remaining: dash.duration,
        };
        debug!("Dash started: direction={}", direction);
    }

    fn dash_step(&mut self, dt: f32, dash: DashTuning, body: &mut Body) {
        let DashPhase::Dashing { direction, remaining } = self.state.dash else {
            return;
        };

        // No gravity during dash
        body.velocity = Vec2::new(direction * dash.speed, 0.0);
        body.gravity_scale = 0.0;
        self.state.wall_sliding = false;

        let remaining = remaining - dt;
        self.state.dash = if remaining <= 0.0 {
            let cooldown = dash.cooldown + remaining;
            debug!("Dash ended: cooldown {:.3}s", cooldown);
            DashPhase::Cooling { remaining: cooldown }
        } else {
            DashPhase::Dashing { direction, remaining }
        };
    }

    /// Resolve one jump press. Wall first, then ladder, ground and air.
    fn jump(&mut self, sensors: &SensorSnapshot, body: &mut Body) -> Option<JumpKind> {
        let jump_force = self.tuning.jump_force;

        if let Some(wall_jump) = &self.tuning.wall_jump {
            let dwelled = self.state.wall_contact_time >= wall_jump.dwell;
            if sensors.touching_wall() && dwelled {
                body.velocity = Vec2::new(
                    self.state.wall_push_sign * wall_jump.force_x,
                    wall_jump.force_y,
                );
                // Continued contact counts as a fresh touch next frame
                self.state.was_touching_wall = false;
                debug!("Wall jump: push={}", self.state.wall_push_sign);
                return Some(JumpKind::Wall);
            }
        }

        if self.state.on_ladder {
            body.velocity.y = jump_force;
            debug!("Ladder jump");
            return Some(JumpKind::Ladder);
        }

        if sensors.grounded {
            body.velocity.y = jump_force;
            debug!("Ground jump: jumps_left={}", self.state.jumps_left);
            Some(JumpKind::Ground)
        } else if self.state.jumps_left > 0 {
            body.velocity.y = jump_force;
            self.state.jumps_left -= 1;
            debug!("Air jump: jumps_left now {}", self.state.jumps_left);
            Some(JumpKind::Air)
        } else {
            None
        }
    }

    fn apply_wall_slide(&mut self, body: &mut Body) {
        let Some(slide) = &self.tuning.wall_slide else {
            self.state.wall_sliding = false;
            return;
        };

        let touching = self.state.touching_left_wall || self.state.touching_right_wall;
        let sliding = !self.state.grounded
            && !self.state.on_ladder
            && touching
            && self.state.move_input != 0.0
            && self.state.last_jump.is_none();

        if sliding {
            body.velocity.y = -slide.speed;
        }
        self.state.wall_sliding = sliding;
    }

    fn apply_ledge_correction(&mut self, sensors: &SensorSnapshot, body: &mut Body) {
        let Some(ledge) = &self.tuning.ledge else {
            return;
        };
        if !sensors.touching_wall() || sensors.grounded {
            return;
        }

        if !sensors.chest_blocked && sensors.ledge_ahead {
            body.velocity.y = ledge.step_up_velocity;
            self.state.wall_sliding = false;
        }
    }
}
