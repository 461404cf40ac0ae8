//! Movement domain: systems that run the controller against rigid bodies.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::motion::{Body, Facing, MotionController, MotionInput, SensorReadings};

pub(crate) fn drive_motion(
    time: Res<Time>,
    input: Res<MotionInput>,
    mut query: Query<(
        &mut MotionController,
        &SensorReadings,
        &mut LinearVelocity,
        &mut GravityScale,
    )>,
) {
    let dt = time.delta_secs();

    for (mut controller, readings, mut velocity, mut gravity) in &mut query {
        let mut body = Body {
            velocity: velocity.0,
            gravity_scale: gravity.0,
        };
        controller.update(dt, &input, &readings.0, &mut body);
        velocity.0 = body.velocity;
        gravity.0 = body.gravity_scale;
    }
}

pub(crate) fn integrate_locomotion(
    time: Res<Time>,
    mut query: Query<(&mut MotionController, &mut LinearVelocity, &GravityScale)>,
) {
    let dt = time.delta_secs();

    for (mut controller, mut velocity, gravity) in &mut query {
        let mut body = Body {
            velocity: velocity.0,
            gravity_scale: gravity.0,
        };
        controller.fixed_update(dt, &mut body);
        velocity.0 = body.velocity;
    }
}

pub(crate) fn sync_facing(mut query: Query<(&MotionController, &mut Sprite)>) {
    for (controller, mut sprite) in &mut query {
        let flip = controller.state().facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
