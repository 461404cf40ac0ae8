//! Movement domain: keyboard levels for the motion controller.

use bevy::prelude::*;

use crate::motion::MotionInput;

const LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const DOWN: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
const UP: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const JUMP: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
const DASH: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyJ];

/// -1, 0 or +1 from a pair of opposing key sets.
fn key_axis(
    keyboard: &ButtonInput<KeyCode>,
    negative: [KeyCode; 2],
    positive: [KeyCode; 2],
) -> f32 {
    let mut value = 0.0;
    if keyboard.any_pressed(negative) {
        value -= 1.0;
    }
    if keyboard.any_pressed(positive) {
        value += 1.0;
    }
    value
}

/// Publish held levels only. The controller derives press edges itself.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MotionInput>) {
    // The vertical axis is always sampled; the controller ignores it off ladders
    input.axis = Vec2::new(
        key_axis(&keyboard, LEFT, RIGHT),
        key_axis(&keyboard, DOWN, UP),
    );
    input.jump_held = keyboard.any_pressed(JUMP);
    input.dash_held = keyboard.any_pressed(DASH);
}
