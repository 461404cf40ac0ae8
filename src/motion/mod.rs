//! Movement domain: platformer motion controller, sensors and tuning.

mod components;
mod config;
mod controller;
mod resources;
mod sensors;
mod systems;

pub use components::{Facing, GameLayer, Ground, Ladder, Player, SensorReadings, Wall};
pub use config::{ConfigError, TuningLoadError, load_tuning, parse_tuning};
pub use controller::{Body, DashPhase, JumpKind, MotionController, MotionState};
pub use resources::{
    DashTuning, LadderTuning, LedgeTuning, Locomotion, MotionInput, MotionTuning, WallJumpTuning,
    WallSlideTuning,
};
pub use sensors::{
    PhysicsProbe, Sensor, SensorKind, SensorOutline, SensorRig, SensorShape, SensorSnapshot,
};

use bevy::prelude::*;

use crate::motion::systems::{
    drive_motion, integrate_locomotion, read_input, sample_sensors, sync_facing,
};

pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionTuning>()
            .init_resource::<MotionInput>()
            // Sensors are refreshed before any state decision reads them
            .add_systems(
                Update,
                (read_input, sample_sensors, drive_motion, sync_facing).chain(),
            )
            .add_systems(FixedUpdate, integrate_locomotion);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, systems::draw_sensor_gizmos.after(sample_sensors));
    }
}
