//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
#[cfg(feature = "dev-tools")]
pub(crate) mod gizmos;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::sample_sensors;
#[cfg(feature = "dev-tools")]
pub(crate) use gizmos::draw_sensor_gizmos;
pub(crate) use input::read_input;
pub(crate) use movement::{drive_motion, integrate_locomotion, sync_facing};
