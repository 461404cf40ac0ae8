//! Movement domain: debug drawing of sensor probes.

use bevy::prelude::*;

use crate::motion::{MotionController, SensorKind, SensorOutline, SensorReadings};

fn sensor_color(kind: SensorKind) -> Color {
    match kind {
        SensorKind::Ground => Color::srgb(1.0, 0.9, 0.1),
        SensorKind::RightWall => Color::srgb(0.9, 0.2, 0.2),
        SensorKind::LeftWall => Color::srgb(0.2, 0.3, 0.9),
        SensorKind::Ladder => Color::srgb(0.2, 0.9, 0.3),
        SensorKind::Chest => Color::srgb(0.9, 0.6, 0.2),
        SensorKind::Ledge => Color::srgb(0.9, 0.2, 0.9),
    }
}

pub(crate) fn draw_sensor_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &MotionController, &SensorReadings)>,
) {
    for (transform, controller, readings) in &query {
        let position = transform.translation.truncate();
        let side = readings
            .0
            .wall_side()
            .unwrap_or_else(|| controller.state().facing.sign());

        for (kind, outline) in controller.sensors().outlines(position, side) {
            let color = sensor_color(kind);
            match outline {
                SensorOutline::Circle { center, radius } => {
                    gizmos.circle_2d(center, radius, color);
                }
                SensorOutline::Line { start, end } => {
                    gizmos.line_2d(start, end, color);
                }
            }
        }
    }
}
