//! Movement domain: sensor sampling against the avian2d world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::motion::{MotionController, PhysicsProbe, SensorReadings};

impl PhysicsProbe for SpatialQuery<'_, '_> {
    fn circle_hits(&self, center: Vec2, radius: f32, mask: LayerMask) -> bool {
        let filter = SpatialQueryFilter::from_mask(mask);
        !self
            .shape_intersections(&Collider::circle(radius), center, 0.0, &filter)
            .is_empty()
    }

    fn ray_hits(&self, origin: Vec2, direction: Dir2, distance: f32, mask: LayerMask) -> bool {
        let filter = SpatialQueryFilter::from_mask(mask);
        self.cast_ray(origin, direction, distance, true, &filter)
            .is_some()
    }
}

pub(crate) fn sample_sensors(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &MotionController, &mut SensorReadings)>,
) {
    for (transform, controller, mut readings) in &mut query {
        let position = transform.translation.truncate();
        let snapshot = controller.sensors().sample(&spatial_query, position);

        if snapshot.touching_wall() != readings.0.touching_wall() {
            debug!(
                "Wall contact: left={}, right={}",
                snapshot.left_wall, snapshot.right_wall
            );
        }
        readings.0 = snapshot;
    }
}
