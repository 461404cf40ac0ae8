//! Movement domain: probe geometry and per-frame sensor snapshots.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::motion::resources::positive;
use crate::motion::{ConfigError, GameLayer, MotionTuning};

/// Physics world queries needed by the probes.
///
/// Both are total: a query against an empty world answers `false`.
pub trait PhysicsProbe {
    /// Does a circle at `center` overlap anything in `mask`?
    fn circle_hits(&self, center: Vec2, radius: f32, mask: LayerMask) -> bool;

    /// Does a ray from `origin` hit anything in `mask` within `distance`?
    fn ray_hits(&self, origin: Vec2, direction: Dir2, distance: f32, mask: LayerMask) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorShape {
    Circle { radius: f32 },
    Ray { direction: Dir2, length: f32 },
}

/// A single probe: an offset from the body origin, a shape and the layers it
/// reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensor {
    pub offset: Vec2,
    pub shape: SensorShape,
    pub mask: LayerMask,
}

impl Sensor {
    pub fn circle(offset: Vec2, radius: f32, mask: impl Into<LayerMask>) -> Self {
        Self {
            offset,
            shape: SensorShape::Circle { radius },
            mask: mask.into(),
        }
    }

    pub fn ray(offset: Vec2, direction: Dir2, length: f32, mask: impl Into<LayerMask>) -> Self {
        Self {
            offset,
            shape: SensorShape::Ray { direction, length },
            mask: mask.into(),
        }
    }

    /// The same probe flipped horizontally when `side` is negative. Side
    /// relative probes (chest, ledge) are authored for a wall on the right.
    pub fn mirrored(&self, side: f32) -> Self {
        if side >= 0.0 {
            return *self;
        }
        let shape = match self.shape {
            SensorShape::Circle { radius } => SensorShape::Circle { radius },
            SensorShape::Ray { direction, length } => {
                let flipped = Vec2::new(-direction.x, direction.y);
                SensorShape::Ray {
                    direction: Dir2::new(flipped).unwrap_or(direction),
                    length,
                }
            }
        };
        Self {
            offset: Vec2::new(-self.offset.x, self.offset.y),
            shape,
            mask: self.mask,
        }
    }

    pub fn touching(&self, probe: &impl PhysicsProbe, position: Vec2) -> bool {
        let origin = position + self.offset;
        match self.shape {
            SensorShape::Circle { radius } => probe.circle_hits(origin, radius, self.mask),
            SensorShape::Ray { direction, length } => {
                probe.ray_hits(origin, direction, length, self.mask)
            }
        }
    }

    /// World-space outline of the probe for debug drawing.
    pub fn outline(&self, position: Vec2) -> SensorOutline {
        let origin = position + self.offset;
        match self.shape {
            SensorShape::Circle { radius } => SensorOutline::Circle {
                center: origin,
                radius,
            },
            SensorShape::Ray { direction, length } => SensorOutline::Line {
                start: origin,
                end: origin + direction.as_vec2() * length,
            },
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        for value in [self.offset.x, self.offset.y] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue { field: name, value });
            }
        }
        match self.shape {
            SensorShape::Circle { radius } => positive(name, radius),
            SensorShape::Ray { length, .. } => positive(name, length),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Ground,
    LeftWall,
    RightWall,
    Ladder,
    Chest,
    Ledge,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorOutline {
    Circle { center: Vec2, radius: f32 },
    Line { start: Vec2, end: Vec2 },
}

/// Every probe the controller reads. Ground and wall probes are always
/// present; the rest are only needed by the abilities that use them.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorRig {
    pub ground: Sensor,
    pub left_wall: Sensor,
    pub right_wall: Sensor,
    pub ladder: Option<Sensor>,
    /// Chest height ray toward the wall, authored for a wall on the right.
    pub chest: Option<Sensor>,
    /// Forward-and-up ground probe, authored for a wall on the right.
    pub ledge: Option<Sensor>,
}

impl Default for SensorRig {
    fn default() -> Self {
        Self::dash_runner()
    }
}

impl SensorRig {
    /// Probes for a 0.8 x 1.0 body: ray wall checks, ladder, chest and
    /// ledge probes.
    pub fn dash_runner() -> Self {
        let wall_check_distance = 0.2;
        Self {
            ground: Sensor::circle(Vec2::new(0.0, -0.5), 0.2, GameLayer::Ground),
            left_wall: Sensor::ray(
                Vec2::new(-0.4, 0.0),
                Dir2::NEG_X,
                wall_check_distance,
                GameLayer::Wall,
            ),
            right_wall: Sensor::ray(
                Vec2::new(0.4, 0.0),
                Dir2::X,
                wall_check_distance,
                GameLayer::Wall,
            ),
            ladder: Some(Sensor::circle(Vec2::ZERO, 0.3, GameLayer::Ladder)),
            chest: Some(Sensor::ray(
                Vec2::new(0.4, 0.4),
                Dir2::X,
                wall_check_distance + 0.05,
                GameLayer::Wall,
            )),
            ledge: Some(Sensor::circle(Vec2::new(0.5, 0.9), 0.16, GameLayer::Ground)),
        }
    }

    /// Circle wall checks on both sides and a ground check, nothing else.
    pub fn wall_jumper() -> Self {
        Self {
            ground: Sensor::circle(Vec2::new(0.0, -0.5), 0.2, GameLayer::Ground),
            left_wall: Sensor::circle(Vec2::new(-0.45, 0.0), 0.2, GameLayer::Wall),
            right_wall: Sensor::circle(Vec2::new(0.45, 0.0), 0.2, GameLayer::Wall),
            ladder: None,
            chest: None,
            ledge: None,
        }
    }

    /// Check probe sizes and that every enabled ability has its probes.
    pub fn validate_for(&self, tuning: &MotionTuning) -> Result<(), ConfigError> {
        self.ground.validate("sensors.ground")?;
        self.left_wall.validate("sensors.left_wall")?;
        self.right_wall.validate("sensors.right_wall")?;

        match (&tuning.ladder, &self.ladder) {
            (Some(_), None) => {
                return Err(ConfigError::MissingSensor {
                    sensor: "ladder",
                    feature: "ladder",
                });
            }
            (_, Some(ladder)) => ladder.validate("sensors.ladder")?,
            (None, None) => {}
        }

        if tuning.ledge.is_some() {
            let chest = self.chest.as_ref().ok_or(ConfigError::MissingSensor {
                sensor: "chest",
                feature: "ledge",
            })?;
            let ledge = self.ledge.as_ref().ok_or(ConfigError::MissingSensor {
                sensor: "ledge",
                feature: "ledge",
            })?;
            chest.validate("sensors.chest")?;
            ledge.validate("sensors.ledge")?;
        }
        Ok(())
    }

    /// Evaluate every probe at `position`.
    ///
    /// The chest and ledge probes point at the wall found by this same
    /// sample, and are only cast while airborne against a wall.
    pub fn sample(&self, probe: &impl PhysicsProbe, position: Vec2) -> SensorSnapshot {
        let mut snapshot = SensorSnapshot {
            grounded: self.ground.touching(probe, position),
            left_wall: self.left_wall.touching(probe, position),
            right_wall: self.right_wall.touching(probe, position),
            on_ladder: self
                .ladder
                .as_ref()
                .is_some_and(|ladder| ladder.touching(probe, position)),
            chest_blocked: false,
            ledge_ahead: false,
        };

        if snapshot.grounded {
            return snapshot;
        }
        if let Some(side) = snapshot.wall_side() {
            if let Some(chest) = &self.chest {
                snapshot.chest_blocked = chest.mirrored(side).touching(probe, position);
            }
            if let Some(ledge) = &self.ledge {
                snapshot.ledge_ahead = ledge.mirrored(side).touching(probe, position);
            }
        }
        snapshot
    }

    /// Outlines of every probe at `position`. `side` orients the chest and
    /// ledge probes (+1 right, -1 left).
    pub fn outlines(&self, position: Vec2, side: f32) -> Vec<(SensorKind, SensorOutline)> {
        let mut outlines = vec![
            (SensorKind::Ground, self.ground.outline(position)),
            (SensorKind::LeftWall, self.left_wall.outline(position)),
            (SensorKind::RightWall, self.right_wall.outline(position)),
        ];
        if let Some(ladder) = &self.ladder {
            outlines.push((SensorKind::Ladder, ladder.outline(position)));
        }
        if let Some(chest) = &self.chest {
            outlines.push((SensorKind::Chest, chest.mirrored(side).outline(position)));
        }
        if let Some(ledge) = &self.ledge {
            outlines.push((SensorKind::Ledge, ledge.mirrored(side).outline(position)));
        }
        outlines
    }
}

/// Immutable result of one sensor sample. Recomputed every frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SensorSnapshot {
    pub grounded: bool,
    pub left_wall: bool,
    pub right_wall: bool,
    pub on_ladder: bool,
    /// Chest probe hit the wall: a full wall rather than a low lip.
    pub chest_blocked: bool,
    /// Ground geometry sits forward and up, toward the wall.
    pub ledge_ahead: bool,
}

impl SensorSnapshot {
    pub fn touching_wall(&self) -> bool {
        self.left_wall || self.right_wall
    }

    /// Direction toward the touched wall: +1 right, -1 left. The right wall
    /// wins when both are touched.
    pub fn wall_side(&self) -> Option<f32> {
        if self.right_wall {
            Some(1.0)
        } else if self.left_wall {
            Some(-1.0)
        } else {
            None
        }
    }
}
