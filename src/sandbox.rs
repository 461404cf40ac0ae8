//! Sandbox domain: a test room and player spawn for trying the controller.
//!
//! Everything is in meters: the camera zooms in so a 1 m body is 48 px tall.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::motion::{
    GameLayer, Ground, Ladder, MotionController, MotionTuning, Player, SensorReadings, SensorRig,
    Wall, load_tuning,
};

/// Tuning file read at startup, relative to the working directory.
pub const TUNING_PATH: &str = "assets/motion/tuning.ron";

const PIXELS_PER_METER: f32 = 48.0;

pub struct SandboxPlugin;

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                setup_camera,
                spawn_test_room,
                (load_motion_tuning, spawn_player).chain(),
            ),
        );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_METER,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Replace the default tuning with the on-disk file when there is one.
fn load_motion_tuning(mut tuning: ResMut<MotionTuning>) {
    let path = Path::new(TUNING_PATH);
    if !path.exists() {
        info!("No tuning file at {}, using the dash runner preset", TUNING_PATH);
        return;
    }

    match load_tuning(path) {
        Ok(loaded) => {
            info!("Loaded motion tuning from {}", TUNING_PATH);
            *tuning = loaded;
        }
        Err(e) => warn!("{}, using the dash runner preset", e),
    }
}

fn spawn_player(mut commands: Commands, tuning: Res<MotionTuning>) {
    let controller = match MotionController::new(tuning.clone(), SensorRig::dash_runner()) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Refusing to spawn player, bad motion config: {}", e);
            return;
        }
    };

    info!(
        "Spawning player: move_speed={}, jump_force={}, air_jumps={}, dash={}",
        tuning.move_speed,
        tuning.jump_force,
        tuning.air_jumps,
        tuning.dash.is_some()
    );

    commands.spawn((
        // Identity & Movement
        (Player, controller, SensorReadings::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(0.8, 1.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -3.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(0.8, 1.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(tuning.default_gravity_scale),
            Friction::new(0.0),
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Ladder],
            ),
        ),
    ));
}

fn spawn_block(
    commands: &mut Commands,
    color: Color,
    size: Vec2,
    position: Vec2,
    layers: CollisionLayers,
) -> Entity {
    commands
        .spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            layers,
        ))
        .id()
}

fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let ladder_color = Color::srgba(0.7, 0.55, 0.3, 0.6);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    // Solid on the side and walkable on top
    let step_layers =
        CollisionLayers::new([GameLayer::Ground, GameLayer::Wall], [GameLayer::Player]);
    let ladder_layers = CollisionLayers::new(GameLayer::Ladder, [GameLayer::Player]);

    // Floor
    let floor = spawn_block(
        &mut commands,
        ground_color,
        Vec2::new(24.0, 1.0),
        Vec2::new(0.0, -5.0),
        ground_layers,
    );
    commands.entity(floor).insert(Ground);

    // Side walls
    for x in [-12.5, 12.5] {
        let wall = spawn_block(
            &mut commands,
            wall_color,
            Vec2::new(1.0, 12.0),
            Vec2::new(x, 0.5),
            wall_layers,
        );
        commands.entity(wall).insert(Wall);
    }

    // Platforms, stepping upward to the right
    for (size, position) in [
        (Vec2::new(3.0, 0.4), Vec2::new(-6.0, -2.0)),
        (Vec2::new(3.0, 0.4), Vec2::new(-1.0, 0.0)),
        (Vec2::new(2.5, 0.4), Vec2::new(4.0, 2.0)),
    ] {
        let platform = spawn_block(&mut commands, platform_color, size, position, ground_layers);
        commands.entity(platform).insert(Ground);
    }

    // Pillar for wall jumping and sliding
    let pillar = spawn_block(
        &mut commands,
        wall_color,
        Vec2::new(0.6, 4.0),
        Vec2::new(-9.0, -2.5),
        wall_layers,
    );
    commands.entity(pillar).insert(Wall);

    // Lip: a low step with an overhanging slab, for ledge correction
    let step = spawn_block(
        &mut commands,
        platform_color,
        Vec2::new(1.5, 0.8),
        Vec2::new(9.0, -4.1),
        step_layers,
    );
    commands.entity(step).insert((Ground, Wall));
    let slab = spawn_block(
        &mut commands,
        platform_color,
        Vec2::new(1.5, 0.3),
        Vec2::new(9.0, -2.55),
        ground_layers,
    );
    commands.entity(slab).insert(Ground);

    // Ladder up to the highest platform
    commands.spawn((
        Ladder,
        Sprite {
            color: ladder_color,
            custom_size: Some(Vec2::new(0.8, 6.5)),
            ..default()
        },
        Transform::from_xyz(5.8, -1.25, -0.1),
        RigidBody::Static,
        Collider::rectangle(0.8, 6.5),
        Sensor,
        ladder_layers,
    ));
}
