use avian2d::prelude::*;
use bevy::prelude::*;

use dash_for_life::motion::MotionPlugin;
use dash_for_life::sandbox::SandboxPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Dash for Life".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((MotionPlugin, SandboxPlugin))
        .run();
}
