use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use glidechess::core::CorePlugin;
use glidechess::game::GamePlugin;
use glidechess::rendering::{BoardPlugin, PiecePlugin};
use glidechess::ui::HudPlugin;

const WINDOW_WIDTH: u32 = 1366;
const WINDOW_HEIGHT: u32 = 768;

fn main() {
    let window = Window {
        title: "GlideChess".to_owned(),
        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
        ..default()
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: false,
            ..default()
        })
        .add_plugins(MeshPickingPlugin)
        .add_plugins(CorePlugin)
        .add_plugins(GamePlugin)
        .add_plugins(BoardPlugin)
        .add_plugins(PiecePlugin)
        .add_plugins(HudPlugin)
        .add_systems(Startup, setup_scene)
        .run();
}

/// Camera and lighting aimed at the board center
fn setup_scene(mut commands: Commands) {
    let center = Vec3::new(3.5, 0.0, 3.5);

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(3.5, 9.0, 12.0).looking_at(center, Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            shadows_enabled: true,
            intensity: 100000.0,
            ..default()
        },
        Transform::from_xyz(3.5, 8.0, 3.5),
    ));
}
