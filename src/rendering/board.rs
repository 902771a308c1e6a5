//! Board squares and destination affordances
//!
//! Spawns the 64 square entities with checkerboard materials and click
//! observers, and overlays hint markers on the squares the selected piece
//! can reach.

use crate::core::GameSettings;
use crate::game::components::square_translation;
use crate::game::notation::Square;
use crate::game::resources::Selection;
use crate::game::systems::on_square_click;
use bevy::picking::pointer::PointerInteraction;
use bevy::prelude::*;

/// Component identifying one board square's position
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardSquare {
    pub row: u8,
    pub col: u8,
}

impl BoardSquare {
    pub fn square(&self) -> Square {
        Square::new(self.row, self.col)
    }

    /// Standard checkerboard: a8 is a light square
    pub fn is_light(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

/// Material handles for square colors and the hint overlay
#[derive(Resource)]
pub struct SquareMaterials {
    pub light: Handle<StandardMaterial>,
    pub dark: Handle<StandardMaterial>,
    pub hint: Handle<StandardMaterial>,
}

impl FromWorld for SquareMaterials {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        SquareMaterials {
            light: materials.add(Color::srgb(0.85, 0.82, 0.74)),
            dark: materials.add(Color::srgb(0.35, 0.25, 0.18)),
            hint: materials.add(StandardMaterial {
                base_color: Color::srgba(0.16, 0.65, 0.27, 0.8),
                alpha_mode: AlphaMode::Blend,
                ..default()
            }),
        }
    }
}

/// Marker for hint overlays spawned under destination squares
#[derive(Component)]
pub struct MoveHint;

fn create_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<SquareMaterials>,
) {
    let mesh = meshes.add(Plane3d::default().mesh().size(1.0, 1.0));

    for square in Square::all() {
        let board_square = BoardSquare {
            row: square.row,
            col: square.col,
        };
        let material = if board_square.is_light() {
            materials.light.clone()
        } else {
            materials.dark.clone()
        };

        commands
            .spawn((
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material),
                Transform::from_translation(square_translation(square)),
                PointerInteraction::default(),
                bevy::picking::Pickable::default(),
                Name::new(format!("Square {square}")),
                board_square,
            ))
            .observe(on_square_click);
    }
}

/// Show hint overlays on the selected piece's destinations
fn update_move_hints(
    mut commands: Commands,
    settings: Res<GameSettings>,
    selection: Res<Selection>,
    squares: Query<(Entity, &BoardSquare)>,
    hints: Query<Entity, With<MoveHint>>,
    materials: Res<SquareMaterials>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if !selection.is_changed() && !settings.is_changed() {
        return;
    }

    for entity in hints.iter() {
        commands.entity(entity).despawn();
    }

    if !settings.show_hints || !selection.is_selected() {
        return;
    }

    for (entity, board_square) in squares.iter() {
        if !selection.is_destination(board_square.square()) {
            continue;
        }
        commands.entity(entity).with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Plane3d::default().mesh().size(0.9, 0.9))),
                MeshMaterial3d(materials.hint.clone()),
                Transform::from_translation(Vec3::new(0.0, 0.01, 0.0)),
                MoveHint,
                Name::new("Move Hint"),
            ));
        });
    }
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SquareMaterials>();
        app.add_systems(Startup, create_board);
        app.add_systems(
            Update,
            update_move_hints.in_set(crate::game::system_sets::GameSystems::Visual),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_colors() {
        // a8 light, h8 dark, a1 dark, h1 light
        assert!(BoardSquare { row: 0, col: 0 }.is_light());
        assert!(!BoardSquare { row: 0, col: 7 }.is_light());
        assert!(!BoardSquare { row: 7, col: 0 }.is_light());
        assert!(BoardSquare { row: 7, col: 7 }.is_light());
    }

    #[test]
    fn test_neighbors_alternate() {
        for row in 0..8u8 {
            for col in 0..7u8 {
                let here = BoardSquare { row, col };
                let right = BoardSquare { row, col: col + 1 };
                assert_ne!(here.is_light(), right.is_light());
            }
        }
    }
}
