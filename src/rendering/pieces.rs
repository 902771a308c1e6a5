//! Piece spawning and appearance
//!
//! Pieces are primitive meshes (no external assets), one entity per piece
//! with the mesh on a child so its base sits on the board. Spawning reads
//! the initial [`BoardState`]; afterwards the sync system only moves,
//! promotes, or despawns what was spawned here.

use crate::game::components::{GlideState, Piece, PieceColor, PieceKind};
use crate::game::resources::BoardState;
use crate::game::system_sets::GameSystems;
use crate::game::systems::on_piece_click;
use bevy::picking::pointer::PointerInteraction;
use bevy::prelude::*;

/// Mesh handles per piece kind
#[derive(Resource)]
pub struct PieceMeshes {
    king: Handle<Mesh>,
    queen: Handle<Mesh>,
    rook: Handle<Mesh>,
    bishop: Handle<Mesh>,
    knight: Handle<Mesh>,
    pawn: Handle<Mesh>,
}

impl PieceMeshes {
    pub fn handle(&self, kind: PieceKind) -> Handle<Mesh> {
        match kind {
            PieceKind::King => self.king.clone(),
            PieceKind::Queen => self.queen.clone(),
            PieceKind::Rook => self.rook.clone(),
            PieceKind::Bishop => self.bishop.clone(),
            PieceKind::Knight => self.knight.clone(),
            PieceKind::Pawn => self.pawn.clone(),
        }
    }

    /// Child-mesh offset lifting the shape's base onto the board
    fn offset(kind: PieceKind) -> Vec3 {
        Vec3::new(0.0, Self::height(kind) / 2.0, 0.0)
    }

    fn height(kind: PieceKind) -> f32 {
        match kind {
            PieceKind::King => 0.72,
            PieceKind::Queen => 0.64,
            PieceKind::Rook => 0.42,
            PieceKind::Bishop => 0.52,
            PieceKind::Knight => 0.46,
            PieceKind::Pawn => 0.32,
        }
    }
}

impl FromWorld for PieceMeshes {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        PieceMeshes {
            king: meshes.add(Cylinder::new(0.17, PieceMeshes::height(PieceKind::King))),
            queen: meshes.add(Cylinder::new(0.16, PieceMeshes::height(PieceKind::Queen))),
            rook: meshes.add(Cylinder::new(0.15, PieceMeshes::height(PieceKind::Rook))),
            bishop: meshes.add(Cone {
                radius: 0.15,
                height: PieceMeshes::height(PieceKind::Bishop),
            }),
            knight: meshes.add(Cuboid::new(0.2, PieceMeshes::height(PieceKind::Knight), 0.3)),
            pawn: meshes.add(Capsule3d::new(0.12, PieceMeshes::height(PieceKind::Pawn) / 2.0)),
        }
    }
}

/// Material handles per piece color
#[derive(Resource)]
pub struct PieceMaterials {
    white: Handle<StandardMaterial>,
    black: Handle<StandardMaterial>,
}

impl PieceMaterials {
    pub fn handle(&self, color: PieceColor) -> Handle<StandardMaterial> {
        match color {
            PieceColor::White => self.white.clone(),
            PieceColor::Black => self.black.clone(),
        }
    }
}

impl FromWorld for PieceMaterials {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        PieceMaterials {
            white: materials.add(Color::srgb(0.78, 0.78, 0.78)),
            black: materials.add(Color::srgb(0.22, 0.22, 0.22)),
        }
    }
}

fn piece_name(piece: &Piece) -> String {
    let color = match piece.color {
        PieceColor::White => "White",
        PieceColor::Black => "Black",
    };
    format!("{} {} {}", color, piece.kind.label(), piece.square())
}

/// Spawn one piece entity at its board square, transform already on target
fn spawn_piece(
    commands: &mut Commands,
    meshes: &PieceMeshes,
    materials: &PieceMaterials,
    piece: Piece,
) {
    commands
        .spawn((
            Transform::from_translation(piece.target_translation()),
            Visibility::Inherited,
            PointerInteraction::default(),
            bevy::picking::Pickable::default(),
            Name::new(piece_name(&piece)),
            piece,
            GlideState::default(),
        ))
        .observe(on_piece_click)
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.handle(piece.kind)),
                MeshMaterial3d(materials.handle(piece.color)),
                Transform::from_translation(PieceMeshes::offset(piece.kind)),
                bevy::picking::Pickable::default(),
            ));
        });
}

fn create_pieces(
    mut commands: Commands,
    board: Res<BoardState>,
    meshes: Res<PieceMeshes>,
    materials: Res<PieceMaterials>,
) {
    for (square, board_piece) in board.pieces() {
        spawn_piece(
            &mut commands,
            &meshes,
            &materials,
            Piece {
                id: board_piece.id,
                kind: board_piece.kind,
                color: board_piece.color,
                row: square.row,
                col: square.col,
            },
        );
    }
    info!("[PIECES] spawned {} pieces", board.piece_count());
}

/// Swap the child mesh when a piece's kind changes (promotion)
fn update_piece_meshes(
    promoted: Query<(&Piece, &Children), Changed<Piece>>,
    mut child_meshes: Query<(&mut Mesh3d, &mut Transform)>,
    meshes: Res<PieceMeshes>,
) {
    for (piece, children) in promoted.iter() {
        let expected = meshes.handle(piece.kind);
        for child in children.iter() {
            let Ok((mut mesh, mut transform)) = child_meshes.get_mut(child) else {
                continue;
            };
            if mesh.0 != expected {
                mesh.0 = expected.clone();
                transform.translation = PieceMeshes::offset(piece.kind);
            }
        }
    }
}

pub struct PiecePlugin;

impl Plugin for PiecePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PieceMeshes>();
        app.init_resource::<PieceMaterials>();
        app.add_systems(Startup, create_pieces);
        app.add_systems(Update, update_piece_meshes.in_set(GameSystems::Visual));
    }
}
