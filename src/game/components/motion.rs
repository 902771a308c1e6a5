//! Per-piece motion state
//!
//! Each piece entity carries its own small state machine instead of the
//! glide system sharing mutable cells across callbacks. The glide system
//! in [`crate::game::systems::movement`] drives the transitions.

use bevy::prelude::*;

/// Visual motion state of one piece
///
/// `Resting` means the transform sits exactly on the logical square.
/// `Gliding` means the transform is blending toward it. A logical move
/// while already gliding simply redirects the blend; moves are never
/// queued.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum GlideState {
    #[default]
    Resting,
    Gliding,
}
