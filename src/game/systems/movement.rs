//! Piece glide animation
//!
//! Runs once per render frame. Each gliding piece blends a fixed fraction
//! of the remaining distance toward its logical square and snaps exactly
//! onto it once close enough. The target is re-derived from the piece
//! component every frame, so a move landing while a glide is still in
//! flight simply redirects the blend from the current intermediate
//! position; nothing is queued.

use crate::game::components::{GlideState, Piece};
use bevy::prelude::*;

/// Fraction of the remaining distance covered per frame
pub const GLIDE_BLEND: f32 = 0.05;
/// Remaining distance below which the piece lands exactly on target
pub const SNAP_DISTANCE: f32 = 0.01;

/// One interpolation step; returns the new position and whether it landed
pub fn glide_step(current: Vec3, target: Vec3) -> (Vec3, bool) {
    if current.distance(target) <= SNAP_DISTANCE {
        (target, true)
    } else {
        (current.lerp(target, GLIDE_BLEND), false)
    }
}

pub fn animate_piece_movement(mut pieces: Query<(&Piece, &mut Transform, &mut GlideState)>) {
    for (piece, mut transform, mut state) in pieces.iter_mut() {
        let target = piece.target_translation();

        if *state == GlideState::Resting {
            if transform.translation.distance(target) <= SNAP_DISTANCE {
                continue;
            }
            *state = GlideState::Gliding;
        }

        let (next, landed) = glide_step(transform.translation, target);
        transform.translation = next;
        if landed {
            *state = GlideState::Resting;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_covers_five_percent_of_remaining_distance() {
        let (next, landed) = glide_step(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        assert!(!landed);
        assert!((next.x - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_step_snaps_inside_threshold() {
        let target = Vec3::new(1.0, 0.0, 0.0);
        let (next, landed) = glide_step(Vec3::new(0.995, 0.0, 0.0), target);
        assert!(landed);
        assert_eq!(next, target);
    }

    #[test]
    fn test_repeated_steps_converge_exactly() {
        let target = Vec3::new(5.0, 0.0, 3.0);
        let mut current = Vec3::ZERO;
        let mut steps = 0;
        loop {
            let (next, landed) = glide_step(current, target);
            current = next;
            steps += 1;
            if landed {
                break;
            }
            assert!(steps < 1000, "glide never converged");
        }
        assert_eq!(current, target);
    }

    #[test]
    fn test_retarget_blends_from_intermediate_position() {
        let first = Vec3::new(4.0, 0.0, 0.0);
        let (mid, _) = glide_step(Vec3::ZERO, first);

        // a second logical move arrives before the first glide lands
        let second = Vec3::new(0.0, 0.0, 4.0);
        let (next, landed) = glide_step(mid, second);
        assert!(!landed);
        assert!(next.x < mid.x);
        assert!(next.z > 0.0);
    }
}
