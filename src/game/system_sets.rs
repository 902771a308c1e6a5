//! System organization
//!
//! Click handling runs in picking observers, which complete before the
//! `Update` schedule; the remaining per-frame work is ordered explicitly
//! so entity state is synchronized before anything animates or draws.

use bevy::prelude::*;

/// Execution order for the per-frame game systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Carry the logical board onto piece entities
    Sync,
    /// Animation and affordances (glide, move hints)
    Visual,
}
