//! Board state and move orchestration
//!
//! Reconciles a stateless "give me the whole board" rules engine with a
//! stateful, identity-preserving, animated scene:
//!
//! - `notation` - array coordinates <-> algebraic square notation
//! - `resources::engine` - the adapter owning the rules engine
//! - `rules::reconcile` - re-attaches stable ids to regenerated boards
//! - `systems::input` - the selection/turn/game-over state machine
//! - `systems::movement` - the glide interpolation contract
//! - `plugin` - registers everything with the app

pub mod components;
pub mod error;
pub mod notation;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod system_sets;
pub mod systems;

pub use plugin::GamePlugin;
