//! Pure board logic with no ECS dependencies

pub mod reconcile;

pub use reconcile::reconcile;
