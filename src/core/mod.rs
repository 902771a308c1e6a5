//! Application-level concerns: settings and their persistence

pub mod error;
pub mod plugin;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use settings::GameSettings;
