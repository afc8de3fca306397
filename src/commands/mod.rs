//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the catalog.

pub mod add;
pub mod delete;
pub mod fav;
pub mod list;
pub mod save;
pub mod settings;
pub mod tags;

// Re-export execute functions for convenience
pub use add::execute as add;
pub use delete::execute as delete;
pub use fav::execute as fav;
pub use list::execute as list;
pub use save::{execute as save, list_saved as saved};
pub use settings::execute as config;
pub use tags::execute as tags;
