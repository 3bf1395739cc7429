pub mod commands;
pub mod handlers;

pub use commands::command_argument_builder;
pub use handlers::{progress_marker, resolve_source};
