//! Process settings: typed values and their loading from the environment.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
