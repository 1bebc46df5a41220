//! HTTP handlers for users, books and probes.

pub mod books;
pub mod probes;
pub mod users;
pub use books::*;
pub use probes::*;
pub use users::*;
