//! User API: CRUD over user records on PostgreSQL, plus a static books listing,
//! OpenAPI docs and a demo page.

pub mod config;
pub mod doc;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ApiSettings, DeleteResponse, Settings, StoreKind};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{books, Book, NewUser, User, UserChanges};
pub use routes::{app, book_routes, probe_routes, user_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, MemoryUserStore, PgUserStore, UserStore};
