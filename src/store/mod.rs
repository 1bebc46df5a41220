//! Persistence gateway for user records.

mod memory;
mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::{ensure_database_exists, PgUserStore};

use crate::error::StoreError;
use crate::model::{NewUser, User, UserChanges};
use async_trait::async_trait;

/// Create, read, update and delete user records.
///
/// `update` and `delete` report a missing record as [`StoreError::NotFound`];
/// there is no separate existence check.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every user, in insertion order.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    async fn find(&self, id: i32) -> Result<Option<User>, StoreError>;

    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Overwrite the fields set in `changes`; unset fields keep their stored value.
    async fn update(&self, id: i32, changes: UserChanges) -> Result<User, StoreError>;

    /// Remove the record and return it as it was before deletion.
    async fn delete(&self, id: i32) -> Result<User, StoreError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
