//! In-process [`UserStore`] for tests and database-less runs.

use super::UserStore;
use crate::error::StoreError;
use crate::model::{NewUser, User, UserChanges};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    last_id: i32,
    users: BTreeMap<i32, User>,
}

/// Keeps users in a map ordered by id. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<T>(&self, f: impl FnOnce(&mut Inner) -> T) -> T {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut *guard)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.with(|inner| inner.users.values().cloned().collect()))
    }

    async fn find(&self, id: i32) -> Result<Option<User>, StoreError> {
        Ok(self.with(|inner| inner.users.get(&id).cloned()))
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        Ok(self.with(|inner| {
            inner.last_id += 1;
            let created = User {
                id: inner.last_id,
                name: user.name,
                email: user.email,
            };
            inner.users.insert(created.id, created.clone());
            created
        }))
    }

    async fn update(&self, id: i32, changes: UserChanges) -> Result<User, StoreError> {
        self.with(|inner| match inner.users.get_mut(&id) {
            Some(user) => {
                changes.apply(user);
                Ok(user.clone())
            }
            None => Err(StoreError::NotFound(id)),
        })
    }

    async fn delete(&self, id: i32) -> Result<User, StoreError> {
        self.with(|inner| inner.users.remove(&id).ok_or(StoreError::NotFound(id)))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
