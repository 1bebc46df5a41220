//! Records exchanged with the store and over HTTP.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct User {
    /// Generated by storage on creation.
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "test@test.pl")]
    pub email: String,
}

/// Validated input for creating a user.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewUser {
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "test@test.pl")]
    pub email: String,
}

/// Fields to overwrite on an existing user. `None` leaves the stored value unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UserChanges {
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    #[schema(example = "test@test.pl")]
    pub email: Option<String>,
}

impl UserChanges {
    /// Apply onto a stored record.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
    }
}

/// Entry of the fixed books listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Book {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "Witcher")]
    pub name: String,
}

const BOOK_TITLES: [(u32, &str); 3] = [(1, "Witcher"), (2, "Lord of the Rings"), (3, "Diune")];

/// The fixed, read-only books listing.
pub fn books() -> Vec<Book> {
    BOOK_TITLES
        .iter()
        .map(|(id, name)| Book {
            id: *id,
            name: (*name).to_string(),
        })
        .collect()
}
