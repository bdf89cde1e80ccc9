//! The User entity and its mutable field set.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A stored user document.
///
/// Wire shape: `{"id": "...", "firstName": "...", "lastName": "...", "age": 36}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

impl User {
    pub fn new(id: UserId, fields: UserFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            age: fields.age,
        }
    }

    /// The mutable portion of the document.
    pub fn fields(&self) -> UserFields {
        UserFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
        }
    }
}

/// Everything on a user except its id.
///
/// Insert and update take this instead of a full [`User`] so a
/// client-supplied id can never reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}
