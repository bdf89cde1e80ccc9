use serde::{Deserialize, Serialize};

use usersvc_core::{User, UserFields};

// -------------------------
// Request DTOs
// -------------------------

/// Body of create and update requests.
///
/// Deliberately has no `id` field: a client-supplied id is ignored on
/// create and can never overwrite the path id on update (serde drops
/// unknown fields).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFieldsRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

impl From<UserFieldsRequest> for UserFields {
    fn from(req: UserFieldsRequest) -> Self {
        UserFields {
            first_name: req.first_name,
            last_name: req.last_name,
            age: req.age,
        }
    }
}

// -------------------------
// Response envelopes
// -------------------------

/// `{"user": {...}}` — single-entity responses.
#[derive(Debug, Serialize)]
pub struct UserResource {
    pub user: User,
}

/// `{"users": [...]}` — list responses; ordering is store-defined.
#[derive(Debug, Serialize)]
pub struct UsersResource {
    pub users: Vec<User>,
}

/// `{"code": 200, "isValid": true}` — delete acknowledgment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub code: u16,
    pub is_valid: bool,
}

impl Status {
    pub fn ok() -> Self {
        Self {
            code: 200,
            is_valid: true,
        }
    }
}
