//! In-memory user store.

use std::collections::HashMap;
use std::sync::RwLock;

use usersvc_core::{User, UserFields, UserId};

use crate::error::{StoreError, StoreResult};
use crate::user_store::UserStore;

/// In-memory user collection for tests/dev and single-process deployments.
///
/// A poisoned lock surfaces as [`StoreError::Unavailable`] rather than a
/// panic; the collection is unusable at that point either way.
#[derive(Debug)]
pub struct InMemoryUserStore {
    inner: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, fields: UserFields) -> StoreResult<User> {
        let mut map = self
            .inner
            .write()
            .map_err(|e| StoreError::unavailable(e.to_string()))?;
        let user = User::new(UserId::new(), fields);
        map.insert(user.id, user.clone());
        Ok(user)
    }

    fn find_all(&self) -> StoreResult<Vec<User>> {
        let map = self
            .inner
            .read()
            .map_err(|e| StoreError::unavailable(e.to_string()))?;
        Ok(map.values().cloned().collect())
    }

    fn find_by_id(&self, id: UserId) -> StoreResult<User> {
        let map = self
            .inner
            .read()
            .map_err(|e| StoreError::unavailable(e.to_string()))?;
        map.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn update_by_id(&self, id: UserId, fields: UserFields) -> StoreResult<User> {
        let mut map = self
            .inner
            .write()
            .map_err(|e| StoreError::unavailable(e.to_string()))?;
        let doc = map.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        doc.first_name = fields.first_name;
        doc.last_name = fields.last_name;
        doc.age = fields.age;
        Ok(doc.clone())
    }

    fn delete_by_id(&self, id: UserId) -> StoreResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|e| StoreError::unavailable(e.to_string()))?;
        map.remove(&id).map(|_| ()).ok_or(StoreError::NotFound(id))
    }
}
