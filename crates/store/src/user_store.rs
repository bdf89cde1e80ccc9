//! Document store contract for the user collection.

use std::sync::Arc;

use usersvc_core::{User, UserFields, UserId};

use crate::error::StoreResult;

/// One user collection: insert, find, update, delete.
///
/// Implementations must be safe for concurrent use by simultaneous
/// requests; the service layer performs no locking of its own. Writes to
/// the same id are last-write-wins.
pub trait UserStore: Send + Sync {
    /// Persist a new document. The store assigns the id; the returned
    /// [`User`] carries it.
    fn insert(&self, fields: UserFields) -> StoreResult<User>;

    /// All documents, in store-native order. An empty collection yields an
    /// empty vec, not an error.
    fn find_all(&self) -> StoreResult<Vec<User>>;

    /// The document with the given id, or [`StoreError::NotFound`].
    ///
    /// [`StoreError::NotFound`]: crate::StoreError::NotFound
    fn find_by_id(&self, id: UserId) -> StoreResult<User>;

    /// Overwrite the mutable fields of the document with the given id and
    /// return the store-confirmed result. The id itself is never altered.
    fn update_by_id(&self, id: UserId, fields: UserFields) -> StoreResult<User>;

    /// Remove the document with the given id.
    fn delete_by_id(&self, id: UserId) -> StoreResult<()>;
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn insert(&self, fields: UserFields) -> StoreResult<User> {
        (**self).insert(fields)
    }

    fn find_all(&self) -> StoreResult<Vec<User>> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: UserId) -> StoreResult<User> {
        (**self).find_by_id(id)
    }

    fn update_by_id(&self, id: UserId, fields: UserFields) -> StoreResult<User> {
        (**self).update_by_id(id, fields)
    }

    fn delete_by_id(&self, id: UserId) -> StoreResult<()> {
        (**self).delete_by_id(id)
    }
}
