use std::sync::Arc;

use usersvc_store::{InMemoryUserStore, UserStore};

/// Process-wide service wiring shared by all handlers.
///
/// Holds the one long-lived store handle: acquired at startup by
/// [`build_services`], released when the process drops it at shutdown.
pub struct AppServices {
    users: Arc<dyn UserStore>,
}

impl AppServices {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// The user collection.
    pub fn users(&self) -> &dyn UserStore {
        self.users.as_ref()
    }
}

/// Wire up the default service graph (in-memory store in this version).
pub fn build_services() -> AppServices {
    AppServices::new(Arc::new(InMemoryUserStore::new()))
}
