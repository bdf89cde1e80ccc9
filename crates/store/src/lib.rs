//! `usersvc-store` — the document store contract and its in-memory
//! implementation.
//!
//! The HTTP layer only ever sees [`UserStore`]; a persistent backend slots
//! in behind the same trait without touching any handler.

pub mod error;
pub mod memory;
pub mod user_store;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryUserStore;
pub use user_store::UserStore;
