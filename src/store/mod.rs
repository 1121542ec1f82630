pub mod entity_cache;
pub mod session_store;

pub use entity_cache::EntityCache;
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};
