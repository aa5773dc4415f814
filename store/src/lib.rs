pub mod favorites;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use favorites::{Favorites, Ticket};
pub use models::{Movie, MovieDraft, Session, ValidationError};
pub use session::SessionStore;
