pub mod config;
pub mod keys;
pub mod models;
pub mod storage;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::WebStorage;

pub use config::MatrimonyConfig;
pub use models::{Gender, ImageEntry, Profile, UserImages};
pub use storage::{KeyValueStore, SearchState, Storage, Viewer};
