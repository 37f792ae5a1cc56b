//! Shared service constructor for all platforms.
//!
//! Returns the [`api::MatrimonyApi`] and [`store::Storage`] every component
//! talks to:
//! - **Web** (WASM + `web` feature): `localStorage` / `sessionStorage` via [`store::WebStorage`]
//! - **Native** (tests, previews): two [`store::MemoryStore`]s

use api::{HttpBackend, MatrimonyApi};
use dioxus::prelude::*;
use store::{MatrimonyConfig, Storage};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::WebStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Everything a component needs to reach the backend and browser storage.
#[derive(Clone)]
pub struct Services {
    pub api: MatrimonyApi<HttpBackend>,
    pub storage: Storage<PlatformStore>,
    pub config: MatrimonyConfig,
}

/// Create platform-appropriate storage.
pub fn make_storage() -> Storage<PlatformStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Storage::new(store::WebStorage::local(), store::WebStorage::session())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Storage::new(store::MemoryStore::new(), store::MemoryStore::new())
    }
}

pub fn make_services(config: MatrimonyConfig) -> Services {
    tracing::debug!("Using backend at {}", config.api.base_url);
    Services {
        api: MatrimonyApi::new(HttpBackend::new(config.api.base_url.clone())),
        storage: make_storage(),
        config,
    }
}

/// Services provided by [`crate::AppProvider`].
pub fn use_services() -> Services {
    use_context::<Services>()
}
