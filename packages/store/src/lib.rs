//! # Client-side state for NNote
//!
//! Everything the browser keeps between page loads lives here, along with the
//! pure logic the views lean on. Nothing in this crate touches the network or
//! the component tree, so it is tested natively against [`MemoryStore`] and
//! [`theme::MemoryHost`].
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | [`AppConfig`]: API base URL, Google client id, demo login switch, page size |
//! | [`models`] | Wire/domain types: [`Note`], [`Session`], [`UserProfile`] |
//! | [`session`] | [`SessionStore`]: who is logged in, persisted as one JSON blob |
//! | [`theme`] | [`ThemeStore`]: base mode + palette, resolved and applied to a [`ThemeHost`] |
//! | [`listing`] | Search filtering and public feed pagination state |
//! | `browser` | `localStorage`, document root and `matchMedia` bindings (`web` feature, wasm only) |

pub mod config;
pub mod error;
pub mod listing;
pub mod models;
pub mod session;
pub mod theme;

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod browser;

pub use config::AppConfig;
pub use error::StoreError;
pub use models::{Author, Byline, Note, Session, UserProfile};
pub use session::SessionStore;
pub use theme::{BaseMode, EffectiveMode, Palette, ThemeHost, ThemeStore};

/// Durable storage backing the stores on the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = browser::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = MemoryStore;

/// Document root the theme is applied to on the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformHost = browser::DocumentHost;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformHost = theme::MemoryHost;

/// Open the platform storage.
///
/// In the browser this is `window.localStorage`. Elsewhere every call returns a
/// handle to the same process-wide [`MemoryStore`], so state survives across
/// handles the way it would across `localStorage` lookups.
pub fn platform_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        browser::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        static SHARED: std::sync::OnceLock<MemoryStore> = std::sync::OnceLock::new();
        SHARED.get_or_init(MemoryStore::new).clone()
    }
}

/// Handle to the platform document root.
pub fn platform_host() -> PlatformHost {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        browser::DocumentHost::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        theme::MemoryHost::default()
    }
}
