//! # Browser bindings: `localStorage`, the document root and `matchMedia`
//!
//! | Type | Implements | Backed by |
//! |------|-----------|-----------|
//! | [`LocalStore`] | [`KeyValueStore`] | `window.localStorage` |
//! | [`DocumentHost`] | [`ThemeHost`] | `document.documentElement` class list and inline style |
//! | [`SystemThemeWatcher`] | (none) | a `change` listener on `matchMedia("(prefers-color-scheme: dark)")` |
//!
//! All handles look the window up on every call, so they are zero-size and
//! freely cloneable. When there is no window (or storage is disabled) reads
//! come back empty and writes report [`StoreError::Storage`].

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, MediaQueryList, Storage};

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::theme::ThemeHost;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn js_error(value: JsValue) -> StoreError {
    StoreError::Storage(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn require() -> Result<Storage, StoreError> {
        Self::storage().ok_or_else(|| StoreError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::require()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::require()?.remove_item(key).map_err(js_error)
    }
}

/// `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentHost;

impl DocumentHost {
    pub fn new() -> Self {
        Self
    }

    fn root() -> Option<HtmlElement> {
        web_sys::window()?
            .document()?
            .document_element()?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

fn dark_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok()?
}

impl ThemeHost for DocumentHost {
    fn prefers_dark(&self) -> bool {
        dark_query().is_some_and(|q| q.matches())
    }

    fn add_class(&self, class: &str) {
        if let Some(root) = Self::root() {
            let _ = root.class_list().add_1(class);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Some(root) = Self::root() {
            let _ = root.class_list().remove_1(class);
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(root) = Self::root() {
            let _ = root.style().set_property(property, value);
        }
    }
}

/// Subscription to host color-scheme changes. Unsubscribes on drop.
pub struct SystemThemeWatcher {
    query: MediaQueryList,
    listener: Closure<dyn FnMut()>,
}

impl SystemThemeWatcher {
    /// Call `on_change` whenever the host flips between light and dark.
    ///
    /// Returns `None` when `matchMedia` is unavailable.
    pub fn new(on_change: impl FnMut() + 'static) -> Option<Self> {
        let query = dark_query()?;
        let listener = Closure::<dyn FnMut()>::new(on_change);
        query
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { query, listener })
    }
}

impl Drop for SystemThemeWatcher {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.listener.as_ref().unchecked_ref());
    }
}
