//! # Theme store: base appearance and color palette
//!
//! Two independent preferences are kept, each persisted as a plain string:
//!
//! | Storage key | Values | Default |
//! |-------------|--------|---------|
//! | `baseTheme` | `light`, `dark`, `system` | `system` |
//! | `colorTheme` | `default`, `blue`, `green`, `purple`, `pink`, `orange`, `red`, `indigo` | `default` |
//!
//! [`ThemeStore::apply`] resolves those preferences into an [`EffectiveMode`]
//! and writes it onto a [`ThemeHost`] (the document root in the browser). The
//! steps, in order:
//!
//! 1. resolve `system` against [`ThemeHost::prefers_dark`]
//! 2. drop every mode and palette class previously applied
//! 3. add `dark` iff the effective mode is dark
//! 4. add exactly one `theme-<palette>` class
//! 5. set `color-scheme` and the `--color-primary/secondary/accent` variables
//! 6. persist both preferences
//!
//! While the base mode is `system` the UI keeps a subscription to the host's
//! preference and calls [`ThemeStore::system_preference_changed`] on each
//! change.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

pub const BASE_MODE_KEY: &str = "baseTheme";
pub const PALETTE_KEY: &str = "colorTheme";

/// Class marking dark rendering on the document root.
pub const DARK_CLASS: &str = "dark";
const LIGHT_CLASS: &str = "light";

/// Stored appearance preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseMode {
    Light,
    Dark,
    #[default]
    System,
}

impl BaseMode {
    pub const ALL: [BaseMode; 3] = [BaseMode::Light, BaseMode::Dark, BaseMode::System];

    pub fn as_str(self) -> &'static str {
        match self {
            BaseMode::Light => "light",
            BaseMode::Dark => "dark",
            BaseMode::System => "system",
        }
    }

    /// Next mode in the cycle light → dark → system → light.
    pub fn next(self) -> Self {
        match self {
            BaseMode::Light => BaseMode::Dark,
            BaseMode::Dark => BaseMode::System,
            BaseMode::System => BaseMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BaseMode::Light => "Light",
            BaseMode::Dark => "Dark",
            BaseMode::System => "System",
        }
    }
}

impl fmt::Display for BaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseMode {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(BaseMode::Light),
            "dark" => Ok(BaseMode::Dark),
            "system" => Ok(BaseMode::System),
            other => Err(StoreError::UnknownBaseMode(other.to_string())),
        }
    }
}

/// The mode actually rendered. `system` never survives resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EffectiveMode {
    #[default]
    Light,
    Dark,
}

impl EffectiveMode {
    pub fn as_str(self) -> &'static str {
        match self {
            EffectiveMode::Light => "light",
            EffectiveMode::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == EffectiveMode::Dark
    }
}

/// Accent palette selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Default,
    Blue,
    Green,
    Purple,
    Pink,
    Orange,
    Red,
    Indigo,
}

/// Color families a palette maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

impl Palette {
    pub const ALL: [Palette; 8] = [
        Palette::Default,
        Palette::Blue,
        Palette::Green,
        Palette::Purple,
        Palette::Pink,
        Palette::Orange,
        Palette::Red,
        Palette::Indigo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Palette::Default => "default",
            Palette::Blue => "blue",
            Palette::Green => "green",
            Palette::Purple => "purple",
            Palette::Pink => "pink",
            Palette::Orange => "orange",
            Palette::Red => "red",
            Palette::Indigo => "indigo",
        }
    }

    /// Name shown in the palette picker.
    pub fn display_name(self) -> &'static str {
        match self {
            Palette::Default => "Default",
            Palette::Blue => "Ocean",
            Palette::Green => "Forest",
            Palette::Purple => "Cosmic",
            Palette::Pink => "Sunset",
            Palette::Orange => "Autumn",
            Palette::Red => "Fire",
            Palette::Indigo => "Night",
        }
    }

    /// Document root class for this palette, e.g. `theme-indigo`.
    pub fn class_name(self) -> String {
        format!("theme-{}", self.as_str())
    }

    pub fn colors(self) -> PaletteColors {
        let (primary, secondary, accent) = match self {
            Palette::Default => ("blue", "gray", "green"),
            Palette::Blue => ("blue", "slate", "cyan"),
            Palette::Green => ("green", "gray", "emerald"),
            Palette::Purple => ("purple", "gray", "violet"),
            Palette::Pink => ("pink", "gray", "rose"),
            Palette::Orange => ("orange", "gray", "amber"),
            Palette::Red => ("red", "gray", "rose"),
            Palette::Indigo => ("indigo", "gray", "blue"),
        };
        PaletteColors {
            primary,
            secondary,
            accent,
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Palette {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Palette::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| StoreError::UnknownPalette(s.to_string()))
    }
}

/// The surface a theme is rendered onto.
pub trait ThemeHost {
    /// Whether the host currently reports a dark color-scheme preference.
    fn prefers_dark(&self) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn set_style(&self, property: &str, value: &str);
}

/// Theme preferences plus the last resolved mode.
#[derive(Clone, Debug)]
pub struct ThemeStore<S> {
    storage: S,
    base: BaseMode,
    palette: Palette,
    effective: EffectiveMode,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Read both preferences, defaulting to `{system, default}`.
    ///
    /// Nothing is applied until [`apply`](Self::apply) runs.
    pub fn load(storage: S) -> Self {
        let base = storage
            .get(BASE_MODE_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        let palette = storage
            .get(PALETTE_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Self {
            storage,
            base,
            palette,
            effective: EffectiveMode::default(),
        }
    }

    pub fn base_mode(&self) -> BaseMode {
        self.base
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Mode produced by the last [`apply`](Self::apply).
    pub fn effective_mode(&self) -> EffectiveMode {
        self.effective
    }

    /// Whether host preference changes should be followed.
    pub fn follows_system(&self) -> bool {
        self.base == BaseMode::System
    }

    /// Resolve the effective mode against `host`.
    pub fn resolve(&self, host: &impl ThemeHost) -> EffectiveMode {
        match self.base {
            BaseMode::Light => EffectiveMode::Light,
            BaseMode::Dark => EffectiveMode::Dark,
            BaseMode::System if host.prefers_dark() => EffectiveMode::Dark,
            BaseMode::System => EffectiveMode::Light,
        }
    }

    /// Render the current preferences onto `host` and persist them.
    ///
    /// The host is updated even when persisting fails; the storage error is
    /// returned afterwards.
    pub fn apply(&mut self, host: &impl ThemeHost) -> Result<EffectiveMode, StoreError> {
        let effective = self.resolve(host);
        self.effective = effective;

        host.remove_class(LIGHT_CLASS);
        host.remove_class(DARK_CLASS);
        for palette in Palette::ALL {
            host.remove_class(&palette.class_name());
        }

        if effective.is_dark() {
            host.add_class(DARK_CLASS);
        }
        host.add_class(&self.palette.class_name());

        host.set_style("color-scheme", effective.as_str());
        let colors = self.palette.colors();
        host.set_style("--color-primary", colors.primary);
        host.set_style("--color-secondary", colors.secondary);
        host.set_style("--color-accent", colors.accent);

        self.storage.set(BASE_MODE_KEY, self.base.as_str())?;
        self.storage.set(PALETTE_KEY, self.palette.as_str())?;
        Ok(effective)
    }

    pub fn set_base_mode(
        &mut self,
        mode: BaseMode,
        host: &impl ThemeHost,
    ) -> Result<EffectiveMode, StoreError> {
        self.base = mode;
        self.apply(host)
    }

    pub fn set_palette(
        &mut self,
        palette: Palette,
        host: &impl ThemeHost,
    ) -> Result<EffectiveMode, StoreError> {
        self.palette = palette;
        self.apply(host)
    }

    /// Advance the base mode: light → dark → system → light.
    pub fn cycle_base_mode(&mut self, host: &impl ThemeHost) -> Result<EffectiveMode, StoreError> {
        self.set_base_mode(self.base.next(), host)
    }

    /// Host preference changed. Re-applies only while following the system.
    pub fn system_preference_changed(
        &mut self,
        host: &impl ThemeHost,
    ) -> Result<EffectiveMode, StoreError> {
        if self.follows_system() {
            self.apply(host)
        } else {
            Ok(self.effective)
        }
    }
}

/// In-memory document root, used off the browser and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    prefers_dark: Rc<Cell<bool>>,
    classes: Rc<RefCell<BTreeSet<String>>>,
    styles: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryHost {
    pub fn new(prefers_dark: bool) -> Self {
        let host = Self::default();
        host.set_prefers_dark(prefers_dark);
        host
    }

    pub fn set_prefers_dark(&self, dark: bool) {
        self.prefers_dark.set(dark);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }
}

impl ThemeHost for MemoryHost {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn set_style(&self, property: &str, value: &str) {
        self.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn palette_markers(host: &MemoryHost) -> Vec<String> {
        host.classes()
            .into_iter()
            .filter(|c| c.starts_with("theme-"))
            .collect()
    }

    #[test]
    fn test_defaults_when_storage_empty() {
        let store = ThemeStore::load(MemoryStore::new());
        assert_eq!(store.base_mode(), BaseMode::System);
        assert_eq!(store.palette(), Palette::Default);
    }

    #[test]
    fn test_unrecognized_stored_values_fall_back() {
        let storage = MemoryStore::new();
        storage.set(BASE_MODE_KEY, "sepia").unwrap();
        storage.set(PALETTE_KEY, "teal").unwrap();
        let store = ThemeStore::load(storage);
        assert_eq!(store.base_mode(), BaseMode::System);
        assert_eq!(store.palette(), Palette::Default);
    }

    #[test]
    fn test_every_preference_pair_renders_one_mode_and_one_palette() {
        for prefers_dark in [false, true] {
            for base in BaseMode::ALL {
                for palette in Palette::ALL {
                    let host = MemoryHost::new(prefers_dark);
                    // Leave stale markers from a previous apply.
                    host.add_class("theme-red");
                    host.add_class(DARK_CLASS);

                    let mut store = ThemeStore::load(MemoryStore::new());
                    store.set_palette(palette, &host).unwrap();
                    let effective = store.set_base_mode(base, &host).unwrap();

                    let expected_dark = match base {
                        BaseMode::Dark => true,
                        BaseMode::Light => false,
                        BaseMode::System => prefers_dark,
                    };
                    assert_eq!(effective.is_dark(), expected_dark, "{base} / {palette}");
                    assert_eq!(host.has_class(DARK_CLASS), expected_dark);
                    assert!(!host.has_class("light"));
                    assert_eq!(palette_markers(&host), vec![palette.class_name()]);
                    assert_eq!(host.style("color-scheme").as_deref(), Some(effective.as_str()));
                }
            }
        }
    }

    #[test]
    fn test_apply_sets_palette_variables() {
        let host = MemoryHost::new(false);
        let mut store = ThemeStore::load(MemoryStore::new());
        store.set_palette(Palette::Indigo, &host).unwrap();
        assert_eq!(host.style("--color-primary").as_deref(), Some("indigo"));
        assert_eq!(host.style("--color-secondary").as_deref(), Some("gray"));
        assert_eq!(host.style("--color-accent").as_deref(), Some("blue"));
    }

    #[test]
    fn test_apply_persists_both_preferences() {
        let storage = MemoryStore::new();
        let host = MemoryHost::new(false);
        let mut store = ThemeStore::load(storage.clone());
        store.set_base_mode(BaseMode::Dark, &host).unwrap();
        store.set_palette(Palette::Green, &host).unwrap();
        assert_eq!(storage.get(BASE_MODE_KEY).as_deref(), Some("dark"));
        assert_eq!(storage.get(PALETTE_KEY).as_deref(), Some("green"));

        let reloaded = ThemeStore::load(storage);
        assert_eq!(reloaded.base_mode(), BaseMode::Dark);
        assert_eq!(reloaded.palette(), Palette::Green);
    }

    #[test]
    fn test_system_mode_follows_host_changes() {
        let host = MemoryHost::new(false);
        let mut store = ThemeStore::load(MemoryStore::new());
        assert_eq!(store.apply(&host).unwrap(), EffectiveMode::Light);

        host.set_prefers_dark(true);
        assert_eq!(
            store.system_preference_changed(&host).unwrap(),
            EffectiveMode::Dark
        );
        assert!(host.has_class(DARK_CLASS));

        host.set_prefers_dark(false);
        store.system_preference_changed(&host).unwrap();
        assert_eq!(store.effective_mode(), EffectiveMode::Light);
        assert!(!host.has_class(DARK_CLASS));
    }

    #[test]
    fn test_explicit_mode_ignores_host_changes() {
        let host = MemoryHost::new(false);
        let mut store = ThemeStore::load(MemoryStore::new());
        store.set_base_mode(BaseMode::Light, &host).unwrap();

        host.set_prefers_dark(true);
        assert_eq!(
            store.system_preference_changed(&host).unwrap(),
            EffectiveMode::Light
        );
        assert!(!host.has_class(DARK_CLASS));
    }

    #[test]
    fn test_cycle_order() {
        let host = MemoryHost::new(true);
        let mut store = ThemeStore::load(MemoryStore::new());
        store.set_base_mode(BaseMode::Light, &host).unwrap();

        store.cycle_base_mode(&host).unwrap();
        assert_eq!(store.base_mode(), BaseMode::Dark);
        store.cycle_base_mode(&host).unwrap();
        assert_eq!(store.base_mode(), BaseMode::System);
        assert_eq!(store.effective_mode(), EffectiveMode::Dark);
        store.cycle_base_mode(&host).unwrap();
        assert_eq!(store.base_mode(), BaseMode::Light);
    }

    #[test]
    fn test_palette_ids_are_validated() {
        assert_eq!("purple".parse::<Palette>().unwrap(), Palette::Purple);
        assert_eq!(
            "teal".parse::<Palette>(),
            Err(StoreError::UnknownPalette("teal".into()))
        );
        assert!("Dark".parse::<BaseMode>().is_err());
        for palette in Palette::ALL {
            assert_eq!(palette.as_str().parse::<Palette>().unwrap(), palette);
        }
    }
}
