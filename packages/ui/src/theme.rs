//! Theme context, the system-preference subscription and the selector.

use dioxus::prelude::*;
use store::{platform_host, platform_store, BaseMode, Palette, PlatformStore, ThemeStore};

use crate::icons::{FaCheck, FaCircleHalfStroke, FaMoon, FaPalette, FaSun};
use crate::Icon;

pub type ThemeSignal = Signal<ThemeStore<PlatformStore>>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Loads the stored preference, applies it to the document root on mount and
/// keeps it in sync with the host color scheme while "System" is selected.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let mut theme = use_signal(|| ThemeStore::load(platform_store()));
    use_context_provider(|| theme);

    use_hook(move || {
        if let Err(e) = theme.write().apply(&platform_host()) {
            tracing::warn!("Failed to persist theme: {}", e);
        }
    });

    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use store::browser::SystemThemeWatcher;

        let watcher = use_hook(|| Rc::new(RefCell::new(None::<SystemThemeWatcher>)));

        {
            let watcher = watcher.clone();
            use_effect(move || {
                let follows = theme.read().follows_system();
                let mut slot = watcher.borrow_mut();
                if !follows {
                    // Dropping unsubscribes.
                    slot.take();
                } else if slot.is_none() {
                    *slot = SystemThemeWatcher::new(move || {
                        let host = platform_host();
                        if let Err(e) = theme.write().system_preference_changed(&host) {
                            tracing::warn!("Failed to re-apply theme: {}", e);
                        }
                    });
                }
            });
        }

        use_drop(move || {
            watcher.borrow_mut().take();
        });
    }

    rsx! {
        {children}
    }
}

/// Mode cycle button plus the palette picker.
#[component]
pub fn ThemeSelector() -> Element {
    let mut theme = use_theme();
    let mut picker_open = use_signal(|| false);

    let base = theme.read().base_mode();
    let current = theme.read().palette();

    let cycle = move |_| {
        if let Err(e) = theme.write().cycle_base_mode(&platform_host()) {
            tracing::warn!("Failed to persist theme: {}", e);
        }
    };

    rsx! {
        div {
            class: "theme-selector",
            button {
                class: "icon-button",
                title: "Theme: {base.label()}",
                onclick: cycle,
                {match base {
                    BaseMode::Light => rsx! { Icon { icon: FaSun, width: 16, height: 16 } },
                    BaseMode::Dark => rsx! { Icon { icon: FaMoon, width: 16, height: 16 } },
                    BaseMode::System => rsx! { Icon { icon: FaCircleHalfStroke, width: 16, height: 16 } },
                }}
            }
            button {
                class: "icon-button",
                title: "Color theme",
                onclick: move |_| picker_open.set(!picker_open()),
                Icon { icon: FaPalette, width: 16, height: 16 }
            }
            if picker_open() {
                div {
                    class: "palette-menu",
                    for palette in Palette::ALL {
                        PaletteOption {
                            key: "{palette.as_str()}",
                            palette,
                            active: palette == current,
                            on_pick: move |picked: Palette| {
                                if let Err(e) = theme.write().set_palette(picked, &platform_host()) {
                                    tracing::warn!("Failed to persist theme: {}", e);
                                }
                                picker_open.set(false);
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PaletteOption(palette: Palette, active: bool, on_pick: EventHandler<Palette>) -> Element {
    let swatch = palette.colors().primary;

    rsx! {
        button {
            class: if active { "palette-option active" } else { "palette-option" },
            onclick: move |_| on_pick.call(palette),
            span { class: "palette-swatch swatch-{swatch}" }
            span { "{palette.display_name()}" }
            if active {
                Icon { icon: FaCheck, width: 12, height: 12 }
            }
        }
    }
}
