use dioxus::prelude::*;
use store::UserProfile;

use crate::icons::{FaBars, FaRightFromBracket, FaXmark};
use crate::{Icon, ThemeSelector, UI_CSS};

/// Top bar: brand, navigation links passed as children, theme controls and
/// the account area. Collapses into a toggled menu on narrow screens.
#[component]
pub fn Navbar(brand: Element, account: Element, children: Element) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        nav {
            // On narrow screens the links only show while the menu is open.
            class: if menu_open() { "navbar menu-open" } else { "navbar" },
            div {
                class: "navbar-inner",
                {brand}
                button {
                    class: "icon-button navbar-toggle",
                    title: "Open main menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() {
                        Icon { icon: FaXmark, width: 20, height: 20 }
                    } else {
                        Icon { icon: FaBars, width: 20, height: 20 }
                    }
                }
                div {
                    class: "navbar-links",
                    onclick: move |_| menu_open.set(false),
                    {children}
                    {account}
                }
                ThemeSelector {}
            }
        }
    }
}

/// One navigation entry.
#[component]
pub fn NavItem(active: bool, children: Element) -> Element {
    rsx! {
        span {
            class: if active { "nav-item active" } else { "nav-item" },
            {children}
        }
    }
}

/// Avatar, name and logout button for the signed-in user.
#[component]
pub fn UserMenu(user: UserProfile, on_logout: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "user-menu",
            if let Some(ref avatar) = user.avatar {
                img {
                    class: "avatar",
                    src: "{avatar}",
                    alt: "{user.display_name()}",
                }
            }
            span { class: "user-name", "{user.display_name()}" }
            button {
                class: "logout-button",
                onclick: move |_| on_logout.call(()),
                Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                span { "Log out" }
            }
        }
    }
}
