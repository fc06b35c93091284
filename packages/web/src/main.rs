use dioxus::prelude::*;

use store::AppConfig;
use ui::icons::{FaHouse, FaPlus, FaRightToBracket, FaUser};
use ui::{sign_out, use_auth, ApiProvider, AuthProvider, Icon, NavItem, Navbar, ThemeProvider, UserMenu};
use views::{CreateNote, Dashboard, EditNote, Login, PublicNote, PublicNotes};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        PublicNotes {},
        #[route("/login?:next")]
        Login { next: String },
        #[route("/note/:slug")]
        PublicNote { slug: String },
        #[layout(Protected)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/create")]
            CreateNote {},
            #[route("/edit/:id")]
            EditNote { id: String },
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(AppConfig::from_build_env);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ThemeProvider {
            AuthProvider {
                ApiProvider {
                    config,
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Navbar and page container around every route.
#[component]
fn Shell() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let user = auth.read().user().cloned();
    let on_public = matches!(route, Route::PublicNotes {});
    let on_login = matches!(route, Route::Login { .. });
    let on_dashboard = matches!(route, Route::Dashboard {});
    let on_create = matches!(route, Route::CreateNote {});

    rsx! {
        div {
            class: "app",
            Navbar {
                brand: rsx! {
                    Link { class: "brand", to: Route::PublicNotes {}, "NNote" }
                },
                account: rsx! {
                    if let Some(user) = user.clone() {
                        UserMenu {
                            user,
                            on_logout: move |_| {
                                sign_out(auth);
                                nav.push(Route::PublicNotes {});
                            },
                        }
                    } else {
                        Link { to: Route::Login { next: String::new() },
                            NavItem { active: on_login,
                                Icon { icon: FaRightToBracket, width: 14, height: 14 }
                                "Log in"
                            }
                        }
                    }
                },
                Link { to: Route::PublicNotes {},
                    NavItem { active: on_public,
                        Icon { icon: FaHouse, width: 14, height: 14 }
                        "Public"
                    }
                }
                if user.is_some() {
                    Link { to: Route::Dashboard {},
                        NavItem { active: on_dashboard,
                            Icon { icon: FaUser, width: 14, height: 14 }
                            "My notes"
                        }
                    }
                    Link { to: Route::CreateNote {},
                        NavItem { active: on_create,
                            Icon { icon: FaPlus, width: 14, height: 14 }
                            "New note"
                        }
                    }
                }
            }
            main {
                class: "page",
                Outlet::<Route> {}
            }
        }
    }
}

/// Gate for routes that need a session. Anyone else is sent to the login
/// page, remembering where they were headed.
#[component]
fn Protected() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    if !auth.read().is_authenticated() {
        nav.replace(Route::Login {
            next: route.to_string(),
        });
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "empty-state",
            h2 { "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { to: Route::PublicNotes {}, "Back to public notes" }
        }
    }
}
