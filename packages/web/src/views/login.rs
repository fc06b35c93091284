//! Login page: Google sign-in, plus the demo form when enabled.

use api::{ApiResult, MockLogin, Session};
use dioxus::prelude::*;
use ui::icons::FaRightToBracket;
use ui::{notify, sign_in, use_api, use_auth, use_config, AuthSignal, GoogleSignIn, Icon};

use super::Spinner;
use crate::Route;

/// Where to land after signing in: the protected page that sent the user
/// here, or the dashboard. Anything else in `next` is ignored.
pub(crate) fn after_login(next: &str) -> Route {
    match next.parse::<Route>() {
        Ok(route @ (Route::Dashboard {} | Route::CreateNote {} | Route::EditNote { .. })) => route,
        _ => Route::Dashboard {},
    }
}

/// Store the session from a credential exchange and go to `target`.
fn finish_login(auth: AuthSignal, nav: Navigator, target: Route, result: ApiResult<Session>) {
    match result {
        Ok(session) => {
            if sign_in(auth, session) {
                nav.replace(target);
            } else {
                notify::alert("Could not save your session in this browser");
            }
        }
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            notify::alert(e.message());
        }
    }
}

#[component]
pub fn Login(next: String) -> Element {
    let api = use_api();
    let auth = use_auth();
    let config = use_config();
    let nav = use_navigator();
    let mut loading = use_signal(|| false);
    let mut email = use_signal(String::new);
    let mut name = use_signal(String::new);

    let target = after_login(&next);

    // If already logged in, go straight on
    if auth.read().is_authenticated() {
        nav.replace(target.clone());
    }

    let on_credential = {
        let api = api.clone();
        let target = target.clone();
        move |credential: String| {
            let api = api.clone();
            let target = target.clone();
            loading.set(true);
            spawn(async move {
                let result = api.google_login(&credential).await;
                loading.set(false);
                finish_login(auth, nav, target, result);
            });
        }
    };

    let on_demo_login = move |evt: FormEvent| {
        evt.prevent_default();
        let login = MockLogin {
            email: email().trim().to_string(),
            name: name().trim().to_string(),
        };
        if login.email.is_empty() || login.name.is_empty() {
            notify::alert("Please enter your email and name");
            return;
        }
        let api = api.clone();
        let target = target.clone();
        loading.set(true);
        spawn(async move {
            let result = api.mock_login(&login).await;
            loading.set(false);
            finish_login(auth, nav, target, result);
        });
    };

    rsx! {
        div {
            class: "login-container",
            div {
                class: "login-header",
                Icon { icon: FaRightToBracket, width: 32, height: 32 }
                h2 { "Sign in to NNote" }
                p { class: "muted", "Create and share your notes." }
            }

            div {
                class: "login-card",
                if config.google_enabled() {
                    GoogleSignIn {
                        client_id: config.google_client_id.clone(),
                        on_credential: on_credential,
                    }
                }

                if config.demo_login {
                    if config.google_enabled() {
                        div { class: "divider", span { "or use the demo login" } }
                    }
                    form {
                        class: "login-form",
                        onsubmit: on_demo_login,
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            required: true,
                            placeholder: "your@email.com",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        label { r#for: "name", "Name" }
                        input {
                            id: "name",
                            r#type: "text",
                            required: true,
                            placeholder: "Your name",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "primary-button",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign in (demo)" }
                        }
                    }
                }

                if !config.google_enabled() && !config.demo_login {
                    p { class: "muted", "No sign-in method is configured for this deployment." }
                }

                if loading() {
                    Spinner {}
                }
            }
        }
    }
}
