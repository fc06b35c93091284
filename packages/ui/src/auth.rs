//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::{platform_store, PlatformStore, Session, SessionStore};

/// The session store, shared through context.
pub type AuthSignal = Signal<SessionStore<PlatformStore>>;

/// Get the current session store.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> AuthSignal {
    use_context::<AuthSignal>()
}

/// Provider component that restores the persisted session.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    // Restoring is synchronous: protected routes never see a half-loaded session.
    let auth = use_signal(|| SessionStore::load(platform_store()));
    use_context_provider(|| auth);

    rsx! {
        {children}
    }
}

/// Persist a fresh session. Returns false when storage refused it.
pub fn sign_in(mut auth: AuthSignal, session: Session) -> bool {
    let email = session.user.email.clone();
    match auth.write().login(session) {
        Ok(()) => {
            tracing::info!(%email, "signed in");
            true
        }
        Err(e) => {
            tracing::error!("Failed to persist session: {}", e);
            false
        }
    }
}

/// Drop the session from memory and storage.
pub fn sign_out(mut auth: AuthSignal) {
    if let Err(e) = auth.write().logout() {
        tracing::warn!("Failed to clear stored session: {}", e);
    }
}
