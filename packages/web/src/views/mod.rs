use dioxus::prelude::*;
use ui::AuthSignal;

use crate::Route;

mod login;
pub use login::Login;

mod public_notes;
pub use public_notes::PublicNotes;

mod public_note;
pub use public_note::PublicNote;

mod dashboard;
pub use dashboard::Dashboard;

mod create_note;
pub use create_note::CreateNote;

mod edit_note;
pub use edit_note::EditNote;

/// The server rejected the stored token: drop it and go to the login page,
/// which brings the user back to `from` afterwards.
pub(crate) fn session_expired(auth: AuthSignal, nav: Navigator, from: Route) {
    tracing::info!("Session rejected by the server, signing out");
    ui::sign_out(auth);
    nav.replace(Route::Login {
        next: from.to_string(),
    });
}

#[component]
pub(crate) fn Spinner() -> Element {
    rsx! {
        div { class: "spinner-wrap", div { class: "spinner" } }
    }
}
