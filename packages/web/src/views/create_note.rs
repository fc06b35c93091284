use api::{NoteDraft, SubmitTarget};
use dioxus::prelude::*;
use ui::icons::FaArrowLeft;
use ui::{use_auth, Icon, NoteForm};

use super::session_expired;
use crate::Route;

#[component]
pub fn CreateNote() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    rsx! {
        div {
            class: "page-header",
            Link { class: "back-link", to: Route::Dashboard {},
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                "Back to my notes"
            }
            h1 { "New note" }
        }
        NoteForm {
            initial: NoteDraft::default(),
            target: SubmitTarget::Create,
            on_saved: move |_| {
                nav.push(Route::Dashboard {});
            },
            on_unauthorized: move |_| session_expired(auth, nav, Route::CreateNote {}),
        }
    }
}
