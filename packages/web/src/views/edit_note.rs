use api::{NoteDraft, SubmitTarget};
use dioxus::prelude::*;
use ui::icons::FaArrowLeft;
use ui::{use_api, use_auth, Icon, NoteForm};

use super::{session_expired, Spinner};
use crate::Route;

/// Loads note `id`, then hands it to the shared form as an update.
#[component]
pub fn EditNote(id: String) -> Element {
    let api = use_api();
    let auth = use_auth();
    let nav = use_navigator();

    let loaded = use_resource(use_reactive!(|(id,)| {
        let api = api.clone();
        async move {
            let result = api.get_note(&id).await;
            if matches!(&result, Err(e) if e.is_unauthorized()) {
                session_expired(auth, nav, Route::EditNote { id });
            }
            result
        }
    }));

    let guard = loaded.read_unchecked();
    let body = match &*guard {
        None => rsx! { Spinner {} },
        Some(Err(e)) => rsx! {
            div {
                class: "empty-state",
                h2 { "Could not load this note" }
                p { class: "muted", "{e.message()}" }
            }
        },
        Some(Ok(note)) => rsx! {
            NoteForm {
                key: "{note.id}",
                initial: NoteDraft::from_note(note),
                target: SubmitTarget::Update(note.id.clone()),
                on_saved: move |_| {
                    nav.push(Route::Dashboard {});
                },
                on_unauthorized: {
                    let from = Route::EditNote { id: note.id.clone() };
                    move |_| session_expired(auth, nav, from.clone())
                },
            }
        },
    };

    rsx! {
        div {
            class: "page-header",
            Link { class: "back-link", to: Route::Dashboard {},
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                "Back to my notes"
            }
            h1 { "Edit note" }
        }
        {body}
    }
}
