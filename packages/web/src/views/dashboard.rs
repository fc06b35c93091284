use dioxus::prelude::*;

use store::listing::{filter_notes, remove_note};
use store::models::Viewer;
use store::Note;
use ui::icons::FaCirclePlus;
use ui::{notify, use_api, use_auth, Icon, NoteCard, SearchBox};

use super::{session_expired, Spinner};
use crate::Route;

/// The signed-in user's notes, filterable, with edit and delete.
#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let auth = use_auth();
    let nav = use_navigator();
    let mut notes = use_signal(Vec::<Note>::new);
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);

    // Load notes on mount
    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                match api.list_notes().await {
                    Ok(list) => notes.set(list),
                    Err(e) if e.is_unauthorized() => session_expired(auth, nav, Route::Dashboard {}),
                    Err(e) => tracing::error!("Failed to load notes: {}", e),
                }
                loading.set(false);
            }
        }
    });

    let on_delete = use_callback(move |id: String| {
        if !notify::confirm("Are you sure you want to delete this note?") {
            return;
        }
        let api = api.clone();
        spawn(async move {
            match api.delete_note(&id).await {
                Ok(()) => {
                    remove_note(&mut notes.write(), &id);
                }
                Err(e) if e.is_unauthorized() => session_expired(auth, nav, Route::Dashboard {}),
                Err(e) => notify::alert(e.message()),
            }
        });
    });

    let on_edit = move |id: String| {
        nav.push(Route::EditNote { id });
    };

    if loading() {
        return rsx! { Spinner {} };
    }

    let term = search();
    let visible: Vec<Note> = filter_notes(&notes.read(), &term)
        .into_iter()
        .cloned()
        .collect();
    let searching = !term.is_empty();

    rsx! {
        div {
            class: "page-header",
            div {
                h1 { "My notes" }
                p { class: "muted", "Manage your private notes and the ones you share publicly." }
            }
            Link { class: "primary-button", to: Route::CreateNote {},
                Icon { icon: FaCirclePlus, width: 16, height: 16 }
                "New note"
            }
        }

        SearchBox {
            value: term.clone(),
            on_input: move |value| search.set(value),
        }

        if visible.is_empty() {
            div {
                class: "empty-state",
                if searching {
                    h3 { "No notes match your search" }
                    p { class: "muted", "Try different words." }
                } else {
                    h3 { "No notes yet" }
                    p { class: "muted", "Start by writing your first note." }
                    Link { class: "primary-button", to: Route::CreateNote {},
                        Icon { icon: FaCirclePlus, width: 16, height: 16 }
                        "Write your first note"
                    }
                }
            }
        } else {
            div {
                class: "note-grid",
                for note in visible {
                    NoteCard {
                        key: "{note.id}",
                        note: note.clone(),
                        viewer: Viewer::Owner,
                        show_actions: true,
                        on_edit: on_edit,
                        on_delete: on_delete,
                    }
                }
            }
        }
    }
}
