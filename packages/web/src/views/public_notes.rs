use dioxus::prelude::*;

use store::listing::{filter_notes, PublicFeed};
use store::models::Viewer;
use store::Note;
use ui::icons::FaGlobe;
use ui::{use_api, use_config, Icon, NoteCard, SearchBox};

use super::Spinner;

/// Paginated feed of everyone's public notes. Search filters the page on screen.
#[component]
pub fn PublicNotes() -> Element {
    let api = use_api();
    let page_size = use_config().public_page_size;
    let mut feed = use_signal(PublicFeed::default);
    let mut page = use_signal(|| 1u32);
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);

    // Reload whenever the requested page changes
    let _loader = use_resource(move || {
        let api = api.clone();
        let requested = page();
        async move {
            loading.set(true);
            match api.list_public_notes(requested, page_size).await {
                Ok(response) => feed.write().replace_page(
                    requested,
                    response.notes,
                    response.pagination.total_pages,
                ),
                Err(e) => tracing::error!("Failed to load public notes: {}", e),
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! { Spinner {} };
    }

    let term = search();
    let searching = !term.is_empty();
    let (visible, current, pages) = {
        let feed = feed.read();
        let visible: Vec<Note> = filter_notes(feed.notes(), &term)
            .into_iter()
            .cloned()
            .collect();
        (visible, feed.page(), feed.page_numbers())
    };

    rsx! {
        div {
            class: "hero",
            Icon { icon: FaGlobe, width: 48, height: 48 }
            h1 { "Public notes" }
            p { class: "muted", "Discover and read notes shared by the NNote community." }
        }

        SearchBox {
            value: term.clone(),
            placeholder: "Search public notes...",
            on_input: move |value| search.set(value),
        }

        if visible.is_empty() {
            div {
                class: "empty-state",
                if searching {
                    h3 { "No notes match your search" }
                    p { class: "muted", "Try different words." }
                } else {
                    h3 { "No public notes yet" }
                    p { class: "muted", "Be the first to share one." }
                }
            }
        } else {
            div {
                class: "note-grid",
                for note in visible {
                    NoteCard {
                        key: "{note.id}",
                        note: note.clone(),
                        viewer: Viewer::Public,
                    }
                }
            }
            if !pages.is_empty() {
                div {
                    class: "pagination",
                    for number in pages {
                        button {
                            key: "{number}",
                            class: if number == current { "page-button active" } else { "page-button" },
                            onclick: move |_| page.set(number),
                            "{number}"
                        }
                    }
                }
            }
        }
    }
}
