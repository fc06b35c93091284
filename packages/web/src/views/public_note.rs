use dioxus::prelude::*;

use store::models::Viewer;
use store::Byline;
use ui::icons::{FaArrowLeft, FaCalendar, FaGlobe, FaUser};
use ui::{use_api, Icon};

use super::Spinner;
use crate::Route;

/// A single public note, addressed by slug.
#[component]
pub fn PublicNote(slug: String) -> Element {
    let api = use_api();

    let loaded = use_resource(use_reactive!(|(slug,)| {
        let api = api.clone();
        async move { api.get_public_note(&slug).await }
    }));

    let guard = loaded.read_unchecked();
    let Some(result) = &*guard else {
        return rsx! { Spinner {} };
    };

    let note = match result {
        Ok(note) => note.clone(),
        Err(e) => {
            return rsx! {
                div {
                    class: "empty-state",
                    h2 { "Something went wrong" }
                    p { class: "muted", "{e.message()}" }
                    Link { class: "back-link", to: Route::PublicNotes {},
                        Icon { icon: FaArrowLeft, width: 14, height: 14 }
                        "Back to the home page"
                    }
                }
            };
        }
    };

    let created = note.created_label_with_time();

    rsx! {
        Link { class: "back-link", to: Route::PublicNotes {},
            Icon { icon: FaArrowLeft, width: 14, height: 14 }
            "Back to public notes"
        }
        article {
            class: "note-article",
            header {
                div { class: "muted",
                    Icon { icon: FaGlobe, width: 14, height: 14 }
                    " Public note"
                }
                h1 { "{note.title}" }
                div {
                    class: "note-card-meta",
                    span {
                        Icon { icon: FaCalendar, width: 14, height: 14 }
                        " {created}"
                    }
                    {match note.byline(Viewer::Public) {
                        Byline::Named(author) => rsx! {
                            span {
                                Icon { icon: FaUser, width: 14, height: 14 }
                                " By {author.name}"
                            }
                        },
                        Byline::Anonymous => rsx! {
                            span { class: "anonymous",
                                Icon { icon: FaUser, width: 14, height: 14 }
                                " Anonymous"
                            }
                        },
                        Byline::Hidden => rsx! {},
                    }}
                }
            }
            if let Some(ref src) = note.image_url {
                img { class: "note-article-image", src: "{src}", alt: "{note.title}" }
            }
            div {
                class: "note-article-body",
                for (index, paragraph) in note.paragraphs().enumerate() {
                    p { key: "{index}", "{paragraph}" }
                }
            }
            footer {
                class: "muted",
                "Shared on NNote, a place to write and share notes."
            }
        }
    }
}
