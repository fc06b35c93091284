use dioxus::prelude::*;
use store::models::{Viewer, PREVIEW_CHARS};
use store::{Byline, Note};

use crate::icons::{
    FaArrowUpRightFromSquare, FaCalendar, FaEye, FaEyeSlash, FaPenToSquare, FaTrashCan, FaUser,
};
use crate::Icon;

/// Summary card for the dashboard and the public list.
///
/// Edit and delete buttons only render when `show_actions` is set. The
/// author line always goes through [`Note::byline`].
#[component]
pub fn NoteCard(
    note: Note,
    viewer: Viewer,
    #[props(default)] show_actions: bool,
    #[props(default)] on_edit: EventHandler<String>,
    #[props(default)] on_delete: EventHandler<String>,
) -> Element {
    let preview = note.preview(PREVIEW_CHARS);
    let created = note.created_label();
    let public_href = note.public_slug().map(|slug| format!("/note/{slug}"));

    rsx! {
        div {
            class: "note-card",
            div {
                class: "note-card-header",
                h3 { class: "note-card-title", "{note.title}" }
                if note.is_public {
                    span { class: "visibility public", title: "Public",
                        Icon { icon: FaEye, width: 14, height: 14 }
                    }
                } else {
                    span { class: "visibility private", title: "Private",
                        Icon { icon: FaEyeSlash, width: 14, height: 14 }
                    }
                }
            }

            if let Some(ref src) = note.image_url {
                img { class: "note-card-image", src: "{src}", alt: "{note.title}" }
            }

            p { class: "note-card-preview", "{preview}" }

            div {
                class: "note-card-footer",
                div {
                    class: "note-card-meta",
                    span {
                        Icon { icon: FaCalendar, width: 12, height: 12 }
                        "{created}"
                    }
                    {match note.byline(viewer) {
                        Byline::Named(author) => rsx! {
                            span {
                                Icon { icon: FaUser, width: 12, height: 12 }
                                "{author.name}"
                            }
                        },
                        Byline::Anonymous => rsx! {
                            span { class: "anonymous", "Anonymous" }
                        },
                        Byline::Hidden => rsx! {},
                    }}
                }
                div {
                    class: "note-card-actions",
                    if let Some(href) = public_href {
                        Link { class: "icon-link", to: href,
                            Icon { icon: FaArrowUpRightFromSquare, width: 12, height: 12 }
                        }
                    }
                    if show_actions {
                        button {
                            class: "icon-button",
                            title: "Edit",
                            onclick: {
                                let id = note.id.clone();
                                move |_| on_edit.call(id.clone())
                            },
                            Icon { icon: FaPenToSquare, width: 12, height: 12 }
                        }
                        button {
                            class: "icon-button danger",
                            title: "Delete",
                            onclick: {
                                let id = note.id.clone();
                                move |_| on_delete.call(id.clone())
                            },
                            Icon { icon: FaTrashCan, width: 12, height: 12 }
                        }
                    }
                }
            }
        }
    }
}
