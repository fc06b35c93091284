use api::{submit_note, NoteDraft, StagedImage, SubmitTarget};
use dioxus::prelude::*;
use store::Note;

use crate::icons::{
    FaCircleXmark, FaEye, FaEyeSlash, FaFloppyDisk, FaUpload, FaUser, FaUserSecret,
};
use crate::{notify, use_api, Icon};

const IMAGE_INPUT_ID: &str = "image-upload";

/// Script emptying file input `id`, so picking the same file again fires
/// `change`.
fn clear_file_input_script(id: &str) -> String {
    format!(
        "const input = document.getElementById({}); if (input) {{ input.value = ''; }}",
        crate::google::js_string(id)
    )
}

fn clear_file_input(id: &str) {
    // Fire and forget; nothing is sent back.
    let _ = document::eval(&clear_file_input_script(id));
}

/// Create/edit form shared by both pages.
///
/// Keeps its fields on failure. `on_saved` fires once the note request
/// succeeded; `on_unauthorized` when the server rejected the session.
#[component]
pub fn NoteForm(
    initial: NoteDraft,
    target: SubmitTarget,
    on_saved: EventHandler<Option<Note>>,
    on_unauthorized: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut draft = use_signal(|| initial.clone());
    let mut staged = use_signal(|| None::<StagedImage>);
    let mut submitting = use_signal(|| false);

    let on_pick_image = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            staged.set(None);
            return;
        };
        let Some(bytes) = engine.read_file(&name).await else {
            notify::alert(&format!("Could not read {name}"));
            return;
        };
        match StagedImage::new(name, bytes) {
            Ok(image) => staged.set(Some(image)),
            Err(e) => notify::alert(&e.to_string()),
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let api = api.clone();
        let target = target.clone();
        let current = draft();
        let image = staged();
        submitting.set(true);
        spawn(async move {
            let result = submit_note(&api, &target, &current, image.as_ref()).await;
            submitting.set(false);
            match result {
                Ok(saved) => on_saved.call(saved),
                Err(e) if e.is_unauthorized() => on_unauthorized.call(()),
                Err(e) => {
                    tracing::warn!("Saving note failed: {}", e);
                    notify::alert(&e.to_string());
                }
            }
        });
    };

    let is_public = draft.read().is_public;
    let is_anonymous = draft.read().is_anonymous;
    let preview = match staged.read().as_ref() {
        Some(image) => Some(image.preview_data_url()),
        None => draft.read().image_url.clone(),
    };
    let selected = staged
        .read()
        .as_ref()
        .map(|image| format!("Selected: {} ({})", image.file_name(), image.size_label()));

    rsx! {
        form {
            class: "note-form",
            onsubmit: on_submit,

            label { r#for: "title", "Title" }
            input {
                id: "title",
                r#type: "text",
                required: true,
                placeholder: "Give your note a title...",
                value: "{draft.read().title}",
                oninput: move |evt| draft.write().title = evt.value(),
            }

            label { r#for: "content", "Content" }
            textarea {
                id: "content",
                required: true,
                rows: 15,
                placeholder: "Write your note here...",
                value: "{draft.read().content}",
                oninput: move |evt| draft.write().content = evt.value(),
            }

            label { r#for: IMAGE_INPUT_ID, "Image (optional)" }
            div {
                class: "image-field",
                label {
                    class: "upload-button",
                    Icon { icon: FaUpload, width: 14, height: 14 }
                    span { "Choose image" }
                    input {
                        id: IMAGE_INPUT_ID,
                        r#type: "file",
                        accept: api::submit::IMAGE_ACCEPT,
                        multiple: false,
                        onchange: on_pick_image,
                    }
                }
                if let Some(src) = preview {
                    div {
                        class: "image-preview",
                        img { src: "{src}", alt: "Image preview" }
                        button {
                            r#type: "button",
                            class: "icon-button danger",
                            title: "Remove image",
                            onclick: move |_| {
                                staged.set(None);
                                draft.write().remove_image();
                                clear_file_input(IMAGE_INPUT_ID);
                            },
                            Icon { icon: FaCircleXmark, width: 14, height: 14 }
                        }
                    }
                }
            }
            if let Some(selected) = selected {
                p { class: "muted", "{selected}" }
            }

            div {
                class: "checkbox-row",
                input {
                    id: "is-public",
                    r#type: "checkbox",
                    checked: is_public,
                    oninput: move |evt| {
                        let public = evt.checked();
                        let mut d = draft.write();
                        d.is_public = public;
                        if !public {
                            d.is_anonymous = false;
                        }
                    },
                }
                label {
                    r#for: "is-public",
                    if is_public {
                        Icon { icon: FaEye, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaEyeSlash, width: 14, height: 14 }
                    }
                    span { "Share publicly (anyone can read it)" }
                }
            }
            if is_public {
                div {
                    class: "checkbox-row nested",
                    input {
                        id: "is-anonymous",
                        r#type: "checkbox",
                        checked: is_anonymous,
                        oninput: move |evt| draft.write().is_anonymous = evt.checked(),
                    }
                    label {
                        r#for: "is-anonymous",
                        if is_anonymous {
                            Icon { icon: FaUserSecret, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaUser, width: 14, height: 14 }
                        }
                        span { "Hide my name (show as anonymous)" }
                    }
                }
            }

            div {
                class: "form-actions",
                button {
                    r#type: "submit",
                    class: "primary-button",
                    disabled: submitting(),
                    Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                    if submitting() {
                        span { "Saving..." }
                    } else {
                        span { "Save" }
                    }
                }
            }
        }
    }
}
