//! # Note form workflow
//!
//! The create and edit pages share one submission path, [`submit_note`]:
//!
//! 1. [`NoteDraft::validate`] rejects a blank title or body before anything
//!    touches the network.
//! 2. If the user staged an image, it is uploaded first and the returned URL
//!    replaces the draft's image reference. A failed upload stops here with
//!    [`SubmitError::UploadFailed`]; the note request is never issued.
//! 3. The note is created or updated with the full [`NotePayload`].
//!
//! The network side is abstracted behind [`NotesBackend`] so the ordering is
//! tested without a server.

use std::future::Future;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use store::{KeyValueStore, Note};

use crate::client::ApiClient;
use crate::error::{ApiResult, SubmitError};
use crate::models::{NotePayload, UploadedImage};

/// Value for the file input's `accept` attribute.
pub const IMAGE_ACCEPT: &str = "image/jpeg,image/png,image/gif,image/webp";

const MISSING_FIELDS: &str = "Please enter a title and content";

/// An image picked in the form but not yet uploaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedImage {
    file_name: String,
    mime_type: &'static str,
    bytes: Vec<u8>,
}

impl StagedImage {
    /// Stage a picked file. Only jpeg, png, gif and webp are accepted,
    /// judged by extension.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, SubmitError> {
        let file_name = file_name.into();
        let mime_type = mime_for(&file_name).ok_or_else(|| {
            SubmitError::ValidationFailed(format!(
                "{file_name} is not a supported image (jpeg, png, gif or webp)"
            ))
        })?;
        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Inline preview for the form. Never sent to the server.
    pub fn preview_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.bytes.len() as f64 / (1024.0 * 1024.0))
    }
}

fn mime_for(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Editable fields of the note form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub is_public: bool,
    pub is_anonymous: bool,
    /// Already-hosted image kept from the note being edited.
    pub image_url: Option<String>,
}

impl NoteDraft {
    /// Prefill from an existing note (edit page).
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            is_public: note.is_public,
            is_anonymous: note.is_public && note.is_anonymous,
            image_url: note.image_url.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(SubmitError::ValidationFailed(MISSING_FIELDS.to_string()));
        }
        Ok(())
    }

    pub fn remove_image(&mut self) {
        self.image_url = None;
    }

    /// Wire payload. Anonymity only applies to public notes.
    pub fn to_payload(&self, image_url: Option<&str>) -> NotePayload {
        NotePayload {
            title: self.title.clone(),
            content: self.content.clone(),
            is_public: self.is_public,
            is_anonymous: self.is_public && self.is_anonymous,
            image_url: image_url.unwrap_or_default().to_string(),
        }
    }
}

/// Whether the form creates a note or edits note `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(String),
}

/// The three calls the form workflow makes.
pub trait NotesBackend {
    fn upload_image(
        &self,
        image: &StagedImage,
    ) -> impl Future<Output = ApiResult<UploadedImage>>;
    fn create_note(
        &self,
        payload: &NotePayload,
    ) -> impl Future<Output = ApiResult<Option<Note>>>;
    fn update_note(
        &self,
        id: &str,
        payload: &NotePayload,
    ) -> impl Future<Output = ApiResult<Option<Note>>>;
}

impl<S: KeyValueStore> NotesBackend for ApiClient<S> {
    async fn upload_image(&self, image: &StagedImage) -> ApiResult<UploadedImage> {
        ApiClient::upload_image(self, image).await
    }

    async fn create_note(&self, payload: &NotePayload) -> ApiResult<Option<Note>> {
        ApiClient::create_note(self, payload).await
    }

    async fn update_note(&self, id: &str, payload: &NotePayload) -> ApiResult<Option<Note>> {
        ApiClient::update_note(self, id, payload).await
    }
}

/// Validate, upload the staged image if any, then create or update.
pub async fn submit_note<B: NotesBackend>(
    backend: &B,
    target: &SubmitTarget,
    draft: &NoteDraft,
    staged: Option<&StagedImage>,
) -> Result<Option<Note>, SubmitError> {
    draft.validate()?;

    let uploaded;
    let image_url = match staged {
        Some(image) => {
            uploaded = backend
                .upload_image(image)
                .await
                .map_err(SubmitError::UploadFailed)?;
            Some(uploaded.image_url.as_str())
        }
        None => draft.image_url.as_deref(),
    };

    let payload = draft.to_payload(image_url);
    let saved = match target {
        SubmitTarget::Create => backend.create_note(&payload).await?,
        SubmitTarget::Update(id) => backend.update_note(id, &payload).await?,
    };
    tracing::info!(submit = ?target, "note saved");
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Upload(String),
        Create(NotePayload),
        Update(String, NotePayload),
    }

    #[derive(Default)]
    struct MockBackend {
        calls: RefCell<Vec<Call>>,
        fail_upload: bool,
    }

    impl NotesBackend for MockBackend {
        async fn upload_image(&self, image: &StagedImage) -> ApiResult<UploadedImage> {
            self.calls
                .borrow_mut()
                .push(Call::Upload(image.file_name().to_string()));
            if self.fail_upload {
                return Err(ApiError::from_error_body(
                    Some(413),
                    r#"{"error":"File too large"}"#,
                ));
            }
            Ok(UploadedImage {
                image_url: "https://img.example.com/cat.png".into(),
            })
        }

        async fn create_note(&self, payload: &NotePayload) -> ApiResult<Option<Note>> {
            self.calls.borrow_mut().push(Call::Create(payload.clone()));
            Ok(None)
        }

        async fn update_note(&self, id: &str, payload: &NotePayload) -> ApiResult<Option<Note>> {
            self.calls
                .borrow_mut()
                .push(Call::Update(id.to_string(), payload.clone()));
            Ok(None)
        }
    }

    fn draft() -> NoteDraft {
        NoteDraft {
            title: "Trip".into(),
            content: "Pack the tent".into(),
            ..Default::default()
        }
    }

    fn image() -> StagedImage {
        StagedImage::new("cat.png", vec![1, 2, 3]).unwrap()
    }

    #[tokio::test]
    async fn test_upload_failure_skips_note_request() {
        let backend = MockBackend {
            fail_upload: true,
            ..Default::default()
        };
        let err = submit_note(&backend, &SubmitTarget::Create, &draft(), Some(&image()))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::UploadFailed(_)));
        assert_eq!(err.to_string(), "Image upload failed: File too large");
        assert_eq!(*backend.calls.borrow(), vec![Call::Upload("cat.png".into())]);
    }

    #[tokio::test]
    async fn test_uploaded_url_is_used() {
        let backend = MockBackend::default();
        submit_note(&backend, &SubmitTarget::Create, &draft(), Some(&image()))
            .await
            .unwrap();
        let calls = backend.calls.borrow();
        assert_eq!(calls.len(), 2);
        match &calls[1] {
            Call::Create(payload) => {
                assert_eq!(payload.image_url, "https://img.example.com/cat.png")
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_image_sends_empty_url() {
        let backend = MockBackend::default();
        submit_note(&backend, &SubmitTarget::Create, &draft(), None)
            .await
            .unwrap();
        let calls = backend.calls.borrow();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            Call::Create(payload) => assert_eq!(payload.image_url, ""),
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_fields_never_reach_backend() {
        let backend = MockBackend::default();
        let blank = NoteDraft {
            title: "   ".into(),
            content: "body".into(),
            ..Default::default()
        };
        let err = submit_note(&backend, &SubmitTarget::Create, &blank, Some(&image()))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::ValidationFailed(_)));
        assert!(backend.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_existing_image() {
        let backend = MockBackend::default();
        let mut edit = draft();
        edit.image_url = Some("https://img.example.com/old.jpg".into());
        submit_note(&backend, &SubmitTarget::Update("n9".into()), &edit, None)
            .await
            .unwrap();
        let calls = backend.calls.borrow();
        match &calls[0] {
            Call::Update(id, payload) => {
                assert_eq!(id, "n9");
                assert_eq!(payload.image_url, "https://img.example.com/old.jpg");
            }
            other => panic!("unexpected call {other:?}"),
        };
    }

    #[tokio::test]
    async fn test_removed_image_clears_url() {
        let backend = MockBackend::default();
        let mut edit = draft();
        edit.image_url = Some("https://img.example.com/old.jpg".into());
        edit.remove_image();
        submit_note(&backend, &SubmitTarget::Update("n9".into()), &edit, None)
            .await
            .unwrap();
        let calls = backend.calls.borrow();
        match &calls[0] {
            Call::Update(_, payload) => assert_eq!(payload.image_url, ""),
            other => panic!("unexpected call {other:?}"),
        };
    }

    #[test]
    fn test_private_note_is_never_anonymous() {
        let mut d = draft();
        d.is_anonymous = true;
        assert!(!d.to_payload(None).is_anonymous);
        d.is_public = true;
        assert!(d.to_payload(None).is_anonymous);
    }

    #[test]
    fn test_staged_image_accepts_only_known_types() {
        for name in ["a.jpg", "b.JPEG", "c.png", "d.gif", "e.webp"] {
            assert!(StagedImage::new(name, vec![]).is_ok(), "{name}");
        }
        for name in ["notes.pdf", "image", "archive.png.zip", "x.svg"] {
            assert!(
                matches!(
                    StagedImage::new(name, vec![]),
                    Err(SubmitError::ValidationFailed(_))
                ),
                "{name}"
            );
        }
    }

    #[test]
    fn test_preview_and_size() {
        let image = StagedImage::new("pixel.gif", b"GIF".to_vec()).unwrap();
        assert_eq!(image.mime_type(), "image/gif");
        assert_eq!(image.preview_data_url(), "data:image/gif;base64,R0lG");
        let big = StagedImage::new("big.jpg", vec![0; 1536 * 1024]).unwrap();
        assert_eq!(big.size_label(), "1.50 MB");
    }
}
