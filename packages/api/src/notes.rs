//! Owner CRUD on `/notes` and the image upload.

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use store::{KeyValueStore, Note};

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{NoteEnvelope, NotePayload, NotesEnvelope, SavedNote, UploadedImage};
use crate::submit::StagedImage;

/// Multipart field the server reads the image from.
const IMAGE_FIELD: &str = "image";

impl<S: KeyValueStore> ApiClient<S> {
    pub fn list_notes_request(&self) -> RequestBuilder {
        self.json_request(Method::GET, "/notes")
    }

    /// All notes owned by the current user.
    pub async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        let envelope: NotesEnvelope = self.send(self.list_notes_request()).await?;
        Ok(envelope.notes)
    }

    pub fn get_note_request(&self, id: &str) -> RequestBuilder {
        self.json_request(Method::GET, &format!("/notes/{id}"))
    }

    pub async fn get_note(&self, id: &str) -> ApiResult<Note> {
        let envelope: NoteEnvelope = self.send(self.get_note_request(id)).await?;
        Ok(envelope.note)
    }

    pub fn create_note_request(&self, payload: &NotePayload) -> RequestBuilder {
        self.json_request(Method::POST, "/notes").json(payload)
    }

    /// Create a note. The server may or may not echo it back.
    pub async fn create_note(&self, payload: &NotePayload) -> ApiResult<Option<Note>> {
        let saved: SavedNote = self.send(self.create_note_request(payload)).await?;
        Ok(saved.note)
    }

    pub fn update_note_request(&self, id: &str, payload: &NotePayload) -> RequestBuilder {
        self.json_request(Method::PUT, &format!("/notes/{id}"))
            .json(payload)
    }

    /// Replace every editable field of note `id`.
    pub async fn update_note(&self, id: &str, payload: &NotePayload) -> ApiResult<Option<Note>> {
        let saved: SavedNote = self.send(self.update_note_request(id, payload)).await?;
        Ok(saved.note)
    }

    pub fn delete_note_request(&self, id: &str) -> RequestBuilder {
        self.json_request(Method::DELETE, &format!("/notes/{id}"))
    }

    pub async fn delete_note(&self, id: &str) -> ApiResult<()> {
        self.send_empty(self.delete_note_request(id)).await
    }

    /// Multipart upload. No JSON content type: reqwest sets the boundary.
    pub fn upload_image_request(&self, image: &StagedImage) -> ApiResult<RequestBuilder> {
        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.mime_type())
            .map_err(ApiError::transport)?;
        let form = Form::new().part(IMAGE_FIELD, part);
        Ok(self
            .request(Method::POST, "/notes/upload-image")
            .multipart(form))
    }

    pub async fn upload_image(&self, image: &StagedImage) -> ApiResult<UploadedImage> {
        tracing::debug!(
            file = image.file_name(),
            bytes = image.bytes().len(),
            "uploading image"
        );
        self.send(self.upload_image_request(image)?).await
    }
}
