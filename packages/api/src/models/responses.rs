use serde::{Deserialize, Serialize};
use store::{Note, UserProfile};

/// `GET /auth/me`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserEnvelope {
    pub user: UserProfile,
}

/// `GET /notes`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NotesEnvelope {
    pub notes: Vec<Note>,
}

/// `GET /notes/{id}`, `GET /public/notes/{slug}`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NoteEnvelope {
    pub note: Note,
}

/// `POST /notes`, `PUT /notes/{id}`. The saved note is echoed back when the
/// server chooses to.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SavedNote {
    #[serde(default)]
    pub note: Option<Note>,
}

/// `POST /notes/upload-image`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub image_url: String,
}

/// `GET /public/notes?page&limit`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PublicNotesPage {
    pub notes: Vec<Note>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default = "one")]
    pub total_pages: u32,
    #[serde(default)]
    pub total: Option<u64>,
}

fn one() -> u32 {
    1
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            total_pages: 1,
            total: None,
        }
    }
}
