//! Request and response schemas, one per endpoint.
//!
//! Request payloads reject unknown fields so a typo in a hand-built body fails
//! loudly. Response envelopes ignore extra fields the server may add.

mod requests;
mod responses;

pub use requests::{GoogleCredential, MockLogin, NotePayload, PublicNotesQuery};
pub use responses::{
    NoteEnvelope, NotesEnvelope, Pagination, PublicNotesPage, SavedNote, UploadedImage,
    UserEnvelope,
};
