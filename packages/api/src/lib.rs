//! # API crate: HTTP client for the NNote REST API
//!
//! Every network call the frontend makes goes through [`ApiClient`]. The client
//! is a thin typed layer over `reqwest`: it joins paths onto the configured
//! base URL, attaches `Authorization: Bearer <token>` whenever a session is
//! stored, and folds every failure into [`ApiError::RequestFailed`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`], request construction, response decoding |
//! | `auth` | `POST /auth/google`, `POST /auth/google/mock`, `GET /auth/me` |
//! | `notes` | Owner CRUD on `/notes` plus `POST /notes/upload-image` |
//! | `public` | `GET /public/notes` (paginated) and `GET /public/notes/{slug}` |
//! | [`models`] | Request payloads and response envelopes, one per endpoint |
//! | [`submit`] | The create/edit form workflow: validate, upload, then save |
//! | [`error`] | [`ApiError`] and [`SubmitError`] |
//!
//! Each endpoint has a `*_request` builder separate from the `async fn` that
//! sends it, so the exact method, URL, query and headers are testable without
//! a server.

pub mod client;
pub mod error;
pub mod models;
pub mod submit;

mod auth;
mod notes;
mod public;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult, SubmitError};
pub use models::{MockLogin, NotePayload, Pagination, PublicNotesPage, UploadedImage};
pub use submit::{submit_note, NoteDraft, NotesBackend, StagedImage, SubmitTarget};

pub use store::{Note, Session, UserProfile};
