//! # Domain models for notes and sessions
//!
//! These types mirror the JSON documents exchanged with the notes API, using
//! camelCase on the wire. They are `Serialize + Deserialize` so the [`crate::session`]
//! store can persist them and the `api` crate can decode responses into them.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Note`] | One user document: identity (`id`, `slug`), content, visibility flags, author and timestamps. |
//! | [`Author`] | The public projection of a note's owner (`name`, optional `avatar`). |
//! | [`UserProfile`] | The logged-in user as returned by the auth endpoints. |
//! | [`Session`] | Bearer token plus [`UserProfile`]; the unit persisted by [`crate::SessionStore`]. |
//!
//! ## Visibility
//!
//! A note's author is only ever rendered through [`Note::byline`], which hides
//! the author of a private note from anyone but its owner and only honours
//! `is_anonymous` on public notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Default number of characters shown on a note card.
pub const PREVIEW_CHARS: usize = 150;

/// A note as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(alias = "_id")]
    pub id: String,
    /// URL-safe public identifier, assigned by the server.
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    pub content: String,
    /// Hosted image reference. The API sends `""` for "no image".
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub author: Option<Author>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a note's owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Who is looking at a note.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewer {
    /// The note's owner, on their dashboard.
    Owner,
    /// Anyone else, authenticated or not.
    Public,
}

/// What a view may show as a note's author line.
#[derive(Clone, Debug, PartialEq)]
pub enum Byline<'a> {
    Named(&'a Author),
    Anonymous,
    Hidden,
}

impl Note {
    /// Author line for `viewer`.
    pub fn byline(&self, viewer: Viewer) -> Byline<'_> {
        if !self.is_public && viewer == Viewer::Public {
            return Byline::Hidden;
        }
        if self.is_public && self.is_anonymous {
            return Byline::Anonymous;
        }
        match &self.author {
            Some(author) => Byline::Named(author),
            None => Byline::Hidden,
        }
    }

    /// Body truncated to `max_chars` characters, with `...` appended when cut.
    pub fn preview(&self, max_chars: usize) -> String {
        truncate_chars(&self.content, max_chars)
    }

    /// Body split into display paragraphs, one per line.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }

    /// Public slug, only when the note is actually public.
    pub fn public_slug(&self) -> Option<&str> {
        if self.is_public {
            self.slug.as_deref().filter(|s| !s.is_empty())
        } else {
            None
        }
    }

    /// Long-form creation date, e.g. `18 October 2026`.
    pub fn created_label(&self) -> String {
        self.created_at.format("%-d %B %Y").to_string()
    }

    /// Long-form creation date with time, e.g. `18 October 2026 09:05`.
    pub fn created_label_with_time(&self) -> String {
        self.created_at.format("%-d %B %Y %H:%M").to_string()
    }

    /// Whether the note was edited after creation.
    pub fn was_edited(&self) -> bool {
        self.updated_at > self.created_at
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// The authenticated user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserProfile {
    /// Name to show in the navbar, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Locally held proof of authentication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_json(is_public: bool, is_anonymous: bool) -> String {
        format!(
            r#"{{
                "id": "n1",
                "slug": "hello-world-ab12",
                "title": "Hello World",
                "content": "First line\nSecond line",
                "imageUrl": "",
                "isPublic": {is_public},
                "isAnonymous": {is_anonymous},
                "author": {{ "name": "Somchai", "avatar": null }},
                "createdAt": "2026-10-18T09:05:00.000Z",
                "updatedAt": "2026-10-18T10:00:00.000Z"
            }}"#
        )
    }

    fn note(is_public: bool, is_anonymous: bool) -> Note {
        serde_json::from_str(&note_json(is_public, is_anonymous)).unwrap()
    }

    #[test]
    fn test_decode_api_note() {
        let n = note(true, false);
        assert_eq!(n.id, "n1");
        assert_eq!(n.slug.as_deref(), Some("hello-world-ab12"));
        assert!(n.image_url.is_none(), "empty imageUrl decodes to None");
        assert!(n.is_public);
        assert_eq!(n.author.as_ref().unwrap().name, "Somchai");
        assert!(n.was_edited());
    }

    #[test]
    fn test_decode_mongo_style_id() {
        let json = r#"{"_id":"abc","title":"T","content":"C",
            "createdAt":"2026-01-01T00:00:00Z","updatedAt":"2026-01-01T00:00:00Z"}"#;
        let n: Note = serde_json::from_str(json).unwrap();
        assert_eq!(n.id, "abc");
        assert!(!n.is_public);
        assert!(n.slug.is_none());
        assert!(!n.was_edited());
    }

    #[test]
    fn test_byline_public_named() {
        let n = note(true, false);
        match n.byline(Viewer::Public) {
            Byline::Named(a) => assert_eq!(a.name, "Somchai"),
            other => panic!("expected named byline, got {other:?}"),
        }
    }

    #[test]
    fn test_byline_public_anonymous() {
        let n = note(true, true);
        assert_eq!(n.byline(Viewer::Public), Byline::Anonymous);
        assert_eq!(n.byline(Viewer::Owner), Byline::Anonymous);
    }

    #[test]
    fn test_byline_private_note_hides_author_from_public() {
        // Anonymity is meaningless on a private note; the author is hidden outright.
        let n = note(false, true);
        assert_eq!(n.byline(Viewer::Public), Byline::Hidden);
        assert!(matches!(n.byline(Viewer::Owner), Byline::Named(_)));
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let mut n = note(true, false);
        n.content = "บันทึกภาษาไทย".to_string();
        assert_eq!(n.preview(5), "บันทึ...");
        assert_eq!(n.preview(100), "บันทึกภาษาไทย");
        assert_eq!(n.preview(PREVIEW_CHARS), n.content);
    }

    #[test]
    fn test_paragraphs_and_labels() {
        let n = note(true, false);
        let paras: Vec<&str> = n.paragraphs().collect();
        assert_eq!(paras, vec!["First line", "Second line"]);
        assert_eq!(n.created_label(), "18 October 2026");
        assert_eq!(n.created_label_with_time(), "18 October 2026 09:05");
    }

    #[test]
    fn test_public_slug_only_for_public_notes() {
        assert_eq!(note(true, false).public_slug(), Some("hello-world-ab12"));
        assert_eq!(note(false, false).public_slug(), None);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = UserProfile {
            id: None,
            name: "Nok".into(),
            email: "nok@example.com".into(),
            avatar: None,
        };
        assert_eq!(user.display_name(), "Nok");
        user.name = "  ".into();
        assert_eq!(user.display_name(), "nok@example.com");
    }
}
