//! Unauthenticated reads of published notes.

use reqwest::{Method, RequestBuilder};
use store::{KeyValueStore, Note};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{NoteEnvelope, PublicNotesPage, PublicNotesQuery};

impl<S: KeyValueStore> ApiClient<S> {
    pub fn public_notes_request(&self, page: u32, limit: u32) -> RequestBuilder {
        self.json_request(Method::GET, "/public/notes")
            .query(&PublicNotesQuery { page, limit })
    }

    /// One page of the public feed, newest first.
    pub async fn list_public_notes(&self, page: u32, limit: u32) -> ApiResult<PublicNotesPage> {
        self.send(self.public_notes_request(page, limit)).await
    }

    pub fn public_note_request(&self, slug: &str) -> RequestBuilder {
        self.json_request(Method::GET, &format!("/public/notes/{slug}"))
    }

    pub async fn get_public_note(&self, slug: &str) -> ApiResult<Note> {
        let envelope: NoteEnvelope = self.send(self.public_note_request(slug)).await?;
        Ok(envelope.note)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::tests::{client, header, BASE};
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn test_public_page_query() {
        let req = client(None).public_notes_request(2, 12).build().unwrap();
        assert_eq!(
            req.url().as_str(),
            format!("{BASE}/public/notes?page=2&limit=12")
        );
        assert!(header(&req, AUTHORIZATION).is_none());
    }

    #[test]
    fn test_public_reads_still_carry_token_when_logged_in() {
        let req = client(Some("tok")).public_note_request("hello-ab12").build().unwrap();
        assert_eq!(req.url().as_str(), format!("{BASE}/public/notes/hello-ab12"));
        assert_eq!(header(&req, AUTHORIZATION).as_deref(), Some("Bearer tok"));
    }
}
