//! Credential exchange and the current-user lookup.

use reqwest::{Method, RequestBuilder};
use store::{KeyValueStore, Session, UserProfile};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{GoogleCredential, MockLogin, UserEnvelope};

impl<S: KeyValueStore> ApiClient<S> {
    pub fn google_login_request(&self, credential: &str) -> RequestBuilder {
        self.anonymous_json_request(Method::POST, "/auth/google")
            .json(&GoogleCredential {
                credential: credential.to_string(),
            })
    }

    /// Exchange a Google ID token for an app session.
    pub async fn google_login(&self, credential: &str) -> ApiResult<Session> {
        self.send(self.google_login_request(credential)).await
    }

    pub fn mock_login_request(&self, login: &MockLogin) -> RequestBuilder {
        self.anonymous_json_request(Method::POST, "/auth/google/mock")
            .json(login)
    }

    /// Demo login: the server mints a session for any name and email.
    pub async fn mock_login(&self, login: &MockLogin) -> ApiResult<Session> {
        self.send(self.mock_login_request(login)).await
    }

    pub fn current_user_request(&self) -> RequestBuilder {
        self.json_request(Method::GET, "/auth/me")
    }

    pub async fn current_user(&self) -> ApiResult<UserProfile> {
        let envelope: UserEnvelope = self.send(self.current_user_request()).await?;
        Ok(envelope.user)
    }
}
