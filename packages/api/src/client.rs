//! The HTTP client.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use store::session::stored_token;
use store::{AppConfig, KeyValueStore};
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};

/// Client for the notes REST API.
///
/// Holds a handle to the storage the session lives in, never the token
/// itself: the token is read again for every request, so logging in or out
/// takes effect on the very next call.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    storage: S,
}

impl<S: KeyValueStore> ApiClient<S> {
    /// Create a client for `base_url` (e.g. `https://notes.example.com/api`).
    pub fn new(base_url: impl Into<String>, storage: S) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            storage,
        }
    }

    pub fn from_config(config: &AppConfig, storage: S) -> Self {
        Self::new(config.api_url.clone(), storage)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Builder for `path` with the bearer token attached when one is stored.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match stored_token(&self.storage) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Authenticated builder declaring a JSON body.
    pub(crate) fn json_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request(method, path)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Builder for the credential exchange endpoints, which never carry a token.
    pub(crate) fn anonymous_json_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
    }

    /// Send and decode a JSON response body.
    pub(crate) async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let (status, body) = self.execute(builder).await?;
        // A 2xx with no body decodes like an empty object.
        let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
        serde_json::from_str(body).map_err(|e| ApiError::decode(status, e))
    }

    /// Send, discarding any response body.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> ApiResult<()> {
        self.execute(builder).await.map(|_| ())
    }

    async fn execute(&self, builder: RequestBuilder) -> ApiResult<(u16, String)> {
        let request = builder.build().map_err(ApiError::transport)?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        debug!(%method, %path, "api request");

        let response = self.http.execute(request).await.map_err(|e| {
            warn!(%method, %path, error = %e, "api request failed");
            ApiError::transport(e)
        })?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::transport)?;

        if !status.is_success() {
            let err = ApiError::from_error_body(Some(status.as_u16()), &body);
            warn!(%method, %path, status = status.as_u16(), error = %err, "api error response");
            return Err(err);
        }
        Ok((status.as_u16(), body))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;
    use store::{MemoryStore, Session, SessionStore, UserProfile};

    pub(crate) const BASE: &str = "http://api.test/api";

    pub(crate) fn client(token: Option<&str>) -> ApiClient<MemoryStore> {
        let storage = MemoryStore::new();
        if let Some(token) = token {
            SessionStore::load(storage.clone())
                .login(Session {
                    token: token.to_string(),
                    user: UserProfile {
                        id: None,
                        name: "Nok".into(),
                        email: "nok@example.com".into(),
                        avatar: None,
                    },
                })
                .unwrap();
        }
        ApiClient::new(format!("{BASE}/"), storage)
    }

    pub(crate) fn header(req: &reqwest::Request, name: reqwest::header::HeaderName) -> Option<String> {
        req.headers()
            .get(name)
            .map(|v| v.to_str().unwrap().to_string())
    }

    pub(crate) fn json_body(req: &reqwest::Request) -> serde_json::Value {
        let bytes = req.body().and_then(|b| b.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        assert_eq!(client(None).base_url(), BASE);
    }

    #[test]
    fn test_token_attached_when_present() {
        let req = client(Some("tok")).request(Method::GET, "/notes").build().unwrap();
        assert_eq!(header(&req, AUTHORIZATION).as_deref(), Some("Bearer tok"));
    }

    #[test]
    fn test_no_token_no_header() {
        let req = client(None).json_request(Method::GET, "/notes").build().unwrap();
        assert!(header(&req, AUTHORIZATION).is_none());
        assert_eq!(header(&req, CONTENT_TYPE).as_deref(), Some("application/json"));
    }

    #[test]
    fn test_token_is_read_per_request() {
        let api = client(None);
        let before = api.request(Method::GET, "/notes").build().unwrap();
        assert!(header(&before, AUTHORIZATION).is_none());

        let mut session = SessionStore::load(api.storage.clone());
        session
            .login(Session {
                token: "fresh".into(),
                user: UserProfile {
                    id: None,
                    name: "A".into(),
                    email: "a@example.com".into(),
                    avatar: None,
                },
            })
            .unwrap();
        let during = api.request(Method::GET, "/notes").build().unwrap();
        assert_eq!(header(&during, AUTHORIZATION).as_deref(), Some("Bearer fresh"));

        session.logout().unwrap();
        let after = api.request(Method::GET, "/notes").build().unwrap();
        assert!(header(&after, AUTHORIZATION).is_none());
    }

    #[test]
    fn test_anonymous_request_never_carries_token() {
        let req = client(Some("tok"))
            .anonymous_json_request(Method::POST, "/auth/google")
            .build()
            .unwrap();
        assert!(header(&req, AUTHORIZATION).is_none());
    }
}
