//! # Application configuration
//!
//! The client is configured at build time, the way a bundled single-page app
//! is: values are baked in from environment variables when the wasm binary is
//! compiled, falling back to the defaults below. The same struct can also be
//! read from a TOML document, which is how tests and alternative shells supply
//! it.
//!
//! ```toml
//! api_url = "https://notes.example.com/api"
//! google_client_id = "1234.apps.googleusercontent.com"
//! demo_login = false
//! public_page_size = 12
//! ```
//!
//! | Field | Build variable | Default |
//! |-------|----------------|---------|
//! | `api_url` | `NNOTE_API_URL` | `http://localhost:5000/api` |
//! | `google_client_id` | `NNOTE_GOOGLE_CLIENT_ID` | empty (Google button disabled) |
//! | `demo_login` | `NNOTE_DEMO_LOGIN` | `true` |
//! | `public_page_size` | (none) | `12` |

use serde::{Deserialize, Serialize};

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the notes REST API, without a trailing slash.
    pub api_url: String,
    /// OAuth client id for Google Identity Services.
    pub google_client_id: String,
    /// Show the mock `{email, name}` login form under the Google button.
    pub demo_login: bool,
    /// Notes per page on the public list.
    pub public_page_size: u32,
}

fn default_api_url() -> String {
    "http://localhost:5000/api".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            google_client_id: String::new(),
            demo_login: true,
            public_page_size: 12,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by the `NNOTE_*` variables present at compile time.
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("NNOTE_API_URL"),
            option_env!("NNOTE_GOOGLE_CLIENT_ID"),
            option_env!("NNOTE_DEMO_LOGIN"),
        )
    }

    fn with_overrides(
        mut self,
        api_url: Option<&str>,
        google_client_id: Option<&str>,
        demo_login: Option<&str>,
    ) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if let Some(id) = google_client_id {
            self.google_client_id = id.trim().to_string();
        }
        if let Some(flag) = demo_login {
            self.demo_login = matches!(flag.trim(), "1" | "true" | "yes" | "on");
        }
        self.api_url = self.api_url.trim_end_matches('/').to_string();
        self
    }

    /// Whether real Google sign-in can be offered.
    pub fn google_enabled(&self) -> bool {
        !self.google_client_id.is_empty()
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(s).map(|c| c.with_overrides(None, None, None))
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
