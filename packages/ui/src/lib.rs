//! Shared components and context providers for the NNote web client.
//!
//! The providers own the two client stores as context signals:
//! [`AuthProvider`] holds the session and [`ThemeProvider`] holds the
//! appearance preference. [`ApiProvider`] hands every view the same
//! [`api::ApiClient`].

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod auth;
pub use auth::{sign_in, sign_out, use_auth, AuthProvider, AuthSignal};

mod client;
pub use client::{use_api, use_config, Api, ApiProvider};

mod google;
pub use google::GoogleSignIn;

mod theme;
pub use theme::{use_theme, ThemeProvider, ThemeSelector, ThemeSignal};

pub mod notify;

mod navbar;
pub use navbar::{Navbar, NavItem, UserMenu};

mod note_card;
pub use note_card::NoteCard;

mod note_form;
pub use note_form::NoteForm;

mod search_box;
pub use search_box::SearchBox;
