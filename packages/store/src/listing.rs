//! Note list helpers shared by the dashboard and the public list.
//!
//! Search is purely local: a case-insensitive substring match over title and
//! body of whatever page is currently loaded.

use crate::models::Note;

/// Whether `note` matches the search `term` as typed. An empty term matches
/// everything; surrounding spaces are part of the term.
pub fn matches_search(note: &Note, term: &str) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }
    note.title.to_lowercase().contains(&term) || note.content.to_lowercase().contains(&term)
}

/// Notes matching `term`, in their original order.
pub fn filter_notes<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    notes.iter().filter(|n| matches_search(n, term)).collect()
}

/// Drop the note with `id`. Returns whether anything was removed.
pub fn remove_note(notes: &mut Vec<Note>, id: &str) -> bool {
    let before = notes.len();
    notes.retain(|n| n.id != id);
    notes.len() != before
}

/// State of the paginated public feed.
#[derive(Clone, Debug, PartialEq)]
pub struct PublicFeed {
    page: u32,
    total_pages: u32,
    notes: Vec<Note>,
}

impl Default for PublicFeed {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
            notes: Vec::new(),
        }
    }
}

impl PublicFeed {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Install a freshly fetched page, replacing whatever was shown before.
    pub fn replace_page(&mut self, page: u32, notes: Vec<Note>, total_pages: u32) {
        self.page = page.max(1);
        self.total_pages = total_pages.max(1);
        self.notes = notes;
    }

    /// Page buttons to render; empty when everything fits on one page.
    pub fn page_numbers(&self) -> Vec<u32> {
        if self.total_pages > 1 {
            (1..=self.total_pages).collect()
        } else {
            Vec::new()
        }
    }
}
