//! Contact list search.
//!
//! The filter is a borrowed view over the store: nothing is cached, and the
//! store itself is never reordered or trimmed by a query.

use crate::model::contact::Contact;
use crate::store::EntityStore;

/// Text shown in place of rows when a query matches nothing.
pub const NO_CONTACTS_MESSAGE: &str = "No contacts found";

/// What a list should render for a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Rows(usize),
    NoResults,
}

/// Contacts whose name or phone contains the query, case-insensitively.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    contacts: &'a [Contact],
    needle: String,
}

impl<'a> FilteredView<'a> {
    pub fn new(contacts: &'a [Contact], query: &str) -> Self {
        Self {
            contacts,
            needle: query.to_lowercase(),
        }
    }

    /// Matching contacts in store order. Each call starts from the top.
    pub fn iter(&self) -> impl Iterator<Item = &'a Contact> + '_ {
        self.contacts
            .iter()
            .filter(move |contact| matches_contact(contact, &self.needle))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn state(&self) -> ListState {
        match self.len() {
            0 => ListState::NoResults,
            count => ListState::Rows(count),
        }
    }

    pub fn to_vec(&self) -> Vec<Contact> {
        self.iter().cloned().collect()
    }
}

fn matches_contact(contact: &Contact, needle: &str) -> bool {
    contact.name.to_lowercase().contains(needle) || contact.phone.to_lowercase().contains(needle)
}

impl EntityStore<Contact> {
    /// Case-insensitive substring search over name and phone.
    ///
    /// An empty query matches every contact in store order.
    pub fn filter(&self, query: &str) -> FilteredView<'_> {
        FilteredView::new(self.records(), query)
    }
}
