//! # API Facade
//!
//! A thin facade over the contact intake functions. It is the single entry
//! point for everything that mutates or reads the message inbox, regardless
//! of the UI driving it.
//!
//! The facade does no business logic of its own — validation lives in
//! [`crate::contact`] and persistence behind [`MessageStore`]. It is generic
//! over the store so the same surface runs against `FileStore` in production
//! and `InMemoryStore` in tests.

use crate::contact::{self, SubmitForm};
use crate::error::Result;
use crate::model::{ContactMessage, MessageStatus};
use crate::store::MessageStore;
use uuid::Uuid;

/// The main API facade for message operations.
pub struct LokalApi<S: MessageStore> {
    store: S,
}

impl<S: MessageStore> LokalApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate and persist a contact form submission.
    pub fn submit_message(&mut self, form: &SubmitForm) -> Result<ContactMessage> {
        contact::submit(&mut self.store, form)
    }

    /// All stored messages, newest first.
    pub fn list_messages(&self) -> Result<Vec<ContactMessage>> {
        contact::messages(&self.store)
    }

    /// Update a message's workflow status and optional notes.
    pub fn update_message(
        &mut self,
        id: &Uuid,
        status: MessageStatus,
        notes: Option<String>,
    ) -> Result<ContactMessage> {
        contact::set_status(&mut self.store, id, status, notes)
    }
}
