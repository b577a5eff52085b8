//! # Message Storage Layer
//!
//! This module defines the storage abstraction for contact messages. The
//! [`MessageStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, hosted API, etc.) without changing
//!   the intake logic
//! - Keep validation **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Each message is one JSON document: `{date}-{name}-{id}.json`
//!   - The filename alone tells a human when the message arrived and who
//!     sent it
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution

use crate::error::Result;
use crate::model::{ContactMessage, MessageStatus};
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for contact message storage.
///
/// Implementations must persist each message as an independent record so a
/// failure writing one can never corrupt another.
pub trait MessageStore {
    /// Persist a new message
    fn save_message(&mut self, message: &ContactMessage) -> Result<()>;

    /// List all messages, newest first
    fn list_messages(&self) -> Result<Vec<ContactMessage>>;

    /// Get a message by ID
    fn get_message(&self, id: &Uuid) -> Result<ContactMessage>;

    /// Update the workflow status and optional handling notes of a message
    fn update_message(
        &mut self,
        id: &Uuid,
        status: MessageStatus,
        notes: Option<String>,
    ) -> Result<ContactMessage>;
}
