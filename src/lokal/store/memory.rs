use super::MessageStore;
use crate::error::{LokalError, Result};
use crate::model::{ContactMessage, MessageStatus};
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory message store for testing. No persistence.
#[derive(Default)]
pub struct InMemoryStore {
    messages: HashMap<Uuid, ContactMessage>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageStore for InMemoryStore {
    fn save_message(&mut self, message: &ContactMessage) -> Result<()> {
        self.messages.insert(message.id, message.clone());
        Ok(())
    }

    fn list_messages(&self) -> Result<Vec<ContactMessage>> {
        let mut messages: Vec<ContactMessage> = self.messages.values().cloned().collect();
        messages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(messages)
    }

    fn get_message(&self, id: &Uuid) -> Result<ContactMessage> {
        self.messages
            .get(id)
            .cloned()
            .ok_or(LokalError::MessageNotFound(*id))
    }

    fn update_message(
        &mut self,
        id: &Uuid,
        status: MessageStatus,
        notes: Option<String>,
    ) -> Result<ContactMessage> {
        let message = self
            .messages
            .get_mut(id)
            .ok_or(LokalError::MessageNotFound(*id))?;
        message.status = status;
        if let Some(notes) = notes {
            message.notes = notes;
        }
        Ok(message.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str) -> ContactMessage {
        ContactMessage::new(
            name.to_string(),
            "jan@example.com".to_string(),
            "600100200".to_string(),
            String::new(),
            "Is unit 4-b-1 still available?".to_string(),
            true,
            false,
        )
    }

    #[test]
    fn save_then_get() {
        let mut store = InMemoryStore::new();
        let msg = message("Jan");
        store.save_message(&msg).unwrap();
        assert_eq!(store.get_message(&msg.id).unwrap().name, "Jan");
    }

    #[test]
    fn update_changes_status_and_keeps_notes_when_none() {
        let mut store = InMemoryStore::new();
        let msg = message("Jan");
        store.save_message(&msg).unwrap();

        store
            .update_message(&msg.id, MessageStatus::Resolved, Some("done".to_string()))
            .unwrap();
        let updated = store
            .update_message(&msg.id, MessageStatus::InProgress, None)
            .unwrap();
        assert_eq!(updated.status, MessageStatus::InProgress);
        assert_eq!(updated.notes, "done");
    }

    #[test]
    fn missing_id_is_not_found() {
        let store = InMemoryStore::new();
        assert!(matches!(
            store.get_message(&Uuid::new_v4()),
            Err(LokalError::MessageNotFound(_))
        ));
    }
}
