use super::MessageStore;
use crate::error::{LokalError, Result};
use crate::model::{ContactMessage, MessageStatus};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const NAME_SLUG_MAX: usize = 40;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(LokalError::Io)?;
        }
        Ok(())
    }

    /// One file per message: `{date}-{name}-{id}.json`. The date and the
    /// sender make the directory scannable by eye; the ID keeps the name
    /// unique.
    fn message_filename(message: &ContactMessage) -> String {
        format!(
            "{}-{}-{}.json",
            message.timestamp.format("%Y-%m-%d"),
            sanitize_name(&message.name),
            message.id
        )
    }

    /// Find the file for a given ID. The date/name prefix is unknown at
    /// lookup time, so this scans for the ID suffix.
    fn find_message_file(&self, id: &Uuid) -> Result<Option<PathBuf>> {
        if !self.root.exists() {
            return Ok(None);
        }
        let suffix = format!("-{}.json", id);
        for entry in fs::read_dir(&self.root).map_err(LokalError::Io)? {
            let path = entry.map_err(LokalError::Io)?.path();
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.ends_with(&suffix) {
                    return Ok(Some(path));
                }
            }
        }
        Ok(None)
    }

    fn read_message(path: &Path) -> Result<ContactMessage> {
        let content = fs::read_to_string(path).map_err(LokalError::Io)?;
        let message = serde_json::from_str(&content).map_err(LokalError::Serialization)?;
        Ok(message)
    }

    fn write_message(&self, path: &Path, message: &ContactMessage) -> Result<()> {
        let content = serde_json::to_string_pretty(message).map_err(LokalError::Serialization)?;
        fs::write(path, content).map_err(LokalError::Io)?;
        Ok(())
    }
}

/// Lowercases the sender name and reduces it to a filesystem-safe slug:
/// runs of non-alphanumeric characters collapse to a single `-`, edges are
/// trimmed, and the result is capped so pathological input cannot blow up
/// the filename.
fn sanitize_name(name: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
        if slug.len() >= NAME_SLUG_MAX {
            break;
        }
    }
    if slug.is_empty() {
        slug.push_str("anonymous");
    }
    slug
}

impl MessageStore for FileStore {
    fn save_message(&mut self, message: &ContactMessage) -> Result<()> {
        self.ensure_dir()?;
        let path = self.root.join(Self::message_filename(message));
        self.write_message(&path, message)
    }

    fn list_messages(&self) -> Result<Vec<ContactMessage>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut messages = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(LokalError::Io)? {
            let path = entry.map_err(LokalError::Io)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            // A single unreadable file shouldn't hide the rest of the inbox.
            if let Ok(message) = Self::read_message(&path) {
                messages.push(message);
            }
        }
        messages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(messages)
    }

    fn get_message(&self, id: &Uuid) -> Result<ContactMessage> {
        let path = self
            .find_message_file(id)?
            .ok_or(LokalError::MessageNotFound(*id))?;
        Self::read_message(&path)
    }

    fn update_message(
        &mut self,
        id: &Uuid,
        status: MessageStatus,
        notes: Option<String>,
    ) -> Result<ContactMessage> {
        let path = self
            .find_message_file(id)?
            .ok_or(LokalError::MessageNotFound(*id))?;
        let mut message = Self::read_message(&path)?;
        message.status = status;
        if let Some(notes) = notes {
            message.notes = notes;
        }
        self.write_message(&path, &message)?;
        Ok(message)
    }
}
