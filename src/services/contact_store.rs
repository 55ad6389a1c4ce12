// src/services/contact_store.rs
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs::{OpenOptions, read_to_string};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::message::ContactForm;

/// A stored contact form submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Append-only submission log, one JSON object per line.
#[derive(Clone, Debug)]
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append a submission and return the id it was stored under.
    pub async fn add(&self, form: &ContactForm) -> std::io::Result<String> {
        let record = ContactRecord {
            id: Uuid::new_v4().to_string(),
            name: form.name.clone(),
            email: form.email.clone(),
            subject: form.subject.clone(),
            message: form.message.clone(),
            status: "new".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&record)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(json.as_bytes()).await?;
        file.write_all(b"\n").await?;

        Ok(record.id)
    }

    /// All stored submissions, newest first. Lines that fail to parse are
    /// skipped; a missing file is an empty store.
    pub async fn list(&self) -> Vec<ContactRecord> {
        let content = read_to_string(&self.path).await.unwrap_or_default();
        let mut records: Vec<ContactRecord> = content
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect();
        records.reverse();
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            subject: None,
            message: "hi".to_string(),
        }
    }

    #[tokio::test]
    async fn add_then_list_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContactStore::new(dir.path().join("contacts.jsonl"));

        let first = store.add(&form("alice")).await.unwrap();
        let second = store.add(&form("bob")).await.unwrap();
        assert_ne!(first, second);

        let records = store.list().await;
        assert_eq!(records.len(), 2);
        // Newest first.
        assert_eq!(records[0].name, "bob");
        assert_eq!(records[0].status, "new");
        assert_eq!(records[1].id, first);
    }

    #[tokio::test]
    async fn missing_file_lists_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContactStore::new(dir.path().join("nope.jsonl"));
        assert!(store.list().await.is_empty());
    }
}
