//! Local document persistence.
//!
//! The application shell keeps every document in one JSON file, the
//! counterpart of the browser-local store the editor runs against. A record
//! carries the serialized editor content plus the metadata the document
//! list shows. Reads are total: a missing or corrupt store behaves like an
//! empty one and only writes can fail.

use displaydoc::Display;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Possible error when writing to the document store
#[derive(Debug, Display, Error)]
pub enum StoreError {
    /// failed to write the store file
    Io(#[from] io::Error),
    /// failed to encode the document list
    Encode(#[from] serde_json::Error),
}

/// The metadata of a stored document, as shown in the document list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    /// The identifier the document is looked up by
    pub id: String,
    /// The display title
    pub title: String,
    /// The page background color
    pub background: String,
    /// When the document was last saved, in milliseconds since the epoch
    pub last_edited: u64,
}

/// A stored document: its metadata plus the serialized editor content
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// The identifier the document is looked up by
    pub id: String,
    /// The display title
    pub title: String,
    /// The page background color
    pub background: String,
    /// The editor content, serialized as HTML
    pub content: String,
    /// When the document was last saved; stamped by [`DocumentStore::save`]
    #[new(default)]
    #[serde(default)]
    pub last_edited: u64,
}

impl DocumentRecord {
    /// The metadata of this record
    pub fn meta(&self) -> DocumentMeta {
        DocumentMeta {
            id: self.id.clone(),
            title: self.title.clone(),
            background: self.background.clone(),
            last_edited: self.last_edited,
        }
    }
}

/// A collection of documents persisted to a single JSON file
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    /// Create a store backed by the given file.
    ///
    /// Nothing is read or created until the first operation.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        DocumentStore { path: path.into() }
    }

    /// The metadata of every stored document, most recently edited first.
    pub fn documents(&self) -> Vec<DocumentMeta> {
        self.read_all().iter().map(DocumentRecord::meta).collect()
    }

    /// Look up a document by id.
    pub fn document(&self, id: &str) -> Option<DocumentRecord> {
        self.read_all().into_iter().find(|doc| doc.id == id)
    }

    /// Insert or replace a document, stamping its edit time and keeping the
    /// store sorted by recency.
    pub fn save(&self, record: DocumentRecord) -> Result<(), StoreError> {
        let record = DocumentRecord {
            last_edited: now_millis(),
            ..record
        };
        let mut docs = self.read_all();
        match docs.iter_mut().find(|doc| doc.id == record.id) {
            Some(existing) => *existing = record,
            None => docs.push(record),
        }
        docs.sort_by(|a, b| b.last_edited.cmp(&a.last_edited));
        self.write_all(&docs)
    }

    /// Remove a document by id.
    ///
    /// Removing from a store that was never written is a no-op.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut docs = self.read_all();
        docs.retain(|doc| doc.id != id);
        self.write_all(&docs)
    }

    fn read_all(&self) -> Vec<DocumentRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(docs) => docs,
            Err(err) => {
                warn!(
                    "failed to parse {}, treating the store as empty: {}",
                    self.path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    fn write_all(&self, docs: &[DocumentRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(docs)?;
        fs::write(&self.path, raw)?;
        debug!("wrote {} document(s) to {}", docs.len(), self.path.display());
        Ok(())
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
