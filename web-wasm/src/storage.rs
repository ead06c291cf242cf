//! localStorage への保存
//!
//! 一覧全体を1つのJSON配列として `tabOrganizerDocuments` に置く。

use demo_gallery_common::organizer::{DocumentRecord, DocumentStore, STORAGE_KEY};
use demo_gallery_common::{Error, Result};
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn to_common(e: StorageError) -> Error {
    match e {
        StorageError::SerdeError(e) => Error::Json(e),
        other => Error::Storage(other.to_string()),
    }
}

impl DocumentStore for LocalStore {
    fn load(&self) -> Result<Vec<DocumentRecord>> {
        match LocalStorage::get::<Vec<DocumentRecord>>(STORAGE_KEY) {
            Ok(documents) => Ok(documents),
            Err(StorageError::KeyNotFound(_)) => Ok(Vec::new()),
            Err(e) => Err(to_common(e)),
        }
    }

    fn save(&mut self, documents: &[DocumentRecord]) -> Result<()> {
        LocalStorage::set(STORAGE_KEY, documents).map_err(to_common)
    }
}
