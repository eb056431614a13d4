use crate::domain::ports::RecordStore;
use crate::error::AppError;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory store for tests and ephemeral sessions. Same single-writer
/// assumptions as the file store, minus the disk.
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Value>, AppError> {
        let documents = self.documents.lock().unwrap_or_else(|e| e.into_inner());
        Ok(documents.get(key).cloned())
    }

    fn write(&self, key: &str, value: &Value) -> Result<(), AppError> {
        let mut documents = self.documents.lock().unwrap_or_else(|e| e.into_inner());
        documents.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut documents = self.documents.lock().unwrap_or_else(|e| e.into_inner());
        documents.remove(key);
        Ok(())
    }
}
