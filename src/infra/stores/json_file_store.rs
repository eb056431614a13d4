use crate::domain::ports::RecordStore;
use crate::error::AppError;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One JSON file per document under a data directory. Writes go through a
/// temp file and rename so a crash mid-write cannot leave a half-written
/// document. Concurrent processes are not coordinated: last write wins.
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl RecordStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<Value>, AppError> {
        let path = self.path_for(key);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let value = serde_json::from_str(&text).map_err(|e| AppError::StorageParse {
            document: key.to_string(),
            source: e,
        })?;
        Ok(Some(value))
    }

    fn write(&self, key: &str, value: &Value) -> Result<(), AppError> {
        let path = self.path_for(key);
        let tmp = self.data_dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, serde_json::to_string_pretty(value).map_err(|e| {
            AppError::StorageParse {
                document: key.to_string(),
                source: e,
            }
        })?)?;
        fs::rename(&tmp, &path)?;
        debug!(key, "document written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn write_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();

        let doc = json!({"leads": [1, 2, 3]});
        store.write("leads", &doc).unwrap();
        assert_eq!(store.read("leads").unwrap(), Some(doc));
    }

    #[test]
    fn missing_document_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        assert!(store.read("nothing").unwrap().is_none());
    }

    #[test]
    fn garbage_file_yields_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        fs::write(dir.path().join("leads.json"), "{not json").unwrap();

        let err = store.read("leads").unwrap_err();
        assert!(err.is_parse_failure());
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        store.write("logged_user", &json!({"id": "user1"})).unwrap();
        store.remove("logged_user").unwrap();
        store.remove("logged_user").unwrap();
        assert!(store.read("logged_user").unwrap().is_none());
    }
}
