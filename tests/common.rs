use recepto_leads::config::Config;
use recepto_leads::infra::factory::bootstrap_state;
use recepto_leads::state::AppState;
use tempfile::TempDir;

/// A full AppState over a throwaway data directory, so every test exercises
/// the real JSON file store end to end.
pub struct TestApp {
    pub state: AppState,
    data_dir: TempDir,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("tempdir");
        let config = Config {
            data_dir: data_dir.path().to_path_buf(),
        };
        let state = bootstrap_state(&config).expect("bootstrap");
        Self { state, data_dir }
    }

    /// Rebuilds the state over the same data directory, simulating a page
    /// reload against the persisted documents.
    pub fn reload(&self) -> AppState {
        let config = Config {
            data_dir: self.data_dir.path().to_path_buf(),
        };
        bootstrap_state(&config).expect("bootstrap on reload")
    }

    /// Overwrites one stored document with raw bytes, valid JSON or not.
    pub fn corrupt_document(&self, key: &str, contents: &str) {
        std::fs::write(
            self.data_dir.path().join(format!("{key}.json")),
            contents,
        )
        .expect("write document");
    }
}
